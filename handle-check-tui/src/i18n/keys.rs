//! 翻译键定义
//!
//! 按 UI 组件位置分类：表单内容归 `form.*`，键盘提示归 `hints.*`，
//! 状态栏消息归 `status.*`，帮助弹窗归 `help.*`。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本
    pub common: CommonTexts,
    /// 表单文本
    pub form: FormTexts,
    /// 键盘提示
    pub hints: HintTexts,
    /// 状态栏消息
    pub status: StatusTexts,
    /// 帮助弹窗
    pub help: HelpTexts,
}

/// 通用文本
pub struct CommonTexts {
    pub app_name: &'static str,
}

/// 表单文本
pub struct FormTexts {
    /// 大标题
    pub heading: &'static str,
    /// 说明文字
    pub instructions: &'static str,
    /// 输入框标签
    pub label: &'static str,
    /// 输入框占位符
    pub placeholder: &'static str,
    /// 提交按钮
    pub next: &'static str,
    /// 校验中
    pub checking: &'static str,
    /// 校验通过
    pub valid: &'static str,
    /// 校验失败
    pub invalid: &'static str,
    /// 账号 ID 前缀
    pub resolved_id: &'static str,
    /// 主题切换按钮说明
    pub theme_toggle: &'static str,
}

/// 键盘提示（动作词）
pub struct HintTexts {
    pub submit: &'static str,
    pub activate: &'static str,
    pub switch_focus: &'static str,
    pub toggle_theme: &'static str,
    pub clear: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

/// 状态栏消息
pub struct StatusTexts {
    /// 提交了空白输入
    pub empty_handle: &'static str,
}

/// 帮助弹窗
pub struct HelpTexts {
    pub title: &'static str,
    /// (按键, 说明)
    pub entries: &'static [(&'static str, &'static str)],
    pub close_hint: &'static str,
}
