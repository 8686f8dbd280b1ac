//! 应用主消息枚举

use super::FormMessage;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点移到下一个控件
    FocusNext,

    /// 焦点移到上一个控件
    FocusPrev,

    /// 在当前焦点控件上确认（Enter）
    Activate,

    /// 切换浅色/深色主题
    ToggleTheme,

    /// 显示/隐藏帮助
    ToggleHelp,

    /// 表单相关消息
    Form(FormMessage),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
