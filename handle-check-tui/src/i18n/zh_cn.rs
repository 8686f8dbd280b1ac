//! 简体中文翻译 (zh-CN)

use super::keys::{CommonTexts, FormTexts, HelpTexts, HintTexts, StatusTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "账号校验",
    },

    form: FormTexts {
        heading: "欢迎！",
        instructions: "输入要复制其关注列表的 Twitter 账号。",
        label: "Twitter 账号",
        placeholder: "TedTalks",
        next: "下一步",
        checking: "校验中",
        valid: "有效",
        invalid: "无效",
        resolved_id: "账号 ID",
        theme_toggle: "主题",
    },

    hints: HintTexts {
        submit: "提交",
        activate: "确认",
        switch_focus: "切换焦点",
        toggle_theme: "主题",
        clear: "清空",
        help: "帮助",
        quit: "退出",
    },

    status: StatusTexts {
        empty_handle: "请先输入账号",
    },

    help: HelpTexts {
        title: "帮助",
        entries: &[
            ("Enter / Alt+n", "校验账号"),
            ("Tab / Shift+Tab", "在输入框、下一步、主题之间切换焦点"),
            ("Backspace", "删除最后一个字符"),
            ("Ctrl+u", "清空输入"),
            ("Alt+t / F2", "切换浅色 / 深色主题"),
            ("F1", "显示 / 隐藏帮助"),
            ("Esc / Alt+q / Ctrl+c", "退出"),
        ],
        close_hint: "按 F1 或 Esc 关闭",
    },
};
