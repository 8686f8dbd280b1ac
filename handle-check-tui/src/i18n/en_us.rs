//! 英文翻译 (en-US)

use super::keys::{CommonTexts, FormTexts, HelpTexts, HintTexts, StatusTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Handle Check",
    },

    form: FormTexts {
        heading: "Welcome!",
        instructions: "Enter the twitter handle of the account whose following list you want to copy.",
        label: "Twitter Handle",
        placeholder: "TedTalks",
        next: "NEXT",
        checking: "Checking",
        valid: "Valid",
        invalid: "Invalid",
        resolved_id: "Account ID",
        theme_toggle: "Theme",
    },

    hints: HintTexts {
        submit: "Submit",
        activate: "Activate",
        switch_focus: "Switch Focus",
        toggle_theme: "Theme",
        clear: "Clear",
        help: "Help",
        quit: "Quit",
    },

    status: StatusTexts {
        empty_handle: "Enter a handle first",
    },

    help: HelpTexts {
        title: "Help",
        entries: &[
            ("Enter / Alt+n", "Check the handle"),
            ("Tab / Shift+Tab", "Move focus between input, NEXT and theme"),
            ("Backspace", "Delete last character"),
            ("Ctrl+u", "Clear the handle"),
            ("Alt+t / F2", "Toggle light / dark theme"),
            ("F1", "Show / hide this help"),
            ("Esc / Alt+q / Ctrl+c", "Quit"),
        ],
        close_hint: "Press F1 or Esc to close",
    },
};
