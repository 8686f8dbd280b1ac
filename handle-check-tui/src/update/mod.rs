//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//!
//!     mod form;       // 表单子消息处理
//!
//!     pub fn update(app: &mut App, backend: &ValidationService, msg: AppMessage)
//!
//! 提交时通过 backend 发起后台查询；查询结果以 FormMessage::LookupFinished
//! 的形式再次进入本层。
//!

mod form;

use crate::backend::ValidationService;
use crate::message::{AppMessage, FormMessage};
use crate::model::{App, FocusField};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, backend: &ValidationService, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::FocusNext => {
            app.focus = app.focus.next();
        }

        AppMessage::FocusPrev => {
            app.focus = app.focus.prev();
        }

        AppMessage::Activate => match app.focus {
            FocusField::Input | FocusField::Submit => {
                form::update(app, backend, FormMessage::Submit);
            }
            FocusField::ThemeToggle => app.form.toggle_theme(),
        },

        AppMessage::ToggleTheme => {
            app.form.toggle_theme();
        }

        AppMessage::ToggleHelp => {
            app.show_help = !app.show_help;
        }

        AppMessage::Form(form_msg) => {
            form::update(app, backend, form_msg);
        }

        AppMessage::Noop => {}
    }
}
