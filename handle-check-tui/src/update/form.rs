//! 表单更新逻辑

use handle_check_core::{Completion, SubmitRejected};

use crate::backend::ValidationService;
use crate::message::FormMessage;
use crate::model::App;

/// 处理表单消息
pub fn update(app: &mut App, backend: &ValidationService, msg: FormMessage) {
    match msg {
        FormMessage::Input(c) => {
            app.form.push_char(c);
            app.clear_status();
        }

        FormMessage::Backspace => {
            app.form.pop_char();
        }

        FormMessage::Clear => {
            app.form.clear_handle();
        }

        FormMessage::Submit => submit(app, backend),

        FormMessage::LookupFinished(outcome) => {
            // 失败原因只写日志，不展示给用户
            if let Completion::Stale = app.validator.complete(&mut app.form, outcome) {
                return;
            }
            app.clear_status();
        }
    }
}

/// 提交当前输入：立即进入 Checking，随后在后台查询
fn submit(app: &mut App, backend: &ValidationService) {
    match app.validator.begin(&mut app.form) {
        Ok(submission) => {
            app.clear_status();
            backend.submit(submission);
        }
        Err(SubmitRejected::EmptyHandle) => {
            let texts = app.texts();
            app.set_status(texts.status.empty_handle);
        }
    }
}
