//!
//! app.rs
//! 应用主循环
//!
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     while let Some(outcome) = backend.try_next()    // 收取后台完成的查询结果
//!         update::update(app, backend, LookupFinished(outcome))
//!     if let Some(event) = poll_event() {             // 轮询输入，最多等待 100ms
//!         let msg = handle_event(event, &app);
//!         update::update(app, backend, msg)
//!     }
//!     app.tick()                                      // 推进加载动画
//! }

use std::time::Duration;

use anyhow::Result;

use crate::backend::ValidationService;
use crate::event;
use crate::message::{AppMessage, FormMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, backend: &mut ValidationService) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 应用已完成的查询
        while let Some(outcome) = backend.try_next() {
            update::update(
                app,
                backend,
                AppMessage::Form(FormMessage::LookupFinished(outcome)),
            );
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, backend, msg);
        }

        app.tick();
    }

    Ok(())
}
