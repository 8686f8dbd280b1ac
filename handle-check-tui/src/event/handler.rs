//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 窗口大小改变等事件：下一轮循环自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 帮助弹窗打开时，Esc / F1 关闭弹窗，其余按键忽略
    if app.show_help {
        if DefaultKeymap::HELP.matches(&key) || DefaultKeymap::BACK.matches(&key) {
            return AppMessage::ToggleHelp;
        }
        return AppMessage::Noop;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ToggleHelp;
    }

    if DefaultKeymap::TOGGLE_THEME.matches(&key) || DefaultKeymap::TOGGLE_THEME_ALT.matches(&key) {
        return AppMessage::ToggleTheme;
    }

    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return AppMessage::FocusNext;
    }

    // 部分终端的 BackTab 不带 SHIFT 修饰
    if DefaultKeymap::FOCUS_PREV.matches(&key) || key.code == KeyCode::BackTab {
        return AppMessage::FocusPrev;
    }

    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }

    if DefaultKeymap::ACTIVATE.matches(&key) {
        return AppMessage::Activate;
    }

    if app.focus.is_input() {
        handle_input_keys(key)
    } else {
        AppMessage::Noop
    }
}

/// 处理输入框的按键
fn handle_input_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CLEAR.matches(&key) {
        return AppMessage::Form(FormMessage::Clear);
    }

    if DefaultKeymap::BACKSPACE.matches(&key) {
        return AppMessage::Form(FormMessage::Backspace);
    }

    match key.code {
        // 只接受无修饰或 Shift 的可打印字符
        KeyCode::Char(c)
            if (key.modifiers - KeyModifiers::SHIFT).is_empty() && !c.is_control() =>
        {
            AppMessage::Form(FormMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}
