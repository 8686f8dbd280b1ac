//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!     mod handler;        // 事件处理器
//!     mod keymap;         // 快捷键映射
//!
//!     · poll_event      事件轮询，受 app.rs 主循环调用，最长等待 timeout
//!     · handle_event    事件分发：
//!           - 帮助弹窗打开时，只响应关闭与退出
//!           - 全局快捷键（退出、主题、帮助、Tab 切换焦点），就地处理
//!           - 焦点在输入框时，字符/退格进入 FormMessage
//!           - Enter 在当前焦点控件上确认
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
