//!
//! src/message/mod.rs
//! Message 层：事件消息
//!
//!     mod app;        // AppMessage：全局消息
//!     mod form;       // FormMessage：表单消息（输入、提交、查询完成）
//!
//! Event 层把按键翻译成消息，主循环把后台返回的查询结果包装成
//! FormMessage::LookupFinished，二者都交给 Update 层处理。
//!

mod app;
mod form;

pub use app::AppMessage;
pub use form::FormMessage;
