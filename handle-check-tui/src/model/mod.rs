//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//!     mod app;        // 应用主状态 App
//!     mod focus;      // 表单内的焦点位置
//!
//! 表单数据（输入、校验状态、主题）来自 handle-check-core 的 FormState，
//! 只能通过其字段级更新函数修改；校验状态只由 Validator 写入。
//!

mod app;
mod focus;

pub use app::App;
pub use focus::FocusField;
