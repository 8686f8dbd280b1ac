//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//!     mod layout;         // 主布局：标题栏 + 表单卡片 + 状态栏
//!     mod theme;          // 浅色/深色配色
//!     mod components;     // 表单卡片、状态栏、帮助弹窗
//!
//! View 层只读取 Model。配色由 `FormState::theme()` 得出后逐层传入，
//! 不存在全局主题状态。
//!

mod components;
mod layout;
mod theme;

pub use layout::render;
