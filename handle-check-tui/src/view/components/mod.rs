//! UI 组件

pub mod form;
pub mod help;
pub mod statusbar;
