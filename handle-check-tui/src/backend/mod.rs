//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 解耦，负责 UI 线程之外的一切：
//!
//!     mod config_service;         // 配置加载（JSON 文件 + 环境变量）
//!     mod validation_service;     // 校验请求的异步桥接
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户按下 Enter
//!         ↓
//!     Update 层处理 FormMessage::Submit，Validator::begin() 立即置为 Checking
//!         ↓
//!     ValidationService::submit() 在 tokio 运行时上发起 checkName 请求
//!         ↓
//!     请求结束，CheckOutcome 经 mpsc 通道送回
//!         ↓
//!     主循环 try_next() 取出结果，交给 Update 层（FormMessage::LookupFinished）
//!         ↓
//!     Validator::complete() 更新表单状态，View 层重新渲染
//!
//!     表单状态只在 UI 线程上修改。
//!

mod config_service;
mod validation_service;

pub use config_service::{AppConfig, ConfigService, JsonConfigService};
pub use validation_service::ValidationService;
