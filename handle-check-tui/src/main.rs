//! Handle Check TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与后台查询 (`backend/`)
//!
//! 启动顺序：
//!     加载配置 → 初始化日志 → 创建 checkName 客户端与后台服务
//!     → 初始化终端 → 主循环 → 恢复终端（无论成功与否）

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use handle_check_core::HttpHandleLookup;

use backend::{ConfigService, JsonConfigService, ValidationService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 加载配置
    let config_service = JsonConfigService::new();
    let config = config_service.load()?;

    // 2. 初始化日志（写入文件，不干扰终端）
    let logging = init_logging(config.log_file.as_deref())?;
    log::info!(
        "Starting Handle Check (endpoint={}, config={}, log={})",
        config.endpoint,
        config_service.path().display(),
        logging.log_file().display()
    );

    // 3. 创建后台服务
    let lookup = HttpHandleLookup::new(&config.endpoint)
        .with_context(|| format!("cannot use endpoint {}", config.endpoint))?;
    let mut backend = ValidationService::new(Arc::new(lookup))?;

    // 4. 创建应用实例
    let mut app = model::App::new(&config);
    log::debug!("UI language: {}", app.language.code());

    // 5. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut backend);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {e:#}");
    }
    result
}
