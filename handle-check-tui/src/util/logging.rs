//! 日志初始化
//!
//! 核心库通过 `log` 门面输出，这里安装 tracing 订阅器把它们一并写入文件。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// 默认日志文件名
const LOG_FILE_NAME: &str = "handle-check.log";

/// 持有后台写线程，drop 时刷新剩余日志
pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_file: PathBuf,
}

impl LoggingGuard {
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }
}

/// 默认日志路径：<cache_dir>/handle-check/handle-check.log
pub fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("handle-check")
        .join(LOG_FILE_NAME)
}

/// 安装文件日志订阅器
///
/// 过滤级别取 `RUST_LOG`，未设置时为 `info`
pub fn init_logging(log_file: Option<&Path>) -> Result<LoggingGuard> {
    let log_file = log_file.map_or_else(default_log_file, Path::to_path_buf);
    let dir = log_file
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    let file_name = log_file
        .file_name()
        .map_or_else(|| LOG_FILE_NAME.into(), ToOwned::to_owned);

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("failed to install log subscriber")?;

    tracing::info!(log_file = %log_file.display(), "logging initialized");

    Ok(LoggingGuard {
        _guard: guard,
        log_file,
    })
}
