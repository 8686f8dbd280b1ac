//! 校验服务
//!
//! 持有 tokio 运行时，把 checkName 请求放到后台执行，
//! 结果通过通道交还给 UI 主循环。请求之间互不等待，也不会被取消；
//! 过期结果由 Validator 的票据机制丢弃。

use std::sync::Arc;

use anyhow::{Context, Result};
use handle_check_core::{CheckOutcome, HandleLookup, Submission, Validator};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// 后台校验服务
pub struct ValidationService {
    runtime: Runtime,
    lookup: Arc<dyn HandleLookup>,
    tx: UnboundedSender<CheckOutcome>,
    rx: UnboundedReceiver<CheckOutcome>,
}

impl ValidationService {
    /// 创建服务并启动后台运行时
    pub fn new(lookup: Arc<dyn HandleLookup>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("handle-check-io")
            .enable_all()
            .build()
            .context("failed to start async runtime")?;
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            runtime,
            lookup,
            tx,
            rx,
        })
    }

    /// 发起一次查询（立即返回）
    pub fn submit(&self, submission: Submission) {
        let lookup = Arc::clone(&self.lookup);
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let outcome = Validator::check(lookup.as_ref(), submission).await;
            if tx.send(outcome).is_err() {
                log::debug!("UI closed before lookup finished");
            }
        });
    }

    /// 取出一条已完成的结果（不阻塞）
    pub fn try_next(&mut self) -> Option<CheckOutcome> {
        self.rx.try_recv().ok()
    }
}
