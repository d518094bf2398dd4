use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use archive_core::traits::BoxFuture;
use archive_core::TaskRunner;

/// Fire-and-forget scheduler for background entity extraction. Spawns
/// each future onto the ambient `tokio` runtime and tracks how many are
/// still in flight; used only for test assertions and shutdown logging,
/// never to await individual tasks.
#[derive(Debug, Default)]
pub struct TokioTaskRunner {
    outstanding: Arc<AtomicUsize>,
}

impl TokioTaskRunner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskRunner for TokioTaskRunner {
    fn spawn(&self, fut: BoxFuture<'static, ()>) {
        let outstanding = Arc::clone(&self.outstanding);
        outstanding.fetch_add(1, Ordering::SeqCst);
        tokio::spawn(async move {
            fut.await;
            outstanding.fetch_sub(1, Ordering::SeqCst);
        });
    }

    fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::SeqCst)
    }
}

/// Spin until `runner.outstanding() == 0`, yielding to the executor each
/// iteration. Tests use this to observe background entity extraction
/// having converged without sleeping a fixed duration.
pub async fn wait_for_quiescence(runner: &TokioTaskRunner) {
    while runner.outstanding() > 0 {
        tokio::task::yield_now().await;
    }
}
