use std::future::Future;
use std::pin::Pin;

use crate::errors::ArchiveResult;

/// A boxed, `'static` future — the shape `TaskRunner::spawn` accepts.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Pluggable embedding model. Synchronous per the archive's control flow:
/// `add_thought` and `retrieve` both call `embed` inline and propagate
/// failure as fatal to the call.
pub trait Embedder: Send + Sync {
    /// Embed `text`, returning a dense vector. Dimensionality must match
    /// the `VectorStore`'s established dimension after the first insert.
    fn embed(&self, text: &str) -> ArchiveResult<Vec<f32>>;
}

/// Pluggable entity extractor. Asynchronous and may fail; failure during
/// background extraction is logged and swallowed — the thought persists
/// with whatever entities it already had (typically none).
#[async_trait::async_trait]
pub trait EntityExtractor: Send + Sync {
    /// Extract canonical `Type:Value` entity strings from `text`.
    async fn extract(&self, text: &str) -> ArchiveResult<Vec<String>>;
}

/// Fire-and-forget scheduler for background work, tracking outstanding
/// tasks so tests (and graceful shutdown) can observe lifecycle without
/// the caller holding a handle.
pub trait TaskRunner: Send + Sync {
    /// Schedule `fut` to run in the background. Does not block and does
    /// not return a handle; terminal failures are the callee's
    /// responsibility to log.
    fn spawn(&self, fut: BoxFuture<'static, ()>);

    /// Number of tasks submitted via `spawn` that have not yet completed.
    /// Used by tests to assert on background-task lifecycle; not part of
    /// the archive's correctness contract.
    fn outstanding(&self) -> usize;
}
