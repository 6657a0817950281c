use crate::kernel::services::ports::{AsyncExecutor, BoxFuture};
use std::io;

/// Owns the tokio runtime export jobs run on. Jobs report back through the
/// kernel bus, so the command path never waits on them.
pub struct ExportRuntime {
    runtime: tokio::runtime::Runtime,
}

impl ExportRuntime {
    pub fn new() -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self { runtime })
    }
}

impl AsyncExecutor for ExportRuntime {
    fn spawn(&self, task: BoxFuture<'static>) {
        self.runtime.spawn(task);
    }
}
