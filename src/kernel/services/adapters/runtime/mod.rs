//! Async runtime adapter: runs export jobs off the command path.

mod async_runtime;

pub use async_runtime::ExportRuntime;
