use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::TryRecvError;
use std::sync::Arc;
use std::time::Duration;

use super::bus::{kernel_bus, KernelBusReceiver, KernelBusSender, KernelMessage};
use super::ports::{AsyncExecutor, ExportMessage, ExportTarget, Exporter, ForestStore};
use crate::kernel::{Action, DispatchResult, Effect, Store};
use crate::models::Forest;

/// Wires a [`Store`] to its providers. Actions arriving on the bus are
/// applied one at a time, in order; effects are carried out right after the
/// action that produced them.
pub struct KernelServiceHost {
    store: Store,
    persistence: Arc<dyn ForestStore>,
    exporter: Arc<dyn Exporter>,
    executor: Arc<dyn AsyncExecutor>,
    bus: KernelBusSender,
    rx: KernelBusReceiver,
    next_job: AtomicU64,
    notices: Vec<Notice>,
    exports: Vec<ExportMessage>,
}

/// A user-facing rejection waiting for the host UI to show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
}

impl KernelServiceHost {
    pub fn new(
        store: Store,
        persistence: Arc<dyn ForestStore>,
        exporter: Arc<dyn Exporter>,
        executor: Arc<dyn AsyncExecutor>,
    ) -> Self {
        let (bus, rx) = kernel_bus();
        Self {
            store,
            persistence,
            exporter,
            executor,
            bus,
            rx,
            next_job: AtomicU64::new(1),
            notices: Vec::new(),
            exports: Vec::new(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn sender(&self) -> KernelBusSender {
        self.bus.clone()
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let result = self.store.dispatch(action);
        for effect in &result.effects {
            self.run_effect(effect);
        }
        result
    }

    /// Drains everything currently queued on the bus. Returns whether the
    /// tree changed.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.rx.try_recv() {
                Ok(msg) => changed |= self.handle(msg),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        changed
    }

    /// Blocks until the next bus message arrives or `timeout` passes.
    pub fn pump_blocking(&mut self, timeout: Duration) -> Option<bool> {
        let msg = self.rx.recv_timeout(timeout).ok()?;
        Some(self.handle(msg))
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn take_exports(&mut self) -> Vec<ExportMessage> {
        std::mem::take(&mut self.exports)
    }

    fn handle(&mut self, msg: KernelMessage) -> bool {
        match msg {
            KernelMessage::Action(action) => self.dispatch(action).state_changed,
            KernelMessage::ExportFinished(done) => {
                tracing::info!(job = done.job, outcome = ?done.outcome, "export finished");
                self.exports.push(done);
                false
            }
        }
    }

    fn run_effect(&mut self, effect: &Effect) {
        match effect {
            Effect::PersistForest(forest) => self.persistence.save_best_effort(forest),
            Effect::Notify { title, message } => self.notices.push(Notice {
                title: *title,
                message: message.clone(),
            }),
            Effect::Export { forest, target } => self.spawn_export(forest.clone(), target.clone()),
        }
    }

    fn spawn_export(&self, forest: Forest, target: ExportTarget) {
        let job = self.next_job.fetch_add(1, Ordering::Relaxed);
        let exporter = Arc::clone(&self.exporter);
        let bus = self.bus.clone();
        tracing::info!(job, ?target, "export started");
        self.executor.spawn(Box::pin(async move {
            let outcome = exporter.export(forest, target).await;
            let report = KernelMessage::ExportFinished(ExportMessage { job, outcome });
            if bus.send(report).is_err() {
                tracing::debug!(job, "export result dropped, host is gone");
            }
        }));
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/services/host.rs"]
mod tests;
