use super::*;
use crate::kernel::services::adapters::ExportRuntime;
use crate::kernel::services::ports::{BoxFuture, BuilderConfig, ExportOutcome, StoreError};
use crate::models::{default_forest, NodeId, NodeKind, TreeNode};
use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Default)]
struct MemoryStore {
    saved: Mutex<Vec<Forest>>,
}

impl ForestStore for MemoryStore {
    fn load(&self) -> Result<Option<Forest>, StoreError> {
        Ok(self.saved.lock().unwrap().last().cloned())
    }

    fn save(&self, forest: &[TreeNode]) -> Result<(), StoreError> {
        self.saved.lock().unwrap().push(forest.to_vec());
        Ok(())
    }
}

/// Reports how many nodes it was handed.
struct CountingExporter;

impl Exporter for CountingExporter {
    fn export(&self, forest: Forest, target: ExportTarget) -> BoxFuture<'_, ExportOutcome> {
        Box::pin(async move {
            match target {
                ExportTarget::Folder(None) => ExportOutcome::Aborted,
                _ => ExportOutcome::Completed {
                    location: PathBuf::from(format!("{}", crate::models::count_nodes(&forest))),
                },
            }
        })
    }
}

fn host(persistence: Arc<MemoryStore>) -> KernelServiceHost {
    let store = Store::with_forest(default_forest(), BuilderConfig::default());
    KernelServiceHost::new(
        store,
        persistence,
        Arc::new(CountingExporter),
        Arc::new(ExportRuntime::new().unwrap()),
    )
}

fn add_action(name: &str) -> Action {
    Action::AddItem {
        parent: NodeId::root(),
        kind: NodeKind::File,
        name: name.to_string(),
    }
}

#[test]
fn test_bus_actions_apply_in_order_and_persist() {
    let persistence = Arc::new(MemoryStore::default());
    let mut host = host(Arc::clone(&persistence));
    let sender = host.sender();

    sender.send_action(add_action("a")).unwrap();
    sender.send_action(add_action("A")).unwrap();
    sender.send_action(add_action("b")).unwrap();
    sender.send_action(Action::Undo).unwrap();

    assert!(host.pump());
    let names: Vec<&str> = host.store().forest()[0]
        .children()
        .iter()
        .map(|n| n.name.as_str())
        .collect();
    assert_eq!(names, ["a"]);

    // add a, add b, undo; the rejected duplicate is not saved
    assert_eq!(persistence.saved.lock().unwrap().len(), 3);

    let notices = host.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Name Conflict");
    assert!(host.take_notices().is_empty());
}

#[test]
fn test_export_uses_snapshot_at_call() {
    let persistence = Arc::new(MemoryStore::default());
    let mut host = host(persistence);

    host.dispatch(add_action("a"));
    host.dispatch(Action::Export(ExportTarget::Zip(PathBuf::from("out.zip"))));
    host.dispatch(add_action("b"));

    assert_eq!(host.pump_blocking(Duration::from_secs(5)), Some(false));
    let exports = host.take_exports();
    assert_eq!(exports.len(), 1);
    assert_eq!(exports[0].job, 1);
    // root + "a", not "b"
    assert_eq!(
        exports[0].outcome,
        ExportOutcome::Completed {
            location: PathBuf::from("2")
        }
    );
    assert_eq!(host.store().forest()[0].children().len(), 2);
}

#[test]
fn test_cancelled_export_is_reported_as_abort() {
    let mut host = host(Arc::new(MemoryStore::default()));
    host.dispatch(Action::Export(ExportTarget::Folder(None)));
    host.pump_blocking(Duration::from_secs(5));
    let exports = host.take_exports();
    assert_eq!(exports[0].outcome, ExportOutcome::Aborted);
    assert!(host.take_notices().is_empty());
}

/// Holds spawned jobs so a test decides when they run.
#[derive(Default)]
struct HeldExecutor {
    jobs: Mutex<Vec<BoxFuture<'static>>>,
}

impl AsyncExecutor for HeldExecutor {
    fn spawn(&self, task: BoxFuture<'static>) {
        self.jobs.lock().unwrap().push(task);
    }
}

#[test]
fn test_export_finishing_after_host_drop_is_quiet() {
    let executor = Arc::new(HeldExecutor::default());
    let mut host = KernelServiceHost::new(
        Store::with_forest(default_forest(), BuilderConfig::default()),
        Arc::new(MemoryStore::default()),
        Arc::new(CountingExporter),
        executor.clone(),
    );
    host.dispatch(Action::Export(ExportTarget::Zip(PathBuf::from("out.zip"))));
    drop(host);

    let jobs = std::mem::take(&mut *executor.jobs.lock().unwrap());
    assert_eq!(jobs.len(), 1);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    for job in jobs {
        runtime.block_on(job);
    }
}
