use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use folder_builder::kernel::services::adapters::{
    ensure_settings_file, load_settings, parse_indented_preset, preset_to_text,
    resolve_forest_path, resolve_presets_path, BuiltinCatalog, ExportRuntime, JsonForestStore,
    LocalExporter, TemporaryPresets,
};
use folder_builder::kernel::services::ports::{
    ExportOutcome, ExportTarget, ForestStore, PresetCatalog, Settings,
};
use folder_builder::kernel::services::KernelServiceHost;
use folder_builder::kernel::{generate_outline, Action, Store};
use folder_builder::models::{to_preset_nodes, FolderPreset};

mod logging;

const EXPORT_WAIT: Duration = Duration::from_secs(60);

const USAGE: &str = "\
usage: folder-builder [command]

commands:
  show                  print the outline of the saved tree (default)
  list                  list available presets
  load <file|key>       replace the tree with a preset text file or preset key
  text                  print the saved tree in preset text form
  export-dir <dir>      create the folders and empty files under <dir>
  export-zip <path>     write the tree as a ZIP archive

options:
  -v, --verbose         echo warnings to stderr";

fn main() -> io::Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = take_flag(&mut args, &["-v", "--verbose"]);
    let _logging_guard = logging::init(verbose);

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "cannot create settings file");
    }
    let settings = load_settings().unwrap_or_default();
    let forest_path = resolve_forest_path(&settings).ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "cannot determine data directory")
    })?;

    let persistence = Arc::new(JsonForestStore::new(forest_path));
    let store = Store::with_forest(persistence.load_or_default(), settings.builder.clone());
    let runtime = Arc::new(ExportRuntime::new()?);
    let mut host = KernelServiceHost::new(store, persistence, Arc::new(LocalExporter), runtime);
    let catalog = build_catalog(&settings);

    let command = args.first().map(String::as_str).unwrap_or("show");
    let operand = args.get(1).map(String::as_str);
    match (command, operand) {
        ("show", _) => print!("{}", generate_outline(host.store().forest())),
        ("list", _) => list_presets(&catalog),
        ("load", Some(source)) => {
            let preset = resolve_preset(&catalog, source)?;
            host.dispatch(Action::LoadPreset {
                structure: preset.structure,
                root_name: preset.root_name,
            });
            print!("{}", generate_outline(host.store().forest()));
        }
        ("text", _) => {
            let forest = host.store().forest();
            let root_name = forest
                .first()
                .map(|root| root.name.clone())
                .unwrap_or_else(|| settings.builder.root_name.clone());
            let preset = FolderPreset {
                value: String::new(),
                label: root_name.clone(),
                category: None,
                description: None,
                root_name,
                structure: to_preset_nodes(forest),
            };
            print!("{}", preset_to_text(&preset));
        }
        ("export-dir", Some(dir)) => {
            run_export(&mut host, ExportTarget::Folder(Some(PathBuf::from(dir))))?
        }
        ("export-zip", Some(path)) => {
            run_export(&mut host, ExportTarget::Zip(PathBuf::from(path)))?
        }
        _ => {
            eprintln!("{USAGE}");
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "unknown command"));
        }
    }

    for notice in host.take_notices() {
        eprintln!("{}: {}", notice.title, notice.message);
    }
    Ok(())
}

fn take_flag(args: &mut Vec<String>, names: &[&str]) -> bool {
    let before = args.len();
    args.retain(|arg| !names.contains(&arg.as_str()));
    args.len() != before
}

fn build_catalog(settings: &Settings) -> BuiltinCatalog {
    match resolve_presets_path(settings) {
        Some(path) => BuiltinCatalog::with_temporary(TemporaryPresets::new(path)),
        None => BuiltinCatalog::new(),
    }
}

fn list_presets(catalog: &BuiltinCatalog) {
    for (category, presets) in catalog.list_presets() {
        println!("{category}");
        for preset in presets {
            match &preset.description {
                Some(description) => {
                    println!("  {:<24} {} - {description}", preset.value, preset.label)
                }
                None => println!("  {:<24} {}", preset.value, preset.label),
            }
        }
    }
}

/// A text file is parsed and kept as a temporary preset; anything else is
/// looked up as a preset key.
fn resolve_preset(catalog: &BuiltinCatalog, source: &str) -> io::Result<FolderPreset> {
    let path = Path::new(source);
    if path.is_file() {
        let text = std::fs::read_to_string(path)?;
        let existing = catalog.temporary().map(|t| t.values()).unwrap_or_default();
        let preset = parse_indented_preset(&text, &existing);
        if let Some(temporary) = catalog.temporary() {
            if let Err(e) = temporary.save(preset.clone()) {
                tracing::warn!(error = %e, "failed to keep parsed preset");
            }
        }
        return Ok(preset);
    }
    catalog.load_preset(source).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("no preset file or key named {source}"),
        )
    })
}

fn run_export(host: &mut KernelServiceHost, target: ExportTarget) -> io::Result<()> {
    host.dispatch(Action::Export(target));
    while host.pump_blocking(EXPORT_WAIT).is_some() {
        let Some(done) = host.take_exports().pop() else {
            continue;
        };
        return match done.outcome {
            ExportOutcome::Completed { location } => {
                println!("exported to {}", location.display());
                Ok(())
            }
            ExportOutcome::Aborted => Ok(()),
            ExportOutcome::Failed(message) => Err(io::Error::other(message)),
        };
    }
    Err(io::Error::new(io::ErrorKind::TimedOut, "export did not finish"))
}
