use std::collections::BTreeMap;
use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use scoregen_core::GenConfig;
use scoregen_emit::GenerationOutput;
use scoregen_pack::PackWriter;

use super::{registries_dir, resolve_version};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output directory for the datapack tree.
    #[arg(long)]
    pub out: PathBuf,
    /// Registry dumps directory; defaults to the sync layer's folder.
    #[arg(long)]
    pub registries: Option<PathBuf>,
    /// Refresh the registry dumps before generating.
    #[arg(long)]
    pub sync: bool,
}

pub fn run(args: &GenerateArgs, config: &GenConfig) -> Result<(), Box<dyn Error>> {
    if args.sync {
        scoregen_sync::refresh(&config.upstream)?;
    }
    let registries = registries_dir(args.registries.as_deref(), config);
    let version = resolve_version(config)?;
    let snapshot = scoregen_sync::load_snapshot(&registries, &version)?;
    let output = scoregen_emit::run_pipeline(&snapshot, config)?;
    log_statistics(&output);
    let report = PackWriter::new(&args.out).write(&output, config)?;
    tracing::info!(
        functions = report.functions,
        tags = report.tags,
        root = %report.root.display(),
        "generation finished"
    );
    Ok(())
}

fn log_statistics(output: &GenerationOutput) {
    tracing::info!(entries = output.index.len(), "mappings generated");
    let mut histogram: BTreeMap<usize, usize> = BTreeMap::new();
    for entry in output.index.entries() {
        *histogram.entry(entry.actions.len()).or_default() += 1;
    }
    for (actions, count) in histogram {
        tracing::info!(actions, count, "entries by supported action count");
    }
    for bundle in &output.bundles {
        tracing::info!(
            kind = %bundle.kind,
            entries = bundle.entries,
            install_lines = bundle.install.lines().count(),
            check_lines = bundle.check.lines().count(),
            uninstall_lines = bundle.uninstall.lines().count(),
            "bundle emitted"
        );
    }
}
