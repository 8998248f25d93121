use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use scoregen_core::GenConfig;
use scoregen_map::{index_to_json, MappingIndex};

use super::{registries_dir, resolve_version};

#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Registry dumps directory; defaults to the sync layer's folder.
    #[arg(long)]
    pub registries: Option<PathBuf>,
}

pub fn run(args: &IndexArgs, config: &GenConfig) -> Result<(), Box<dyn Error>> {
    let registries = registries_dir(args.registries.as_deref(), config);
    let version = resolve_version(config)?;
    let snapshot = scoregen_sync::load_snapshot(&registries, &version)?;
    let index = MappingIndex::from_snapshot(&snapshot);
    println!("{}", index_to_json(&index)?);
    Ok(())
}
