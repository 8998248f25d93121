use std::error::Error;

use clap::Args;

use scoregen_core::GenConfig;
use scoregen_sync::SyncOutcome;

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Ignore the freshness window and always consult the manifest.
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: &SyncArgs, config: &GenConfig) -> Result<(), Box<dyn Error>> {
    let mut upstream = config.upstream.clone();
    if args.force {
        upstream.cache_ttl_secs = 0;
    }
    match scoregen_sync::refresh(&upstream)? {
        SyncOutcome::Fresh => tracing::info!("registry dumps are fresh"),
        SyncOutcome::UpToDate { version } => {
            tracing::info!(%version, "registry dumps already match the target version")
        }
        SyncOutcome::Extracted { version } => {
            tracing::info!(%version, "registry dumps extracted")
        }
    }
    Ok(())
}
