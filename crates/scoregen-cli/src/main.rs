use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "scoregen", about = "Deterministic scoreboard hook generator")]
struct Cli {
    /// Generator configuration file (TOML); `scoregen.toml` is picked up
    /// from the working directory when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Refresh the local registry dumps from the upstream manifest.
    Sync(commands::sync::SyncArgs),
    /// Run the mapping pipeline and write the datapack tree.
    Generate(commands::generate::GenerateArgs),
    /// Print the mapping index for the current registry dumps.
    Index(commands::index::IndexArgs),
    /// Print version information.
    Version(commands::version::VersionArgs),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_target(false).init();
    let cli = Cli::parse();
    let config = match commands::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    let result = match &cli.command {
        Command::Sync(args) => commands::sync::run(args, &config),
        Command::Generate(args) => commands::generate::run(args, &config),
        Command::Index(args) => commands::index::run(args, &config),
        Command::Version(args) => commands::version::run(args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "command failed");
            ExitCode::FAILURE
        }
    }
}
