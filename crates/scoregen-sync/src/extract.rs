use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use scoregen_core::errors::{ErrorInfo, ScoregenError};

fn io_err(code: &str, err: impl ToString, path: &Path) -> ScoregenError {
    ScoregenError::Sync(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

/// Removes stale extractor output (`out`, `raw`, `registries`) so a rerun
/// starts from a clean slate.
pub fn clean_stale_output(work_dir: &Path) -> Result<(), ScoregenError> {
    for name in ["out", "raw", "registries"] {
        let target = work_dir.join(name);
        if target.exists() {
            tracing::debug!(path = %target.display(), "removing stale extractor output");
            fs::remove_dir_all(&target).map_err(|err| io_err("sync-extract", err, &target))?;
        }
    }
    Ok(())
}

/// Launches the external extractor with `{version}` substituted into every
/// command part. A non-zero exit status aborts the sync.
pub fn run_extractor(command: &[String], version: &str) -> Result<(), ScoregenError> {
    let mut parts = command.iter().map(|part| part.replace("{version}", version));
    let Some(program) = parts.next() else {
        return Err(ScoregenError::Sync(ErrorInfo::new(
            "sync-extract",
            "extractor command is empty",
        )));
    };
    let args: Vec<String> = parts.collect();
    tracing::info!(%program, %version, "running registry extractor");
    let status = Command::new(&program).args(&args).status().map_err(|err| {
        ScoregenError::Sync(
            ErrorInfo::new("sync-extract", "failed to launch extractor")
                .with_context("program", program.as_str())
                .with_hint(err.to_string()),
        )
    })?;
    if !status.success() {
        return Err(ScoregenError::Sync(
            ErrorInfo::new("sync-extract", "extractor exited with failure")
                .with_context("program", program.as_str())
                .with_context("status", status.to_string()),
        ));
    }
    Ok(())
}

/// Copies the extractor's registry report into the discoverable
/// `<work>/registries` folder and removes the intermediate trees.
pub fn export_registries(work_dir: &Path, version: &str) -> Result<PathBuf, ScoregenError> {
    let source = work_dir
        .join("out")
        .join(version)
        .join("reports")
        .join("registries");
    let target = work_dir.join("registries");
    if !source.is_dir() {
        return Err(ScoregenError::Sync(
            ErrorInfo::new("sync-extract", "extractor produced no registry report")
                .with_context("path", source.display().to_string())
                .with_hint("check the extractor command and version"),
        ));
    }
    copy_tree(&source, &target)?;

    for name in ["jars", "out", "raw"] {
        let stale = work_dir.join(name);
        if stale.is_dir() {
            fs::remove_dir_all(&stale).map_err(|err| io_err("sync-extract", err, &stale))?;
        } else if stale.is_file() {
            fs::remove_file(&stale).map_err(|err| io_err("sync-extract", err, &stale))?;
        }
    }
    tracing::info!(path = %target.display(), "exported registry dumps");
    Ok(target)
}

fn copy_tree(source: &Path, target: &Path) -> Result<(), ScoregenError> {
    for entry in walkdir::WalkDir::new(source) {
        let entry = entry.map_err(|err| {
            ScoregenError::Sync(
                ErrorInfo::new("sync-extract", err.to_string())
                    .with_context("path", source.display().to_string()),
            )
        })?;
        let rel = entry
            .path()
            .strip_prefix(source)
            .map_err(|err| io_err("sync-extract", err, entry.path()))?;
        let dest = target.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest).map_err(|err| io_err("sync-extract", err, &dest))?;
        } else {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).map_err(|err| io_err("sync-extract", err, parent))?;
            }
            fs::copy(entry.path(), &dest).map_err(|err| io_err("sync-extract", err, &dest))?;
        }
    }
    Ok(())
}
