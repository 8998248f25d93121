use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use scoregen_core::errors::{ErrorInfo, ScoregenError};
use scoregen_core::GenConfig;
use scoregen_emit::{BundlePart, GenerationOutput};
use scoregen_map::{index_to_json, to_canonical_json_bytes};

use crate::layout::PackLayout;

#[derive(Debug, Serialize)]
struct McMeta {
    pack: McMetaPack,
}

#[derive(Debug, Serialize)]
struct McMetaPack {
    pack_format: u32,
    description: String,
}

/// Function tag declaration (`{"values": [...]}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionTag {
    /// Ordered function references activated by the tag.
    pub values: Vec<String>,
}

/// Summary of one pack write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackReport {
    /// Number of function files written.
    pub functions: usize,
    /// Number of tag declarations written.
    pub tags: usize,
    /// Pack output root.
    pub root: PathBuf,
}

/// Writes generation output into a datapack tree.
#[derive(Debug, Clone)]
pub struct PackWriter {
    layout: PackLayout,
}

impl PackWriter {
    /// Creates a writer rooted at the pack output directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            layout: PackLayout::new(root),
        }
    }

    /// The path scheme this writer targets.
    pub fn layout(&self) -> &PackLayout {
        &self.layout
    }

    /// Materialises the complete output tree.
    pub fn write(
        &self,
        output: &GenerationOutput,
        config: &GenConfig,
    ) -> Result<PackReport, ScoregenError> {
        let mcmeta = McMeta {
            pack: McMetaPack {
                pack_format: config.pack.pack_format,
                description: config.pack.description.clone(),
            },
        };
        write_json_pretty(&self.layout.mcmeta_path(), &mcmeta)?;

        let mut functions = 0;
        for bundle in &output.bundles {
            for part in BundlePart::ALL {
                let path = self.layout.function_path(
                    &config.pack.generated_namespace,
                    &bundle.function_path(part),
                );
                write_text(&path, bundle.text(part))?;
                tracing::debug!(kind = %bundle.kind, part = %part, path = %path.display(), "wrote hook function");
                functions += 1;
            }
        }

        let mut tags = 0;
        for (name, refs) in output.tags.collections() {
            let tag = FunctionTag {
                values: refs.to_vec(),
            };
            write_json_pretty(&self.layout.tag_path(name)?, &tag)?;
            tags += 1;
        }

        write_text(
            &self.layout.mapping_path("unified.json"),
            &index_to_json(&output.index)?,
        )?;
        let provenance = to_canonical_json_bytes(&output.provenance)?;
        write_bytes(&self.layout.mapping_path("provenance.json"), &provenance)?;

        tracing::info!(
            functions,
            tags,
            entries = output.index.len(),
            root = %self.layout.root().display(),
            "pack written"
        );
        Ok(PackReport {
            functions,
            tags,
            root: self.layout.root().to_path_buf(),
        })
    }
}

fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<(), ScoregenError> {
    let text = serde_json::to_string_pretty(value).map_err(|err| {
        ScoregenError::Pack(ErrorInfo::new("pack-serialize", err.to_string()))
    })?;
    write_text(path, &text)
}

fn write_text(path: &Path, text: &str) -> Result<(), ScoregenError> {
    write_bytes(path, text.as_bytes())
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), ScoregenError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            ScoregenError::Pack(
                ErrorInfo::new("pack-io", err.to_string())
                    .with_context("path", parent.display().to_string()),
            )
        })?;
    }
    fs::write(path, bytes).map_err(|err| {
        ScoregenError::Pack(
            ErrorInfo::new("pack-io", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}
