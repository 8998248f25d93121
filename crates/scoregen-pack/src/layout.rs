use std::path::{Path, PathBuf};

use scoregen_core::errors::{ErrorInfo, ScoregenError};

/// Path scheme of the emitted datapack tree.
#[derive(Debug, Clone)]
pub struct PackLayout {
    root: PathBuf,
}

impl PackLayout {
    /// Creates a layout rooted at the pack output directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The pack output root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `pack.mcmeta` location.
    pub fn mcmeta_path(&self) -> PathBuf {
        self.root.join("pack.mcmeta")
    }

    /// Function file location for `namespace:function`.
    pub fn function_path(&self, namespace: &str, function: &str) -> PathBuf {
        self.root
            .join("data")
            .join(namespace)
            .join("functions")
            .join(format!("{function}.mcfunction"))
    }

    /// Function tag location for a namespaced tag name like `minecraft:load`.
    pub fn tag_path(&self, tag: &str) -> Result<PathBuf, ScoregenError> {
        let Some((namespace, path)) = tag.split_once(':') else {
            return Err(ScoregenError::Pack(
                ErrorInfo::new("pack-tag-name", "tag collection name is not namespaced")
                    .with_context("tag", tag),
            ));
        };
        Ok(self
            .root
            .join("data")
            .join(namespace)
            .join("tags")
            .join("functions")
            .join(format!("{path}.json")))
    }

    /// Location of a discoverable mapping artifact.
    pub fn mapping_path(&self, file: &str) -> PathBuf {
        self.root.join("mappings").join(file)
    }
}
