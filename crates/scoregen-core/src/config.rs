//! Generator configuration, loaded from TOML with defaults matching the
//! shipped tool.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, ScoregenError};

/// Top level configuration for a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct GenConfig {
    /// Pack identity and output naming.
    #[serde(default)]
    pub pack: PackConfig,
    /// Scoreboard objective naming.
    #[serde(default)]
    pub scoreboard: ScoreboardConfig,
    /// Function tag collection names.
    #[serde(default)]
    pub tags: TagsConfig,
    /// Upstream registry sync settings.
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Per-action line template overrides, keyed by action kind name.
    #[serde(default)]
    pub templates: BTreeMap<String, TemplateOverride>,
}

impl GenConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ScoregenError> {
        toml::from_str(text).map_err(|err| {
            ScoregenError::Config(
                ErrorInfo::new("config-parse", "failed to parse generator configuration")
                    .with_hint(err.to_string()),
            )
        })
    }
}

/// Pack identity and output naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackConfig {
    /// Namespace owning the hand-written detection routines.
    #[serde(default = "PackConfig::default_namespace")]
    pub namespace: String,
    /// Namespace the generated function files are written under.
    #[serde(default = "PackConfig::default_generated_namespace")]
    pub generated_namespace: String,
    /// `pack.mcmeta` pack format number.
    #[serde(default = "PackConfig::default_pack_format")]
    pub pack_format: u32,
    /// `pack.mcmeta` description string.
    #[serde(default = "PackConfig::default_description")]
    pub description: String,
}

impl PackConfig {
    fn default_namespace() -> String {
        "territories".into()
    }

    fn default_generated_namespace() -> String {
        "territories_generated".into()
    }

    const fn default_pack_format() -> u32 {
        10
    }

    fn default_description() -> String {
        "Generated scoreboard hooks".into()
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            namespace: Self::default_namespace(),
            generated_namespace: Self::default_generated_namespace(),
            pack_format: Self::default_pack_format(),
            description: Self::default_description(),
        }
    }
}

/// Scoreboard objective naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreboardConfig {
    /// Prefix prepended to every generated objective name.
    #[serde(default = "ScoreboardConfig::default_prefix")]
    pub prefix: String,
}

impl ScoreboardConfig {
    fn default_prefix() -> String {
        "terr.".into()
    }
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            prefix: Self::default_prefix(),
        }
    }
}

/// Function tag collection names used for batch activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagsConfig {
    /// Collection activated once at world initialisation.
    #[serde(default = "TagsConfig::default_load")]
    pub load: String,
    /// Collection activated on the recurring detection cadence.
    #[serde(default = "TagsConfig::default_check")]
    pub check: String,
}

impl TagsConfig {
    fn default_load() -> String {
        "minecraft:load".into()
    }

    fn default_check() -> String {
        "territories:update_expensive".into()
    }
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            load: Self::default_load(),
            check: Self::default_check(),
        }
    }
}

/// Upstream registry sync settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Version manifest URL.
    #[serde(default = "UpstreamConfig::default_manifest_url")]
    pub manifest_url: String,
    /// Pinned upstream version; `None` follows the latest release.
    #[serde(default = "UpstreamConfig::default_version")]
    pub version: Option<String>,
    /// Freshness window for the sync cache, in seconds.
    #[serde(default = "UpstreamConfig::default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    /// Working directory holding the cache, extractor output, and registries.
    #[serde(default = "UpstreamConfig::default_work_dir")]
    pub work_dir: PathBuf,
    /// External extractor command; `{version}` is substituted before launch.
    #[serde(default = "UpstreamConfig::default_extract_command")]
    pub extract_command: Vec<String>,
}

impl UpstreamConfig {
    fn default_manifest_url() -> String {
        "https://piston-meta.mojang.com/mc/game/version_manifest_v2.json".into()
    }

    fn default_version() -> Option<String> {
        Some("1.19".into())
    }

    const fn default_cache_ttl_secs() -> u64 {
        3600
    }

    fn default_work_dir() -> PathBuf {
        PathBuf::from("temp")
    }

    fn default_extract_command() -> Vec<String> {
        [
            "python",
            "-m",
            "mcgen",
            "--version",
            "{version}",
            "--log",
            "FATAL",
            "--processors",
            "mcgen.processors.split_registries",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            manifest_url: Self::default_manifest_url(),
            version: Self::default_version(),
            cache_ttl_secs: Self::default_cache_ttl_secs(),
            work_dir: Self::default_work_dir(),
            extract_command: Self::default_extract_command(),
        }
    }
}

/// Optional replacements for the built-in line templates of one action kind.
///
/// Absent fields fall back to the defaults; see the emit crate for the
/// placeholder vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TemplateOverride {
    /// Statistic criterion format (`{id}` placeholder).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criterion: Option<String>,
    /// Objective installation line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install: Option<String>,
    /// Detection trigger line of the check artifact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_trigger: Option<String>,
    /// Counter reset line of the check artifact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_reset: Option<String>,
    /// Objective removal line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uninstall: Option<String>,
}
