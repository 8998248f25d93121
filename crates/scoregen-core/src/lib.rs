#![deny(missing_docs)]
#![doc = "Core data types for the scoregen hook generation pipeline."]

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub mod config;
pub mod errors;
pub mod provenance;

pub use config::GenConfig;
pub use errors::{ErrorInfo, ScoregenError};
pub use provenance::GenProvenance;

/// Closed set of in-world actions a hook can detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// A placeable surface was broken by an actor.
    Break,
    /// A placeable surface was placed by an actor.
    Place,
}

impl ActionKind {
    /// All action kinds in their canonical emission order.
    pub const ALL: [ActionKind; 2] = [ActionKind::Break, ActionKind::Place];

    /// Returns the lowercase wire name of the action kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Break => "break",
            ActionKind::Place => "place",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable integer handle assigned to an identifier during index assignment.
///
/// Handles are dense: a run over `n` identifiers assigns exactly `0..n`,
/// with dual-capability identifiers occupying the low end of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Handle(u32);

impl Handle {
    /// Creates a handle from its raw integer representation.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the handle.
    pub fn as_raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Namespaced identifier naming a game object type (`namespace:path`).
///
/// Compared by exact equality; case- and separator-sensitive. Construction
/// validates the namespaced shape, so a held value is always well formed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Parses and validates a raw token against the `namespace:path` shape.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ScoregenError> {
        let raw = raw.into();
        let Some((namespace, path)) = raw.split_once(':') else {
            return Err(malformed(&raw, "missing ':' separator"));
        };
        if namespace.is_empty() || path.is_empty() {
            return Err(malformed(&raw, "empty namespace or path"));
        }
        if !namespace
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '.' | '-'))
        {
            return Err(malformed(&raw, "invalid namespace character"));
        }
        if !path
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '.' | '-' | '/'))
        {
            return Err(malformed(&raw, "invalid path character"));
        }
        Ok(Self(raw))
    }

    /// Returns the full `namespace:path` token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the identifier rendered as a statistic key segment, with the
    /// namespace separator mapped to `.` (`minecraft:stone` → `minecraft.stone`).
    pub fn stat_key(&self) -> String {
        self.0.replace(':', ".")
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Identifier {
    type Error = ScoregenError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Identifier::parse(raw)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> String {
        id.0
    }
}

fn malformed(raw: &str, reason: &str) -> ScoregenError {
    ScoregenError::Snapshot(
        ErrorInfo::new("snapshot-ident", "malformed namespaced identifier")
            .with_context("token", raw)
            .with_hint(reason),
    )
}

/// One identifier's slot in the mapping index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Stable handle assigned to the identifier.
    pub handle: Handle,
    /// The identifier this entry maps.
    #[serde(rename = "id")]
    pub identifier: Identifier,
    /// Actions the identifier supports; drives which hook tables include it.
    #[serde(rename = "used_with")]
    pub actions: BTreeSet<ActionKind>,
}

impl MappingEntry {
    /// Returns true if the entry supports the given action kind.
    pub fn supports(&self, kind: ActionKind) -> bool {
        self.actions.contains(&kind)
    }
}

/// Pre-validated snapshot of the two upstream identifier registries.
///
/// Both sequences are ordered and assumed deduplicated by the sync layer;
/// every downstream guarantee (handle stability, reproducible artifact
/// bytes) is relative to this ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Upstream version string the registries were extracted from.
    pub version: String,
    /// Placeable surface identifiers, in registry order.
    pub surfaces: Vec<Identifier>,
    /// Interactable item identifiers, in registry order.
    pub items: Vec<Identifier>,
}

impl RegistrySnapshot {
    /// Validates raw registry tokens into a snapshot, failing fast on the
    /// first malformed identifier so no partial artifacts can be produced.
    pub fn from_raw(
        version: impl Into<String>,
        surfaces: Vec<String>,
        items: Vec<String>,
    ) -> Result<Self, ScoregenError> {
        let surfaces = surfaces
            .into_iter()
            .map(Identifier::parse)
            .collect::<Result<Vec<_>, _>>()?;
        let items = items
            .into_iter()
            .map(Identifier::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            version: version.into(),
            surfaces,
            items,
        })
    }

    /// Returns true when both registries are empty (a valid degenerate case).
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty() && self.items.is_empty()
    }
}
