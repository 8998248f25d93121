use std::collections::BTreeSet;
use std::fmt;

use scoregen_core::errors::{ErrorInfo, ScoregenError};
use scoregen_core::{ActionKind, Handle, MappingEntry};
use scoregen_map::MappingIndex;

use crate::templates::{render_line, TemplateSet};

/// Banner prefixed identically to every generated artifact text.
pub const GENERATED_BANNER: &str = "# This file is generated by scoregen. Do not edit by hand.\n\n";

/// Scoreboard objective names are limited to this many characters.
pub const MAX_OBJECTIVE_LEN: usize = 16;

/// The three coordinated artifacts emitted for one action kind.
///
/// `install` and `uninstall` carry one line per handle, `check` two lines
/// per handle with the trigger line first; all three are assembled from one
/// per-handle record so the counts cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactBundle {
    /// Action kind this bundle detects.
    pub kind: ActionKind,
    /// Number of handles the bundle covers.
    pub entries: usize,
    /// Objective installation artifact.
    pub install: String,
    /// Recurring detection artifact (trigger + reset per handle).
    pub check: String,
    /// Objective removal artifact.
    pub uninstall: String,
}

/// Names the three artifacts of a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundlePart {
    /// The installation artifact.
    Install,
    /// The recurring detection artifact.
    Check,
    /// The removal artifact.
    Uninstall,
}

impl BundlePart {
    /// All parts in emission order.
    pub const ALL: [BundlePart; 3] = [BundlePart::Install, BundlePart::Check, BundlePart::Uninstall];

    /// File-name form of the part.
    pub fn as_str(&self) -> &'static str {
        match self {
            BundlePart::Install => "install",
            BundlePart::Check => "check",
            BundlePart::Uninstall => "uninstall",
        }
    }
}

impl fmt::Display for BundlePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ArtifactBundle {
    /// Function path of one part, relative to the generated namespace
    /// (`break_hook/install`).
    pub fn function_path(&self, part: BundlePart) -> String {
        format!("{}_hook/{}", self.kind, part)
    }

    /// Fully qualified function reference for one part
    /// (`territories_generated:break_hook/install`).
    pub fn artifact_ref(&self, namespace: &str, part: BundlePart) -> String {
        format!("{namespace}:{}", self.function_path(part))
    }

    /// The text of one part.
    pub fn text(&self, part: BundlePart) -> &str {
        match part {
            BundlePart::Install => &self.install,
            BundlePart::Check => &self.check,
            BundlePart::Uninstall => &self.uninstall,
        }
    }
}

/// Three artifact lines derived from one handle.
struct HookLines {
    install: String,
    check_trigger: String,
    check_reset: String,
    uninstall: String,
}

/// Emits coordinated artifact bundles over a mapping index.
///
/// The emitter owns the set of objective names handed out so far; the naming
/// scheme must stay injective across the whole run, and a collision aborts
/// generation rather than silently overwriting a counter.
#[derive(Debug)]
pub struct BundleEmitter<'a> {
    index: &'a MappingIndex,
    prefix: &'a str,
    hook_namespace: &'a str,
    seen_names: BTreeSet<String>,
}

impl<'a> BundleEmitter<'a> {
    /// Creates an emitter over the given index, objective prefix, and the
    /// namespace owning the detection routines.
    pub fn new(index: &'a MappingIndex, prefix: &'a str, hook_namespace: &'a str) -> Self {
        Self {
            index,
            prefix,
            hook_namespace,
            seen_names: BTreeSet::new(),
        }
    }

    /// Emits the bundle for one action kind, or `None` when the hook list is
    /// empty (no empty artifacts are ever produced).
    pub fn emit(
        &mut self,
        kind: ActionKind,
        handles: &[Handle],
        templates: &TemplateSet,
    ) -> Result<Option<ArtifactBundle>, ScoregenError> {
        if handles.is_empty() {
            return Ok(None);
        }
        let hook_ref = format!("#{}:on_{}", self.hook_namespace, kind);
        let mut install = String::from(GENERATED_BANNER);
        let mut check = String::from(GENERATED_BANNER);
        let mut uninstall = String::from(GENERATED_BANNER);
        for handle in handles {
            let entry = self.index.entry(*handle).ok_or_else(|| {
                ScoregenError::Snapshot(
                    ErrorInfo::new(
                        "snapshot-desync",
                        "hook table references a handle missing from the mapping index",
                    )
                    .with_context("handle", handle.to_string()),
                )
            })?;
            let lines = self.hook_lines(kind, *handle, entry, templates, &hook_ref)?;
            install.push_str(&lines.install);
            install.push('\n');
            check.push_str(&lines.check_trigger);
            check.push('\n');
            check.push_str(&lines.check_reset);
            check.push('\n');
            uninstall.push_str(&lines.uninstall);
            uninstall.push('\n');
        }
        Ok(Some(ArtifactBundle {
            kind,
            entries: handles.len(),
            install,
            check,
            uninstall,
        }))
    }

    fn hook_lines(
        &mut self,
        kind: ActionKind,
        handle: Handle,
        entry: &MappingEntry,
        templates: &TemplateSet,
        hook_ref: &str,
    ) -> Result<HookLines, ScoregenError> {
        let obj = self.objective_name(kind, handle)?;
        let criterion = templates.render_criterion(&entry.identifier.stat_key());
        Ok(HookLines {
            install: render_line(&templates.install, &obj, &criterion, hook_ref),
            check_trigger: render_line(&templates.check_trigger, &obj, &criterion, hook_ref),
            check_reset: render_line(&templates.check_reset, &obj, &criterion, hook_ref),
            uninstall: render_line(&templates.uninstall, &obj, &criterion, hook_ref),
        })
    }

    fn objective_name(&mut self, kind: ActionKind, handle: Handle) -> Result<String, ScoregenError> {
        let name = format!("{}{}.{}", self.prefix, kind, handle);
        if name.len() > MAX_OBJECTIVE_LEN {
            return Err(ScoregenError::Naming(
                ErrorInfo::new("naming-shape", "objective name exceeds the length limit")
                    .with_context("name", name.as_str())
                    .with_context("limit", MAX_OBJECTIVE_LEN.to_string()),
            ));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '+' | '-'))
        {
            return Err(ScoregenError::Naming(
                ErrorInfo::new("naming-shape", "objective name contains a forbidden character")
                    .with_context("name", name.as_str()),
            ));
        }
        if !self.seen_names.insert(name.clone()) {
            return Err(ScoregenError::Naming(
                ErrorInfo::new("naming-collision", "two handles map to one objective name")
                    .with_context("name", name.as_str())
                    .with_context("handle", handle.to_string()),
            ));
        }
        Ok(name)
    }
}
