use scoregen_core::errors::ScoregenError;
use scoregen_core::provenance::{GenProvenance, MAPPING_SCHEMA};
use scoregen_core::{ActionKind, GenConfig, RegistrySnapshot};
use scoregen_map::{snapshot_hash, HookTable, MappingIndex};

use crate::bundle::{ArtifactBundle, BundleEmitter, BundlePart};
use crate::tags::TagIndex;
use crate::templates::TemplateSet;

/// Everything one generation run produces, ready for the pack writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutput {
    /// The identifier-to-handle index.
    pub index: MappingIndex,
    /// One bundle per action kind with at least one hook.
    pub bundles: Vec<ArtifactBundle>,
    /// Tag collections referencing the emitted artifacts.
    pub tags: TagIndex,
    /// Provenance record for the run.
    pub provenance: GenProvenance,
}

/// Runs the full mapping-and-codegen pipeline over a validated snapshot.
///
/// Stages execute strictly in order (partition, assign, hook tables, per-kind
/// emission, tag aggregation), each consuming the previous stage's value.
/// The result is byte-deterministic for a given snapshot and configuration.
pub fn run_pipeline(
    snapshot: &RegistrySnapshot,
    config: &GenConfig,
) -> Result<GenerationOutput, ScoregenError> {
    let index = MappingIndex::from_snapshot(snapshot);
    let table = HookTable::build(&index);

    let mut emitter = BundleEmitter::new(
        &index,
        &config.scoreboard.prefix,
        &config.pack.namespace,
    );
    let mut bundles = Vec::new();
    let mut tags = TagIndex::new();
    for kind in ActionKind::ALL {
        let templates = TemplateSet::from_config(kind, config)?;
        let Some(bundle) = emitter.emit(kind, table.handles(kind), &templates)? else {
            continue;
        };
        let generated_ns = &config.pack.generated_namespace;
        tags.insert(
            &config.tags.load,
            bundle.artifact_ref(generated_ns, BundlePart::Install),
        );
        tags.insert(
            &config.tags.check,
            bundle.artifact_ref(generated_ns, BundlePart::Check),
        );
        bundles.push(bundle);
    }

    let provenance = GenProvenance {
        schema: MAPPING_SCHEMA,
        game_version: snapshot.version.clone(),
        snapshot_hash: snapshot_hash(snapshot)?,
        entries: index.len(),
        generator: concat!("scoregen ", env!("CARGO_PKG_VERSION")).to_string(),
    };

    Ok(GenerationOutput {
        index,
        bundles,
        tags,
        provenance,
    })
}
