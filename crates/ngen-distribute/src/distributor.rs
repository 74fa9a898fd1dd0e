//! # Distribution Orchestration
//!
//! [`distribute`] runs the whole output stage: build both agent configs,
//! summarize, and store all three artifacts through the caller's sink.

use ngen_core::{NarrativeInput, Timestamp};

use crate::artifact::{
    ArtifactSink, GeneratedArtifact, LEGACY_FILE_NAME, PILLAR3_FILE_NAME, REPORT_FILE_NAME,
};
use crate::error::DistributeError;
use crate::legacy::build_legacy_config;
use crate::pillar3::{build_pillar3_config, BuildOptions};
use crate::summary::{build_summary, DistributionReport};

/// Build and store all artifacts for one validated brief.
///
/// Artifacts are stored in a fixed order: Pillar 3 context, legacy
/// config, then the report summarizing the first two. The report itself
/// is not listed in its own artifact table.
pub fn distribute<S: ArtifactSink>(
    input: &NarrativeInput,
    options: &BuildOptions,
    warnings: &[String],
    generated_at: Timestamp,
    sink: &mut S,
) -> Result<DistributionReport, DistributeError> {
    let pillar3 = build_pillar3_config(input, options, generated_at)?;
    let legacy = build_legacy_config(input, generated_at)?;

    let artifacts = [
        GeneratedArtifact::from_config(PILLAR3_FILE_NAME, &pillar3)?,
        GeneratedArtifact::from_config(LEGACY_FILE_NAME, &legacy)?,
    ];

    let report = build_summary(input, &artifacts, warnings, generated_at);
    let report_artifact = GeneratedArtifact::from_config(REPORT_FILE_NAME, &report)?;

    for artifact in artifacts.iter().chain([&report_artifact]) {
        sink.store(artifact)?;
        tracing::info!(
            file = artifact.file_name,
            bytes = artifact.serialized_size(),
            "artifact stored"
        );
    }

    Ok(report)
}
