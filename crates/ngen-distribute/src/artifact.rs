//! # Artifacts and Sinks
//!
//! A [`GeneratedArtifact`] is one named JSON document ready to be stored.
//! [`ArtifactSink`] is the only seam through which the pipeline touches
//! the outside world; the library itself performs no I/O.

use serde::Serialize;
use serde_json::Value;

/// File name of the Pillar 3 logic context artifact.
pub const PILLAR3_FILE_NAME: &str = "output_pillar3_logic_context.json";
/// File name of the legacy scriptwriter configuration artifact.
pub const LEGACY_FILE_NAME: &str = "scriptwriter_config.json";
/// File name of the distribution report artifact.
pub const REPORT_FILE_NAME: &str = "distribution_report.json";

/// One named, fully assembled JSON artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedArtifact {
    /// File name the artifact is stored under.
    pub file_name: &'static str,
    /// The artifact body.
    pub value: Value,
}

impl GeneratedArtifact {
    /// Wrap a serializable configuration as a named artifact.
    pub fn from_config<T: Serialize>(
        file_name: &'static str,
        config: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            file_name,
            value: serde_json::to_value(config)?,
        })
    }

    /// Compact serialized size in bytes, as reported by the distribution
    /// report.
    pub fn serialized_size(&self) -> usize {
        // Serializing an already-built Value cannot fail.
        serde_json::to_vec(&self.value).map(|b| b.len()).unwrap_or(0)
    }
}

/// Destination for generated artifacts. Implementations decide layout
/// and formatting (the CLI sink pretty-prints into an output directory).
pub trait ArtifactSink {
    fn store(&mut self, artifact: &GeneratedArtifact) -> std::io::Result<()>;
}

/// Sink that keeps artifacts in memory, for tests and embedding callers.
#[derive(Debug, Default)]
pub struct MemorySink {
    artifacts: Vec<GeneratedArtifact>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored artifacts in store order.
    pub fn artifacts(&self) -> &[GeneratedArtifact] {
        &self.artifacts
    }
}

impl ArtifactSink for MemorySink {
    fn store(&mut self, artifact: &GeneratedArtifact) -> std::io::Result<()> {
        self.artifacts.push(artifact.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialized_size_is_compact_length() {
        let artifact = GeneratedArtifact {
            file_name: REPORT_FILE_NAME,
            value: json!({"a": 1}),
        };
        assert_eq!(artifact.serialized_size(), r#"{"a":1}"#.len());
    }

    #[test]
    fn test_memory_sink_preserves_store_order() {
        let mut sink = MemorySink::new();
        let first = GeneratedArtifact {
            file_name: PILLAR3_FILE_NAME,
            value: json!(1),
        };
        let second = GeneratedArtifact {
            file_name: LEGACY_FILE_NAME,
            value: json!(2),
        };
        sink.store(&first).unwrap();
        sink.store(&second).unwrap();
        assert_eq!(sink.artifacts().len(), 2);
        assert_eq!(sink.artifacts()[0].file_name, PILLAR3_FILE_NAME);
    }
}
