//! # File-System Artifact Sink
//!
//! Writes each artifact as pretty-printed JSON into the output directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ngen_distribute::{ArtifactSink, GeneratedArtifact};

/// Sink writing artifacts under one output directory.
#[derive(Debug)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    /// Create the sink, making the output directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory artifacts are written into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSink for FileSink {
    fn store(&mut self, artifact: &GeneratedArtifact) -> io::Result<()> {
        let pretty = serde_json::to_string_pretty(&artifact.value)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(self.dir.join(artifact.file_name), pretty)
    }
}
