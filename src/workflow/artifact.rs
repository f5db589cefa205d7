use super::graph::WorkflowGraph;
use crate::error::ArtifactError;
use crate::roi::RoiReport;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A synthesized workflow graph bundled with its optional ROI projection,
/// persistable as a compact binary artifact.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SynthesisBundle {
    pub graph: WorkflowGraph,
    pub roi: Option<RoiReport>,
}

impl SynthesisBundle {
    pub fn new(graph: WorkflowGraph, roi: Option<RoiReport>) -> Self {
        Self { graph, roi }
    }

    /// Saves the bundle to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| {
            ArtifactError::Generic(format!("Could not create file '{}': {}", path, e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            ArtifactError::Generic(format!("Could not write to file '{}': {}", path, e))
        })?;
        Ok(())
    }

    /// Loads a bundle from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path)
            .map_err(|e| ArtifactError::Generic(format!("Could not open file '{}': {}", path, e)))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            ArtifactError::Generic(format!("Could not read from file '{}': {}", path, e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Serializes the bundle to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        encode_to_vec(self, standard())
            .map_err(|e| ArtifactError::Generic(format!("Serialization failed: {}", e)))
    }

    /// Deserializes a bundle from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(bundle, _)| bundle) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| ArtifactError::Generic(format!("Deserialization failed: {}", e)))
    }

    /// Serializes the bundled graph as its platform import document.
    pub fn to_import_json(&self) -> serde_json::Result<String> {
        self.graph.to_import_json()
    }
}
