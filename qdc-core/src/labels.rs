//! Class label loading and selection
//!
//! The label file is a JSON array of class name strings. The model's output
//! vector is index-aligned with this list: score `i` belongs to label `i`.

use crate::{Error, Result};
use rand::seq::SliceRandom;
use std::path::Path;
use tracing::info;

/// Ordered set of class names the model can predict.
#[derive(Debug, Clone)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    /// Load labels from a JSON array file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read label file {}: {}", path.display(), e))
        })?;
        let labels: Vec<String> = serde_json::from_str(&raw)?;
        if labels.is_empty() {
            return Err(Error::Config(format!(
                "label file {} contains no classes",
                path.display()
            )));
        }
        info!("Loaded {} class labels from {}", labels.len(), path.display());
        Ok(Self { labels })
    }

    /// Build a label set from an in-memory list. Used by tests and callers
    /// that source labels elsewhere.
    pub fn from_vec(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at model-output index `i`, if in range.
    pub fn get(&self, i: usize) -> Option<&str> {
        self.labels.get(i).map(String::as_str)
    }

    /// Pick one label uniformly at random.
    pub fn choose_random(&self) -> Option<&str> {
        self.labels
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }
}
