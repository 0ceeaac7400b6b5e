//! Top-k prediction ranking
//!
//! Maps the model's raw probability vector to the k best (label, probability)
//! pairs, descending. The vector length must match the label count; a
//! mismatch would silently attach wrong labels, so it is rejected instead.

use crate::{Error, LabelSet, Result};
use serde::Serialize;

/// One ranked prediction as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub class: String,
    pub probability: f32,
}

/// Select the `k` highest-probability entries, strictly descending.
/// Tie order between equal probabilities is stable but unspecified.
pub fn top_k(probabilities: &[f32], labels: &LabelSet, k: usize) -> Result<Vec<Prediction>> {
    if probabilities.len() != labels.len() {
        return Err(Error::LabelMismatch {
            output: probabilities.len(),
            labels: labels.len(),
        });
    }

    let mut indexed: Vec<(usize, f32)> = probabilities.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    indexed.truncate(k);

    Ok(indexed
        .into_iter()
        .filter_map(|(i, p)| {
            labels.get(i).map(|class| Prediction {
                class: class.to_string(),
                probability: p,
            })
        })
        .collect())
}
