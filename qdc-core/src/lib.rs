//! # QDC Core Library
//!
//! Shared inference code for the sketch classifier service:
//! - Model store (ONNX classifier loading and prediction)
//! - Label set loading and random selection
//! - Canvas image normalization into the model's input tensor
//! - Top-k prediction ranking

pub mod error;
pub mod labels;
pub mod model;
pub mod preprocess;
pub mod rank;

pub use error::{Error, Result};
pub use labels::LabelSet;
pub use model::ModelStore;
pub use rank::Prediction;

/// Side length of the model's square input bitmap.
pub const INPUT_SIZE: usize = 28;

/// Number of predictions returned to clients.
pub const TOP_K: usize = 5;
