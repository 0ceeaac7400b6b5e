//! ONNX model store
//!
//! Loads the pre-trained classifier once at startup. A missing or corrupt
//! artifact leaves the store in an unavailable state rather than aborting:
//! the rest of the service keeps running and prediction requests fail with
//! a typed error. There is no retry or hot reload.

use crate::{Error, Result, INPUT_SIZE};
use std::path::Path;
use tract_onnx::prelude::*;
use tracing::{error, info};

type RunnablePlan = TypedRunnableModel<TypedModel>;

enum Backend {
    /// Optimized tract inference plan
    Onnx(RunnablePlan),
    /// Constant output regardless of input. Stub backend for tests and
    /// demos that run without a model artifact.
    Fixed(Vec<f32>),
}

/// Holds the classifier backend, or nothing if loading failed.
pub struct ModelStore {
    backend: Option<Backend>,
}

impl ModelStore {
    /// Load the ONNX artifact at `path`. Failure is logged and produces an
    /// unavailable store, not an error.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(model) => {
                info!("Classifier model loaded from {}", path.display());
                Self {
                    backend: Some(Backend::Onnx(model)),
                }
            }
            Err(e) => {
                error!("Failed to load classifier model: {}. Predictions will not work.", e);
                Self { backend: None }
            }
        }
    }

    /// A store with no model. Prediction always fails with `ModelUnavailable`.
    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    /// A store that returns `scores` for every input.
    pub fn fixed(scores: Vec<f32>) -> Self {
        Self {
            backend: Some(Backend::Fixed(scores)),
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    fn try_load(path: &Path) -> Result<RunnablePlan> {
        if !path.exists() {
            return Err(Error::ModelUnavailable(format!(
                "model artifact not found at {}",
                path.display()
            )));
        }
        tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|m| {
                m.with_input_fact(
                    0,
                    InferenceFact::dt_shape(
                        f32::datum_type(),
                        tvec!(1, INPUT_SIZE, INPUT_SIZE, 1),
                    ),
                )
            })
            .and_then(|m| m.into_optimized())
            .and_then(|m| m.into_runnable())
            .map_err(|e| Error::Model(format!("{:#}", e)))
    }

    /// Run the classifier on a (1, 28, 28, 1) input tensor, returning the
    /// full probability vector.
    pub fn predict(&self, input: Tensor) -> Result<Vec<f32>> {
        let backend = self
            .backend
            .as_ref()
            .ok_or_else(|| Error::ModelUnavailable("no classifier loaded".to_string()))?;

        let model = match backend {
            Backend::Fixed(scores) => return Ok(scores.clone()),
            Backend::Onnx(model) => model,
        };

        let outputs = model
            .run(tvec!(input.into()))
            .map_err(|e| Error::Model(format!("inference failed: {:#}", e)))?;

        let scores = outputs[0]
            .to_array_view::<f32>()
            .map_err(|e| Error::Model(format!("unexpected output tensor: {:#}", e)))?;

        Ok(scores.iter().copied().collect())
    }
}
