//! Canvas image normalization
//!
//! Converts the browser's base64-encoded canvas snapshot into the tensor the
//! classifier was trained on: single channel, 28x28, values in [0,1], with
//! strokes as the high-intensity value (training data is white-on-black,
//! the canvas is ink-on-white, so the bitmap is inverted once).

use crate::{Error, Result, INPUT_SIZE};
use base64::{engine::general_purpose, Engine as _};
use image::imageops::FilterType;
use tract_onnx::prelude::*;

/// Strip a data-URL header (`data:image/png;base64,....`) if present,
/// returning the bare base64 payload. Inputs without the marker pass
/// through unchanged, so stripping is idempotent.
pub fn strip_data_url_prefix(image_data: &str) -> &str {
    match image_data.find("base64,") {
        Some(idx) => &image_data[idx + "base64,".len()..],
        None => image_data,
    }
}

/// Decode a base64 (or data-URL) canvas image into the model input tensor
/// of shape (1, 28, 28, 1).
pub fn decode_canvas_image(image_data: &str) -> Result<Tensor> {
    let payload = strip_data_url_prefix(image_data.trim());

    let bytes = general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| Error::InvalidImage(format!("base64 decode failed: {}", e)))?;

    let img = image::load_from_memory(&bytes)
        .map_err(|e| Error::InvalidImage(format!("image decode failed: {}", e)))?;

    // Grayscale, then resize down to the training resolution.
    let gray = img.to_luma8();
    let resized = image::imageops::resize(
        &gray,
        INPUT_SIZE as u32,
        INPUT_SIZE as u32,
        FilterType::CatmullRom,
    );

    // Normalize to [0,1] and invert polarity in one pass.
    let mut pixels: Vec<f32> = Vec::with_capacity(INPUT_SIZE * INPUT_SIZE);
    for p in resized.pixels() {
        let v = f32::from(p.0[0]) / 255.0;
        pixels.push(1.0 - v);
    }

    let tensor = tract_ndarray::Array4::from_shape_vec((1, INPUT_SIZE, INPUT_SIZE, 1), pixels)
        .map_err(|e| Error::InvalidImage(format!("tensor reshape failed: {}", e)))?
        .into_tensor();

    Ok(tensor)
}
