//! Dominant-color palette extraction with automatic cluster-count selection.
//!
//! The pipeline has three stages, each a pure function over its input:
//!
//! 1. Build a WCSS cost curve by fitting k-means for k = 1..=10 on a bounded
//!    random sample of the image's pixels ([`build_cost_curve`]).
//! 2. Pick the most probable elbow of that curve with a kneedle-style
//!    heuristic, falling back to k = 5 when no knee exists
//!    ([`select_optimal_k`]).
//! 3. Re-cluster the full pixel set with the chosen k and rank the resulting
//!    centers by how many pixels they represent ([`extract_palette`]).
//!
//! Sampling and centroid initialization are driven by [`DEFAULT_SEED`], so
//! identical inputs produce identical curves, k selections, and palettes.
//!
//! Browser callers use the `wasm_bindgen` entry points; native callers use the
//! `*_bytes` wrappers or the `DynamicImage`-level functions directly.

use image::DynamicImage;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

mod curve;
mod elbow;
mod error;
mod kmeans;
mod palette;

pub use curve::{CostCurve, CurvePoint, MAX_SAMPLE_SIZE, build_cost_curve};
pub use elbow::{FALLBACK_K, MIN_K, OptimalK, select_optimal_k};
pub use error::{Error, Result};
pub use palette::{DominantColor, extract_palette, image_pixels};

/// Seed for pixel sampling and k-means initialization. Every entry point that
/// does not take an explicit seed uses this one.
pub const DEFAULT_SEED: u64 = 42;

/// Largest cluster count probed during curve analysis.
pub const DEFAULT_MAX_K: usize = 10;

/// Build the cost curve for `img` (k = 1..=[`DEFAULT_MAX_K`]) and select the
/// elbow k from it.
///
/// The returned [`OptimalK`] carries the advisory `used_fallback` flag; the
/// curve is returned alongside so callers can display the analysis.
pub fn detect_optimal_k(img: &DynamicImage) -> Result<(OptimalK, CostCurve)> {
    let pixels = image_pixels(img);
    let curve = build_cost_curve(&pixels, DEFAULT_MAX_K, DEFAULT_SEED)?;
    let selection = select_optimal_k(&curve);
    Ok((selection, curve))
}

/// Extract the `k` dominant colors of `img`, most-represented first.
pub fn dominant_palette(img: &DynamicImage, k: usize) -> Result<Vec<DominantColor>> {
    extract_palette(img, k, DEFAULT_SEED)
}

/// Decode `input` and run the curve/elbow stages.
#[cfg(not(target_arch = "wasm32"))]
pub fn detect_optimal_k_bytes(input: &[u8]) -> Result<(OptimalK, CostCurve)> {
    let img = image::load_from_memory(input)?;
    detect_optimal_k(&img)
}

/// Decode `input` and extract its `k` dominant colors.
#[cfg(not(target_arch = "wasm32"))]
pub fn dominant_palette_bytes(input: &[u8], k: usize) -> Result<Vec<DominantColor>> {
    let img = image::load_from_memory(input)?;
    dominant_palette(&img, k)
}

/// Decode an uploaded image and return `{ optimalK, usedFallback, ks, wcss }`.
///
/// `usedFallback` signals that no elbow was found and the default k was used;
/// the caller should show a non-blocking notice rather than an error.
#[wasm_bindgen]
pub fn compute_optimal_k(input: Vec<u8>) -> std::result::Result<Object, JsValue> {
    let img = image::load_from_memory(&input)
        .map_err(|e| JsValue::from_str(&format!("Unable to decode image: {e}")))?;
    let (selection, curve) =
        detect_optimal_k(&img).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let ks = Array::new();
    let wcss = Array::new();
    for point in &curve.points {
        ks.push(&JsValue::from_f64(point.k as f64));
        wcss.push(&JsValue::from_f64(f64::from(point.wcss)));
    }

    let result = Object::new();
    Reflect::set(
        &result,
        &JsValue::from_str("optimalK"),
        &JsValue::from_f64(selection.k as f64),
    )?;
    Reflect::set(
        &result,
        &JsValue::from_str("usedFallback"),
        &JsValue::from_bool(selection.used_fallback),
    )?;
    Reflect::set(&result, &JsValue::from_str("ks"), &ks)?;
    Reflect::set(&result, &JsValue::from_str("wcss"), &wcss)?;

    Ok(result)
}

/// Decode an uploaded image and return an array of `{ hex, population }`
/// entries, most-represented color first.
#[wasm_bindgen]
pub fn compute_palette(input: Vec<u8>, k: usize) -> std::result::Result<Array, JsValue> {
    let img = image::load_from_memory(&input)
        .map_err(|e| JsValue::from_str(&format!("Unable to decode image: {e}")))?;
    let palette = dominant_palette(&img, k).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let entries = Array::new();
    for color in &palette {
        let entry = Object::new();
        Reflect::set(
            &entry,
            &JsValue::from_str("hex"),
            &JsValue::from_str(&color.hex()),
        )?;
        Reflect::set(
            &entry,
            &JsValue::from_str("population"),
            &JsValue::from_f64(color.population as f64),
        )?;
        entries.push(&entry);
    }

    Ok(entries)
}
