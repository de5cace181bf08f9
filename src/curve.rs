//! Cost-curve construction for the elbow analysis.
//!
//! For k = 1..=max_k, fits k-means on a bounded random sample of the pixel set
//! and records the within-cluster sum of squares (WCSS). The sample is drawn
//! without replacement from a seeded RNG, so the curve is reproducible for a
//! given input and seed.

use palette::Srgb;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{Error, Result};
use crate::kmeans::best_fit;

/// Upper bound on the number of pixels used for curve analysis.
pub const MAX_SAMPLE_SIZE: usize = 100_000;

/// One (k, WCSS) measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePoint {
    /// Cluster count.
    pub k: usize,
    /// Within-cluster sum of squares of the best fit for `k`.
    pub wcss: f32,
}

/// WCSS measurements in ascending k order, k = 1..=max_k.
#[derive(Clone, Debug, PartialEq)]
pub struct CostCurve {
    /// Curve points, ascending by `k`.
    pub points: Vec<CurvePoint>,
}

impl CostCurve {
    /// The k values of the curve, in order.
    pub fn ks(&self) -> Vec<usize> {
        self.points.iter().map(|p| p.k).collect()
    }

    /// The WCSS values of the curve, in order.
    pub fn wcss(&self) -> Vec<f32> {
        self.points.iter().map(|p| p.wcss).collect()
    }
}

/// Compute the WCSS curve for k = 1..=`max_k` on a bounded sample of `pixels`.
///
/// At most [`MAX_SAMPLE_SIZE`] pixels are used, drawn uniformly without
/// replacement from a `StdRng` seeded with `seed`.
pub fn build_cost_curve(pixels: &[Srgb<f32>], max_k: usize, seed: u64) -> Result<CostCurve> {
    if pixels.is_empty() {
        return Err(Error::InsufficientData);
    }
    if max_k < 1 {
        return Err(Error::InvalidParameter {
            name: "max_k",
            message: "must be at least 1",
        });
    }

    let sample = sample_pixels(pixels, seed);

    let points = (1..=max_k)
        .map(|k| CurvePoint {
            k,
            wcss: best_fit(&sample, k, seed).score,
        })
        .collect();

    Ok(CostCurve { points })
}

/// Draw min(|pixels|, [`MAX_SAMPLE_SIZE`]) pixels without replacement.
fn sample_pixels(pixels: &[Srgb<f32>], seed: u64) -> Vec<Srgb<f32>> {
    if pixels.len() <= MAX_SAMPLE_SIZE {
        return pixels.to_vec();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    rand::seq::index::sample(&mut rng, pixels.len(), MAX_SAMPLE_SIZE)
        .iter()
        .map(|i| pixels[i])
        .collect()
}
