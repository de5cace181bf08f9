//! Elbow detection on a WCSS curve.
//!
//! Implements the kneedle heuristic for a convex, decreasing curve: both axes
//! are normalized to [0, 1] and the knee is the point with the greatest
//! vertical distance below the straight line connecting the curve's endpoints.
//! Degenerate curves never abort the pipeline; they fall back to a fixed
//! default k with an advisory warning.

use log::warn;

use crate::curve::{CostCurve, CurvePoint};

/// Default cluster count when no knee can be detected.
pub const FALLBACK_K: usize = 5;

/// A palette needs at least two distinguishable colors.
pub const MIN_K: usize = 2;

/// The selected cluster count, plus whether the fallback policy was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptimalK {
    /// Selected cluster count, always >= [`MIN_K`].
    pub k: usize,
    /// True when no knee was detected and [`FALLBACK_K`] was used. Callers
    /// should surface this to the user as a non-blocking advisory.
    pub used_fallback: bool,
}

/// Select the most probable elbow k for `curve`.
///
/// Deterministic for a given curve. A knee detected at k = 1 is promoted to
/// [`MIN_K`]; any degenerate input (flat, rising, non-finite, or fewer than
/// three points) yields [`FALLBACK_K`] with `used_fallback` set.
pub fn select_optimal_k(curve: &CostCurve) -> OptimalK {
    match knee_index(&curve.points) {
        Some(i) => OptimalK {
            k: curve.points[i].k.max(MIN_K),
            used_fallback: false,
        },
        None => {
            warn!("no elbow detected on WCSS curve, falling back to k={FALLBACK_K}");
            OptimalK {
                k: FALLBACK_K,
                used_fallback: true,
            }
        }
    }
}

/// Index of the knee point, or `None` when the curve is degenerate.
fn knee_index(points: &[CurvePoint]) -> Option<usize> {
    let n = points.len();
    if n < 3 {
        return None;
    }
    if points.iter().any(|p| !p.wcss.is_finite()) {
        return None;
    }

    let x0 = points[0].k as f64;
    let x_span = points[n - 1].k as f64 - x0;
    let y0 = f64::from(points[0].wcss);
    let y_span = y0 - f64::from(points[n - 1].wcss);
    // Flat or rising curves have no meaningful knee.
    if x_span <= 0.0 || y_span <= 0.0 {
        return None;
    }

    // Normalized, the endpoints sit at (0, 1) and (1, 0) and the chord between
    // them is y = 1 - x. The knee maximizes the distance below that chord.
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in points.iter().enumerate() {
        let x = (p.k as f64 - x0) / x_span;
        let y = (f64::from(p.wcss) - f64::from(points[n - 1].wcss)) / y_span;
        let dist = (1.0 - x) - y;
        match best {
            Some((_, d)) if dist <= d => {}
            _ => best = Some((i, dist)),
        }
    }

    best.filter(|&(_, d)| d > 0.0).map(|(i, _)| i)
}
