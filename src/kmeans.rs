//! Thin wrapper around the `kmeans_colors` fitting primitive.
//!
//! k-means is sensitive to centroid initialization, so every fit in this crate
//! runs the algorithm several times from different seeds and keeps the result
//! with the lowest within-cluster sum of squares (`score`).

use kmeans_colors::{Kmeans, get_kmeans};
use palette::Srgb;

/// Number of independent k-means runs per fit; the lowest-score run wins.
pub(crate) const KMEANS_RUNS: u64 = 10;

/// Maximum Lloyd iterations per run.
pub(crate) const KMEANS_MAX_ITER: usize = 20;

/// Convergence threshold per run.
pub(crate) const KMEANS_CONVERGE: f32 = 1e-4;

/// Fit `k` clusters on `pixels`, keeping the best of [`KMEANS_RUNS`] seeded runs.
///
/// Runs are seeded `seed, seed + 1, ..` so a fixed `seed` makes the whole fit
/// deterministic. Callers must guarantee `k >= 1` and a non-empty `pixels`.
pub(crate) fn best_fit(pixels: &[Srgb<f32>], k: usize, seed: u64) -> Kmeans<Srgb> {
    debug_assert!(k >= 1);
    debug_assert!(!pixels.is_empty());

    let mut best = Kmeans::new();
    for run in 0..KMEANS_RUNS {
        let fit = get_kmeans(
            k,
            KMEANS_MAX_ITER,
            KMEANS_CONVERGE,
            false,
            pixels,
            seed + run,
        );
        if fit.score < best.score {
            best = fit;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_fit_assigns_every_pixel() {
        let pixels = vec![
            Srgb::new(1.0, 0.0, 0.0),
            Srgb::new(1.0, 0.0, 0.0),
            Srgb::new(0.0, 0.0, 1.0),
            Srgb::new(0.0, 0.0, 1.0),
        ];
        let fit = best_fit(&pixels, 2, 42);
        assert_eq!(fit.centroids.len(), 2);
        assert_eq!(fit.indices.len(), pixels.len());
    }

    #[test]
    fn best_fit_is_deterministic_for_a_fixed_seed() {
        let pixels: Vec<Srgb<f32>> = (0..60)
            .map(|i| {
                let v = (i % 3) as f32 / 2.0;
                Srgb::new(v, 1.0 - v, 0.5)
            })
            .collect();
        let a = best_fit(&pixels, 3, 42);
        let b = best_fit(&pixels, 3, 42);
        assert_eq!(a.score, b.score);
        assert_eq!(a.indices, b.indices);
    }
}
