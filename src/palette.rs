//! Dominant-color extraction for a chosen cluster count.

use image::DynamicImage;
use palette::Srgb;

use crate::error::{Error, Result};
use crate::kmeans::best_fit;

/// A cluster center and the number of pixels assigned to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DominantColor {
    /// Cluster center rounded to 8-bit RGB.
    pub color: Srgb<u8>,
    /// Number of pixels assigned to this center.
    pub population: usize,
}

impl DominantColor {
    /// CSS-style `#rrggbb` hex code, lowercase.
    pub fn hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            self.color.red, self.color.green, self.color.blue
        )
    }
}

/// Coerce `img` to plain RGB (dropping any alpha or palette mode) and flatten
/// it into a pixel vector suitable for clustering.
pub fn image_pixels(img: &DynamicImage) -> Vec<Srgb<f32>> {
    let rgb8 = img.to_rgb8();
    palette::cast::from_component_slice::<Srgb<u8>>(rgb8.as_raw())
        .iter()
        .map(|&c| c.into_format::<f32>())
        .collect()
}

/// Extract the `k` dominant colors of `img`, ranked by population descending.
///
/// Clusters the full pixel set (no sampling) with a seeded best-of-runs
/// k-means fit, then counts the pixels assigned to each center. Equal
/// populations keep the fit's centroid order (the sort is stable). If `k`
/// exceeds the number of distinct colors, the surplus centers come back
/// degenerate with a population of zero rather than erroring.
pub fn extract_palette(img: &DynamicImage, k: usize, seed: u64) -> Result<Vec<DominantColor>> {
    if k < 1 {
        return Err(Error::InvalidParameter {
            name: "k",
            message: "must be at least 1",
        });
    }
    let pixels = image_pixels(img);
    if pixels.is_empty() {
        return Err(Error::InsufficientData);
    }

    let fit = best_fit(&pixels, k, seed);

    let mut populations = vec![0usize; fit.centroids.len()];
    for &idx in &fit.indices {
        populations[idx as usize] += 1;
    }

    let mut palette: Vec<DominantColor> = fit
        .centroids
        .iter()
        .zip(populations)
        .map(|(&centroid, population)| DominantColor {
            color: centroid.into_format::<u8>(),
            population,
        })
        .collect();
    palette.sort_by(|a, b| b.population.cmp(&a.population));

    Ok(palette)
}
