use dominant_colors_wasm::{build_cost_curve, select_optimal_k};
use palette::Srgb;
use proptest::prelude::*;

/// Tight clusters around well-separated anchor colors.
fn clustered_pixels(anchors: &[(f32, f32, f32)], per_cluster: usize) -> Vec<Srgb<f32>> {
    let mut pixels = Vec::new();
    for &(r, g, b) in anchors {
        for j in 0..per_cluster {
            let jitter = j as f32 * 1e-4;
            pixels.push(Srgb::new(
                (r + jitter).min(1.0),
                (g + jitter).min(1.0),
                (b + jitter).min(1.0),
            ));
        }
    }
    pixels
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_curve_shape_holds_on_clustered_data(
        n_clusters in 2usize..5,
        per_cluster in 5usize..20,
        max_k in 2usize..7,
        seed in 0u64..1000,
    ) {
        // Anchors on the corners of the RGB cube keep clusters far apart.
        let corners = [
            (0.0, 0.0, 0.0),
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (1.0, 1.0, 1.0),
        ];
        let pixels = clustered_pixels(&corners[..n_clusters], per_cluster);

        let curve = build_cost_curve(&pixels, max_k, seed).unwrap();

        prop_assert_eq!(curve.points.len(), max_k);
        for (i, point) in curve.points.iter().enumerate() {
            prop_assert_eq!(point.k, i + 1);
            prop_assert!(point.wcss.is_finite());
            prop_assert!(point.wcss >= 0.0);
        }
        for pair in curve.points.windows(2) {
            prop_assert!(pair[0].wcss + 1e-3 >= pair[1].wcss);
        }
    }

    #[test]
    fn prop_selected_k_is_at_least_two(
        wcss in prop::collection::vec(0.0f32..1000.0, 1..12),
    ) {
        let curve = dominant_colors_wasm::CostCurve {
            points: wcss
                .iter()
                .enumerate()
                .map(|(i, &w)| dominant_colors_wasm::CurvePoint { k: i + 1, wcss: w })
                .collect(),
        };
        let selection = select_optimal_k(&curve);
        prop_assert!(selection.k >= 2);
        // Repeated selection on the same curve is stable.
        prop_assert_eq!(select_optimal_k(&curve), selection);
    }
}
