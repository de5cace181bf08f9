use anyhow::{Context, Result};
use clap::Parser;
use dominant_colors_wasm::{
    DEFAULT_MAX_K, DEFAULT_SEED, build_cost_curve, extract_palette, image_pixels, select_optimal_k,
};
use std::fs;
use std::path::PathBuf;

/// Extract dominant-color palettes from images (native wrapper).
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// One or more input image paths
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Number of colors to extract; when omitted, the elbow method picks it
    #[arg(short = 'k', long)]
    colors: Option<usize>,

    /// Largest cluster count probed by the elbow analysis
    #[arg(long, default_value_t = DEFAULT_MAX_K)]
    max_k: usize,

    /// Seed for sampling and k-means initialization
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Emit results as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    for input in &args.inputs {
        let bytes =
            fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
        let img = image::load_from_memory(&bytes)
            .with_context(|| format!("failed to decode {}", input.display()))?;

        let (k, curve) = match args.colors {
            Some(k) => (k, None),
            None => {
                let pixels = image_pixels(&img);
                let curve = build_cost_curve(&pixels, args.max_k, args.seed)
                    .context("cost-curve analysis failed")?;
                let selection = select_optimal_k(&curve);
                if selection.used_fallback {
                    eprintln!(
                        "{}: no elbow detected, using default k={}",
                        input.display(),
                        selection.k
                    );
                }
                (selection.k, Some(curve))
            }
        };

        let palette = extract_palette(&img, k, args.seed).context("palette extraction failed")?;

        if args.json {
            let colors: Vec<serde_json::Value> = palette
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "hex": c.hex(),
                        "population": c.population,
                    })
                })
                .collect();
            let mut doc = serde_json::json!({
                "input": input.display().to_string(),
                "k": k,
                "palette": colors,
            });
            if let Some(curve) = &curve {
                doc["curve"] = serde_json::json!({
                    "ks": curve.ks(),
                    "wcss": curve.wcss(),
                });
            }
            println!("{}", serde_json::to_string_pretty(&doc)?);
        } else {
            println!("{} (k = {k})", input.display());
            for color in &palette {
                println!("  {}  {} px", color.hex(), color.population);
            }
        }
    }

    Ok(())
}
