use pixel_distort::filters::{Filter, FilterParams};
use pixel_distort::image::io::{load_rgba_image, save_rgba_image};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct BatchConfig {
    pub input: PathBuf,
    pub filter: Filter,
    #[serde(default)]
    pub params: FilterParams,
    /// Seed for the noise/glitch generator; omit for entropy seeding.
    #[serde(default)]
    pub seed: Option<u64>,
    pub output: PathBuf,
}

pub fn load_config(path: &Path) -> Result<BatchConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let mut img = load_rgba_image(&config.input)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    config.filter.apply(&mut img, &config.params, &mut rng);
    save_rgba_image(&img, &config.output)?;

    println!(
        "Applied {} to {} ({}x{}), saved to {}",
        config.filter.name(),
        config.input.display(),
        img.width(),
        img.height(),
        config.output.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: batch_filter <config.json>".to_string()
}
