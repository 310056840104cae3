use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use fieldarea::config::{FileConfig, Settings};
use fieldarea::domain::{BoundaryReport, FieldBoundary, totals_line};
use fieldarea::geojson::read_boundaries;

/// Estimate the area and center of field boundaries drawn on a map
///
/// Examples:
///   # Area of a drawn boundary in acres (default)
///   fieldarea north_field.geojson
///
///   # Several files, in hectares
///   fieldarea -u hectares plots/*.geojson
///
///   # Pipe the map widget's output and get JSON back
///   cat boundary.geojson | fieldarea --json
#[derive(Parser, Debug)]
#[command(name = "fieldarea")]
#[command(version, about, long_about = None)]
struct Args {
    /// GeoJSON files (Polygon, MultiPolygon, Feature or FeatureCollection); `-` reads stdin
    inputs: Vec<PathBuf>,

    /// Path to config file (optional, auto-searches fieldarea.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Display unit: acres, hectares or square_meters (unknown tags mean square_meters)
    #[arg(short = 'u', long)]
    unit: Option<String>,

    /// Print a JSON array of reports instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = match args.config {
        Some(ref config_path) => Some(FileConfig::from_path(config_path)?),
        None => FileConfig::load(),
    }
    .unwrap_or_default();

    let settings = Settings::resolve(args.unit.as_deref(), args.verbose, args.json, &file_config);
    let (unit, verbose, json) = (settings.unit, settings.verbose, settings.json);

    if verbose && let Some(ref tag) = settings.unknown_unit {
        eprintln!("Warning: unknown unit {:?}, reporting square meters", tag);
    }

    let inputs = if args.inputs.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        args.inputs.clone()
    };

    if verbose {
        eprintln!("Configuration:");
        eprintln!("  Unit: {}", unit);
        eprintln!("  Inputs: {}", inputs.len());
        eprintln!("  Output: {}", if json { "json" } else { "text" });
    }

    let boundaries = load_all(&inputs, verbose)?;
    let reports: Vec<BoundaryReport> = boundaries
        .iter()
        .map(|b| BoundaryReport::from_boundary(b, unit))
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&reports).context("Failed to serialize reports")?;
        println!("{}", out);
    } else {
        for report in &reports {
            println!("{}", report.summary_line());
        }
        if let Some(total) = totals_line(&reports, unit) {
            println!();
            println!("{}", total);
        }
    }

    if verbose {
        eprintln!(
            "Done! {} boundaries in {:.3}s",
            reports.len(),
            total_start.elapsed().as_secs_f32()
        );
    }

    Ok(())
}

fn load_all(inputs: &[PathBuf], verbose: bool) -> Result<Vec<FieldBoundary>> {
    let spinner = (inputs.len() > 1).then(|| create_spinner("Reading boundaries..."));

    let mut boundaries = Vec::new();
    for path in inputs {
        if let Some(ref pb) = spinner {
            pb.set_message(format!("Reading {}...", path.display()));
        }

        let parsed = read_boundaries(path)
            .with_context(|| format!("Failed to load boundaries from {}", path.display()))?;
        if verbose {
            eprintln!("  {}: {} boundaries", path.display(), parsed.len());
        }
        boundaries.extend(parsed);
    }

    if let Some(pb) = spinner {
        pb.finish_with_message(format!(
            "Read {} boundaries from {} files",
            boundaries.len(),
            inputs.len()
        ));
    }

    Ok(boundaries)
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
