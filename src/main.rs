// ============================================================================
// printzone CLI: replay recorded editing scenarios and compute placements
// ============================================================================
//
// Usage examples:
//   printzone replay scenario.json
//   printzone fit --design 800x600 --target 50,50,200,200
//   RUST_LOG=printzone=debug printzone replay scenario.json

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use printzone::placement::AutoPositioner;
use printzone::replay::Scenario;
use printzone::settings::default_settings_path;
use printzone::{EngineSettings, ImageBounds, Region};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "printzone",
    version,
    about = "Print-area positioning for template and mockup images"
)]
struct Cli {
    /// Settings file. Defaults to the platform config directory.
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scenario JSON file and print the final regions and placement
    Replay {
        #[arg(value_name = "SCENARIO.json")]
        path: PathBuf,
    },
    /// Fit a design of the given size into a target region
    Fit {
        /// Design natural size, e.g. 800x600
        #[arg(long, value_parser = parse_size, value_name = "WxH")]
        design: Option<ImageBounds>,
        /// Target region, e.g. 50,50,200,200. Defaults to the configured default region.
        #[arg(long, value_parser = parse_region, value_name = "X,Y,W,H")]
        target: Option<Region>,
    },
}

fn parse_size(s: &str) -> std::result::Result<ImageBounds, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let width = w.trim().parse::<f64>().map_err(|e| format!("bad width '{w}': {e}"))?;
    let height = h.trim().parse::<f64>().map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok(ImageBounds::new(width, height))
}

fn parse_region(s: &str) -> std::result::Result<Region, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("bad number '{p}': {e}")))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    match parts.as_slice() {
        [x, y, w, h] => Ok(Region::new(*x, *y, *w, *h)),
        _ => Err(format!("expected X,Y,W,H, got '{s}'")),
    }
}

fn load_settings(path: Option<PathBuf>) -> Result<EngineSettings> {
    match path.or_else(default_settings_path) {
        Some(path) => EngineSettings::load_from(&path)
            .with_context(|| format!("failed to load settings from {}", path.display())),
        None => Ok(EngineSettings::default()),
    }
}

fn main() -> Result<()> {
    printzone::logging::init();
    let cli = Cli::parse();
    let settings = load_settings(cli.settings)?;

    match cli.command {
        Command::Replay { path } => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let mut scenario: Scenario = serde_json::from_str(&content)
                .with_context(|| format!("invalid scenario in {}", path.display()))?;
            scenario
                .settings
                .get_or_insert(settings)
                .validate()
                .context("invalid scenario settings")?;

            info!(events = scenario.events.len(), "Replaying scenario");
            let outcome = scenario.replay();
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Command::Fit { design, target } => {
            let positioner = AutoPositioner::new(settings.default_region);
            let placement = positioner.position(design, target.as_ref());
            println!("{}", serde_json::to_string_pretty(&placement)?);
        }
    }
    Ok(())
}
