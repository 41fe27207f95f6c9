use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use flagwave_kernel::{GridSimulator, PatternCycle, WaveConfig};
use flagwave_render::{DebugTextRenderer, FlagMapRenderer, Renderer};
use flagwave_tools::GridInspector;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flagwave-cli", about = "Headless host for the flagwave grid simulation")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ConfigArgs {
    /// YAML file overriding the default tunables
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Cycle through all seven flags, Netherlands included
    #[arg(long)]
    extended: bool,
    /// Override the grid size
    #[arg(long)]
    grid_size: Option<usize>,
}

impl ConfigArgs {
    fn load(&self) -> Result<WaveConfig> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => WaveConfig::default(),
        };
        if self.extended {
            config.cycle = PatternCycle::Extended;
        }
        if let Some(size) = self.grid_size {
            config.grid_size = size;
        }
        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Run the simulation at a fixed frame rate and print a summary
    Run {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "300")]
        ticks: u64,
        /// Frames per second used to derive the tick delta
        #[arg(short, long, default_value = "60")]
        fps: f32,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
        /// Also dump every cell after the last tick
        #[arg(long)]
        dump: bool,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Print the top-down flag map at a point in time
    Frame {
        /// Simulation time in seconds
        #[arg(short, long, default_value = "0")]
        time: f32,
        /// Force a pattern index before rendering
        #[arg(short, long)]
        pattern: Option<usize>,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Run two simulators in lockstep and compare their state hashes
    Check {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "600")]
        ticks: u64,
        /// Frames per second used to derive the tick delta
        #[arg(short, long, default_value = "60")]
        fps: f32,
        #[command(flatten)]
        config: ConfigArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("flagwave-cli v{}", env!("CARGO_PKG_VERSION"));
            let defaults = WaveConfig::default();
            println!(
                "kernel: grid={}x{} cycle={}",
                defaults.grid_size,
                defaults.grid_size,
                defaults.cycle.flag_count()
            );
            println!("render: {}", flagwave_render::crate_info());
            println!("tools: {}", flagwave_tools::crate_info());
        }
        Commands::Run {
            ticks,
            fps,
            json,
            dump,
            config,
        } => {
            let config = config.load()?;
            let mut sim = GridSimulator::from_config(config)?;
            run_fixed(&mut sim, ticks, fps)?;

            for event in sim.drain_events() {
                tracing::debug!(?event, "simulation event");
            }
            let summary = GridInspector::summary(&sim);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{summary}");
                for (color, count) in GridInspector::color_histogram(&sim) {
                    println!("  {color:<6} {count}");
                }
            }
            if dump {
                print!("{}", DebugTextRenderer::new().render(&sim));
            }
        }
        Commands::Frame {
            time,
            pattern,
            config,
        } => {
            let config = config.load()?;
            let params = config.params();
            let mut sim = GridSimulator::from_config(config)?;
            if let Some(index) = pattern {
                sim.set_pattern(index)?;
            }
            // Zero delta keeps the forced pattern active.
            sim.tick(0.0, time, &params)?;
            println!("flag={} t={time:.3}s", sim.current_flag());
            print!("{}", FlagMapRenderer::new().render(&sim));
        }
        Commands::Check { ticks, fps, config } => {
            let config = config.load()?;
            println!("Determinism check: ticks={ticks}, fps={fps}");

            let mut a = GridSimulator::from_config(config.clone())?;
            let mut b = GridSimulator::from_config(config)?;
            run_fixed(&mut a, ticks, fps)?;
            run_fixed(&mut b, ticks, fps)?;

            println!("Run A: {}", GridInspector::summary(&a));
            println!("Run B: {}", GridInspector::summary(&b));
            let matched = a.state_hash() == b.state_hash();
            println!("Match: {}", if matched { "OK" } else { "MISMATCH" });
            if !matched {
                anyhow::bail!("state hashes diverged");
            }
        }
    }

    Ok(())
}

fn read_config(path: &Path) -> Result<WaveConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_yaml::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Drive `sim` for `ticks` frames of `1 / fps` seconds each.
fn run_fixed(sim: &mut GridSimulator, ticks: u64, fps: f32) -> Result<()> {
    if !(fps.is_finite() && fps > 0.0) {
        anyhow::bail!("fps must be positive, got {fps}");
    }
    let dt = 1.0 / fps;
    for _ in 0..ticks {
        sim.advance(dt)?;
    }
    tracing::info!(
        ticks,
        elapsed = sim.elapsed(),
        flag = %sim.current_flag(),
        "run complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_run_with_overrides() {
        let cli = Cli::try_parse_from([
            "flagwave-cli",
            "run",
            "--ticks",
            "10",
            "--extended",
            "--grid-size",
            "6",
        ])
        .unwrap();
        match cli.command {
            Commands::Run { ticks, config, .. } => {
                assert_eq!(ticks, 10);
                let loaded = config.load().unwrap();
                assert_eq!(loaded.grid_size, 6);
                assert_eq!(loaded.cycle, PatternCycle::Extended);
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn zero_grid_size_override_is_rejected() {
        let args = ConfigArgs {
            config: None,
            extended: false,
            grid_size: Some(0),
        };
        assert!(args.load().is_err());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: WaveConfig = serde_yaml::from_str("grid_size: 12\ncycle: extended\n").unwrap();
        assert_eq!(config.grid_size, 12);
        assert_eq!(config.cycle, PatternCycle::Extended);
        assert_eq!(config.spacing, 1.5);
        assert_eq!(config.pattern_change_interval, 5.0);
    }

    #[test]
    fn run_fixed_rejects_bad_fps() {
        let mut sim = GridSimulator::initialize(3, 1.5).unwrap();
        assert!(run_fixed(&mut sim, 1, 0.0).is_err());
        assert_eq!(sim.tick_count(), 0);
    }

    #[test]
    fn run_fixed_advances_patterns() {
        let mut sim = GridSimulator::initialize(3, 1.5).unwrap();
        // 5.0 s at 4 fps is twenty exact quarter-second steps.
        run_fixed(&mut sim, 20, 4.0).unwrap();
        assert_eq!(sim.tick_count(), 20);
        assert_eq!(sim.pattern_index(), 1);
    }
}
