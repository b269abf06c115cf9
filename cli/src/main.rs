mod trace;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use minimap::config::{ConfigError, MinimapConfig};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::trace::Trace;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("invalid trace JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid minimap config: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Parser, Debug)]
#[command(name = "minimap-cli", about = "Replay minimap interaction traces through the engine")]
struct Cli {
    /// Log filter, e.g. `minimap=trace`. Logs go to stderr.
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Feed the trace's events to the engine and print each action as a JSON line.
    Replay {
        trace: PathBuf,
        /// Apply proposed offsets to the view, as an accepting host would.
        #[arg(long, default_value_t = false)]
        apply: bool,
    },
    /// Print the render scene for the trace's initial state.
    Scene {
        trace: PathBuf,
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Replay { trace, apply } => run_replay(&trace, apply),
        Command::Scene { trace, pretty } => run_scene(&trace, pretty),
    }
}

fn run_replay(path: &Path, apply: bool) -> Result<(), CliError> {
    let (trace, config) = load_trace(path)?;
    let mut engine = trace.engine(config);
    let steps = trace::replay(&mut engine, &trace.events, apply);
    info!(events = trace.events.len(), actions = steps.len(), apply, "replay finished");
    for step in &steps {
        print_line(step)?;
    }
    Ok(())
}

fn run_scene(path: &Path, pretty: bool) -> Result<(), CliError> {
    let (trace, config) = load_trace(path)?;
    let scene = trace.engine(config).scene();
    if pretty {
        println!("{}", serde_json::to_string_pretty(&scene)?);
    } else {
        print_line(&scene)?;
    }
    Ok(())
}

fn load_trace(path: &Path) -> Result<(Trace, MinimapConfig), CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_path_buf(), source })?;
    let trace: Trace = serde_json::from_str(&raw)?;
    let config = match &trace.config {
        Some(config) => {
            config.validate()?;
            config.clone()
        }
        None => MinimapConfig::from_env()?,
    };
    Ok((trace, config))
}

fn print_line(value: &impl Serialize) -> Result<(), CliError> {
    let rendered = serde_json::to_string(value)?;
    println!("{rendered}");
    Ok(())
}
