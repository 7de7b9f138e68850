//! CLI: Render an orchestration snapshot as a Graphviz DOT diagram.
//!
//! Usage: `render_graph [OPTIONS] <path-to-snapshot>`
//! Example: render_graph --rankdir LR --output run.dot snapshot.json
//!
//! DOT goes to stdout unless `--output` is given; logs go to stderr.
//! Set RUST_LOG=orchestration_visualizer=trace for span-level detail.

use clap::Parser;
use orchestration_visualizer::render_options::DEFAULT_GRAPH_NAME;
use orchestration_visualizer::snapshot_io::load_snapshot;
use orchestration_visualizer::{RankDir, RenderOptions, render_snapshot};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Render an orchestration snapshot as a Graphviz DOT diagram.
#[derive(Parser, Debug)]
#[command(name = "render_graph")]
#[command(
  after_help = r#"Environment variables (override --graph-name and --rankdir when set):
  ORCHESTRATION_GRAPH_NAME   Name of the emitted digraph.
  ORCHESTRATION_RANKDIR      Layout direction: TB, LR, BT or RL.

Examples:
  render_graph snapshot.json | dot -Tsvg > run.svg
  render_graph --rankdir LR --output run.dot snapshot.json"#
)]
struct Args {
  /// Name of the emitted digraph. Overridden by ORCHESTRATION_GRAPH_NAME if set.
  #[arg(long, value_name = "NAME", default_value = DEFAULT_GRAPH_NAME)]
  graph_name: String,

  /// Layout direction (TB, LR, BT, RL). Overridden by ORCHESTRATION_RANKDIR if set.
  #[arg(long, value_name = "DIR")]
  rankdir: Option<String>,

  /// Write DOT to this file instead of stdout.
  #[arg(long, short, value_name = "FILE")]
  output: Option<PathBuf>,

  /// Path to the orchestration snapshot (JSON)
  #[arg(value_name = "path-to-snapshot")]
  snapshot_path: PathBuf,
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(io::stderr)
    .init();

  let args = Args::parse();

  // Env vars override flags.
  let graph_name = env::var("ORCHESTRATION_GRAPH_NAME").unwrap_or_else(|_| args.graph_name.clone());
  let rankdir = env::var("ORCHESTRATION_RANKDIR").ok().or_else(|| args.rankdir.clone());

  let mut options = RenderOptions::default().with_graph_name(graph_name);
  if let Some(dir) = rankdir {
    match dir.parse::<RankDir>() {
      Ok(d) => options = options.with_rank_dir(d),
      Err(e) => {
        eprintln!("Error: {}", e);
        process::exit(1);
      }
    }
  }
  info!(graph_name = %options.graph_name, rankdir = ?options.rank_dir, "options (env or flags)");

  let snapshot = match load_snapshot(&args.snapshot_path) {
    Ok(s) => s,
    Err(e) => {
      eprintln!("Error: {}", e);
      process::exit(1);
    }
  };

  let dot = match render_snapshot(&snapshot, &options) {
    Ok(d) => d,
    Err(e) => {
      eprintln!("Render error: {}", e);
      process::exit(1);
    }
  };

  let written = match &args.output {
    Some(path) => fs::write(path, &dot),
    None => io::stdout().lock().write_all(dot.as_bytes()),
  };
  if let Err(e) = written {
    eprintln!("Error writing diagram: {}", e);
    process::exit(1);
  }
  info!(
    pointers = snapshot.pointers.len(),
    bytes = dot.len(),
    "diagram written"
  );
}
