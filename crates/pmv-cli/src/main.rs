//! Policy Manager Values - CLI
//!
//! Boxes typed literals, stores them by name and prints their text forms.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use pmv_core::{parse_literal, PmvConfig};
use pmv_store::VariableStore;

#[derive(Debug, Parser)]
#[command(name = "pmv", version, about = "Box typed policy values and print them")]
struct Args {
    /// Values as `kind:value` or `name=kind:value`
    /// (kinds: bool, int, uint, double, string, time, duration,
    /// connection, connections, tethering, stage).
    /// Output is ordered by name; unnamed values are named `_<position>`,
    /// zero-padded so they keep argument order.
    #[arg(required = true, value_name = "VALUE")]
    values: Vec<String>,

    /// Maximum number of variables held by the store
    #[arg(long, default_value_t = PmvConfig::default().max_variables)]
    max_variables: usize,

    /// Write the final snapshot to this file as well
    #[arg(long, value_name = "PATH")]
    snapshot: Option<PathBuf>,

    /// Keep rendered values out of debug logs
    #[arg(long)]
    quiet_values: bool,
}

fn main() -> Result<()> {
    // RUST_LOG controls verbosity; warnings only by default
    if let Err(e) = tracing_subscriber::fmt()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init()
    {
        eprintln!("warning: failed to initialize tracing: {}", e);
    }

    let args = Args::parse();
    let config = PmvConfig {
        max_variables: args.max_variables,
        trace_values: !args.quiet_values,
    };
    let mut store = VariableStore::new(config);

    let width = index_width(args.values.len());
    for (idx, arg) in args.values.iter().enumerate() {
        let (name, literal) = split_named(arg, idx, width);
        let boxed = parse_literal(literal).with_context(|| format!("invalid value {:?}", arg))?;
        store
            .set_boxed(name, boxed)
            .with_context(|| format!("cannot store {:?}", arg))?;
    }
    info!(count = store.len(), "stored values");

    for (name, text) in store.snapshot() {
        println!("{}: {}", name, text);
    }

    if let Some(path) = &args.snapshot {
        store
            .persist_snapshot(path)
            .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
    }
    Ok(())
}

/// Digits needed for the largest position among `count` arguments.
fn index_width(count: usize) -> usize {
    count.saturating_sub(1).to_string().len()
}

/// `name=kind:value` keeps its name; a bare literal becomes `_<idx>`,
/// padded to `width` digits.
fn split_named(arg: &str, idx: usize, width: usize) -> (String, &str) {
    match arg.split_once('=') {
        Some((name, literal)) if !name.is_empty() && !name.contains(':') => {
            (name.to_string(), literal)
        }
        _ => (format!("_{:0width$}", idx, width = width), arg),
    }
}
