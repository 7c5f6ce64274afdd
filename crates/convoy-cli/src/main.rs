#![forbid(unsafe_code)]

mod render;

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use convoy_core::assign::TruckPlan;
use convoy_core::graph::{RouteNetwork, TopoOrder};
use convoy_core::manifest::{Manifest, ManifestError};
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "convoy: assign DAG node pairs to trucks by route multiplicity",
    long_about = None,
    after_help = "EXAMPLES:\n    # Read a manifest from stdin\n    convoy < routes.txt\n\n    # Read a manifest file and emit JSON\n    convoy routes.txt --json\n\nINPUT FORMAT (whitespace-separated tokens):\n    N B lo hi E, then E pairs of (from, to) in 1..=N\n\nA cyclic network or truncated input produces no output and exits 0."
)]
struct Cli {
    /// Manifest file to read; stdin when omitted.
    input: Option<PathBuf>,

    /// Emit the plan as a JSON document instead of C-lines.
    #[arg(long)]
    json: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("CONVOY_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "convoy=debug,info"
        } else {
            "convoy=info,warn"
        })
    });

    let format = env::var("CONVOY_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let input = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read manifest {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("read manifest from stdin")?;
            buf
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&input, cli.json, &mut out)
}

/// Run the full pipeline over one manifest.
///
/// Silent outcomes (no output, exit 0): empty input, truncated input, and a
/// cyclic network. Invalid truck count or output range are hard errors
/// surfaced to stderr with a non-zero exit.
fn run(input: &str, json: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    let manifest = match Manifest::parse(input) {
        Ok(Some(manifest)) => manifest,
        Ok(None) => {
            debug!("empty manifest; nothing to do");
            return Ok(());
        }
        Err(err @ ManifestError::InputExhausted { .. }) => {
            warn!(%err, "manifest truncated; emitting nothing");
            return Ok(());
        }
        Err(err) => return Err(err).context("parse manifest"),
    };

    info!(
        nodes = manifest.nodes,
        edges = manifest.edges.len(),
        trucks = manifest.trucks,
        "manifest loaded"
    );

    let net = RouteNetwork::from_manifest(&manifest);

    let order = match TopoOrder::compute(&net) {
        Ok(order) => order,
        Err(err) => {
            debug!(%err, "route network is cyclic; emitting nothing");
            return Ok(());
        }
    };

    let plan = TruckPlan::build(&net, &order, manifest.trucks).context("build truck plan")?;
    let (lo, hi) = plan
        .check_range(manifest.truck_range.0, manifest.truck_range.1)
        .context("validate truck range")?;

    if json {
        render::render_plan_json(&plan, lo, hi, out).context("render JSON plan")?;
    } else {
        render::render_plan_text(&plan, lo, hi, out).context("render plan")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;

    fn run_to_string(input: &str) -> String {
        let mut out = Vec::new();
        run(input, false, &mut out).expect("pipeline succeeds");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn chain_scenario_output() {
        assert_eq!(
            run_to_string("3 2 1 2 2\n1 2\n2 3"),
            "C1\nC2 1,2 1,3 2,3\n"
        );
    }

    #[test]
    fn empty_input_emits_nothing() {
        assert_eq!(run_to_string(""), "");
    }

    #[test]
    fn truncated_input_emits_nothing() {
        assert_eq!(run_to_string("3 2 1 2 5 1 2"), "");
    }

    #[test]
    fn cyclic_network_emits_nothing() {
        assert_eq!(run_to_string("2 2 1 2 2 1 2 2 1"), "");
    }

    #[test]
    fn invalid_truck_count_is_a_hard_error() {
        let mut out = Vec::new();
        let err = run("3 0 1 1 0", false, &mut out).expect_err("must fail");
        assert!(err.to_string().contains("build truck plan"));
        assert!(out.is_empty(), "no partial output on error");
    }

    #[test]
    fn invalid_range_is_a_hard_error() {
        let mut out = Vec::new();
        let err = run("3 2 1 3 0", false, &mut out).expect_err("must fail");
        assert!(err.to_string().contains("validate truck range"));
        assert!(out.is_empty(), "no partial output on error");
    }
}
