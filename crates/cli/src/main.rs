use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use hausdorff::{directed_hausdorff_brute_force, HausdorffEngine, SearchCfg};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

/// Largest gap tolerated between the search and the exhaustive oracle.
const CHECK_TOL: f64 = 1e-9;

#[derive(Parser)]
#[command(name = "hausdorff-cli")]
#[command(about = "Directed Hausdorff distance between point sets on disk")]
struct Cmd {
    /// Log search statistics (debug level)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute h(A, B) = max over A of the distance to the nearest point of B
    Directed(DirectedArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Debug, Clone)]
struct DirectedArgs {
    /// Outer set A (.csv with header or .json array of rows)
    #[arg(long)]
    a: PathBuf,
    /// Inner set B (.csv with header or .json array of rows)
    #[arg(long)]
    b: PathBuf,
    /// Seed for the visitation order; omitted means OS entropy
    #[arg(long)]
    seed: Option<u64>,
    /// Visit points in file order
    #[arg(long)]
    no_shuffle: bool,
    /// Also run the exhaustive oracle and fail on disagreement
    #[arg(long)]
    check: bool,
    /// Write the result here (plus a provenance sidecar) instead of only printing it
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct DirectedReport {
    distance: f64,
    outer_index: usize,
    inner_index: usize,
    dim: usize,
    n_a: usize,
    n_b: usize,
    distance_evals: usize,
    early_exits: usize,
    shuffle: bool,
    seed: Option<u64>,
    oracle_distance: Option<f64>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Directed(args) => directed(args),
        Action::Report => report(),
    }
}

fn directed(args: DirectedArgs) -> Result<()> {
    tracing::info!(a = %args.a.display(), b = %args.b.display(), seed = ?args.seed, "directed");
    let report = compute(&args)?;
    let body = serde_json::to_string_pretty(&report)?;
    println!("{body}");

    if let Some(out) = &args.out {
        write_output(out, &body)?;
        let params = serde_json::json!({
            "seed": args.seed,
            "shuffle": !args.no_shuffle,
            "check": args.check,
        });
        let payload = provenance::Payload::new(params).with_inputs([
            args.a.to_string_lossy().into_owned(),
            args.b.to_string_lossy().into_owned(),
        ]);
        let prov = provenance::write_sidecar(out, payload)?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote");
    }
    Ok(())
}

fn compute(args: &DirectedArgs) -> Result<DirectedReport> {
    let a = input::load_points(&args.a)?;
    let b = input::load_points(&args.b)?;
    let cfg = SearchCfg {
        shuffle: !args.no_shuffle,
        seed: args.seed,
    };
    let (res, trace) = HausdorffEngine::with_cfg(cfg)
        .directed_traced(&a, &b)
        .with_context(|| format!("{} vs {}", args.a.display(), args.b.display()))?;
    // The engine only returns for non-empty sets of one shared dimension.
    let dim = a[res.outer_index].len();

    let oracle_distance = if args.check {
        let oracle = directed_hausdorff_brute_force(&a, &b)?;
        if (oracle.distance - res.distance).abs() > CHECK_TOL {
            bail!(
                "search returned {} but exhaustive oracle returned {}",
                res.distance,
                oracle.distance
            );
        }
        Some(oracle.distance)
    } else {
        None
    };

    Ok(DirectedReport {
        distance: res.distance,
        outer_index: res.outer_index,
        inner_index: res.inner_index,
        dim,
        n_a: a.len(),
        n_b: b.len(),
        distance_evals: trace.distance_evals,
        early_exits: trace.early_exits,
        shuffle: cfg.shuffle,
        seed: cfg.seed,
        oracle_distance,
    })
}

fn write_output(out: &Path, body: &str) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, body).with_context(|| format!("writing {}", out.display()))
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&provenance::summary())?);
    Ok(())
}
