//! densemine CLI — mine dense subgraphs from edge list files

use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use densemine::pipeline::local::{estimate_local, DEFAULT_LOCAL_ITERATIONS};
use densemine::pipeline::triangulation::triangulate;
use densemine::{ingest, Edge, Miner, MinerConfig, Range, SearchMode};
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "densemine", version, about = "Dense subgraph mining over triangle connectivity")]
struct Cli {
    /// Field delimiter of input edge records
    #[arg(long, default_value = "\t", global = true)]
    delimiter: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Mode {
    Sequential,
    Binary,
}

impl From<Mode> for SearchMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Sequential => SearchMode::Sequential,
            Mode::Binary => SearchMode::Binary,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full mining pipeline: per-edge lambda plus dense subgraphs
    Mine {
        /// Edge list file, one vertex-id pair per line
        input: PathBuf,

        /// Number of vertex partitions (rho, minimum 3)
        #[arg(long, default_value_t = 3)]
        partitions: u32,

        /// Bound narrowing policy
        #[arg(long, value_enum, default_value_t = Mode::Sequential)]
        mode: Mode,

        /// Maximum convergence rounds
        #[arg(long, default_value_t = 10)]
        iterations: u32,
    },
    /// List the triangles of the graph
    Triangles {
        input: PathBuf,

        #[arg(long, default_value_t = 3)]
        partitions: u32,
    },
    /// Partition-scoped one-shot lambda estimates
    Estimate {
        input: PathBuf,

        #[arg(long, default_value_t = 3)]
        partitions: u32,

        /// Shard-local estimator iteration budget
        #[arg(long, default_value_t = DEFAULT_LOCAL_ITERATIONS)]
        iterations: u32,
    },
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Mine {
            input,
            partitions,
            mode,
            iterations,
        } => {
            let edges = load(&input, &cli.delimiter)?;
            let miner = Miner::new(MinerConfig {
                partitions,
                search_mode: mode.into(),
                max_iterations: iterations,
            });
            let result = miner.mine(&edges)?;
            report_mining(&result, cli.format);
            Ok(())
        }
        Commands::Triangles { input, partitions } => {
            let edges = load(&input, &cli.delimiter)?;
            let mut triangles: Vec<_> = triangulate(&edges, partitions).into_iter().collect();
            triangles.sort_unstable();

            match cli.format {
                OutputFormat::Json => {
                    println!("{}", json!({ "triangles": triangles }));
                }
                OutputFormat::Table => {
                    let mut table = new_table(vec!["v", "u", "w"]);
                    for t in &triangles {
                        table.add_row(vec![t.v.to_string(), t.u.to_string(), t.w.to_string()]);
                    }
                    println!("{table}");
                    println!("{} triangles", triangles.len());
                }
            }
            Ok(())
        }
        Commands::Estimate {
            input,
            partitions,
            iterations,
        } => {
            let edges = load(&input, &cli.delimiter)?;
            let estimates = estimate_local(&edges, partitions, iterations);
            let rows = sorted_bounds(estimates.into_iter());

            match cli.format {
                OutputFormat::Json => {
                    let edges: Vec<_> = rows
                        .iter()
                        .map(|(e, r)| json!({ "v": e.v, "u": e.u, "min": r.lower, "max": r.upper }))
                        .collect();
                    println!("{}", json!({ "edges": edges }));
                }
                OutputFormat::Table => {
                    let mut table = new_table(vec!["v", "u", "lambda min", "lambda max"]);
                    for (e, r) in &rows {
                        table.add_row(vec![
                            e.v.to_string(),
                            e.u.to_string(),
                            r.lower.to_string(),
                            r.upper.to_string(),
                        ]);
                    }
                    println!("{table}");
                }
            }
            Ok(())
        }
    }
}

fn load(path: &PathBuf, delimiter: &str) -> anyhow::Result<densemine::EdgeSet> {
    let edges = ingest::load_edges(path, delimiter)
        .with_context(|| format!("reading edge list {}", path.display()))?;
    anyhow::ensure!(!edges.is_empty(), "no valid edge records in input");
    Ok(edges)
}

fn sorted_bounds(bounds: impl Iterator<Item = (Edge, Range)>) -> Vec<(Edge, Range)> {
    let mut rows: Vec<_> = bounds.collect();
    rows.sort_unstable_by_key(|(e, _)| *e);
    rows
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn report_mining(result: &densemine::MiningResult, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let edges: Vec<_> = sorted_bounds(result.edges.iter().map(|(e, r)| (*e, *r)))
                .iter()
                .map(|(e, r)| json!({ "v": e.v, "u": e.u, "kappa": r.lower, "lambda": r.upper }))
                .collect();
            println!(
                "{}",
                json!({
                    "converged": result.converged,
                    "rounds": result.rounds,
                    "unconverged": result.unconverged,
                    "edges": edges,
                    "subgraphs": result.subgraphs,
                })
            );
        }
        OutputFormat::Table => {
            let mut table = new_table(vec!["v", "u", "kappa", "lambda"]);
            for (e, r) in sorted_bounds(result.edges.iter().map(|(e, r)| (*e, *r))) {
                table.add_row(vec![
                    e.v.to_string(),
                    e.u.to_string(),
                    r.lower.to_string(),
                    r.upper.to_string(),
                ]);
            }
            println!("{table}");

            let mut subgraphs = new_table(vec!["lambda", "id", "edges"]);
            for s in &result.subgraphs {
                let members: Vec<String> = s.edges.iter().map(|e| e.to_string()).collect();
                subgraphs.add_row(vec![
                    s.lambda.to_string(),
                    s.id.to_string(),
                    members.join(" "),
                ]);
            }
            println!("{subgraphs}");

            if result.converged {
                println!("converged after {} rounds", result.rounds);
            } else {
                println!(
                    "iteration cap hit after {} rounds, {} edges unconverged",
                    result.rounds, result.unconverged
                );
            }
        }
    }
}
