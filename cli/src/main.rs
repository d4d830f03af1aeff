//! Castgraph CLI — command-line interface over a cast data file
//!
//! Loads the whole file into memory, then answers one query per invocation.

use anyhow::Context;
use castgraph::{load_from_path, run_survey, CastGraph, CastGraphConfig};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "castgraph", version, about = "Castgraph actor/movie graph CLI")]
struct Cli {
    /// Cast data file: one grouping per line followed by its subjects
    #[arg(long, default_value = "movies.txt", global = true, env = "CASTGRAPH_DATA")]
    data: PathBuf,

    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Field delimiter (overrides the configuration)
    #[arg(long, global = true)]
    delimiter: Option<char>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List one representative subject per connected component
    Components,
    /// Count the subjects reachable from a subject (itself included)
    Connected {
        name: String,
    },
    /// Show distance statistics for a subject
    Stats {
        name: String,
    },
    /// Shortest path between two subjects
    Path {
        from: String,
        to: String,

        /// Include the groupings between subjects
        #[arg(long)]
        groupings: bool,
    },
    /// Query every subject until a time budget runs out
    Survey {
        /// Budget in seconds (overrides the configuration)
        #[arg(long)]
        seconds: Option<u64>,

        /// Run queries in parallel
        #[arg(long)]
        parallel: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => CastGraphConfig::from_yaml_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => CastGraphConfig::default(),
    };
    if let Some(delimiter) = cli.delimiter {
        config.loader.delimiter = delimiter;
    }

    let graph = load_from_path(&cli.data, &config.loader)
        .with_context(|| format!("loading {}", cli.data.display()))?;

    match cli.command {
        Commands::Components => run_components(&graph, &cli.format),
        Commands::Connected { name } => run_connected(&graph, &name, &cli.format),
        Commands::Stats { name } => run_stats(&graph, &name, &cli.format),
        Commands::Path { from, to, groupings } => {
            run_path(&graph, &from, &to, groupings, &cli.format)
        }
        Commands::Survey { seconds, parallel } => {
            if let Some(seconds) = seconds {
                config.survey.budget_secs = seconds;
            }
            config.survey.parallel |= parallel;
            let report = run_survey(&graph, &config.survey)?;
            print_record(
                &cli.format,
                &report,
                vec![
                    ("Queries", report.queries.to_string()),
                    ("Subjects", report.subjects.to_string()),
                    ("Elapsed (ms)", report.elapsed_ms.to_string()),
                    ("Budget (s)", report.budget_secs.to_string()),
                    ("Budget exhausted", report.budget_exhausted.to_string()),
                ],
            )
        }
    }
}

fn run_components(graph: &CastGraph, format: &OutputFormat) -> anyhow::Result<()> {
    let representatives = graph.components();

    match format {
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Components<'a> {
                count: usize,
                representatives: Vec<&'a str>,
            }
            let out = Components {
                count: graph.component_count(),
                representatives,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["#", "Representative"]);
            for (i, name) in representatives.iter().enumerate() {
                table.add_row(vec![i.to_string(), name.to_string()]);
            }
            println!("{}", table);
            println!("{} component(s)", graph.component_count());
        }
    }

    Ok(())
}

fn run_connected(graph: &CastGraph, name: &str, format: &OutputFormat) -> anyhow::Result<()> {
    let count = graph.connected_subject_count(name)?;

    match format {
        OutputFormat::Json => {
            let out = serde_json::json!({ "name": name, "connected_subjects": count });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Table => println!("{}", count),
    }

    Ok(())
}

fn run_stats(graph: &CastGraph, name: &str, format: &OutputFormat) -> anyhow::Result<()> {
    let summary = graph.subject_details(name)?.summary();

    let rows = vec![
        ("Name", summary.name.clone()),
        ("Groupings", summary.groupings.len().to_string()),
        ("Connected subjects", summary.connected_subjects.to_string()),
        (
            "Average distance",
            summary
                .average_distance
                .map(|d| format!("{:.4}", d))
                .unwrap_or_else(|| "undefined".to_string()),
        ),
        ("Maximum distance", summary.maximum_distance.to_string()),
        (
            "Furthest subject",
            summary.furthest_subject.clone().unwrap_or_else(|| "-".to_string()),
        ),
    ];
    print_record(format, &summary, rows)
}

fn run_path(
    graph: &CastGraph,
    from: &str,
    to: &str,
    groupings: bool,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let query = graph.subject_details(from)?;
    let path = if groupings {
        query.grouping_path(to)?
    } else {
        query.subject_path(to)?
    };
    let length = query.path_length(to)?;

    match format {
        OutputFormat::Json => {
            // JSON has no infinity; an unreachable target has a null length
            let out = serde_json::json!({
                "from": from,
                "to": to,
                "path": path,
                "length": if length.is_finite() { Some(length) } else { None },
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Table => match path {
            Some(steps) => {
                println!("{}", steps.join(" -> "));
                println!("length: {}", length);
            }
            None => println!("{} and {} are not connected (length: {})", from, to, length),
        },
    }

    Ok(())
}

fn print_record<T: Serialize>(
    format: &OutputFormat,
    value: &T,
    rows: Vec<(&str, String)>,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            for (key, value) in rows {
                table.add_row(vec![key.to_string(), value]);
            }
            println!("{}", table);
        }
    }
    Ok(())
}
