//! Corpgraph CLI: generate and augment the corporate relationship dataset
//!
//! Thin wrapper over the `corpgraph` library: parses arguments, sets up
//! logging, loads configuration and prints summaries.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use corpgraph::augment::{add_missing_types, AugmentReport};
use corpgraph::synth::{generate, rng_from_seed, Taxonomy};
use corpgraph::{
    load_document, save_document, AugmentConfig, CorpGraphConfig, GraphDocument, RelationKind,
    DEFAULT_DOCUMENT_PATH,
};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "corpgraph", version, about = "Corporate relationship graph generator")]
struct Cli {
    /// YAML configuration file overriding the built-in parameters
    #[arg(long, global = true, env = "CORPGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Output format for summaries
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Log debug detail
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

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
    /// Generate a fresh companies document from the S&P 500 taxonomy
    Generate {
        /// Output document path
        #[arg(long, short, default_value = DEFAULT_DOCUMENT_PATH)]
        output: PathBuf,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Add relationship types missing from an existing document
    Augment {
        /// Document to augment in place
        #[arg(long, short, default_value = DEFAULT_DOCUMENT_PATH)]
        input: PathBuf,

        /// New edges per missing type
        #[arg(long)]
        count: Option<usize>,

        /// Comma-separated relationship types (e.g. CLIENT,SWAPS)
        #[arg(long, value_delimiter = ',')]
        types: Vec<String>,

        /// Attempt budget per requested edge
        #[arg(long, conflicts_with = "max_attempts")]
        attempts_per_edge: Option<usize>,

        /// Fixed attempt budget per relationship type
        #[arg(long)]
        max_attempts: Option<usize>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show node and relationship counts of a document
    Stats {
        /// Document to inspect
        #[arg(long, short, default_value = DEFAULT_DOCUMENT_PATH)]
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);
    tracing::debug!("corpgraph v{}", corpgraph::version());

    let result = load_config(cli.config.as_deref()).and_then(|config| match &cli.command {
        Commands::Generate { output, seed } => run_generate(&config, output, *seed),
        Commands::Augment {
            input,
            count,
            types,
            attempts_per_edge,
            max_attempts,
            seed,
        } => {
            let mut augment = config.augment.clone();
            if let Some(attempts) = attempts_per_edge {
                augment.attempts_per_edge = *attempts;
            }
            if max_attempts.is_some() {
                augment.attempt_limit = *max_attempts;
            }
            run_augment(&augment, input, *count, types, *seed, &cli.format)
        }
        Commands::Stats { input } => run_stats(input, &cli.format),
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<CorpGraphConfig> {
    match path {
        Some(path) => CorpGraphConfig::from_yaml_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(CorpGraphConfig::default()),
    }
}

fn run_generate(config: &CorpGraphConfig, output: &Path, seed: Option<u64>) -> Result<()> {
    let mut rng = rng_from_seed(seed);
    let document = generate(&Taxonomy::sp500(), &config.synth, &mut rng)?;
    save_document(output, &document).with_context(|| format!("writing {}", output.display()))?;

    println!(
        "Generated JSON file with {} S&P 500 companies and {} relationships",
        document.node_count(),
        document.link_count()
    );
    Ok(())
}

fn run_augment(
    config: &AugmentConfig,
    input: &Path,
    count: Option<usize>,
    types: &[String],
    seed: Option<u64>,
    format: &OutputFormat,
) -> Result<()> {
    let kinds = if types.is_empty() {
        config.kinds.clone()
    } else {
        types
            .iter()
            .map(|t| t.parse::<RelationKind>())
            .collect::<Result<Vec<_>, _>>()?
    };
    let count = count.unwrap_or(config.count_per_kind);

    let mut document: GraphDocument =
        load_document(input).with_context(|| format!("reading {}", input.display()))?;
    let mut rng = rng_from_seed(seed);
    let report = add_missing_types(&mut document, &kinds, count, config, &mut rng)?;
    save_document(input, &document).with_context(|| format!("writing {}", input.display()))?;

    print_report(&report, format)?;
    Ok(())
}

fn print_report(report: &AugmentReport, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Type", "Requested", "Added", "Attempts", "Status"]);

            for kind in &report.skipped {
                table.add_row(vec![kind.to_string(), "-".into(), "0".into(), "0".into(), "skipped (exists)".into()]);
            }
            for outcome in &report.outcomes {
                let status = if outcome.is_partial() { "partial" } else { "ok" };
                table.add_row(vec![
                    outcome.kind.to_string(),
                    outcome.requested.to_string(),
                    outcome.added.to_string(),
                    outcome.attempts.to_string(),
                    status.to_string(),
                ]);
            }

            println!("{}", table);
            println!("Total new relationships added: {}", report.total_added());
        }
    }
    Ok(())
}

fn run_stats(input: &Path, format: &OutputFormat) -> Result<()> {
    let document = load_document(input).with_context(|| format!("reading {}", input.display()))?;
    let counts = document.count_by_type();

    match format {
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "nodes": document.node_count(),
                "links": document.link_count(),
                "types": counts,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Type", "Links"]);
            for (tag, count) in &counts {
                let label = if tag.is_empty() { "(untyped)" } else { tag.as_str() };
                table.add_row(vec![label.to_string(), count.to_string()]);
            }

            println!("Nodes: {}", document.node_count());
            println!("Links: {}", document.link_count());
            println!("{}", table);
        }
    }
    Ok(())
}
