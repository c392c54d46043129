// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use docsearch::utils::logging::{format_info, format_success, format_warning};
use docsearch::{Config, IndexBuilder, IndexLoader, SearchIndex, query, render_results};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "docsearch")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Search-index builder and query tool for static documentation sites", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the search index artifact from a markdown docs folder
    Build {
        #[arg(long, value_name = "DIR")]
        docs_dir: Option<PathBuf>,

        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[arg(short, long)]
        pretty: bool,

        #[arg(long, value_name = "NUM")]
        limit: Option<usize>,
    },

    /// Query an index artifact and print the ranked results
    Search {
        /// Search query text
        query: String,

        /// Artifact location: a local path or an http(s) URL
        #[arg(short, long)]
        index: Option<String>,

        #[arg(long)]
        json: bool,

        /// Emit the results panel HTML instead of plain text
        #[arg(long)]
        html: bool,
    },

    /// Show document and section counts for an index artifact
    Stats {
        #[arg(short, long)]
        index: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    docsearch::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Build {
            docs_dir,
            output,
            pretty,
            limit,
        } => {
            cmd_build(config, docs_dir, output, pretty, limit, cli.color)?;
        }
        Commands::Search {
            query,
            index,
            json,
            html,
        } => {
            cmd_search(&config, &query, index, json, html).await?;
        }
        Commands::Stats { index } => {
            cmd_stats(&config, index).await?;
        }
    }

    Ok(())
}

fn cmd_build(
    mut config: Config,
    docs_dir: Option<PathBuf>,
    output: Option<PathBuf>,
    pretty: bool,
    limit: Option<usize>,
    colored: bool,
) -> Result<()> {
    if let Some(docs_dir) = docs_dir {
        config.corpus.docs_dir = docs_dir;
    }
    if let Some(output) = output {
        config.artifact.output_path = output;
    }

    info!(
        "Building search index from {}",
        config.corpus.docs_dir.display()
    );

    let output_path = config.artifact.output_path.clone();
    let pretty = pretty || config.artifact.pretty;

    let builder = IndexBuilder::new(config);
    let (index, stats) = builder.build(limit, colored).context("Index build failed")?;

    index
        .save(&output_path, pretty)
        .context("Failed to write index artifact")?;

    println!("{}", stats.format_summary());
    println!(
        "{}",
        format_success(&format!("Artifact written to {}", output_path.display()))
    );
    Ok(())
}

async fn cmd_search(
    config: &Config,
    query_text: &str,
    index_location: Option<String>,
    json: bool,
    html: bool,
) -> Result<()> {
    let index = load_index(config, index_location).await?;
    let results = query(&index, query_text);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if html {
        println!(
            "{}",
            render_results(&results, query_text, &config.search.path_prefix)
        );
        return Ok(());
    }

    if results.is_empty() {
        println!("{}", format_warning(&format!("No results for \"{}\"", query_text)));
        return Ok(());
    }

    println!(
        "{}",
        format_info(&format!("{} result(s) for \"{}\"", results.len(), query_text))
    );
    for result in &results {
        println!("{}", result.format_summary(160));
    }
    Ok(())
}

async fn cmd_stats(config: &Config, index_location: Option<String>) -> Result<()> {
    let index = load_index(config, index_location).await?;

    println!("{}", format_info("Index artifact"));
    println!("  documents: {}", index.document_count());
    println!("  sections:  {}", index.section_count());
    Ok(())
}

/// Resolve the artifact location (flag, then config URL, then output path)
/// and load it. Remote fetches keep the fail-soft loader semantics; local
/// paths surface IO errors so build problems stay visible.
async fn load_index(config: &Config, location: Option<String>) -> Result<SearchIndex> {
    let location = location
        .or_else(|| config.artifact.fetch_url.clone())
        .unwrap_or_else(|| config.artifact.output_path.display().to_string());

    if location.starts_with("http://") || location.starts_with("https://") {
        let state = IndexLoader::new().fetch(&location).await;
        return Ok(state.index().cloned().unwrap_or_default());
    }

    SearchIndex::from_file(std::path::Path::new(&location))
        .with_context(|| format!("Failed to load index artifact from {}", location))
}
