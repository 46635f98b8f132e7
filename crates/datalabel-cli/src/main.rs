//! datalabel - label tabular rows against a natural-language rule

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use datalabel_cli::config::{CliConfig, Overrides};
use datalabel_cli::loader::load_dataset;
use datalabel_cli::output::{render_json, render_result};
use datalabel_sdk::{
    InMemoryDatasetStore, InsightRequest, LabelingEngine, LabelingEngineBuilder, LabelingRequest,
    MatchMode,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "datalabel", version, about = "Label tabular data with a local model")]
struct Cli {
    /// Model name
    #[arg(long, global = true)]
    model: Option<String>,

    /// Inference endpoint base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Rows per model request
    #[arg(long, global = true)]
    batch_size: Option<usize>,

    /// Per-call inference timeout, in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Label every row of a dataset
    Label {
        /// Dataset file (split JSON layout)
        #[arg(long)]
        dataset: PathBuf,
        /// Column to label, or "All Columns"
        #[arg(long)]
        column: String,
        /// Labeling rule, or the search term in literal mode
        #[arg(long)]
        rule: String,
        #[arg(long, value_enum, default_value_t = Mode::Ai)]
        mode: Mode,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Ask a question about a dataset
    Ask {
        #[arg(long)]
        dataset: PathBuf,
        #[arg(long)]
        question: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Ai,
    Literal,
}

impl From<Mode> for MatchMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Ai => MatchMode::Ai,
            Mode::Literal => MatchMode::Literal,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let cli = Cli::parse();
    let config = CliConfig::load()?.with_overrides(Overrides {
        model: cli.model,
        base_url: cli.base_url,
        timeout_secs: cli.timeout_secs,
        batch_size: cli.batch_size,
    });
    info!("Loaded configuration: {:?}", config);

    match cli.command {
        Commands::Label {
            dataset,
            column,
            rule,
            mode,
            json,
        } => {
            let engine = engine_for(&config, &dataset)?;
            let request = LabelingRequest::new(column, rule).with_mode(mode.into());
            let result = engine.label(request).await?;

            if json {
                println!("{}", render_json(&result)?);
            } else {
                print!("{}", render_result(&result));
            }
        }
        Commands::Ask { dataset, question } => {
            let engine = engine_for(&config, &dataset)?;
            let answer = engine.ask(InsightRequest::new(question)).await?;
            println!("{}", answer);
        }
    }

    Ok(())
}

/// Build an engine whose active dataset is the file at `path`
fn engine_for(config: &CliConfig, path: &Path) -> Result<LabelingEngine> {
    let (name, dataset) = load_dataset(path)?;
    let store = Arc::new(InMemoryDatasetStore::new());
    store.insert(name, dataset);

    let engine = LabelingEngineBuilder::new()
        .with_config(config.to_engine_config())
        .with_resolver(store)
        .build()?;
    info!(
        "Labeling engine ready: client={}, model={}",
        engine.client_name(),
        engine.config().model
    );

    Ok(engine)
}

/// Initialize tracing subscriber
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "datalabel=info,datalabel_cli=info,datalabel_sdk=info,datalabel_llm=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
