use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inkpress_core::{AppConfig, FileConfigStore, SummarizeOptions, Summarizer};

mod commands;

#[derive(Parser)]
#[command(name = "inkpress")]
#[command(author, version, about = "Expand, title and score raw text with a hosted language model")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand text into a titled, keyworded and scored article
    Summarize {
        #[command(flatten)]
        input: InputArgs,
        /// Target minimum length of the expanded content, in characters
        #[arg(long, default_value_t = 200)]
        min_length: u32,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a short title for text
    Title {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Show the configuration file location
    Config {
        /// Write a default configuration file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Text to process (reads stdin when neither TEXT nor --file is given)
    text: Option<String>,
    /// Read the text from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,
    /// Output language
    #[arg(short, long, default_value = "中文")]
    language: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Summarize { input, min_length, json } => {
            let summarizer = connect(&config).await?;
            let content = commands::read_input(input.text, input.file.as_deref())?;
            let options = SummarizeOptions {
                language: input.language,
                min_length,
            };
            commands::summarize::run(&summarizer, &content, &options, json).await
        }
        Commands::Title { input } => {
            let summarizer = connect(&config).await?;
            let content = commands::read_input(input.text, input.file.as_deref())?;
            let options = SummarizeOptions {
                language: input.language,
                ..SummarizeOptions::default()
            };
            commands::title::run(&summarizer, &content, &options).await
        }
        Commands::Config { init } => commands::config::run(init),
    }
}

async fn connect(config: &AppConfig) -> Result<Summarizer> {
    let store = Arc::new(FileConfigStore::new(AppConfig::config_path()));
    tracing::debug!(path = %store.path().display(), "Reading API key from config file");
    let summarizer = Summarizer::connect(store, config.ai.client_settings()).await?;
    Ok(summarizer)
}
