//! article-forge command line entry point.
//!
//! # Usage
//!
//! ```bash
//! # Interactive TUI
//! article-forge
//!
//! # Write .article-forge/config.toml
//! article-forge init
//!
//! # Headless run, printing outline and article
//! article-forge generate --title "Ocean Conservation" --tags "nature, water" --notes "..."
//!
//! # Offline, with debug logs in a file
//! RUST_LOG=debug article-forge --provider sample --log-file article-forge.log
//! ```

use af_core::completion::ServiceFactory;
use af_core::config::{load_config, AppConfig};
use af_core::engine::GenerationClient;
use af_core::init::{generate_config, InitOptions};
use af_protocol::{GenerationRequest, Provider};
use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use colored::Colorize;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate articles from a title, tags and notes with a two-step LLM prompt
#[derive(Parser, Debug)]
#[command(name = "article-forge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Completion provider, overriding the config file
    #[arg(long, global = true, value_enum)]
    provider: Option<ProviderArg>,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Project directory containing .article-forge/
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default .article-forge/config.toml
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Generate one article without the TUI
    Generate {
        #[arg(long, default_value = "")]
        title: String,

        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,

        #[arg(long, default_value = "")]
        notes: String,

        /// Sampling temperature, overriding the config file
        #[arg(long)]
        temperature: Option<f32>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ProviderArg {
    Openai,
    Sample,
}

impl From<ProviderArg> for Provider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Openai => Provider::OpenAi,
            ProviderArg::Sample => Provider::Sample,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let root = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().wrap_err("Cannot determine the current directory")?,
    };

    match cli.command {
        None => {
            if let Some(path) = &cli.log_file {
                init_file_logging(path)?;
            }
            let config = load_settings(&root, cli.provider).await?;
            let service = ServiceFactory::create(config.service());
            af_tui::run_app(config, service)
                .await
                .map_err(|e| eyre!(e))
        }
        Some(Commands::Init { force }) => {
            init_logging(cli.log_file.as_deref())?;
            let path = generate_config(InitOptions {
                target_dir: root,
                force,
            })
            .await?;
            println!("{} {}", "Created".green().bold(), path.display());
            Ok(())
        }
        Some(Commands::Generate {
            title,
            tags,
            notes,
            temperature,
        }) => {
            init_logging(cli.log_file.as_deref())?;
            let config = load_settings(&root, cli.provider).await?;
            let request = GenerationRequest::from_fields(&title, &tags, &notes)
                .with_temperature(temperature.unwrap_or(config.service().temperature));
            run_headless(&config, &request).await
        }
    }
}

/// Load the config and apply command line overrides.
async fn load_settings(root: &Path, provider: Option<ProviderArg>) -> Result<AppConfig> {
    let mut config = load_config(root).await?;
    if let Some(provider) = provider {
        config.global.service.provider = provider.into();
    }
    info!(
        provider = ?config.service().provider,
        source = ?config.source,
        "Configuration loaded"
    );
    Ok(config)
}

/// Run both steps and print each as soon as it is ready.
async fn run_headless(config: &AppConfig, request: &GenerationRequest) -> Result<()> {
    let service = ServiceFactory::create(config.service());
    let client = GenerationClient::new(service, config.service().model.clone());

    let outline = client
        .generate_outline(
            &request.title,
            &request.notes,
            &request.tag_line(),
            request.temperature,
        )
        .await?;
    println!("{}", "Outline".cyan().bold());
    println!("{outline}\n");

    let article = client
        .generate_article(&outline, request.temperature)
        .await?;
    println!("{}", "Article".cyan().bold());
    println!("{article}");
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Headless commands log to stderr unless a log file is given.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => init_file_logging(path),
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
            Ok(())
        }
    }
}

/// Log to a file so the TUI's alternate screen stays clean.
fn init_file_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("Cannot open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
