//! Command-line probe for a running search backend.
//!
//! Runs one submit through the same controller the browser widget uses and
//! prints every state it renders. Diagnostics go to stderr; results to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wikisearch::render::message;
use wikisearch::{Navigator, ResultsView, SearchController, ViewState, WidgetConfig, WidgetError};
use wikisearch_client::{HttpBackend, SearchScope, article_url};

/// Query a wikisearch backend the way the browser widget does.
#[derive(Parser)]
#[command(name = "wikisearch-probe", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend origin, e.g. `http://localhost:8080`.
    #[arg(long)]
    origin: Option<String>,

    /// Which index to search: all, body, title or anchor.
    #[arg(long)]
    scope: Option<SearchScope>,

    /// Print the URL of the first result as if it had been clicked.
    #[arg(long)]
    open_first: bool,

    /// Query text. Words are joined with single spaces.
    query: Vec<String>,
}

/// Prints each rendered state to stdout.
struct TerminalView {
    article_url_prefix: String,
}

impl ResultsView for TerminalView {
    fn render(&self, state: &ViewState) {
        match state {
            ViewState::Results(hits) => {
                for (rank, hit) in hits.iter().enumerate() {
                    println!(
                        "{:>3}. {}  (Article ID: {})  {}",
                        rank + 1,
                        hit.title,
                        hit.id,
                        article_url(&self.article_url_prefix, hit.id)
                    );
                }
            }
            other => {
                if let Some((_, text)) = message(other) {
                    println!("{text}");
                }
            }
        }
    }
}

/// "Opens" an article by printing its URL.
struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn open(&self, url: &str) -> Result<(), WidgetError> {
        println!("open {url}");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Stdout carries results only.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wikisearch=info,wikisearch_client=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => WidgetConfig::from_file(path)?,
        None => WidgetConfig::default(),
    };
    if let Some(origin) = cli.origin {
        config.client.origin = origin;
    }
    if let Some(scope) = cli.scope {
        config.client.scope = scope;
    }
    config.validate()?;

    let backend = HttpBackend::new(&config.client)?;
    tracing::info!(endpoint = %backend.endpoint(), "probing search backend");

    let view = TerminalView {
        article_url_prefix: config.article_url_prefix.clone(),
    };
    let controller =
        SearchController::new(backend, view, PrintNavigator, config.article_url_prefix.clone());

    let state = controller.submit(&cli.query.join(" ")).await;

    let first_hit = match &state {
        Some(ViewState::Results(hits)) => hits.first().map(|hit| hit.id),
        _ => None,
    };
    if let (true, Some(id)) = (cli.open_first, first_hit) {
        controller.open_article(id);
    }

    Ok(match state {
        Some(ViewState::Error) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}
