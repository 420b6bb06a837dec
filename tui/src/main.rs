use std::sync::Arc;

use clap::Parser;
use ember_embeddings::{ComparisonSet, EmbeddingProvider, OpenAIProvider};
use ember_tui::cli::{Cli, CliCommand};
use ember_tui::{App, EmberConfig, defaults, logging, runtime, seed};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    match cli.command {
        Some(CliCommand::Seed { texts }) => run_seed(&config, texts).await,
        None => run_session(&config).await,
    }
}

fn build_provider(config: &EmberConfig, api_key: Option<String>) -> OpenAIProvider {
    OpenAIProvider::new(api_key)
        .with_base_url(&config.base_url)
        .with_model(&config.model)
}

async fn run_session(config: &EmberConfig) -> anyhow::Result<()> {
    // Refuse to touch the terminal without a key.
    let Some(api_key) = config.api_key() else {
        anyhow::bail!("{} environment variable not set", config.api_key_env);
    };

    let _log_guard = logging::init_file_logging(&config.log_file_path())?;

    let provider: Arc<dyn EmbeddingProvider> = Arc::new(build_provider(config, Some(api_key)));
    info!(
        "Using {} provider with model {}",
        provider.name(),
        provider.default_model()
    );

    let (app, initial) = match &config.defaults_path {
        Some(path) => {
            let entries = defaults::load_entries(path)?;
            info!("Loaded {} default comparisons from {}", entries.len(), path.display());
            if let Some(dimension) =
                defaults::dimension_mismatch(&entries, provider.default_dimension())
            {
                warn!(
                    "Defaults in {} have {dimension} dimensions but {} produces {}",
                    path.display(),
                    provider.default_model(),
                    provider.default_dimension()
                );
            }
            (App::new(ComparisonSet::new(entries), &config.model), None)
        }
        None => {
            let (app, command) = App::with_default_embedding(&config.model);
            (app, Some(command))
        }
    };

    runtime::run(app, initial, provider).await
}

async fn run_seed(config: &EmberConfig, texts: Vec<String>) -> anyhow::Result<()> {
    logging::init_stderr_logging()?;

    let provider = build_provider(config, config.api_key());
    if !provider.is_available() {
        warn!(
            "{} environment variable not set, cannot embed",
            config.api_key_env
        );
    }

    let entries = seed::seed_entries(&provider, texts).await?;
    println!("{}", defaults::render_entries(&entries)?);

    Ok(())
}
