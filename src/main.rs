use anyhow::Result;
use dots_toolkit::config::Config;
use dots_toolkit::i18n::{LocalizationStore, TranslationValidator};
use dots_toolkit::pages::PageRegistry;
use dots_toolkit::server;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dots_toolkit=info".parse()?),
        )
        .init();

    info!("Starting DOTS Toolkit");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!(
        "Assets from {} (remote fallback: {})",
        config.assets_dir.display(),
        config.asset_remote_base.as_deref().unwrap_or("none")
    );

    // Content problems degrade pages rather than break them; report and carry on
    let store = LocalizationStore::shipped();
    let mut report = TranslationValidator::validate_store(store);
    report.merge(TranslationValidator::validate_registry(PageRegistry::get(), store));
    for problem in &report.errors {
        warn!("Content error: {}", problem);
    }
    info!(
        "Loaded {} content keys ({} fall back to English)",
        store.len(),
        report.warnings.len()
    );

    server::serve(config).await
}
