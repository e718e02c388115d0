use std::sync::Arc;

use anyhow::{Context, Result};
use site_i18n::config::Config;
use site_i18n::i18n::{DirectorySource, LocaleRegistry, TranslationLoader};
use site_i18n::server::{build_router, AppState, SiteConfig};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_i18n=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let registry = LocaleRegistry::get();
    info!(
        "Serving {} locales (default: {})",
        registry.locales().len(),
        registry.default_locale()
    );

    // Index content and make sure the default locale covers every page
    let source = DirectorySource::open(&config.content_dir)
        .await
        .with_context(|| format!("Failed to open content directory {}", config.content_dir))?;
    let site = SiteConfig::new(&config.site_url);
    let loader = TranslationLoader::for_registry(source, registry);
    loader
        .verify(site.page_names())
        .context("Content is incomplete for the default locale")?;

    for finding in loader.audit().await? {
        for warning in &finding.report.warnings {
            warn!("{}/{}: {}", finding.locale, finding.page, warning);
        }
        for error in &finding.report.errors {
            warn!("{}/{}: {}", finding.locale, finding.page, error);
        }
    }

    if config.preload_translations {
        loader.preload().await?;
    }

    let state = Arc::new(AppState {
        registry,
        loader,
        site,
    });
    let router = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router).await?;
    Ok(())
}
