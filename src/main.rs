use catalog_admin::config::Config;
use catalog_admin::controllers::{AuthGate, DashboardPage, HeadlessPlayer, SongsPage, TracingNotifier};
use catalog_admin::controllers::auth::DASHBOARD_PATH;
use catalog_admin::services::{ApiClient, CatalogServices, FileTokenStore, TokenStore};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog_admin=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded, catalog API at {}", config.api_url);

    let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(config.token_file.clone()));
    let gate = AuthGate::new(tokens.clone());
    if let Some(target) = gate.redirect_for(DASHBOARD_PATH) {
        tracing::warn!(
            "No auth token in {}, redirecting to {}",
            config.token_file.display(),
            target
        );
        return Ok(());
    }

    let client = Arc::new(ApiClient::from_config(&config, tokens));
    let services = CatalogServices::new(client);

    let mut dashboard = DashboardPage::new(services.clone());
    dashboard.load().await;
    let stats = dashboard.stats();
    tracing::info!(
        "Catalog: {} languages, {} genres, {} artists, {} songs on the first page",
        stats.languages,
        stats.genres,
        stats.artists,
        stats.songs
    );

    let mut songs = SongsPage::new(
        services,
        HeadlessPlayer::default(),
        Arc::new(TracingNotifier),
        &config,
    );
    songs.mount().await;

    for row in songs.rows() {
        tracing::info!(
            "#{} {} by {} [{} / {}] {}",
            row.id,
            row.name,
            row.artist,
            row.language,
            row.genre,
            row.duration
        );
    }
    if songs.can_go_next() {
        tracing::info!("More songs after page {}", songs.cursor().current());
    }

    songs.teardown();
    Ok(())
}
