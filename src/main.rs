use std::{net::SocketAddr, sync::Arc};

use songbook_api::{
    build_router,
    config::AppConfig,
    database,
    storage::DatabaseStorage,
    AppState, Error, Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    tracing::info!("Starting Songbook API...");

    let config = AppConfig::from_env()?;

    let db = database::connect(&config.db).await?;
    database::define_schema(&db).await?;

    tracing::info!("Database connected successfully!");

    let app_state = AppState::new(Arc::new(DatabaseStorage::new(db)), config.auth.clone());
    let app = build_router(app_state);

    let addr: SocketAddr = format!("{}:{}", config.bind_host, config.port)
        .parse()
        .map_err(|_| Error::InvalidConfig {
            reason: format!("Invalid bind address {}:{}", config.bind_host, config.port),
        })?;

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "songbook_api=debug,tower_http=info,info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .init();
}
