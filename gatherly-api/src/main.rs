//! # Gatherly API Server
//!
//! Event-registration API: user accounts, a filterable event catalog, and
//! per-user event registrations with confirmation emails.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p gatherly-api
//! ```

use gatherly_api::{
    app::{build_router, AppState},
    config::Config,
};
use gatherly_shared::{
    db::{migrations::run_migrations, pool::create_pool, pool::DatabaseConfig},
    mail::Mailer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gatherly_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Gatherly API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    let pool = create_pool(DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await?;

    run_migrations(&pool).await?;

    let mailer = match &config.mail.smtp_host {
        Some(host) => Mailer::smtp(
            host,
            config.mail.smtp_port,
            config.mail.smtp_username.clone(),
            config.mail.smtp_password.clone(),
            config.mail.from_address.clone(),
        )?,
        None => {
            tracing::warn!("SMTP_HOST not set; outgoing mail uses the stub transport");
            Mailer::stub(config.mail.from_address.clone())
        }
    };

    let bind_address = config.bind_address();
    let state = AppState::new(pool, config, mailer);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
