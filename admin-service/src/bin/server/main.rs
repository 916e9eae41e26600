use std::sync::Arc;

use admin_service::config::Config;
use admin_service::domain::admin::service::AuthService;
use admin_service::inbound::http::router::create_router;
use admin_service::outbound::repositories::PostgresAdminStore;
use admin_service::outbound::repositories::PostgresOrganizationDirectory;
use admin_service::outbound::security::Argon2Verifier;
use admin_service::outbound::security::JwtTokenIssuer;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "admin_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "admin-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        org_scan_limit = config.directory.org_scan_limit,
        jwt_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let directory = Arc::new(PostgresOrganizationDirectory::new(pg_pool.clone()));
    let admin_store = Arc::new(PostgresAdminStore::new(pg_pool));
    let verifier = Arc::new(Argon2Verifier::new());
    let issuer = Arc::new(JwtTokenIssuer::new(config.jwt.secret.as_bytes()));

    let auth_service = Arc::new(AuthService::new(
        directory,
        admin_store,
        verifier,
        issuer,
        config.directory.org_scan_limit,
        config.jwt.expiration_hours,
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
