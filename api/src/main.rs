use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use clap::Parser;

use sso_api::cli::Cli;
use sso_api::{create_app, telemetry, AppState};
use sso_core::services::{AuthService, AuthServiceConfig, JwtTokenIssuer};
use sso_infra::{DatabasePool, SqliteAppRepository, SqliteUserRepository};
use sso_shared::{AppConfig, Environment};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables, environment-specific file first
    dotenvy::from_filename(Environment::from_env().env_file()).ok();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    telemetry::init_tracing(&config.logging).context("failed to initialise logging")?;

    tracing::info!(
        env = %config.environment,
        token_ttl = config.auth.token_ttl,
        "starting application"
    );

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("failed to open database")?;
    if config.database.run_migrations {
        pool.run_migrations().await.context("failed to migrate database")?;
    }
    tracing::info!(stats = %pool.get_statistics(), "database ready");

    let user_repository = Arc::new(SqliteUserRepository::new(pool.get_pool().clone()));
    let app_repository = Arc::new(SqliteAppRepository::new(pool.get_pool().clone()));
    let token_issuer = Arc::new(
        JwtTokenIssuer::from_std(config.auth.token_ttl()).context("invalid token TTL")?,
    );

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        app_repository,
        token_issuer,
        AuthServiceConfig::from(&config.auth),
        tracing::info_span!("sso", env = %config.environment),
    ));
    auth_service
        .warm_up()
        .await
        .context("failed to prepare password hashing")?;

    let app_state = web::Data::new(AppState::new(
        auth_service,
        config.server.request_timeout(),
    ));

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "http server starting");

    let mut server = HttpServer::new(move || create_app(app_state.clone()))
        .shutdown_timeout(config.server.shutdown_timeout)
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?;
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    // Resolves after SIGINT/SIGTERM once in-flight requests drain
    server.run().await.context("http server failed")?;

    pool.close().await;
    tracing::info!("application stopped");

    Ok(())
}
