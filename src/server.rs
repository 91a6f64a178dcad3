//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, state wiring, and the Axum server
//! lifecycle.

use crate::application::services::{MembershipService, OrganizationService, UserService};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgMembershipRepository, PgOrganizationRepository, PgUserRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Schema migrations
/// - Repositories and services
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let pool = Arc::new(pool);
    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let organization_repository = Arc::new(PgOrganizationRepository::new(pool.clone()));
    let membership_repository = Arc::new(PgMembershipRepository::new(pool.clone()));

    let user_service = Arc::new(UserService::new(user_repository.clone()));
    let organization_service = Arc::new(OrganizationService::new(organization_repository.clone()));
    let membership_service = Arc::new(MembershipService::new(
        organization_repository,
        user_repository,
        membership_repository,
    ));

    let state = AppState::new(user_service, organization_service, membership_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl-C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
