// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Company registry server.
//!
//! Serves the API on the configured address. With a database URL the data
//! lives in PostgreSQL, otherwise in process memory.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use company_registry::{MIGRATOR, api, config::Config, repository::MemoryStore};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_with_dotenv().context("failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app = build_app(&config).await?;

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    tracing::info!("Listening on http://{address}");
    tracing::info!("OpenAPI document: http://{address}/api/doc.json");
    #[cfg(feature = "swagger-ui")]
    tracing::info!("Swagger UI: http://{address}/api/doc/");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

async fn build_app(config: &Config) -> anyhow::Result<Router> {
    let Some(url) = config.database_url() else {
        tracing::warn!("No database configured, data is kept in memory only");
        return Ok(api::router(Arc::new(MemoryStore::new())));
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(url)
        .await
        .context("failed to connect to database")?;
    tracing::info!("Connected to database");

    if config.database.run_migrations {
        MIGRATOR
            .run(&pool)
            .await
            .context("failed to run migrations")?;
        tracing::info!("Migrations applied");
    }

    Ok(api::router(Arc::new(pool)))
}
