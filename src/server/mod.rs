//! HTTP surface: read-only JSON report endpoints

pub mod cache;
pub mod error;
pub mod routes;
pub mod tracing;

use crate::adapters::github::GitHubClient;
use crate::config::TomlConfig;
use crate::core::stats::StatsEngine;
use crate::utils::error::Result;
use actix_web::{web, App, HttpServer};
use cache::Revalidating;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

/// Shared by every worker: one engine plus one revalidation slot per report.
pub struct AppState {
    pub engine: StatsEngine<GitHubClient, TomlConfig>,
    pub pr_stats: Revalidating,
    pub quality_stats: Revalidating,
    pub breakdown: Revalidating,
    pub quality_prs: Revalidating,
}

impl AppState {
    pub fn new(settings: TomlConfig) -> Result<Self> {
        let source = GitHubClient::new(&settings.github)?;
        let window = Duration::from_secs(settings.server.revalidate_seconds);
        Ok(Self {
            engine: StatsEngine::new(source, settings),
            pr_stats: Revalidating::new(window),
            quality_stats: Revalidating::new(window),
            breakdown: Revalidating::new(window),
            quality_prs: Revalidating::new(window),
        })
    }
}

/// Bind and run until the server is stopped.
pub async fn serve(settings: TomlConfig) -> anyhow::Result<()> {
    let address = (settings.server.bind.clone(), settings.server.port);
    let state = web::Data::new(AppState::new(settings)?);

    ::tracing::info!("🚀 Serving PR statistics on http://{}:{}", address.0, address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::<tracing::StatsRootSpanBuilder>::new())
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind(address)?
    .run()
    .await?;

    Ok(())
}
