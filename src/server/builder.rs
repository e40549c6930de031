//! CatalogServer builder with a fluent API

use super::handlers::{AppState, Clock};
use super::router::build_catalog_routes;
use crate::config::CatalogConfig;
use crate::core::augment::SeededAugmenter;
use crate::core::engine::QueryEngine;
use crate::core::source::VehicleSource;
use anyhow::Result;
use axum::Router;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the catalog HTTP server
///
/// # Example
///
/// ```ignore
/// CatalogServer::builder()
///     .with_config(CatalogConfig::from_yaml_file("catalog.yaml")?)
///     .with_source(JsonVehicleSource::from_file("vehicles.json"))
///     .serve()
///     .await?;
/// ```
pub struct CatalogServer {
    config: CatalogConfig,
    source: Option<Arc<dyn VehicleSource>>,
    clock: Clock,
}

impl CatalogServer {
    pub fn builder() -> Self {
        Self {
            config: CatalogConfig::default(),
            source: None,
            clock: Arc::new(|| Utc::now().date_naive()),
        }
    }

    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the vehicle source (required)
    pub fn with_source(mut self, source: impl VehicleSource + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Override "today" for hero date floors
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDate + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Build the router
    pub fn build(self) -> Result<Router> {
        self.config.check()?;

        let source = self
            .source
            .ok_or_else(|| anyhow::anyhow!("VehicleSource is required. Call .with_source()"))?;

        let augmenter = SeededAugmenter::new(
            &self.config.augmentation,
            self.config.listing.location_label.clone(),
        );

        let state = AppState {
            source,
            engine: Arc::new(QueryEngine::new(augmenter)),
            default_sort: self.config.listing.default_sort,
            clock: self.clock,
        };

        Ok(build_catalog_routes(state))
    }

    /// Serve on the configured address with graceful shutdown
    ///
    /// Handles SIGTERM and SIGINT (Ctrl+C).
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.server.addr();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Catalog listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Catalog shutdown complete");
        Ok(())
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
