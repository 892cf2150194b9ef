//! `bandwise serve` -- load the language model and serve the HTTP API.
//!
//! # Lifecycle
//!
//! ```text
//! 1. Resolve config (file, environment, then command-line flags)
//! 2. Load the language model, installing it first if missing
//! 3. Build the evaluator, chart renderer, and router
//! 4. Bind and serve until Ctrl+C, letting in-flight requests finish
//! ```
//!
//! # Example
//!
//! ```text
//! bandwise serve
//! bandwise serve --host 0.0.0.0 --port 8080 --model xx_generic
//! ```

use std::sync::Arc;

use anyhow::Context;
use bandwise_core::nlp::RuleSegmenter;
use bandwise_core::{Evaluator, ProgressRenderer};
use bandwise_services::api::{ApiState, build_router};
use bandwise_types::config::Config;
use clap::Args;
use tracing::info;

use super::model_store;

/// Arguments for `bandwise serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind (overrides `server.host`).
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides `server.port`).
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Language model name (overrides `nlp.model`).
    #[arg(short, long)]
    pub model: Option<String>,

    /// Enable debug mode (debug-level logging).
    #[arg(long)]
    pub debug: bool,
}

impl ServeArgs {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) -> anyhow::Result<()> {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(model) = &self.model {
            config.nlp.model = model.clone();
        }
        if self.debug {
            config.server.debug = true;
        }
        config.validate()?;
        Ok(())
    }
}

/// Run the server until Ctrl+C.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let store = model_store(&config);
    let name = config.nlp.model.clone();
    let auto_install = config.nlp.auto_install;
    let model = tokio::task::spawn_blocking(move || store.load_or_install(&name, auto_install))
        .await?
        .with_context(|| format!("failed to initialize language model '{}'", config.nlp.model))?;
    info!(
        model = %model.name,
        language = %model.language,
        version = %model.version,
        "language model ready"
    );

    let evaluator = Evaluator::new(Arc::new(RuleSegmenter::new(model)));
    let renderer = ProgressRenderer::new(&config.chart);
    let (width, height) = renderer.dimensions();
    info!(width, height, "progress renderer ready");
    let state = ApiState::new(evaluator, renderer);
    let app = build_router(state, &config.server.cors_origins);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(
        addr = %listener.local_addr()?,
        debug = config.server.debug,
        "bandwise listening -- press Ctrl+C to stop"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("received shutdown signal");
}
