//! Sentence Check · grading backend
//!
//! - Axum HTTP API: `POST /api/check-sentences`, `GET /api/v1/health`
//! - Rule table + feedback templates from TOML, or built-in reference rules
//!
//! Important env variables:
//!   PORT              : u16 (default 3000)
//!   RULES_CONFIG_PATH : path to TOML config (rules + message templates)
//!   LOG_LEVEL         : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT        : "pretty" (default) or "json"

mod telemetry;
mod util;
mod domain;
mod config;
mod seeds;
mod state;
mod error;
mod protocol;
mod logic;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::routes::build_router;
use crate::state::AppState;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Read-only for the life of the process.
  let state = Arc::new(AppState::new());

  let app = build_router(state);

  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "sentence_check", %addr, "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  info!(target: "sentence_check", "HTTP server stopped");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(target: "sentence_check", error = %e, "Failed to listen for Ctrl-C");
    std::future::pending::<()>().await;
  }
  info!(target: "sentence_check", "Shutdown signal received");
}
