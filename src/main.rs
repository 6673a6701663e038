//! Course Generator · Learning Backend
//!
//! - Axum HTTP API
//! - Rule-based level prediction (`POST /predict-level`)
//! - Course, MCQ, chatbot, recommendation and domain-detection endpoints that
//!   delegate to pluggable text-generation / video-search / document-extraction
//!   collaborators
//!
//! Important env variables:
//!   PORT                  : u16 (default 8000)
//!   COURSEGEN_CONFIG_PATH : path to TOML config (level thresholds + prompts)
//!   LOG_LEVEL             : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT            : "pretty" (default) or "json"

mod collab;
mod config;
mod domain;
mod error;
mod level;
mod logic;
mod prompts;
mod protocol;
mod reshape;
mod routes;
mod state;
mod telemetry;
mod util;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::load_config_from_env;
use crate::routes::build_router;
use crate::state::AppState;

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let state = Arc::new(AppState::new(load_config_from_env()));
  state.log_collaborators();

  let app = build_router(state);

  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "coursegen_backend", %addr, "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  info!(target: "coursegen_backend", "HTTP server stopped");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    warn!(target: "coursegen_backend", error = %e, "Failed to listen for Ctrl-C; running until killed");
    std::future::pending::<()>().await;
  }
}
