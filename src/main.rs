//! Goals Planner · study-plan and task-breakdown backend
//!
//! - Axum HTTP API consumed by the learner dashboard
//! - Deterministic task breakdowns for ~17 objective families
//! - Study-plan calculator tunable through an optional TOML file
//!
//! Important env variables:
//!   PORT                : u16 (default 3000)
//!   PLANNER_CONFIG_PATH : path to TOML config (study plan / speaking club / recommendations)
//!   LOG_LEVEL           : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT          : "pretty" (default) or "json"

mod telemetry;
mod util;
mod domain;
mod config;
mod levels;
mod catalog;
mod objective;
mod generator;
mod normalize;
mod progress;
mod state;
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

  // Load tuning once; the core itself keeps no state.
  let state = Arc::new(AppState::new());

  let app = build_router(state.clone());

  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "goals_planner", %addr, "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
