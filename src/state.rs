//! Application state: the planner tuning loaded once at startup.
//!
//! The core is stateless; handlers only need read access to the config, so the
//! state is shared as `Arc<AppState>` without locks.

use tracing::{info, instrument};

use crate::config::{load_planner_config_from_env, PlannerConfig};

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub config: PlannerConfig,
}

impl AppState {
    /// Build state from env: load TOML tuning if PLANNER_CONFIG_PATH is set, else defaults.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let config = match load_planner_config_from_env() {
            Some(cfg) => cfg,
            None => {
                info!(target: "goals_planner", "Using built-in planner defaults.");
                PlannerConfig::default()
            }
        };

        let t = &config.study_plan;
        info!(
            target: "goals_planner",
            minutes_per_band = t.minutes_per_band,
            easy_below = t.easy_below,
            moderate_below = t.moderate_below,
            challenging_below = t.challenging_below,
            max_daily_minutes = t.max_daily_minutes,
            club_sessions_per_week = config.speaking_club.sessions_per_week,
            "Planner tuning"
        );

        Self { config }
    }
}
