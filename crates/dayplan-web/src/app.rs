use axum::{routing::get, Router};
use std::sync::Arc;

use dayplan_agent::PlanGenerator;
use dayplan_core::config::DayplanConfig;
use dayplan_store::PlanStore;

/// Central shared state — passed as Arc<AppState> to all Axum handlers.
pub struct AppState {
    pub config: DayplanConfig,
    pub generator: PlanGenerator,
    pub store: PlanStore,
}

impl AppState {
    pub fn new(config: DayplanConfig, generator: PlanGenerator, store: PlanStore) -> Self {
        Self {
            config,
            generator,
            store,
        }
    }
}

/// Assemble the full Axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/",
            get(crate::http::planner::show_planner).post(crate::http::planner::submit_plan),
        )
        .route("/health", get(crate::http::health::health_handler))
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
