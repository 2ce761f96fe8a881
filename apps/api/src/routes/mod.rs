pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::profiles::handlers as profile_handlers;
use crate::simulation::handlers as simulation_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile API
        .route("/save-profile", post(profile_handlers::handle_save_profile))
        .route(
            "/get-profile/:user_id",
            get(profile_handlers::handle_get_profile),
        )
        .route("/analyze-cv", post(profile_handlers::handle_analyze_cv))
        // Simulation & analysis API
        .route(
            "/career-simulation/:user_id",
            get(simulation_handlers::handle_career_simulation),
        )
        .route(
            "/profile-analysis/:user_id",
            post(simulation_handlers::handle_profile_analysis),
        )
        .route(
            "/adaptive-scenario/:user_id",
            post(simulation_handlers::handle_adaptive_scenario),
        )
        .route(
            "/learning-path/:user_id",
            get(simulation_handlers::handle_learning_path),
        )
        .with_state(state)
}
