//! menteclara-api
//!
//! HTTP surface over the account store and the exercise assistant.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};

pub mod assistant;
pub mod busy;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;

use state::AppState;

/// Build the router. Everything except health and login needs a session.
pub fn app(state: AppState) -> Router {
    let protected = Router::new()
        .route("/auth/logout", post(routes::auth::logout))
        .route("/me", get(routes::auth::me))
        .route(
            "/therapists",
            get(routes::therapists::list_therapists).post(routes::therapists::create_therapist),
        )
        .route("/accounts/{id}/status", put(routes::accounts::set_status))
        .route(
            "/accounts/{id}/status/toggle",
            post(routes::accounts::toggle_status),
        )
        .route(
            "/patients",
            get(routes::patients::list_patients).post(routes::patients::create_patient),
        )
        .route("/patients/{id}", get(routes::patients::get_patient))
        .route(
            "/patients/{id}/exercises",
            post(routes::exercises::assign_exercise),
        )
        .route(
            "/patients/{id}/exercises/{exercise_id}/complete",
            post(routes::exercises::complete_exercise),
        )
        .route(
            "/patients/{id}/exercises/{exercise_id}/speech",
            post(routes::exercises::speak_exercise),
        )
        .route("/patients/{id}/tasks", post(routes::tasks::add_task))
        .route(
            "/patients/{id}/tasks/{task_id}/toggle",
            post(routes::tasks::toggle_task),
        )
        .route("/assistant/generate", post(routes::assistant::generate))
        .route("/assistant/assign", post(routes::assistant::assign))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_session,
        ));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/auth/login", post(routes::auth::login))
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
