// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post, put},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{course, leaderboard, mock_test, note, placement, profile},
    state::AppState,
    utils::jwt::auth_middleware,
};

/// Assembles the main application router.
///
/// * Every `/api` route requires a bearer token.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        HeaderValue::from_static("http://localhost:3000"),
        HeaderValue::from_static("http://127.0.0.1:3000"),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/leaderboard", get(leaderboard::get_leaderboard))
        .route("/placement", get(placement::get_placement))
        .route(
            "/tests",
            get(mock_test::list_my_tests).post(mock_test::submit_test),
        )
        .route("/profile", put(profile::update_profile))
        .route("/courses", get(course::list_my_courses))
        .route("/courses/{id}/enroll", post(course::enroll))
        .route("/courses/{id}/progress", put(course::update_progress))
        .route("/notes", get(note::list_my_notes).post(note::create_note))
        .route(
            "/notes/{id}",
            put(note::update_note).delete(note::delete_note),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .nest("/api", api_routes)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
