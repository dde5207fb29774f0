//! Signup API for Mergington High School's extracurricular activities.

use axum::{
    routing::{delete, get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

pub mod models;
pub mod store;
pub mod web;

use store::ActivityStore;
use web::routes::activities;

/// Builds the application router around a store handle. Unmatched paths fall
/// through to the static site in `assets/`, which serves `index.html` at `/`.
pub fn app(store: ActivityStore) -> Router {
    Router::new()
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activities::unregister_handler),
        )
        .fallback_service(ServeDir::new("assets"))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .with_state(store)
}
