use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::store::ActivityStore;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn list_activities_handler(State(store): State<ActivityStore>) -> impl IntoResponse {
    Json(store.all())
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(store): State<ActivityStore>,
) -> impl IntoResponse {
    match store.signup(&activity_name, &query.email) {
        Ok(()) => Json(json!({
            "message": format!("Signed up {} for {}", query.email, activity_name)
        }))
        .into_response(),
        Err(e) => {
            warn!("Signup for {} rejected: {}", activity_name, e);
            e.into_response()
        }
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(store): State<ActivityStore>,
) -> impl IntoResponse {
    match store.unregister(&activity_name, &query.email) {
        Ok(()) => Json(json!({
            "message": format!("Unregistered {} from {}", query.email, activity_name)
        }))
        .into_response(),
        Err(e) => {
            warn!("Unregister from {} rejected: {}", activity_name, e);
            e.into_response()
        }
    }
}
