use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::registry::{ActivityRegistry, RegistryError};
use crate::services::signup_service;

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub email: String,
}

pub async fn signup_handler(
    Path(name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(registry): State<ActivityRegistry>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    signup_service::signup_student(&registry, &name, &query.email)
        .await
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %name, email = %query.email, error = %e, "signup rejected");
            error_response(e)
        })
}

pub async fn signoff_handler(
    Path(name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(registry): State<ActivityRegistry>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    signup_service::signoff_student(&registry, &name, &query.email)
        .await
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %name, email = %query.email, error = %e, "signoff rejected");
            error_response(e)
        })
}

fn error_response(err: RegistryError) -> (StatusCode, Json<Value>) {
    let status = match err {
        RegistryError::UnknownActivity => StatusCode::NOT_FOUND,
        RegistryError::AlreadySignedUp
        | RegistryError::NotSignedUp
        | RegistryError::ActivityFull => StatusCode::BAD_REQUEST,
    };
    (status, Json(serde_json::json!({ "detail": err.to_string() })))
}
