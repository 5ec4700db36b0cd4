use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::contact::ApiContactResponse;

pub mod contact;
pub mod health;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    outcome(
        StatusCode::INTERNAL_SERVER_ERROR,
        false,
        "Internal server error".into(),
    )
}

fn outcome(code: StatusCode, success: bool, message: String) -> Response {
    (code, Json(ApiContactResponse { success, message })).into_response()
}
