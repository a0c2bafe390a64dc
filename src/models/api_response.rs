use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateTicketResponse {
    pub ticket_id: String,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SubmitTicketResponse {
    pub message: &'static str,
    pub message_id: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MessageTooLargeResponse {
    pub error: &'static str,
    pub message: String,
    pub suggestion: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Renders `body` as JSON with the headers every endpoint returns:
/// `Content-Type: application/json` and `Access-Control-Allow-Origin: *`.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}
