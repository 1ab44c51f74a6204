use axum::Json;
use axum::http::StatusCode;
use axum::response::{
    IntoResponse,
    Response
};
use serde::Serialize;

use crate::evaluation::evaluationerror::EvaluationError;

#[derive(Debug, Serialize)]
pub struct PlotPayload {
    pub success: bool,
    pub image: String,
    pub mime_type: &'static str,
    pub function_name: &'static str
}

#[derive(Debug, Serialize)]
pub struct CalculatePayload {
    pub success: bool,
    pub input: f64,
    pub output: f64,
    pub function_name: &'static str
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub success: bool,
    pub error: String
}

/// Failure side of the JSON endpoints.
///
/// Caller mistakes are reported with `200 OK` and `success: false`, so a
/// client only has to inspect the flag.
#[derive(Debug)]
pub struct ApiError(pub EvaluationError);

impl From<EvaluationError> for ApiError {
    fn from(error: EvaluationError) -> Self {
        ApiError(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let payload = ErrorPayload { success: false, error: self.0.to_string() };
        (status, Json(payload)).into_response()
    }
}
