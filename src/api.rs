use gloo_net::http::Request;
use thiserror::Error;

use crate::models::{AskRequest, AskResponse};

/// Failure reaching or interpreting the answering service. The UI collapses
/// every variant into one fixed error turn; the detail is only logged.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("unexpected response payload: {0}")]
    Payload(String),
}

/// Submits one query to the configured answering endpoint and decodes the
/// answer. The endpoint may be a same-origin path or a host-qualified URL.
pub async fn ask(endpoint: &str, query: &str) -> Result<AskResponse, ApiError> {
    let body = AskRequest {
        query: query.to_string(),
    };

    let resp = Request::post(endpoint)
        .json(&body)
        .map_err(|e| ApiError::Payload(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }

    resp.json::<AskResponse>()
        .await
        .map_err(|e| ApiError::Payload(e.to_string()))
}
