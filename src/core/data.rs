//! Client for the upstream content API.

use awc::{http::StatusCode, Client};
use thiserror::Error;
use tracing::debug;

use crate::types::{ContactForm, HomeData, HomeDataResponse, QueryResponse};

// Aggregate payloads can exceed awc's 256 KiB default body limit.
const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Everything that can go wrong talking to the content API. Handlers
/// collapse all of it into one generic failure for the caller.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("could not reach the content api: {0}")]
    Connect(String),
    #[error("content api answered with status {0}")]
    Status(StatusCode),
    #[error("content api payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetches the aggregate home-data document and unwraps its envelope.
pub async fn fetch_home_data(api_base: &str) -> Result<HomeData, DataError> {
    let client = Client::default();
    let url = format!("{}/home-data", api_base.trim_end_matches('/'));

    let mut response = client
        .get(&url)
        .send()
        .await
        .map_err(|error| DataError::Connect(error.to_string()))?;
    if !response.status().is_success() {
        return Err(DataError::Status(response.status()));
    }

    let body = response
        .body()
        .limit(BODY_LIMIT)
        .await
        .map_err(|error| DataError::Connect(error.to_string()))?;
    debug!(bytes = body.len(), "home data payload received");

    let envelope: HomeDataResponse = serde_json::from_slice(&body)?;
    Ok(envelope.data)
}

/// Forwards a contact-form query upstream (form-encoded) and returns the
/// receipt envelope.
pub async fn submit_query(api_base: &str, form: &ContactForm) -> Result<QueryResponse, DataError> {
    let client = Client::default();
    let url = format!("{}/queries", api_base.trim_end_matches('/'));

    let mut response = client
        .post(&url)
        .send_form(form)
        .await
        .map_err(|error| DataError::Connect(error.to_string()))?;
    if !response.status().is_success() {
        return Err(DataError::Status(response.status()));
    }

    let body = response
        .body()
        .limit(BODY_LIMIT)
        .await
        .map_err(|error| DataError::Connect(error.to_string()))?;
    debug!(bytes = body.len(), "query receipt received");

    Ok(serde_json::from_slice(&body)?)
}
