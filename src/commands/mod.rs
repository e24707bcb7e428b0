//! Server Commands
//!
//! Form-encoded POSTs to the list endpoints, behind a `Transport` seam.

mod fetch;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::EntityConfig;
use crate::models::{CsrfToken, DeleteResponse, EntityRef, FormPayload, CSRF_FORM_FIELD};

pub use fetch::FetchTransport;

/// A request that produced no usable answer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
}

#[async_trait(?Send)]
pub trait Transport {
    /// POST `payload` to `path` and return the response body.
    ///
    /// Non-2xx statuses are errors.
    async fn post_form(&self, path: &str, payload: &FormPayload) -> Result<String, TransportError>;
}

/// Create or update: the body is not inspected
pub async fn submit_form<T: Transport + ?Sized>(
    transport: &T,
    path: &str,
    payload: &FormPayload,
) -> Result<(), TransportError> {
    transport.post_form(path, payload).await.map(|_| ())
}

pub async fn delete_entity<T: Transport + ?Sized>(
    transport: &T,
    config: &EntityConfig,
    id: &EntityRef,
    token: &CsrfToken,
) -> Result<DeleteResponse, TransportError> {
    let payload = FormPayload::new()
        .with(config.id_field.as_str(), id.as_str())
        .with(CSRF_FORM_FIELD, token.as_str());
    let body = transport.post_form(&config.delete_path, &payload).await?;
    serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))
}
