//! Browser fetch transport

use async_trait::async_trait;
use gloo_net::http::Request;

use super::{Transport, TransportError};
use crate::models::FormPayload;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Same-origin fetch; session cookies ride along by default
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn post_form(&self, path: &str, payload: &FormPayload) -> Result<String, TransportError> {
        let body = payload.encode().map_err(|e| TransportError::Encode(e.to_string()))?;

        let response = Request::post(path)
            .header("Content-Type", FORM_CONTENT_TYPE)
            // Django's request.is_ajax() looks for this
            .header("X-Requested-With", "XMLHttpRequest")
            .body(body)
            .map_err(|e| TransportError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(TransportError::Status(response.status()));
        }
        response.text().await.map_err(|e| TransportError::Decode(e.to_string()))
    }
}
