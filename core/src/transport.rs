//! Executing `HttpRequest`s.

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Performs one HTTP round trip.
///
/// Implementations return every status code as data; only a failure to get
/// a response at all is an error.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport over `ureq`.
///
/// Status-as-error is disabled so 4xx/5xx come back as `HttpResponse` and
/// the client decides what they mean. No timeout beyond ureq's defaults.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, path = %request.path, "sending request");
        let content_type = request
            .header("content-type")
            .unwrap_or("application/json")
            .to_string();
        let path = request.path.as_str();

        let result = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => self.agent.get(path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(path)
                .content_type(content_type.as_str())
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(path)
                .content_type(content_type.as_str())
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(path).send_empty(),
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        debug!(status, "received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
