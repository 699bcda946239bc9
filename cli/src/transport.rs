use todolist_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};
use tracing::debug;

/// ureq-backed `Transport` for the interactive host.
///
/// ureq's status-code-as-error behavior is disabled so 4xx/5xx responses come
/// back as data for the core to interpret; only transport-level failures
/// (connection refused, DNS, timeouts) map to `ApiError::Transport`.
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

impl Transport for UreqTransport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(?request.method, path = %request.path, "executing request");

        let result = match (request.method, request.body) {
            (HttpMethod::Get, _) => self.agent.get(&request.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&request.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&request.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&request.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&request.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&request.path).send_empty(),
        };

        let mut response = result.map_err(|e| {
            debug!(error = %e, "transport failure");
            ApiError::Transport(e.to_string())
        })?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();
        debug!(status, "request completed");

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}
