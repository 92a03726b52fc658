use crate::utils::error::GatewayError;
use reqwest::{Client, Response};

/// Builds the HTTP client a hosted provider keeps for its whole lifetime.
pub fn build_client(backend: &'static str) -> Result<Client, GatewayError> {
    Client::builder()
        .user_agent(concat!("league-gateway/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| GatewayError::BackendUnavailable {
            backend,
            message: format!("could not build HTTP client: {}", e),
        })
}

/// Turns a non-success response into a `BackendError`, keeping the body text.
pub async fn backend_error(backend: &'static str, response: Response) -> GatewayError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    GatewayError::BackendError {
        backend,
        status,
        message,
    }
}
