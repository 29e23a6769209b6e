// ============================================================================
// HTTP TRANSPORT - Puerto de red (gloo-net en el navegador, mock en tests)
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Method, RequestBuilder};

use crate::error::RequestError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    fn to_gloo(self) -> Method {
        match self {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Petición ya resuelta: URL absoluta y body JSON serializado
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<String>,
}

/// Respuesta cruda (el parseo JSON lo hace ApiClient)
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait HttpTransport {
    /// Enviar la petición. Solo falla por errores de red; un status no-OK
    /// se devuelve como respuesta normal.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestError>;
}

/// Transporte real sobre fetch (gloo-net)
#[derive(Clone, Default)]
pub struct GlooTransport;

impl GlooTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestError> {
        let builder = RequestBuilder::new(&request.url)
            .method(request.method.to_gloo())
            .header("Content-Type", "application/json");

        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| RequestError::Network(e.to_string()))?;

        let response = built
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        Ok(ApiResponse {
            status,
            status_text,
            body,
        })
    }
}
