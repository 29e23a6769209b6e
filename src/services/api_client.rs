// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de UI: devuelve Result<_, RequestError> y el view model
// decide qué mostrar
// ============================================================================

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::RequestError;
use crate::models::{MessageResponse, Viaje, ViajePayload};
use crate::services::http_transport::{ApiRequest, HttpMethod, HttpTransport};
use crate::utils::constants::VIAJES_PATH;

/// Cliente API de viajes
pub struct ApiClient<T: HttpTransport> {
    base_url: String,
    transport: T,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/api/viajes/`
    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, VIAJES_PATH)
    }

    /// `{base}/api/viajes/{id}`
    pub fn item_url(&self, id: i64) -> String {
        format!("{}{}{}", self.base_url, VIAJES_PATH, id)
    }

    /// Petición JSON sin body
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        url: &str,
    ) -> Result<R, RequestError> {
        self.execute(method, url, None).await
    }

    /// Petición JSON serializando `body`
    pub async fn request_with_body<R, B>(
        &self,
        method: HttpMethod,
        url: &str,
        body: &B,
    ) -> Result<R, RequestError>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let json = serde_json::to_string(body).map_err(|e| {
            let err = RequestError::Serialize(e.to_string());
            log::error!("❌ [API] Fetch error: {} {} → {}", method, url, err);
            err
        })?;
        self.execute(method, url, Some(json)).await
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<String>,
    ) -> Result<R, RequestError> {
        log::debug!("🌐 [API] {} {}", method, url);

        let result = self.send_and_parse(method, url, body).await;
        if let Err(e) = &result {
            log::error!("❌ [API] Fetch error: {} {} → {}", method, url, e);
        }
        result
    }

    async fn send_and_parse<R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<String>,
    ) -> Result<R, RequestError> {
        let response = self
            .transport
            .send(ApiRequest {
                method,
                url: url.to_string(),
                body,
            })
            .await?;

        if !response.ok() {
            return Err(RequestError::Status {
                status: response.status,
                status_text: response.status_text,
            });
        }

        serde_json::from_str::<R>(&response.body).map_err(|e| RequestError::Parse(e.to_string()))
    }

    /// Listar viajes
    pub async fn list_viajes(&self) -> Result<Vec<Viaje>, RequestError> {
        let viajes: Vec<Viaje> = self.request(HttpMethod::Get, &self.collection_url()).await?;
        log::info!("✅ [API] {} viajes obtenidos", viajes.len());
        Ok(viajes)
    }

    /// Obtener viaje por ID
    pub async fn get_viaje(&self, id: i64) -> Result<Viaje, RequestError> {
        self.request(HttpMethod::Get, &self.item_url(id)).await
    }

    /// Crear viaje
    pub async fn create_viaje(&self, payload: &ViajePayload) -> Result<MessageResponse, RequestError> {
        self.request_with_body(HttpMethod::Post, &self.collection_url(), payload)
            .await
    }

    /// Actualizar viaje existente
    pub async fn update_viaje(
        &self,
        id: i64,
        payload: &ViajePayload,
    ) -> Result<MessageResponse, RequestError> {
        self.request_with_body(HttpMethod::Put, &self.item_url(id), payload)
            .await
    }

    /// Eliminar viaje
    pub async fn delete_viaje(&self, id: i64) -> Result<MessageResponse, RequestError> {
        self.request(HttpMethod::Delete, &self.item_url(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::http_transport::{ApiResponse, MockHttpTransport};
    use tokio_test::block_on;

    fn respond(status: u16, status_text: &str, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn urls_are_built_from_base() {
        let client = ApiClient::new("http://127.0.0.1:5000/", MockHttpTransport::new());
        assert_eq!(client.collection_url(), "http://127.0.0.1:5000/api/viajes/");
        assert_eq!(client.item_url(42), "http://127.0.0.1:5000/api/viajes/42");
    }

    #[test]
    fn list_parses_array() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.method == HttpMethod::Get
                    && req.url == "http://api/api/viajes/"
                    && req.body.is_none()
            })
            .times(1)
            .returning(|_| {
                Ok(respond(
                    200,
                    "OK",
                    r#"[{"id_viaje":1,"paquete":"Basico","destino":"Cancun","precio":"500"}]"#,
                ))
            });

        let client = ApiClient::new("http://api", transport);
        let viajes = block_on(client.list_viajes()).unwrap();
        assert_eq!(viajes.len(), 1);
        assert_eq!(viajes[0].destino, "Cancun");
    }

    #[test]
    fn create_sends_json_body() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                let body: serde_json::Value =
                    serde_json::from_str(req.body.as_deref().unwrap_or("null")).unwrap();
                req.method == HttpMethod::Post
                    && req.url == "http://api/api/viajes/"
                    && body == serde_json::json!({"paquete":"Basico","destino":"Cancun","precio":"500"})
            })
            .times(1)
            .returning(|_| Ok(respond(201, "CREATED", r#"{"message":"Viaje creado"}"#)));

        let client = ApiClient::new("http://api", transport);
        let payload = ViajePayload {
            paquete: "Basico".into(),
            destino: "Cancun".into(),
            precio: "500".into(),
        };
        let response = block_on(client.create_viaje(&payload)).unwrap();
        assert_eq!(response.message, "Viaje creado");
    }

    #[test]
    fn non_ok_status_carries_status_text() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .returning(|_| Ok(respond(404, "NOT FOUND", r#"{"message":"no existe"}"#)));

        let client = ApiClient::new("http://api", transport);
        let err = block_on(client.delete_viaje(9)).unwrap_err();
        assert_eq!(
            err,
            RequestError::Status {
                status: 404,
                status_text: "NOT FOUND".into()
            }
        );
        assert_eq!(err.to_string(), "Error: NOT FOUND");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .returning(|_| Ok(respond(200, "OK", "<html>oops</html>")));

        let client = ApiClient::new("http://api", transport);
        let err = block_on(client.get_viaje(1)).unwrap_err();
        assert!(matches!(err, RequestError::Parse(_)));
    }

    #[test]
    fn network_errors_pass_through() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .returning(|_| Err(RequestError::Network("Failed to fetch".into())));

        let client = ApiClient::new("http://api", transport);
        let err = block_on(client.list_viajes()).unwrap_err();
        assert_eq!(err, RequestError::Network("Failed to fetch".into()));
    }
}
