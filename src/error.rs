// ============================================================================
// ERRORES - Tipos de error de la aplicación
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Error de una petición HTTP contra la API de viajes
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    /// Respuesta con status no exitoso (lleva el status text del servidor)
    #[error("Error: {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// Error de validación del formulario (nunca llega a la red)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("faltan campos obligatorios: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("identificador de viaje inválido: {0:?}")]
    InvalidId(String),
}

/// Error de manipulación del DOM
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UiError {
    #[error("Elemento no encontrado: {0}")]
    MissingElement(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Error devuelto por los handlers del view model al dispatcher de eventos
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CrudError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Ui(#[from] UiError),
}

pub type Result<T> = std::result::Result<T, CrudError>;
