/// URL base por defecto de la API de viajes (servidor local)
/// Se sobreescribe en tiempo de compilación con BACKEND_URL (ver config.rs)
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Ruta de la colección (con barra final, como la expone el servidor)
pub const VIAJES_PATH: &str = "/api/viajes/";

// Selectores del documento HTML
pub const TABLE_BODY_SELECTOR: &str = "#list-table-viajes tbody";
pub const FORM_SELECTOR: &str = "#form-viaje";
pub const ID_INPUT_SELECTOR: &str = "#id-viaje";
pub const PAQUETE_INPUT_SELECTOR: &str = "#paquete";
pub const DESTINO_INPUT_SELECTOR: &str = "#destino";
pub const PRECIO_INPUT_SELECTOR: &str = "#precio";
pub const SAVE_BUTTON_SELECTOR: &str = "#btn-save-viaje";

// Textos de los diálogos
pub const TEXT_ERROR_TITLE: &str = "Error!";
pub const TEXT_SUCCESS_TITLE: &str = "Exito!";
pub const TEXT_CLOSE: &str = "Cerrar";
pub const TEXT_MISSING_FIELDS: &str = "Por favor completa todos los campos.";
pub const TEXT_INVALID_ID: &str = "El identificador del viaje no es válido.";
pub const TEXT_REQUEST_FAILED: &str = "An error occurred while fetching data. Please try again.";
pub const TEXT_CONFIRM_DELETE: &str = "¿Está seguro de eliminar el viaje?";
pub const TEXT_DELETE: &str = "Eliminar";
pub const TEXT_CANCEL: &str = "Cancelar";
