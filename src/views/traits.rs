use async_trait::async_trait;

use crate::error::UiError;
use crate::models::{Viaje, ViajeForm};
use crate::utils::constants::*;

/// Superficie visible: tabla de viajes + formulario
pub trait ViajeView {
    /// Reemplazar todas las filas de la tabla
    fn render_viajes(&self, viajes: &[Viaje]) -> Result<(), UiError>;

    /// Leer los valores actuales del formulario
    fn read_form(&self) -> Result<ViajeForm, UiError>;

    /// Cargar un viaje en el formulario (modo edición)
    fn fill_form(&self, viaje: &Viaje) -> Result<(), UiError>;

    /// Vaciar el formulario (modo creación)
    fn reset_form(&self) -> Result<(), UiError>;
}

/// Diálogos modales (SweetAlert2 o alert/confirm nativos)
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait Dialogs {
    /// Mostrar aviso sin esperar a que se cierre
    fn notify(&self, notice: Notice);

    /// Pedir confirmación; `true` solo si el usuario confirma explícitamente
    async fn confirm(&self, confirmation: Confirmation) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// Valor de `icon` para Swal.fire
    pub fn icon(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
    pub button: String,
}

impl Notice {
    fn new(kind: NoticeKind, title: &str, text: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            text: text.to_string(),
            button: TEXT_CLOSE.to_string(),
        }
    }

    pub fn missing_fields() -> Self {
        Self::new(NoticeKind::Error, TEXT_ERROR_TITLE, TEXT_MISSING_FIELDS)
    }

    pub fn invalid_id() -> Self {
        Self::new(NoticeKind::Error, TEXT_ERROR_TITLE, TEXT_INVALID_ID)
    }

    pub fn request_failed() -> Self {
        Self::new(NoticeKind::Error, TEXT_ERROR_TITLE, TEXT_REQUEST_FAILED)
    }

    /// Éxito con el mensaje que devolvió el servidor
    pub fn success(message: &str) -> Self {
        Self::new(NoticeKind::Success, TEXT_SUCCESS_TITLE, message)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Confirmation {
    pub title: String,
    pub confirm_button: String,
    pub cancel_button: String,
}

impl Confirmation {
    pub fn delete_viaje() -> Self {
        Self {
            title: TEXT_CONFIRM_DELETE.to_string(),
            confirm_button: TEXT_DELETE.to_string(),
            cancel_button: TEXT_CANCEL.to_string(),
        }
    }
}
