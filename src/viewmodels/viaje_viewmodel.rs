// ============================================================================
// VIAJE VIEWMODEL - LÓGICA CRUD
// ============================================================================
// Orquesta ApiClient + ViajeView + Dialogs. Cada handler es una cadena lineal
// de awaits y devuelve Result al dispatcher de eventos.
// ============================================================================

use crate::error::{CrudError, RequestError, Result, ValidationError};
use crate::models::FormMode;
use crate::services::{ApiClient, HttpTransport};
use crate::views::{Confirmation, Dialogs, Notice, RowAction, ViajeView};

/// Evento de UI que llega desde el DOM
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    Save,
    Edit(i64),
    Remove(i64),
}

impl From<RowAction> for UiEvent {
    fn from(action: RowAction) -> Self {
        match action {
            RowAction::Edit(id) => UiEvent::Edit(id),
            RowAction::Delete(id) => UiEvent::Remove(id),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SaveOutcome {
    Created { message: String },
    Updated { id: i64, message: String },
    /// Formulario inválido: no se hizo ninguna petición
    Rejected(ValidationError),
}

#[derive(Clone, Debug, PartialEq)]
pub enum RemoveOutcome {
    Deleted { id: i64, message: String },
    Cancelled,
}

pub struct ViajeViewModel<T: HttpTransport, V: ViajeView, D: Dialogs> {
    api: ApiClient<T>,
    view: V,
    dialogs: D,
}

impl<T: HttpTransport, V: ViajeView, D: Dialogs> ViajeViewModel<T, V, D> {
    pub fn new(api: ApiClient<T>, view: V, dialogs: D) -> Self {
        Self { api, view, dialogs }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Despachar un evento al handler correspondiente
    pub async fn handle(&self, event: UiEvent) -> Result<()> {
        log::debug!("🖱️ [VIAJES] Evento: {:?}", event);
        match event {
            UiEvent::Save => self.save_viaje().await.map(|_| ()),
            UiEvent::Edit(id) => self.edit(id).await,
            UiEvent::Remove(id) => self.remove(id).await.map(|_| ()),
        }
    }

    /// GET colección y reemplazar la tabla. Devuelve cuántas filas se pintaron.
    pub async fn list_viajes(&self) -> Result<usize> {
        let viajes = self
            .api
            .list_viajes()
            .await
            .map_err(|e| self.request_failed(e))?;

        self.view.render_viajes(&viajes)?;
        log::info!("📋 [VIAJES] Tabla actualizada con {} viajes", viajes.len());
        Ok(viajes.len())
    }

    /// Crear (sin id) o actualizar (con id) desde el formulario
    pub async fn save_viaje(&self) -> Result<SaveOutcome> {
        let form = self.view.read_form()?;

        let (mode, payload) = match form.validate() {
            Ok(valid) => valid,
            Err(e) => {
                log::warn!("⚠️ [VIAJES] Formulario inválido: {}", e);
                let notice = match e {
                    ValidationError::MissingFields(_) => Notice::missing_fields(),
                    ValidationError::InvalidId(_) => Notice::invalid_id(),
                };
                self.dialogs.notify(notice);
                return Ok(SaveOutcome::Rejected(e));
            }
        };

        let response = match mode {
            FormMode::Create => self.api.create_viaje(&payload).await,
            FormMode::Edit(id) => self.api.update_viaje(id, &payload).await,
        }
        .map_err(|e| self.request_failed(e))?;

        log::info!("💾 [VIAJES] Guardado ({:?}): {}", mode, response.message);

        self.view.reset_form()?;
        self.dialogs.notify(Notice::success(&response.message));
        self.refresh_after_write().await;

        Ok(match mode {
            FormMode::Create => SaveOutcome::Created {
                message: response.message,
            },
            FormMode::Edit(id) => SaveOutcome::Updated {
                id,
                message: response.message,
            },
        })
    }

    /// Eliminar previa confirmación explícita
    pub async fn remove(&self, id: i64) -> Result<RemoveOutcome> {
        if !self.dialogs.confirm(Confirmation::delete_viaje()).await {
            log::info!("↩️ [VIAJES] Eliminación de {} cancelada", id);
            return Ok(RemoveOutcome::Cancelled);
        }

        let response = self
            .api
            .delete_viaje(id)
            .await
            .map_err(|e| self.request_failed(e))?;

        log::info!("🗑️ [VIAJES] Viaje {} eliminado", id);

        self.refresh_after_write().await;
        self.dialogs.notify(Notice::success(&response.message));

        Ok(RemoveOutcome::Deleted {
            id,
            message: response.message,
        })
    }

    /// Cargar un viaje en el formulario para editarlo
    pub async fn edit(&self, id: i64) -> Result<()> {
        let viaje = self
            .api
            .get_viaje(id)
            .await
            .map_err(|e| self.request_failed(e))?;

        self.view.fill_form(&viaje)?;
        log::info!("✏️ [VIAJES] Editando viaje {}", id);
        Ok(())
    }

    /// El cambio ya está en el servidor: si el refresco falla solo se registra
    /// (list_viajes ya mostró el aviso) y la operación sigue siendo exitosa.
    async fn refresh_after_write(&self) {
        if let Err(e) = self.list_viajes().await {
            log::warn!("⚠️ [VIAJES] Cambio guardado pero no se pudo refrescar la tabla: {}", e);
        }
    }

    fn request_failed(&self, error: RequestError) -> CrudError {
        self.dialogs.notify(Notice::request_failed());
        CrudError::Request(error)
    }
}
