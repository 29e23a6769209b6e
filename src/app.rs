// ============================================================================
// APP - Punto único de inicialización
// ============================================================================
// Resuelve el DOM, arma el view model y conecta los eventos. Sin teardown:
// vive lo mismo que la página.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::config::AppConfig;
use crate::dom::{closest_with_attribute, get_attribute, on_click, require_element};
use crate::error::UiError;
use crate::services::{ApiClient, GlooTransport};
use crate::utils::constants::SAVE_BUTTON_SELECTOR;
use crate::viewmodels::{UiEvent, ViajeViewModel};
use crate::views::viaje_table::{ACTION_ATTR, ID_ATTR};
use crate::views::{DomViajeView, RowAction, SwalDialogs};

type BrowserViewModel = ViajeViewModel<GlooTransport, DomViajeView, SwalDialogs>;

pub struct App {
    view_model: Rc<BrowserViewModel>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, UiError> {
        let view = DomViajeView::mount()?;
        let api = ApiClient::new(config.backend_url(), GlooTransport::new());
        log::info!("🔗 [APP] API de viajes en {}", api.base_url());

        Ok(Self {
            view_model: Rc::new(ViajeViewModel::new(api, view, SwalDialogs::new())),
        })
    }

    /// Conectar eventos y cargar la tabla inicial
    pub fn start(&self) -> Result<(), UiError> {
        self.bind_save_button()?;
        self.bind_row_actions()?;

        let view_model = self.view_model.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = view_model.list_viajes().await {
                log::error!("❌ [APP] Carga inicial fallida: {}", e);
            }
        });
        Ok(())
    }

    fn bind_save_button(&self) -> Result<(), UiError> {
        let button = require_element(SAVE_BUTTON_SELECTOR)?;
        let view_model = self.view_model.clone();
        on_click(&button, move |e: MouseEvent| {
            // El botón puede estar dentro del <form>: evitar el submit nativo
            e.prevent_default();
            dispatch(view_model.clone(), UiEvent::Save);
        })
    }

    /// Un solo listener en <tbody> para todos los botones de fila
    fn bind_row_actions(&self) -> Result<(), UiError> {
        let body = self.view_model.view().table().body().clone();
        let view_model = self.view_model.clone();
        on_click(&body, move |e: MouseEvent| {
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Some(button) = closest_with_attribute(&target, ACTION_ATTR) else {
                return;
            };

            let action = get_attribute(&button, ACTION_ATTR).unwrap_or_default();
            let id = get_attribute(&button, ID_ATTR).unwrap_or_default();
            match RowAction::parse(&action, &id) {
                Some(row_action) => dispatch(view_model.clone(), row_action.into()),
                None => log::warn!("⚠️ [APP] Acción de fila ignorada: {:?} id={:?}", action, id),
            }
        })
    }
}

fn dispatch(view_model: Rc<BrowserViewModel>, event: UiEvent) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = view_model.handle(event).await {
            log::error!("❌ [APP] {:?} falló: {}", event, e);
        }
    });
}
