// ============================================================================
// VIAJES CRUD - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: renderizan DOM (tabla, formulario, diálogos)
// - ViewModels: lógica CRUD, devuelven Result
// - Services: SOLO comunicación API
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

// Instancia global de App (mantiene vivos los handlers)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Viajes CRUD - Rust Puro + MVVM ({})", CONFIG.environment);

    dom::on_dom_ready(|| {
        if let Err(e) = init_app() {
            log::error!("❌ [MAIN] No se pudo iniciar la app: {}", e);
        }
    })
    .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn init_app() -> Result<(), error::UiError> {
    let app = App::new(&CONFIG)?;
    app.start()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });
    log::info!("✅ [MAIN] App inicializada");
    Ok(())
}
