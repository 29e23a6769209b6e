// ============================================================================
// SWEETALERT2 FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para Swal.fire - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `Swal.fire(options)` devuelve una Promise con `{ isConfirmed, ... }`
    #[wasm_bindgen(js_namespace = Swal, js_name = fire, catch)]
    pub fn swal_fire(options: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

/// Verificar si SweetAlert2 está cargado en la página
pub fn is_swal_loaded() -> bool {
    web_sys::window()
        .and_then(|win| js_sys::Reflect::get(&win, &JsValue::from_str("Swal")).ok())
        .map(|swal| !swal.is_undefined() && !swal.is_null())
        .unwrap_or(false)
}

/// Leer `isConfirmed` del resultado de Swal.fire
pub fn is_confirmed(result: &JsValue) -> bool {
    js_sys::Reflect::get(result, &JsValue::from_str("isConfirmed"))
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}
