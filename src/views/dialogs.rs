// ============================================================================
// DIALOGS - SweetAlert2 con fallback a alert()/confirm() nativos
// ============================================================================

use async_trait::async_trait;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::utils::swal_ffi::{is_confirmed, is_swal_loaded, swal_fire};
use crate::views::traits::{Confirmation, Dialogs, Notice};

#[derive(Clone, Default)]
pub struct SwalDialogs;

impl SwalDialogs {
    pub fn new() -> Self {
        if !is_swal_loaded() {
            log::warn!("⚠️ [DIALOGS] SweetAlert2 no está cargado, usando alert()/confirm()");
        }
        Self
    }
}

#[async_trait(?Send)]
impl Dialogs for SwalDialogs {
    fn notify(&self, notice: Notice) {
        if is_swal_loaded() {
            let options = build_options(&[
                ("title", notice.title.as_str()),
                ("text", notice.text.as_str()),
                ("icon", notice.kind.icon()),
                ("confirmButtonText", notice.button.as_str()),
            ]);
            // La promise se descarta: el aviso no bloquea el flujo
            if let Err(e) = swal_fire(&options) {
                log::error!("❌ [DIALOGS] Swal.fire falló: {:?}", e);
            }
            return;
        }

        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(&format!("{}\n\n{}", notice.title, notice.text));
        }
    }

    async fn confirm(&self, confirmation: Confirmation) -> bool {
        if is_swal_loaded() {
            let options = build_options(&[
                ("title", confirmation.title.as_str()),
                ("confirmButtonText", confirmation.confirm_button.as_str()),
                ("cancelButtonText", confirmation.cancel_button.as_str()),
            ]);
            let _ = js_sys::Reflect::set(
                &options,
                &JsValue::from_str("showCancelButton"),
                &JsValue::TRUE,
            );

            let promise = match swal_fire(&options) {
                Ok(promise) => promise,
                Err(e) => {
                    log::error!("❌ [DIALOGS] Swal.fire falló: {:?}", e);
                    return false;
                }
            };
            return match JsFuture::from(promise).await {
                Ok(result) => is_confirmed(&result),
                Err(e) => {
                    log::error!("❌ [DIALOGS] Confirmación rechazada: {:?}", e);
                    false
                }
            };
        }

        web_sys::window()
            .and_then(|win| win.confirm_with_message(&confirmation.title).ok())
            .unwrap_or(false)
    }
}

fn build_options(entries: &[(&str, &str)]) -> JsValue {
    let options = js_sys::Object::new();
    for (key, value) in entries {
        let _ = js_sys::Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value));
    }
    options.into()
}
