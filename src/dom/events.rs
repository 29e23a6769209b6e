// ============================================================================
// EVENT HANDLING - Registro de listeners
// ============================================================================
// Los listeners se registran una sola vez en App::start() y viven lo mismo que
// la página, por eso closure.forget() no acumula memoria.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

use crate::dom::document;
use crate::error::UiError;

/// Registrar click handler
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), UiError>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Ejecutar `handler` cuando el DOM esté listo.
/// Si el documento ya terminó de parsearse se ejecuta de inmediato.
pub fn on_dom_ready<F>(handler: F) -> Result<(), UiError>
where
    F: FnOnce() + 'static,
{
    let doc = document()?;
    if doc.ready_state() != "loading" {
        handler();
        return Ok(());
    }

    let closure: Closure<dyn FnMut(Event)> = Closure::once(move |_e: Event| handler());
    doc.add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
