// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, Window};

use crate::error::UiError;

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Result<Document, UiError> {
    window()
        .and_then(|win| win.document())
        .ok_or_else(|| UiError::Dom("No document".to_string()))
}

/// Query selector que falla si el elemento no existe
pub fn require_element(selector: &str) -> Result<Element, UiError> {
    document()?
        .query_selector(selector)?
        .ok_or_else(|| UiError::MissingElement(selector.to_string()))
}

/// Query selector para un <input>
pub fn require_input(selector: &str) -> Result<HtmlInputElement, UiError> {
    require_element(selector)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| UiError::Dom(format!("{} no es un <input>", selector)))
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, UiError> {
    Ok(document()?.create_element(tag)?)
}

/// Establecer text content (nunca interpreta HTML)
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Vaciar todos los hijos
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), UiError> {
    parent.append_child(child)?;
    Ok(())
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), UiError> {
    Ok(element.set_attribute(name, value)?)
}

/// Obtener atributo
pub fn get_attribute(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name)
}

/// Ancestro más cercano (incluido el propio elemento) que tenga `attr`
pub fn closest_with_attribute(element: &Element, attr: &str) -> Option<Element> {
    element.closest(&format!("[{}]", attr)).ok().flatten()
}
