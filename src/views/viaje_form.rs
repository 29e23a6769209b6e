// ============================================================================
// VIAJE FORM VIEW - #form-viaje
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement};

use crate::dom::{require_element, require_input};
use crate::error::UiError;
use crate::models::{Viaje, ViajeForm};
use crate::utils::constants::*;

pub struct ViajeFormView {
    form: HtmlFormElement,
    id_viaje: HtmlInputElement,
    paquete: HtmlInputElement,
    destino: HtmlInputElement,
    precio: HtmlInputElement,
}

impl ViajeFormView {
    pub fn mount() -> Result<Self, UiError> {
        let form = require_element(FORM_SELECTOR)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| UiError::Dom(format!("{} no es un <form>", FORM_SELECTOR)))?;

        Ok(Self {
            form,
            id_viaje: require_input(ID_INPUT_SELECTOR)?,
            paquete: require_input(PAQUETE_INPUT_SELECTOR)?,
            destino: require_input(DESTINO_INPUT_SELECTOR)?,
            precio: require_input(PRECIO_INPUT_SELECTOR)?,
        })
    }

    pub fn read(&self) -> ViajeForm {
        ViajeForm {
            id_viaje: self.id_viaje.value(),
            paquete: self.paquete.value(),
            destino: self.destino.value(),
            precio: self.precio.value(),
        }
    }

    pub fn fill(&self, viaje: &Viaje) {
        let values = ViajeForm::from_viaje(viaje);
        self.id_viaje.set_value(&values.id_viaje);
        self.paquete.set_value(&values.paquete);
        self.destino.set_value(&values.destino);
        self.precio.set_value(&values.precio);
    }

    pub fn reset(&self) {
        self.form.reset();
        // Un <input type="hidden"> no vuelve a vacío con reset() si se le asignó value
        self.id_viaje.set_value("");
    }
}
