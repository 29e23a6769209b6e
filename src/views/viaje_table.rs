// ============================================================================
// VIAJE TABLE VIEW - Filas de #list-table-viajes
// ============================================================================

use web_sys::Element;

use crate::dom::{append_child, clear_children, require_element, ElementBuilder};
use crate::error::UiError;
use crate::models::Viaje;
use crate::utils::constants::TABLE_BODY_SELECTOR;

pub const ACTION_ATTR: &str = "data-action";
pub const ID_ATTR: &str = "data-id";
const ACTION_EDIT: &str = "edit";
const ACTION_DELETE: &str = "delete";

/// Acción de un botón de fila (leída de data-action / data-id)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Edit(i64),
    Delete(i64),
}

impl RowAction {
    pub fn parse(action: &str, id: &str) -> Option<Self> {
        let id = id.trim().parse::<i64>().ok()?;
        match action {
            ACTION_EDIT => Some(RowAction::Edit(id)),
            ACTION_DELETE => Some(RowAction::Delete(id)),
            _ => None,
        }
    }
}

pub struct ViajeTable {
    body: Element,
}

impl ViajeTable {
    pub fn mount() -> Result<Self, UiError> {
        Ok(Self {
            body: require_element(TABLE_BODY_SELECTOR)?,
        })
    }

    /// <tbody> (destino de la delegación de clicks)
    pub fn body(&self) -> &Element {
        &self.body
    }

    /// Descartar las filas anteriores y pintar `viajes`
    pub fn render(&self, viajes: &[Viaje]) -> Result<(), UiError> {
        clear_children(&self.body);
        for viaje in viajes {
            append_child(&self.body, &render_row(viaje)?)?;
        }
        Ok(())
    }
}

/// Botón de acción de una fila: atributos data-* + icono
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowControl {
    pub action: &'static str,
    pub id: String,
    pub icon: &'static str,
}

/// Controles editar/eliminar ligados al id del viaje
pub fn row_controls(viaje: &Viaje) -> [RowControl; 2] {
    let id = viaje.id_viaje.to_string();
    [
        RowControl {
            action: ACTION_EDIT,
            id: id.clone(),
            icon: "fa fa-pencil",
        },
        RowControl {
            action: ACTION_DELETE,
            id,
            icon: "fa fa-trash",
        },
    ]
}

fn render_row(viaje: &Viaje) -> Result<Element, UiError> {
    let mut actions = ElementBuilder::new("td")?;
    for control in row_controls(viaje) {
        actions = actions.child(action_button(&control)?)?;
    }
    let actions = actions.build();

    Ok(ElementBuilder::new("tr")?
        .child(text_cell(&viaje.paquete)?)?
        .child(text_cell(&viaje.destino)?)?
        .child(text_cell(&viaje.precio)?)?
        .child(actions)?
        .build())
}

fn text_cell(text: &str) -> Result<Element, UiError> {
    Ok(ElementBuilder::new("td")?.text(text).build())
}

fn action_button(control: &RowControl) -> Result<Element, UiError> {
    let icon = ElementBuilder::new("i")?.class(control.icon).build();
    Ok(ElementBuilder::new("button")?
        .class("btn-cac")
        .attr("type", "button")?
        .attr(ACTION_ATTR, control.action)?
        .attr(ID_ATTR, &control.id)?
        .child(icon)?
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_actions() {
        assert_eq!(RowAction::parse("edit", "1"), Some(RowAction::Edit(1)));
        assert_eq!(RowAction::parse("delete", " 15 "), Some(RowAction::Delete(15)));
    }

    #[test]
    fn row_controls_dispatch_back_to_their_viaje() {
        let viaje = Viaje {
            id_viaje: 1,
            paquete: "Basico".into(),
            destino: "Cancun".into(),
            precio: "500".into(),
        };
        let [edit, delete] = row_controls(&viaje);

        assert_eq!(edit.icon, "fa fa-pencil");
        assert_eq!(delete.icon, "fa fa-trash");
        assert_eq!(RowAction::parse(edit.action, &edit.id), Some(RowAction::Edit(1)));
        assert_eq!(RowAction::parse(delete.action, &delete.id), Some(RowAction::Delete(1)));
    }

    #[test]
    fn rejects_unknown_action_or_bad_id() {
        assert_eq!(RowAction::parse("archive", "1"), None);
        assert_eq!(RowAction::parse("edit", "undefined"), None);
        assert_eq!(RowAction::parse("delete", ""), None);
    }
}
