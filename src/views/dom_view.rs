use crate::error::UiError;
use crate::models::{Viaje, ViajeForm};
use crate::views::traits::ViajeView;
use crate::views::viaje_form::ViajeFormView;
use crate::views::viaje_table::ViajeTable;

/// Implementación de ViajeView sobre el documento HTML real
pub struct DomViajeView {
    table: ViajeTable,
    form: ViajeFormView,
}

impl DomViajeView {
    /// Resolver todos los elementos requeridos; falla si falta alguno
    pub fn mount() -> Result<Self, UiError> {
        Ok(Self {
            table: ViajeTable::mount()?,
            form: ViajeFormView::mount()?,
        })
    }

    pub fn table(&self) -> &ViajeTable {
        &self.table
    }
}

impl ViajeView for DomViajeView {
    fn render_viajes(&self, viajes: &[Viaje]) -> Result<(), UiError> {
        self.table.render(viajes)
    }

    fn read_form(&self) -> Result<ViajeForm, UiError> {
        Ok(self.form.read())
    }

    fn fill_form(&self, viaje: &Viaje) -> Result<(), UiError> {
        self.form.fill(viaje);
        Ok(())
    }

    fn reset_form(&self) -> Result<(), UiError> {
        self.form.reset();
        Ok(())
    }
}
