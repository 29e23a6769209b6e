// ============================================================================
// VIEWS - Renderizado DOM (sin lógica de negocio)
// ============================================================================

pub mod traits;
pub mod viaje_table;
pub mod viaje_form;
pub mod dom_view;
pub mod dialogs;

pub use traits::{Confirmation, Dialogs, Notice, NoticeKind, ViajeView};
pub use viaje_table::{RowAction, ViajeTable};
pub use viaje_form::ViajeFormView;
pub use dom_view::DomViajeView;
pub use dialogs::SwalDialogs;
