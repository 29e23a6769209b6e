pub mod viaje_viewmodel;

pub use viaje_viewmodel::{RemoveOutcome, SaveOutcome, UiEvent, ViajeViewModel};
