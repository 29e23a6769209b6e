pub mod viaje;

pub use viaje::{FormMode, MessageResponse, Viaje, ViajeForm, ViajePayload};
