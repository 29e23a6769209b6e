// Utils compartidos

pub mod constants;
pub mod swal_ffi;

pub use constants::*;
