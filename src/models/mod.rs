// Module exports for models

pub mod event;
pub mod week;
