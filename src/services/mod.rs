// Service module exports

pub mod error;
pub mod event;
pub mod input;
pub mod schedule;
pub mod sync;
