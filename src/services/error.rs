//! Typed errors for scheduling operations.
//!
//! Every variant is recovered at the triggering user action: the action is
//! abandoned and the store and both displays stay exactly as they were.

use thiserror::Error;

use crate::models::event::EventId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// Event name was empty or whitespace.
    #[error("event name cannot be empty")]
    EmptyName,

    /// Duration must be a positive number of hours. A typed `0` lands here,
    /// distinct from the user cancelling the dialog.
    #[error("event duration must be a positive number of hours, got {value}")]
    NonPositiveDuration { value: f64 },

    /// Operation referenced an id that is not (or no longer) in the store.
    #[error("no event with id {id}")]
    NotFound { id: EventId },

    /// The user cancelled an input dialog; the enclosing action is abandoned
    /// with no partial mutation.
    #[error("cancelled by user")]
    Cancelled,
}
