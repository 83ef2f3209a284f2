//! Dialog collaborator boundary.
//!
//! The core never talks to a widget toolkit for text entry. It asks an
//! [`InputPort`] and gets back either a value or an explicit cancellation.
//! A typed `0` is a value, rejected later by validation; it is never folded
//! into the cancellation path.

use crate::services::error::ScheduleError;

/// Outcome of a single input dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt<T> {
    Value(T),
    Cancelled,
}

impl<T> Prompt<T> {
    /// Convert to a result, mapping cancellation to
    /// [`ScheduleError::Cancelled`].
    pub fn or_cancelled(self) -> Result<T, ScheduleError> {
        match self {
            Prompt::Value(value) => Ok(value),
            Prompt::Cancelled => Err(ScheduleError::Cancelled),
        }
    }
}

/// Synchronous input dialogs supplied by the front-end.
#[cfg_attr(test, mockall::automock)]
pub trait InputPort {
    fn ask_string<'a>(
        &mut self,
        title: &str,
        prompt: &str,
        default: Option<&'a str>,
    ) -> Prompt<String>;

    fn ask_float(&mut self, title: &str, prompt: &str, default: Option<f64>) -> Prompt<f64>;

    fn confirm(&mut self, title: &str, prompt: &str) -> bool;
}
