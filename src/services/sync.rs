//! List-view mirror of the event store.
//!
//! The store is the single write path; the tabular display only ever holds
//! rendered projections pushed through [`ListMirror`] after each successful
//! mutation. Rows are keyed by event id throughout: matching rows by name
//! would silently corrupt state as soon as two events share one.

use crate::models::event::{Event, EventId};

/// Rendered table row for one event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    pub id: EventId,
    pub name: String,
    /// Flattened staff breakdown, non-empty entries only.
    pub staff_summary: String,
    pub duration: f64,
}

impl EventRow {
    pub fn project(event: &Event) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            staff_summary: event.staff.summary(),
            duration: event.duration,
        }
    }
}

/// Receiver for store mutations, kept in lockstep one user action at a time.
pub trait ListMirror {
    fn row_added(&mut self, row: EventRow);
    fn row_updated(&mut self, row: EventRow);
    fn row_removed(&mut self, id: EventId);
}

/// Concrete mirror backing the egui list view.
#[derive(Debug, Default)]
pub struct TableMirror {
    rows: Vec<EventRow>,
}

impl TableMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[EventRow] {
        &self.rows
    }

    pub fn row_for(&self, id: EventId) -> Option<&EventRow> {
        self.rows.iter().find(|r| r.id == id)
    }
}

impl ListMirror for TableMirror {
    fn row_added(&mut self, row: EventRow) {
        self.rows.push(row);
    }

    fn row_updated(&mut self, row: EventRow) {
        match self.rows.iter_mut().find(|r| r.id == row.id) {
            Some(existing) => *existing = row,
            None => {
                // A missed add would mean the displays diverged from the
                // store; repair and record it.
                log::error!("list mirror had no row for event {}", row.id);
                self.rows.push(row);
            }
        }
    }

    fn row_removed(&mut self, id: EventId) {
        self.rows.retain(|r| r.id != id);
    }
}
