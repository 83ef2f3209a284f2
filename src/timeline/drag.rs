//! Drag-to-reschedule state machine.
//!
//! The live drag is purely visual: pointer motion only translates the
//! tagged drawables on screen. The committed start time is recomputed from
//! the block's final position through the grid mapper on release, so
//! rounding drift never accumulates across repeated drags.

use super::grid::GridMetrics;
use crate::models::event::EventId;

/// Transient state of one in-progress drag. At most one is live at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub event_id: EventId,
    /// Block's left edge at grab time, canvas coordinates.
    pub origin_x: f32,
    /// Pointer's last-seen x.
    pub last_x: f32,
    /// Horizontal pixel delta applied so far, not yet committed.
    pub total_dx: f32,
}

/// Per-frame visual translation: move every drawable tagged `id` by `dx`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragShift {
    pub id: EventId,
    pub dx: f32,
}

/// Store write produced by releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragCommit {
    pub id: EventId,
    /// Whole-hour offset from week start.
    pub new_start: f64,
}

#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer-down transition.
    ///
    /// Starts a session when the pointer landed on an event block. A press
    /// on empty canvas is a no-op, and so is a second press while a session
    /// is already live.
    pub fn pointer_down(&mut self, hit: Option<(EventId, f32)>, pointer_x: f32) {
        if self.session.is_some() {
            return;
        }
        if let Some((event_id, origin_x)) = hit {
            self.session = Some(DragSession {
                event_id,
                origin_x,
                last_x: pointer_x,
                total_dx: 0.0,
            });
        }
    }

    /// Pointer motion while dragging.
    ///
    /// Vertical movement is ignored; events cannot change row by dragging.
    /// Returns `None` when idle.
    pub fn pointer_move(&mut self, pointer_x: f32) -> Option<DragShift> {
        let session = self.session.as_mut()?;
        let dx = pointer_x - session.last_x;
        session.last_x = pointer_x;
        session.total_dx += dx;
        Some(DragShift {
            id: session.event_id,
            dx,
        })
    }

    /// Pointer-up transition.
    ///
    /// Maps the block's final left edge back to a whole-hour start offset.
    /// A release with no live session is a no-op.
    pub fn pointer_up(&mut self, metrics: &GridMetrics) -> Option<DragCommit> {
        let session = self.session.take()?;
        Some(DragCommit {
            id: session.event_id,
            new_start: metrics.x_to_time(session.origin_x + session.total_dx),
        })
    }

    /// Abandon any in-flight session without committing.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }
}
