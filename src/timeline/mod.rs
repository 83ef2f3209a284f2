//! Weekly Gantt timeline: coordinate mapping, draw-list rendering, and the
//! drag-to-reschedule state machine.

pub mod drag;
pub mod draw;
pub mod grid;
pub mod render;
