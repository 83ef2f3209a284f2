//! Application context: owns all mutable scheduling state and is the single
//! write path for it.
//!
//! Every mutation flows through here so the store, the table mirror, and
//! the timeline can never diverge for longer than one user action. The UI
//! holds one of these instead of scattering state across windows.

use chrono::NaiveDate;

use crate::models::event::{Event, EventDraft, EventId, EventPatch, StaffBreakdown};
use crate::models::week::WeekAnchor;
use crate::services::error::ScheduleError;
use crate::services::event::EventStore;
use crate::services::input::InputPort;
use crate::services::sync::{EventRow, ListMirror, TableMirror};
use crate::timeline::drag::{DragController, DragShift};
use crate::timeline::draw::DrawList;
use crate::timeline::grid::GridMetrics;
use crate::timeline::render::render_week;

pub struct ScheduleContext {
    store: EventStore,
    week: WeekAnchor,
    drag: DragController,
    mirror: TableMirror,
}

impl ScheduleContext {
    pub fn new(anchor: NaiveDate) -> Self {
        Self {
            store: EventStore::new(),
            week: WeekAnchor::new(anchor),
            drag: DragController::new(),
            mirror: TableMirror::new(),
        }
    }

    pub fn today() -> Self {
        Self {
            store: EventStore::new(),
            week: WeekAnchor::today(),
            drag: DragController::new(),
            mirror: TableMirror::new(),
        }
    }

    pub fn events(&self) -> &[Event] {
        self.store.list()
    }

    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.store.get(id)
    }

    /// Rows of the tabular display, mirrored from the store.
    pub fn rows(&self) -> &[EventRow] {
        self.mirror.rows()
    }

    pub fn week(&self) -> &WeekAnchor {
        &self.week
    }

    /// Create an event and push its row into the mirror.
    pub fn add_event(&mut self, draft: EventDraft) -> Result<EventId, ScheduleError> {
        let id = self.store.add(draft)?;
        if let Some(event) = self.store.get(id) {
            self.mirror.row_added(EventRow::project(event));
        }
        log::info!("added event {id}");
        Ok(id)
    }

    /// Patch an event and refresh its row. On error nothing changes in
    /// either display.
    pub fn edit_event(&mut self, id: EventId, patch: EventPatch) -> Result<(), ScheduleError> {
        self.store.update(id, patch)?;
        if let Some(event) = self.store.get(id) {
            self.mirror.row_updated(EventRow::project(event));
        }
        log::info!("updated event {id}");
        Ok(())
    }

    /// Remove an event from the store and its row from the mirror.
    pub fn remove_event(&mut self, id: EventId) -> Result<(), ScheduleError> {
        let removed = self.store.remove(id)?;
        self.mirror.row_removed(id);
        log::info!("removed event {id} ({})", removed.name);
        Ok(())
    }

    /// Add flow driven by the dialog collaborator: name, then duration.
    ///
    /// Staff counts come from the form's entry fields rather than dialogs.
    /// Cancelling either prompt aborts with zero mutation.
    pub fn add_event_via(
        &mut self,
        input: &mut dyn InputPort,
        staff: StaffBreakdown,
    ) -> Result<EventId, ScheduleError> {
        let name = input
            .ask_string("Event Name", "Enter the event name:", None)
            .or_cancelled()?;
        let duration = input
            .ask_float("Add Event", "Enter the event duration (in hours):", None)
            .or_cancelled()?;

        let mut draft = EventDraft::new(name, duration);
        draft.staff = staff;
        self.add_event(draft)
    }

    /// Edit flow driven by the dialog collaborator.
    ///
    /// Both prompts must come back with values before anything is applied:
    /// a valid name followed by a cancelled duration changes nothing.
    pub fn edit_event_via(
        &mut self,
        id: EventId,
        input: &mut dyn InputPort,
    ) -> Result<(), ScheduleError> {
        let current = self.store.get(id).ok_or(ScheduleError::NotFound { id })?;
        let name = input
            .ask_string(
                "Edit Event",
                "Enter the new event name:",
                Some(&current.name),
            )
            .or_cancelled()?;
        let duration = input
            .ask_float(
                "Edit Event",
                "Enter the new event duration (in hours):",
                Some(current.duration),
            )
            .or_cancelled()?;

        self.edit_event(
            id,
            EventPatch {
                name: Some(name),
                duration: Some(duration),
                ..Default::default()
            },
        )
    }

    /// Delete flow with confirmation. Declining leaves everything as is.
    pub fn remove_event_via(
        &mut self,
        id: EventId,
        input: &mut dyn InputPort,
    ) -> Result<(), ScheduleError> {
        let name = self
            .store
            .get(id)
            .ok_or(ScheduleError::NotFound { id })?
            .name
            .clone();
        let prompt = format!("Are you sure you want to delete '{name}'?");
        if !input.confirm("Delete Event", &prompt) {
            return Err(ScheduleError::Cancelled);
        }
        self.remove_event(id)
    }

    pub fn next_week(&mut self) {
        self.week.advance();
    }

    pub fn prev_week(&mut self) {
        self.week.retreat();
    }

    /// Full draw list for the displayed week, replacing any previous frame.
    pub fn render_timeline(&self, metrics: &GridMetrics) -> DrawList {
        render_week(self.week.week_start(), self.store.list(), metrics)
    }

    pub fn begin_drag(&mut self, hit: Option<(EventId, f32)>, pointer_x: f32) {
        self.drag.pointer_down(hit, pointer_x);
    }

    pub fn drag_to(&mut self, pointer_x: f32) -> Option<DragShift> {
        self.drag.pointer_move(pointer_x)
    }

    /// Accumulated visual offset of the in-flight drag, if any.
    pub fn drag_offset(&self) -> Option<(EventId, f32)> {
        self.drag.session().map(|s| (s.event_id, s.total_dx))
    }

    /// Commit an in-flight drag.
    ///
    /// The new start is recomputed from the final block position through
    /// the grid mapper, so repeated drags cannot accumulate drift. Returns
    /// the rescheduled event's id, or `None` when no drag was live.
    pub fn finish_drag(
        &mut self,
        metrics: &GridMetrics,
    ) -> Result<Option<EventId>, ScheduleError> {
        match self.drag.pointer_up(metrics) {
            Some(commit) => {
                self.store.set_start_time(commit.id, commit.new_start)?;
                log::info!("rescheduled event {} to hour {}", commit.id, commit.new_start);
                Ok(Some(commit.id))
            }
            None => Ok(None),
        }
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }
}
