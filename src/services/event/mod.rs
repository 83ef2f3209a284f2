//! In-memory event store, the single source of truth for scheduled events.
//!
//! Insertion-ordered; removals close the gap in place so timeline row
//! indices stay dense. Ids are assigned monotonically and never reused.
//! Displays only ever read snapshots from here; they never hold their own
//! mutable copy of event state.

use crate::models::event::{Event, EventDraft, EventId, EventPatch};
use crate::services::error::ScheduleError;

#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
    next_id: i64,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a new event, returning its assigned id.
    ///
    /// New events start at Monday 00:00; the user drags them into place on
    /// the timeline afterwards.
    pub fn add(&mut self, draft: EventDraft) -> Result<EventId, ScheduleError> {
        validate(&draft.name, draft.duration)?;

        let id = EventId(self.next_id);
        self.next_id += 1;
        self.events.push(Event {
            id,
            name: draft.name.trim().to_string(),
            start_time: 0.0,
            duration: draft.duration,
            staff: draft.staff,
        });
        Ok(id)
    }

    /// Apply a partial update.
    ///
    /// The merged record is validated before any field is written, so a bad
    /// patch leaves the event untouched.
    pub fn update(&mut self, id: EventId, patch: EventPatch) -> Result<(), ScheduleError> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(ScheduleError::NotFound { id })?;

        let merged_name = patch.name.as_deref().unwrap_or(&event.name);
        let merged_duration = patch.duration.unwrap_or(event.duration);
        validate(merged_name, merged_duration)?;

        if let Some(name) = patch.name {
            event.name = name.trim().to_string();
        }
        if let Some(duration) = patch.duration {
            event.duration = duration;
        }
        if let Some(staff) = patch.staff {
            event.staff = staff;
        }
        if let Some(start_time) = patch.start_time {
            event.start_time = start_time.max(0.0);
        }
        Ok(())
    }

    /// Drag-commit path: overwrite the start offset, clamped at week start.
    pub fn set_start_time(&mut self, id: EventId, hours: f64) -> Result<(), ScheduleError> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(ScheduleError::NotFound { id })?;
        event.start_time = hours.max(0.0);
        Ok(())
    }

    /// Remove and return an event.
    ///
    /// A stale or already-removed id is an error for the caller to surface,
    /// never a crash.
    pub fn remove(&mut self, id: EventId) -> Result<Event, ScheduleError> {
        let position = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or(ScheduleError::NotFound { id })?;
        Ok(self.events.remove(position))
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// All events in insertion order. Row index on the timeline is position
    /// in this slice, dense after removals.
    pub fn list(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

fn validate(name: &str, duration: f64) -> Result<(), ScheduleError> {
    if name.trim().is_empty() {
        return Err(ScheduleError::EmptyName);
    }
    if !duration.is_finite() || duration <= 0.0 {
        return Err(ScheduleError::NonPositiveDuration { value: duration });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::StaffRole;

    fn sample_draft() -> EventDraft {
        EventDraft::new("Load-in", 3.0).with_staff(StaffRole::StageCrew, "4")
    }

    #[test]
    fn test_add_assigns_id_and_defaults() {
        let mut store = EventStore::new();
        let id = store.add(sample_draft()).unwrap();

        let event = store.get(id).unwrap();
        assert_eq!(event.name, "Load-in");
        assert_eq!(event.start_time, 0.0);
        assert_eq!(event.duration, 3.0);
        assert_eq!(event.staff.get(StaffRole::StageCrew), Some("4"));
    }

    #[test]
    fn test_add_assigns_increasing_ids() {
        let mut store = EventStore::new();
        let a = store.add(sample_draft()).unwrap();
        let b = store.add(sample_draft()).unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_add_trims_name() {
        let mut store = EventStore::new();
        let id = store.add(EventDraft::new("  Soundcheck  ", 1.0)).unwrap();
        assert_eq!(store.get(id).unwrap().name, "Soundcheck");
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut store = EventStore::new();
        assert_eq!(
            store.add(EventDraft::new("   ", 2.0)),
            Err(ScheduleError::EmptyName)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_rejects_zero_duration() {
        let mut store = EventStore::new();
        assert_eq!(
            store.add(EventDraft::new("Load-in", 0.0)),
            Err(ScheduleError::NonPositiveDuration { value: 0.0 })
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_rejects_negative_duration() {
        let mut store = EventStore::new();
        assert!(store.add(EventDraft::new("Load-in", -1.5)).is_err());
    }

    #[test]
    fn test_add_rejects_nan_duration() {
        let mut store = EventStore::new();
        assert!(store.add(EventDraft::new("Load-in", f64::NAN)).is_err());
    }

    #[test]
    fn test_update_merges_fields() {
        let mut store = EventStore::new();
        let id = store.add(sample_draft()).unwrap();

        store
            .update(
                id,
                EventPatch {
                    duration: Some(4.5),
                    ..Default::default()
                },
            )
            .unwrap();

        let event = store.get(id).unwrap();
        assert_eq!(event.name, "Load-in");
        assert_eq!(event.duration, 4.5);
    }

    #[test]
    fn test_update_nonexistent_id() {
        let mut store = EventStore::new();
        let missing = EventId(99);
        assert_eq!(
            store.update(missing, EventPatch::default()),
            Err(ScheduleError::NotFound { id: missing })
        );
    }

    #[test]
    fn test_update_invalid_patch_leaves_event_untouched() {
        let mut store = EventStore::new();
        let id = store.add(sample_draft()).unwrap();
        let before = store.get(id).unwrap().clone();

        let result = store.update(
            id,
            EventPatch {
                name: Some("Renamed".to_string()),
                duration: Some(0.0),
                ..Default::default()
            },
        );

        assert_eq!(
            result,
            Err(ScheduleError::NonPositiveDuration { value: 0.0 })
        );
        assert_eq!(store.get(id), Some(&before));
    }

    #[test]
    fn test_update_clamps_negative_start_time() {
        let mut store = EventStore::new();
        let id = store.add(sample_draft()).unwrap();

        store
            .update(
                id,
                EventPatch {
                    start_time: Some(-5.0),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(store.get(id).unwrap().start_time, 0.0);
    }

    #[test]
    fn test_set_start_time() {
        let mut store = EventStore::new();
        let id = store.add(sample_draft()).unwrap();

        store.set_start_time(id, 26.0).unwrap();
        assert_eq!(store.get(id).unwrap().start_time, 26.0);
    }

    #[test]
    fn test_set_start_time_clamps_at_zero() {
        let mut store = EventStore::new();
        let id = store.add(sample_draft()).unwrap();

        store.set_start_time(id, -3.0).unwrap();
        assert_eq!(store.get(id).unwrap().start_time, 0.0);
    }

    #[test]
    fn test_remove_keeps_order_dense() {
        let mut store = EventStore::new();
        let first = store.add(EventDraft::new("Load-in", 3.0)).unwrap();
        let second = store.add(EventDraft::new("Soundcheck", 1.0)).unwrap();
        let third = store.add(EventDraft::new("Doors", 0.5)).unwrap();

        store.remove(first).unwrap();

        let remaining: Vec<EventId> = store.list().iter().map(|e| e.id).collect();
        assert_eq!(remaining, vec![second, third]);
    }

    #[test]
    fn test_remove_returns_event() {
        let mut store = EventStore::new();
        let id = store.add(sample_draft()).unwrap();

        let removed = store.remove(id).unwrap();
        assert_eq!(removed.name, "Load-in");
        assert!(store.get(id).is_none());
    }

    #[test]
    fn test_remove_stale_id_errors() {
        let mut store = EventStore::new();
        let id = store.add(sample_draft()).unwrap();
        store.remove(id).unwrap();

        assert_eq!(store.remove(id), Err(ScheduleError::NotFound { id }));
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut store = EventStore::new();
        let first = store.add(sample_draft()).unwrap();
        store.remove(first).unwrap();

        let second = store.add(sample_draft()).unwrap();
        assert_ne!(first, second);
    }
}
