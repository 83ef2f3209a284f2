// Event module
// Scheduled event model with production-staff breakdown

use std::collections::BTreeMap;
use std::fmt;

/// Identifier assigned by the event store.
///
/// Unique for the lifetime of the process, handed out monotonically, never
/// reused after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(pub i64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Production staff roles tracked per event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StaffRole {
    ProductionManager,
    AudioTech,
    LightingTech,
    StageCrew,
}

impl StaffRole {
    /// All roles in display order.
    pub const ALL: [StaffRole; 4] = [
        StaffRole::ProductionManager,
        StaffRole::AudioTech,
        StaffRole::LightingTech,
        StaffRole::StageCrew,
    ];

    /// Display label used in forms and in the flattened staff summary.
    pub fn label(&self) -> &'static str {
        match self {
            StaffRole::ProductionManager => "Production Manager",
            StaffRole::AudioTech => "Audio Tech",
            StaffRole::LightingTech => "Lighting Tech",
            StaffRole::StageCrew => "Stage Crew",
        }
    }
}

/// Free-text staff counts keyed by role.
///
/// Counts are not validated as numeric; the form accepts arbitrary strings.
/// Blank entries are treated as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaffBreakdown {
    counts: BTreeMap<StaffRole, String>,
}

impl StaffBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count for a role. A blank count clears the entry.
    pub fn set(&mut self, role: StaffRole, count: impl Into<String>) {
        let count = count.into();
        if count.trim().is_empty() {
            self.counts.remove(&role);
        } else {
            self.counts.insert(role, count);
        }
    }

    pub fn get(&self, role: StaffRole) -> Option<&str> {
        self.counts.get(&role).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Flattened display form, e.g. `"Audio Tech 2, Stage Crew 4"`.
    ///
    /// Non-empty entries only, in fixed role order.
    pub fn summary(&self) -> String {
        StaffRole::ALL
            .iter()
            .filter_map(|role| {
                self.counts
                    .get(role)
                    .map(|count| format!("{} {}", role.label(), count))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A scheduled unit of work.
///
/// Events are week-relative: `start_time` counts hours from Monday 00:00 of
/// whichever week is on display, so navigating between weeks does not move
/// blocks on the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    /// Hours offset from Monday 00:00 of the displayed week. Always >= 0,
    /// unbounded above (events can sit past the visible 7-day grid).
    pub start_time: f64,
    /// Duration in hours, strictly positive.
    pub duration: f64,
    pub staff: StaffBreakdown,
}

impl Event {
    /// Timeline block caption, e.g. `"Load-in (3h)"`.
    pub fn block_label(&self) -> String {
        format!("{} ({}h)", self.name, self.duration)
    }
}

/// Input to [`add`](crate::services::event::EventStore::add).
///
/// The store validates the draft and assigns the id; new events start at
/// Monday 00:00 and are dragged into place on the timeline.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub name: String,
    pub duration: f64,
    pub staff: StaffBreakdown,
}

impl EventDraft {
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        Self {
            name: name.into(),
            duration,
            staff: StaffBreakdown::new(),
        }
    }

    /// Attach a staff count, builder style.
    pub fn with_staff(mut self, role: StaffRole, count: impl Into<String>) -> Self {
        self.staff.set(role, count);
        self
    }
}

/// Partial update applied by [`update`](crate::services::event::EventStore::update).
///
/// Unset fields keep their current value. The merged record is validated
/// before anything is written, so a bad patch leaves the event untouched.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub name: Option<String>,
    pub duration: Option<f64>,
    pub staff: Option<StaffBreakdown>,
    pub start_time: Option<f64>,
}
