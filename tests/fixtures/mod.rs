// Test fixtures - reusable test data
// Provides consistent drafts and dates across test files

use chrono::NaiveDate;
use crew_scheduler::models::event::{EventDraft, StaffRole};

/// Monday, March 2, 2026 - the week most scenarios display.
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

/// A 3-hour load-in with a stage crew of four.
pub fn load_in() -> EventDraft {
    EventDraft::new("Load-in", 3.0).with_staff(StaffRole::StageCrew, "4")
}

/// A 1.5-hour soundcheck with audio staffing.
pub fn soundcheck() -> EventDraft {
    EventDraft::new("Soundcheck", 1.5)
        .with_staff(StaffRole::AudioTech, "3")
        .with_staff(StaffRole::ProductionManager, "1")
}

/// A half-hour doors call with no staffing recorded.
pub fn doors() -> EventDraft {
    EventDraft::new("Doors", 0.5)
}
