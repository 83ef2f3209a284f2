// Week anchor module
// Tracks which 7-day window the timeline is displaying

use chrono::{Duration, NaiveDate};

use crate::utils::date::{week_range_label, week_start_of};

/// A date identifying the currently displayed week.
///
/// Any day within the week is a valid anchor; layout only ever uses the
/// Monday of that week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekAnchor {
    anchor: NaiveDate,
}

impl WeekAnchor {
    pub fn new(anchor: NaiveDate) -> Self {
        Self { anchor }
    }

    /// Anchor on today's local date.
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    /// Move to the following week.
    pub fn advance(&mut self) {
        self.anchor += Duration::days(7);
    }

    /// Move to the preceding week.
    pub fn retreat(&mut self) {
        self.anchor -= Duration::days(7);
    }

    /// Monday on or before the anchor.
    pub fn week_start(&self) -> NaiveDate {
        week_start_of(self.anchor)
    }

    /// Sunday at the end of the displayed week.
    pub fn week_end(&self) -> NaiveDate {
        self.week_start() + Duration::days(6)
    }

    /// Header text for the navigation bar.
    pub fn range_label(&self) -> String {
        week_range_label(self.week_start())
    }
}
