//! Time-grid coordinate mapping.
//!
//! Pure conversions between (day, hour) calendar coordinates and the pixel
//! space of the timeline canvas for one displayed week. Day 0 is Monday.

pub const HOURS_PER_DAY: u32 = 24;
pub const DAYS_PER_WEEK: u32 = 7;

/// The canvas never shrinks below this height, even with no events.
const MIN_CONTENT_HEIGHT: f32 = 500.0;

/// Pixel geometry of the timeline grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    /// Pixels per hour column.
    pub hour_width: f32,
    /// Pixels per event row.
    pub row_height: f32,
    /// Pixels reserved at the top for day and hour labels.
    pub header_height: f32,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            hour_width: 50.0,
            row_height: 40.0,
            header_height: 50.0,
        }
    }
}

impl GridMetrics {
    /// X coordinate of `(day, hour)`.
    pub fn time_to_x(&self, day: u32, hour: f64) -> f32 {
        (day as f64 * HOURS_PER_DAY as f64 + hour) as f32 * self.hour_width
    }

    /// Whole-hour offset from week start for a pixel position.
    ///
    /// Never negative: dragging left past the grid origin snaps to hour 0.
    pub fn x_to_time(&self, x: f32) -> f64 {
        ((x / self.hour_width).floor() as f64).max(0.0)
    }

    /// Top edge of the event row at `index`.
    pub fn row_y(&self, index: usize) -> f32 {
        self.header_height + index as f32 * self.row_height
    }

    /// Scroll width of one 7-day week.
    ///
    /// Fixed: events scheduled past hour 168 draw off-canvas while the
    /// scroll region stays at the 7-day width. Known limitation carried
    /// over deliberately rather than silently widened.
    pub fn content_width(&self) -> f32 {
        (DAYS_PER_WEEK * HOURS_PER_DAY) as f32 * self.hour_width
    }

    /// Drawable height, grown to fit the event rows.
    pub fn content_height(&self, event_count: usize) -> f32 {
        MIN_CONTENT_HEIGHT.max(event_count as f32 * self.row_height + self.header_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 0.0, 0.0; "monday midnight is the origin")]
    #[test_case(0, 1.0, 50.0; "one hour in")]
    #[test_case(1, 0.0, 1200.0; "tuesday midnight")]
    #[test_case(6, 24.0, 8400.0; "end of the week")]
    fn test_time_to_x(day: u32, hour: f64, expected: f32) {
        assert_eq!(GridMetrics::default().time_to_x(day, hour), expected);
    }

    #[test_case(0.0, 0.0; "origin")]
    #[test_case(49.9, 0.0; "floors within the hour column")]
    #[test_case(50.0, 1.0; "column boundary")]
    #[test_case(-120.0, 0.0; "clamps negative to hour zero")]
    #[test_case(8400.0, 168.0; "end of grid")]
    #[test_case(9000.0, 180.0; "past the visible grid is allowed")]
    fn test_x_to_time(x: f32, expected: f64) {
        assert_eq!(GridMetrics::default().x_to_time(x), expected);
    }

    #[test]
    fn test_row_y() {
        let metrics = GridMetrics::default();
        assert_eq!(metrics.row_y(0), 50.0);
        assert_eq!(metrics.row_y(3), 170.0);
    }

    #[test]
    fn test_content_width_is_fixed() {
        assert_eq!(GridMetrics::default().content_width(), 8400.0);
    }

    #[test]
    fn test_content_height_has_floor() {
        let metrics = GridMetrics::default();
        assert_eq!(metrics.content_height(0), 500.0);
        assert_eq!(metrics.content_height(3), 500.0);
    }

    #[test]
    fn test_content_height_grows_with_events() {
        // 20 rows * 40px + 50px header
        assert_eq!(GridMetrics::default().content_height(20), 850.0);
    }
}
