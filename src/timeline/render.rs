//! Timeline renderer: one complete draw list per invocation.
//!
//! Re-rendering with the same week and events yields an identical list; the
//! caller replaces the previous frame wholesale instead of diffing. Row
//! index is position in the supplied event order, so deleting an earlier
//! event re-indexes the rows below it.

use chrono::{Duration, NaiveDate};

use super::draw::{point, DrawList, DrawStyle, Rect};
use super::grid::{GridMetrics, DAYS_PER_WEEK, HOURS_PER_DAY};
use crate::models::event::Event;

/// Vertical inset of an event block inside its row.
const BLOCK_INSET: f32 = 5.0;
/// Hour labels sit this far above the header's bottom edge.
const HOUR_LABEL_RISE: f32 = 10.0;

pub fn render_week(week_start: NaiveDate, events: &[Event], metrics: &GridMetrics) -> DrawList {
    let mut list = DrawList::new(
        metrics.content_width(),
        metrics.content_height(events.len()),
    );

    draw_time_grid(&mut list, week_start, metrics);
    for (index, event) in events.iter().enumerate() {
        draw_event_block(&mut list, event, index, metrics);
    }
    list
}

fn draw_time_grid(list: &mut DrawList, week_start: NaiveDate, metrics: &GridMetrics) {
    let height = list.content_height;
    let day_width = HOURS_PER_DAY as f32 * metrics.hour_width;

    for day in 0..DAYS_PER_WEEK {
        let date = week_start + Duration::days(day as i64);
        let x = metrics.time_to_x(day, 0.0);

        list.push_text(
            DrawStyle::DayHeader,
            point(x + day_width / 2.0, metrics.header_height / 2.0),
            date.format("%A\n%m/%d").to_string(),
            None,
        );
        list.push_line(
            DrawStyle::DaySeparator,
            point(x, 0.0),
            point(x, height),
            None,
        );

        for hour in 0..=HOURS_PER_DAY {
            let hx = metrics.time_to_x(day, hour as f64);
            list.push_line(
                DrawStyle::HourLine,
                point(hx, metrics.header_height),
                point(hx, height),
                None,
            );
            if hour < HOURS_PER_DAY {
                list.push_text(
                    DrawStyle::HourLabel,
                    point(
                        hx + metrics.hour_width / 2.0,
                        metrics.header_height - HOUR_LABEL_RISE,
                    ),
                    format!("{:02}:00", hour),
                    None,
                );
            }
        }
    }
}

fn draw_event_block(list: &mut DrawList, event: &Event, index: usize, metrics: &GridMetrics) {
    // Off-grid events (start_time past hour 168) draw beyond the fixed
    // scroll width; no clipping.
    let rect = Rect::new(
        event.start_time as f32 * metrics.hour_width,
        metrics.row_y(index) + BLOCK_INSET,
        event.duration as f32 * metrics.hour_width,
        metrics.row_height - 2.0 * BLOCK_INSET,
    );

    list.push_rect(DrawStyle::EventBlock, rect, Some(event.id));
    list.push_text(
        DrawStyle::EventLabel,
        rect.center(),
        event.block_label(),
        Some(event.id),
    );
}
