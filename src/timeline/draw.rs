//! Draw-list output of the timeline renderer.
//!
//! The renderer describes one complete frame as an ordered list of shapes;
//! the front-end paints it and uses the event-id tags for hit-testing.
//! Geometry types are crate-local so the whole pipeline stays testable
//! without a widget toolkit.

use crate::models::event::EventId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

pub fn point(x: f32, y: f32) -> Point {
    Point { x, y }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: point(x, y),
            width,
            height,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x
            && p.x <= self.min.x + self.width
            && p.y >= self.min.y
            && p.y <= self.min.y + self.height
    }

    pub fn center(&self) -> Point {
        point(self.min.x + self.width / 2.0, self.min.y + self.height / 2.0)
    }
}

/// What a drawable is for, so the painter can style it without guessing
/// from geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawStyle {
    DayHeader,
    DaySeparator,
    HourLine,
    HourLabel,
    EventBlock,
    EventLabel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawShape {
    Rect { rect: Rect },
    Line { from: Point, to: Point },
    /// Text centered on `pos`.
    Text { pos: Point, text: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    pub shape: DrawShape,
    pub style: DrawStyle,
    /// Event tag for hit-testing and drag translation; set on event blocks
    /// and their labels only.
    pub tag: Option<EventId>,
}

/// One complete frame of timeline output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    items: Vec<Drawable>,
    pub content_width: f32,
    pub content_height: f32,
}

impl DrawList {
    pub fn new(content_width: f32, content_height: f32) -> Self {
        Self {
            items: Vec::new(),
            content_width,
            content_height,
        }
    }

    pub fn push_rect(&mut self, style: DrawStyle, rect: Rect, tag: Option<EventId>) {
        self.items.push(Drawable {
            shape: DrawShape::Rect { rect },
            style,
            tag,
        });
    }

    pub fn push_line(&mut self, style: DrawStyle, from: Point, to: Point, tag: Option<EventId>) {
        self.items.push(Drawable {
            shape: DrawShape::Line { from, to },
            style,
            tag,
        });
    }

    pub fn push_text(&mut self, style: DrawStyle, pos: Point, text: String, tag: Option<EventId>) {
        self.items.push(Drawable {
            shape: DrawShape::Text { pos, text },
            style,
            tag,
        });
    }

    pub fn items(&self) -> &[Drawable] {
        &self.items
    }

    /// Topmost event block containing `p`, with the block's left edge.
    ///
    /// Feeds the drag controller on pointer-down; later items paint on top,
    /// so the search runs back to front.
    pub fn hit_test(&self, p: Point) -> Option<(EventId, f32)> {
        self.items.iter().rev().find_map(|d| match (&d.shape, d.tag) {
            (DrawShape::Rect { rect }, Some(id)) if rect.contains(p) => Some((id, rect.min.x)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 30.0);
        assert!(rect.contains(point(10.0, 20.0)));
        assert!(rect.contains(point(110.0, 50.0)));
        assert!(!rect.contains(point(9.9, 25.0)));
        assert!(!rect.contains(point(50.0, 50.1)));
    }

    #[test]
    fn test_rect_center() {
        let rect = Rect::new(0.0, 0.0, 100.0, 30.0);
        assert_eq!(rect.center(), point(50.0, 15.0));
    }

    #[test]
    fn test_hit_test_finds_tagged_block() {
        let mut list = DrawList::new(100.0, 100.0);
        list.push_rect(
            DrawStyle::EventBlock,
            Rect::new(0.0, 55.0, 150.0, 30.0),
            Some(EventId(3)),
        );

        assert_eq!(list.hit_test(point(75.0, 60.0)), Some((EventId(3), 0.0)));
        assert_eq!(list.hit_test(point(75.0, 10.0)), None);
    }

    #[test]
    fn test_hit_test_ignores_untagged_shapes() {
        let mut list = DrawList::new(100.0, 100.0);
        list.push_rect(DrawStyle::EventBlock, Rect::new(0.0, 0.0, 100.0, 100.0), None);
        assert_eq!(list.hit_test(point(50.0, 50.0)), None);
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let mut list = DrawList::new(100.0, 100.0);
        list.push_rect(
            DrawStyle::EventBlock,
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Some(EventId(1)),
        );
        list.push_rect(
            DrawStyle::EventBlock,
            Rect::new(40.0, 40.0, 100.0, 100.0),
            Some(EventId(2)),
        );

        assert_eq!(list.hit_test(point(50.0, 50.0)), Some((EventId(2), 40.0)));
    }
}
