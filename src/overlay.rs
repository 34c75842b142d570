//!
//! Placement arithmetic for the picker panel.
//!
//! Pure functions, the widget stores the computed area when the
//! panel opens and keeps it until the panel closes.
//!

use ratatui::layout::Rect;
use std::cmp::max;

/// Panel area below an anchor.
///
/// Left-aligned with the anchor, separated by a fixed gap. The
/// anchor width is a minimum hint, the panel may be wider.
pub fn panel_area(anchor: Rect, gap: u16, min_width: u16, height: u16) -> Rect {
    Rect::new(
        anchor.x,
        anchor.bottom().saturating_add(gap),
        max(anchor.width, min_width),
        height,
    )
}

/// Keep the area inside the boundary.
///
/// Shifts the area back into the boundary first, then shrinks it
/// if it still doesn't fit.
pub fn keep_in_boundary(mut area: Rect, boundary: Rect) -> Rect {
    if area.left() < boundary.left() {
        area.x = boundary.left();
    }
    if area.right() >= boundary.right() {
        let corr = area.right().saturating_sub(boundary.right());
        area.x = max(boundary.left(), area.x.saturating_sub(corr));
    }
    if area.top() < boundary.top() {
        area.y = boundary.top();
    }
    if area.bottom() >= boundary.bottom() {
        let corr = area.bottom().saturating_sub(boundary.bottom());
        area.y = max(boundary.top(), area.y.saturating_sub(corr));
    }

    if area.right() > boundary.right() {
        let corr = area.right() - boundary.right();
        area.width = area.width.saturating_sub(corr);
    }
    if area.bottom() > boundary.bottom() {
        let corr = area.bottom() - boundary.bottom();
        area.height = area.height.saturating_sub(corr);
    }

    area
}
