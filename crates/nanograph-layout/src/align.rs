//! Alignment of a child within the space its parent offers.

use nanograph_core::{Alignment, Node, Rect};

/// Place an extent of `desired` length within `[start, start + available]`.
///
/// Returns `(position, length)`. Only `Stretch` takes the available length;
/// the others keep the desired length even if it overflows.
pub(crate) fn align(alignment: Alignment, start: f32, available: f32, desired: f32) -> (f32, f32) {
    match alignment {
        Alignment::Stretch => (start, available),
        Alignment::Start => (start, desired),
        Alignment::Center => (start + (available - desired) / 2.0, desired),
        Alignment::End => (start + available - desired, desired),
    }
}

/// Horizontal band of `area` left for `child` after its margin, aligned.
pub(crate) fn align_horizontal(child: &Node, area: Rect) -> (f32, f32) {
    let margin = child.margin;
    align(
        child.horizontal_alignment.into(),
        area.x + margin.left,
        (area.width - margin.horizontal()).max(0.0),
        child.calculated_size().width,
    )
}

/// Vertical band of `area` left for `child` after its margin, aligned.
pub(crate) fn align_vertical(child: &Node, area: Rect) -> (f32, f32) {
    let margin = child.margin;
    align(
        child.vertical_alignment.into(),
        area.y + margin.top,
        (area.height - margin.vertical()).max(0.0),
        child.calculated_size().height,
    )
}

/// Place `child` inside `area` on both axes.
pub(crate) fn align_rect(child: &Node, area: Rect) -> Rect {
    let (x, width) = align_horizontal(child, area);
    let (y, height) = align_vertical(child, area);
    Rect::new(x, y, width, height)
}
