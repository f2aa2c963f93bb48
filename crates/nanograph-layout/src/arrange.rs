//! Arrange pass: final rects, top-down.
//!
//! Each node places its children inside its own already-arranged rect
//! according to its layout mode. The root's rect comes from
//! [`RootPlacement`](crate::RootPlacement).

use nanograph_core::{
    DockPosition, LayoutMode, LayoutTree, Node, NodeId, Rect, StackOrientation,
};
use tracing::trace;

use crate::align::{align_horizontal, align_rect, align_vertical};
use crate::options::LayoutOptions;
use crate::traversal::pre_order;

/// Assign `calculated_rect` to every node under `root`, parents first.
///
/// Expects a completed measure pass. No-op for an unknown root.
pub fn arrange(tree: &mut LayoutTree, root: NodeId, options: &LayoutOptions) {
    let Some(node) = tree.get(root) else {
        return;
    };
    let mut root_rect = options.root_placement.resolve(node);
    if options.pixel_snap {
        root_rect = root_rect.round();
    }
    tree.set_calculated_rect(root, root_rect);

    for id in pre_order(tree, root) {
        let placements = match tree.get(id) {
            Some(node) if !node.is_leaf() => place_children(tree, node),
            _ => continue,
        };

        for (child, rect) in placements {
            let rect = if options.pixel_snap { rect.round() } else { rect };
            trace!(
                node = child.0,
                x = rect.x,
                y = rect.y,
                width = rect.width,
                height = rect.height,
                "arranged"
            );
            tree.set_calculated_rect(child, rect);
        }
    }
}

fn place_children(tree: &LayoutTree, parent: &Node) -> Vec<(NodeId, Rect)> {
    match parent.layout_mode {
        LayoutMode::None => place_absolute(tree, parent),
        LayoutMode::Stack => place_stack(tree, parent),
        LayoutMode::Dock => place_dock(tree, parent),
        LayoutMode::Grid => place_grid(tree, parent),
    }
}

/// Rect a parent offers its children.
fn interior(parent: &Node) -> Rect {
    parent.calculated_rect().deflate(parent.padding)
}

fn child_nodes<'a>(
    tree: &'a LayoutTree,
    parent: &'a Node,
) -> impl Iterator<Item = (NodeId, &'a Node)> + 'a {
    parent
        .children()
        .iter()
        .filter_map(move |&id| tree.get(id).map(|node| (id, node)))
}

/// Children keep their own user rect.
fn place_absolute(tree: &LayoutTree, parent: &Node) -> Vec<(NodeId, Rect)> {
    child_nodes(tree, parent)
        .map(|(id, child)| (id, child.user_rect))
        .collect()
}

fn place_stack(tree: &LayoutTree, parent: &Node) -> Vec<(NodeId, Rect)> {
    let area = interior(parent);
    let mut placements = Vec::with_capacity(parent.children().len());

    match parent.stack_orientation {
        StackOrientation::Horizontal => {
            let mut cursor = area.x;
            for (id, child) in child_nodes(tree, parent) {
                let width = child.calculated_size().width;
                let x = cursor + child.margin.left;
                cursor = x + width + child.margin.right;

                let (y, height) = align_vertical(child, area);
                placements.push((id, Rect::new(x, y, width, height)));
            }
        }
        StackOrientation::Vertical => {
            let mut cursor = area.y;
            for (id, child) in child_nodes(tree, parent) {
                let height = child.calculated_size().height;
                let y = cursor + child.margin.top;
                cursor = y + height + child.margin.bottom;

                let (x, width) = align_horizontal(child, area);
                placements.push((id, Rect::new(x, y, width, height)));
            }
        }
    }

    placements
}

/// Peel children off the interior edge by edge; the last child fills what
/// remains regardless of its dock position.
fn place_dock(tree: &LayoutTree, parent: &Node) -> Vec<(NodeId, Rect)> {
    let area = interior(parent);
    let mut left = area.x;
    let mut top = area.y;
    let mut right = area.right();
    let mut bottom = area.bottom();

    let mut placements = Vec::with_capacity(parent.children().len());
    let Some((&filler, docked)) = parent.children().split_last() else {
        return placements;
    };

    for &id in docked {
        let Some(child) = tree.get(id) else {
            continue;
        };
        let size = child.calculated_size();
        let margin = child.margin;
        let remaining = Rect::new(left, top, right - left, bottom - top);

        // Never consume more than is left, so the cursors cannot cross.
        let rect = match child.dock_position {
            DockPosition::Left | DockPosition::Right => {
                let extent = (size.width + margin.horizontal()).min(remaining.width);
                let width = (extent - margin.horizontal()).max(0.0);
                let (y, height) = align_vertical(child, remaining);

                let x = if child.dock_position == DockPosition::Left {
                    let x = left + margin.left;
                    left += extent;
                    x
                } else {
                    right -= extent;
                    right + margin.left
                };
                Rect::new(x, y, width, height)
            }
            DockPosition::Top | DockPosition::Bottom => {
                let extent = (size.height + margin.vertical()).min(remaining.height);
                let height = (extent - margin.vertical()).max(0.0);
                let (x, width) = align_horizontal(child, remaining);

                let y = if child.dock_position == DockPosition::Top {
                    let y = top + margin.top;
                    top += extent;
                    y
                } else {
                    bottom -= extent;
                    bottom + margin.top
                };
                Rect::new(x, y, width, height)
            }
        };
        placements.push((id, rect));
    }

    if let Some(child) = tree.get(filler) {
        let remaining = Rect::new(left, top, right - left, bottom - top);
        placements.push((filler, align_rect(child, remaining)));
    }

    placements
}

/// Equal cells, row-major by child index. A grid without rows or columns
/// yields zero-size cells.
fn place_grid(tree: &LayoutTree, parent: &Node) -> Vec<(NodeId, Rect)> {
    let area = interior(parent);
    let rows = parent.grid.rows;
    let columns = parent.grid.columns;

    let cell_width = if columns == 0 { 0.0 } else { area.width / columns as f32 };
    let cell_height = if rows == 0 { 0.0 } else { area.height / rows as f32 };

    child_nodes(tree, parent)
        .enumerate()
        .map(|(index, (id, _))| {
            let (row, column) = match columns {
                0 => (0, 0),
                _ => (index / columns, index % columns),
            };
            let rect = Rect::new(
                area.x + column as f32 * cell_width,
                area.y + row as f32 * cell_height,
                cell_width,
                cell_height,
            );
            (id, rect)
        })
        .collect()
}
