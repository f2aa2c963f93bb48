//! Measure pass: desired sizes, bottom-up.

use nanograph_core::{LayoutMode, LayoutTree, Node, NodeId, Size, StackOrientation};
use tracing::trace;

use crate::traversal::post_order;

/// Compute `calculated_size` for every node under `root`, children first.
///
/// No-op for an unknown root.
pub fn measure(tree: &mut LayoutTree, root: NodeId) {
    for id in post_order(tree, root) {
        let size = match tree.get(id) {
            Some(node) => desired_size(tree, node),
            None => continue,
        };
        trace!(node = id.0, width = size.width, height = size.height, "measured");
        tree.set_calculated_size(id, size);
    }
}

/// Size a child asks of its parent, margin included.
fn outer_size(child: &Node) -> Size {
    child.calculated_size().inflate(child.margin)
}

/// Desired size of `node` from its own properties and its children's
/// already-measured sizes.
fn desired_size(tree: &LayoutTree, node: &Node) -> Size {
    let children = node.children().iter().filter_map(|&id| tree.get(id));

    match node.layout_mode {
        LayoutMode::None => node.user_rect.size(),
        // Cross axis comes from the user rect, not from the children.
        LayoutMode::Stack => match node.stack_orientation {
            StackOrientation::Horizontal => Size::new(
                children.map(|c| outer_size(c).width).sum::<f32>() + node.padding.horizontal(),
                node.user_rect.height,
            ),
            StackOrientation::Vertical => Size::new(
                node.user_rect.width,
                children.map(|c| outer_size(c).height).sum::<f32>() + node.padding.vertical(),
            ),
        },
        LayoutMode::Dock => {
            let mut docked_width = 0.0_f32;
            let mut docked_height = 0.0_f32;
            let mut max_width = 0.0_f32;
            let mut max_height = 0.0_f32;

            for child in children {
                let size = outer_size(child);
                if child.dock_position.is_horizontal() {
                    docked_width += size.width;
                    max_height = max_height.max(size.height);
                } else {
                    docked_height += size.height;
                    max_width = max_width.max(size.width);
                }
            }

            Size::new(docked_width + max_width, docked_height + max_height).inflate(node.padding)
        }
        // TODO: derive intrinsic size from the row/column size specs once
        // pixel tracks are applied by arrange.
        LayoutMode::Grid => Size::ZERO,
    }
}
