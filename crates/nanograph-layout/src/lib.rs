//! Measure/arrange layout computation for NanoGraph trees.
//!
//! # Architecture
//!
//! 1. **Measure**: bottom-up, each node's desired size from its children
//! 2. **Arrange**: top-down, each child's rect from its parent's rect, layout
//!    mode and the child's alignment/dock hints
//!
//! Both passes use explicit stacks, so arbitrarily deep trees are safe.
//!
//! # Example
//!
//! ```
//! use nanograph_core::{LayoutTree, Rect, StackOrientation};
//! use nanograph_layout::recalculate;
//!
//! let mut tree = LayoutTree::new();
//! let root = tree.create_root();
//! tree.get_mut(root)
//!     .unwrap()
//!     .with_stack(StackOrientation::Horizontal)
//!     .with_user_rect(Rect::new(0.0, 0.0, 0.0, 5.0));
//!
//! let a = tree.insert_child(root).unwrap();
//! tree.get_mut(a).unwrap().with_user_rect(Rect::new(0.0, 0.0, 10.0, 5.0));
//!
//! tree.seed_rect(root, Rect::new(0.0, 0.0, 30.0, 5.0));
//! recalculate(&mut tree, root);
//!
//! assert_eq!(tree.get(a).unwrap().calculated_rect(), Rect::new(0.0, 0.0, 10.0, 5.0));
//! ```

mod align;
mod arrange;
mod measure;
mod options;
mod traversal;

pub use arrange::arrange;
pub use measure::measure;
pub use options::{LayoutOptions, RootPlacement};
pub use traversal::{post_order, pre_order};

use nanograph_core::{LayoutTree, NodeId};
use tracing::debug_span;

/// Run a full measure and arrange over the subtree at `root` with default
/// options. No-op for an unknown root.
pub fn recalculate(tree: &mut LayoutTree, root: NodeId) {
    recalculate_with(tree, root, &LayoutOptions::default());
}

/// Run a full measure and arrange over the subtree at `root`.
///
/// Runs to completion. The tree must not be mutated concurrently; `&mut`
/// access enforces this.
pub fn recalculate_with(tree: &mut LayoutTree, root: NodeId, options: &LayoutOptions) {
    if !tree.contains(root) {
        return;
    }

    let span = debug_span!("recalculate", root = root.0, nodes = tree.len());
    let _enter = span.enter();

    measure(tree, root);
    arrange(tree, root, options);
}
