//! Explicit-stack traversal orders.
//!
//! Both passes walk the tree with heap-allocated scratch stacks instead of
//! recursion, so depth is bounded by memory rather than the call stack. The
//! buffers are local to each call and sized once from the node count.

use nanograph_core::{LayoutTree, NodeId};

/// Nodes of the subtree at `root`, every node after all of its children.
///
/// Descends with one stack, recording each popped node on an ascend list;
/// children are pushed in reverse so they pop left to right. Unwinding the
/// ascend list yields the post-order. Empty for an unknown root.
pub fn post_order(tree: &LayoutTree, root: NodeId) -> Vec<NodeId> {
    if !tree.contains(root) {
        return Vec::new();
    }

    let capacity = tree.len();
    let mut descend = Vec::with_capacity(capacity);
    let mut ascend = Vec::with_capacity(capacity);

    descend.push(root);
    while let Some(id) = descend.pop() {
        ascend.push(id);
        descend.extend(tree.children(id).iter().rev().copied());
    }

    ascend.reverse();
    ascend
}

/// Nodes of the subtree at `root`, every node before its children, siblings
/// in sequence order. Empty for an unknown root.
pub fn pre_order(tree: &LayoutTree, root: NodeId) -> Vec<NodeId> {
    if !tree.contains(root) {
        return Vec::new();
    }

    let capacity = tree.len();
    let mut stack = Vec::with_capacity(capacity);
    let mut order = Vec::with_capacity(capacity);

    stack.push(root);
    while let Some(id) = stack.pop() {
        order.push(id);
        stack.extend(tree.children(id).iter().rev().copied());
    }

    order
}
