//! Error types for the NanoGraph engine.
//!
//! The layout contract itself is infallible: invalid handles yield `None` or
//! a no-op. These errors back the strict variants and option loading.

use thiserror::Error;

use crate::tree::NodeId;

/// Top-level error type for the NanoGraph engine.
#[derive(Debug, Error)]
pub enum NanoGraphError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors from tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Node {id:?} does not exist in this tree (tree has {len} nodes)")]
    InvalidNode { id: NodeId, len: usize },
}

/// Errors while loading layout options.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse layout options: {reason}")]
    Parse { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::LayoutTree;

    fn grow(tree: &mut LayoutTree, parent: NodeId) -> Result<NodeId, NanoGraphError> {
        let child = tree.try_insert_child(parent)?;
        Ok(tree.try_insert_child(child)?)
    }

    #[test]
    fn test_tree_error_converts() {
        let mut tree = LayoutTree::new();
        let root = tree.create_root();
        assert!(grow(&mut tree, root).is_ok());

        let err = grow(&mut tree, NodeId(10)).unwrap_err();
        assert!(matches!(err, NanoGraphError::Tree(TreeError::InvalidNode { .. })));
        assert_eq!(
            err.to_string(),
            "Node NodeId(10) does not exist in this tree (tree has 3 nodes)"
        );
    }
}
