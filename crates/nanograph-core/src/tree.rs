//! Arena-backed node tree.
//!
//! Nodes are addressed by stable [`NodeId`] indices. A node owns the ordered
//! list of its children; the parent link is a plain index used for traversal
//! only. Nodes are never removed, so an id stays valid for the life of the
//! tree that issued it.

use smallvec::SmallVec;
use tracing::debug;

use crate::errors::TreeError;
use crate::geometry::{Color, Rect, Size, Thickness};
use crate::style::{
    DockPosition, GridPosition, GridProperties, HorizontalAlignment, LayoutMode,
    StackOrientation, VerticalAlignment,
};

/// Handle to a node in a [`LayoutTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Ordered child list. Most UI nodes have only a handful of children.
pub type Children = SmallVec<[NodeId; 4]>;

/// A node in the layout tree.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// How this node places its children
    pub layout_mode: LayoutMode,
    /// Main axis when `layout_mode` is `Stack`
    pub stack_orientation: StackOrientation,
    /// Grid definition when `layout_mode` is `Grid`
    pub grid: GridProperties,
    /// Edge to attach to when the parent is in `Dock` mode
    pub dock_position: DockPosition,
    /// Cell hint when the parent is in `Grid` mode
    pub grid_position: GridPosition,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    /// Caller-specified rect. Authoritative for `None`-mode sizing and placement.
    pub user_rect: Rect,
    pub margin: Thickness,
    pub padding: Thickness,
    /// Paint attribute, passed through untouched
    pub color: Color,

    seed: Option<Rect>,
    calculated_size: Size,
    calculated_rect: Rect,
    parent: Option<NodeId>,
    children: Children,
}

impl Node {
    /// Desired size from the last measure pass.
    pub fn calculated_size(&self) -> Size {
        self.calculated_size
    }

    /// Final rect from the last arrange pass.
    pub fn calculated_rect(&self) -> Rect {
        self.calculated_rect
    }

    /// Rect given through [`LayoutTree::seed_rect`], if any.
    pub fn seed(&self) -> Option<Rect> {
        self.seed
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Set the layout mode.
    pub fn with_layout(&mut self, mode: LayoutMode) -> &mut Self {
        self.layout_mode = mode;
        self
    }

    /// Switch to a stack layout along the given axis.
    pub fn with_stack(&mut self, orientation: StackOrientation) -> &mut Self {
        self.layout_mode = LayoutMode::Stack;
        self.stack_orientation = orientation;
        self
    }

    /// Switch to a grid layout.
    pub fn with_grid(&mut self, grid: GridProperties) -> &mut Self {
        self.layout_mode = LayoutMode::Grid;
        self.grid = grid;
        self
    }

    pub fn with_dock(&mut self, position: DockPosition) -> &mut Self {
        self.dock_position = position;
        self
    }

    pub fn with_alignment(
        &mut self,
        horizontal: HorizontalAlignment,
        vertical: VerticalAlignment,
    ) -> &mut Self {
        self.horizontal_alignment = horizontal;
        self.vertical_alignment = vertical;
        self
    }

    pub fn with_user_rect(&mut self, rect: Rect) -> &mut Self {
        self.user_rect = rect;
        self
    }

    pub fn with_margin(&mut self, margin: Thickness) -> &mut Self {
        self.margin = margin;
        self
    }

    pub fn with_padding(&mut self, padding: Thickness) -> &mut Self {
        self.padding = padding;
        self
    }
}

/// The complete node tree.
#[derive(Debug, Clone, Default)]
pub struct LayoutTree {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl LayoutTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            roots: Vec::new(),
        }
    }

    fn alloc(&mut self, parent: Option<NodeId>) -> NodeId {
        let id = next_id(self.nodes.len());
        self.nodes.push(Node {
            parent,
            ..Node::default()
        });
        id
    }

    /// Add a parentless node with zeroed layout fields.
    pub fn create_root(&mut self) -> NodeId {
        let id = self.alloc(None);
        self.roots.push(id);
        debug!(node = id.0, "created root node");
        id
    }

    /// Append a new zeroed node to `parent`'s children.
    ///
    /// Returns `None`, allocating nothing, when `parent` is not in this tree.
    pub fn insert_child(&mut self, parent: NodeId) -> Option<NodeId> {
        self.try_insert_child(parent).ok()
    }

    /// Like [`insert_child`](Self::insert_child), reporting why insertion failed.
    pub fn try_insert_child(&mut self, parent: NodeId) -> Result<NodeId, TreeError> {
        if !self.contains(parent) {
            return Err(TreeError::InvalidNode {
                id: parent,
                len: self.nodes.len(),
            });
        }

        let id = self.alloc(Some(parent));
        self.nodes[parent.index()].children.push(id);
        debug!(node = id.0, parent = parent.0, "created child node");
        Ok(id)
    }

    /// Single step of a pre-order walk: first child, else next sibling.
    ///
    /// Does not climb back past an exhausted subtree, so chaining it stops at
    /// the last child of any subtree. Use [`descendants`](Self::descendants)
    /// to visit a whole tree.
    pub fn next_pre_order(&self, id: NodeId) -> Option<NodeId> {
        let node = self.get(id)?;
        if let Some(&first) = node.children.first() {
            return Some(first);
        }

        let siblings = &self.get(node.parent?)?.children;
        let position = siblings.iter().position(|&sibling| sibling == id)?;
        siblings.get(position + 1).copied()
    }

    /// Full pre-order iteration of the subtree rooted at `root`.
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        let mut stack = Vec::new();
        if self.contains(root) {
            stack.push(root);
        }
        Descendants { tree: self, stack }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent
    }

    /// Children of a node in layout order. Empty for unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Node::children).unwrap_or(&[])
    }

    /// Root nodes in creation order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Total node count across all roots.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Set the rect a root is arranged into. Kept apart from the arrange
    /// output, so it holds across recalculations. No-op for unknown ids.
    pub fn seed_rect(&mut self, id: NodeId, rect: Rect) {
        if let Some(node) = self.get_mut(id) {
            node.seed = Some(rect);
        }
    }

    /// Drop a seeded rect so the root falls back to its user rect.
    pub fn clear_seed(&mut self, id: NodeId) {
        if let Some(node) = self.get_mut(id) {
            node.seed = None;
        }
    }

    /// Record a measure result. Engine-only; callers read
    /// [`Node::calculated_size`].
    #[doc(hidden)]
    pub fn set_calculated_size(&mut self, id: NodeId, size: Size) {
        if let Some(node) = self.get_mut(id) {
            node.calculated_size = size;
        }
    }

    /// Record an arrange result. Engine-only; callers seed roots through
    /// [`seed_rect`](Self::seed_rect).
    #[doc(hidden)]
    pub fn set_calculated_rect(&mut self, id: NodeId, rect: Rect) {
        if let Some(node) = self.get_mut(id) {
            node.calculated_rect = rect;
        }
    }
}

/// Id for the node at arena index `len`. Running out of ids is fatal.
fn next_id(len: usize) -> NodeId {
    NodeId(u32::try_from(len).expect("node id space exhausted"))
}

/// Iterator returned by [`LayoutTree::descendants`].
pub struct Descendants<'a> {
    tree: &'a LayoutTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
