use trellis_engine::coords::Rect;

use super::{Align, SizeSpec};

/// Index of a node inside a [`LayoutTree`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One box in the layout tree.
#[derive(Debug, Clone, Default)]
pub struct LayoutNode {
    pub width: SizeSpec,
    pub height: SizeSpec,
    /// Horizontal placement of each child inside this node.
    pub h_align: Align,
    /// Vertical placement of the whole child stack inside this node.
    pub v_align: Align,
    pub(crate) children: Vec<NodeId>,
    pub(crate) bounds: Rect,
}

impl LayoutNode {
    pub fn new(width: SizeSpec, height: SizeSpec) -> Self {
        Self { width, height, ..Self::default() }
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Result of the last layout pass. Stale until the first one.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// Arena of layout nodes. A parent owns the ordered ids of its children.
///
/// Nodes are never removed, so a `NodeId` stays valid for the tree's lifetime.
#[derive(Debug, Default)]
pub struct LayoutTree {
    nodes: Vec<LayoutNode>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a detached node and returns its id.
    pub fn insert(&mut self, node: LayoutNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Adds a node as the last child of `parent`.
    pub fn insert_child(&mut self, parent: NodeId, node: LayoutNode) -> NodeId {
        let id = self.insert(node);
        self.nodes[parent.index()].children.push(id);
        id
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &LayoutNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut LayoutNode {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub fn bounds(&self, id: NodeId) -> Rect {
        self.nodes[id.index()].bounds
    }

    pub fn set_alignment(&mut self, id: NodeId, h: Align, v: Align) {
        let n = self.node_mut(id);
        n.h_align = h;
        n.v_align = v;
    }

    #[inline]
    pub(crate) fn child_at(&self, id: NodeId, i: usize) -> NodeId {
        self.nodes[id.index()].children[i]
    }
}
