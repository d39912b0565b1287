//! Two-pass constraint layout.
//!
//! Pass 1 resolves every node's width and height top-down. Pass 2 assigns
//! positions, stacking children vertically inside their parent. Both passes
//! visit each node once.

mod size;
mod tree;

pub use size::{Align, SizeSpec};
pub use tree::{LayoutNode, LayoutTree, NodeId};

use trellis_engine::coords::Vec2;

/// Lays out the subtree under `root` inside a `width × height` viewport placed
/// at the origin.
pub fn layout(tree: &mut LayoutTree, root: NodeId, width: f32, height: f32) {
    layout_at(tree, root, Vec2::ZERO, width, height);
}

/// Like [`layout`] but places the root at `origin`.
pub fn layout_at(tree: &mut LayoutTree, root: NodeId, origin: Vec2, width: f32, height: f32) {
    let node = tree.node_mut(root);
    node.bounds.w = node.width.resolve(width);
    node.bounds.h = node.height.resolve(height);
    resolve_children(tree, root);
    position(tree, root, origin.x, origin.y);
}

/// Pass 1 below an already-sized node.
///
/// Each child is resolved exactly once against this node's size: fixed and
/// percent children take what they ask for, fill children split the rest.
fn resolve_children(tree: &mut LayoutTree, id: NodeId) {
    let n = tree.node(id).children().len();
    if n == 0 {
        return;
    }
    let content = tree.bounds(id).size();

    let mut used = Vec2::ZERO;
    let (mut fill_w, mut fill_h) = (0u32, 0u32);
    for &child in tree.node(id).children() {
        let c = tree.node(child);
        if c.width.is_fill() {
            fill_w += 1;
        } else {
            used.x += c.width.resolve(content.x);
        }
        if c.height.is_fill() {
            fill_h += 1;
        } else {
            used.y += c.height.resolve(content.y);
        }
    }

    let remaining_w = (content.x - used.x).max(0.0);
    let remaining_h = (content.y - used.y).max(0.0);
    let share_w = if fill_w > 0 { remaining_w / fill_w as f32 } else { remaining_w };
    let share_h = if fill_h > 0 { remaining_h / fill_h as f32 } else { remaining_h };

    for i in 0..n {
        let child = tree.child_at(id, i);
        let c = tree.node_mut(child);
        c.bounds.w = if c.width.is_fill() { share_w } else { c.width.resolve(content.x) };
        c.bounds.h = if c.height.is_fill() { share_h } else { c.height.resolve(content.y) };
        resolve_children(tree, child);
    }
}

/// Pass 2: place `id` at `(x, y)` and stack its children.
fn position(tree: &mut LayoutTree, id: NodeId, x: f32, y: f32) {
    let node = tree.node_mut(id);
    node.bounds.x = x;
    node.bounds.y = y;
    let bounds = node.bounds;
    let (h_align, v_align) = (node.h_align, node.v_align);

    let total_h: f32 = tree.node(id).children().iter().map(|&c| tree.bounds(c).h).sum();
    let mut cursor = y + v_align.offset(bounds.h, total_h);

    for i in 0..tree.node(id).children().len() {
        let child = tree.child_at(id, i);
        let size = tree.bounds(child).size();
        let cx = x + h_align.offset(bounds.w, size.x);
        position(tree, child, cx, cursor);
        cursor += size.y;
    }

    log::trace!("layout {:?} -> {:?}", id, bounds);
}
