use crate::handle::Handle;
use crate::layout::{LayoutTree, NodeId};
use crate::painter::Painter;
use crate::theme::Theme;
use crate::widget::Widget;

struct Entry<T> {
    handle: Handle<T>,
    node: Option<NodeId>,
    widget: T,
}

/// Widgets of one kind in creation order, addressable by handle.
///
/// Creation order is also dispatch and paint order.
pub struct Registry<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T> Registry<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn insert(&mut self, handle: Handle<T>, node: Option<NodeId>, widget: T) {
        self.entries.push(Entry { handle, node, widget });
    }

    fn entry(&self, handle: Handle<T>) -> Option<&Entry<T>> {
        self.entries.iter().find(|e| e.handle == handle)
    }

    pub fn get(&self, handle: Handle<T>) -> Option<&T> {
        self.entry(handle).map(|e| &e.widget)
    }

    pub fn get_mut(&mut self, handle: Handle<T>) -> Option<&mut T> {
        self.entries.iter_mut().find(|e| e.handle == handle).map(|e| &mut e.widget)
    }

    /// Layout node backing `handle`, if the widget is part of the layout tree.
    pub fn node(&self, handle: Handle<T>) -> Option<NodeId> {
        self.entry(handle).and_then(|e| e.node)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Handle<T>, &T)> + '_ {
        self.entries.iter().map(|e| (e.handle, &e.widget))
    }

    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = (Handle<T>, &mut T)> + '_ {
        self.entries.iter_mut().map(|e| (e.handle, &mut e.widget))
    }

    /// Widgets only, creation order.
    pub fn widgets(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.entries.iter().map(|e| &e.widget)
    }

    pub fn widgets_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut T> + '_ {
        self.entries.iter_mut().map(|e| &mut e.widget)
    }
}

impl<T: Widget> Registry<T> {
    /// Copies each node's laid-out rectangle into its widget.
    pub(crate) fn sync_bounds(&mut self, tree: &LayoutTree) {
        for e in &mut self.entries {
            if let Some(node) = e.node {
                e.widget.set_bounds(tree.bounds(node));
            }
        }
    }

    pub(crate) fn paint_all(&self, painter: &mut Painter<'_>, theme: &Theme) {
        for e in &self.entries {
            e.widget.paint(painter, theme);
        }
    }
}
