use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Scene-wide widget identity, issued once at creation and never reused.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct WidgetId(pub(crate) u32);

impl WidgetId {
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Typed reference to a widget stored in a [`Scene`](crate::scene::Scene).
///
/// Handles stay valid when other widgets are added; the kind parameter stops
/// a button handle from being used to look up a slider.
pub struct Handle<T> {
    id: WidgetId,
    _kind: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    #[inline]
    pub(crate) fn new(id: WidgetId) -> Self {
        Self { id, _kind: PhantomData }
    }

    #[inline]
    pub fn id(self) -> WidgetId {
        self.id
    }
}

// Manual impls: derives would require `T: Clone` etc.
impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({})", self.id.0)
    }
}
