use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::scene::Scene;

/// Deferred scene mutation.
pub type Action = Box<dyn FnOnce(&mut Scene)>;

/// Cloneable handle for queueing scene mutations from inside widget callbacks.
///
/// Callbacks run while the driver holds the widget that fired them, so they
/// cannot borrow the scene directly. They push an action instead; the driver
/// applies the queue right after the firing widget finished its own
/// transition, within the same tick.
///
/// # Example
/// ```rust,ignore
/// let queue = scene.actions();
/// let button = Button::new("Reset").on_click(move || {
///     queue.push(move |scene| {
///         if let Some(s) = scene.slider_mut(volume) { s.set_value(50.0); }
///     });
/// });
/// ```
#[derive(Clone, Default)]
pub struct ActionQueue {
    inner: Rc<RefCell<Vec<Action>>>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, action: impl FnOnce(&mut Scene) + 'static) {
        self.inner.borrow_mut().push(Box::new(action));
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    pub(crate) fn take(&self) -> Vec<Action> {
        std::mem::take(&mut *self.inner.borrow_mut())
    }
}

impl fmt::Debug for ActionQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionQueue").field("pending", &self.len()).finish()
    }
}
