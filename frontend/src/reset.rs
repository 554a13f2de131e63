use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Registry of reset callbacks, keyed by store name.
///
/// Stores register themselves at mount, and anything holding a handle can
/// reset every registered store without knowing about any of them. Clones
/// share the same underlying map, so the registry can be passed down as a
/// Yew context.
#[derive(Clone, Default)]
pub struct ResetRegistry {
    inner: Rc<RefCell<BTreeMap<&'static str, Box<dyn Fn()>>>>,
}

impl ResetRegistry {
    /// Register a store's reset callback. Registering the same name again
    /// replaces the previous callback.
    pub fn register(&self, name: &'static str, resetter: impl Fn() + 'static) {
        self.inner.borrow_mut().insert(name, Box::new(resetter));
    }

    /// Invoke every registered reset callback.
    pub fn reset_all(&self) {
        for resetter in self.inner.borrow().values() {
            resetter();
        }
    }
}

// Callbacks aren't Debug, so show only the registered store names.
impl std::fmt::Debug for ResetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.inner.borrow().keys())
            .finish()
    }
}

// Contexts need equality to know when to re-render; two handles are the
// same registry exactly when they share the map.
impl PartialEq for ResetRegistry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
