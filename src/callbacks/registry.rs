//! Callback registry.
//!
//! Ordered set of subscribers. Identity is the `Arc` allocation, so the
//! same observer cannot be subscribed twice, while two separately
//! allocated observers of the same type can.

use std::sync::Arc;

use im::Vector;

use super::GameEngineCallback;

/// Ordered, duplicate-free list of callbacks.
///
/// Backed by `im::Vector`, so [`CallbackRegistry::snapshot`] is O(1) and the
/// engine can dispatch from a snapshot while the registry keeps changing.
#[derive(Clone, Default)]
pub struct CallbackRegistry {
    callbacks: Vector<Arc<dyn GameEngineCallback>>,
}

fn same_callback(a: &Arc<dyn GameEngineCallback>, b: &Arc<dyn GameEngineCallback>) -> bool {
    // Compare data addresses only; vtable pointers are not unique per type.
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}

impl CallbackRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a callback. Returns `false` if it was already subscribed.
    pub fn add(&mut self, callback: Arc<dyn GameEngineCallback>) -> bool {
        if self.contains(&callback) {
            return false;
        }
        self.callbacks.push_back(callback);
        true
    }

    /// Unsubscribe a callback. Returns whether it was subscribed.
    pub fn remove(&mut self, callback: &Arc<dyn GameEngineCallback>) -> bool {
        match self.callbacks.iter().position(|c| same_callback(c, callback)) {
            Some(index) => {
                self.callbacks.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, callback: &Arc<dyn GameEngineCallback>) -> bool {
        self.callbacks.iter().any(|c| same_callback(c, callback))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Callbacks in subscription order, detached from later changes.
    #[must_use]
    pub fn snapshot(&self) -> Vector<Arc<dyn GameEngineCallback>> {
        self.callbacks.clone()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("len", &self.callbacks.len())
            .finish()
    }
}
