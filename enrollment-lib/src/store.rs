use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::state::{Action, FormState, reduce};

/// Shared handle to the live form state.
///
/// `FormStore` uses `Arc<RwLock<FormState>>` internally, so clones are cheap
/// and all point at the same state. The presentation layer holds one clone and
/// re-renders when [`is_dirty`](Self::is_dirty) reports a change; controllers
/// hold others. No lock is ever held across an `.await`.
///
/// # Example
///
/// ```
/// use enrollment_lib::model::Field;
/// use enrollment_lib::state::Action;
/// use enrollment_lib::store::FormStore;
///
/// let store = FormStore::new();
/// store.dispatch(Action::Change {
///     field: Field::Username,
///     value: "Ada Lovelace".into(),
/// });
/// assert!(store.is_dirty());
/// assert_eq!(store.get().record.username, "Ada Lovelace");
/// ```
#[derive(Debug)]
pub struct FormStore {
    inner: Arc<RwLock<FormState>>,
    dirty: Arc<AtomicBool>,
}

impl FormStore {
    /// Create a store holding the initial form state.
    pub fn new() -> Self {
        Self::with_state(FormState::initialize())
    }

    pub fn with_state(state: FormState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a clone of the current state
    pub fn get(&self) -> FormState {
        self.read(FormState::clone)
    }

    /// Read the current state without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&FormState) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Apply `action` through the reducer as one atomic step.
    pub fn dispatch(&self, action: Action) {
        let kind = action.kind();
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let next = reduce(&guard, action);
        if next != *guard {
            *guard = next;
            self.dirty.store(true, Ordering::SeqCst);
        }
        log::debug!(
            "Dispatched {} (generation {}, {} error(s))",
            kind,
            guard.generation(),
            guard.errors.len()
        );
    }

    /// Decide on an action from the current state and apply it, all under one
    /// write lock.
    ///
    /// `f` returns the action to apply (if any) and a value handed back to the
    /// caller. Nothing else can change the state between the decision and the
    /// transition.
    pub fn update<R>(&self, f: impl FnOnce(&FormState) -> (Option<Action>, R)) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let (action, value) = f(&guard);
        if let Some(action) = action {
            let kind = action.kind();
            let next = reduce(&guard, action);
            if next != *guard {
                *guard = next;
                self.dirty.store(true, Ordering::SeqCst);
            }
            log::debug!("Dispatched {} (generation {})", kind, guard.generation());
        }
        value
    }

    /// Check if the state has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for FormStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}
