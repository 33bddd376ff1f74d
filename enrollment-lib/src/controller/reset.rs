use crate::state::Action;
use crate::store::FormStore;

/// Restores the form to its defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResetController;

impl ResetController {
    /// Replace the record with defaults and clear errors in one transition.
    ///
    /// Valid from any phase. A submission still pending when this runs is
    /// ignored when it completes.
    pub fn reset(&self, store: &FormStore) {
        store.dispatch(Action::Reset);
        log::info!("Form reset");
    }
}
