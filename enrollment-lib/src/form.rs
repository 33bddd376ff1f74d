//! The form facade wired to presentation events.

use std::sync::Arc;

use crate::config::FormConfig;
use crate::controller::{ResetController, SubmitController, SubmitOutcome, Submitter};
use crate::error::FieldError;
use crate::model::Field;
use crate::state::{Action, FormState};
use crate::store::FormStore;
use crate::validation::ValidationEngine;

/// A registration form: store, rules and controllers behind the three events a
/// presentation layer emits.
///
/// Cloning is cheap and every clone drives the same state, so a reset issued
/// from one handler is seen by a submission awaiting in another.
///
/// # Example
///
/// ```ignore
/// let form = Form::new(Acknowledge);
/// form.on_change(Field::Username, "Jane Doe");
///
/// match form.on_submit().await {
///     SubmitOutcome::Invalid(errors) => render_errors(&errors),
///     SubmitOutcome::Submitted(receipt) => show_receipt(&receipt),
///     _ => {}
/// }
/// ```
#[derive(Clone)]
pub struct Form {
    store: FormStore,
    engine: Arc<ValidationEngine>,
    submit: SubmitController,
    reset: ResetController,
    config: FormConfig,
}

impl Form {
    /// Create a form with the registration rules and default config.
    pub fn new(submitter: impl Submitter + 'static) -> Self {
        Self::with_config(submitter, FormConfig::default())
    }

    pub fn with_config(submitter: impl Submitter + 'static, config: FormConfig) -> Self {
        Self::from_parts(
            FormStore::new(),
            ValidationEngine::registration(),
            Arc::new(submitter),
            config,
        )
    }

    /// Assemble a form from an existing store, a custom rule table and a
    /// shared submitter.
    pub fn from_parts(
        store: FormStore,
        engine: ValidationEngine,
        submitter: Arc<dyn Submitter>,
        config: FormConfig,
    ) -> Self {
        let engine = Arc::new(engine);
        Self {
            submit: SubmitController::new(Arc::clone(&engine), submitter, config.clone()),
            reset: ResetController,
            store,
            engine,
            config,
        }
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FormState {
        self.store.get()
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn engine(&self) -> &ValidationEngine {
        &self.engine
    }

    /// A field's input changed.
    pub fn on_change(&self, field: Field, value: impl Into<String>) {
        self.store.dispatch(Action::Change {
            field,
            value: value.into(),
        });
    }

    /// A field's input changed, with the field given by its wire name.
    ///
    /// An unknown name is a wiring bug in the caller and is returned as an
    /// error rather than ignored.
    pub fn on_change_named(&self, name: &str, value: impl Into<String>) -> Result<(), FieldError> {
        let field = name.parse::<Field>().inspect_err(|err| {
            log::error!("{}", err);
        })?;
        self.on_change(field, value);
        Ok(())
    }

    /// The submit button was pressed.
    pub async fn on_submit(&self) -> SubmitOutcome {
        self.submit.submit(&self.store).await
    }

    /// The reset button was pressed.
    pub fn on_reset(&self) {
        self.reset.reset(&self.store);
    }

    /// Hide the last submission notice.
    pub fn dismiss_notice(&self) {
        self.store.dispatch(Action::DismissNotice);
    }

    pub fn submit_controller(&self) -> &SubmitController {
        &self.submit
    }
}
