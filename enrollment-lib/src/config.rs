//! Form configuration.

/// Per-form configuration.
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Heading shown above the form.
    pub title: &'static str,

    /// Message reported to the user after a successful submission.
    pub acknowledgment: &'static str,

    /// If true, the record is reset to its defaults once a submission succeeds.
    /// Off by default: the submitted values stay in the form.
    pub clear_on_success: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: "SCHOOL REGISTRATION FORM",
            acknowledgment: "Form submitted successfully!",
            clear_on_success: false,
        }
    }
}

impl FormConfig {
    /// Create a new config with the given title.
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            ..Default::default()
        }
    }

    /// Set the success acknowledgment.
    pub fn acknowledgment(mut self, message: &'static str) -> Self {
        self.acknowledgment = message;
        self
    }

    /// Clear the form after a successful submission.
    pub fn clear_on_success(mut self) -> Self {
        self.clear_on_success = true;
        self
    }
}
