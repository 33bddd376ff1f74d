//! Plain text rendering of the form state.

use std::fmt::Write;

use enrollment_lib::FormConfig;
use enrollment_lib::controller::SubmitOutcome;
use enrollment_lib::model::{Course, Field, Gender, InputKind};
use enrollment_lib::state::{FormState, Notice};

const LABEL_WIDTH: usize = 22;

/// Render every field with its value and any inline error.
pub fn form(state: &FormState, config: &FormConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", config.title);
    let _ = writeln!(out, "{}", "─".repeat(config.title.chars().count()));

    for field in Field::ALL {
        let value = state.record.value(field);
        let shown = if value.is_empty() {
            field
                .placeholder()
                .map(|p| format!("<{}>", p))
                .unwrap_or_default()
        } else {
            value.to_string()
        };
        let _ = writeln!(
            out,
            "  {:<width$} {:<9} {}",
            field.label(),
            format!("[{}]", field.name()),
            shown,
            width = LABEL_WIDTH
        );
        if let Some(options) = options(field) {
            let _ = writeln!(out, "  {:<width$} options: {}", "", options, width = LABEL_WIDTH);
        }
        if let Some(message) = state.errors.get(field) {
            let _ = writeln!(out, "  {:<width$} ! {}", "", message, width = LABEL_WIDTH);
        }
    }

    if state.is_submitting() {
        let _ = writeln!(out, "\n  Submitting...");
    } else if let Some(notice) = &state.notice {
        let _ = writeln!(out, "\n  {}", notice.message());
    }
    out
}

fn options(field: Field) -> Option<String> {
    match field.kind() {
        InputKind::Radio => Some(
            Gender::ALL
                .iter()
                .map(|g| g.as_str())
                .collect::<Vec<_>>()
                .join(" / "),
        ),
        InputKind::Select => Some(
            Course::ALL
                .iter()
                .map(|c| c.label())
                .collect::<Vec<_>>()
                .join(" / "),
        ),
        _ => None,
    }
}

/// One-line summary of a submit attempt.
pub fn outcome(outcome: &SubmitOutcome, state: &FormState) -> String {
    match outcome {
        SubmitOutcome::Invalid(errors) => match errors.first() {
            Some((field, message)) => format!(
                "{} field(s) need attention. First: {} ({})",
                errors.len(),
                field.label(),
                message
            ),
            None => "Form is invalid".to_string(),
        },
        SubmitOutcome::Submitted(receipt) => {
            let message = match &state.notice {
                Some(Notice::Submitted { message, .. }) => message.as_str(),
                _ => "Submitted",
            };
            let born = state
                .record
                .date_of_birth()
                .map(|d| d.format("%-d %B %Y").to_string())
                .unwrap_or_else(|| state.record.dob.clone());
            format!(
                "{} Reference {} for {}, born {}.",
                message, receipt.id, state.record.username, born
            )
        }
        SubmitOutcome::Failed(err) => format!("Submission failed: {}", err),
        SubmitOutcome::Busy => "A submission is already in progress".to_string(),
        SubmitOutcome::Stale => "Submission discarded after reset".to_string(),
    }
}
