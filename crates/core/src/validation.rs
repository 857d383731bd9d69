//! Input validation helpers.
//!
//! DTOs derive [`validator::Validate`]; [`validate_input`] folds the resulting
//! field errors into a single [`CoreError::Validation`] message so handlers can
//! propagate it with `?`.

use validator::Validate;

use crate::error::CoreError;

/// Run the derived validators on `input`.
///
/// Messages are sorted so the combined error text is stable regardless of
/// field iteration order.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input.validate().map_err(|errors| {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| match &err.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect();
        messages.sort();
        messages.dedup();
        CoreError::Validation(messages.join("; "))
    })
}

/// Trim surrounding whitespace from an optional text field.
///
/// A whitespace-only value becomes `Some("")`, which the `length(min = 1)`
/// validators then reject.
pub fn normalize_text(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}
