//! Field-level payload validation shared by the services.
//!
//! Errors carry `{field, code}` details so clients can point at the offending
//! input.

use serde_json::json;

use crate::domain::Error;

/// Detail code for a required field that was not supplied.
pub const MISSING_FIELD: &str = "missing_field";
/// Detail code for a text field that was supplied but blank.
pub const BLANK_FIELD: &str = "blank_field";

/// Error for a required field that was not supplied.
pub fn missing_field_error(field: &str) -> Error {
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": MISSING_FIELD,
    }))
}

/// Error for a reference field naming something that does not exist.
pub fn unknown_reference_error(field: &str, code: &str, value: impl ToString) -> Error {
    Error::invalid_request(format!("{field} does not refer to an existing record")).with_details(
        json!({
            "field": field,
            "value": value.to_string(),
            "code": code,
        }),
    )
}

fn blank_field_error(field: &str) -> Error {
    Error::invalid_request(format!("{field} must not be blank")).with_details(json!({
        "field": field,
        "code": BLANK_FIELD,
    }))
}

/// Require a non-blank text value.
pub fn required_text(field: &str, value: Option<String>) -> Result<String, Error> {
    let value = value.ok_or_else(|| missing_field_error(field))?;
    non_blank(field, value)
}

/// Validate a text value when one was supplied.
pub fn optional_text(field: &str, value: Option<String>) -> Result<Option<String>, Error> {
    value.map(|text| non_blank(field, text)).transpose()
}

fn non_blank(field: &str, value: String) -> Result<String, Error> {
    if value.trim().is_empty() {
        return Err(blank_field_error(field));
    }
    Ok(value)
}
