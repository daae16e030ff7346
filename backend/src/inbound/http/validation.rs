//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            ValidationCode::MissingField => "missing_field",
        }
    }
}

/// Build the 400 error for a required field absent from the request body.
pub(crate) fn missing_field_error(field: &'static str) -> Error {
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ValidationCode::MissingField.as_str(),
    }))
}

/// Extract a required field or fail with the canonical missing-field error.
pub(crate) fn require_field<T>(value: Option<T>, field: &'static str) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    fn missing_field_error_names_the_field() {
        let error = missing_field_error("email");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.message(), "missing required field: email");
        let details = error.details().expect("details present");
        assert_eq!(details.get("field"), Some(&Value::from("email")));
        assert_eq!(details.get("code"), Some(&Value::from("missing_field")));
    }

    #[rstest]
    fn require_field_passes_present_values_through() {
        let value = require_field(Some(30), "age").expect("value present");
        assert_eq!(value, 30);
    }

    #[rstest]
    fn require_field_rejects_absent_values() {
        let error = require_field::<i32>(None, "age").expect_err("missing field");
        assert_eq!(error.message(), "missing required field: age");
    }
}
