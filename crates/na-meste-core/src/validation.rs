//! Rendering of `validator` failures into client-facing messages.
//!
//! Request types declare their constraints with `#[derive(Validate)]`. The codes used
//! across the API are:
//!
//! | code       | meaning                               |
//! |------------|---------------------------------------|
//! | `required` | field missing, empty or zero          |
//! | `email`    | not an email address                  |
//! | `oneof`    | value outside an enumerated set       |
//! | `length`   | string longer than the column allows  |
//!
//! A `length` failure on an empty string counts as `required`, so a field can be
//! declared `length(min = 1, max = N)` and still report a missing value as such.
//!
//! One failure is reported per field: `required` when the value is missing,
//! otherwise the first violated constraint. Failures are ordered by field name so
//! that the rendered message is stable.

use validator::{ValidationError, ValidationErrors};

pub const REQUIRED: &str = "required";
pub const EMAIL: &str = "email";
pub const ONE_OF: &str = "oneof";
pub const LENGTH: &str = "length";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub field: String,
    pub constraint: String,
    pub message: String,
}

fn is_missing(error: &ValidationError) -> bool {
    match error.code.as_ref() {
        REQUIRED => true,
        LENGTH => error.params.get("value").and_then(|v| v.as_str()) == Some(""),
        _ => false,
    }
}

fn constraint(error: &ValidationError) -> &str {
    if is_missing(error) {
        REQUIRED
    } else {
        error.code.as_ref()
    }
}

fn describe(field: &str, error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return format!("field {} {}", field, message);
    }

    match constraint(error) {
        REQUIRED => format!("field {} is a required field", field),
        EMAIL => format!("field {} is not a valid email", field),
        ONE_OF => format!("field {} has an unsupported value", field),
        LENGTH => match error.params.get("max") {
            Some(max) => format!("field {} must be at most {} characters", field, max),
            None => format!("field {} has an invalid length", field),
        },
        code => format!("field {} failed on the '{}' constraint", field, code),
    }
}

pub fn collect_failures(errors: &ValidationErrors) -> Vec<ValidationFailure> {
    let mut failures: Vec<ValidationFailure> = errors
        .field_errors()
        .iter()
        .filter_map(|(field, errors)| {
            let field = field.to_string();
            errors
                .iter()
                .find(|error| is_missing(error))
                .or_else(|| errors.first())
                .map(|error| ValidationFailure {
                    constraint: constraint(error).to_string(),
                    message: describe(&field, error),
                    field,
                })
        })
        .collect();

    failures.sort_by(|a, b| a.field.cmp(&b.field));
    failures
}

pub fn render_failures(failures: &[ValidationFailure]) -> String {
    failures
        .iter()
        .map(|failure| failure.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use validator::Validate;

    #[derive(Validate)]
    struct Signup {
        #[validate(length(min = 1, code = "required"))]
        username: String,
        #[validate(length(min = 1, code = "required"), email)]
        email: String,
    }

    #[test]
    fn test_valid_input_produces_no_errors() {
        let signup = Signup {
            username: "a".to_string(),
            email: "a@b.com".to_string(),
        };
        assert!(signup.validate().is_ok());
    }

    #[test]
    fn test_failures_are_sorted_and_one_per_field() {
        let signup = Signup {
            username: String::new(),
            email: String::new(),
        };
        let errors = signup.validate().unwrap_err();
        let failures = collect_failures(&errors);

        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].field, "email");
        assert_eq!(failures[0].constraint, "required");
        assert_eq!(failures[1].field, "username");
    }

    #[test]
    fn test_render_joins_messages() {
        let signup = Signup {
            username: "a".to_string(),
            email: "not-an-email".to_string(),
        };
        let errors = signup.validate().unwrap_err();

        assert_eq!(
            render_failures(&collect_failures(&errors)),
            "field email is not a valid email"
        );

        let signup = Signup {
            username: String::new(),
            email: "nope".to_string(),
        };
        let errors = signup.validate().unwrap_err();

        assert_eq!(
            render_failures(&collect_failures(&errors)),
            "field email is not a valid email, field username is a required field"
        );
    }

    #[derive(Validate)]
    struct College {
        #[validate(length(min = 1, max = 10))]
        name: String,
    }

    #[test]
    fn test_length_on_empty_string_is_required() {
        let errors = College {
            name: String::new(),
        }
        .validate()
        .unwrap_err();
        let failures = collect_failures(&errors);

        assert_eq!(failures[0].constraint, "required");
        assert_eq!(failures[0].message, "field name is a required field");
    }

    #[test]
    fn test_length_over_max() {
        let errors = College {
            name: "a".repeat(11),
        }
        .validate()
        .unwrap_err();
        let failures = collect_failures(&errors);

        assert_eq!(failures[0].constraint, "length");
        assert_eq!(
            failures[0].message,
            "field name must be at most 10 characters"
        );

        assert!(
            College {
                name: "a".repeat(10)
            }
            .validate()
            .is_ok()
        );
    }

    #[test]
    fn test_custom_message_is_used() {
        let mut errors = ValidationErrors::new();
        let mut error = ValidationError::new("oneof");
        error.message = Some(Cow::Borrowed("must be one of: teacher, scanner, student"));
        errors.add("role", error);

        assert_eq!(
            render_failures(&collect_failures(&errors)),
            "field role must be one of: teacher, scanner, student"
        );
    }
}
