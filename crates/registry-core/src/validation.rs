//! Validation utilities.

use crate::FieldError;
use validator::ValidationErrors;

/// Flattens `validator::ValidationErrors` into field errors, sorted by field
/// name so messages are stable.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect();
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    field_errors
}

/// Joins field errors into a single `field: message; ...` line.
#[must_use]
pub fn summarize(field_errors: &[FieldError]) -> String {
    field_errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Common validation functions.
pub mod rules {
    use crate::DateCodec;
    use validator::ValidationError;

    /// Validates a required `YYYY-MM-DD` calendar date.
    pub fn iso_date(value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::new("required").with_message("dob is required".into()));
        }
        if !DateCodec::is_well_formed(value) {
            return Err(ValidationError::new("date_format")
                .with_message("dob must be formatted as YYYY-MM-DD".into()));
        }
        if DateCodec::parse(value).is_err() {
            return Err(ValidationError::new("date_range")
                .with_message("dob must be a valid calendar date".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct Sample {
        #[validate(length(min = 2, message = "too short"))]
        name: String,
        #[validate(custom(function = "iso_date"))]
        dob: String,
    }

    #[test]
    fn test_iso_date() {
        assert!(iso_date("1990-05-02").is_ok());
        assert_eq!(iso_date("").unwrap_err().code, "required");
        assert_eq!(iso_date("not-a-date").unwrap_err().code, "date_format");
        assert_eq!(iso_date("1990-02-30").unwrap_err().code, "date_range");
    }

    #[test]
    fn test_field_errors_are_sorted_and_summarized() {
        let sample = Sample {
            name: "A".to_string(),
            dob: "nope".to_string(),
        };
        let errors = field_errors(&sample.validate().unwrap_err());

        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["dob", "name"]);
        assert_eq!(errors[0].code, "date_format");
        assert_eq!(
            summarize(&errors),
            "dob: dob must be formatted as YYYY-MM-DD; name: too short"
        );
    }

    #[test]
    fn test_valid_sample_passes() {
        let sample = Sample {
            name: "Ann".to_string(),
            dob: "1990-05-02".to_string(),
        };
        assert!(sample.validate().is_ok());
    }
}
