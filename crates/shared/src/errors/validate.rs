use std::fmt::Write;
use validator::{ValidationError, ValidationErrors};

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut result = String::new();

    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    for (field, field_errors) in fields {
        for err in field_errors {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match err.code.as_ref() {
                    "range" => range_message(err),
                    "required" => "required".to_string(),
                    "custom" => "custom validation failed".to_string(),
                    _ => "invalid value".to_string(),
                });

            let _ = writeln!(&mut result, "{field}: {message}");
        }
    }

    if result.is_empty() {
        "Validation failed".to_string()
    } else {
        result.trim().to_string()
    }
}

fn range_message(err: &ValidationError) -> String {
    match (err.params.get("min"), err.params.get("max")) {
        (Some(min), Some(max)) => format!("must be between {min} and {max}"),
        (Some(min), None) => format!("must be at least {min}"),
        (None, Some(max)) => format!("must be at most {max}"),
        (None, None) => "value out of range".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::PageTokensRequest;
    use validator::Validate;

    #[test]
    fn lists_every_failing_field() {
        let mut req = PageTokensRequest::new(1, 10);
        req.max_pages_to_show = Some(0);
        req.window_size = Some(500);

        let errors = req.validate().unwrap_err();
        let message = format_validation_errors(&errors);

        assert_eq!(
            message,
            "max_pages_to_show: must be between 1 and 100\n\
             window_size: must be at most 50"
        );
    }

    #[test]
    fn empty_errors_get_generic_message() {
        assert_eq!(
            format_validation_errors(&ValidationErrors::new()),
            "Validation failed"
        );
    }
}
