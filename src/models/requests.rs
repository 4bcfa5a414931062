use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

/// Family activity search request
///
/// Field rules mirror the public API contract: blank-string and range
/// violations are reported one at a time, in declaration order, so the
/// client always sees the first broken rule alone.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "ages_ordered", skip_on_field_errors = false))]
pub struct RecommendationRequest {
    #[validate(custom(
        function = "non_blank",
        message = "City is required and must be a non-empty string"
    ))]
    pub city: String,
    #[validate(range(min = 0, max = 18, message = "minAge must be a number between 0 and 18"))]
    #[serde(alias = "min_age", rename = "minAge")]
    pub min_age: u8,
    #[validate(range(min = 0, max = 18, message = "maxAge must be a number between 0 and 18"))]
    #[serde(alias = "max_age", rename = "maxAge")]
    pub max_age: u8,
    #[validate(custom(
        function = "non_blank",
        message = "Availability is required and must be a non-empty string"
    ))]
    pub availability: String,
    #[validate(range(
        min = 1.0,
        max = 50.0,
        message = "maxDistance must be a number between 1 and 50"
    ))]
    #[serde(alias = "max_distance", rename = "maxDistance")]
    pub max_distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<String>,
}

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn ages_ordered(request: &RecommendationRequest) -> Result<(), ValidationError> {
    if request.max_age < request.min_age {
        let mut error = ValidationError::new("age_range");
        error.message = Some("maxAge must be greater than or equal to minAge".into());
        return Err(error);
    }
    Ok(())
}

/// Check order for violation reporting; "__all__" holds the struct-level
/// age-ordering rule, which ranks between the age ranges and maxDistance.
const RULE_ORDER: &[&str] = &[
    "city",
    "availability",
    "min_age",
    "minAge",
    "max_age",
    "maxAge",
    "__all__",
    "max_distance",
    "maxDistance",
];

/// Reduce a set of validation errors to the first failing rule's message
pub fn first_violation(errors: &ValidationErrors) -> String {
    let by_field = errors.errors();
    for &field in RULE_ORDER {
        if let Some(ValidationErrorsKind::Field(list)) = by_field.get(field) {
            if let Some(error) = list.first() {
                return error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
            }
        }
    }
    "Request validation failed".to_string()
}
