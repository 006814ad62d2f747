//! Parsing rules for keyboard input

use dealer_types::ValidationError;

/// Parse a strictly positive integer made of ASCII digits only
///
/// Signs, decimals and surrounding text are rejected.
pub fn parse_positive_integer(input: &str) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NotPositiveInteger(input.to_string()));
    }
    match trimmed.parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ValidationError::NotPositiveInteger(input.to_string())),
    }
}

/// Parse a zero-or-greater integer made of ASCII digits only
pub fn parse_non_negative_integer(input: &str) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NotNonNegativeInteger(input.to_string()));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| ValidationError::NotNonNegativeInteger(input.to_string()))
}

/// Parse a finite, non-negative price
pub fn parse_price(input: &str) -> Result<f64, ValidationError> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ValidationError::InvalidPrice(input.to_string())),
    }
}

/// Trim a required text field, rejecting blank input
pub fn require_non_empty(field: &'static str, input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// "y" or "yes" in any case; everything else is a no
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
