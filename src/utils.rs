use crate::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

// Plain decimal literal: sign, digits with optional fraction (or a bare
// fraction), optional exponent. Rejects NaN/inf and trailing garbage.
static DECIMAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").unwrap());

/// Parse one form field into a number.
///
/// # Examples
/// ```
/// use student_status::utils::parse_feature_value;
/// assert_eq!(parse_feature_value(" 13.7 ", "Admission grade"), Ok(13.7));
/// assert!(parse_feature_value("", "Admission grade").is_err());
/// assert!(parse_feature_value("abc", "Admission grade").is_err());
/// ```
pub fn parse_feature_value(input: &str, field_name: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field_name.to_string()));
    }

    if !DECIMAL_REGEX.is_match(trimmed) {
        return Err(ValidationError::NotANumber(field_name.to_string()));
    }

    match trimmed.parse::<f64>() {
        Ok(val) if val.is_finite() => Ok(val),
        _ => Err(ValidationError::NotANumber(field_name.to_string())),
    }
}

/// Text written into an input when prefilling (`1`, `13.7`, `-0.3`).
pub fn format_field_value(value: f64) -> String {
    value.to_string()
}

/// Percentage with two decimals and a trailing `%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// CSS class list for the prediction badge.
pub fn badge_class(prediction: &str) -> String {
    format!("prediction-badge {}", prediction.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_decimals() {
        assert_eq!(parse_feature_value("17", "Course"), Ok(17.0));
        assert_eq!(parse_feature_value("-0.3", "Inflation rate"), Ok(-0.3));
        assert_eq!(parse_feature_value("+.5", "GDP"), Ok(0.5));
        assert_eq!(parse_feature_value("1e2", "GDP"), Ok(100.0));
        assert_eq!(parse_feature_value("3.", "GDP"), Ok(3.0));
    }

    #[test]
    fn rejects_blank_input_as_required() {
        assert_eq!(
            parse_feature_value("   ", "Debtor"),
            Err(ValidationError::Required("Debtor".into()))
        );
    }

    #[test]
    fn rejects_non_numeric_text() {
        for bad in ["abc", "12abc", "NaN", "inf", "Infinity", "1,5", "--1", "."] {
            assert_eq!(
                parse_feature_value(bad, "Gender"),
                Err(ValidationError::NotANumber("Gender".into())),
                "input {:?}",
                bad
            );
        }
    }

    #[test]
    fn rejects_overflowing_exponent() {
        assert!(parse_feature_value("1e999", "GDP").is_err());
    }

    #[test]
    fn formats_values_and_percentages() {
        assert_eq!(format_field_value(1.0), "1");
        assert_eq!(format_field_value(13.7), "13.7");
        assert_eq!(format_field_value(-0.3), "-0.3");
        assert_eq!(format_percent(80.0), "80.00%");
        assert_eq!(format_percent(92.499), "92.50%");
        assert_eq!(badge_class("Graduate"), "prediction-badge graduate");
    }
}
