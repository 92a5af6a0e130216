//! Field validation for submitted form values.
//!
//! `validate` is a pure predicate: it never fails and never panics, it only
//! answers whether every applicable constraint holds.

/// The value under validation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Coerce raw input text to a number. Unparsable text becomes `NaN`,
    /// which fails every numeric comparison.
    pub fn number_from_text(raw: &str) -> Self {
        Self::Number(raw.trim().parse::<f64>().unwrap_or(f64::NAN))
    }

    fn text_form(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// A value plus the constraints it must satisfy. Absent constraints always hold.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub integer: bool,
}

impl Validatable {
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
            integer: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn integer(mut self) -> Self {
        self.integer = true;
        self
    }
}

/// Check every applicable constraint of `input`.
///
/// - `required`: trimmed text form is non-empty.
/// - `min_length`/`max_length`: text only, untrimmed character count.
/// - `min`/`max`: numbers only, inclusive.
/// - `integer`: numbers only, no fractional part.
pub fn validate(input: &Validatable) -> bool {
    let mut valid = true;

    if input.required {
        valid = valid && !input.value.text_form().trim().is_empty();
    }

    match &input.value {
        FieldValue::Text(text) => {
            let len = text.chars().count();
            if let Some(min_length) = input.min_length {
                valid = valid && len >= min_length;
            }
            if let Some(max_length) = input.max_length {
                valid = valid && len <= max_length;
            }
        }
        FieldValue::Number(n) => {
            if let Some(min) = input.min {
                valid = valid && *n >= min;
            }
            if let Some(max) = input.max {
                valid = valid && *n <= max;
            }
            if input.integer {
                valid = valid && n.is_finite() && n.fract() == 0.0;
            }
        }
    }

    valid
}

/// Title policy: required.
pub fn title_rule(raw: &str) -> Validatable {
    Validatable::new(raw).required()
}

/// Description policy: required, at least 5 characters.
pub fn description_rule(raw: &str) -> Validatable {
    Validatable::new(raw).required().min_length(5)
}

/// People policy: required whole number from 1 to 5.
pub fn people_rule(raw: &str) -> Validatable {
    Validatable::new(FieldValue::number_from_text(raw))
        .required()
        .integer()
        .min(1.0)
        .max(5.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_empty_and_blank() {
        assert!(!validate(&Validatable::new("").required()));
        assert!(!validate(&Validatable::new("  ").required()));
        assert!(validate(&Validatable::new(" x ").required()));
    }

    #[test]
    fn test_min_length() {
        assert!(!validate(&Validatable::new("ab").required().min_length(5)));
        assert!(validate(&Validatable::new("abcde").required().min_length(5)));
    }

    #[test]
    fn test_length_counts_untrimmed_chars() {
        assert!(validate(&Validatable::new("  ab ").min_length(5)));
        assert!(!validate(&Validatable::new("abcdef").max_length(5)));
        assert!(validate(&Validatable::new("ééééé").max_length(5)));
    }

    #[test]
    fn test_numeric_bounds() {
        assert!(!validate(&Validatable::new(0.0).required().min(1.0).max(5.0)));
        assert!(validate(&Validatable::new(3.0).min(1.0).max(5.0)));
        assert!(validate(&Validatable::new(5.0).min(1.0).max(5.0)));
        assert!(!validate(&Validatable::new(6.0).min(1.0).max(5.0)));
    }

    #[test]
    fn test_length_rules_ignore_numbers() {
        assert!(validate(&Validatable::new(3.0).min_length(5)));
    }

    #[test]
    fn test_numeric_rules_ignore_text() {
        assert!(validate(&Validatable::new("abc").min(10.0).integer()));
    }

    #[test]
    fn test_no_constraints_is_valid() {
        assert!(validate(&Validatable::new("")));
    }

    #[test]
    fn test_nan_fails_numeric_comparisons() {
        let nan = FieldValue::number_from_text("many");
        assert!(!validate(&Validatable::new(nan.clone()).min(1.0)));
        assert!(!validate(&Validatable::new(nan.clone()).max(5.0)));
        // NaN still has a non-empty text form.
        assert!(validate(&Validatable::new(nan).required()));
    }

    #[test]
    fn test_field_policies() {
        assert!(validate(&title_rule("Learn X")));
        assert!(!validate(&title_rule(" ")));

        assert!(validate(&description_rule("Build a sample app")));
        assert!(!validate(&description_rule("abcd")));

        assert!(validate(&people_rule("3")));
        assert!(validate(&people_rule(" 1 ")));
        assert!(!validate(&people_rule("")));
        assert!(!validate(&people_rule("0")));
        assert!(!validate(&people_rule("6")));
        assert!(!validate(&people_rule("2.5")));
        assert!(!validate(&people_rule("three")));
    }
}
