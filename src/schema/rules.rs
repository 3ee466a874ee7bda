//! Atomic validation rules
//!
//! Every rule except `Required` is skipped when the value is absent or null;
//! only `Required` decides whether a missing value is an error.

use serde_json::Value;

use super::date;
use super::errors::ValidationError;
use super::types::{Schema, TypeTag};
use super::validator;

/// One check applied to one field value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule<'a> {
    /// Value must be present, non-null, and not the empty string
    Required,
    /// Value must be of the given kind
    Type(TypeTag),
    /// String character count or array element count must be at least `n`
    MinLength(usize),
    /// Value must be a `DD/MM/YYYY` string naming a real date
    DateFormat,
    /// Value must be one of the listed strings
    Enum(&'a [String]),
    /// Value must be an array whose elements satisfy the schema
    ArrayItems(&'a Schema),
}

impl<'a> Rule<'a> {
    /// Short name matching the schema key that enables the rule
    pub fn kind(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Type(_) => "type",
            Rule::MinLength(_) => "minLength",
            Rule::DateFormat => "format",
            Rule::Enum(_) => "enum",
            Rule::ArrayItems(_) => "items",
        }
    }

    /// Applies the rule to `value`, the current value of `field`.
    ///
    /// `None` means the field is absent from the record.
    pub fn check(&self, field: &str, value: Option<&Value>) -> Result<(), ValidationError> {
        let value = match (self, value) {
            (Rule::Required, value) => {
                return if is_missing(value) {
                    Err(ValidationError::required(field))
                } else {
                    Ok(())
                };
            }
            (_, None) | (_, Some(Value::Null)) => return Ok(()),
            (_, Some(value)) => value,
        };

        match self {
            Rule::Required => Ok(()),
            Rule::Type(expected) => {
                if expected.matches(value) {
                    Ok(())
                } else {
                    Err(ValidationError::wrong_type(field, *expected))
                }
            }
            Rule::MinLength(min) => match length_of(value) {
                Some(len) if len < *min => Err(ValidationError::too_short(field, *min)),
                _ => Ok(()),
            },
            Rule::DateFormat => match value.as_str() {
                Some(text) if date::is_valid_date(text) => Ok(()),
                _ => Err(ValidationError::invalid_date(field)),
            },
            Rule::Enum(allowed) => match value.as_str() {
                Some(text) if allowed.iter().any(|candidate| candidate == text) => Ok(()),
                _ => Err(ValidationError::not_allowed(field, allowed)),
            },
            // The declared item type is not applied per element.
            Rule::ArrayItems(properties) => {
                let elements = value
                    .as_array()
                    .ok_or_else(|| ValidationError::not_array(field))?;
                for element in elements {
                    validator::validate(element, properties)?;
                }
                Ok(())
            }
        }
    }
}

/// Absent, null, or the empty string. Zero, false, `[]` and `{}` are present.
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(_) => false,
    }
}

/// Character count for strings, element count for arrays
fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(text) => Some(text.chars().count()),
        Value::Array(elements) => Some(elements.len()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(rule: Rule<'_>, value: Value) -> Result<(), ValidationError> {
        rule.check("field", Some(&value))
    }

    #[test]
    fn test_required_rejects_missing_values() {
        assert!(Rule::Required.check("field", None).is_err());
        assert!(check(Rule::Required, Value::Null).is_err());
        assert!(check(Rule::Required, json!("")).is_err());
    }

    #[test]
    fn test_required_accepts_falsy_values() {
        assert!(check(Rule::Required, json!(0)).is_ok());
        assert!(check(Rule::Required, json!(false)).is_ok());
        assert!(check(Rule::Required, json!([])).is_ok());
        assert!(check(Rule::Required, json!({})).is_ok());
        assert!(check(Rule::Required, json!(" ")).is_ok());
    }

    #[test]
    fn test_non_required_rules_skip_absent_and_null() {
        let allowed = vec!["a".to_string()];
        let nested = Schema::new();
        let rules = [
            Rule::Type(TypeTag::Number),
            Rule::MinLength(3),
            Rule::DateFormat,
            Rule::Enum(&allowed),
            Rule::ArrayItems(&nested),
        ];
        for rule in rules {
            assert!(rule.check("field", None).is_ok(), "{} on absent", rule.kind());
            assert!(check(rule, Value::Null).is_ok(), "{} on null", rule.kind());
        }
    }

    #[test]
    fn test_type_mismatch_names_expected_type() {
        let err = Rule::Type(TypeTag::Boolean)
            .check("active", Some(&json!("yes")))
            .unwrap_err();
        assert_eq!(err.message(), "The field active must be a boolean");
    }

    #[test]
    fn test_object_type_excludes_arrays() {
        assert!(check(Rule::Type(TypeTag::Object), json!([1, 2])).is_err());
        assert!(check(Rule::Type(TypeTag::Object), json!({"a": 1})).is_ok());
    }

    #[test]
    fn test_min_length_counts_characters() {
        assert!(check(Rule::MinLength(3), json!("Jo")).is_err());
        assert!(check(Rule::MinLength(3), json!("Joe")).is_ok());
        // 3 characters, 6 bytes
        assert!(check(Rule::MinLength(3), json!("ãéí")).is_ok());
    }

    #[test]
    fn test_min_length_counts_array_elements() {
        assert!(check(Rule::MinLength(2), json!([1])).is_err());
        assert!(check(Rule::MinLength(2), json!([1, 2])).is_ok());
    }

    #[test]
    fn test_min_length_ignores_values_without_length() {
        assert!(check(Rule::MinLength(5), json!(1)).is_ok());
        assert!(check(Rule::MinLength(5), json!(true)).is_ok());
        assert!(check(Rule::MinLength(5), json!({})).is_ok());
    }

    #[test]
    fn test_date_format_requires_string() {
        assert!(check(Rule::DateFormat, json!("15/03/1990")).is_ok());
        assert!(check(Rule::DateFormat, json!(15031990)).is_err());
    }

    #[test]
    fn test_enum_membership() {
        let allowed = vec!["active".to_string(), "inactive".to_string()];
        assert!(check(Rule::Enum(&allowed), json!("inactive")).is_ok());
        assert!(check(Rule::Enum(&allowed), json!("Active")).is_err());
        assert!(check(Rule::Enum(&allowed), json!(1)).is_err());
    }

    #[test]
    fn test_item_type_not_enforced_per_element() {
        let field: crate::schema::FieldSchema = serde_json::from_value(json!({
            "type": "array",
            "items": { "type": "string" }
        }))
        .unwrap();

        let record = json!({ "tags": [1, true, { "a": 1 }] });
        let schema = Schema::new().field("tags", field);
        assert!(validator::validate(&record, &schema).is_ok());
    }

    #[test]
    fn test_array_items_rejects_non_array() {
        let nested = Schema::new();
        let err = Rule::ArrayItems(&nested)
            .check("items", Some(&json!({"0": {}})))
            .unwrap_err();
        assert_eq!(err.message(), "The field items must be an array");
    }
}
