//! Schema type definitions
//!
//! Supported value types:
//! - string: UTF-8 string
//! - number: any JSON number (integer or float)
//! - boolean: true/false
//! - array: JSON array
//! - object: JSON object (never an array)
//!
//! A `Schema` is an ordered field table. Declaration order is evaluation
//! order, so it is preserved both when built in code and when loaded from JSON.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::rules::Rule;

/// Expected runtime kind of a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl TypeTag {
    /// Returns the type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Number => "number",
            TypeTag::Boolean => "boolean",
            TypeTag::Array => "array",
            TypeTag::Object => "object",
        }
    }

    /// Returns true if `value` is of this kind.
    ///
    /// `null` matches no tag; callers skip type checks for null values.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            TypeTag::String => value.is_string(),
            TypeTag::Number => value.is_number(),
            TypeTag::Boolean => value.is_boolean(),
            TypeTag::Array => value.is_array(),
            TypeTag::Object => value.is_object(),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Named string formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Calendar date written as `DD/MM/YYYY`
    Date,
}

/// Element schema for arrays of objects
///
/// `item_type` is structural metadata only: it is checked when the schema is
/// loaded (`properties` require `object`) but elements are never tested
/// against it. Each element is validated against `properties` alone, and an
/// element that is not an object simply has no fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsSchema {
    /// Element type, not enforced per element
    #[serde(rename = "type")]
    pub item_type: TypeTag,
    /// Field table applied to every element
    #[serde(default, skip_serializing_if = "Schema::is_empty")]
    pub properties: Schema,
}

/// Rule configuration for a single field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    /// Whether the field must be present and non-empty
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<TypeTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
    /// Allowed values, reported in this order
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<ItemsSchema>,
}

impl FieldSchema {
    /// Field with no rules at all
    pub fn any() -> Self {
        Self::default()
    }

    fn typed(field_type: TypeTag, required: bool) -> Self {
        Self {
            required,
            field_type: Some(field_type),
            ..Self::default()
        }
    }

    /// Create a required string field
    pub fn required_string() -> Self {
        Self::typed(TypeTag::String, true)
    }

    /// Create an optional string field
    pub fn optional_string() -> Self {
        Self::typed(TypeTag::String, false)
    }

    /// Create a required number field
    pub fn required_number() -> Self {
        Self::typed(TypeTag::Number, true)
    }

    /// Create an optional number field
    pub fn optional_number() -> Self {
        Self::typed(TypeTag::Number, false)
    }

    /// Create a required boolean field
    pub fn required_boolean() -> Self {
        Self::typed(TypeTag::Boolean, true)
    }

    /// Create an optional boolean field
    pub fn optional_boolean() -> Self {
        Self::typed(TypeTag::Boolean, false)
    }

    /// Create a required object field
    pub fn required_object() -> Self {
        Self::typed(TypeTag::Object, true)
    }

    /// Create an optional object field
    pub fn optional_object() -> Self {
        Self::typed(TypeTag::Object, false)
    }

    /// Create a required array of objects validated against `properties`
    pub fn required_array_of(properties: Schema) -> Self {
        Self::typed(TypeTag::Array, true).items(properties)
    }

    /// Create an optional array of objects validated against `properties`
    pub fn optional_array_of(properties: Schema) -> Self {
        Self::typed(TypeTag::Array, false).items(properties)
    }

    /// Sets the minimum length.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn min_length(mut self, n: usize) -> Self {
        assert!(n > 0, "minLength must be a positive integer");
        self.min_length = Some(n);
        self
    }

    /// Requires a `DD/MM/YYYY` calendar date
    pub fn date(mut self) -> Self {
        self.format = Some(Format::Date);
        self
    }

    /// Restricts the value to the given set.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: Vec<String> = values.into_iter().map(Into::into).collect();
        assert!(!allowed.is_empty(), "enum must list at least one value");
        self.allowed = Some(allowed);
        self
    }

    /// Validates every array element as an object against `properties`
    pub fn items(mut self, properties: Schema) -> Self {
        self.items = Some(ItemsSchema {
            item_type: TypeTag::Object,
            properties,
        });
        self
    }

    /// Returns the configured rules in evaluation order.
    ///
    /// Order is fixed: Required, Type, MinLength, DateFormat, Enum, ArrayItems.
    pub fn rules(&self) -> Vec<Rule<'_>> {
        let mut rules = Vec::with_capacity(6);
        if self.required {
            rules.push(Rule::Required);
        }
        if let Some(tag) = self.field_type {
            rules.push(Rule::Type(tag));
        }
        if let Some(n) = self.min_length {
            rules.push(Rule::MinLength(n));
        }
        if let Some(Format::Date) = self.format {
            rules.push(Rule::DateFormat);
        }
        if let Some(allowed) = &self.allowed {
            rules.push(Rule::Enum(allowed));
        }
        if let Some(items) = &self.items {
            rules.push(Rule::ArrayItems(&items.properties));
        }
        rules
    }

    fn check_structure(&self, path: &str) -> Result<(), String> {
        if self.min_length == Some(0) {
            return Err(format!("field '{}': minLength must be positive", path));
        }
        if matches!(&self.allowed, Some(values) if values.is_empty()) {
            return Err(format!("field '{}': enum must list at least one value", path));
        }
        if let Some(items) = &self.items {
            if items.item_type != TypeTag::Object && !items.properties.is_empty() {
                return Err(format!(
                    "field '{}': items with properties must have type object, got {}",
                    path, items.item_type
                ));
            }
            items.properties.check_structure_at(path)?;
        }
        Ok(())
    }
}

/// Ordered mapping of field name to field schema
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: Vec<(String, FieldSchema)>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field.
    ///
    /// # Panics
    ///
    /// Panics if the field is already declared.
    pub fn field(mut self, name: impl Into<String>, field: FieldSchema) -> Self {
        let name = name.into();
        assert!(
            self.get(&name).is_none(),
            "field '{}' declared twice in schema",
            name
        );
        self.fields.push((name, field));
        self
    }

    /// Looks up a field by name
    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.fields
            .iter()
            .find(|(declared, _)| declared == name)
            .map(|(_, field)| field)
    }

    /// Iterates fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSchema)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates the schema structure itself (not a record)
    pub fn check_structure(&self) -> Result<(), String> {
        self.check_structure_at("")
    }

    fn check_structure_at(&self, prefix: &str) -> Result<(), String> {
        for (name, field) in self.iter() {
            let path = if prefix.is_empty() {
                name.to_string()
            } else {
                format!("{}.{}", prefix, name)
            };
            field.check_structure(&path)?;
        }
        Ok(())
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, field) in &self.fields {
            map.serialize_entry(name, field)?;
        }
        map.end()
    }
}

struct SchemaVisitor;

impl<'de> Visitor<'de> for SchemaVisitor {
    type Value = Schema;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of field name to field schema")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Schema, A::Error> {
        let mut fields: Vec<(String, FieldSchema)> =
            Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, field)) = access.next_entry::<String, FieldSchema>()? {
            if fields.iter().any(|(declared, _)| *declared == name) {
                return Err(serde::de::Error::custom(format!(
                    "field '{}' declared twice",
                    name
                )));
            }
            fields.push((name, field));
        }
        Ok(Schema { fields })
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SchemaVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn line_items() -> Schema {
        Schema::new()
            .field("name", FieldSchema::required_string())
            .field("price", FieldSchema::required_number())
    }

    #[test]
    fn test_declaration_order_preserved() {
        let schema = Schema::new()
            .field("zeta", FieldSchema::any())
            .field("alpha", FieldSchema::any())
            .field("mid", FieldSchema::any());

        let names: Vec<_> = schema.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_json_order_preserved() {
        let schema: Schema = serde_json::from_str(
            r#"{"zeta": {"required": true}, "alpha": {"type": "number"}, "mid": {}}"#,
        )
        .unwrap();

        let names: Vec<_> = schema.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_value_order_preserved() {
        let value = json!({
            "title": { "required": true, "type": "string" },
            "price": { "required": true, "type": "number" },
            "brand": {}
        });
        let schema: Schema = serde_json::from_value(value).unwrap();

        let names: Vec<_> = schema.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["title", "price", "brand"]);
    }

    #[test]
    #[should_panic(expected = "declared twice")]
    fn test_duplicate_field_panics() {
        let _ = Schema::new()
            .field("name", FieldSchema::any())
            .field("name", FieldSchema::any());
    }

    #[test]
    fn test_duplicate_json_field_rejected() {
        let result: Result<Schema, _> =
            serde_json::from_str(r#"{"name": {}, "name": {"required": true}}"#);
        assert!(result.unwrap_err().to_string().contains("declared twice"));
    }

    #[test]
    fn test_field_schema_json_names() {
        let field: FieldSchema = serde_json::from_value(json!({
            "required": true,
            "type": "array",
            "minLength": 1,
            "items": {
                "type": "object",
                "properties": {
                    "name": { "required": true, "type": "string" }
                }
            }
        }))
        .unwrap();

        assert!(field.required);
        assert_eq!(field.field_type, Some(TypeTag::Array));
        assert_eq!(field.min_length, Some(1));
        let items = field.items.unwrap();
        assert_eq!(items.item_type, TypeTag::Object);
        assert_eq!(items.properties.len(), 1);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result: Result<FieldSchema, _> =
            serde_json::from_value(json!({ "type": "string", "format": "email" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_type_rejected() {
        let result: Result<FieldSchema, _> = serde_json::from_value(json!({ "type": "int" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_roundtrips_through_json() {
        let schema = Schema::new()
            .field("status", FieldSchema::optional_string().one_of(["active", "inactive"]))
            .field("items", FieldSchema::optional_array_of(line_items()));

        let text = serde_json::to_string(&schema).unwrap();
        let back: Schema = serde_json::from_str(&text).unwrap();
        assert_eq!(schema, back);
    }

    #[test]
    fn test_rules_follow_priority_order() {
        let field = FieldSchema {
            required: true,
            field_type: Some(TypeTag::String),
            min_length: Some(2),
            format: Some(Format::Date),
            allowed: Some(vec!["a".into()]),
            items: Some(ItemsSchema {
                item_type: TypeTag::Object,
                properties: Schema::new(),
            }),
        };

        let kinds: Vec<_> = field.rules().iter().map(Rule::kind).collect();
        assert_eq!(
            kinds,
            vec!["required", "type", "minLength", "format", "enum", "items"]
        );
    }

    #[test]
    fn test_empty_field_has_no_rules() {
        assert!(FieldSchema::any().rules().is_empty());
    }

    #[test]
    fn test_structure_rejects_zero_min_length() {
        let mut field = FieldSchema::optional_string();
        field.min_length = Some(0);
        let schema = Schema::new().field("name", field);

        let err = schema.check_structure().unwrap_err();
        assert!(err.contains("name"));
        assert!(err.contains("minLength"));
    }

    #[test]
    fn test_structure_reports_nested_path() {
        let mut bad = FieldSchema::optional_string();
        bad.allowed = Some(Vec::new());
        let schema = Schema::new().field(
            "contacts",
            FieldSchema::optional_array_of(Schema::new().field("kind", bad)),
        );

        let err = schema.check_structure().unwrap_err();
        assert!(err.contains("contacts.kind"));
    }

    #[test]
    fn test_structure_rejects_non_object_items_with_properties() {
        let field = FieldSchema {
            items: Some(ItemsSchema {
                item_type: TypeTag::String,
                properties: line_items(),
            }),
            ..FieldSchema::default()
        };
        let schema = Schema::new().field("tags", field);
        assert!(schema.check_structure().is_err());
    }

    #[test]
    fn test_type_tag_matching() {
        assert!(TypeTag::Object.matches(&json!({})));
        assert!(!TypeTag::Object.matches(&json!([])));
        assert!(TypeTag::Array.matches(&json!([])));
        assert!(TypeTag::Number.matches(&json!(1.5)));
        assert!(!TypeTag::Number.matches(&json!("1")));
        assert!(!TypeTag::String.matches(&Value::Null));
    }
}
