//! Write-payload validation.
//!
//! # Responsibilities
//! - Shape-check create/update bodies before they reach the store
//! - Report every violated field rule, not just the first
//!
//! # Design Decisions
//! - Rules are a fixed, ordered table: field name + expected JSON type
//! - Deliberately permissive beyond types: no range, emptiness, or enum
//!   checks (a zero price or empty name passes the gate)
//! - Pure function: serde_json::Value → Result<ProductDraft, Vec<Violation>>

use serde::Serialize;
use serde_json::Value;

use crate::products::model::ProductDraft;

/// Expected JSON type of a payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldType {
    String,
    Number,
    Boolean,
}

impl FieldType {
    fn name(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Number => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
        }
    }
}

/// Field rules, checked in this order.
const SCHEMA: &[(&str, FieldType)] = &[
    ("name", FieldType::String),
    ("description", FieldType::String),
    ("price", FieldType::Number),
    ("category", FieldType::String),
    ("inStock", FieldType::Boolean),
];

/// A single violated field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub expected: &'static str,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field '{}' must be a {}", self.field, self.expected)
    }
}

/// Shape-check a raw JSON payload against the product schema.
///
/// Collects every violation; a missing field counts the same as a
/// wrongly-typed one. Unknown extra fields are ignored.
pub fn validate_payload(payload: &Value) -> Result<ProductDraft, Vec<Violation>> {
    let mut violations = Vec::new();

    for (field, expected) in SCHEMA {
        if !payload.get(field).is_some_and(|v| expected.accepts(v)) {
            violations.push(Violation {
                field,
                expected: expected.name(),
            });
        }
    }

    if !violations.is_empty() {
        return Err(violations);
    }

    Ok(ProductDraft {
        name: payload["name"].as_str().unwrap_or_default().to_string(),
        description: payload["description"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        price: payload["price"].as_f64().unwrap_or_default(),
        category: payload["category"].as_str().unwrap_or_default().to_string(),
        in_stock: payload["inStock"].as_bool().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "name": "Pen",
            "description": "Blue ink",
            "price": 1.5,
            "category": "office",
            "inStock": true
        })
    }

    #[test]
    fn test_valid_payload_passes() {
        let draft = validate_payload(&valid_payload()).unwrap();
        assert_eq!(draft.name, "Pen");
        assert_eq!(draft.price, 1.5);
        assert!(draft.in_stock);
    }

    #[test]
    fn test_price_as_string_rejected() {
        let mut payload = valid_payload();
        payload["price"] = json!("1.50");

        let violations = validate_payload(&payload).unwrap_err();
        assert_eq!(
            violations,
            vec![Violation {
                field: "price",
                expected: "number"
            }]
        );
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("inStock");

        let violations = validate_payload(&payload).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "inStock");
    }

    #[test]
    fn test_all_violations_reported_in_schema_order() {
        let violations = validate_payload(&json!({})).unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec!["name", "description", "price", "category", "inStock"]
        );
    }

    #[test]
    fn test_integer_price_accepted() {
        let mut payload = valid_payload();
        payload["price"] = json!(3);
        let draft = validate_payload(&payload).unwrap();
        assert_eq!(draft.price, 3.0);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let mut payload = valid_payload();
        payload["color"] = json!("blue");
        assert!(validate_payload(&payload).is_ok());
    }

    #[test]
    fn test_permissive_beyond_types() {
        // Empty name and negative price still pass the type gate
        let payload = json!({
            "name": "",
            "description": "",
            "price": -5,
            "category": "",
            "inStock": false
        });
        assert!(validate_payload(&payload).is_ok());
    }
}
