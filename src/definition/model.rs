//! Forum definition data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Input type of a custom form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Email,
    Date,
    Checkbox,
}

impl FieldType {
    /// String representation of the field type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Email => "email",
            FieldType::Date => "date",
            FieldType::Checkbox => "checkbox",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "text" => Ok(FieldType::Text),
            "number" => Ok(FieldType::Number),
            "email" => Ok(FieldType::Email),
            "date" => Ok(FieldType::Date),
            "checkbox" => Ok(FieldType::Checkbox),
            _ => Err(()),
        }
    }
}

/// One field of a forum's custom form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field label.
    pub name: String,
    /// Input type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl FieldDescriptor {
    /// Create a new field descriptor.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// A forum's form definition.
#[derive(Debug, Clone)]
pub struct ForumDefinition {
    /// Unique definition ID.
    pub id: i64,
    /// Forum name. Unique across definitions.
    pub forum_name: String,
    /// Ordered form fields.
    pub fields: Vec<FieldDescriptor>,
    /// Creating user ID.
    pub created_by: i64,
    /// Creation timestamp (RFC 3339, UTC).
    pub created_at: String,
    /// Last-write timestamp (RFC 3339, UTC).
    pub updated_at: String,
}

/// Data for creating a forum definition.
#[derive(Debug, Clone)]
pub struct NewDefinition {
    /// Forum name.
    pub forum_name: String,
    /// Ordered form fields.
    pub fields: Vec<FieldDescriptor>,
    /// Creating user ID.
    pub created_by: i64,
}

impl NewDefinition {
    /// Create a new NewDefinition.
    pub fn new(forum_name: impl Into<String>, fields: Vec<FieldDescriptor>, created_by: i64) -> Self {
        Self {
            forum_name: forum_name.into(),
            fields,
            created_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_round_trip() {
        for s in ["text", "number", "email", "date", "checkbox"] {
            let ty: FieldType = s.parse().unwrap();
            assert_eq!(ty.as_str(), s);
        }
    }

    #[test]
    fn test_field_type_rejects_unknown() {
        assert!("dropdown".parse::<FieldType>().is_err());
        assert!("Text".parse::<FieldType>().is_err());
    }

    #[test]
    fn test_field_descriptor_json_uses_type_key() {
        let field = FieldDescriptor::new("Age", FieldType::Number);
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(json, r#"{"name":"Age","type":"number"}"#);
    }
}
