//! Schema types

use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Value of the `type` keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
}

impl std::fmt::Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaType::String => write!(f, "string"),
            SchemaType::Number => write!(f, "number"),
            SchemaType::Integer => write!(f, "integer"),
            SchemaType::Boolean => write!(f, "boolean"),
            SchemaType::Object => write!(f, "object"),
            SchemaType::Array => write!(f, "array"),
        }
    }
}

/// Inferred schema, limited to the keywords shared by OAS2 and OAS3
///
/// Equality is structural: property maps compare regardless of key order,
/// the same as comparing canonical serializations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schema {
    /// The open placeholder `{}` used for items of an empty list
    Empty,
    String,
    Number,
    Boolean,
    Integer,
    Array {
        items: Box<Schema>,
        max_items: Option<usize>,
    },
    Object(ObjectSchema),
    /// Union of two or more structurally distinct schemas
    OneOf(Vec<Schema>),
}

/// Shape of an object schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectSchema {
    /// Any key maps to a value matching the schema
    Open { additional_properties: Box<Schema> },
    /// Named keys, with the keys every merged sibling had listed as required
    Closed {
        properties: Option<IndexMap<String, Schema>>,
        required: Vec<String>,
    },
}

impl Schema {
    /// `{"type": "array", "items": {}, "maxItems": 0}`
    pub fn empty_array() -> Self {
        Schema::Array {
            items: Box::new(Schema::Empty),
            max_items: Some(0),
        }
    }

    /// `{"type": "array", "items": <items>}`
    pub fn array(items: Schema) -> Self {
        Schema::Array {
            items: Box::new(items),
            max_items: None,
        }
    }

    /// `{"type": "object", "additionalProperties": <schema>}`
    pub fn open_object(additional_properties: Schema) -> Self {
        Schema::Object(ObjectSchema::Open {
            additional_properties: Box::new(additional_properties),
        })
    }

    /// `{"type": "object", "properties": {...}}`
    pub fn object(properties: IndexMap<String, Schema>) -> Self {
        Schema::Object(ObjectSchema::Closed {
            properties: Some(properties),
            required: Vec::new(),
        })
    }

    /// The `type` tag, absent for `{}` and unions
    pub fn schema_type(&self) -> Option<SchemaType> {
        match self {
            Schema::Empty | Schema::OneOf(_) => None,
            Schema::String => Some(SchemaType::String),
            Schema::Number => Some(SchemaType::Number),
            Schema::Boolean => Some(SchemaType::Boolean),
            Schema::Integer => Some(SchemaType::Integer),
            Schema::Array { .. } => Some(SchemaType::Array),
            Schema::Object(_) => Some(SchemaType::Object),
        }
    }

    /// Check if this is an object schema
    pub fn is_object(&self) -> bool {
        matches!(self, Schema::Object(_))
    }

    /// Named properties of a closed object schema
    pub fn properties(&self) -> Option<&IndexMap<String, Schema>> {
        match self {
            Schema::Object(ObjectSchema::Closed { properties, .. }) => properties.as_ref(),
            _ => None,
        }
    }

    /// Get a named property
    pub fn get_property(&self, name: &str) -> Option<&Schema> {
        self.properties()?.get(name)
    }

    /// Required keys of a closed object schema
    pub fn required(&self) -> &[String] {
        match self {
            Schema::Object(ObjectSchema::Closed { required, .. }) => required,
            _ => &[],
        }
    }

    /// Check if a property is required
    pub fn is_required(&self, name: &str) -> bool {
        self.required().iter().any(|r| r == name)
    }

    /// Value schema of an open object schema
    pub fn additional_properties(&self) -> Option<&Schema> {
        match self {
            Schema::Object(ObjectSchema::Open {
                additional_properties,
            }) => Some(additional_properties),
            _ => None,
        }
    }

    /// Item schema of an array schema
    pub fn items(&self) -> Option<&Schema> {
        match self {
            Schema::Array { items, .. } => Some(items),
            _ => None,
        }
    }

    /// Members of a union
    pub fn one_of(&self) -> Option<&[Schema]> {
        match self {
            Schema::OneOf(members) => Some(members),
            _ => None,
        }
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Convert to pretty JSON string
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;

        if let Some(schema_type) = self.schema_type() {
            map.serialize_entry("type", &schema_type)?;
        }

        match self {
            Schema::Array { items, max_items } => {
                map.serialize_entry("items", items)?;
                if let Some(max_items) = max_items {
                    map.serialize_entry("maxItems", max_items)?;
                }
            }
            Schema::Object(ObjectSchema::Open {
                additional_properties,
            }) => {
                map.serialize_entry("additionalProperties", additional_properties)?;
            }
            Schema::Object(ObjectSchema::Closed {
                properties,
                required,
            }) => {
                if let Some(properties) = properties {
                    map.serialize_entry("properties", properties)?;
                }
                if !required.is_empty() {
                    map.serialize_entry("required", required)?;
                }
            }
            Schema::OneOf(members) => {
                map.serialize_entry("oneOf", members)?;
            }
            _ => {}
        }

        map.end()
    }
}
