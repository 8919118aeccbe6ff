/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Author schema extension.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Name of the author property that holds role URIs.
pub const CREDIT_ROLES_PROPERTY: &str = "creditRoles";

/// A host entity schema: a JSON-schema-like property table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitySchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub properties: IndexMap<String, Value>,
    /// Keys the host defines that are not touched here.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Declare the optional, ordered list of role URIs on the author schema.
pub fn extend_author_schema(schema: &mut EntitySchema) {
    schema.properties.insert(
        CREDIT_ROLES_PROPERTY.to_string(),
        json!({
            "type": "array",
            "validation": ["nullable"],
            "items": { "type": "string" }
        }),
    );
}

/// Ensure an author mapped for the API carries `creditRoles: []` rather
/// than `null` or nothing.
pub fn normalize_author_output(output: &mut Map<String, Value>) {
    let roles = output
        .entry(CREDIT_ROLES_PROPERTY)
        .or_insert(Value::Null);
    if roles.is_null() {
        *roles = Value::Array(Vec::new());
    }
}
