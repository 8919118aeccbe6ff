/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Resource formats the vocabulary has been published in.

use crate::error::VocabularyError;
use crate::role::Role;
use indexmap::IndexMap;
use serde::Deserialize;

/// The JSON translation format: `{"translations": {uri: {"name": ...}}}`.
#[derive(Debug, Deserialize)]
pub struct RawTranslations {
    pub translations: IndexMap<String, RawTranslation>,
}

/// One translated role. Keys other than `name` and `description` are ignored.
#[derive(Debug, Deserialize)]
pub struct RawTranslation {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Parse the JSON translation format, preserving document order.
pub fn parse_json(json: &str) -> Result<Vec<Role>, VocabularyError> {
    let raw: RawTranslations = serde_json::from_str(json)?;
    Ok(raw
        .translations
        .into_iter()
        .map(|(uri, translation)| Role {
            description: translation.description.filter(|d| !d.trim().is_empty()),
            ..Role::new(uri, translation.name)
        })
        .collect())
}

/// Parse the XML format: `item` elements with `uri` and `term` attributes
/// inside any `credit-roles` element.
pub fn parse_xml(xml: &str) -> Result<Vec<Role>, VocabularyError> {
    let doc = roxmltree::Document::parse(xml)?;
    let mut roles = Vec::new();

    for container in doc.descendants().filter(|n| n.has_tag_name("credit-roles")) {
        for item in container.children().filter(|n| n.has_tag_name("item")) {
            let index = roles.len();
            let uri = item
                .attribute("uri")
                .ok_or(VocabularyError::MissingAttribute {
                    index,
                    attribute: "uri",
                })?;
            let term = item
                .attribute("term")
                .ok_or(VocabularyError::MissingAttribute {
                    index,
                    attribute: "term",
                })?;
            roles.push(Role::new(uri, term));
        }
    }

    Ok(roles)
}
