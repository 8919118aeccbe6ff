/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! CRediT roles and role identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use url::Url;

/// Normalize a role URI for lookup.
///
/// Older vocabulary releases published the role URIs under `http://`; the
/// current ones use `https://`. Both spellings of the same authority and path
/// normalize to the `https` form. Anything that is not an absolute http(s)
/// URL is returned trimmed but otherwise verbatim.
pub fn normalize_role_uri(raw: &str) -> String {
    let trimmed = raw.trim();
    match Url::parse(trimmed) {
        Ok(mut url) if matches!(url.scheme(), "http" | "https") => {
            if url.scheme() == "http" && url.set_scheme("https").is_err() {
                return trimmed.to_string();
            }
            url.into()
        }
        _ => trimmed.to_string(),
    }
}

/// A normalized role identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RoleUri(String);

impl RoleUri {
    pub fn new(raw: &str) -> Self {
        Self(normalize_role_uri(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RoleUri {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for RoleUri {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<RoleUri> for String {
    fn from(uri: RoleUri) -> Self {
        uri.0
    }
}

impl AsRef<str> for RoleUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets vocabulary maps be queried with a normalized `&str`.
impl Borrow<str> for RoleUri {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A contributor role with its locale-specific display term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// The stable role identifier.
    pub uri: RoleUri,
    /// The display term for the vocabulary's locale (e.g. "Conceptualization").
    pub label: String,
    /// Longer explanation of the role, when the resource provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Role {
    pub fn new(uri: impl Into<RoleUri>, label: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            label: label.into(),
            description: None,
        }
    }
}
