/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! CRediT role vocabularies.
//!
//! A vocabulary maps role URIs to the display terms of one locale. It is
//! loaded from a static resource directory laid out as:
//!
//! ```text
//! resources/
//!   translations/credit-roles-{locale}.json   (preferred)
//!   translations/credit-roles-{locale}.xml
//!   jats-schematrons/credit-roles.xml         (English reference table)
//! ```

pub mod raw;

use crate::error::VocabularyError;
use crate::locale::KnownLocales;
use crate::role::{normalize_role_uri, Role, RoleUri};
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Role URI to role mapping for a single locale, in resource order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleVocabulary {
    locale: String,
    roles: IndexMap<RoleUri, Role>,
}

impl RoleVocabulary {
    /// Build a vocabulary, rejecting duplicate (normalized) URIs.
    pub fn from_roles<I>(locale: &str, roles: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = Role>,
    {
        let mut map = IndexMap::new();
        for role in roles {
            if map.contains_key(&role.uri) {
                return Err(VocabularyError::DuplicateRole(role.uri.into()));
            }
            map.insert(role.uri.clone(), role);
        }
        Ok(Self {
            locale: locale.to_string(),
            roles: map,
        })
    }

    pub fn from_xml_str(locale: &str, xml: &str) -> Result<Self, VocabularyError> {
        Self::from_roles(locale, raw::parse_xml(xml)?)
    }

    pub fn from_json_str(locale: &str, json: &str) -> Result<Self, VocabularyError> {
        Self::from_roles(locale, raw::parse_json(json)?)
    }

    /// Load a vocabulary file, choosing the format from its extension.
    pub fn from_file(locale: &str, path: &Path) -> Result<Self, VocabularyError> {
        let content = fs::read_to_string(path).map_err(|source| VocabularyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let vocabulary = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(locale, &content)?,
            Some("xml") => Self::from_xml_str(locale, &content)?,
            _ => return Err(VocabularyError::UnsupportedFormat(path.to_path_buf())),
        };
        if vocabulary.is_empty() {
            return Err(VocabularyError::Empty(locale.to_string()));
        }
        Ok(vocabulary)
    }

    /// The locale of the resource this vocabulary was read from.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Roles in resource order.
    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.roles.values()
    }

    /// Look up a role; `uri` may use either scheme spelling.
    pub fn get(&self, uri: &str) -> Option<&Role> {
        self.roles.get(normalize_role_uri(uri).as_str())
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.get(uri).is_some()
    }

    pub fn label(&self, uri: &str) -> Option<&str> {
        self.get(uri).map(|role| role.label.as_str())
    }

    /// The display term for `uri`, or `uri` itself when it is not known.
    pub fn label_or_uri<'a>(&'a self, uri: &'a str) -> &'a str {
        self.label(uri).unwrap_or(uri)
    }
}

/// Finds and loads vocabulary resources for a locale.
#[derive(Debug, Clone)]
pub struct VocabularyLoader {
    resources_dir: PathBuf,
    locales: KnownLocales,
}

impl VocabularyLoader {
    pub fn new(resources_dir: impl Into<PathBuf>, locales: KnownLocales) -> Self {
        Self {
            resources_dir: resources_dir.into(),
            locales,
        }
    }

    pub fn locales(&self) -> &KnownLocales {
        &self.locales
    }

    pub fn resources_dir(&self) -> &Path {
        &self.resources_dir
    }

    /// Candidate resources for `locale`, in the order they are tried.
    pub fn resource_candidates(&self, locale: &str) -> Vec<(String, PathBuf)> {
        let translations = self.resources_dir.join("translations");
        let mut candidates = Vec::new();
        for candidate in self.locales.fallback_chain(locale) {
            for ext in ["json", "xml"] {
                let path = translations.join(format!("credit-roles-{candidate}.{ext}"));
                candidates.push((candidate.clone(), path));
            }
        }
        candidates.push((
            self.locales.default_locale().to_string(),
            self.resources_dir
                .join("jats-schematrons")
                .join("credit-roles.xml"),
        ));
        candidates
    }

    /// Load the vocabulary for `locale`, falling back to the default locale.
    ///
    /// Unsupported locales are coerced first: a regional variant to its
    /// known base language, anything else to the default. The first
    /// resource that exists is used; a resource that exists but does not
    /// parse is an error rather than a reason to keep searching.
    pub fn load(&self, locale: &str) -> Result<RoleVocabulary, VocabularyError> {
        let candidates = self.resource_candidates(locale);
        for (candidate, path) in &candidates {
            if path.is_file() {
                log::debug!(
                    "loading CRediT vocabulary for `{}` from {}",
                    candidate,
                    path.display()
                );
                return RoleVocabulary::from_file(candidate, path);
            }
        }

        Err(VocabularyError::NotFound {
            locale: self.locales.coerce(locale),
            searched: candidates.into_iter().map(|(_, path)| path).collect(),
        })
    }
}
