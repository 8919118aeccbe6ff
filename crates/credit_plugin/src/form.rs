/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Contributor form augmentation.
//!
//! Two host form APIs are covered: the component form config built before
//! display (`FormConfig`), and the older author form with its
//! initialize/display/validate/execute lifecycle (`ContributorForm`).

use crate::error::PluginError;
use credit_core::schema::CREDIT_ROLES_PROPERTY;
use credit_core::{normalize_role_uri, Author, RoleVocabulary};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Id of the host's contributor form.
pub const CONTRIBUTOR_FORM_ID: &str = "contributor";

pub const FIELD_LABEL_KEY: &str = "plugins.generic.credit.contributorRoles";
pub const FIELD_DESCRIPTION_KEY: &str = "plugins.generic.credit.contributorRoles.description";
pub const INVALID_ROLE_KEY: &str = "plugins.generic.credit.invalidCreditRole";

/// One selectable option of a multi-select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

/// Role options in vocabulary order.
pub fn role_options(vocabulary: &RoleVocabulary) -> Vec<FieldOption> {
    vocabulary
        .iter()
        .map(|role| FieldOption {
            value: role.uri.to_string(),
            label: role.label.clone(),
        })
        .collect()
}

/// Field descriptors of a component form. Labels are translation keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "component", rename_all = "kebab-case")]
pub enum FormField {
    FieldText {
        name: String,
        label: String,
        #[serde(default)]
        value: String,
    },
    FieldOptions {
        name: String,
        #[serde(rename = "type")]
        input_type: String,
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        options: Vec<FieldOption>,
        #[serde(default)]
        value: Vec<String>,
    },
}

impl FormField {
    pub fn name(&self) -> &str {
        match self {
            FormField::FieldText { name, .. } | FormField::FieldOptions { name, .. } => name,
        }
    }
}

/// A component form as the host is about to display it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    pub id: String,
    /// The journal the request belongs to; `None` at site level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_id: Option<String>,
    pub locale: String,
    /// The author being edited, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(default)]
    pub fields: Vec<FormField>,
}

impl FormConfig {
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn add_field(&mut self, field: FormField) {
        self.fields.push(field);
    }
}

/// The author's stored roles in the form option values take.
fn normalized_roles(author: &Author) -> Vec<String> {
    author
        .credit_roles
        .iter()
        .map(|uri| normalize_role_uri(uri))
        .collect()
}

/// Append the role selection field to the contributor form.
///
/// Returns whether a field was added. Other forms, requests without a
/// journal context and forms that already carry the field are left alone.
pub fn add_contributor_role_field(form: &mut FormConfig, vocabulary: &RoleVocabulary) -> bool {
    if form.id != CONTRIBUTOR_FORM_ID || form.context_id.is_none() {
        return false;
    }
    if form.field(CREDIT_ROLES_PROPERTY).is_some() {
        log::debug!("contributor form already has a `{CREDIT_ROLES_PROPERTY}` field");
        return false;
    }

    let value = form
        .author
        .as_ref()
        .map(normalized_roles)
        .unwrap_or_default();
    form.add_field(FormField::FieldOptions {
        name: CREDIT_ROLES_PROPERTY.to_string(),
        input_type: "checkbox".to_string(),
        label: FIELD_LABEL_KEY.to_string(),
        description: Some(FIELD_DESCRIPTION_KEY.to_string()),
        options: role_options(vocabulary),
        value,
    });
    true
}

/// The older author edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributorForm {
    pub locale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    /// Role URIs currently held by the form.
    #[serde(default)]
    pub credit_roles: Vec<String>,
    /// Role URIs submitted by the user, not yet read into the form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted: Option<Vec<String>>,
    /// Options offered to the template.
    #[serde(default)]
    pub role_options: Vec<FieldOption>,
    /// Field errors, as translation keys.
    #[serde(default)]
    pub errors: IndexMap<String, Vec<String>>,
}

impl ContributorForm {
    pub fn new(locale: impl Into<String>, author: Option<Author>) -> Self {
        Self {
            locale: locale.into(),
            author,
            ..Default::default()
        }
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Load the author's roles into the form.
    pub fn initialize(&mut self) {
        self.credit_roles = self
            .author
            .as_ref()
            .map(normalized_roles)
            .unwrap_or_default();
    }

    /// Offer the vocabulary to the template.
    pub fn display(&mut self, vocabulary: &RoleVocabulary) {
        self.role_options = role_options(vocabulary);
    }

    /// Read the submitted roles and check each against the vocabulary.
    ///
    /// Every unknown URI records an error; the form stays invalid until
    /// the submission is corrected.
    pub fn validate(&mut self, vocabulary: &RoleVocabulary) -> bool {
        if let Some(submitted) = self.submitted.take() {
            self.credit_roles = submitted;
        }
        self.errors.shift_remove(CREDIT_ROLES_PROPERTY);

        let invalid: Vec<String> = self
            .credit_roles
            .iter()
            .filter(|uri| !vocabulary.contains(uri))
            .cloned()
            .collect();
        for uri in &invalid {
            log::debug!("rejecting unknown CRediT role `{uri}`");
            self.add_error(CREDIT_ROLES_PROPERTY, INVALID_ROLE_KEY);
        }
        invalid.is_empty()
    }

    /// Write the form's roles back to the author, normalized.
    pub fn execute(&mut self) -> Result<&Author, PluginError> {
        if let Some(messages) = self.errors.get(CREDIT_ROLES_PROPERTY) {
            return Err(PluginError::Validation {
                field: CREDIT_ROLES_PROPERTY.to_string(),
                messages: messages.clone(),
            });
        }
        let author = self.author.as_mut().ok_or(PluginError::MissingAuthor)?;
        author.credit_roles = self
            .credit_roles
            .iter()
            .map(|uri| normalize_role_uri(uri))
            .collect();
        Ok(author)
    }
}
