/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::hooks::Hook;
use credit_core::VocabularyError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the role markup injector.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InjectError {
    /// The rendered author list has more entries than authors were supplied.
    #[error("author list entry {index} has no matching author ({available} authors supplied)")]
    AuthorOutOfBounds { index: usize, available: usize },
}

/// Failures of the JATS export augmentation.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid export XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("export lists {contributors} author contributors but {authors} authors were supplied")]
    ContributorCountMismatch { contributors: usize, authors: usize },

    #[error("author `{0}` matches more than one exported contributor")]
    DuplicateContributor(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Error)]
pub enum PluginError {
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),

    #[error(transparent)]
    Inject(#[from] InjectError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid value for `{field}`: {}", .messages.join("; "))]
    Validation { field: String, messages: Vec<String> },

    #[error("the contributor form has no author to update")]
    MissingAuthor,

    #[error("hook `{0}` was dispatched with arguments of the wrong kind")]
    UnexpectedArguments(Hook),

    #[error("nothing is subscribed to hook `{0}`; is the plugin disabled?")]
    NotSubscribed(Hook),
}
