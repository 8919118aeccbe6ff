/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a role vocabulary.
///
/// Every variant is fatal for the operation that asked for the vocabulary:
/// a vocabulary is either complete or unavailable.
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("no CRediT vocabulary found for locale `{locale}` (searched {} paths)", .searched.len())]
    NotFound {
        locale: String,
        searched: Vec<PathBuf>,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid vocabulary XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("invalid vocabulary JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("vocabulary item {index} is missing its `{attribute}` attribute")]
    MissingAttribute {
        index: usize,
        attribute: &'static str,
    },

    #[error("duplicate role URI in vocabulary: {0}")]
    DuplicateRole(String),

    #[error("vocabulary for locale `{0}` contains no roles")]
    Empty(String),

    #[error("unsupported vocabulary resource: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}
