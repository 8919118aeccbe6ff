/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Process-lifetime vocabulary cache.

use credit_core::{RoleVocabulary, VocabularyError, VocabularyLoader};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Loads each locale's vocabulary once and shares it afterwards.
///
/// Entries are keyed by the coerced locale, so `de_DE` shares the entry of
/// a supported `de` and every other unsupported locale shares the default
/// locale's entry. Failed loads are not cached.
#[derive(Debug)]
pub struct VocabularyCache {
    loader: VocabularyLoader,
    entries: RwLock<HashMap<String, Arc<RoleVocabulary>>>,
}

impl VocabularyCache {
    pub fn new(loader: VocabularyLoader) -> Self {
        Self {
            loader,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn loader(&self) -> &VocabularyLoader {
        &self.loader
    }

    pub fn get(&self, locale: &str) -> Result<Arc<RoleVocabulary>, VocabularyError> {
        let key = self.loader.locales().coerce(locale);
        if let Some(vocabulary) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(Arc::clone(vocabulary));
        }

        let loaded = Arc::new(self.loader.load(&key)?);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(entries.entry(key).or_insert(loaded)))
    }

    /// Number of locales currently cached.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
