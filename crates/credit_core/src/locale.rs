/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Locale validation and fallback.
//!
//! Locale identifiers arrive from the host in either `en_US` or `en-US`
//! spelling. They are canonicalized to BCP 47 style (`en-US`) before they
//! are checked against the set of locales the installation supports.

use serde::{Deserialize, Serialize};

/// The locale every lookup ultimately falls back to.
pub const DEFAULT_LOCALE: &str = "en";

/// Canonicalize a locale identifier, or `None` if it is malformed.
///
/// The language subtag is lowercased, two-letter region subtags are
/// uppercased and four-letter script subtags are titlecased.
pub fn canonicalize(locale: &str) -> Option<String> {
    let mut parts = locale.trim().split(['-', '_']);
    let language = parts.next()?;
    if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let mut canonical = language.to_ascii_lowercase();
    for subtag in parts {
        if !(2..=8).contains(&subtag.len()) || !subtag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        canonical.push('-');
        match subtag.len() {
            2 => canonical.push_str(&subtag.to_ascii_uppercase()),
            4 => {
                let (head, tail) = subtag.split_at(1);
                canonical.push_str(&head.to_ascii_uppercase());
                canonical.push_str(&tail.to_ascii_lowercase());
            }
            _ => canonical.push_str(&subtag.to_ascii_lowercase()),
        }
    }
    Some(canonical)
}

/// The set of locales an installation accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownLocales {
    locales: Vec<String>,
    default: String,
}

impl Default for KnownLocales {
    fn default() -> Self {
        Self::new([DEFAULT_LOCALE], DEFAULT_LOCALE)
    }
}

impl KnownLocales {
    /// Build a locale set. The default locale is always a member; entries
    /// that fail to canonicalize are dropped.
    pub fn new<I, S>(locales: I, default: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let default = canonicalize(default).unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        let mut known = vec![default.clone()];
        for locale in locales {
            match canonicalize(locale.as_ref()) {
                Some(canonical) if !known.contains(&canonical) => known.push(canonical),
                Some(_) => {}
                None => log::warn!("ignoring malformed locale `{}`", locale.as_ref()),
            }
        }
        Self {
            locales: known,
            default,
        }
    }

    pub fn default_locale(&self) -> &str {
        &self.default
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(String::as_str)
    }

    pub fn is_valid(&self, locale: &str) -> bool {
        canonicalize(locale).is_some_and(|canonical| self.locales.contains(&canonical))
    }

    /// Return the canonical form of `locale` if it is known, else its base
    /// language if that is known, else the default.
    pub fn coerce(&self, locale: &str) -> String {
        let Some(canonical) = canonicalize(locale) else {
            log::debug!("locale `{}` is malformed, using `{}`", locale, self.default);
            return self.default.clone();
        };
        if self.locales.contains(&canonical) {
            return canonical;
        }
        if let Some((base, _)) = canonical.split_once('-') {
            if self.locales.iter().any(|l| l == base) {
                log::debug!("locale `{}` is not supported, using `{}`", locale, base);
                return base.to_string();
            }
        }
        log::debug!("locale `{}` is not supported, using `{}`", locale, self.default);
        self.default.clone()
    }

    /// Locales to try for `locale`, most specific first: the coerced
    /// locale, its base language for regional variants, then the default.
    pub fn fallback_chain(&self, locale: &str) -> Vec<String> {
        let coerced = self.coerce(locale);
        let mut chain = vec![coerced.clone()];
        if let Some((base, _)) = coerced.split_once('-') {
            if !chain.iter().any(|l| l == base) {
                chain.push(base.to_string());
            }
        }
        if !chain.contains(&self.default) {
            chain.push(self.default.clone());
        }
        chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_host_spellings() {
        assert_eq!(canonicalize("en_US").as_deref(), Some("en-US"));
        assert_eq!(canonicalize("pt-br").as_deref(), Some("pt-BR"));
        assert_eq!(canonicalize("sr_latn").as_deref(), Some("sr-Latn"));
        assert_eq!(canonicalize("DE").as_deref(), Some("de"));
    }

    #[test]
    fn rejects_malformed_locales() {
        assert_eq!(canonicalize(""), None);
        assert_eq!(canonicalize("english"), None);
        assert_eq!(canonicalize("en-"), None);
        assert_eq!(canonicalize("../etc"), None);
    }

    #[test]
    fn unknown_locales_coerce_to_default() {
        let known = KnownLocales::new(["de", "fr-CA"], "en");
        assert_eq!(known.coerce("fr_CA"), "fr-CA");
        assert_eq!(known.coerce("es"), "en");
        assert_eq!(known.coerce("not a locale"), "en");
        assert!(known.is_valid("en"));
        assert!(!known.is_valid("es"));
    }

    #[test]
    fn regional_locale_falls_back_to_known_base_language() {
        let known = KnownLocales::new(["de", "fr", "pt-BR"], "en");
        assert_eq!(known.coerce("de_DE"), "de");
        assert_eq!(known.coerce("fr-CA"), "fr");
        assert_eq!(known.fallback_chain("de_AT"), ["de", "en"]);
        // Neither pt-PT nor pt is known.
        assert_eq!(known.coerce("pt_PT"), "en");
        assert_eq!(known.coerce("sr_Latn_RS"), "en");
    }

    #[test]
    fn fallback_chain_includes_base_language() {
        let known = KnownLocales::new(["pt-BR"], "en");
        assert_eq!(known.fallback_chain("pt_BR"), ["pt-BR", "pt", "en"]);
        assert_eq!(known.fallback_chain("en"), ["en"]);
        assert_eq!(known.fallback_chain("xx"), ["en"]);
    }
}
