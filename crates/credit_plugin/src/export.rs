/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! JATS export augmentation.
//!
//! Adds a CRediT `<role>` element to each author `<contrib>` of an exported
//! article:
//!
//! ```xml
//! <role vocab="credit" vocab-identifier="https://credit.niso.org/"
//!       vocab-term="Software"
//!       vocab-term-identifier="https://credit.niso.org/contributor-roles/software/">Software</role>
//! ```
//!
//! The document is edited in place: only the role elements are added, the
//! rest of the text is kept byte for byte.

use crate::error::ExportError;
use credit_core::{normalize_role_uri, Author, Publication, RoleVocabulary};
use roxmltree::{Document, Node, ParsingOptions};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::ops::Range;

pub const CREDIT_VOCAB: &str = "credit";
pub const CREDIT_VOCAB_IDENTIFIER: &str = "https://credit.niso.org/";

/// How exported contributors are paired with authors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContributorMatching {
    /// The n-th author contributor is the n-th author. The export must list
    /// exactly the publication's authors, in the same order.
    #[default]
    Position,
    /// A contributor's `id` attribute names the author's id. Contributors
    /// without a matching author are left alone.
    Identifier,
}

/// An export job as the host hands it to augmenters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportDocument {
    pub xml: String,
    pub publication: Publication,
    pub locale: String,
    pub matching: ContributorMatching,
}

/// Render the role elements for one author.
pub fn render_roles(author: &Author, vocabulary: &RoleVocabulary) -> String {
    let mut out = String::new();
    for uri in &author.credit_roles {
        let label = vocabulary.label_or_uri(uri);
        let identifier = normalize_role_uri(uri);
        out.push_str(&format!(
            r#"<role vocab="{CREDIT_VOCAB}" vocab-identifier="{CREDIT_VOCAB_IDENTIFIER}" vocab-term="{}" vocab-term-identifier="{}">{}</role>"#,
            html_escape::encode_quoted_attribute(label),
            html_escape::encode_quoted_attribute(&identifier),
            html_escape::encode_text(label),
        ));
    }
    out
}

fn is_author_contrib(node: &Node) -> bool {
    node.has_tag_name("contrib")
        && node
            .attribute("contrib-type")
            .map_or(true, |kind| kind == "author")
}

/// An edit replacing `range` of the source with `text`.
struct Edit {
    range: Range<usize>,
    text: String,
}

/// Where the roles of `node` go: before its end tag, or in place of the
/// `/>` of an empty-element tag.
fn contrib_edit(xml: &str, node: &Node, roles: String) -> Edit {
    let range = node.range();
    let source = &xml[range.clone()];
    if let Some(end_tag) = source.rfind("</") {
        let at = range.start + end_tag;
        return Edit {
            range: at..at,
            text: roles,
        };
    }

    // `<contrib .../>`
    let name_end = source[1..]
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .map_or(source.len() - 2, |i| i + 1);
    let tag_name = &source[1..name_end];
    Edit {
        range: range.end - 2..range.end,
        text: format!(">{roles}</{tag_name}>"),
    }
}

fn matched_authors<'a>(
    contribs: &[Node],
    authors: &'a [Author],
    matching: ContributorMatching,
) -> Result<Vec<Option<&'a Author>>, ExportError> {
    match matching {
        ContributorMatching::Position => {
            if contribs.len() != authors.len() {
                return Err(ExportError::ContributorCountMismatch {
                    contributors: contribs.len(),
                    authors: authors.len(),
                });
            }
            Ok(authors.iter().map(Some).collect())
        }
        ContributorMatching::Identifier => {
            let by_id: HashMap<&str, &Author> = authors
                .iter()
                .filter_map(|author| author.id.as_deref().map(|id| (id, author)))
                .collect();
            let mut seen = HashSet::new();
            let mut matched = Vec::with_capacity(contribs.len());
            for contrib in contribs {
                let id = contrib.attribute("id");
                let author = id.and_then(|id| by_id.get(id).copied());
                match (id, author) {
                    (Some(id), Some(_)) if !seen.insert(id) => {
                        return Err(ExportError::DuplicateContributor(id.to_string()));
                    }
                    (_, Some(_)) => {}
                    (id, None) => log::warn!(
                        "exported contributor {} has no matching author, skipping",
                        id.unwrap_or("(without id)")
                    ),
                }
                matched.push(author);
            }
            Ok(matched)
        }
    }
}

/// Add CRediT role elements to the author contributors of a JATS document.
pub fn augment_jats(
    xml: &str,
    authors: &[Author],
    vocabulary: &RoleVocabulary,
    matching: ContributorMatching,
) -> Result<String, ExportError> {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    let doc = Document::parse_with_options(xml, options)?;

    let contribs: Vec<Node> = doc.descendants().filter(is_author_contrib).collect();
    let matched = matched_authors(&contribs, authors, matching)?;

    let mut edits: Vec<Edit> = contribs
        .iter()
        .zip(matched)
        .filter_map(|(contrib, author)| {
            let author = author?;
            if author.credit_roles.is_empty() {
                return None;
            }
            Some(contrib_edit(xml, contrib, render_roles(author, vocabulary)))
        })
        .collect();
    edits.sort_by_key(|edit| edit.range.start);
    log::debug!("adding CRediT roles to {} contributors", edits.len());

    let added: usize = edits.iter().map(|edit| edit.text.len()).sum();
    let mut out = String::with_capacity(xml.len() + added);
    let mut last = 0;
    for edit in edits {
        out.push_str(&xml[last..edit.range.start]);
        out.push_str(&edit.text);
        last = edit.range.end;
    }
    out.push_str(&xml[last..]);
    Ok(out)
}

impl ExportDocument {
    /// Augment this document in place.
    pub fn augment(&mut self, vocabulary: &RoleVocabulary) -> Result<(), ExportError> {
        self.xml = augment_jats(&self.xml, &self.publication.authors, vocabulary, self.matching)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credit_core::Role;

    const SOFTWARE: &str = "https://credit.niso.org/contributor-roles/software/";

    fn vocabulary() -> RoleVocabulary {
        RoleVocabulary::from_roles("en", [Role::new(SOFTWARE, "Software")]).unwrap()
    }

    fn role(label: &str, uri: &str) -> String {
        format!(
            r#"<role vocab="credit" vocab-identifier="https://credit.niso.org/" vocab-term="{label}" vocab-term-identifier="{uri}">{label}</role>"#
        )
    }

    #[test]
    fn positional_matching_inserts_before_end_tag() {
        let xml = r#"<contrib-group><contrib contrib-type="author"><name>A</name></contrib><contrib contrib-type="author"><name>B</name></contrib></contrib-group>"#;
        let authors = [
            Author::default().with_roles(["http://credit.niso.org/contributor-roles/software/"]),
            Author::default(),
        ];
        let out = augment_jats(xml, &authors, &vocabulary(), ContributorMatching::Position).unwrap();
        assert_eq!(
            out,
            format!(
                r#"<contrib-group><contrib contrib-type="author"><name>A</name>{}</contrib><contrib contrib-type="author"><name>B</name></contrib></contrib-group>"#,
                role("Software", SOFTWARE)
            )
        );
    }

    #[test]
    fn editors_are_not_authors() {
        let xml = r#"<article><contrib contrib-type="editor"><name>E</name></contrib><contrib><name>A</name></contrib></article>"#;
        let authors = [Author::default().with_roles([SOFTWARE])];
        let out = augment_jats(xml, &authors, &vocabulary(), ContributorMatching::Position).unwrap();
        assert!(out.starts_with(r#"<article><contrib contrib-type="editor"><name>E</name></contrib>"#));
        assert!(out.contains(&format!("<name>A</name>{}</contrib>", role("Software", SOFTWARE))));
    }

    #[test]
    fn count_mismatch_fails() {
        let xml = r#"<contrib-group><contrib contrib-type="author"/></contrib-group>"#;
        let err = augment_jats(xml, &[], &vocabulary(), ContributorMatching::Position).unwrap_err();
        assert!(matches!(
            err,
            ExportError::ContributorCountMismatch {
                contributors: 1,
                authors: 0
            }
        ));
    }

    #[test]
    fn empty_element_contrib_is_expanded() {
        let xml = r#"<contrib-group><contrib contrib-type="author" id="a1"/></contrib-group>"#;
        let authors = [Author::new("a1").with_roles(["unlisted"])];
        let out = augment_jats(xml, &authors, &vocabulary(), ContributorMatching::Identifier).unwrap();
        assert_eq!(
            out,
            format!(
                r#"<contrib-group><contrib contrib-type="author" id="a1">{}</contrib></contrib-group>"#,
                role("unlisted", "unlisted")
            )
        );
    }

    #[test]
    fn identifier_matching_ignores_order() {
        let xml = r#"<g><contrib id="b"><name>B</name></contrib><contrib id="x"/><contrib id="a"><name>A</name></contrib></g>"#;
        let authors = [
            Author::new("a").with_roles([SOFTWARE]),
            Author::new("b"),
        ];
        let out = augment_jats(xml, &authors, &vocabulary(), ContributorMatching::Identifier).unwrap();
        assert_eq!(
            out,
            format!(
                r#"<g><contrib id="b"><name>B</name></contrib><contrib id="x"/><contrib id="a"><name>A</name>{}</contrib></g>"#,
                role("Software", SOFTWARE)
            )
        );
    }

    #[test]
    fn duplicate_identifier_fails() {
        let xml = r#"<g><contrib id="a"/><contrib id="a"/></g>"#;
        let authors = [Author::new("a")];
        assert!(matches!(
            augment_jats(xml, &authors, &vocabulary(), ContributorMatching::Identifier),
            Err(ExportError::DuplicateContributor(id)) if id == "a"
        ));
    }

    #[test]
    fn malformed_xml_is_reported() {
        assert!(matches!(
            augment_jats("<contrib>", &[], &vocabulary(), ContributorMatching::Position),
            Err(ExportError::Xml(_))
        ));
    }
}
