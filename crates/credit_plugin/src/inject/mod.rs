/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Role markup injection for rendered article pages.
//!
//! The article template renders authors as `<ul class="authors">` with one
//! `<li>` per author. The injector splices a role list into each of those
//! entries, just before its closing `</li>`:
//!
//! ```html
//! <li>Ada Lovelace<ul class="userGroup"><li class="creditRole">Software</li></ul></li>
//! ```
//!
//! Authors are matched to entries by position. The caller must pass them
//! in the order the page renders them; nothing in the markup allows the
//! injector to check this.

pub mod scanner;

use crate::error::InjectError;
use credit_core::{Author, RoleVocabulary};
use scanner::{find_author_list, plan_insertions, tokenize};

/// Class of the role list inserted for each author.
pub const ROLE_LIST_CLASS: &str = "userGroup";
/// Class of each role item.
pub const ROLE_ITEM_CLASS: &str = "creditRole";

/// Render one author's role list.
///
/// Roles keep the author's order. Unknown URIs are shown as-is.
pub fn render_role_list(roles: &[String], vocabulary: &RoleVocabulary) -> String {
    let mut out = format!(r#"<ul class="{ROLE_LIST_CLASS}">"#);
    for uri in roles {
        let label = vocabulary.label_or_uri(uri);
        out.push_str(&format!(
            r#"<li class="{ROLE_ITEM_CLASS}">{}</li>"#,
            html_escape::encode_quoted_attribute(label)
        ));
    }
    out.push_str("</ul>");
    out
}

/// Insert role lists into the author list of `html`.
///
/// Pages without an author list are returned unchanged. If the list has
/// more top-level entries than `authors`, nothing is returned but
/// [`InjectError::AuthorOutOfBounds`]. A list close that does not match an
/// open nested list ends the author list early; an author list that never
/// closes is injected up to the end of the page.
pub fn inject(
    html: &str,
    authors: &[Author],
    vocabulary: &RoleVocabulary,
) -> Result<String, InjectError> {
    let Some(list_start) = find_author_list(html) else {
        log::debug!("no author list in page, leaving it unchanged");
        return Ok(html.to_string());
    };

    let plan = plan_insertions(tokenize(html, list_start));
    if !plan.is_terminated() {
        log::warn!("author list is never closed, role injection stopped at end of page");
    }

    let mut out = String::with_capacity(html.len() + plan.insertions.len() * 64);
    let mut last = 0;
    for (index, &at) in plan.insertions.iter().enumerate() {
        let author = authors.get(index).ok_or(InjectError::AuthorOutOfBounds {
            index,
            available: authors.len(),
        })?;
        out.push_str(&html[last..at]);
        out.push_str(&render_role_list(&author.credit_roles, vocabulary));
        last = at;
    }
    out.push_str(&html[last..]);

    if plan.insertions.len() < authors.len() {
        log::debug!(
            "author list has {} entries for {} authors",
            plan.insertions.len(),
            authors.len()
        );
    }
    Ok(out)
}
