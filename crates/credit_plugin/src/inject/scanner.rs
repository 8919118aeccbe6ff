/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Depth-tracking scan over the author list.
//!
//! The scan only looks at three kinds of tags: `</li>`, list starts
//! (`<ul ...>`, `<ol ...>`) and list ends (`</ul>`, `</ol>`). Everything else
//! in the page is opaque text.

use regex::Regex;
use std::sync::LazyLock;

static AUTHORS_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(?i:ul|ol)\s(?:[^>]*\s)?class\s*=\s*["']authors["'][^>]*>"#)
        .expect("authors marker pattern is valid")
});

static LIST_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<item></(?i:li)\s*>)|(?P<open><(?i:ul|ol)(?:\s[^>]*)?>)|(?P<close></(?i:ul|ol)\s*>)",
    )
    .expect("list token pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `</li>`
    ItemClose,
    /// `<ul ...>` or `<ol ...>`
    ListOpen,
    /// `</ul>` or `</ol>`
    ListClose,
}

/// A list tag and its byte span in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }
}

/// Byte offset just past the author list's start tag, if the page has one.
pub fn find_author_list(html: &str) -> Option<usize> {
    AUTHORS_MARKER.find(html).map(|m| m.end())
}

/// List tokens in `html` starting at byte offset `from`.
pub fn tokenize(html: &str, from: usize) -> impl Iterator<Item = Token> + '_ {
    LIST_TOKEN.captures_iter(&html[from..]).filter_map(move |caps| {
        let (kind, m) = if let Some(m) = caps.name("item") {
            (TokenKind::ItemClose, m)
        } else if let Some(m) = caps.name("open") {
            (TokenKind::ListOpen, m)
        } else {
            (TokenKind::ListClose, caps.name("close")?)
        };
        Some(Token::new(kind, from + m.start(), from + m.end()))
    })
}

/// What a single token means for the author list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent {
    /// Nothing to do.
    Pass,
    /// A top-level entry ends here; `entry` counts from zero.
    EntryEnd { entry: usize },
    /// The author list itself closed.
    ListEnd,
}

/// The author-list automaton: one depth counter, three token kinds.
///
/// Depth starts at 1 (inside the author list). Only `</li>` at depth 1
/// ends an author entry; entries of nested lists are ignored. The list
/// close that brings depth to 0 ends the author list, even when it is a
/// stray `</ul>` inside an entry. A finished scanner ignores further tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthScanner {
    depth: usize,
    entries: usize,
}

impl Default for DepthScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl DepthScanner {
    pub fn new() -> Self {
        Self {
            depth: 1,
            entries: 0,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_finished(&self) -> bool {
        self.depth == 0
    }

    pub fn feed(&mut self, token: Token) -> ScanEvent {
        if self.is_finished() {
            return ScanEvent::Pass;
        }
        match token.kind {
            TokenKind::ListOpen => {
                self.depth += 1;
                ScanEvent::Pass
            }
            TokenKind::ListClose => {
                self.depth -= 1;
                if self.depth == 0 {
                    ScanEvent::ListEnd
                } else {
                    ScanEvent::Pass
                }
            }
            TokenKind::ItemClose if self.depth == 1 => {
                let entry = self.entries;
                self.entries += 1;
                ScanEvent::EntryEnd { entry }
            }
            TokenKind::ItemClose => ScanEvent::Pass,
        }
    }
}

/// The edits a scan produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanPlan {
    /// Offsets of the `</li>` tags that end top-level entries, in order.
    pub insertions: Vec<usize>,
    /// Offset just past the author list's end tag; `None` when the page
    /// ended first.
    pub end: Option<usize>,
}

impl ScanPlan {
    pub fn is_terminated(&self) -> bool {
        self.end.is_some()
    }
}

/// Run the automaton over a token stream until the author list closes.
///
/// If the tokens run out first, the insertions planned so far are kept.
pub fn plan_insertions<I>(tokens: I) -> ScanPlan
where
    I: IntoIterator<Item = Token>,
{
    let mut scanner = DepthScanner::new();
    let mut plan = ScanPlan::default();

    for token in tokens {
        match scanner.feed(token) {
            ScanEvent::Pass => {}
            ScanEvent::EntryEnd { .. } => plan.insertions.push(token.start),
            ScanEvent::ListEnd => {
                plan.end = Some(token.end);
                break;
            }
        }
    }
    plan
}
