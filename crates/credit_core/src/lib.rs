/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! CRediT core types.
//!
//! This crate holds the data model shared by the CRediT integration: the
//! role vocabulary (role URI to display label, per locale), the author
//! records that carry role assignments, and the author schema extension.
//!
//! # Example
//!
//! ```rust
//! use credit_core::{Author, RoleVocabulary};
//!
//! let xml = r#"<credit-roles>
//!   <item uri="https://credit.niso.org/contributor-roles/conceptualization/" term="Conceptualization"/>
//! </credit-roles>"#;
//! let vocabulary = RoleVocabulary::from_xml_str("en", xml).unwrap();
//!
//! let author = Author::default()
//!     .with_roles(["http://credit.niso.org/contributor-roles/conceptualization/"]);
//! let labels: Vec<&str> = author
//!     .credit_roles
//!     .iter()
//!     .map(|uri| vocabulary.label_or_uri(uri))
//!     .collect();
//! assert_eq!(labels, ["Conceptualization"]);
//! ```

pub mod author;
pub mod error;
pub mod locale;
pub mod role;
pub mod schema;
pub mod vocabulary;

pub use author::{Author, Publication};
pub use error::VocabularyError;
pub use locale::{KnownLocales, DEFAULT_LOCALE};
pub use role::{normalize_role_uri, Role, RoleUri};
pub use schema::{extend_author_schema, normalize_author_output, EntitySchema};
pub use vocabulary::{RoleVocabulary, VocabularyLoader};
