/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! CRediT plugin
//!
//! Host-facing behavior of the CRediT contributor role integration: role
//! lists injected into rendered article pages, the role selection field on
//! the contributor form, the author schema extension and `<role>` elements
//! in JATS exports. The host reaches all of it through a [`HookRegistry`].
//!
//! # Example
//!
//! ```rust
//! use credit_core::{Author, Role, RoleVocabulary};
//! use credit_plugin::inject;
//!
//! let vocabulary = RoleVocabulary::from_roles("en", [Role::new("r1", "Conceptualization")]).unwrap();
//! let authors = [Author::default().with_roles(["r1"]), Author::default()];
//!
//! let html = r#"<ul class="authors"><li>A</li><li>B</li></ul>"#;
//! let output = inject(html, &authors, &vocabulary).unwrap();
//! assert_eq!(
//!     output,
//!     r#"<ul class="authors"><li>A<ul class="userGroup"><li class="creditRole">Conceptualization</li></ul></li><li>B<ul class="userGroup"></ul></li></ul>"#
//! );
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod hooks;
pub mod inject;
pub mod plugin;

pub use cache::VocabularyCache;
pub use config::CreditConfig;
pub use error::{ConfigError, ExportError, InjectError, PluginError};
pub use export::{augment_jats, ContributorMatching, ExportDocument};
pub use form::{add_contributor_role_field, ContributorForm, FormConfig, FormField};
pub use hooks::{Continuation, Hook, HookArgs, HookHandler, HookRegistry};
pub use inject::inject;
pub use plugin::{ArticleDisplayFilter, CreditPlugin, OutputFilter, TemplateDisplay, TemplateVars};
