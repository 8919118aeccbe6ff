/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Typed host extension points.
//!
//! The host announces named events and hands each subscriber a mutable host
//! object. Here every event is a [`Hook`] variant and every host object a
//! [`HookArgs`] variant, so handlers match on types instead of unpacking
//! positional argument arrays.

use crate::error::PluginError;
use crate::export::ExportDocument;
use crate::form::{ContributorForm, FormConfig};
use crate::plugin::TemplateDisplay;
use credit_core::EntitySchema;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    FormInitialize,
    FormDisplay,
    FormValidate,
    FormExecute,
    SchemaExtendAuthor,
    TemplateDisplay,
    FormConfigBefore,
    MetadataExportAugment,
    AuthorOutputMap,
}

impl Hook {
    pub const ALL: [Hook; 9] = [
        Hook::FormInitialize,
        Hook::FormDisplay,
        Hook::FormValidate,
        Hook::FormExecute,
        Hook::SchemaExtendAuthor,
        Hook::TemplateDisplay,
        Hook::FormConfigBefore,
        Hook::MetadataExportAugment,
        Hook::AuthorOutputMap,
    ];

    /// The event name the host uses.
    pub fn host_name(self) -> &'static str {
        match self {
            Hook::FormInitialize => "authorform::initdata",
            Hook::FormDisplay => "authorform::display",
            Hook::FormValidate => "authorform::validate",
            Hook::FormExecute => "authorform::execute",
            Hook::SchemaExtendAuthor => "Schema::get::author",
            Hook::TemplateDisplay => "TemplateManager::display",
            Hook::FormConfigBefore => "Form::config::before",
            Hook::MetadataExportAugment => "JatsExport::contributors",
            Hook::AuthorOutputMap => "maps::author::Schema",
        }
    }

    pub fn from_host_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|hook| hook.host_name() == name)
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.host_name())
    }
}

/// The host object a hook is dispatched with.
pub enum HookArgs<'a> {
    ContributorForm(&'a mut ContributorForm),
    Schema(&'a mut EntitySchema),
    Template(&'a mut TemplateDisplay),
    FormConfig(&'a mut FormConfig),
    Export(&'a mut ExportDocument),
    /// An author as mapped for the REST API.
    AuthorOutput(&'a mut Map<String, Value>),
}

/// Whether the host should go on calling later subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    Continue,
    Stop,
}

pub trait HookHandler: Send + Sync {
    fn handle(&self, hook: Hook, args: &mut HookArgs<'_>) -> Result<Continuation, PluginError>;
}

/// Subscribers per hook, called in registration order.
#[derive(Default)]
pub struct HookRegistry {
    handlers: IndexMap<Hook, Vec<Arc<dyn HookHandler>>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: Hook, handler: Arc<dyn HookHandler>) {
        self.handlers.entry(hook).or_default().push(handler);
    }

    pub fn handler_count(&self, hook: Hook) -> usize {
        self.handlers.get(&hook).map_or(0, Vec::len)
    }

    pub fn is_registered(&self, hook: Hook) -> bool {
        self.handler_count(hook) > 0
    }

    /// Hooks with at least one subscriber, in first-registration order.
    pub fn hooks(&self) -> impl Iterator<Item = Hook> + '_ {
        self.handlers.keys().copied()
    }

    /// Call the subscribers of `hook` until one asks to stop.
    pub fn dispatch(&self, hook: Hook, args: &mut HookArgs<'_>) -> Result<Continuation, PluginError> {
        for handler in self.handlers.get(&hook).into_iter().flatten() {
            if handler.handle(hook, args)? == Continuation::Stop {
                log::debug!("hook `{hook}` stopped by a subscriber");
                return Ok(Continuation::Stop);
            }
        }
        Ok(Continuation::Continue)
    }
}
