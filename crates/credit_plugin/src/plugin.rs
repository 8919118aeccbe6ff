/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The CRediT plugin: hook subscriptions and the article output filter.

use crate::cache::VocabularyCache;
use crate::config::CreditConfig;
use crate::error::PluginError;
use crate::form::{add_contributor_role_field, ContributorForm};
use crate::hooks::{Continuation, Hook, HookArgs, HookHandler, HookRegistry};
use crate::inject::inject;
use credit_core::{extend_author_schema, normalize_author_output, Author, Publication};
use std::sync::Arc;

pub const PLUGIN_NAME: &str = "creditplugin";
pub const PLUGIN_PATH: &str = "plugins/generic/credit";
pub const DISPLAY_NAME_KEY: &str = "plugins.generic.credit.name";
pub const DESCRIPTION_KEY: &str = "plugins.generic.credit.description";
pub const STYLESHEET_NAME: &str = "creditPlugin";
pub const ARTICLE_TEMPLATE: &str = "frontend/pages/article.tpl";

/// Values a rendered template exposes to its output filters.
#[derive(Debug, Clone, Default)]
pub struct TemplateVars {
    pub publication: Option<Publication>,
    pub locale: String,
}

/// A post-render transformation of a page.
pub trait OutputFilter: Send + Sync {
    fn name(&self) -> &str;
    fn filter(&self, html: &str, vars: &TemplateVars) -> Result<String, PluginError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    pub name: String,
    pub url: String,
    pub contexts: Vec<String>,
}

/// A template about to be displayed.
#[derive(Default)]
pub struct TemplateDisplay {
    pub template: String,
    pub stylesheets: Vec<Stylesheet>,
    pub output_filters: Vec<Arc<dyn OutputFilter>>,
}

impl TemplateDisplay {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Default::default()
        }
    }

    pub fn add_stylesheet(&mut self, stylesheet: Stylesheet) {
        if !self.stylesheets.iter().any(|s| s.name == stylesheet.name) {
            self.stylesheets.push(stylesheet);
        }
    }

    pub fn register_filter(&mut self, filter: Arc<dyn OutputFilter>) {
        self.output_filters.push(filter);
    }

    /// Run the registered output filters over the rendered page, in order.
    pub fn apply_output_filters(&self, html: &str, vars: &TemplateVars) -> Result<String, PluginError> {
        let mut output = html.to_string();
        for filter in &self.output_filters {
            log::debug!("applying output filter `{}`", filter.name());
            output = filter.filter(&output, vars)?;
        }
        Ok(output)
    }
}

/// Adds role lists to the author list of the article page.
pub struct ArticleDisplayFilter {
    vocabularies: Arc<VocabularyCache>,
}

impl ArticleDisplayFilter {
    pub fn new(vocabularies: Arc<VocabularyCache>) -> Self {
        Self { vocabularies }
    }
}

impl OutputFilter for ArticleDisplayFilter {
    fn name(&self) -> &str {
        "articleDisplayFilter"
    }

    fn filter(&self, html: &str, vars: &TemplateVars) -> Result<String, PluginError> {
        let Some(publication) = &vars.publication else {
            log::debug!("article page rendered without a publication");
            return Ok(html.to_string());
        };
        let vocabulary = self.vocabularies.get(&vars.locale)?;
        Ok(inject(html, &publication.authors, &vocabulary)?)
    }
}

pub struct CreditPlugin {
    config: CreditConfig,
    vocabularies: Arc<VocabularyCache>,
}

impl CreditPlugin {
    pub fn new(config: CreditConfig) -> Self {
        let vocabularies = Arc::new(VocabularyCache::new(config.loader()));
        Self {
            config,
            vocabularies,
        }
    }

    pub fn config(&self) -> &CreditConfig {
        &self.config
    }

    pub fn vocabularies(&self) -> &Arc<VocabularyCache> {
        &self.vocabularies
    }

    /// Subscribe to the host's hooks for the given journal.
    ///
    /// Returns `false` without subscribing when the plugin is disabled.
    /// Article pages are only filtered when `showCreditRoles` is set.
    pub fn register(self: &Arc<Self>, registry: &mut HookRegistry, context_id: Option<&str>) -> bool {
        if !self.config.enabled {
            return false;
        }

        let handler: Arc<dyn HookHandler> = self.clone();
        for hook in [
            Hook::FormInitialize,
            Hook::FormDisplay,
            Hook::FormValidate,
            Hook::FormExecute,
            Hook::SchemaExtendAuthor,
            Hook::FormConfigBefore,
            Hook::MetadataExportAugment,
            Hook::AuthorOutputMap,
        ] {
            registry.register(hook, handler.clone());
        }
        if self.config.show_credit_roles(context_id) {
            registry.register(Hook::TemplateDisplay, handler);
        }
        true
    }

    /// Run each author's stored roles through the contributor form's
    /// initialize and validate hooks, and collect the roles the vocabulary
    /// of `locale` does not know.
    ///
    /// Fails with [`PluginError::NotSubscribed`] when `registry` has no
    /// validation subscriber, rather than reporting every role as valid.
    pub fn unknown_roles<'p>(
        &self,
        registry: &HookRegistry,
        publication: &'p Publication,
        locale: &str,
    ) -> Result<Vec<(&'p Author, String)>, PluginError> {
        if !registry.is_registered(Hook::FormValidate) {
            return Err(PluginError::NotSubscribed(Hook::FormValidate));
        }
        let vocabulary = self.vocabularies.get(locale)?;

        let mut unknown = Vec::new();
        for author in &publication.authors {
            let mut form = ContributorForm::new(locale, Some(author.clone()));
            for hook in [Hook::FormInitialize, Hook::FormValidate] {
                registry.dispatch(hook, &mut HookArgs::ContributorForm(&mut form))?;
            }
            if form.is_valid() {
                continue;
            }
            unknown.extend(
                form.credit_roles
                    .into_iter()
                    .filter(|uri| !vocabulary.contains(uri))
                    .map(|uri| (author, uri)),
            );
        }
        Ok(unknown)
    }

    fn stylesheet(&self) -> Stylesheet {
        let base = self.config.base_url.trim_end_matches('/');
        Stylesheet {
            name: STYLESHEET_NAME.to_string(),
            url: format!("{base}/{PLUGIN_PATH}/styles.css"),
            contexts: vec!["frontend".to_string()],
        }
    }

    fn handle_template_display(&self, display: &mut TemplateDisplay) {
        display.add_stylesheet(self.stylesheet());
        if display.template == ARTICLE_TEMPLATE {
            display.register_filter(Arc::new(ArticleDisplayFilter::new(Arc::clone(
                &self.vocabularies,
            ))));
        }
    }
}

impl HookHandler for CreditPlugin {
    fn handle(&self, hook: Hook, args: &mut HookArgs<'_>) -> Result<Continuation, PluginError> {
        match (hook, args) {
            (Hook::FormInitialize, HookArgs::ContributorForm(form)) => form.initialize(),
            (Hook::FormDisplay, HookArgs::ContributorForm(form)) => {
                let vocabulary = self.vocabularies.get(&form.locale)?;
                form.display(&vocabulary);
            }
            (Hook::FormValidate, HookArgs::ContributorForm(form)) => {
                let vocabulary = self.vocabularies.get(&form.locale)?;
                form.validate(&vocabulary);
            }
            (Hook::FormExecute, HookArgs::ContributorForm(form)) => {
                form.execute()?;
            }
            (Hook::SchemaExtendAuthor, HookArgs::Schema(schema)) => extend_author_schema(schema),
            (Hook::TemplateDisplay, HookArgs::Template(display)) => {
                self.handle_template_display(display)
            }
            (Hook::FormConfigBefore, HookArgs::FormConfig(form)) => {
                if form.id == crate::form::CONTRIBUTOR_FORM_ID && form.context_id.is_some() {
                    let vocabulary = self.vocabularies.get(&form.locale)?;
                    add_contributor_role_field(form, &vocabulary);
                }
            }
            (Hook::MetadataExportAugment, HookArgs::Export(document)) => {
                let vocabulary = self.vocabularies.get(&document.locale)?;
                document.augment(&vocabulary)?;
            }
            (Hook::AuthorOutputMap, HookArgs::AuthorOutput(output)) => {
                normalize_author_output(output)
            }
            (hook, _) => return Err(PluginError::UnexpectedArguments(hook)),
        }
        Ok(Continuation::Continue)
    }
}
