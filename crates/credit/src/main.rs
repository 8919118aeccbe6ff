/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use clap::{Parser, Subcommand, ValueEnum};
use credit_core::{EntitySchema, Publication, RoleVocabulary};
use credit_plugin::plugin::ARTICLE_TEMPLATE;
use credit_plugin::{
    ContributorMatching, CreditConfig, CreditPlugin, ExportDocument, Hook,
    HookArgs, HookRegistry, TemplateDisplay, TemplateVars,
};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about = "CRediT contributor roles for articles and exports", long_about = None)]
struct Cli {
    /// Path to a credit.toml (defaults to ./credit.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the role vocabulary resources
    #[arg(long, global = true)]
    resources: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the contributor roles of a locale
    Roles {
        #[arg(short, long, default_value = "en")]
        locale: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add role lists to the author list of a rendered article page
    Inject {
        /// Rendered article page
        #[arg(index = 1)]
        page: PathBuf,

        /// Publication JSON with the authors in display order
        #[arg(index = 2)]
        publication: PathBuf,

        #[arg(short, long, default_value = "en")]
        locale: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Add CRediT role elements to a JATS article
    Export {
        #[arg(index = 1)]
        article: PathBuf,

        #[arg(index = 2)]
        publication: PathBuf,

        /// How contributors are paired with authors
        #[arg(short = 'm', long = "match", value_enum, default_value_t = Matching::Position)]
        matching: Matching,

        #[arg(short, long, default_value = "en")]
        locale: String,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check that every author role is a known CRediT role
    Validate {
        publication: PathBuf,

        #[arg(short, long, default_value = "en")]
        locale: String,
    },
    /// Print the author schema with the creditRoles property
    Schema,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum Matching {
    Position,
    Identifier,
}

impl From<Matching> for ContributorMatching {
    fn from(matching: Matching) -> Self {
        match matching {
            Matching::Position => ContributorMatching::Position,
            Matching::Identifier => ContributorMatching::Identifier,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => CreditConfig::load(path)?,
        None => CreditConfig::load_from_project()?.unwrap_or_default(),
    };
    if let Some(resources) = cli.resources {
        config.resources_dir = resources;
    }
    log::debug!("vocabulary resources in {}", config.resources_dir.display());

    let plugin = Arc::new(CreditPlugin::new(config));
    let mut registry = HookRegistry::new();
    if !plugin.register(&mut registry, None) {
        log::warn!("plugin is disabled in the configuration, output is unchanged");
    }

    match cli.command {
        Commands::Roles { locale, json } => {
            let vocabulary = plugin.vocabularies().get(&locale)?;
            print_roles(&vocabulary, json)?;
        }
        Commands::Inject {
            page,
            publication,
            locale,
            output,
        } => {
            let html = read(&page)?;
            let publication = load_publication(&publication)?;

            let mut display = TemplateDisplay::new(ARTICLE_TEMPLATE);
            registry.dispatch(Hook::TemplateDisplay, &mut HookArgs::Template(&mut display))?;
            let vars = TemplateVars {
                publication: Some(publication),
                locale,
            };
            let rendered = display.apply_output_filters(&html, &vars)?;
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Export {
            article,
            publication,
            matching,
            locale,
            output,
        } => {
            let mut document = ExportDocument {
                xml: read(&article)?,
                publication: load_publication(&publication)?,
                locale,
                matching: matching.into(),
            };
            registry.dispatch(
                Hook::MetadataExportAugment,
                &mut HookArgs::Export(&mut document),
            )?;
            write_output(output.as_deref(), &document.xml)?;
        }
        Commands::Validate {
            publication,
            locale,
        } => {
            let publication = load_publication(&publication)?;
            let unknown = plugin.unknown_roles(&registry, &publication, &locale)?;
            for (author, uri) in &unknown {
                eprintln!("{}: unknown CRediT role {}", author.display_name(), uri);
            }
            if !unknown.is_empty() {
                return Err(format!(
                    "{} unknown roles among {} authors",
                    unknown.len(),
                    publication.authors.len()
                )
                .into());
            }
            let vocabulary = plugin.vocabularies().get(&locale)?;
            println!(
                "All roles of {} authors are valid ({} locale).",
                publication.authors.len(),
                vocabulary.locale()
            );
        }
        Commands::Schema => {
            let mut schema = EntitySchema {
                title: Some("author".to_string()),
                ..Default::default()
            };
            registry.dispatch(Hook::SchemaExtendAuthor, &mut HookArgs::Schema(&mut schema))?;
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }
    Ok(())
}

fn read(path: &Path) -> Result<String, Box<dyn Error>> {
    fs::read_to_string(path).map_err(|e| format!("reading {}: {}", path.display(), e).into())
}

fn load_publication(path: &Path) -> Result<Publication, Box<dyn Error>> {
    Publication::from_json_str(&read(path)?)
        .map_err(|e| format!("parsing {}: {}", path.display(), e).into())
}

fn write_output(path: Option<&Path>, content: &str) -> Result<(), Box<dyn Error>> {
    match path {
        Some(path) => fs::write(path, content)
            .map_err(|e| format!("writing {}: {}", path.display(), e).into()),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}

fn print_roles(vocabulary: &RoleVocabulary, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        let roles: Vec<_> = vocabulary.iter().collect();
        println!("{}", serde_json::to_string_pretty(&roles)?);
        return Ok(());
    }

    println!("CRediT roles ({}):", vocabulary.locale());
    for role in vocabulary.iter() {
        println!("  {:<28} {}", role.label, role.uri);
    }
    Ok(())
}
