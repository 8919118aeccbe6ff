/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use credit_core::Publication;
use credit_plugin::{CreditConfig, CreditPlugin, HookRegistry};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const CONCEPTUALIZATION: &str = "https://credit.niso.org/contributor-roles/conceptualization/";
pub const SOFTWARE: &str = "https://credit.niso.org/contributor-roles/software/";

pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

pub fn fixture(name: &str) -> String {
    let path = workspace_root().join("tests/fixtures").join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("fixture {}: {e}", path.display()))
}

pub fn publication() -> Publication {
    Publication::from_json_str(&fixture("publication.json")).expect("publication fixture should parse")
}

/// Plugin configuration pointing at the bundled vocabulary resources.
pub fn config() -> CreditConfig {
    CreditConfig {
        resources_dir: workspace_root().join("resources"),
        base_url: "https://journal.example.org".to_string(),
        ..Default::default()
    }
}

/// A registry with the plugin subscribed for journal `journal`.
pub fn registry_with(config: CreditConfig) -> (Arc<CreditPlugin>, HookRegistry) {
    let plugin = Arc::new(CreditPlugin::new(config));
    let mut registry = HookRegistry::new();
    plugin.register(&mut registry, Some("journal"));
    (plugin, registry)
}
