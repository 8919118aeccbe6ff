/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;

use common::{config, fixture, publication, registry_with, CONCEPTUALIZATION, SOFTWARE};
use credit_plugin::{
    ContributorMatching, ExportDocument, ExportError, Hook, HookArgs, PluginError,
};

fn export(matching: ContributorMatching) -> Result<String, PluginError> {
    let (_plugin, registry) = registry_with(config());
    let mut document = ExportDocument {
        xml: fixture("article.xml"),
        publication: publication(),
        locale: "en".to_string(),
        matching,
    };
    registry.dispatch(
        Hook::MetadataExportAugment,
        &mut HookArgs::Export(&mut document),
    )?;
    Ok(document.xml)
}

fn role_element(label: &str, uri: &str) -> String {
    format!(
        r#"<role vocab="credit" vocab-identifier="https://credit.niso.org/" vocab-term="{label}" vocab-term-identifier="{uri}">{label}</role>"#
    )
}

#[test]
fn roles_are_added_to_author_contributors() {
    let output = export(ContributorMatching::Position).unwrap();

    let ada = format!(
        "<given-names>Ada</given-names></name>\n        {}{}</contrib>",
        role_element("Conceptualization", CONCEPTUALIZATION),
        role_element("Software", SOFTWARE),
    );
    assert!(output.contains(&ada), "{output}");
    assert!(output.contains("Writing – review &amp; editing</role></contrib>"));
    assert_eq!(output.matches("<role ").count(), 3);
    // Editors are not authors.
    assert!(output.contains("<given-names>Caroline</given-names></name>\n        </contrib>"));
}

#[test]
fn document_outside_the_roles_is_unchanged() {
    let input = fixture("article.xml");
    let output = export(ContributorMatching::Position).unwrap();
    let stripped = output
        .split("<role ")
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                part
            } else {
                &part[part.find("</role>").map_or(0, |end| end + "</role>".len())..]
            }
        })
        .collect::<String>();
    assert_eq!(stripped, input);
}

#[test]
fn identifier_matching_agrees_with_position_for_aligned_exports() {
    assert_eq!(
        export(ContributorMatching::Identifier).unwrap(),
        export(ContributorMatching::Position).unwrap()
    );
}

#[test]
fn identifier_matching_survives_reordered_authors() {
    let (_plugin, registry) = registry_with(config());
    let mut publication = publication();
    publication.authors.reverse();
    let mut document = ExportDocument {
        xml: fixture("article.xml"),
        publication,
        locale: "en".to_string(),
        matching: ContributorMatching::Identifier,
    };
    registry
        .dispatch(Hook::MetadataExportAugment, &mut HookArgs::Export(&mut document))
        .unwrap();
    assert_eq!(document.xml, export(ContributorMatching::Position).unwrap());
}

#[test]
fn positional_count_mismatch_fails() {
    let (_plugin, registry) = registry_with(config());
    let mut publication = publication();
    publication.authors.pop();
    let mut document = ExportDocument {
        xml: fixture("article.xml"),
        publication,
        locale: "en".to_string(),
        matching: ContributorMatching::Position,
    };
    let err = registry
        .dispatch(Hook::MetadataExportAugment, &mut HookArgs::Export(&mut document))
        .unwrap_err();
    assert!(matches!(
        err,
        PluginError::Export(ExportError::ContributorCountMismatch {
            contributors: 3,
            authors: 2
        })
    ));
    assert_eq!(document.xml, fixture("article.xml"));
}
