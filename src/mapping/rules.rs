// Rule index: which shared-content rules instantiate which template
//
// Every `content.xml` under the rules root is a rule definition. A
// `TemplateId` element anywhere inside it ties the rule's directory path
// to that template.

use super::cartridge::UsageSet;
use super::documents::{directory_components, discover_documents, load_document};
use crate::error::Result;
use crate::logging::Logger;
use crate::tree::walk_document;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Element naming the template a content item instantiates
pub const TEMPLATE_ID_ELEMENT: &str = "TemplateId";

/// Template id -> rule paths that use it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleIndex {
    entries: BTreeMap<String, UsageSet>,
}

impl RuleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `rule_path` under `template_id`, creating the entry when needed
    pub fn record(&mut self, template_id: &str, rule_path: &str) -> bool {
        self.entries
            .entry(template_id.to_string())
            .or_default()
            .insert(rule_path)
    }

    pub fn rules_for(&self, template_id: &str) -> Option<&UsageSet> {
        self.entries.get(template_id)
    }

    pub fn contains(&self, template_id: &str) -> bool {
        self.entries.contains_key(template_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &UsageSet)> {
        self.entries.iter().map(|(id, rules)| (id.as_str(), rules))
    }
}

/// Rule path of a document: its directory relative to the rules root
pub fn rule_path(document: &Path, rules_root: &Path) -> String {
    directory_components(document, rules_root).join("/")
}

/// Scan the rules root and build the index.
///
/// Unreadable documents are logged and skipped. A document that does not
/// decode aborts the scan.
pub fn build_rule_index(
    rules_root: &Path,
    document_name: &str,
    logger: &dyn Logger,
) -> Result<RuleIndex> {
    logger.info("Starting shared content scan.");
    let mut index = RuleIndex::new();

    for document in discover_documents(rules_root, document_name, logger) {
        let Some(root) = load_document(&document, logger)? else {
            continue;
        };

        let path = rule_path(&document, rules_root);
        walk_document(&root, |node| {
            if node.is_named(TEMPLATE_ID_ELEMENT) {
                let template_id = node.content();
                if index.record(&template_id, &path) {
                    logger.debug(&format!("Rule {} uses template {}", path, template_id));
                }
            }
            true
        });
    }

    logger.info(&format!(
        "Finished scanning rules: {} templates referenced.",
        index.len()
    ));
    Ok(index)
}
