// Site and page usage of a single cartridge

use super::cartridge::CartridgeUsage;
use super::documents::{directory_components, discover_documents, load_document};
use super::rules::TEMPLATE_ID_ELEMENT;
use crate::error::Result;
use crate::logging::Logger;
use crate::tree::walk_document;
use std::path::Path;

/// Element holding a free-text property value
pub const STRING_ELEMENT: &str = "String";

/// Site and page a pages-root document belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    pub site: String,
    pub page: String,
}

impl PageLocation {
    /// Derive the location from the document path.
    ///
    /// The first directory below the pages root is the site, the rest of the
    /// directories form the page path. Documents sitting directly in the
    /// pages root have no site.
    pub fn from_path(document: &Path, pages_root: &Path) -> Option<Self> {
        let mut parts = directory_components(document, pages_root).into_iter();
        let site = parts.next()?;
        let page = parts.collect::<Vec<_>>().join("/");
        Some(Self { site, page })
    }
}

/// Matches the elements of one document against one cartridge
pub struct UsageMatcher<'a> {
    template_id: &'a str,
    rule_references: Vec<String>,
}

impl<'a> UsageMatcher<'a> {
    pub fn new(cartridge: &'a CartridgeUsage, rule_reference_prefix: &str) -> Self {
        let rule_references = cartridge
            .rules()
            .iter()
            .map(|rule| format!("{}{}", rule_reference_prefix, rule))
            .collect();
        Self {
            template_id: cartridge.id(),
            rule_references,
        }
    }

    /// Whether an element with this name and content points at the cartridge
    pub fn matches(&self, name: &str, content: &str) -> bool {
        match name {
            TEMPLATE_ID_ELEMENT => content == self.template_id,
            STRING_ELEMENT => self.rule_references.iter().any(|r| r == content),
            _ => false,
        }
    }
}

/// Fill in the sites and pages that reference `cartridge`.
///
/// A page references a cartridge directly through a `TemplateId` element,
/// or indirectly through a `String` element naming one of the cartridge's
/// rules. Unreadable documents are skipped; decode failures abort.
pub fn resolve_site_page_usage(
    cartridge: &mut CartridgeUsage,
    pages_root: &Path,
    document_name: &str,
    rule_reference_prefix: &str,
    logger: &dyn Logger,
) -> Result<()> {
    logger.debug(&format!(
        "Starting site and page usage scan for {}",
        cartridge.id()
    ));

    for document in discover_documents(pages_root, document_name, logger) {
        let Some(location) = PageLocation::from_path(&document, pages_root) else {
            logger.debug(&format!(
                "Skipping {} outside of any site",
                document.display()
            ));
            continue;
        };

        let Some(root) = load_document(&document, logger)? else {
            continue;
        };

        let mut referenced = false;
        {
            let matcher = UsageMatcher::new(cartridge, rule_reference_prefix);
            walk_document(&root, |node| {
                if !referenced && matcher.matches(node.name(), &node.content()) {
                    referenced = true;
                }
                true
            });
        }

        if referenced {
            logger.debug(&format!(
                "Found template {} in {} which means it was in site {}",
                cartridge.id(),
                document.display(),
                location.site
            ));
            cartridge.add_usage(&location.site, &location.page);
        }
    }

    Ok(())
}
