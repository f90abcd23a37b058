// Cartridge template definitions (`template.xml`)

use super::properties::Properties;
use crate::error::Result;
use crate::logging::Logger;
use crate::mapping::TemplateRecord;
use serde::Deserialize;
use std::path::Path;

/// Definition document inside every template directory
pub const TEMPLATE_DOCUMENT: &str = "template.xml";

/// Description value that defers to the locale bundle
pub const EXTERNAL_DESCRIPTION: &str = "${template.description}";

/// Locale key holding the template description
pub const DESCRIPTION_KEY: &str = "template.description";

/// Used when the locale bundle cannot supply a description
pub const NO_DESCRIPTION_SPECIFIED: &str = "No description specified.";

/// Used when the definition leaves the description blank
pub const NO_DESCRIPTION_PROVIDED: &str = "No description provided.";

#[derive(Debug, Default, Deserialize)]
struct ContentTemplate {
    #[serde(rename = "@id", default)]
    id: String,
    #[serde(rename = "Description", default)]
    description: String,
}

/// Load the id and description of the template in `templates_root/name`.
///
/// Fails only when `template.xml` is missing or unparsable; a blank id or
/// description falls back instead.
pub fn load_template(
    templates_root: &Path,
    name: &str,
    locale: &str,
    logger: &dyn Logger,
) -> Result<TemplateRecord> {
    logger.debug(&format!("Starting work on {}", name));

    let template_dir = templates_root.join(name);
    let text = std::fs::read_to_string(template_dir.join(TEMPLATE_DOCUMENT))?;
    let definition: ContentTemplate = quick_xml::de::from_str(&text)?;

    let id = if definition.id.trim().is_empty() {
        logger.warn(&format!(
            "Cartridge ID not defined in template. Cartridge name: {}",
            name
        ));
        name.to_string()
    } else {
        definition.id
    };

    let declared = definition.description.trim();
    let description = if declared == EXTERNAL_DESCRIPTION {
        locale_description(&template_dir, locale, logger)
    } else if declared.is_empty() {
        logger.warn(&format!(
            "Cartridge description not defined in template. Cartridge name: {}",
            name
        ));
        NO_DESCRIPTION_PROVIDED.to_string()
    } else {
        declared.to_string()
    };

    Ok(TemplateRecord { id, description })
}

/// Description from `locales/Resources_<locale>.properties`.
///
/// Never fails: a missing bundle, key or value yields
/// [`NO_DESCRIPTION_SPECIFIED`].
pub fn locale_description(template_dir: &Path, locale: &str, logger: &dyn Logger) -> String {
    let bundle = template_dir
        .join("locales")
        .join(format!("Resources_{}.properties", locale));

    let text = match std::fs::read_to_string(&bundle) {
        Ok(text) => text,
        Err(e) => {
            logger.error(&format!(
                "Locale file for description doesn't exist for template in {}: {}",
                template_dir.display(),
                e
            ));
            return NO_DESCRIPTION_SPECIFIED.to_string();
        }
    };

    match Properties::parse(&text).get(DESCRIPTION_KEY) {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => {
            logger.error(&format!(
                "Description doesn't exist for template in {}",
                template_dir.display()
            ));
            NO_DESCRIPTION_SPECIFIED.to_string()
        }
    }
}
