// Template engine for the HTML report

use crate::error::Result;
use crate::mapping::{CartridgeUsage, MappingResult};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tera::{Context, Tera, Value};

/// Template engine wrapping Tera with the report template and filters
pub struct TemplateEngine {
    tera: Tera,
}

/// Headline numbers shown above the table
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReportStats {
    pub cartridges: usize,
    pub used: usize,
    pub rules: usize,
    pub skipped: usize,
}

impl ReportStats {
    pub fn from_result(result: &MappingResult) -> Self {
        Self {
            cartridges: result.cartridges.len(),
            used: result.cartridges.iter().filter(|c| c.is_used()).count(),
            rules: result
                .rule_index
                .iter()
                .flat_map(|(_, rules)| rules.iter())
                .collect::<HashSet<_>>()
                .len(),
            skipped: result.failed_templates.len(),
        }
    }
}

impl TemplateEngine {
    /// Create a new template engine with the embedded report template
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_template("index.html", include_str!("../../templates/index.html.tera"))?;

        tera.register_filter("pluralize", pluralize);
        tera.register_filter("slugify", slugify_filter);

        Ok(Self { tera })
    }

    /// Render the cartridge table
    pub fn render_index(&self, result: &MappingResult, title: &str) -> Result<String> {
        let cartridges: Vec<&CartridgeUsage> = result.cartridges.iter().collect();

        let mut context = Context::new();
        context.insert("title", title);
        context.insert("stats", &ReportStats::from_result(result));
        context.insert("cartridges", &cartridges);

        Ok(self.tera.render("index.html", &context)?)
    }
}

/// Pluralize a word based on count
fn pluralize(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let count = value.as_u64().unwrap_or(0);
    let singular = args
        .get("singular")
        .and_then(|v| v.as_str())
        .unwrap_or("item");
    let default_plural = format!("{}s", singular);
    let plural = args
        .get("plural")
        .and_then(|v| v.as_str())
        .unwrap_or(&default_plural);

    if count == 1 {
        Ok(Value::String(format!("{} {}", count, singular)))
    } else {
        Ok(Value::String(format!("{} {}", count, plural)))
    }
}

fn slugify_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value.as_str().unwrap_or("");
    Ok(Value::String(slugify(s)))
}

/// Convert text to URL-friendly slug
pub fn slugify(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
