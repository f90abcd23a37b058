// Cartridge usage mapping over an extracted application

pub mod cartridge;
pub mod documents;
pub mod rules;
pub mod usage;

pub use cartridge::*;
pub use rules::*;
pub use usage::*;

use crate::catalog::{enumerate_templates, load_template};
use crate::config::ApplicationConfig;
use crate::error::{Error, Result};
use crate::logging::Logger;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Result of mapping an application
#[derive(Debug)]
pub struct MappingResult {
    /// One record per template that loaded, in template order
    pub cartridges: Vec<CartridgeUsage>,
    /// Template id -> rule paths, as found under the rules root
    pub rule_index: RuleIndex,
    /// Templates left out of the report (name -> error message)
    pub failed_templates: Vec<(String, String)>,
}

impl MappingResult {
    pub fn unused(&self) -> impl Iterator<Item = &CartridgeUsage> {
        self.cartridges.iter().filter(|c| !c.is_used())
    }
}

/// Runs the mapping pipeline: templates, rule index, site/page usage
pub struct Mapper<'a> {
    config: ApplicationConfig,
    logger: &'a dyn Logger,
    progress: bool,
}

impl<'a> Mapper<'a> {
    pub fn new(config: ApplicationConfig, logger: &'a dyn Logger) -> Self {
        Self {
            config,
            logger,
            progress: false,
        }
    }

    /// Show a progress bar while resolving usage
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Map every template of the application rooted at `app_root`.
    ///
    /// A template that fails to load is reported and left out. A content
    /// document that cannot be decoded aborts the whole run.
    pub fn map(&self, app_root: &Path) -> Result<MappingResult> {
        if !app_root.is_dir() {
            return Err(Error::PathNotFound(app_root.to_path_buf()));
        }

        let templates_root = self.config.templates_root(app_root);
        let rules_root = self.config.rules_root(app_root);
        let pages_root = self.config.pages_root(app_root);

        // Step 1: Enumerate templates
        let names = enumerate_templates(&templates_root, self.logger)?;
        self.logger.info(&format!("Found {} templates.", names.len()));

        // Step 2: Build the rule index
        let rule_index = build_rule_index(&rules_root, &self.config.document_name, self.logger)?;

        // Step 3: Resolve usage per template
        let progress = self.progress_bar(names.len());
        let mut cartridges = Vec::new();
        let mut failed_templates = Vec::new();

        for name in &names {
            if let Some(ref pb) = progress {
                pb.set_message(name.clone());
                pb.inc(1);
            }

            let template = match load_template(
                &templates_root,
                name,
                &self.config.locale,
                self.logger,
            ) {
                Ok(template) => template,
                Err(e) => {
                    self.logger
                        .error(&format!("Couldn't read cartridge {}: {}", name, e));
                    failed_templates.push((name.clone(), e.to_string()));
                    continue;
                }
            };

            let rules = rule_index
                .rules_for(&template.id)
                .or_else(|| rule_index.rules_for(name))
                .cloned()
                .unwrap_or_default();

            let mut cartridge = CartridgeUsage::new(template, rules);
            resolve_site_page_usage(
                &mut cartridge,
                &pages_root,
                &self.config.document_name,
                &self.config.rule_reference_prefix,
                self.logger,
            )?;
            cartridges.push(cartridge);
        }

        if let Some(pb) = progress {
            pb.finish_with_message("Mapping complete");
        }

        self.logger.info(&format!(
            "Mapped {} cartridges ({} skipped).",
            cartridges.len(),
            failed_templates.len()
        ));

        Ok(MappingResult {
            cartridges,
            rule_index,
            failed_templates,
        })
    }

    fn progress_bar(&self, len: usize) -> Option<ProgressBar> {
        if !self.progress {
            return None;
        }

        let pb = ProgressBar::new(len as u64);
        if let Ok(style) =
            ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        Some(pb)
    }
}
