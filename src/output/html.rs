// Report writer
//
// Writes the mapping result to disk: index.html for the HTML report,
// cartridges.json for the JSON export.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::mapping::MappingResult;
use crate::output::templates::TemplateEngine;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for report generation
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Output directory
    pub output_dir: PathBuf,
    /// Page title
    pub title: String,
    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("cartridgemapper-report"),
            title: "Endeca Cartridge Mapper".to_string(),
            format: OutputFormat::Html,
        }
    }
}

/// Writes reports in the configured format
pub struct ReportGenerator {
    config: ReportConfig,
    template_engine: TemplateEngine,
}

impl ReportGenerator {
    /// Create a new report generator
    pub fn new(config: ReportConfig) -> Result<Self> {
        let template_engine = TemplateEngine::new()?;
        Ok(Self {
            config,
            template_engine,
        })
    }

    /// Write the report for `result`
    pub fn generate(&self, result: &MappingResult) -> Result<GenerationReport> {
        fs::create_dir_all(&self.config.output_dir)?;

        let path = match self.config.format {
            OutputFormat::Html => self.generate_html(result)?,
            OutputFormat::Json => self.generate_json(result)?,
        };

        Ok(GenerationReport {
            path,
            cartridges: result.cartridges.len(),
            skipped: result.failed_templates.len(),
        })
    }

    fn generate_html(&self, result: &MappingResult) -> Result<PathBuf> {
        let html = self
            .template_engine
            .render_index(result, &self.config.title)?;

        let path = self.config.output_dir.join("index.html");
        fs::write(&path, html)?;

        Ok(path)
    }

    fn generate_json(&self, result: &MappingResult) -> Result<PathBuf> {
        let json = serde_json::to_string_pretty(&result.cartridges)?;

        let path = self.config.output_dir.join("cartridges.json");
        fs::write(&path, json)?;

        Ok(path)
    }

    /// Get the output directory
    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }
}

/// Report of what was generated
#[derive(Debug)]
pub struct GenerationReport {
    pub path: PathBuf,
    pub cartridges: usize,
    pub skipped: usize,
}

impl GenerationReport {
    pub fn summary(&self) -> String {
        format!(
            "Reported {} cartridges ({} skipped) in {}",
            self.cartridges,
            self.skipped,
            self.path.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{CartridgeUsage, RuleIndex, TemplateRecord, UsageSet};
    use tempfile::TempDir;

    fn sample_result() -> MappingResult {
        let mut cartridge = CartridgeUsage::new(
            TemplateRecord {
                id: "cart1".to_string(),
                description: "Promo slot".to_string(),
            },
            ["promoA"].into_iter().collect::<UsageSet>(),
        );
        cartridge.add_usage("siteX", "home");

        MappingResult {
            cartridges: vec![cartridge],
            rule_index: RuleIndex::new(),
            failed_templates: vec![],
        }
    }

    #[test]
    fn test_report_config_default() {
        let config = ReportConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("cartridgemapper-report"));
        assert_eq!(config.format, OutputFormat::Html);
    }

    #[test]
    fn test_generate_html() {
        let dir = TempDir::new().unwrap();
        let config = ReportConfig {
            output_dir: dir.path().join("report"),
            ..Default::default()
        };

        let generator = ReportGenerator::new(config).unwrap();
        let report = generator.generate(&sample_result()).unwrap();

        assert_eq!(report.path, dir.path().join("report/index.html"));
        let html = fs::read_to_string(&report.path).unwrap();
        assert!(html.contains("cart1"));
        assert!(html.contains("Promo slot"));
        assert!(report.summary().contains("1 cartridges"));
    }

    #[test]
    fn test_generate_json() {
        let dir = TempDir::new().unwrap();
        let config = ReportConfig {
            output_dir: dir.path().to_path_buf(),
            format: OutputFormat::Json,
            ..Default::default()
        };

        let generator = ReportGenerator::new(config).unwrap();
        let report = generator.generate(&sample_result()).unwrap();
        assert_eq!(generator.output_dir(), dir.path());

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(report.path).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "id": "cart1",
                "description": "Promo slot",
                "rules": ["promoA"],
                "sites": ["siteX"],
                "pages": ["home"]
            }])
        );
    }
}
