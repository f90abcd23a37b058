use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub application: ApplicationConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Layout of an exported application directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Directory holding one sub-directory per cartridge template
    pub templates_dir: String,
    /// Shared content (rules) root
    pub rules_dir: String,
    /// Sites and pages root
    pub pages_dir: String,
    /// File name of the documents scanned under the rules and pages roots
    pub document_name: String,
    /// Prefix a `String` value carries when it points at a rule
    pub rule_reference_prefix: String,
    /// Locale used for externalized template descriptions
    pub locale: String,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub directory: PathBuf,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub debug: bool,
    pub color: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            templates_dir: "templates".to_string(),
            rules_dir: "content".to_string(),
            pages_dir: "pages".to_string(),
            document_name: "content.xml".to_string(),
            rule_reference_prefix: "/content/".to_string(),
            locale: "en".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            directory: PathBuf::from("./cartridgemapper-report"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            debug: false,
            color: true,
        }
    }
}

impl ApplicationConfig {
    pub fn templates_root(&self, app_root: &Path) -> PathBuf {
        app_root.join(&self.templates_dir)
    }

    pub fn rules_root(&self, app_root: &Path) -> PathBuf {
        app_root.join(&self.rules_dir)
    }

    pub fn pages_root(&self, app_root: &Path) -> PathBuf {
        app_root.join(&self.pages_dir)
    }
}

impl OutputFormat {
    /// Parse a CLI format name
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::other(format!("Unknown format: {}", other))),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(
        &mut self,
        output: Option<PathBuf>,
        format: Option<OutputFormat>,
        debug: bool,
        disable_color: bool,
    ) {
        if let Some(out) = output {
            self.output.directory = out;
        }

        if let Some(fmt) = format {
            self.output.format = fmt;
        }

        if debug {
            self.logging.debug = true;
        }

        if disable_color {
            self.logging.color = false;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let app = &self.application;
        let dirs = [
            ("templates_dir", &app.templates_dir),
            ("rules_dir", &app.rules_dir),
            ("pages_dir", &app.pages_dir),
        ];
        for (key, value) in dirs {
            if value.trim().is_empty() {
                return Err(Error::config_validation(format!("{} must not be empty", key)));
            }
        }

        if app.document_name.trim().is_empty() {
            return Err(Error::config_validation("document_name must not be empty"));
        }

        if app.document_name.contains('/') {
            return Err(Error::config_validation("document_name must be a file name, not a path"));
        }

        if app.locale.trim().is_empty() {
            return Err(Error::config_validation("locale must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.application.templates_dir, "templates");
        assert_eq!(config.application.rules_dir, "content");
        assert_eq!(config.application.pages_dir, "pages");
        assert_eq!(config.application.document_name, "content.xml");
        assert_eq!(config.application.rule_reference_prefix, "/content/");
        assert_eq!(config.output.format, OutputFormat::Html);
        assert!(config.logging.color);
        assert!(!config.logging.debug);
    }

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[application]
pages_dir = "sites"
locale = "de"

[output]
format = "json"

[logging]
color = false
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.application.pages_dir, "sites");
        assert_eq!(config.application.locale, "de");
        assert_eq!(config.application.rules_dir, "content");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.logging.color);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/nonexistent/cartridgemapper.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_on_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[application]\nlocale = \"\"").unwrap();
        let config = Config::load_or_default(file.path());
        assert_eq!(config.application.locale, "en");
    }

    #[test]
    fn test_validation_empty_pages_dir() {
        let mut config = Config::default();
        config.application.pages_dir = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_document_name_with_path() {
        let mut config = Config::default();
        config.application.document_name = "nested/content.xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_roots_join_app_dir() {
        let app = ApplicationConfig::default();
        let root = Path::new("/export/app");
        assert_eq!(app.templates_root(root), PathBuf::from("/export/app/templates"));
        assert_eq!(app.rules_root(root), PathBuf::from("/export/app/content"));
        assert_eq!(app.pages_root(root), PathBuf::from("/export/app/pages"));
    }

    #[test]
    fn test_merge_cli_output_and_format() {
        let mut config = Config::default();
        config.merge_cli(
            Some(PathBuf::from("/custom/report")),
            Some(OutputFormat::Json),
            false,
            false,
        );
        assert_eq!(config.output.directory, PathBuf::from("/custom/report"));
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_merge_cli_logging_flags() {
        let mut config = Config::default();
        config.merge_cli(None, None, true, true);
        assert!(config.logging.debug);
        assert!(!config.logging.color);
    }

    #[test]
    fn test_merge_cli_keeps_file_values() {
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.merge_cli(None, None, false, false);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.logging.color);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("html").unwrap(), OutputFormat::Html);
        assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::parse("markdown").is_err());
    }

    #[test]
    fn test_output_format_deserialize() {
        let output: OutputConfig = toml::from_str(r#"format = "json""#).unwrap();
        assert_eq!(output.format, OutputFormat::Json);
    }
}
