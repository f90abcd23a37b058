use std::path::PathBuf;
use thiserror::Error;

/// Cartridge mapper error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    ConfigValidation(String),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed document: {0}")]
    Malformed(String),

    #[error("Invalid template definition: {0}")]
    TemplateDefinition(#[from] quick_xml::de::DeError),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("Directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for cartridge mapper operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a config validation error
    pub fn config_validation(msg: impl Into<String>) -> Self {
        Error::ConfigValidation(msg.into())
    }

    /// Wrap a document-level failure with the path of the offending document
    pub fn decode(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Error::Decode {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create a malformed-document error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Error::Malformed(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Whether this error must abort the whole mapping run
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Decode { .. } | Error::Xml(_) | Error::Malformed(_))
    }
}
