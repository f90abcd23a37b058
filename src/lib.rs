//! Cartridge mapper - map Endeca cartridge usage
//!
//! Scans an extracted Endeca application export and reports, for every
//! cartridge template, the shared-content rules, sites and pages that use it.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod mapping;
pub mod output;
pub mod tree;

// Re-export main types
pub use config::Config;
pub use error::{Error, Result};
pub use logging::{Logger, MemoryLogger, TracingLogger};
pub use mapping::{CartridgeUsage, Mapper, MappingResult, RuleIndex, UsageSet};
pub use output::{ReportConfig, ReportGenerator};
pub use tree::{parse_document, walk, TreeNode};
