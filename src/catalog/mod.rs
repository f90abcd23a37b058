// Catalog of the cartridge templates shipped with an application

mod properties;
mod template;

pub use properties::Properties;
pub use template::*;

use crate::error::Result;
use crate::logging::Logger;
use glob::Pattern;
use std::path::Path;

/// Names of the template directories under `templates_root`, sorted.
///
/// Plain files are ignored. Entries that cannot be inspected are logged and
/// skipped.
pub fn enumerate_templates(templates_root: &Path, logger: &dyn Logger) -> Result<Vec<String>> {
    if !templates_root.is_dir() {
        logger.warn(&format!(
            "Templates directory does not exist: {}",
            templates_root.display()
        ));
        return Ok(Vec::new());
    }

    let pattern = format!(
        "{}/*",
        Pattern::escape(&templates_root.to_string_lossy())
    );

    let mut names = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                logger.error(&format!("Couldn't read file stats: {}", e));
                continue;
            }
        };

        if !path.is_dir() {
            continue;
        }

        if let Some(name) = path.file_name() {
            names.push(name.to_string_lossy().into_owned());
        }
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{Level, MemoryLogger};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_enumerate_directories_only() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("templates");
        fs::create_dir_all(root.join("Teaser")).unwrap();
        fs::create_dir_all(root.join("HeroBanner")).unwrap();
        fs::write(root.join("README.txt"), "not a template").unwrap();

        let logger = MemoryLogger::new();
        let names = enumerate_templates(&root, &logger).unwrap();
        assert_eq!(names, vec!["HeroBanner".to_string(), "Teaser".to_string()]);
    }

    #[test]
    fn test_enumerate_root_with_glob_characters() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("app [export]").join("templates");
        fs::create_dir_all(root.join("Teaser")).unwrap();

        let logger = MemoryLogger::new();
        let names = enumerate_templates(&root, &logger).unwrap();
        assert_eq!(names, vec!["Teaser".to_string()]);
    }

    #[test]
    fn test_enumerate_missing_root() {
        let dir = TempDir::new().unwrap();
        let logger = MemoryLogger::new();
        let names = enumerate_templates(&dir.path().join("templates"), &logger).unwrap();
        assert!(names.is_empty());
        assert_eq!(logger.messages(Level::Warn).len(), 1);
    }
}
