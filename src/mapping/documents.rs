// Discovery of the content documents below a scan root

use crate::error::Result;
use crate::logging::Logger;
use crate::tree::{read_document, TreeNode};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// All files named exactly `document_name` below `root`, sorted.
///
/// A missing root yields nothing. Entries the walk cannot read are logged
/// and skipped.
pub fn discover_documents(root: &Path, document_name: &str, logger: &dyn Logger) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if !root.is_dir() {
        logger.warn(&format!("Scan root does not exist: {}", root.display()));
        return files;
    }

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                logger.error(&format!("Could not scan directory entry: {}", e));
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if entry.file_name() == document_name {
            files.push(entry.into_path());
        }
    }

    files.sort();
    files
}

/// Load one scanned document.
///
/// `Ok(None)` means the document could not be read and was skipped; decode
/// failures propagate.
pub fn load_document(path: &Path, logger: &dyn Logger) -> Result<Option<TreeNode>> {
    match read_document(path) {
        Ok(root) => Ok(Some(root)),
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            logger.error(&format!("Couldn't read XML at path {}: {}", path.display(), e));
            Ok(None)
        }
    }
}

/// Directory components of `path` between `root` and the file name
pub fn directory_components(path: &Path, root: &Path) -> Vec<String> {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let mut parts: Vec<String> = relative
        .iter()
        .map(|s| s.to_string_lossy().into_owned())
        .collect();
    parts.pop();
    parts
}
