use crate::utils::constants::{CSV_EXTENSION, README_FILE};
use std::path::Path;

/// Lowercased final path component, used for exemption lookups
pub fn normalized_basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// True for files with a literal `.csv` extension (case-sensitive)
pub fn is_csv_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(CSV_EXTENSION)
}

pub fn is_readme(path: &Path) -> bool {
    normalized_basename(path) == README_FILE
}
