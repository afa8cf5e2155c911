use crate::error::Result;
use crate::utils::filename::{is_csv_file, is_readme};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively find dataset CSV files under `dir`, sorted lexicographically
pub fn find_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut csv_files = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file() && is_csv_file(path) && !is_readme(path) {
            csv_files.push(path.to_path_buf());
        }
    }

    csv_files.sort();
    tracing::debug!(dir = %dir.display(), count = csv_files.len(), "discovered CSV files");

    Ok(csv_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_csv_files_recursive_and_sorted() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        fs::create_dir_all(root.join("europe"))?;
        fs::create_dir_all(root.join("asia/east"))?;
        fs::write(root.join("usa.csv"), "City\n")?;
        fs::write(root.join("europe/germany.csv"), "City\n")?;
        fs::write(root.join("asia/east/japan.csv"), "City\n")?;
        fs::write(root.join("README.md"), "# data\n")?;
        fs::write(root.join("notes.txt"), "x\n")?;

        let files = find_csv_files(root)?;
        let relative: Vec<PathBuf> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            relative,
            vec![
                PathBuf::from("asia/east/japan.csv"),
                PathBuf::from("europe/germany.csv"),
                PathBuf::from("usa.csv"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_find_csv_files_empty_dir() -> Result<()> {
        let temp_dir = TempDir::new()?;
        assert!(find_csv_files(temp_dir.path())?.is_empty());
        Ok(())
    }
}
