use std::fs;
use std::path::{Path, PathBuf};

use crate::parsing::lines::BOM;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input directory: {0}")]
    InvalidInputDir(String),
}

/// Extension of the files picked up when scanning a directory.
pub const IMPORT_EXTENSION: &str = "txt";

/// Read a question file, dropping a leading byte order mark
pub fn read_import_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(IoError::Io)?;
    Ok(match content.strip_prefix(BOM) {
        Some(rest) => rest.to_string(),
        None => content,
    })
}

/// Write an import report, creating parent directories as needed
pub fn write_report(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Scan for question files in a directory, sorted by path
pub fn scan_import_files(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_input_dir(dir)?;

    let mut files = Vec::new();
    scan_directory_recursive(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == IMPORT_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_input_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidInputDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}
