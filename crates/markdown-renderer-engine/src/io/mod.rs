use crate::render::markdown_to_html;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of documents picked up by [`scan_markdown_files`].
pub const MARKDOWN_EXTENSION: &str = "md";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid input directory: {0}")]
    InvalidDir(PathBuf),
}

impl IoError {
    fn io(path: &Path) -> impl FnOnce(std::io::Error) -> IoError + '_ {
        move |source| IoError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read a document and return its content
pub fn read_document(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::io(path))
}

/// Write rendered output, creating parent directories
pub fn write_output(path: &Path, html: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::io(parent))?;
    }
    fs::write(path, html).map_err(IoError::io(path))
}

/// Load a document and run the full pipeline over it
pub fn render_file(path: &Path) -> Result<String, IoError> {
    let text = read_document(path)?;
    log::debug!("rendering {}", path.display());
    Ok(markdown_to_html(&text))
}

/// Recursively find markdown files under `dir`, sorted by path
pub fn scan_markdown_files(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !dir.is_dir() {
        return Err(IoError::InvalidDir(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    scan_directory_recursive(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::io(dir))?;

    for entry in entries {
        let entry = entry.map_err(IoError::io(dir))?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == MARKDOWN_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}
