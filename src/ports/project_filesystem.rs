//! Local filesystem operations the provisioning workflow needs.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Raw template document read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: PathBuf,
    pub content: String,
}

pub trait ProjectFilesystem {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Remove a directory with its contents (if present) and recreate it empty.
    fn reset_dir(&self, path: &Path) -> Result<(), AppError>;

    /// Recursively copy the contents of `from` into `to`, overwriting files.
    /// `.git` directories are never copied.
    fn copy_dir(&self, from: &Path, to: &Path) -> Result<(), AppError>;

    /// Read every regular, non-hidden file directly inside `dir`, in listing order.
    fn read_template_files(&self, dir: &Path) -> Result<Vec<TemplateFile>, AppError>;
}
