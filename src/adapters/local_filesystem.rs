use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppError, TemplateError};
use crate::ports::{ProjectFilesystem, TemplateFile};

const GIT_DIR: &str = ".git";

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProjectFilesystem;

impl LocalProjectFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectFilesystem for LocalProjectFilesystem {
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn reset_dir(&self, path: &Path) -> Result<(), AppError> {
        match fs::remove_dir_all(path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn copy_dir(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        copy_recursive(from, to)?;
        Ok(())
    }

    fn read_template_files(&self, dir: &Path) -> Result<Vec<TemplateFile>, AppError> {
        let mut files = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() || entry.file_name().to_string_lossy().starts_with('.')
            {
                continue;
            }

            let path = entry.path();
            let content = match String::from_utf8(fs::read(&path)?) {
                Ok(content) => content,
                Err(_) => {
                    return Err(AppError::Template { path, source: TemplateError::InvalidEncoding });
                }
            };
            files.push(TemplateFile { path, content });
        }

        Ok(files)
    }
}

fn copy_recursive(from: &Path, to: &Path) -> io::Result<()> {
    fs::create_dir_all(to)?;

    for entry in fs::read_dir(from)? {
        let entry = entry?;
        if entry.file_name() == GIT_DIR {
            continue;
        }

        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_recursive(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}
