use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Failures while expanding the template into a project directory.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("template file `{}` is missing", .0.display())]
    TemplateMissing(PathBuf),

    #[error("invalid template: {0}")]
    InvalidTemplate(String),

    #[error("failed to {action} `{}`", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    pub fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}
