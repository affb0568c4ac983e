use log::debug;
use std::{fs, path::Path};
use walkdir::WalkDir;

use crate::error::ScaffoldError;
use crate::project_layout::ProjectLayout;
use crate::template_config::TemplateConfig;

/// Lay the template tree down under the project root.
///
/// Existing directories are reused and same-named files are overwritten;
/// anything else already under the root is left alone.
/// Returns the number of files written.
pub fn materialize(
    template_dir: &Path,
    template: &TemplateConfig,
    layout: &ProjectLayout,
) -> Result<usize, ScaffoldError> {
    for dir in [layout.root(), layout.project_folder()] {
        fs::create_dir_all(dir).map_err(|e| ScaffoldError::io("create directory", dir, e))?;
    }

    copy_file(
        &template.template_build_descriptor(template_dir),
        layout.build_descriptor(),
    )?;
    copy_file(
        &template.template_project_descriptor(template_dir),
        layout.project_descriptor(),
    )?;
    let mut copied = 2;

    for folder in &template.content_folders {
        copied += copy_tree(&template_dir.join(folder), &layout.root().join(folder))?;
    }
    Ok(copied)
}

fn copy_file(src: &Path, dst: &Path) -> Result<(), ScaffoldError> {
    debug!("copy {} -> {}", src.display(), dst.display());
    fs::copy(src, dst).map_err(|e| ScaffoldError::io("copy", src, e))?;
    Ok(())
}

/// Merge the directory `src` into `dst`, creating subdirectories on the way.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize, ScaffoldError> {
    if !src.is_dir() {
        return Err(ScaffoldError::TemplateMissing(src.to_path_buf()));
    }

    let mut copied = 0;
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            ScaffoldError::io("read directory", &path, e.into())
        })?;
        let relative = entry.path().strip_prefix(src).map_err(|_| {
            ScaffoldError::InvalidTemplate(format!(
                "`{}` is outside of `{}`",
                entry.path().display(),
                src.display()
            ))
        })?;
        let destination = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&destination)
                .map_err(|e| ScaffoldError::io("create directory", &destination, e))?;
        } else {
            copy_file(entry.path(), &destination)?;
            copied += 1;
        }
    }
    Ok(copied)
}
