use std::path::{Path, PathBuf};

use crate::template_config::TemplateConfig;

/// Paths of the generated project, derived from the project name and the
/// target directory. Nothing here touches the filesystem.
#[derive(Debug, PartialEq, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
    project_folder: PathBuf,
    build_descriptor: PathBuf,
    project_descriptor: PathBuf,
    entry_source: PathBuf,
}

impl ProjectLayout {
    pub fn resolve(project_name: &str, target_dir: &Path, template: &TemplateConfig) -> Self {
        let root = target_dir.join(project_name);
        let project_folder = root.join(&template.project_folder);
        Self {
            build_descriptor: root.join(template.build_descriptor_name(project_name)),
            project_descriptor: project_folder
                .join(template.project_descriptor_name(project_name)),
            entry_source: root
                .join(&template.source_folder)
                .join(&template.entry_file),
            project_folder,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn project_folder(&self) -> &Path {
        &self.project_folder
    }

    pub fn build_descriptor(&self) -> &Path {
        &self.build_descriptor
    }

    pub fn project_descriptor(&self) -> &Path {
        &self.project_descriptor
    }

    pub fn entry_source(&self) -> &Path {
        &self.entry_source
    }

    /// Files whose placeholder token is rewritten, in rewrite order.
    pub fn substitution_set(&self) -> [&Path; 3] {
        [
            self.build_descriptor(),
            self.project_descriptor(),
            self.entry_source(),
        ]
    }
}
