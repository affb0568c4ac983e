use anyhow::{bail, Result};
use console::style;
use semver::VersionReq;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{fs, io::ErrorKind};

use crate::error::ScaffoldError;

pub const CONFIG_FILE_NAME: &str = "sauce-template.toml";

/// Where the bundled template lives, relative to the working directory.
pub const DEFAULT_TEMPLATE_DIR: &str = "samples/Minimal";

#[derive(Deserialize, Debug, PartialEq, Default, Clone)]
pub struct Config {
    pub template: Option<TemplateConfig>,
}

/// Layout of the template tree and the token that names it.
#[derive(Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(default)]
pub struct TemplateConfig {
    pub sauce_new_version: Option<VersionReq>,
    pub placeholder: String,
    pub build_extension: String,
    pub project_folder: String,
    pub project_extension: String,
    pub source_folder: String,
    pub entry_file: String,
    pub content_folders: Vec<String>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            sauce_new_version: None,
            placeholder: "Minimal".into(),
            build_extension: "sln".into(),
            project_folder: "Project".into(),
            project_extension: "vcxproj".into(),
            source_folder: "Source".into(),
            entry_file: "Main.cpp".into(),
            content_folders: vec!["Source".into(), "Assets".into(), "Config".into()],
        }
    }
}

impl TryFrom<String> for Config {
    type Error = toml::de::Error;

    fn try_from(contents: String) -> Result<Self, Self::Error> {
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl Config {
    /// Read the manifest at `path`; a missing file means the default layout.
    pub(crate) fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut config = match fs::read_to_string(path) {
            Ok(contents) => Self::try_from(contents)?,
            Err(e) => match e.kind() {
                ErrorKind::NotFound => Self::default(),
                _ => anyhow::bail!(e),
            },
        };
        config.template.get_or_insert(Default::default());
        Ok(config)
    }

    /// Load the manifest of the template rooted at `template_dir`.
    pub fn locate(template_dir: &Path) -> Result<TemplateConfig> {
        let config = Self::from_path(template_dir.join(CONFIG_FILE_NAME))?;
        Ok(config.template.unwrap_or_default())
    }
}

impl TemplateConfig {
    pub fn build_descriptor_name(&self, stem: &str) -> String {
        format!("{stem}.{}", self.build_extension)
    }

    pub fn project_descriptor_name(&self, stem: &str) -> String {
        format!("{stem}.{}", self.project_extension)
    }

    pub fn template_build_descriptor(&self, template_dir: &Path) -> PathBuf {
        template_dir.join(self.build_descriptor_name(&self.placeholder))
    }

    pub fn template_project_descriptor(&self, template_dir: &Path) -> PathBuf {
        template_dir
            .join(&self.project_folder)
            .join(self.project_descriptor_name(&self.placeholder))
    }

    pub fn template_entry_source(&self, template_dir: &Path) -> PathBuf {
        template_dir.join(&self.source_folder).join(&self.entry_file)
    }

    /// Make sure every file the pipeline reads from the template is present,
    /// before anything gets written to the target.
    pub fn validate(&self, template_dir: &Path) -> Result<(), ScaffoldError> {
        if self.placeholder.is_empty() {
            return Err(ScaffoldError::InvalidTemplate(
                "the placeholder token is empty".into(),
            ));
        }
        if !self.content_folders.contains(&self.source_folder) {
            return Err(ScaffoldError::InvalidTemplate(format!(
                "source folder `{}` is not one of the content folders",
                self.source_folder
            )));
        }

        for file in [
            self.template_build_descriptor(template_dir),
            self.template_project_descriptor(template_dir),
            self.template_entry_source(template_dir),
        ] {
            if !file.is_file() {
                return Err(ScaffoldError::TemplateMissing(file));
            }
        }
        for folder in &self.content_folders {
            let folder = template_dir.join(folder);
            if !folder.is_dir() {
                return Err(ScaffoldError::TemplateMissing(folder));
            }
        }
        Ok(())
    }
}

pub fn check_sauce_new_version(template_config: &TemplateConfig) -> Result<(), anyhow::Error> {
    if let TemplateConfig {
        sauce_new_version: Some(requirement),
        ..
    } = template_config
    {
        let version = semver::Version::parse(env!("CARGO_PKG_VERSION"))?;
        if !requirement.matches(&version) {
            bail!(
                "{} {} {} {}",
                style("Required sauce-new version not met. Required:")
                    .bold()
                    .red(),
                style(requirement).yellow(),
                style(" was:").bold().red(),
                style(version).yellow(),
            );
        }
    }
    Ok(())
}
