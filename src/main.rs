/// Main file
mod absolute_path;
mod app_log;
mod args;
mod error;
mod interactive;
mod progressbar;
mod project_layout;
mod substitute;
mod template;
mod template_config;
mod utils;

use absolute_path::AbsolutePathExt;
use app_log::log_env_init;
use args::*;
use project_layout::ProjectLayout;
use template_config::{check_sauce_new_version, Config};

use anyhow::{Context, Result};
use console::style;
use log::{debug, info};
use std::path::PathBuf;

/// How a run ended when no error occurred.
#[derive(Debug, PartialEq)]
enum Generated {
    Created(PathBuf),
    Declined,
}

fn main() -> Result<()> {
    let args = resolve_args();
    log_env_init(args.verbose);
    generate(args)?;
    Ok(())
}

/// To generate a Sauce3D project from the template
fn generate(args: AppArgs) -> Result<Generated> {
    let template_dir = args.template.as_path();
    let template = Config::locate(template_dir)?;
    check_sauce_new_version(&template)?;
    template.validate(template_dir)?;

    let target_dir = utils::expand_home(&args.target_dir)?;
    let layout = ProjectLayout::resolve(&args.project_name, &target_dir, &template);
    // the filesystem resolves `..` after symlinks, so the folded path is for display only
    let shown_root = layout
        .root()
        .as_absolute()
        .context("cannot get the absolute path of the target directory")?
        .into_owned();

    if layout.root().exists()
        && !args.yes
        && !interactive::confirm_existing_target(&shown_root)?
    {
        println!("No project files were created, exiting");
        return Ok(Generated::Declined);
    }

    info!(
        "🔧 {}",
        style(format!(
            "Creating project under \"{}\"...",
            shown_root.display()
        ))
        .bold()
        .yellow()
    );

    let copied = template::materialize(template_dir, &template, &layout)?;
    debug!("{copied} file(s) copied from {}", template_dir.display());

    let replaced = substitute::substitute_all(
        &layout.substitution_set(),
        &template.placeholder,
        &args.project_name,
    )?;
    debug!(
        "`{}` replaced by `{}` {replaced} time(s)",
        template.placeholder, args.project_name
    );

    info!(
        "✨ {} {}",
        style("Project created!").bold().green(),
        style(shown_root.display()).underlined()
    );
    Ok(Generated::Created(layout.root().to_path_buf()))
}
