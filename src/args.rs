use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use std::env;

use crate::template_config::DEFAULT_TEMPLATE_DIR;

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };
}

mod heading {
    pub const OUTPUT_PARAMETERS: &str = "Output Parameters";
}

/// Creates a Sauce3D project
#[derive(Clone, Debug, Parser)]
#[command(
    name = "sauce-new",
    arg_required_else_help(true),
    version,
    about,
    next_line_help(false),
    styles(style::STYLES)
)]
pub struct AppArgs {
    /// Project name
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub project_name: String,

    /// Project target directory. Project files will be written to "target_dir/project_name/"
    #[arg(value_parser)]
    pub target_dir: PathBuf,

    /// Location of the bundled template, overridden by the test suite only
    #[arg(long, value_parser, value_name = "DIR", default_value = DEFAULT_TEMPLATE_DIR, hide = true)]
    pub template: PathBuf,

    /// Continue without asking when the project directory already exists. Existing files are
    /// kept unless the template has a file with the same path.
    #[arg(long, short, action, help_heading = heading::OUTPUT_PARAMETERS)]
    pub yes: bool,

    /// Enables more verbose output.
    #[arg(long, short, action)]
    pub verbose: bool,
}

/// To get the arguments list from terminal
/// Return : work arguments
pub fn resolve_args() -> AppArgs {
    AppArgs::parse_from(env::args())
}
