//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;
use iconslice_core::RepackageOptions;
use iconslice_core::repackage::DEFAULT_PREFIX_ROOT;

/// Generate a partial freedesktop.org icon theme from an existing theme.
///
/// See https://specifications.freedesktop.org/icon-theme-spec/ for how themes
/// are laid out. The output directory also gets a Qt `.qrc` manifest listing
/// every file, for embedding with the Qt resource system.
#[derive(Parser, Debug)]
#[command(name = "iconslice")]
#[command(version)]
#[command(about = "Generate a partial freedesktop.org icon theme from an existing theme")]
pub struct Args {
    /// Path to the source theme
    pub source: PathBuf,

    /// Path to the created theme (replaced if it exists)
    pub dest: PathBuf,

    /// Regex patterns for icons to include, matched against whole file stems
    #[arg(required = true, num_args = 1..)]
    pub patterns: Vec<String>,

    /// Name of the generated theme (default: the source theme's name)
    #[arg(long)]
    pub name: Option<String>,

    /// Root of the resource prefix; the destination name is appended
    #[arg(long, default_value = DEFAULT_PREFIX_ROOT)]
    pub prefix: String,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Repackaging options selected by the flags.
    pub fn repackage_options(&self) -> RepackageOptions {
        let options = RepackageOptions::new().with_prefix_root(self.prefix.as_str());
        match &self.name {
            Some(name) => options.with_theme_name(name.as_str()),
            None => options,
        }
    }

    /// Log level from the flags; `--verbose` wins over `--log-level`.
    pub fn log_level(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            &self.log_level
        }
    }
}
