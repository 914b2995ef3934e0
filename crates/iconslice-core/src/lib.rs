//! Extract a subset of a freedesktop icon theme for embedding in an application.
//!
//! The pipeline has four steps:
//!
//! - **Load**: parse `index.theme` and collect the icons of every declared
//!   directory ([`theme::IconTheme::from_path`])
//! - **Select**: keep icons whose file stem fully matches a pattern
//!   ([`select::IconPatterns`])
//! - **Group**: bucket icons by a digest of their rendering properties
//!   ([`hash::PropertyDigest`])
//! - **Repackage**: copy the icons into one directory per bucket and write
//!   a minimal `index.theme` plus a `.qrc` manifest ([`repackage::repackage`])
//!
//! # Example
//!
//! ```ignore
//! use iconslice_core::{extract, RepackageOptions};
//!
//! let report = extract(
//!     "/usr/share/icons/breeze",
//!     "resources/icons/app",
//!     ["edit-.*", "document-(open|save)"],
//!     &RepackageOptions::new().with_theme_name("app"),
//! )?;
//! println!("copied {} icons", report.copied.len());
//! ```

pub mod config;
pub mod hash;
pub mod repackage;
pub mod select;
pub mod theme;

mod error;

use std::path::Path;

pub use error::{Error, Result};
pub use hash::PropertyDigest;
pub use repackage::{RepackageOptions, RepackageReport, repackage};
pub use select::IconPatterns;
pub use theme::{Diagnostic, Icon, IconProperties, IconSizeType, IconTheme};

/// Runs the whole pipeline: load `source`, select by `patterns`, write `dest`.
///
/// Patterns are compiled and the source theme is loaded before `dest` is
/// touched, so those failures leave the destination as it was.
pub fn extract<I, S>(
    source: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    patterns: I,
    options: &RepackageOptions,
) -> Result<RepackageReport>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let patterns = IconPatterns::new(patterns)?;
    let theme = IconTheme::from_path(source)?;
    let selected = patterns.select(&theme.icons);
    repackage(&theme, &selected, dest.as_ref(), options)
}
