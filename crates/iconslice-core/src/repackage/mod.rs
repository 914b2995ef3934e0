//! Writing a selected set of icons out as a new theme.
//!
//! The output theme has one directory per distinct set of icon properties,
//! named after the [`PropertyDigest`] of those properties:
//!
//! ```text
//! dest/
//!   <digest-1>/foo.png
//!   <digest-2>/bar.svg
//!   index.theme
//!   <dest-name>.qrc
//! ```
//!
//! `index.theme` only spells out the keys that differ from their defaults,
//! and the `.qrc` manifest lists every copied file plus `index.theme` under
//! the prefix `<prefix-root>/<dest-name>`.

mod fs_ops;
mod manifest;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::ThemeConfig;
use crate::error::Result;
use crate::hash::PropertyDigest;
use crate::theme::{
    Diagnostic, DirectorySpec, INDEX_FILE, Icon, IconProperties, IconTheme, KEY_COMMENT,
    KEY_DIRECTORIES, KEY_NAME, KEY_SCALED_DIRECTORIES, THEME_SECTION,
};

pub use fs_ops::{MAX_SYMLINK_HOPS, copy_resolved, ensure_dir, reset_dir, resolve_symlinks};
pub use manifest::ResourceManifest;

/// Comment written into every generated theme.
pub const GENERATED_COMMENT: &str = "Generated";
/// Default root for the manifest prefix.
pub const DEFAULT_PREFIX_ROOT: &str = "/icons";

/// Options for [`repackage`].
#[derive(Debug, Clone)]
pub struct RepackageOptions {
    /// Name written to the new theme instead of the source theme's name
    pub theme_name: Option<String>,
    /// Root of the manifest prefix; the destination name is appended
    pub prefix_root: String,
}

impl RepackageOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self {
            theme_name: None,
            prefix_root: DEFAULT_PREFIX_ROOT.to_string(),
        }
    }

    /// Override the theme name.
    pub fn with_theme_name(mut self, name: impl Into<String>) -> Self {
        self.theme_name = Some(name.into());
        self
    }

    /// Set the manifest prefix root.
    pub fn with_prefix_root(mut self, prefix_root: impl Into<String>) -> Self {
        self.prefix_root = prefix_root.into();
        self
    }
}

impl Default for RepackageOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Icons sharing one set of properties, and so one output directory.
#[derive(Debug, Clone)]
pub struct PropertyGroup {
    /// Output directory name
    pub digest: PropertyDigest,
    /// Properties of every member
    pub props: Arc<IconProperties>,
    /// Number of icons copied into the directory
    pub members: usize,
}

/// What a [`repackage`] run produced.
#[derive(Debug, Clone, Default)]
pub struct RepackageReport {
    /// Copied icons, relative to the destination
    pub copied: Vec<PathBuf>,
    /// Source icons not copied because an earlier icon with the same file
    /// name and properties already took their output path
    pub skipped: Vec<PathBuf>,
    /// One entry per output directory, in first-use order
    pub groups: Vec<PropertyGroup>,
    /// Output directories with scale 1
    pub directories: Vec<String>,
    /// Output directories with any other scale
    pub scaled_directories: Vec<String>,
    /// Path of the written manifest
    pub manifest_path: PathBuf,
    /// Problems found while loading the source theme
    pub diagnostics: Vec<Diagnostic>,
}

/// Copies `icons` into a fresh theme at `dest`.
///
/// `dest` is removed first if it exists. On failure the destination is left
/// as far as the run got; re-running rebuilds it from scratch.
pub fn repackage(
    theme: &IconTheme,
    icons: &[&Icon],
    dest: &Path,
    options: &RepackageOptions,
) -> Result<RepackageReport> {
    reset_dir(dest)?;

    let dest_name = dest_name(dest);
    let prefix = format!("{}/{}", options.prefix_root.trim_end_matches('/'), dest_name);
    let mut manifest = ResourceManifest::new(prefix);
    let mut report = RepackageReport {
        diagnostics: theme.diagnostics.clone(),
        ..RepackageReport::default()
    };

    for icon in icons {
        let digest = PropertyDigest::of(&icon.props);
        let rel_path = format!("{}/{}", digest, icon.file_name());
        if !manifest.add_file(rel_path.as_str()) {
            tracing::warn!(
                icon = %icon.path.display(),
                dest = %rel_path,
                "another icon with the same name and properties was already copied; skipping"
            );
            report.skipped.push(icon.path.clone());
            continue;
        }

        ensure_dir(&dest.join(digest.as_str()))?;
        copy_resolved(&icon.path, &dest.join(&rel_path))?;
        tracing::debug!(icon = %icon.path.display(), dest = %rel_path, "copied icon");
        report.copied.push(PathBuf::from(&rel_path));

        record_group(&mut report, digest, &icon.props);
    }

    let theme_name = options.theme_name.as_deref().unwrap_or(&theme.name);
    let config = build_index(theme_name, &report);
    config.write(dest.join(INDEX_FILE))?;
    manifest.add_file(INDEX_FILE);

    report.manifest_path = dest.join(format!("{dest_name}.qrc"));
    manifest.write(&report.manifest_path)?;

    tracing::info!(
        dest = %dest.display(),
        icons = report.copied.len(),
        skipped = report.skipped.len(),
        groups = report.groups.len(),
        "wrote icon theme"
    );
    Ok(report)
}

/// Builds the `index.theme` for a finished copy.
pub fn build_index(theme_name: &str, report: &RepackageReport) -> ThemeConfig {
    let mut config = ThemeConfig::new();
    config.set(THEME_SECTION, KEY_NAME, theme_name);
    config.set(THEME_SECTION, KEY_COMMENT, GENERATED_COMMENT);
    config.set(THEME_SECTION, KEY_DIRECTORIES, report.directories.join(","));
    if !report.scaled_directories.is_empty() {
        config.set(
            THEME_SECTION,
            KEY_SCALED_DIRECTORIES,
            report.scaled_directories.join(","),
        );
    }

    for group in &report.groups {
        DirectorySpec::minimal_form(&group.props).write_section(&mut config, group.digest.as_str());
    }
    config
}

fn record_group(report: &mut RepackageReport, digest: PropertyDigest, props: &Arc<IconProperties>) {
    if let Some(group) = report.groups.iter_mut().find(|g| g.digest == digest) {
        group.members += 1;
        return;
    }

    let dirs = if props.scale == IconProperties::DEFAULT_SCALE {
        &mut report.directories
    } else {
        &mut report.scaled_directories
    };
    dirs.push(digest.to_string());

    report.groups.push(PropertyGroup {
        digest,
        props: Arc::clone(props),
        members: 1,
    });
}

/// Name used for the manifest file and prefix.
fn dest_name(dest: &Path) -> String {
    let stem = |path: &Path| path.file_stem().and_then(|s| s.to_str()).map(str::to_string);
    stem(dest)
        .or_else(|| dest.canonicalize().ok().and_then(|path| stem(&path)))
        .unwrap_or_else(|| "icons".to_string())
}
