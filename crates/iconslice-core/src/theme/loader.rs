//! Icon theme loading.
//!
//! Reads a theme's `index.theme`, walks every directory it declares and
//! collects the icon files found there together with that directory's
//! properties.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::ThemeConfig;
use crate::error::{Error, Result};

use super::defaults::DirectorySpec;
use super::types::{Diagnostic, Icon, IconTheme, is_icon_file};

/// Name of the theme descriptor at the root of every theme.
pub const INDEX_FILE: &str = "index.theme";
/// Section holding theme-wide metadata.
pub const THEME_SECTION: &str = "Icon Theme";

pub const KEY_NAME: &str = "Name";
pub const KEY_COMMENT: &str = "Comment";
pub const KEY_DIRECTORIES: &str = "Directories";
pub const KEY_SCALED_DIRECTORIES: &str = "ScaledDirectories";

impl IconTheme {
    /// Load a theme from its root directory.
    ///
    /// Declared directories without a section, or that don't exist on disk,
    /// are skipped and recorded in [`IconTheme::diagnostics`]. Anything
    /// wrong with the descriptor itself is an error.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        load_theme(path.as_ref())
    }
}

/// Load a theme from its root directory.
pub fn load_theme(root: &Path) -> Result<IconTheme> {
    let index_path = root.join(INDEX_FILE);
    if !index_path.is_file() {
        return Err(Error::MissingIndex {
            path: root.to_path_buf(),
        });
    }

    let config = ThemeConfig::read(&index_path)?;
    if !config.has_section(THEME_SECTION) {
        return Err(Error::missing_section(
            &index_path,
            THEME_SECTION,
            "section not declared",
        ));
    }

    let name = config
        .get(THEME_SECTION, KEY_NAME)
        .ok_or_else(|| Error::missing_section(&index_path, THEME_SECTION, "no Name key"))?;
    let mut theme = IconTheme::new(name, root);

    for dir in declared_directories(&config, &index_path)? {
        if !config.has_section(&dir) {
            skip(&mut theme, Diagnostic::MissingDirectorySection { dir });
            continue;
        }
        let dir_path = root.join(&dir);
        if !dir_path.is_dir() {
            skip(&mut theme, Diagnostic::NotADirectory { dir, path: dir_path });
            continue;
        }

        let props = Arc::new(DirectorySpec::from_section(&config, &dir)?.defaults_applied());
        let files = icon_files(&dir_path)?;
        tracing::debug!(
            dir = %dir,
            icons = files.len(),
            size = props.size,
            scale = props.scale,
            "scanned directory"
        );

        theme.icons.extend(files.into_iter().map(|path| Icon {
            path,
            props: Arc::clone(&props),
        }));
    }

    tracing::info!(
        theme = %theme.name,
        icons = theme.icons.len(),
        skipped = theme.diagnostics.len(),
        "loaded icon theme"
    );
    Ok(theme)
}

/// `Directories` followed by `ScaledDirectories`, without repeats.
fn declared_directories(config: &ThemeConfig, index_path: &Path) -> Result<Vec<String>> {
    let mut dirs = config
        .get_list(THEME_SECTION, KEY_DIRECTORIES)
        .ok_or_else(|| Error::missing_section(index_path, THEME_SECTION, "no Directories key"))?;
    dirs.extend(
        config
            .get_list(THEME_SECTION, KEY_SCALED_DIRECTORIES)
            .unwrap_or_default(),
    );

    let mut unique: Vec<String> = Vec::with_capacity(dirs.len());
    for dir in dirs {
        if !unique.contains(&dir) {
            unique.push(dir);
        }
    }
    Ok(unique)
}

/// Icon files directly inside `dir`, sorted by file name.
fn icon_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if is_icon_file(&path) && !path.is_dir() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn skip(theme: &mut IconTheme, diagnostic: Diagnostic) {
    tracing::debug!(dir = %diagnostic.dir(), "{diagnostic}");
    theme.diagnostics.push(diagnostic);
}
