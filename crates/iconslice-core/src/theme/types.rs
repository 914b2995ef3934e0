//! Core types for a loaded icon theme.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use crate::error::Error;

/// File extensions recognized as icons.
pub const ICON_EXTENSIONS: &[&str] = &["png", "xpm", "svg"];

/// Returns true if the path has one of the [`ICON_EXTENSIONS`].
pub fn is_icon_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ICON_EXTENSIONS.contains(&ext))
}

/// Size type for icon theme directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconSizeType {
    /// Fixed size icons - must match exactly
    Fixed,
    /// Scalable icons (typically SVG)
    Scalable,
    /// Threshold-based sizing - matches within a range
    #[default]
    Threshold,
}

impl IconSizeType {
    /// Get the `Type=` value used in `index.theme`.
    pub fn as_str(&self) -> &'static str {
        match self {
            IconSizeType::Fixed => "Fixed",
            IconSizeType::Scalable => "Scalable",
            IconSizeType::Threshold => "Threshold",
        }
    }
}

impl FromStr for IconSizeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fixed" => Ok(IconSizeType::Fixed),
            "Scalable" => Ok(IconSizeType::Scalable),
            "Threshold" => Ok(IconSizeType::Threshold),
            other => Err(Error::malformed(format!("unknown directory Type '{other}'"))),
        }
    }
}

impl fmt::Display for IconSizeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering properties shared by every icon in a theme directory.
///
/// Equality is by value: two directories with the same properties are
/// interchangeable and end up in the same output directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconProperties {
    /// Nominal icon size
    pub size: u32,
    /// Scale factor (1 for normal, 2 for HiDPI, etc.)
    pub scale: u32,
    /// Size type
    pub size_type: IconSizeType,
    /// Maximum size
    pub max_size: Option<u32>,
    /// Minimum size
    pub min_size: Option<u32>,
    /// Size threshold
    pub threshold: Option<u32>,
}

impl IconProperties {
    /// Default scale factor.
    pub const DEFAULT_SCALE: u32 = 1;
    /// Default threshold for `Threshold` directories.
    pub const DEFAULT_THRESHOLD: u32 = 2;

    /// Create properties for a size with every other field at its default.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            scale: Self::DEFAULT_SCALE,
            size_type: IconSizeType::default(),
            max_size: None,
            min_size: None,
            threshold: None,
        }
    }

    /// Set the scale factor.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the size type.
    pub fn with_type(mut self, size_type: IconSizeType) -> Self {
        self.size_type = size_type;
        self
    }

    /// Set the size bounds.
    pub fn with_bounds(mut self, min_size: u32, max_size: u32) -> Self {
        self.min_size = Some(min_size);
        self.max_size = Some(max_size);
        self
    }

    /// Set the threshold.
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Effective maximum size.
    pub fn max_size_or_default(&self) -> u32 {
        self.max_size.unwrap_or(self.size)
    }

    /// Effective minimum size.
    pub fn min_size_or_default(&self) -> u32 {
        self.min_size.unwrap_or(self.size)
    }

    /// Effective threshold.
    pub fn threshold_or_default(&self) -> u32 {
        self.threshold.unwrap_or(Self::DEFAULT_THRESHOLD)
    }
}

/// A single icon file together with its directory's properties.
#[derive(Debug, Clone)]
pub struct Icon {
    /// Absolute path to the icon file
    pub path: PathBuf,
    /// Properties, shared with every other icon from the same directory
    pub props: Arc<IconProperties>,
}

impl Icon {
    /// File name without extension, used for pattern matching.
    pub fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }

    /// File name including extension.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }
}

/// Non-fatal problem found while loading a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A directory listed in `Directories`/`ScaledDirectories` has no section.
    MissingDirectorySection { dir: String },
    /// A listed directory does not exist on disk.
    NotADirectory { dir: String, path: PathBuf },
}

impl Diagnostic {
    /// The theme-relative directory this diagnostic is about.
    pub fn dir(&self) -> &str {
        match self {
            Diagnostic::MissingDirectorySection { dir } | Diagnostic::NotADirectory { dir, .. } => {
                dir
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingDirectorySection { dir } => {
                write!(f, "skipping '{dir}': no section about it")
            }
            Diagnostic::NotADirectory { dir, path } => {
                write!(f, "skipping '{dir}': {} is not a directory", path.display())
            }
        }
    }
}

/// A loaded icon theme.
#[derive(Debug, Clone)]
pub struct IconTheme {
    /// Theme name, from `Name=` unless overridden
    pub name: String,
    /// Directory the theme was loaded from
    pub source_path: PathBuf,
    /// Icons in directory declaration order
    pub icons: Vec<Icon>,
    /// Directories that were declared but skipped
    pub diagnostics: Vec<Diagnostic>,
}

impl IconTheme {
    /// Create an empty theme.
    pub fn new(name: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source_path: source_path.into(),
            icons: Vec::new(),
            diagnostics: Vec::new(),
        }
    }
}
