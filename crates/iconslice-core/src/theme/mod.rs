//! Icon theme catalog.
//!
//! A theme is a directory holding an `index.theme` descriptor and one
//! subdirectory per size/scale/type combination, following the freedesktop
//! icon theme specification. Loading produces an [`IconTheme`]: every icon
//! file found in a declared directory, paired with that directory's
//! [`IconProperties`].
//!
//! # Example
//!
//! ```ignore
//! use iconslice_core::theme::IconTheme;
//!
//! let theme = IconTheme::from_path("/usr/share/icons/breeze")?;
//! for diagnostic in &theme.diagnostics {
//!     eprintln!("warning: {diagnostic}");
//! }
//! println!("{} icons", theme.icons.len());
//! ```

mod defaults;
mod loader;
mod types;

pub use defaults::{
    DirectorySpec, KEY_MAX_SIZE, KEY_MIN_SIZE, KEY_SCALE, KEY_SIZE, KEY_THRESHOLD, KEY_TYPE,
};
pub use loader::{
    INDEX_FILE, KEY_COMMENT, KEY_DIRECTORIES, KEY_NAME, KEY_SCALED_DIRECTORIES, THEME_SECTION,
    load_theme,
};
pub use types::{
    Diagnostic, ICON_EXTENSIONS, Icon, IconProperties, IconSizeType, IconTheme, is_icon_file,
};
