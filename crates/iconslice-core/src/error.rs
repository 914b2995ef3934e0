//! Error types for theme extraction.

use std::path::PathBuf;

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or repackaging a theme.
///
/// Everything here is fatal. Directories that are declared but cannot be
/// scanned are reported as [`Diagnostic`](crate::theme::Diagnostic)s on the
/// loaded theme instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source directory has no `index.theme`.
    #[error("source '{path}' is missing index.theme")]
    MissingIndex { path: PathBuf },

    /// The descriptor lacks the mandatory metadata section, or that
    /// section lacks `Name` or `Directories`.
    #[error("'{path}' has no usable [{section}] section: {reason}")]
    MissingSection {
        path: PathBuf,
        section: String,
        reason: String,
    },

    /// The descriptor violates the key/value grammar, or a required
    /// per-directory key is absent or invalid.
    #[error("malformed theme config: {message}")]
    MalformedConfig { message: String },

    /// A selection pattern is not a valid regular expression.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A symbolic link chain never reached a regular file.
    #[error("too many levels of symbolic links at '{path}'")]
    SymlinkLoop { path: PathBuf },

    /// File I/O error.
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed config error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedConfig {
            message: message.into(),
        }
    }

    /// Create a missing section error.
    pub fn missing_section(
        path: impl Into<PathBuf>,
        section: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MissingSection {
            path: path.into(),
            section: section.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::malformed("line 3: expected key=value");
        assert_eq!(
            err.to_string(),
            "malformed theme config: line 3: expected key=value"
        );

        let err = Error::missing_section("/themes/foo/index.theme", "Icon Theme", "no Name key");
        assert_eq!(
            err.to_string(),
            "'/themes/foo/index.theme' has no usable [Icon Theme] section: no Name key"
        );
    }
}
