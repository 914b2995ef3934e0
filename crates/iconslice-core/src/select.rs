//! Icon selection by name pattern.

use regex::Regex;

use crate::error::{Error, Result};
use crate::theme::Icon;

/// A set of regular expressions matched against whole icon file stems.
///
/// `edit-.*` selects `edit-copy` but `edit` does not select `edit-copy`.
#[derive(Debug, Clone)]
pub struct IconPatterns {
    sources: Vec<String>,
    compiled: Vec<Regex>,
}

impl IconPatterns {
    /// Compile patterns, failing on the first invalid one.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sources = Vec::new();
        let mut compiled = Vec::new();
        for pattern in patterns {
            let pattern = pattern.into();
            let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
                Error::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                }
            })?;
            sources.push(pattern);
            compiled.push(regex);
        }
        Ok(Self { sources, compiled })
    }

    /// The patterns as given.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Index of the first pattern matching the whole of `stem`.
    pub fn first_match(&self, stem: &str) -> Option<usize> {
        self.compiled.iter().position(|re| re.is_match(stem))
    }

    /// Returns true if any pattern matches the whole of `stem`.
    pub fn matches(&self, stem: &str) -> bool {
        self.first_match(stem).is_some()
    }

    /// Keep the icons whose stem matches, preserving catalog order.
    pub fn select<'a>(&self, icons: &'a [Icon]) -> Vec<&'a Icon> {
        let selected: Vec<_> = icons.iter().filter(|icon| self.matches(icon.stem())).collect();
        tracing::debug!(
            patterns = self.sources.len(),
            candidates = icons.len(),
            selected = selected.len(),
            "selected icons"
        );
        selected
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use super::*;
    use crate::theme::IconProperties;

    fn icon(path: &str) -> Icon {
        Icon {
            path: PathBuf::from(path),
            props: Arc::new(IconProperties::new(16)),
        }
    }

    #[test]
    fn test_full_match_only() {
        let patterns = IconPatterns::new(["edit"]).unwrap();
        assert!(patterns.matches("edit"));
        assert!(!patterns.matches("edit-copy"));
        assert!(!patterns.matches("text-edit"));
    }

    #[test]
    fn test_alternation_is_anchored_as_a_whole() {
        let patterns = IconPatterns::new(["foo|bar"]).unwrap();
        assert!(patterns.matches("foo"));
        assert!(patterns.matches("bar"));
        assert!(!patterns.matches("foobar"));
        assert!(!patterns.matches("xbar"));
    }

    #[test]
    fn test_first_match() {
        let patterns = IconPatterns::new(["go-.*", "go-up", "edit-.*"]).unwrap();
        assert_eq!(patterns.first_match("go-up"), Some(0));
        assert_eq!(patterns.first_match("edit-cut"), Some(2));
        assert_eq!(patterns.first_match("folder"), None);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = IconPatterns::new(["ok", "("]).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { ref pattern, .. } if pattern == "("));
    }

    #[test]
    fn test_select_preserves_order() {
        let icons = vec![
            icon("/t/a/zoom-in.png"),
            icon("/t/a/folder.svg"),
            icon("/t/b/zoom-out.xpm"),
        ];
        let patterns = IconPatterns::new(["zoom-.*"]).unwrap();
        let selected: Vec<_> = patterns.select(&icons).iter().map(|i| i.stem()).collect();
        assert_eq!(selected, vec!["zoom-in", "zoom-out"]);
    }

    #[test]
    fn test_select_nothing() {
        let icons = vec![icon("/t/a/folder.svg")];
        let patterns = IconPatterns::new(["nothing"]).unwrap();
        assert!(patterns.select(&icons).is_empty());
    }
}
