//! Section/key parsing for `index.theme` style configuration files.
//!
//! Theme descriptors use a restricted INI dialect:
//!
//! - `#` starts a full-line comment; `;` is an ordinary key character
//! - `=` is the only key/value delimiter
//! - keys keep their case (`Size` and `size` are different keys)
//! - a section or a key within a section may appear only once
//! - list values are comma separated
//!
//! # Example
//!
//! ```
//! use iconslice_core::config::ThemeConfig;
//!
//! let config = ThemeConfig::parse("[Icon Theme]\nName=Demo\nDirectories=16x16/apps,scalable/apps\n")?;
//! assert_eq!(config.get("Icon Theme", "Name"), Some("Demo"));
//! assert_eq!(
//!     config.get_list("Icon Theme", "Directories"),
//!     Some(vec!["16x16/apps".to_string(), "scalable/apps".to_string()])
//! );
//! # Ok::<(), iconslice_core::Error>(())
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use ini::{EscapePolicy, Ini, Properties, WriteOption};

use crate::error::{Error, Result};

/// An ordered set of named sections holding ordered key/value pairs.
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    ini: Ini,
}

impl ThemeConfig {
    /// Creates an empty config.
    pub fn new() -> Self {
        Self { ini: Ini::new() }
    }

    /// Parses config text.
    ///
    /// Fails with [`Error::MalformedConfig`] naming the line on anything that
    /// is not blank, a `#` comment, a `[section]` header, or a `key=value`
    /// pair inside a section. Repeated sections and repeated keys within a
    /// section are errors too.
    pub fn parse(text: &str) -> Result<Self> {
        let mut ini = Ini::new();
        let mut current: Option<String> = None;

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(name) = section_header(line) {
                if ini.section(Some(name)).is_some() {
                    return Err(line_error(line_no, format!("duplicate section [{name}]")));
                }
                ini.entry(Some(name.to_string()))
                    .or_insert_with(Default::default);
                current = Some(name.to_string());
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(line_error(
                    line_no,
                    format!("expected key=value, found '{line}'"),
                ));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(line_error(line_no, format!("missing key in '{line}'")));
            }
            let Some(section) = current.as_deref() else {
                return Err(line_error(
                    line_no,
                    format!("'{key}' appears before any section header"),
                ));
            };
            if ini
                .section(Some(section))
                .is_some_and(|props| props.contains_key(key))
            {
                return Err(line_error(
                    line_no,
                    format!("duplicate key '{key}' in [{section}]"),
                ));
            }
            ini.with_section(Some(section)).set(key, value.trim());
        }

        Ok(Self { ini })
    }

    /// Reads and parses a config file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&text).map_err(|e| match e {
            Error::MalformedConfig { message } => {
                Error::malformed(format!("{}: {}", path.display(), message))
            }
            other => other,
        })
    }

    /// Returns true if a section with this name was declared.
    pub fn has_section(&self, name: &str) -> bool {
        self.ini.section(Some(name)).is_some()
    }

    /// Looks up a declared section.
    ///
    /// Asking for a section that was never declared is a
    /// [`Error::MalformedConfig`].
    pub fn section(&self, name: &str) -> Result<&Properties> {
        self.ini
            .section(Some(name))
            .ok_or_else(|| Error::malformed(format!("no section named [{name}]")))
    }

    /// Gets a raw value, or `None` if the section or key is absent.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.ini.section(Some(section)).and_then(|s| s.get(key))
    }

    /// Gets a comma separated value as a list.
    ///
    /// Entries are trimmed and empty entries are dropped, so `Directories=`
    /// yields an empty list rather than a single empty name.
    pub fn get_list(&self, section: &str, key: &str) -> Option<Vec<String>> {
        self.get(section, key).map(split_list)
    }

    /// Sets a value, creating the section if needed.
    ///
    /// New sections are appended after existing ones; new keys are appended
    /// at the end of their section.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.ini.with_section(Some(section)).set(key, value.into());
    }

    /// Returns declared section names in file order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.ini.sections().flatten()
    }

    /// Returns the key/value pairs of a section in file order.
    ///
    /// Returns an empty iterator if the section doesn't exist.
    pub fn entries(&self, section: &str) -> impl Iterator<Item = (&str, &str)> {
        self.ini
            .section(Some(section))
            .into_iter()
            .flat_map(|props| props.iter())
    }

    /// Serializes the config as `key=value` lines grouped by section.
    pub fn to_text(&self) -> String {
        let opt = WriteOption {
            escape_policy: EscapePolicy::Nothing,
            kv_separator: "=",
            ..WriteOption::default()
        };
        let mut output = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.ini.write_to_opt(&mut output, opt);
        String::from_utf8_lossy(&output).into_owned()
    }

    /// Writes the config to a file, replacing any existing content.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_text()).map_err(|e| Error::io(path, e))
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ThemeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Splits a comma separated list value.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Name of a `[section]` header line.
///
/// Everything between the first `[` and the last `]` is the name, so
/// `[16x16 [extra]]` names `16x16 [extra]`.
fn section_header(line: &str) -> Option<&str> {
    line.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .filter(|name| !name.is_empty())
}

fn line_error(line_no: usize, message: String) -> Error {
    Error::malformed(format!("line {line_no}: {message}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sections_and_keys() {
        let config = ThemeConfig::parse(
            "# A theme\n[Icon Theme]\nName=Demo\nDirectories=16x16/apps\n\n[16x16/apps]\nSize=16\n",
        )
        .unwrap();

        assert!(config.has_section("Icon Theme"));
        assert!(config.has_section("16x16/apps"));
        assert_eq!(config.get("Icon Theme", "Name"), Some("Demo"));
        assert_eq!(config.get("16x16/apps", "Size"), Some("16"));
        assert_eq!(config.get("16x16/apps", "Scale"), None);
    }

    #[test]
    fn test_keys_preserve_case() {
        let config = ThemeConfig::parse("[dir]\nMaxSize=32\nmaxsize=64\n").unwrap();
        assert_eq!(config.get("dir", "MaxSize"), Some("32"));
        assert_eq!(config.get("dir", "maxsize"), Some("64"));
        assert_eq!(config.get("dir", "MAXSIZE"), None);
    }

    #[test]
    fn test_line_without_delimiter_is_malformed() {
        let err = ThemeConfig::parse("[Icon Theme]\nName=Demo\njunk\n").unwrap_err();
        assert!(matches!(err, Error::MalformedConfig { .. }));
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_colon_is_not_a_delimiter() {
        let err = ThemeConfig::parse("[Icon Theme]\nName: Demo\n").unwrap_err();
        assert!(matches!(err, Error::MalformedConfig { .. }));
    }

    #[test]
    fn test_undeclared_section_lookup() {
        let config = ThemeConfig::parse("[Icon Theme]\nName=Demo\n").unwrap();
        assert!(config.section("Icon Theme").is_ok());
        assert!(matches!(
            config.section("16x16/apps"),
            Err(Error::MalformedConfig { .. })
        ));
    }

    #[test]
    fn test_get_list() {
        let config =
            ThemeConfig::parse("[Icon Theme]\nDirectories=a, b ,,c\nScaledDirectories=\n").unwrap();
        assert_eq!(
            config.get_list("Icon Theme", "Directories"),
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
        assert_eq!(
            config.get_list("Icon Theme", "ScaledDirectories"),
            Some(Vec::new())
        );
        assert_eq!(config.get_list("Icon Theme", "Missing"), None);
    }

    #[test]
    fn test_serialization_order_and_format() {
        let mut config = ThemeConfig::new();
        config.set("Icon Theme", "Name", "Demo");
        config.set("Icon Theme", "Comment", "Generated");
        config.set("abc", "Size", "16");
        config.set("abc", "Type", "Fixed");

        let text = config.to_text();
        let header = text.find("[Icon Theme]").unwrap();
        let name = text.find("Name=Demo").unwrap();
        let comment = text.find("Comment=Generated").unwrap();
        let section = text.find("[abc]").unwrap();
        let size = text.find("Size=16").unwrap();
        assert!(header < name && name < comment && comment < section && section < size);
        assert!(!text.contains(" = "));
    }

    #[test]
    fn test_text_roundtrip() {
        let mut config = ThemeConfig::new();
        config.set("Icon Theme", "Name", "My Theme");
        config.set("Icon Theme", "Directories", "x,y");
        config.set("x", "Size", "16");

        let parsed = ThemeConfig::parse(&config.to_text()).unwrap();
        assert_eq!(parsed.get("Icon Theme", "Name"), Some("My Theme"));
        assert_eq!(parsed.get("x", "Size"), Some("16"));
        let names: Vec<_> = parsed.section_names().collect();
        assert_eq!(names, vec!["Icon Theme", "x"]);
    }

    #[test]
    fn test_entries() {
        let config = ThemeConfig::parse("[dir]\nSize=48\nType=Scalable\n").unwrap();
        let entries: Vec<_> = config.entries("dir").collect();
        assert_eq!(entries, vec![("Size", "48"), ("Type", "Scalable")]);
        assert_eq!(config.entries("missing").count(), 0);
    }

    #[test]
    fn test_duplicate_section_is_malformed() {
        let err = ThemeConfig::parse("[a]\nSize=16\n\n[a]\nScale=2\nType=Fixed\n").unwrap_err();
        assert!(matches!(err, Error::MalformedConfig { .. }));
        let message = err.to_string();
        assert!(message.contains("line 4"), "{message}");
        assert!(message.contains("duplicate section [a]"), "{message}");
    }

    #[test]
    fn test_duplicate_key_is_malformed() {
        let err = ThemeConfig::parse("[d]\nSize=16\nSize=32\n").unwrap_err();
        assert!(matches!(err, Error::MalformedConfig { .. }));
        let message = err.to_string();
        assert!(message.contains("line 3"), "{message}");
        assert!(message.contains("duplicate key 'Size'"), "{message}");
    }

    #[test]
    fn test_same_key_in_different_sections() {
        let config = ThemeConfig::parse("[a]\nSize=16\n[b]\nSize=32\n").unwrap();
        assert_eq!(config.get("a", "Size"), Some("16"));
        assert_eq!(config.get("b", "Size"), Some("32"));
    }

    #[test]
    fn test_semicolon_is_not_a_comment() {
        let config = ThemeConfig::parse("[d]\n;Size=16\nSize=8\n").unwrap();
        let entries: Vec<_> = config.entries("d").collect();
        assert_eq!(entries, vec![(";Size", "16"), ("Size", "8")]);
    }

    #[test]
    fn test_nested_brackets_in_section_name() {
        let config = ThemeConfig::parse("[16x16 [extra]]\nSize=16\n").unwrap();
        assert_eq!(config.get("16x16 [extra]", "Size"), Some("16"));
        assert!(!config.has_section("16x16 [extra"));
    }

    #[test]
    fn test_key_before_section_is_malformed() {
        let err = ThemeConfig::parse("Name=Demo\n[Icon Theme]\n").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_empty_section_is_declared() {
        let config = ThemeConfig::parse("[empty]\n[dir]\nSize=16\n").unwrap();
        assert!(config.has_section("empty"));
        assert_eq!(config.entries("empty").count(), 0);
        let names: Vec<_> = config.section_names().collect();
        assert_eq!(names, vec!["empty", "dir"]);
    }
}
