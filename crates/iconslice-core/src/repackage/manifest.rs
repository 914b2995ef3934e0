//! Qt resource collection (`.qrc`) manifest.

use std::fs;
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{Error, Result};

/// Every file of a generated theme, listed under one resource prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceManifest {
    prefix: String,
    files: Vec<String>,
}

impl ResourceManifest {
    /// Create an empty manifest for `prefix` (e.g. `/icons/mytheme`).
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            files: Vec::new(),
        }
    }

    /// Listed files, relative to the theme root, in insertion order.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Appends a file. Returns false if it was already listed.
    pub fn add_file(&mut self, rel_path: impl Into<String>) -> bool {
        let rel_path = rel_path.into();
        if self.files.contains(&rel_path) {
            return false;
        }
        self.files.push(rel_path);
        true
    }

    /// Renders the manifest as indented XML.
    pub fn to_xml(&self) -> String {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        // Writing into a Vec cannot fail.
        let _ = writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)));
        let _ = writer.write_event(Event::Start(BytesStart::new("RCC")));

        let mut qresource = BytesStart::new("qresource");
        qresource.push_attribute(("prefix", self.prefix.as_str()));
        if self.files.is_empty() {
            let _ = writer.write_event(Event::Empty(qresource));
        } else {
            let _ = writer.write_event(Event::Start(qresource));
            for file in &self.files {
                let _ = writer.write_event(Event::Start(BytesStart::new("file")));
                let _ = writer.write_event(Event::Text(BytesText::new(file)));
                let _ = writer.write_event(Event::End(BytesEnd::new("file")));
            }
            let _ = writer.write_event(Event::End(BytesEnd::new("qresource")));
        }

        let _ = writer.write_event(Event::End(BytesEnd::new("RCC")));

        let mut xml = String::from_utf8_lossy(&writer.into_inner()).into_owned();
        xml.push('\n');
        xml
    }

    /// Writes the manifest to `path`.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_xml()).map_err(|e| Error::io(path, e))
    }
}
