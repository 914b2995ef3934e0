//! Mapping between directory sections as written and full icon properties.
//!
//! A directory section may leave out every key except `Size`. Loading fills
//! the gaps with defaults ([`DirectorySpec::defaults_applied`]); writing a new
//! theme goes the other way and drops whatever a reader would fill back in
//! ([`DirectorySpec::minimal_form`]).
//!
//! | Key         | Default             | Written when                       |
//! |-------------|---------------------|------------------------------------|
//! | `Size`      | required            | always                             |
//! | `Scale`     | `1`                 | not 1                              |
//! | `Type`      | `Threshold`         | not `Threshold`                    |
//! | `MaxSize`   | `Size`              | `Type=Fixed` and differs from Size |
//! | `MinSize`   | `Size`              | `Type=Fixed` and differs from Size |
//! | `Threshold` | `2`                 | `Type=Threshold` and not 2         |

use std::str::FromStr;

use crate::config::ThemeConfig;
use crate::error::{Error, Result};

use super::types::{IconProperties, IconSizeType};

pub const KEY_SIZE: &str = "Size";
pub const KEY_SCALE: &str = "Scale";
pub const KEY_TYPE: &str = "Type";
pub const KEY_MAX_SIZE: &str = "MaxSize";
pub const KEY_MIN_SIZE: &str = "MinSize";
pub const KEY_THRESHOLD: &str = "Threshold";

/// A directory section with only the keys that were actually present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectorySpec {
    pub size: u32,
    pub scale: Option<u32>,
    pub size_type: Option<IconSizeType>,
    pub max_size: Option<u32>,
    pub min_size: Option<u32>,
    pub threshold: Option<u32>,
}

impl DirectorySpec {
    /// Create a spec holding only a size.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Reads a directory section.
    ///
    /// `Size` is required and must be a positive integer. Other keys are
    /// optional but must parse when present.
    pub fn from_section(config: &ThemeConfig, section: &str) -> Result<Self> {
        let props = config.section(section)?;

        let size: u32 = match props.get(KEY_SIZE) {
            Some(raw) => parse_number(section, KEY_SIZE, raw)?,
            None => {
                return Err(Error::malformed(format!(
                    "[{section}] is missing required key {KEY_SIZE}"
                )));
            }
        };
        if size == 0 {
            return Err(Error::malformed(format!(
                "[{section}] {KEY_SIZE} must be positive"
            )));
        }

        let optional = |key: &str| -> Result<Option<u32>> {
            props
                .get(key)
                .map(|raw| parse_number(section, key, raw))
                .transpose()
        };

        Ok(Self {
            size,
            scale: optional(KEY_SCALE)?,
            size_type: props
                .get(KEY_TYPE)
                .map(|raw| IconSizeType::from_str(raw.trim()))
                .transpose()?,
            max_size: optional(KEY_MAX_SIZE)?,
            min_size: optional(KEY_MIN_SIZE)?,
            threshold: optional(KEY_THRESHOLD)?,
        })
    }

    /// Writes the present keys into `section`, in a fixed key order.
    pub fn write_section(&self, config: &mut ThemeConfig, section: &str) {
        config.set(section, KEY_SIZE, self.size.to_string());
        if let Some(scale) = self.scale {
            config.set(section, KEY_SCALE, scale.to_string());
        }
        if let Some(size_type) = self.size_type {
            config.set(section, KEY_TYPE, size_type.as_str());
        }
        if let Some(max_size) = self.max_size {
            config.set(section, KEY_MAX_SIZE, max_size.to_string());
        }
        if let Some(min_size) = self.min_size {
            config.set(section, KEY_MIN_SIZE, min_size.to_string());
        }
        if let Some(threshold) = self.threshold {
            config.set(section, KEY_THRESHOLD, threshold.to_string());
        }
    }

    /// Fills every absent key with its default.
    pub fn defaults_applied(&self) -> IconProperties {
        IconProperties {
            size: self.size,
            scale: self.scale.unwrap_or(IconProperties::DEFAULT_SCALE),
            size_type: self.size_type.unwrap_or_default(),
            max_size: Some(self.max_size.unwrap_or(self.size)),
            min_size: Some(self.min_size.unwrap_or(self.size)),
            threshold: Some(self.threshold.unwrap_or(IconProperties::DEFAULT_THRESHOLD)),
        }
    }

    /// Keeps only the keys a reader could not recover from defaults.
    ///
    /// Size bounds are only meaningful for `Fixed` directories and the
    /// threshold only for `Threshold` ones; `Scalable` never carries either.
    pub fn minimal_form(props: &IconProperties) -> Self {
        let mut spec = Self::new(props.size);

        if props.scale != IconProperties::DEFAULT_SCALE {
            spec.scale = Some(props.scale);
        }
        if props.size_type != IconSizeType::Threshold {
            spec.size_type = Some(props.size_type);
        }

        match props.size_type {
            IconSizeType::Fixed => {
                if props.max_size_or_default() != props.size {
                    spec.max_size = Some(props.max_size_or_default());
                }
                if props.min_size_or_default() != props.size {
                    spec.min_size = Some(props.min_size_or_default());
                }
            }
            IconSizeType::Threshold => {
                if props.threshold_or_default() != IconProperties::DEFAULT_THRESHOLD {
                    spec.threshold = Some(props.threshold_or_default());
                }
            }
            IconSizeType::Scalable => {}
        }

        spec
    }
}

fn parse_number(section: &str, key: &str, raw: &str) -> Result<u32> {
    raw.trim().parse().map_err(|_| {
        Error::malformed(format!(
            "[{section}] {key}={raw} is not a non-negative integer"
        ))
    })
}
