//! Property digests used to group icons.
//!
//! Icons whose directories declare the same rendering properties are merged
//! into one output directory named after the digest of those properties.
//! The digest only namespaces directories; it is not a security boundary.

use std::fmt;

use crate::theme::IconProperties;

/// Hex digest of a set of [`IconProperties`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyDigest(String);

impl PropertyDigest {
    /// Compute the digest of `props`.
    ///
    /// Fields are fed in a fixed order: size, scale, type name, max size,
    /// min size, threshold. Integers are 4-byte big-endian. An absent
    /// optional field is fed as zero, so absent and `0` hash the same.
    pub fn of(props: &IconProperties) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&props.size.to_be_bytes());
        hasher.update(&props.scale.to_be_bytes());
        hasher.update(props.size_type.as_str().as_bytes());
        hasher.update(&props.max_size.unwrap_or(0).to_be_bytes());
        hasher.update(&props.min_size.unwrap_or(0).to_be_bytes());
        hasher.update(&props.threshold.unwrap_or(0).to_be_bytes());
        Self(hasher.finalize().to_hex().to_string())
    }

    /// Get the digest as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PropertyDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::IconSizeType;

    fn base() -> IconProperties {
        IconProperties::new(16).with_bounds(16, 16).with_threshold(2)
    }

    #[test]
    fn test_digest_is_stable_hex() {
        let a = PropertyDigest::of(&base());
        let b = PropertyDigest::of(&base());
        assert_eq!(a, b);
        assert_eq!(a.as_str().len(), 64);
        assert!(a.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_every_field_changes_digest() {
        let reference = PropertyDigest::of(&base());
        let variants = [
            IconProperties { size: 24, ..base() },
            base().with_scale(2),
            base().with_type(IconSizeType::Fixed),
            base().with_type(IconSizeType::Scalable),
            IconProperties {
                max_size: Some(32),
                ..base()
            },
            IconProperties {
                min_size: Some(8),
                ..base()
            },
            base().with_threshold(3),
        ];

        for props in &variants {
            assert_ne!(PropertyDigest::of(props), reference, "{props:?}");
        }
    }

    #[test]
    fn test_absent_hashes_like_zero() {
        let absent = IconProperties::new(16);
        let zero = IconProperties {
            max_size: Some(0),
            min_size: Some(0),
            threshold: Some(0),
            ..IconProperties::new(16)
        };
        assert_eq!(PropertyDigest::of(&absent), PropertyDigest::of(&zero));
    }
}
