use serde::Serialize;
use std::fmt;

use crate::error::ConvertError;

/// Symbol prefix: a valid C identifier naming every emitted array and file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Prefix(String);

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl Prefix {
    /// Validate `name` as a C identifier.
    pub fn new(name: impl Into<String>) -> Result<Self, ConvertError> {
        let name = name.into();
        let mut chars = name.chars();
        let valid = chars.next().is_some_and(is_ident_start) && chars.all(is_ident_char);
        if !valid {
            return Err(ConvertError::InvalidInput(format!(
                "prefix '{name}' is not a valid C identifier"
            )));
        }
        Ok(Self(name))
    }

    /// Turn an arbitrary file stem into an identifier.
    ///
    /// Invalid characters become `_`, a leading digit gets a `_` in front,
    /// and an empty stem becomes `asset`.
    pub fn sanitize(stem: &str) -> Self {
        let mut name: String = stem
            .chars()
            .map(|c| if is_ident_char(c) { c } else { '_' })
            .collect();
        if name.is_empty() {
            name.push_str("asset");
        } else if name.starts_with(|c: char| c.is_ascii_digit()) {
            name.insert(0, '_');
        }
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        for name in ["sprite", "_tmp", "level2_bg", "A"] {
            assert_eq!(Prefix::new(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn test_invalid_identifiers() {
        for name in ["", "2cool", "has space", "dash-ed", "ünï"] {
            assert!(
                matches!(Prefix::new(name), Err(ConvertError::InvalidInput(_))),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(Prefix::sanitize("hero-walk").as_str(), "hero_walk");
        assert_eq!(Prefix::sanitize("8bit").as_str(), "_8bit");
        assert_eq!(Prefix::sanitize("").as_str(), "asset");
        assert_eq!(Prefix::sanitize("a.b c").as_str(), "a_b_c");
    }

    #[test]
    fn test_sanitized_is_always_valid() {
        for stem in ["hero-walk", "8bit", "", "ünï", "__"] {
            let p = Prefix::sanitize(stem);
            assert!(Prefix::new(p.as_str()).is_ok(), "{p} not valid");
        }
    }
}
