//! Characters of the story and the registry that names them.

mod name;
mod registry;

pub use name::*;
pub use registry::*;

use serde::{Deserialize, Serialize};

/// Case-insensitive character identifier.
///
/// Always stored trimmed and lowercased, so two ids compare equal exactly when
/// the registry would treat them as the same character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct NameId(String);

impl NameId {
    /// Create an identifier, folding case and surrounding whitespace.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for NameId {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for NameId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<NameId> for String {
    fn from(id: NameId) -> Self {
        id.0
    }
}

impl std::fmt::Display for NameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_id_folds_case() {
        assert_eq!(NameId::new("  Amy "), NameId::new("amy"));
        assert_eq!(NameId::new("AMY").as_str(), "amy");
        assert!(NameId::new("   ").is_empty());
    }
}
