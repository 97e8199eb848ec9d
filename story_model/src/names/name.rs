//! Character display metadata.

use serde::{Deserialize, Serialize};

use super::NameId;

/// Display metadata for one character.
///
/// Every field but the id is optional; blank strings are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    id: NameId,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub full: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub last: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub web_title: Option<String>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// Editable fields of a [`Name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    Full,
    First,
    Last,
    Title,
    Position,
    WebTitle,
}

impl NameField {
    pub const ALL: [NameField; 6] = [
        NameField::First,
        NameField::Last,
        NameField::Full,
        NameField::Position,
        NameField::Title,
        NameField::WebTitle,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            NameField::Full => "full name",
            NameField::First => "first name",
            NameField::Last => "last name",
            NameField::Title => "title",
            NameField::Position => "position",
            NameField::WebTitle => "website title",
        }
    }
}

impl Name {
    /// Create a name with only an id.
    pub fn new(id: impl Into<NameId>) -> Self {
        Self {
            id: id.into(),
            full: None,
            first: None,
            last: None,
            title: None,
            position: None,
            web_title: None,
        }
    }

    /// The character id. It is fixed once the name exists.
    pub fn id(&self) -> &NameId {
        &self.id
    }

    /// Set the full name.
    pub fn with_full(mut self, full: impl Into<String>) -> Self {
        self.set(NameField::Full, full);
        self
    }

    /// Set first and last name.
    pub fn with_first_last(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.set(NameField::First, first);
        self.set(NameField::Last, last);
        self
    }

    /// Read a field.
    pub fn get(&self, field: NameField) -> Option<&str> {
        let value = match field {
            NameField::Full => &self.full,
            NameField::First => &self.first,
            NameField::Last => &self.last,
            NameField::Title => &self.title,
            NameField::Position => &self.position,
            NameField::WebTitle => &self.web_title,
        };
        value.as_deref().filter(|v| !v.trim().is_empty())
    }

    /// Overwrite a field. Blank text clears it.
    pub fn set(&mut self, field: NameField, value: impl Into<String>) {
        let value = value.into();
        let value = if value.trim().is_empty() { None } else { Some(value) };
        let slot = match field {
            NameField::Full => &mut self.full,
            NameField::First => &mut self.first,
            NameField::Last => &mut self.last,
            NameField::Title => &mut self.title,
            NameField::Position => &mut self.position,
            NameField::WebTitle => &mut self.web_title,
        };
        *slot = value;
    }

    /// The best name to show a reader: full name, then "first last", then the id.
    pub fn display(&self) -> String {
        if let Some(full) = self.get(NameField::Full) {
            return full.to_string();
        }
        match (self.get(NameField::First), self.get(NameField::Last)) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(only), None) | (None, Some(only)) => only.to_string(),
            (None, None) => self.id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_fallbacks() {
        assert_eq!(Name::new("amy").with_full("Amy Smith").display(), "Amy Smith");
        assert_eq!(
            Name::new("bo").with_first_last("Bo", "Jones").display(),
            "Bo Jones"
        );
        assert_eq!(Name::new("cy").display(), "cy");
    }

    #[test]
    fn test_blank_value_clears_field() {
        let mut name = Name::new("amy").with_full("Amy");
        name.set(NameField::Full, "  ");
        assert_eq!(name.get(NameField::Full), None);
        assert!(name.full.is_none());
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let mut name = Name::new("Amy").with_full("Amy Smith");
        name.title = Some(String::new());

        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, r#"{"id":"amy","full":"Amy Smith"}"#);
    }

    #[test]
    fn test_whitespace_fields_are_absent() {
        let name: Name =
            serde_json::from_str(r#"{"id":"amy","full":"  ","first":"Amy","last":"\t"}"#).unwrap();
        assert_eq!(name.get(NameField::Full), None);
        assert_eq!(name.display(), "Amy");

        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, r#"{"id":"amy","first":"Amy"}"#);
    }

    #[test]
    fn test_deserialize_folds_id() {
        let name: Name = serde_json::from_str(r#"{"id":"AMY","first":"Amy"}"#).unwrap();
        assert_eq!(name.id, NameId::new("amy"));
        assert_eq!(name.get(NameField::First), Some("Amy"));
        assert_eq!(name.get(NameField::Full), None);
    }
}
