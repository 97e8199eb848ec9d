//! The character registry.

use indexmap::IndexMap;

use super::{Name, NameField, NameId};
use crate::EditError;

/// Insertion-ordered mapping from character id to display metadata.
///
/// Every lookup folds the query the same way ids are folded on insertion, so
/// `"Amy"`, `"amy"` and `" AMY "` all address the same entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameRegistry {
    names: IndexMap<NameId, Name>,
}

impl NameRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fully built name and return its id. Fails if the id is empty or
    /// already present.
    pub fn add(&mut self, name: Name) -> Result<NameId, EditError> {
        let id = name.id().clone();
        if id.is_empty() {
            return Err(EditError::EmptyName);
        }
        if self.names.contains_key(&id) {
            return Err(EditError::DuplicateName(id.to_string()));
        }
        log::debug!("registering character {}", id);
        self.names.insert(id.clone(), name);
        Ok(id)
    }

    /// Add a bare entry with only an id.
    pub fn add_id(&mut self, id: &str) -> Result<NameId, EditError> {
        self.add(Name::new(id))
    }

    /// Look up a name.
    pub fn get(&self, id: &str) -> Result<&Name, EditError> {
        self.names
            .get(&NameId::new(id))
            .ok_or_else(|| EditError::UnknownName(NameId::new(id).to_string()))
    }

    /// Overwrite one field of an existing name.
    pub fn update(&mut self, id: &str, field: NameField, value: impl Into<String>) -> Result<(), EditError> {
        let key = NameId::new(id);
        let name = self
            .names
            .get_mut(&key)
            .ok_or_else(|| EditError::UnknownName(key.to_string()))?;
        name.set(field, value);
        Ok(())
    }

    /// Check whether an id is registered.
    pub fn exists(&self, id: &str) -> bool {
        self.names.contains_key(&NameId::new(id))
    }

    /// Resolve user text to a registered id.
    pub fn resolve(&self, id: &str) -> Result<NameId, EditError> {
        self.get(id).map(|name| name.id().clone())
    }

    /// All names in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &Name> {
        self.names.values()
    }

    /// Display name for an id, falling back to the id for unknown characters.
    pub fn display_name(&self, id: &NameId) -> String {
        self.names
            .get(id)
            .map(Name::display)
            .unwrap_or_else(|| id.to_string())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
