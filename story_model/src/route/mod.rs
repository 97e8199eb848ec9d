//! Routes - the nodes of the story tree.

mod branch;
mod record;

pub use branch::*;
pub use record::*;

use indexmap::IndexMap;
use uuid::Uuid;

use crate::days::{sort_by_days, Dated};
use crate::names::{NameId, NameRegistry};
use crate::EditError;

/// In-memory identifier of a base route.
///
/// Base routes are keyed by this rather than by display name, so two routes may
/// share a name. Ids are not persisted; every load assigns fresh ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteId(pub Uuid);

impl RouteId {
    /// Create a new random route ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RouteId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One narrative segment: its own deaths and events, and an optional branch
/// leading to child routes.
///
/// Deaths are keyed by character and iterate in first-day order; events are
/// kept in first-day order. Both orders are restored after every edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub name: String,
    deaths: IndexMap<NameId, Death>,
    events: Vec<Event>,
    branch: Option<Branch>,
}

impl Route {
    /// Create an empty route.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deaths: IndexMap::new(),
            events: Vec::new(),
            branch: None,
        }
    }

    /// Assemble a route from loaded records.
    ///
    /// No registry check happens here; a later death for the same character
    /// replaces an earlier one.
    pub fn from_parts(
        name: impl Into<String>,
        deaths: Vec<Death>,
        events: Vec<Event>,
        branch: Option<Branch>,
    ) -> Self {
        let mut route = Self::new(name);
        for death in deaths {
            if let Some(previous) = route.deaths.insert(death.id.clone(), death) {
                log::warn!(
                    "route \"{}\" records {} twice; keeping the later entry",
                    route.name,
                    previous.id
                );
            }
        }
        route.sort_deaths();
        route.events = events;
        sort_by_days(&mut route.events);
        route.branch = branch;
        route
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    // -- deaths --

    /// This route's own deaths in first-day order.
    pub fn deaths(&self) -> impl Iterator<Item = &Death> {
        self.deaths.values()
    }

    pub fn death(&self, id: &str) -> Option<&Death> {
        self.deaths.get(&NameId::new(id))
    }

    pub fn death_count(&self) -> usize {
        self.deaths.len()
    }

    /// Record a death, replacing any existing record for the same character.
    pub fn add_death(&mut self, names: &NameRegistry, death: Death) -> Result<(), EditError> {
        names.get(death.id.as_str())?;
        self.deaths.insert(death.id.clone(), death);
        self.sort_deaths();
        Ok(())
    }

    pub fn remove_death(&mut self, id: &str) -> Result<Death, EditError> {
        let key = NameId::new(id);
        self.deaths
            .shift_remove(&key)
            .ok_or_else(|| EditError::NoSuchDeath(key.to_string()))
    }

    /// Change one field of an existing death.
    pub fn update_death(
        &mut self,
        names: &NameRegistry,
        id: &str,
        update: DeathUpdate,
    ) -> Result<(), EditError> {
        let key = NameId::new(id);
        if !self.deaths.contains_key(&key) {
            return Err(EditError::NoSuchDeath(key.to_string()));
        }

        match update {
            DeathUpdate::Target(target) => {
                let target = names.resolve(&target)?;
                if target == key {
                    return Ok(());
                }
                if self.deaths.contains_key(&target) {
                    return Err(EditError::DeathExists(target.to_string()));
                }
                if let Some(mut death) = self.deaths.shift_remove(&key) {
                    death.id = target.clone();
                    self.deaths.insert(target, death);
                }
            }
            DeathUpdate::Count(count) => {
                if let Some(death) = self.deaths.get_mut(&key) {
                    death.count = count;
                }
            }
            DeathUpdate::Days(days) => {
                if let Some(death) = self.deaths.get_mut(&key) {
                    death.set_days(days);
                }
            }
        }
        self.sort_deaths();
        Ok(())
    }

    fn sort_deaths(&mut self) {
        self.deaths
            .sort_by(|_, a, _, b| a.first_day().cmp(&b.first_day()));
    }

    // -- events --

    /// Events in first-day order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
        sort_by_days(&mut self.events);
    }

    pub fn remove_event(&mut self, index: usize) -> Result<Event, EditError> {
        EditError::check_index(index, self.events.len())?;
        Ok(self.events.remove(index))
    }

    pub fn update_event(&mut self, index: usize, update: EventUpdate) -> Result<(), EditError> {
        EditError::check_index(index, self.events.len())?;
        let event = &mut self.events[index];
        match update {
            EventUpdate::Description(description) => event.description = description,
            EventUpdate::Days(days) => {
                event.set_days(days);
                sort_by_days(&mut self.events);
            }
        }
        Ok(())
    }

    // -- branch --

    pub fn branch(&self) -> Option<&Branch> {
        self.branch.as_ref()
    }

    pub fn branch_mut(&mut self) -> Result<&mut Branch, EditError> {
        self.branch.as_mut().ok_or(EditError::NoBranch)
    }

    /// Add a branch, or replace the existing one (and its subtree).
    pub fn set_branch(&mut self, branch: Branch) -> Option<Branch> {
        self.branch.replace(branch)
    }

    pub fn remove_branch(&mut self) -> Result<Branch, EditError> {
        self.branch.take().ok_or(EditError::NoBranch)
    }

    /// The route behind choice `index` of this route's branch.
    pub fn child(&self, index: usize) -> Result<&Route, EditError> {
        let branch = self.branch.as_ref().ok_or(EditError::NoBranch)?;
        Ok(&branch.choice(index)?.route)
    }

    pub fn child_mut(&mut self, index: usize) -> Result<&mut Route, EditError> {
        Ok(&mut self.branch_mut()?.choice_mut(index)?.route)
    }
}
