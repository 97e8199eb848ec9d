//! Day-bearing records owned by a route: deaths and events.

use crate::days::{normalize_days, Dated, Day};
use crate::names::NameId;

/// How many times a character died on one route, and on which days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Death {
    pub id: NameId,
    /// Additive across a route and its ancestors.
    pub count: u32,
    days: Vec<Day>,
}

impl Death {
    /// Create a death record. Days are sorted.
    pub fn new(id: impl Into<NameId>, count: u32, mut days: Vec<Day>) -> Self {
        normalize_days(&mut days);
        Self {
            id: id.into(),
            count,
            days,
        }
    }

    /// Replace the days, keeping them sorted.
    pub fn set_days(&mut self, mut days: Vec<Day>) {
        normalize_days(&mut days);
        self.days = days;
    }
}

impl Dated for Death {
    fn days(&self) -> &[Day] {
        &self.days
    }
}

/// A change to one field of a [`Death`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeathUpdate {
    /// Move the record to another character.
    Target(String),
    Count(u32),
    Days(Vec<Day>),
}

/// A notable happening on a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub description: String,
    days: Vec<Day>,
}

impl Event {
    /// Create an event. Days are sorted.
    pub fn new(description: impl Into<String>, mut days: Vec<Day>) -> Self {
        normalize_days(&mut days);
        Self {
            description: description.into(),
            days,
        }
    }

    /// Replace the days, keeping them sorted.
    pub fn set_days(&mut self, mut days: Vec<Day>) {
        normalize_days(&mut days);
        self.days = days;
    }
}

impl Dated for Event {
    fn days(&self) -> &[Day] {
        &self.days
    }
}

/// A change to one field of an [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventUpdate {
    Description(String),
    Days(Vec<Day>),
}
