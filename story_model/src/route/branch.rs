//! Decision points and the choices that leave them.

use super::Route;
use crate::days::Day;
use crate::EditError;

/// One labeled option at a branch, owning the route it leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Open direction tag such as "left" or "right". Stored lowercased.
    pub direction: String,
    pub label: String,
    pub route: Route,
}

impl Choice {
    /// Create a choice leading to an existing route.
    pub fn new(direction: &str, label: impl Into<String>, route: Route) -> Self {
        Self {
            direction: direction.trim().to_lowercase(),
            label: label.into(),
            route,
        }
    }

    /// Create a choice leading to a fresh, empty route.
    ///
    /// Without an explicit name the route is called `"<parent> <DIRECTION> BRANCH"`.
    pub fn with_empty_route(
        direction: &str,
        label: impl Into<String>,
        route_name: Option<String>,
        parent_name: &str,
    ) -> Self {
        let direction = direction.trim().to_lowercase();
        let route_name = route_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| format!("{} {} BRANCH", parent_name, direction.to_uppercase()));
        Self {
            direction,
            label: label.into(),
            route: Route::new(route_name),
        }
    }
}

/// A decision point on a route.
///
/// Always holds at least one choice; choices keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub day: Day,
    choices: Vec<Choice>,
}

impl Branch {
    /// Create a branch. Fails without choices.
    pub fn new(name: impl Into<String>, day: Day, choices: Vec<Choice>) -> Result<Self, EditError> {
        if choices.is_empty() {
            return Err(EditError::EmptyBranch);
        }
        Ok(Self {
            name: name.into(),
            day,
            choices,
        })
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_day(&mut self, day: Day) {
        self.day = day;
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn choice(&self, index: usize) -> Result<&Choice, EditError> {
        EditError::check_index(index, self.choices.len())?;
        Ok(&self.choices[index])
    }

    pub fn choice_mut(&mut self, index: usize) -> Result<&mut Choice, EditError> {
        EditError::check_index(index, self.choices.len())?;
        Ok(&mut self.choices[index])
    }

    /// Index of the first choice with the given direction tag.
    pub fn find_direction(&self, direction: &str) -> Result<usize, EditError> {
        let direction = direction.trim().to_lowercase();
        self.choices
            .iter()
            .position(|choice| choice.direction == direction)
            .ok_or(EditError::NoSuchDirection(direction))
    }

    /// Append a choice after the existing ones.
    pub fn add_choice(&mut self, choice: Choice) {
        self.choices.push(choice);
    }

    pub fn relabel_choice(&mut self, index: usize, label: impl Into<String>) -> Result<(), EditError> {
        self.choice_mut(index)?.label = label.into();
        Ok(())
    }

    /// Remove a choice together with its whole subtree.
    ///
    /// The last remaining choice cannot be removed; remove the branch instead.
    pub fn remove_choice(&mut self, index: usize) -> Result<Choice, EditError> {
        EditError::check_index(index, self.choices.len())?;
        if self.choices.len() == 1 {
            return Err(EditError::EmptyBranch);
        }
        Ok(self.choices.remove(index))
    }
}
