//! The story tree - the root holding all characters and base routes.

use indexmap::IndexMap;

use crate::names::{NameId, NameRegistry};
use crate::route::{Route, RouteId};
use crate::EditError;

/// Address of a route: a base route followed by the choice indices taken
/// from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePath {
    pub base: RouteId,
    pub choices: Vec<usize>,
}

impl RoutePath {
    /// Path to a base route.
    pub fn base(base: RouteId) -> Self {
        Self {
            base,
            choices: Vec::new(),
        }
    }

    /// Path to the route behind choice `index` of this path's route.
    pub fn descend(&self, index: usize) -> Self {
        let mut choices = self.choices.clone();
        choices.push(index);
        Self {
            base: self.base,
            choices,
        }
    }

    /// Number of choices between the base route and this one.
    pub fn depth(&self) -> usize {
        self.choices.len()
    }
}

/// A death whose character is missing from the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingDeath {
    pub route: String,
    pub id: NameId,
}

/// The complete story: characters plus the base routes in order.
#[derive(Debug, Clone, Default)]
pub struct StoryTree {
    /// All characters that deaths may refer to.
    pub names: NameRegistry,

    routes: IndexMap<RouteId, Route>,
}

impl StoryTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tree with the given characters and no routes.
    pub fn with_names(names: NameRegistry) -> Self {
        Self {
            names,
            routes: IndexMap::new(),
        }
    }

    /// Append a base route.
    pub fn add_route(&mut self, route: Route) -> RouteId {
        let id = RouteId::new();
        log::debug!("adding base route \"{}\" as {}", route.name, id);
        self.routes.insert(id, route);
        id
    }

    /// Remove a base route with its whole subtree.
    pub fn remove_route(&mut self, id: RouteId) -> Result<Route, EditError> {
        self.routes
            .shift_remove(&id)
            .ok_or_else(|| EditError::NoSuchRoute(id.to_string()))
    }

    /// Base routes in order.
    pub fn routes(&self) -> impl Iterator<Item = (RouteId, &Route)> {
        self.routes.iter().map(|(id, route)| (*id, route))
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Id of the base route at a menu position.
    pub fn route_id_at(&self, index: usize) -> Result<RouteId, EditError> {
        self.routes
            .get_index(index)
            .map(|(id, _)| *id)
            .ok_or(EditError::OutOfRange {
                index,
                len: self.routes.len(),
            })
    }

    pub fn route(&self, id: RouteId) -> Result<&Route, EditError> {
        self.routes
            .get(&id)
            .ok_or_else(|| EditError::NoSuchRoute(id.to_string()))
    }

    /// Follow a path to the route it addresses.
    pub fn resolve(&self, path: &RoutePath) -> Result<&Route, EditError> {
        let mut route = self.route(path.base)?;
        for &index in &path.choices {
            route = route.child(index)?;
        }
        Ok(route)
    }

    /// Borrow the registry alongside a mutable route, for edits that validate
    /// against the registry.
    pub fn focus_mut(&mut self, path: &RoutePath) -> Result<(&NameRegistry, &mut Route), EditError> {
        let mut route = self
            .routes
            .get_mut(&path.base)
            .ok_or_else(|| EditError::NoSuchRoute(path.base.to_string()))?;
        for &index in &path.choices {
            route = route.child_mut(index)?;
        }
        Ok((&self.names, route))
    }

    /// Deaths anywhere in the tree that name an unregistered character.
    pub fn dangling_deaths(&self) -> Vec<DanglingDeath> {
        let mut dangling = Vec::new();
        for route in self.routes.values() {
            self.collect_dangling(route, &mut dangling);
        }
        dangling
    }

    fn collect_dangling(&self, route: &Route, out: &mut Vec<DanglingDeath>) {
        for death in route.deaths() {
            if !self.names.exists(death.id.as_str()) {
                out.push(DanglingDeath {
                    route: route.name.clone(),
                    id: death.id.clone(),
                });
            }
        }
        if let Some(branch) = route.branch() {
            for choice in branch.choices() {
                self.collect_dangling(&choice.route, out);
            }
        }
    }
}
