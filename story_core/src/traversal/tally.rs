//! Death tallies accumulated down the tree.

use indexmap::IndexMap;

use story_model::{merge_days, Dated, Death, NameId, Route};

/// Deaths of a route combined with those of all its ancestors.
///
/// A tally is a display copy: building one never touches the routes it was
/// built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeathTally {
    deaths: IndexMap<NameId, Death>,
}

impl DeathTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally for a child: this tally plus the route's own deaths.
    ///
    /// Characters on both sides have their counts summed and days merged in
    /// order. Inherited characters keep their position; new ones follow in the
    /// route's order.
    pub fn with_route(&self, route: &Route) -> Self {
        let mut next = self.clone();
        for death in route.deaths() {
            next.add(death);
        }
        next
    }

    /// Fold one death into the tally.
    pub fn add(&mut self, death: &Death) {
        let merged = match self.deaths.get(&death.id) {
            Some(existing) => Death::new(
                death.id.clone(),
                existing.count.saturating_add(death.count),
                merge_days(existing.days(), death.days()),
            ),
            None => death.clone(),
        };
        self.deaths.insert(death.id.clone(), merged);
    }

    /// Aggregated death of a character.
    pub fn get(&self, id: &str) -> Option<&Death> {
        self.deaths.get(&NameId::new(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Death> {
        self.deaths.values()
    }

    pub fn len(&self) -> usize {
        self.deaths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deaths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use story_model::{Name, NameRegistry};

    fn names() -> NameRegistry {
        let mut names = NameRegistry::new();
        names.add(Name::new("amy")).unwrap();
        names.add(Name::new("bo")).unwrap();
        names
    }

    #[test]
    fn test_merges_counts_and_days() {
        let names = names();
        let mut parent = Route::new("Start");
        parent.add_death(&names, Death::new("amy", 1, vec![7])).unwrap();
        let mut child = Route::new("Leave");
        child.add_death(&names, Death::new("amy", 2, vec![3])).unwrap();
        child.add_death(&names, Death::new("bo", 1, vec![9])).unwrap();

        let tally = DeathTally::new().with_route(&parent).with_route(&child);

        let amy = tally.get("Amy").unwrap();
        assert_eq!(amy.count, 3);
        assert_eq!(amy.days(), &[3, 7]);
        assert_eq!(tally.get("bo").unwrap().count, 1);

        let order: Vec<_> = tally.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(order, vec!["amy", "bo"]);
    }

    #[test]
    fn test_building_a_tally_leaves_routes_untouched() {
        let names = names();
        let mut parent = Route::new("Start");
        parent.add_death(&names, Death::new("amy", 1, vec![3])).unwrap();
        let mut child = Route::new("Leave");
        child.add_death(&names, Death::new("amy", 2, vec![7])).unwrap();
        let before = child.clone();

        let inherited = DeathTally::new().with_route(&parent);
        let first = inherited.with_route(&child);
        let second = inherited.with_route(&child);

        assert_eq!(first, second);
        assert_eq!(child, before);
        assert_eq!(child.death("amy").unwrap().count, 2);
        assert_eq!(inherited.get("amy").unwrap().count, 1);
    }

    #[test]
    fn test_empty_route_copies_inherited() {
        let names = names();
        let mut parent = Route::new("Start");
        parent.add_death(&names, Death::new("bo", 5, vec![1])).unwrap();

        let inherited = DeathTally::new().with_route(&parent);
        assert_eq!(inherited.with_route(&Route::new("Quiet")), inherited);
    }
}
