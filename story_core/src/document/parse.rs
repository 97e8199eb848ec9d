//! Building a tree from a document.

use story_model::{
    Branch, Choice, Day, Death, EditError, Event, NameRegistry, Route, StoryTree, UNKNOWN_DAY,
};

use super::{DeathDocument, EventDocument, RouteDocument, TreeDocument};
use crate::ParseError;

/// Parse a tree from JSON text.
pub fn parse_str(text: &str) -> Result<StoryTree, ParseError> {
    let document: TreeDocument = serde_json::from_str(text)?;
    tree_from_document(document)
}

/// Parse a tree from an already decoded JSON value.
pub fn parse_value(value: serde_json::Value) -> Result<StoryTree, ParseError> {
    let document: TreeDocument = serde_json::from_value(value)?;
    tree_from_document(document)
}

/// Parse a single route object and everything below it.
pub fn parse_route(value: serde_json::Value) -> Result<Route, ParseError> {
    let document: RouteDocument = serde_json::from_value(value)?;
    route_from_document(document)
}

/// Convert a decoded document into a tree.
///
/// Character ids must be unique. Deaths naming unknown characters are kept but
/// logged; they are rejected only when entered through an edit.
pub fn tree_from_document(document: TreeDocument) -> Result<StoryTree, ParseError> {
    let mut names = NameRegistry::new();
    for name in document.names {
        names.add(name).map_err(|err| match err {
            EditError::DuplicateName(id) => ParseError::DuplicateName(id),
            _ => ParseError::EmptyName,
        })?;
    }

    let mut tree = StoryTree::with_names(names);
    for route in document.routes {
        tree.add_route(route_from_document(route)?);
    }

    for dangling in tree.dangling_deaths() {
        log::warn!(
            "route \"{}\" records a death for unknown character \"{}\"",
            dangling.route,
            dangling.id
        );
    }
    log::debug!(
        "parsed {} characters and {} base routes",
        tree.names.len(),
        tree.route_count()
    );
    Ok(tree)
}

/// Convert a route document, recursing through its branch.
pub fn route_from_document(document: RouteDocument) -> Result<Route, ParseError> {
    log::trace!("parsing route \"{}\"", document.name);

    let deaths = document
        .deaths
        .into_iter()
        .map(death_from_document)
        .collect::<Result<Vec<_>, _>>()?;
    let events = document.events.into_iter().map(event_from_document).collect();

    let branch = match document.branch {
        Some(branch) => {
            let mut choices = Vec::with_capacity(branch.choices.len());
            for choice in branch.choices {
                let route = route_from_document(choice.route)?;
                choices.push(Choice::new(&choice.direction, choice.name, route));
            }
            let branch_name = branch.name;
            Some(
                Branch::new(branch_name.clone(), branch.day, choices).map_err(|_| {
                    ParseError::EmptyBranch {
                        route: document.name.clone(),
                        branch: branch_name,
                    }
                })?,
            )
        }
        None => None,
    };

    Ok(Route::from_parts(document.name, deaths, events, branch))
}

fn death_from_document(document: DeathDocument) -> Result<Death, ParseError> {
    let count = u32::try_from(document.count.max(0)).map_err(|_| ParseError::CountOutOfRange {
        id: document.id.clone(),
        count: document.count,
    })?;
    Ok(Death::new(document.id.as_str(), count, days_from_document(document.days)))
}

fn event_from_document(document: EventDocument) -> Event {
    Event::new(document.name, days_from_document(document.days))
}

/// A lone unknown-day marker means "no days".
fn days_from_document(days: Vec<Day>) -> Vec<Day> {
    if days == [UNKNOWN_DAY] {
        Vec::new()
    } else {
        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use story_model::Dated;

    #[test]
    fn test_route_without_name_is_a_parse_error() {
        let result = parse_route(json!({ "deaths": [] }));
        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn test_optional_lists_may_be_missing() {
        let route = parse_route(json!({ "name": "Quiet" })).unwrap();
        assert_eq!(route.name, "Quiet");
        assert_eq!(route.death_count(), 0);
        assert!(route.events().is_empty());
        assert!(route.branch().is_none());
    }

    #[test]
    fn test_records_are_sorted_by_first_day() {
        let route = parse_route(json!({
            "name": "Start",
            "deaths": [
                { "id": "Bo", "count": 1, "days": [9] },
                { "id": "amy", "count": 2, "days": [6, 2] }
            ],
            "events": [
                { "name": "Storm", "days": [4] },
                { "name": "Arrival", "days": [1] }
            ]
        }))
        .unwrap();

        let ids: Vec<_> = route.deaths().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["amy", "bo"]);
        assert_eq!(route.death("amy").unwrap().days(), &[2, 6]);
        assert_eq!(route.events()[0].description, "Arrival");
    }

    #[test]
    fn test_sentinels_read_back_as_empty() {
        let route = parse_route(json!({
            "name": "Start",
            "deaths": [{ "id": "amy", "count": -1, "days": [-1] }]
        }))
        .unwrap();
        let death = route.death("amy").unwrap();
        assert_eq!(death.count, 0);
        assert!(death.days().is_empty());
    }

    #[test]
    fn test_count_beyond_range_is_rejected() {
        let result = parse_route(json!({
            "name": "Start",
            "deaths": [{ "id": "amy", "count": 5_000_000_000_i64, "days": [1] }]
        }));
        assert!(matches!(
            result,
            Err(ParseError::CountOutOfRange { count: 5_000_000_000, .. })
        ));

        let route = parse_route(json!({
            "name": "Start",
            "deaths": [{ "id": "amy", "count": u32::MAX, "days": [1] }]
        }))
        .unwrap();
        assert_eq!(route.death("amy").unwrap().count, u32::MAX);
    }

    #[test]
    fn test_missing_death_count_is_a_parse_error() {
        let result = parse_route(json!({
            "name": "Start",
            "deaths": [{ "id": "amy", "days": [1] }]
        }));
        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn test_nested_choices() {
        let route = parse_route(json!({
            "name": "Start",
            "branch": {
                "name": "Choose", "day": 5,
                "choices": [
                    { "direction": "Left", "name": "Stay", "route": { "name": "Stay Route" } },
                    { "direction": "right", "name": "Leave", "route": {
                        "name": "Leave Route",
                        "branch": { "name": "Again", "day": 8, "choices": [
                            { "direction": "top", "name": "Climb", "route": { "name": "Tower" } }
                        ]}
                    }}
                ]
            }
        }))
        .unwrap();

        let branch = route.branch().unwrap();
        assert_eq!(branch.day, 5);
        assert_eq!(branch.choices()[0].direction, "left");
        assert_eq!(route.child(1).unwrap().child(0).unwrap().name, "Tower");
    }

    #[test]
    fn test_empty_choice_list_is_rejected() {
        let result = parse_route(json!({
            "name": "Start",
            "branch": { "name": "Nowhere", "day": 1, "choices": [] }
        }));
        assert!(matches!(result, Err(ParseError::EmptyBranch { .. })));
    }

    #[test]
    fn test_duplicate_character_ids_are_rejected() {
        let result = parse_value(json!({
            "names": [{ "id": "amy" }, { "id": "AMY" }],
            "routes": []
        }));
        assert!(matches!(result, Err(ParseError::DuplicateName(id)) if id == "amy"));
    }

    #[test]
    fn test_names_may_be_missing_but_routes_may_not() {
        let tree = parse_value(json!({ "routes": [{ "name": "Solo" }] })).unwrap();
        assert!(tree.names.is_empty());
        assert_eq!(tree.route_count(), 1);

        assert!(parse_value(json!({ "names": [] })).is_err());
    }

    #[test]
    fn test_dangling_death_is_kept_on_load() {
        let tree = parse_value(json!({
            "names": [],
            "routes": [{ "name": "Start", "deaths": [{ "id": "ghost", "count": 1, "days": [1] }] }]
        }))
        .unwrap();
        assert_eq!(tree.dangling_deaths().len(), 1);
    }
}
