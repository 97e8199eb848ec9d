//! Writing a tree back out as a document.
//!
//! Only what each route records itself is written. Tallies are never
//! serialized, so loading the output reproduces the same tree.

use story_model::{Branch, Dated, Day, Death, Event, Route, StoryTree, UNKNOWN_DAY};

use super::{
    BranchDocument, ChoiceDocument, DeathDocument, EventDocument, RouteDocument, TreeDocument,
    UNKNOWN_COUNT, UNKNOWN_LABEL,
};

/// Convert a tree into its document form.
pub fn tree_to_document(tree: &StoryTree) -> TreeDocument {
    TreeDocument {
        names: tree.names.list().cloned().collect(),
        routes: tree.routes().map(|(_, route)| route_to_document(route)).collect(),
    }
}

/// Convert one route and its subtree.
pub fn route_to_document(route: &Route) -> RouteDocument {
    RouteDocument {
        name: label_or_unknown(&route.name),
        deaths: route.deaths().map(death_to_document).collect(),
        events: route.events().iter().map(event_to_document).collect(),
        branch: route.branch().map(branch_to_document),
    }
}

/// Serialize a tree to JSON text, pretty-printed with two-space indentation
/// or compact.
pub fn to_json_string(tree: &StoryTree, pretty: bool) -> serde_json::Result<String> {
    let document = tree_to_document(tree);
    if pretty {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    }
}

fn death_to_document(death: &Death) -> DeathDocument {
    DeathDocument {
        id: death.id.to_string(),
        count: if death.count == 0 {
            UNKNOWN_COUNT
        } else {
            i64::from(death.count)
        },
        days: days_to_document(death.days()),
    }
}

fn event_to_document(event: &Event) -> EventDocument {
    EventDocument {
        name: label_or_unknown(&event.description),
        days: days_to_document(event.days()),
    }
}

fn branch_to_document(branch: &Branch) -> BranchDocument {
    BranchDocument {
        name: label_or_unknown(&branch.name),
        day: branch.day,
        choices: branch
            .choices()
            .iter()
            .map(|choice| ChoiceDocument {
                direction: choice.direction.clone(),
                name: label_or_unknown(&choice.label),
                route: route_to_document(&choice.route),
            })
            .collect(),
    }
}

fn days_to_document(days: &[Day]) -> Vec<Day> {
    if days.is_empty() {
        vec![UNKNOWN_DAY]
    } else {
        days.to_vec()
    }
}

fn label_or_unknown(label: &str) -> String {
    if label.is_empty() {
        UNKNOWN_LABEL.to_string()
    } else {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use story_model::{Choice, Name, NameRegistry};

    fn sample() -> StoryTree {
        let mut names = NameRegistry::new();
        names.add(Name::new("amy").with_full("Amy Smith")).unwrap();
        let mut tree = StoryTree::with_names(names);

        let mut start = Route::new("Start");
        start
            .add_death(&tree.names, Death::new("amy", 1, vec![3]))
            .unwrap();
        start.add_event(Event::new("", vec![]));
        start.set_branch(
            Branch::new("Choose", 5, vec![Choice::new("left", "Stay", Route::new("Stay Route"))])
                .unwrap(),
        );
        tree.add_route(start);
        tree
    }

    #[test]
    fn test_document_shape() {
        let value = serde_json::to_value(tree_to_document(&sample())).unwrap();
        assert_eq!(
            value,
            json!({
                "names": [{ "id": "amy", "full": "Amy Smith" }],
                "routes": [{
                    "name": "Start",
                    "deaths": [{ "id": "amy", "count": 1, "days": [3] }],
                    "events": [{ "name": "[UNKNOWN]", "days": [-1] }],
                    "branch": {
                        "name": "Choose",
                        "day": 5,
                        "choices": [{
                            "direction": "left",
                            "name": "Stay",
                            "route": { "name": "Stay Route" }
                        }]
                    }
                }]
            })
        );
    }

    #[test]
    fn test_zero_count_is_written_as_sentinel() {
        let document = death_to_document(&Death::new("amy", 0, vec![]));
        assert_eq!(document.count, UNKNOWN_COUNT);
        assert_eq!(document.days, vec![UNKNOWN_DAY]);
    }

    #[test]
    fn test_pretty_output_uses_two_space_indent() {
        let text = to_json_string(&sample(), true).unwrap();
        assert!(text.starts_with("{\n  \"names\": ["));
        assert!(!to_json_string(&sample(), false).unwrap().contains('\n'));
    }
}
