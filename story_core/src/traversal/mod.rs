//! Walking the story tree.
//!
//! The walk is depth-first and pre-order, starting at each base route in turn:
//! 1. **Tally**: combine the inherited tally with the route's own deaths
//! 2. **Visit**: hand the route, its depth and its tally to the visitor
//! 3. **Descend**: recurse into each choice's route in branch order, passing
//!    the new tally down as an argument
//!
//! Nothing is stored between steps, so walking is repeatable and leaves the
//! tree as it found it.

mod tally;

pub use tally::*;

use std::fmt::Write;

use story_model::{Branch, Choice, Dated, Day, EditError, Route, RoutePath, StoryTree};

use crate::{DisplayConfig, MAX_INDENT};

/// How the walk reached a route.
#[derive(Debug, Clone, Copy)]
pub struct Arrival<'a> {
    pub branch: &'a Branch,
    pub choice: &'a Choice,
}

/// One step of a walk.
#[derive(Debug, Clone, Copy)]
pub struct RouteVisit<'a> {
    /// 0 for base routes.
    pub depth: usize,
    pub route: &'a Route,
    /// Deaths of this route and all its ancestors.
    pub tally: &'a DeathTally,
    /// `None` for base routes.
    pub arrival: Option<Arrival<'a>>,
}

/// Visit every route of the tree in pre-order.
pub fn walk<F>(tree: &StoryTree, mut visit: F)
where
    F: FnMut(&RouteVisit<'_>),
{
    let empty = DeathTally::new();
    for (_, route) in tree.routes() {
        walk_route(route, 0, &empty, None, &mut visit);
    }
}

fn walk_route<'a, F>(
    route: &'a Route,
    depth: usize,
    inherited: &DeathTally,
    arrival: Option<Arrival<'a>>,
    visit: &mut F,
) where
    F: FnMut(&RouteVisit<'_>),
{
    let tally = inherited.with_route(route);
    visit(&RouteVisit {
        depth,
        route,
        tally: &tally,
        arrival,
    });

    if let Some(branch) = route.branch() {
        for choice in branch.choices() {
            walk_route(
                &choice.route,
                depth + 1,
                &tally,
                Some(Arrival { branch, choice }),
                visit,
            );
        }
    }
}

/// Tally of the route at `path`, including all its ancestors.
pub fn tally_at(tree: &StoryTree, path: &RoutePath) -> Result<DeathTally, EditError> {
    let mut route = tree.route(path.base)?;
    let mut tally = DeathTally::new().with_route(route);
    for &index in &path.choices {
        route = route.child(index)?;
        tally = tally.with_route(route);
    }
    Ok(tally)
}

/// Render the whole tree as indented text.
///
/// ```text
/// Title: Start
/// Deaths: Amy Smith died 1 time(s) on day(s) 3
/// Decide: Leave (right) on Choose [day 5]
///   Title: Leave Route
///   Deaths: Amy Smith died 3 time(s) on day(s) 3, 7
/// ```
pub fn render_tree(tree: &StoryTree, config: &DisplayConfig) -> String {
    let mut out = String::new();
    let mut first = true;

    walk(tree, |visit| {
        if visit.depth == 0 {
            if !first {
                out.push('\n');
            }
            first = false;
        }
        render_visit(tree, visit, config, &mut out);
    });
    out
}

fn render_visit(tree: &StoryTree, visit: &RouteVisit<'_>, config: &DisplayConfig, out: &mut String) {
    let step = config.indent.min(MAX_INDENT);
    let indent = " ".repeat(visit.depth * step);

    if let Some(arrival) = visit.arrival {
        let parent_indent = " ".repeat(visit.depth.saturating_sub(1) * step);
        let _ = writeln!(
            out,
            "{}Decide: {} ({}) on {} [day {}]",
            parent_indent,
            arrival.choice.label,
            arrival.choice.direction,
            arrival.branch.name,
            arrival.branch.day
        );
    }

    let _ = writeln!(out, "{}Title: {}", indent, visit.route.name);

    if !visit.tally.is_empty() {
        let deaths: Vec<_> = visit
            .tally
            .iter()
            .map(|death| {
                format!(
                    "{} died {} time(s) on day(s) {}",
                    tree.names.display_name(&death.id),
                    death.count,
                    format_days(death.days())
                )
            })
            .collect();
        let _ = writeln!(out, "{}Deaths: {}", indent, deaths.join("; "));
    }

    if !visit.route.events().is_empty() {
        let events: Vec<_> = visit
            .route
            .events()
            .iter()
            .map(|event| format!("{} on day(s) {}", event.description, format_days(event.days())))
            .collect();
        let _ = writeln!(out, "{}Events: {}", indent, events.join("; "));
    }
}

/// Format a day list as `3, 7`, or `unknown` when empty.
pub fn format_days(days: &[Day]) -> String {
    if days.is_empty() {
        return "unknown".to_string();
    }
    days.iter()
        .map(|day| day.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use story_model::{Death, Event, Name, NameRegistry, RouteId};

    fn setup_test_tree() -> (StoryTree, RouteId) {
        let mut names = NameRegistry::new();
        names.add(Name::new("amy").with_full("Amy Smith")).unwrap();
        let mut tree = StoryTree::with_names(names);

        let mut leave = Route::new("Leave Route");
        leave
            .add_death(&tree.names, Death::new("amy", 2, vec![7]))
            .unwrap();
        leave.add_event(Event::new("Amy leaves town", vec![6]));

        let mut start = Route::new("Start");
        start
            .add_death(&tree.names, Death::new("amy", 1, vec![3]))
            .unwrap();
        start.set_branch(
            Branch::new(
                "Choose",
                5,
                vec![
                    Choice::new("left", "Stay", Route::new("Stay Route")),
                    Choice::new("right", "Leave", leave),
                ],
            )
            .unwrap(),
        );
        let id = tree.add_route(start);
        (tree, id)
    }

    #[test]
    fn test_walk_is_pre_order() {
        let (tree, _) = setup_test_tree();
        let mut seen = Vec::new();
        walk(&tree, |visit| seen.push((visit.depth, visit.route.name.clone())));

        assert_eq!(
            seen,
            vec![
                (0, "Start".to_string()),
                (1, "Stay Route".to_string()),
                (1, "Leave Route".to_string()),
            ]
        );
    }

    #[test]
    fn test_walk_threads_tallies() {
        let (tree, _) = setup_test_tree();
        let mut counts = Vec::new();
        walk(&tree, |visit| {
            counts.push(visit.tally.get("amy").map(|d| (d.count, d.days().to_vec())))
        });

        assert_eq!(
            counts,
            vec![
                Some((1, vec![3])),
                Some((1, vec![3])),
                Some((3, vec![3, 7])),
            ]
        );
    }

    #[test]
    fn test_tally_at_path() {
        let (tree, id) = setup_test_tree();
        let leave = RoutePath::base(id).descend(1);

        let tally = tally_at(&tree, &leave).unwrap();
        assert_eq!(tally.get("amy").unwrap().count, 3);
        assert!(tally_at(&tree, &leave.descend(0)).is_err());
    }

    #[test]
    fn test_render_tree() {
        let (tree, _) = setup_test_tree();
        let text = render_tree(&tree, &DisplayConfig::default());

        let expected = "\
Title: Start
Deaths: Amy Smith died 1 time(s) on day(s) 3
Decide: Stay (left) on Choose [day 5]
  Title: Stay Route
  Deaths: Amy Smith died 1 time(s) on day(s) 3
Decide: Leave (right) on Choose [day 5]
  Title: Leave Route
  Deaths: Amy Smith died 3 time(s) on day(s) 3, 7
  Events: Amy leaves town on day(s) 6
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_is_repeatable() {
        let (tree, _) = setup_test_tree();
        let config = DisplayConfig::default();
        assert_eq!(render_tree(&tree, &config), render_tree(&tree, &config));
    }

    #[test]
    fn test_render_separates_base_routes_and_honors_indent() {
        let (mut tree, _) = setup_test_tree();
        tree.add_route(Route::new("Epilogue"));
        let config = DisplayConfig {
            indent: 4,
            ..DisplayConfig::default()
        };
        let text = render_tree(&tree, &config);

        assert!(text.contains("\n    Title: Leave Route\n"));
        assert!(text.ends_with("\n\nTitle: Epilogue\n"));
    }

    #[test]
    fn test_render_caps_oversized_indent() {
        let (tree, _) = setup_test_tree();
        let config = DisplayConfig {
            indent: usize::MAX,
            ..DisplayConfig::default()
        };
        let text = render_tree(&tree, &config);

        let expected = format!("\n{}Title: Leave Route\n", " ".repeat(MAX_INDENT));
        assert!(text.contains(&expected));
    }

    #[test]
    fn test_format_days() {
        assert_eq!(format_days(&[3, 7]), "3, 7");
        assert_eq!(format_days(&[]), "unknown");
    }
}
