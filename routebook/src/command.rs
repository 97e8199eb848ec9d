//! Menu commands, one enum per menu.
//!
//! Each menu accepts a single letter as well as a spelled-out word, so `d`
//! and `deaths` both open the death list.

use story_model::NameField;

/// A command that can be read from one input line.
pub trait MenuCommand: Sized {
    fn parse(input: &str) -> Option<Self>;
}

/// Top-level menu: pick a base route or manage the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainCommand {
    Route(usize),
    Names,
    AddRoute,
    RemoveRoute,
    Save,
    Exit,
}

impl MenuCommand for MainCommand {
    fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(index) = input.parse() {
            return Some(MainCommand::Route(index));
        }
        match input.to_lowercase().as_str() {
            "n" | "names" => Some(MainCommand::Names),
            "a" | "add" => Some(MainCommand::AddRoute),
            "r" | "remove" => Some(MainCommand::RemoveRoute),
            "s" | "save" => Some(MainCommand::Save),
            "x" | "exit" | "quit" => Some(MainCommand::Exit),
            _ => None,
        }
    }
}

/// Menu of a single route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteCommand {
    Deaths,
    Events,
    Branch,
    Title,
    /// Jump straight into the choice with this direction.
    Go(String),
    Save,
    Back,
}

impl MenuCommand for RouteCommand {
    fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        if let Some(direction) = input.strip_prefix("go ") {
            let direction = direction.trim();
            return (!direction.is_empty()).then(|| RouteCommand::Go(direction.to_string()));
        }
        match input.as_str() {
            "d" | "deaths" => Some(RouteCommand::Deaths),
            "e" | "events" => Some(RouteCommand::Events),
            "b" | "branch" => Some(RouteCommand::Branch),
            "t" | "title" => Some(RouteCommand::Title),
            "ld" => Some(RouteCommand::Go("left".to_string())),
            "rd" => Some(RouteCommand::Go("right".to_string())),
            "td" => Some(RouteCommand::Go("top".to_string())),
            "s" | "save" => Some(RouteCommand::Save),
            "x" | "back" => Some(RouteCommand::Back),
            _ => None,
        }
    }
}

/// Menu over a collection (deaths or events).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCommand {
    Edit,
    Remove,
    Add,
    Back,
}

impl MenuCommand for ListCommand {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "e" | "edit" => Some(ListCommand::Edit),
            "r" | "remove" => Some(ListCommand::Remove),
            "a" | "add" => Some(ListCommand::Add),
            "x" | "back" => Some(ListCommand::Back),
            _ => None,
        }
    }
}

/// Menu of one death record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCommand {
    Target,
    Count,
    Days,
    Back,
}

impl MenuCommand for DeathCommand {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "t" | "target" => Some(DeathCommand::Target),
            "c" | "count" => Some(DeathCommand::Count),
            "d" | "days" => Some(DeathCommand::Days),
            "x" | "back" => Some(DeathCommand::Back),
            _ => None,
        }
    }
}

/// Menu of one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCommand {
    Description,
    Days,
    Back,
}

impl MenuCommand for EventCommand {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "e" | "desc" | "description" => Some(EventCommand::Description),
            "d" | "days" => Some(EventCommand::Days),
            "x" | "back" => Some(EventCommand::Back),
            _ => None,
        }
    }
}

/// Menu of an existing branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchCommand {
    Rename,
    Day,
    AddChoice,
    Choice(usize),
    /// Build a new branch in place of this one.
    Replace,
    RemoveBranch,
    Back,
}

impl MenuCommand for BranchCommand {
    fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(index) = input.parse() {
            return Some(BranchCommand::Choice(index));
        }
        match input.to_lowercase().as_str() {
            "c" | "rename" => Some(BranchCommand::Rename),
            "d" | "day" => Some(BranchCommand::Day),
            "a" | "add" => Some(BranchCommand::AddChoice),
            "n" | "new" => Some(BranchCommand::Replace),
            "r" | "remove" => Some(BranchCommand::RemoveBranch),
            "x" | "back" => Some(BranchCommand::Back),
            _ => None,
        }
    }
}

/// Menu shown for a route without a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewBranchCommand {
    Add,
    Back,
}

impl MenuCommand for NewBranchCommand {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "a" | "add" => Some(NewBranchCommand::Add),
            "x" | "back" => Some(NewBranchCommand::Back),
            _ => None,
        }
    }
}

/// Menu of one choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceCommand {
    Label,
    Descend,
    Remove,
    Back,
}

impl MenuCommand for ChoiceCommand {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "e" | "label" => Some(ChoiceCommand::Label),
            "d" | "descend" => Some(ChoiceCommand::Descend),
            "r" | "remove" => Some(ChoiceCommand::Remove),
            "x" | "back" => Some(ChoiceCommand::Back),
            _ => None,
        }
    }
}

/// Character list menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamesCommand {
    Edit(String),
    Add,
    Back,
}

impl MenuCommand for NamesCommand {
    fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        match input.to_lowercase().as_str() {
            "" => None,
            "a" => Some(NamesCommand::Add),
            "x" => Some(NamesCommand::Back),
            _ => Some(NamesCommand::Edit(input.to_string())),
        }
    }
}

/// Menu of one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCommand {
    Set(NameField),
    Back,
}

impl MenuCommand for NameCommand {
    fn parse(input: &str) -> Option<Self> {
        let field = match input.trim().to_lowercase().as_str() {
            "f" => NameField::First,
            "l" => NameField::Last,
            "u" => NameField::Full,
            "p" => NameField::Position,
            "t" => NameField::Title,
            "w" => NameField::WebTitle,
            "x" => return Some(NameCommand::Back),
            _ => return None,
        };
        Some(NameCommand::Set(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_command() {
        assert_eq!(MainCommand::parse("2"), Some(MainCommand::Route(2)));
        assert_eq!(MainCommand::parse(" N "), Some(MainCommand::Names));
        assert_eq!(MainCommand::parse("x"), Some(MainCommand::Exit));
        assert_eq!(MainCommand::parse("-1"), None);
        assert_eq!(MainCommand::parse("hello"), None);
    }

    #[test]
    fn test_route_command_shortcuts() {
        assert_eq!(RouteCommand::parse("ld"), Some(RouteCommand::Go("left".into())));
        assert_eq!(
            RouteCommand::parse("go Sideways"),
            Some(RouteCommand::Go("sideways".into()))
        );
        assert_eq!(RouteCommand::parse("go "), None);
        assert_eq!(RouteCommand::parse("deaths"), Some(RouteCommand::Deaths));
    }

    #[test]
    fn test_branch_command_index() {
        assert_eq!(BranchCommand::parse("1"), Some(BranchCommand::Choice(1)));
        assert_eq!(BranchCommand::parse("c"), Some(BranchCommand::Rename));
        assert_eq!(BranchCommand::parse("?"), None);
    }

    #[test]
    fn test_names_command() {
        assert_eq!(NamesCommand::parse("Amy"), Some(NamesCommand::Edit("Amy".into())));
        assert_eq!(NamesCommand::parse("a"), Some(NamesCommand::Add));
        assert_eq!(NamesCommand::parse("  "), None);
    }

    #[test]
    fn test_name_command() {
        assert_eq!(NameCommand::parse("w"), Some(NameCommand::Set(NameField::WebTitle)));
        assert_eq!(NameCommand::parse("q"), None);
    }
}
