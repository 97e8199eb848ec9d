//! Interactive menus over a [`Session`].
//!
//! Every menu is a loop: show the current state, read one command, apply it.
//! Routes are addressed by [`RoutePath`], so a menu re-resolves its route on
//! each pass and notices when an edit elsewhere removed it. Rejected edits are
//! printed and the menu carries on; only closed input ends a session early.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;
use story_core::{format_days, parse_count, parse_days, parse_index, parse_int, tally_at};
use story_model::{
    Branch, Choice, Dated, Death, DeathUpdate, EditError, Event, EventUpdate, NameField, NameId,
    NameRegistry, Route, RoutePath, StoryTree,
};

use crate::command::{
    BranchCommand, ChoiceCommand, DeathCommand, EventCommand, ListCommand, MainCommand,
    NameCommand, NamesCommand, NewBranchCommand, RouteCommand,
};
use crate::prompt::Prompter;
use crate::session::Session;

/// Menu-driven editor for one session.
pub struct Editor<'s, R, W> {
    session: &'s mut Session,
    prompter: Prompter<R, W>,
}

impl<'s, R: BufRead, W: Write> Editor<'s, R, W> {
    pub fn new(session: &'s mut Session, prompter: Prompter<R, W>) -> Self {
        Self { session, prompter }
    }

    /// Run the top menu until the user exits or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        match self.main_menu() {
            Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => {
                log::debug!("input closed, leaving the editor");
                Ok(())
            }
            result => result,
        }
    }

    /// Hand the prompter back once editing is over.
    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    // -- helpers --

    fn report<T>(&mut self, result: Result<T, EditError>) -> io::Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(error) => {
                self.prompter.warn(&error)?;
                Ok(None)
            }
        }
    }

    /// Read from the route at `path`. `None` means the route is gone.
    fn view<T>(
        &mut self,
        path: &RoutePath,
        read: impl FnOnce(&StoryTree, &Route) -> T,
    ) -> io::Result<Option<T>> {
        let tree = &self.session.tree;
        let result = tree.resolve(path).map(|route| read(tree, route));
        self.report(result)
    }

    /// Apply an edit to the route at `path`, printing it if rejected.
    fn edit<T>(
        &mut self,
        path: &RoutePath,
        apply: impl FnOnce(&NameRegistry, &mut Route) -> Result<T, EditError>,
    ) -> io::Result<Option<T>> {
        let result = self
            .session
            .tree
            .focus_mut(path)
            .and_then(|(names, route)| apply(names, route));
        self.report(result)
    }

    fn save(&mut self) -> io::Result<()> {
        let result = if self.session.output().is_some() {
            self.session.save()
        } else {
            let answer = self.prompter.ask("Input filename to save to: ")?;
            let path = answer.trim();
            if path.is_empty() {
                return self.prompter.say("Not saved.");
            }
            self.session.save_to(path).map(|()| Some(PathBuf::from(path)))
        };

        match result {
            Ok(Some(path)) => self.prompter.say(format!("Saved to {}", path.display())),
            Ok(None) => Ok(()),
            Err(error) => self.prompter.fail(error),
        }
    }

    // -- tree --

    fn main_menu(&mut self) -> io::Result<()> {
        loop {
            self.prompter.say("Base routes:")?;
            for (index, (_, route)) in self.session.tree.routes().enumerate() {
                self.prompter.say(format!("  {}: {}", index, route.name))?;
            }

            let command = self.prompter.choose::<MainCommand>(
                "Route number, (n)ames, (a)dd route, (r)emove route, (s)ave, e(x)it: ",
            )?;
            match command {
                MainCommand::Route(index) => {
                    let id = self.session.tree.route_id_at(index);
                    if let Some(id) = self.report(id)? {
                        self.route_menu(RoutePath::base(id))?;
                    }
                }
                MainCommand::Names => self.names_menu()?,
                MainCommand::AddRoute => {
                    let name = self.prompter.ask("New route name: ")?;
                    self.session.tree.add_route(Route::new(name.trim()));
                }
                MainCommand::RemoveRoute => self.remove_route()?,
                MainCommand::Save => self.save()?,
                MainCommand::Exit => return Ok(()),
            }
        }
    }

    fn remove_route(&mut self) -> io::Result<()> {
        let index = self.prompter.ask_with("Route number to remove: ", parse_index)?;
        let id = self.session.tree.route_id_at(index);
        let Some(id) = self.report(id)? else {
            return Ok(());
        };

        let name = self.session.tree.route(id).map(|r| r.name.clone()).unwrap_or_default();
        let question = format!("Remove \"{}\" and every route below it? (y/n): ", name);
        if !self.prompter.confirm(&question)? {
            return Ok(());
        }
        let removed = self.session.tree.remove_route(id);
        if let Some(route) = self.report(removed)? {
            self.prompter.say(format!("Removed \"{}\"", route.name))?;
        }
        Ok(())
    }

    // -- routes --

    fn route_menu(&mut self, path: RoutePath) -> io::Result<()> {
        loop {
            let Some(lines) = self.view(&path, |tree, route| describe_route(tree, route, &path))? else {
                return Ok(());
            };
            for line in lines {
                self.prompter.say(line)?;
            }

            let command = self.prompter.choose::<RouteCommand>(
                "(d)eaths, (e)vents, (b)ranch, (t)itle, go <direction>, (s)ave, e(x)it: ",
            )?;
            match command {
                RouteCommand::Deaths => self.deaths_menu(&path)?,
                RouteCommand::Events => self.events_menu(&path)?,
                RouteCommand::Branch => self.branch_menu(&path)?,
                RouteCommand::Title => {
                    let title = self.prompter.ask("New title: ")?;
                    self.edit(&path, |_, route| {
                        route.rename(title.trim());
                        Ok(())
                    })?;
                }
                RouteCommand::Go(direction) => {
                    let found = self.session.tree.resolve(&path).and_then(|route| {
                        route
                            .branch()
                            .ok_or(EditError::NoBranch)?
                            .find_direction(&direction)
                    });
                    if let Some(index) = self.report(found)? {
                        self.route_menu(path.descend(index))?;
                    }
                }
                RouteCommand::Save => self.save()?,
                RouteCommand::Back => return Ok(()),
            }
        }
    }

    // -- deaths --

    fn deaths_menu(&mut self, path: &RoutePath) -> io::Result<()> {
        loop {
            let Some(lines) = self.view(path, |tree, route| {
                route
                    .deaths()
                    .map(|death| describe_death(&tree.names, death))
                    .collect::<Vec<_>>()
            })?
            else {
                return Ok(());
            };
            if lines.is_empty() {
                self.prompter.say("No deaths on this route.")?;
            } else {
                self.prompter.say("Deaths:")?;
                for line in lines {
                    self.prompter.say(format!("  {}", line))?;
                }
            }

            match self.prompter.choose::<ListCommand>("(e)dit, (r)emove, (a)dd, e(x)it: ")? {
                ListCommand::Edit => {
                    let id = NameId::new(&self.prompter.ask("Character id: ")?);
                    match self.view(path, |_, route| route.death(id.as_str()).is_some())? {
                        Some(true) => self.death_menu(path, id)?,
                        Some(false) => self.prompter.warn(&EditError::NoSuchDeath(id.to_string()))?,
                        None => return Ok(()),
                    }
                }
                ListCommand::Remove => {
                    let id = self.prompter.ask("Character id: ")?;
                    if let Some(death) = self.edit(path, |_, route| route.remove_death(&id))? {
                        self.prompter.say(format!("Removed the deaths of {}", death.id))?;
                    }
                }
                ListCommand::Add => self.add_death(path)?,
                ListCommand::Back => return Ok(()),
            }
        }
    }

    fn add_death(&mut self, path: &RoutePath) -> io::Result<()> {
        let raw = self.prompter.ask("Character id: ")?;
        let resolved = self.session.tree.names.resolve(&raw);
        let Some(id) = self.report(resolved)? else {
            return Ok(());
        };

        let count = self.prompter.ask_with("Death count: ", parse_count)?;
        let days = parse_days(&self.prompter.ask("Days (comma separated): ")?);
        self.edit(path, |names, route| {
            route.add_death(names, Death::new(id, count, days))
        })?;
        Ok(())
    }

    fn death_menu(&mut self, path: &RoutePath, mut id: NameId) -> io::Result<()> {
        loop {
            let shown = self
                .view(path, |tree, route| {
                    route.death(id.as_str()).map(|death| describe_death(&tree.names, death))
                })?
                .flatten();
            let Some(line) = shown else {
                return Ok(());
            };
            self.prompter.say(line)?;

            match self.prompter.choose::<DeathCommand>("(t)arget, (c)ount, (d)ays, e(x)it: ")? {
                DeathCommand::Target => {
                    let target = self.prompter.ask("New character id: ")?;
                    let update = DeathUpdate::Target(target.clone());
                    let moved = self.edit(path, |names, route| {
                        route.update_death(names, id.as_str(), update)
                    })?;
                    if moved.is_some() {
                        id = NameId::new(&target);
                    }
                }
                DeathCommand::Count => {
                    let count = self.prompter.ask_with("New count: ", parse_count)?;
                    self.edit(path, |names, route| {
                        route.update_death(names, id.as_str(), DeathUpdate::Count(count))
                    })?;
                }
                DeathCommand::Days => {
                    let days = parse_days(&self.prompter.ask("New days (comma separated): ")?);
                    self.edit(path, |names, route| {
                        route.update_death(names, id.as_str(), DeathUpdate::Days(days))
                    })?;
                }
                DeathCommand::Back => return Ok(()),
            }
        }
    }

    // -- events --

    fn events_menu(&mut self, path: &RoutePath) -> io::Result<()> {
        loop {
            let Some(lines) = self.view(path, |_, route| {
                route.events().iter().map(describe_event).collect::<Vec<_>>()
            })?
            else {
                return Ok(());
            };
            if lines.is_empty() {
                self.prompter.say("No events on this route.")?;
            } else {
                self.prompter.say("Events:")?;
                for (index, line) in lines.iter().enumerate() {
                    self.prompter.say(format!("  {}: {}", index, line))?;
                }
            }

            match self.prompter.choose::<ListCommand>("(e)dit, (r)emove, (a)dd, e(x)it: ")? {
                ListCommand::Edit => {
                    let index = self.prompter.ask_with("Event number: ", parse_index)?;
                    let checked = self
                        .view(path, |_, route| EditError::check_index(index, route.events().len()))?;
                    match checked {
                        Some(result) => {
                            if self.report(result)?.is_some() {
                                self.event_menu(path, index)?;
                            }
                        }
                        None => return Ok(()),
                    }
                }
                ListCommand::Remove => {
                    let index = self.prompter.ask_with("Event number: ", parse_index)?;
                    if let Some(event) = self.edit(path, |_, route| route.remove_event(index))? {
                        self.prompter.say(format!("Removed \"{}\"", event.description))?;
                    }
                }
                ListCommand::Add => {
                    let description = self.prompter.ask("Description: ")?;
                    let days = parse_days(&self.prompter.ask("Days (comma separated): ")?);
                    self.edit(path, |_, route| {
                        route.add_event(Event::new(description.trim(), days));
                        Ok(())
                    })?;
                }
                ListCommand::Back => return Ok(()),
            }
        }
    }

    fn event_menu(&mut self, path: &RoutePath, index: usize) -> io::Result<()> {
        loop {
            let shown = self
                .view(path, |_, route| route.events().get(index).map(describe_event))?
                .flatten();
            let Some(line) = shown else {
                return Ok(());
            };
            self.prompter.say(line)?;

            match self
                .prompter
                .choose::<EventCommand>("(e)dit description, (d)ays, e(x)it: ")?
            {
                EventCommand::Description => {
                    let description = self.prompter.ask("New description: ")?;
                    self.edit(path, |_, route| {
                        route.update_event(index, EventUpdate::Description(description.trim().to_string()))
                    })?;
                }
                EventCommand::Days => {
                    let days = parse_days(&self.prompter.ask("New days (comma separated): ")?);
                    let updated =
                        self.edit(path, |_, route| route.update_event(index, EventUpdate::Days(days)))?;
                    // The event may have moved; its old number no longer applies.
                    if updated.is_some() {
                        return self.prompter.say("Events re-sorted by day.");
                    }
                }
                EventCommand::Back => return Ok(()),
            }
        }
    }

    // -- branches --

    fn branch_menu(&mut self, path: &RoutePath) -> io::Result<()> {
        loop {
            let Some(shown) = self.view(path, |_, route| route.branch().map(describe_branch))? else {
                return Ok(());
            };

            let Some(lines) = shown else {
                self.prompter.say("No branch on this route.")?;
                match self.prompter.choose::<NewBranchCommand>("(a)dd branch, e(x)it: ")? {
                    NewBranchCommand::Add => self.build_branch(path)?,
                    NewBranchCommand::Back => return Ok(()),
                }
                continue;
            };
            for line in lines {
                self.prompter.say(line)?;
            }

            let command = self.prompter.choose::<BranchCommand>(
                "(c)hange name, (d)ay, (a)dd choice, choice number, (n)ew branch, (r)emove branch, e(x)it: ",
            )?;
            match command {
                BranchCommand::Rename => {
                    let name = self.prompter.ask("New branch name: ")?;
                    self.edit(path, |_, route| {
                        route.branch_mut()?.rename(name.trim());
                        Ok(())
                    })?;
                }
                BranchCommand::Day => {
                    let day = self.prompter.ask_with("New branch day: ", parse_int)?;
                    self.edit(path, |_, route| {
                        route.branch_mut()?.set_day(day);
                        Ok(())
                    })?;
                }
                BranchCommand::AddChoice => self.add_choice(path)?,
                BranchCommand::Choice(index) => {
                    let checked = self
                        .view(path, |_, route| route.child(index).map(|_| ()))?;
                    match checked {
                        Some(result) => {
                            if self.report(result)?.is_some() {
                                self.choice_menu(path, index)?;
                            }
                        }
                        None => return Ok(()),
                    }
                }
                BranchCommand::Replace => {
                    if self
                        .prompter
                        .confirm("Replace this branch and every route below it? (y/n): ")?
                    {
                        self.build_branch(path)?;
                    }
                }
                BranchCommand::RemoveBranch => {
                    if self
                        .prompter
                        .confirm("Remove this branch and every route below it? (y/n): ")?
                    {
                        if let Some(branch) = self.edit(path, |_, route| route.remove_branch())? {
                            self.prompter.say(format!("Removed branch \"{}\"", branch.name))?;
                        }
                    }
                }
                BranchCommand::Back => return Ok(()),
            }
        }
    }

    /// Ask for a whole branch and put it on the route, replacing any old one.
    fn build_branch(&mut self, path: &RoutePath) -> io::Result<()> {
        let Some(parent) = self.view(path, |_, route| route.name.clone())? else {
            return Ok(());
        };

        let name = self.prompter.ask("Branch name: ")?;
        let day = self.prompter.ask_with("Branch day: ", parse_int)?;
        let mut choices = vec![self.ask_choice(&parent)?];
        while self.prompter.confirm("Add another choice? (y/n): ")? {
            choices.push(self.ask_choice(&parent)?);
        }

        let built = Branch::new(name.trim(), day, choices);
        let Some(branch) = self.report(built)? else {
            return Ok(());
        };
        let replaced = self.edit(path, |_, route| Ok(route.set_branch(branch)))?;
        if let Some(Some(old)) = replaced {
            self.prompter.say(format!("Replaced branch \"{}\"", old.name))?;
        }
        Ok(())
    }

    fn ask_choice(&mut self, parent: &str) -> io::Result<Choice> {
        let direction = loop {
            let direction = self.prompter.ask("Direction (left, right, top, ...): ")?;
            if !direction.trim().is_empty() {
                break direction;
            }
            self.prompter.say("A direction is required.")?;
        };
        let label = self.prompter.ask("Choice label: ")?;
        let route_name = self.prompter.ask("Route name (blank for default): ")?;
        Ok(Choice::with_empty_route(
            &direction,
            label.trim(),
            Some(route_name.trim().to_string()),
            parent,
        ))
    }

    fn add_choice(&mut self, path: &RoutePath) -> io::Result<()> {
        let Some(parent) = self.view(path, |_, route| route.name.clone())? else {
            return Ok(());
        };
        let choice = self.ask_choice(&parent)?;
        self.edit(path, |_, route| {
            route.branch_mut()?.add_choice(choice);
            Ok(())
        })?;
        Ok(())
    }

    fn choice_menu(&mut self, path: &RoutePath, index: usize) -> io::Result<()> {
        loop {
            let shown = self
                .view(path, |_, route| {
                    route
                        .branch()
                        .and_then(|branch| branch.choice(index).ok())
                        .map(|choice| describe_choice(index, choice))
                })?
                .flatten();
            let Some(line) = shown else {
                return Ok(());
            };
            self.prompter.say(line)?;

            match self
                .prompter
                .choose::<ChoiceCommand>("(e)dit label, (d)escend, (r)emove choice, e(x)it: ")?
            {
                ChoiceCommand::Label => {
                    let label = self.prompter.ask("New label: ")?;
                    self.edit(path, |_, route| {
                        route.branch_mut()?.relabel_choice(index, label.trim())
                    })?;
                }
                ChoiceCommand::Descend => self.route_menu(path.descend(index))?,
                ChoiceCommand::Remove => {
                    if !self
                        .prompter
                        .confirm("Remove this choice and every route below it? (y/n): ")?
                    {
                        continue;
                    }
                    let removed = self.edit(path, |_, route| route.branch_mut()?.remove_choice(index))?;
                    if let Some(choice) = removed {
                        self.prompter.say(format!("Removed choice \"{}\"", choice.label))?;
                        return Ok(());
                    }
                }
                ChoiceCommand::Back => return Ok(()),
            }
        }
    }

    // -- characters --

    fn names_menu(&mut self) -> io::Result<()> {
        loop {
            self.prompter.say("Characters:")?;
            for name in self.session.tree.names.list() {
                self.prompter.say(format!("  {}: {}", name.id(), name.display()))?;
            }

            match self
                .prompter
                .choose::<NamesCommand>("Character id to edit, (a)dd, e(x)it: ")?
            {
                NamesCommand::Edit(id) => {
                    let found = self.session.tree.names.resolve(&id);
                    if let Some(id) = self.report(found)? {
                        self.name_menu(&id)?;
                    }
                }
                NamesCommand::Add => {
                    let raw = self.prompter.ask("New character id: ")?;
                    let added = self.session.tree.names.add_id(&raw);
                    if let Some(id) = self.report(added)? {
                        self.name_menu(&id)?;
                    }
                }
                NamesCommand::Back => return Ok(()),
            }
        }
    }

    fn name_menu(&mut self, id: &NameId) -> io::Result<()> {
        loop {
            let found = self.session.tree.names.get(id.as_str()).cloned();
            let Some(name) = self.report(found)? else {
                return Ok(());
            };
            self.prompter.say(format!("Character {}:", name.id().as_str().bold()))?;
            for field in NameField::ALL {
                let value = name.get(field).unwrap_or("-");
                self.prompter.say(format!("  {}: {}", field.label(), value))?;
            }

            let command = self.prompter.choose::<NameCommand>(
                "(f)irst, (l)ast, f(u)ll, (p)osition, (t)itle, (w)ebsite title, e(x)it: ",
            )?;
            match command {
                NameCommand::Set(field) => {
                    let value = self.prompter.ask(&format!("New {} (blank clears): ", field.label()))?;
                    let updated = self.session.tree.names.update(id.as_str(), field, value.trim());
                    self.report(updated)?;
                }
                NameCommand::Back => return Ok(()),
            }
        }
    }
}

fn describe_route(tree: &StoryTree, route: &Route, path: &RoutePath) -> Vec<String> {
    let mut lines = vec![format!("Route: {}", route.name.as_str().bold())];

    if let Ok(tally) = tally_at(tree, path) {
        if !tally.is_empty() {
            let deaths: Vec<_> = tally
                .iter()
                .map(|death| format!("{} x{}", tree.names.display_name(&death.id), death.count))
                .collect();
            lines.push(format!("  deaths so far: {}", deaths.join(", ")));
        }
    }
    lines.push(format!(
        "  {} death record(s), {} event(s)",
        route.death_count(),
        route.events().len()
    ));
    lines.push(match route.branch() {
        Some(branch) => format!(
            "  branch: {} [day {}] with {} choice(s)",
            branch.name,
            branch.day,
            branch.choices().len()
        ),
        None => "  no branch".to_string(),
    });
    lines
}

fn describe_death(names: &NameRegistry, death: &Death) -> String {
    format!(
        "{} ({}) died {} time(s) on day(s) {}",
        death.id,
        names.display_name(&death.id),
        death.count,
        format_days(death.days())
    )
}

fn describe_event(event: &Event) -> String {
    format!("{} on day(s) {}", event.description, format_days(event.days()))
}

fn describe_branch(branch: &Branch) -> Vec<String> {
    let mut lines = vec![format!("Branch: {} [day {}]", branch.name, branch.day)];
    lines.extend(
        branch
            .choices()
            .iter()
            .enumerate()
            .map(|(index, choice)| format!("  {}", describe_choice(index, choice))),
    );
    lines
}

fn describe_choice(index: usize, choice: &Choice) -> String {
    format!(
        "{}: {} ({}) -> {}",
        index, choice.label, choice.direction, choice.route.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use story_model::Name;

    fn sample_tree() -> StoryTree {
        let mut names = NameRegistry::new();
        names.add(Name::new("amy").with_full("Amy Smith")).unwrap();
        let mut tree = StoryTree::with_names(names);

        let mut start = Route::new("Start");
        start
            .add_death(&tree.names, Death::new("amy", 1, vec![3]))
            .unwrap();
        start.set_branch(
            Branch::new("Choose", 5, vec![Choice::new("left", "Stay", Route::new("Stay Route"))])
                .unwrap(),
        );
        tree.add_route(start);
        tree
    }

    #[test]
    fn test_describe_route() {
        colored::control::set_override(false);
        let tree = sample_tree();
        let path = RoutePath::base(tree.route_id_at(0).unwrap()).descend(0);
        let route = tree.resolve(&path).unwrap();

        let lines = describe_route(&tree, route, &path);
        assert_eq!(
            lines,
            vec![
                "Route: Stay Route".to_string(),
                "  deaths so far: Amy Smith x1".to_string(),
                "  0 death record(s), 0 event(s)".to_string(),
                "  no branch".to_string(),
            ]
        );
    }

    #[test]
    fn test_describe_branch() {
        let tree = sample_tree();
        let (_, start) = tree.routes().next().unwrap();
        let lines = describe_branch(start.branch().unwrap());
        assert_eq!(lines[0], "Branch: Choose [day 5]");
        assert_eq!(lines[1], "  0: Stay (left) -> Stay Route");
    }

    #[test]
    fn test_describe_death_uses_display_name() {
        let tree = sample_tree();
        let (_, start) = tree.routes().next().unwrap();
        let death = start.death("amy").unwrap();
        assert_eq!(
            describe_death(&tree.names, death),
            "amy (Amy Smith) died 1 time(s) on day(s) 3"
        );
    }
}
