//! Interactive session over a catalog loaded once at startup.
//!
//! The session owns the `FilterState`; every change re-derives the visible
//! set from the same immutable collection.

use std::io::Write;

use kanto_config::Config;
use kanto_core::display::is_known_category;
use kanto_core::{CATEGORIES, Entity, FilterState};
use tracing::info;

use super::{build_loader, load_catalog, render};

const HELP: &str = "\
Commands:
  search <text>   filter by name or id (no text clears it)
  type <type>     filter by type (no type clears it)
  not             toggle exclusion (NOT) mode
  clear           reset every filter
  show            print the current results
  types           list the known types
  help            show this help
  exit            quit";

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Search(String),
    Type(String),
    ToggleNot,
    Clear,
    Show,
    Types,
    Help,
    Exit,
}

impl SessionCommand {
    fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        match word.to_lowercase().as_str() {
            "search" | "s" => Ok(Self::Search(rest.to_string())),
            "type" | "t" => Ok(Self::Type(rest.to_lowercase())),
            "not" | "n" => Ok(Self::ToggleNot),
            "clear" => Ok(Self::Clear),
            "show" | "" => Ok(Self::Show),
            "types" => Ok(Self::Types),
            "help" | "?" => Ok(Self::Help),
            "exit" | "quit" | "q" => Ok(Self::Exit),
            other => Err(format!(
                "Unknown command '{other}'. Type 'help' for commands."
            )),
        }
    }
}

struct BrowseSession {
    entities: Vec<Entity>,
    state: FilterState,
}

impl BrowseSession {
    const fn new(entities: Vec<Entity>) -> Self {
        Self {
            entities,
            state: FilterState {
                search_text: String::new(),
                selected_category: String::new(),
                invert: false,
            },
        }
    }

    /// Applies one command and returns what to print, or `None` to quit.
    fn handle(&mut self, command: SessionCommand) -> Option<String> {
        match command {
            SessionCommand::Search(text) => self.state.search_text = text,
            SessionCommand::Type(category) => {
                if !category.is_empty() && !is_known_category(&category) {
                    return Some(format!(
                        "Unknown type '{category}'. Known types: {}",
                        CATEGORIES.join(", ")
                    ));
                }
                self.state.selected_category = category;
            }
            SessionCommand::ToggleNot => self.state.invert = !self.state.invert,
            SessionCommand::Clear => self.state = FilterState::default(),
            SessionCommand::Show => {}
            SessionCommand::Types => return Some(CATEGORIES.join(", ")),
            SessionCommand::Help => return Some(HELP.to_string()),
            SessionCommand::Exit => return None,
        }

        Some(self.render())
    }

    fn render(&self) -> String {
        format!(
            "{}\n{}",
            render::state_line(&self.state),
            render::results(&self.entities, &self.state)
        )
    }
}

/// Strategy for the interactive browser.
///
/// Reads commands from stdin until `exit` or end of input.
///
/// # Errors
/// Fails before the prompt appears if the catalog cannot be loaded.
#[derive(Debug, Clone, Copy)]
pub struct BrowseStrategy;

impl super::CommandStrategy for BrowseStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let loader = build_loader(&config)?;

        println!("Loading catalog ({} entries max)...", config.api.limit);
        let entities = load_catalog(&loader).await?;
        info!("Browse session started with {} entities", entities.len());

        let mut session = BrowseSession::new(entities);
        println!("{}", session.render());
        println!("Type 'help' for commands, 'exit' to quit.\n");

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            if std::io::stdin().read_line(&mut line)? == 0 {
                break;
            }

            match SessionCommand::parse(&line) {
                Ok(command) => match session.handle(command) {
                    Some(output) => println!("{output}"),
                    None => break,
                },
                Err(message) => eprintln!("{message}"),
            }
        }

        Ok(())
    }
}
