//! REPL command table
//!
//! Maps command names to their descriptions and handlers.

use std::io::Write;

use crate::error::Result;

use super::handlers;
use super::session::Session;

/// Every command the REPL understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Catch,
    Exit,
    Explore,
    Help,
    Inspect,
    Map,
    MapBack,
    Pokedex,
}

/// A named entry in the command table
#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: CommandKind,
}

/// What the read loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The command table, sorted by name.
pub const COMMANDS: &[Command] = &[
    Command {
        name: "catch",
        description: "Attempt to catch a Pokemon",
        kind: CommandKind::Catch,
    },
    Command {
        name: "exit",
        description: "Exit the Pokedex",
        kind: CommandKind::Exit,
    },
    Command {
        name: "explore",
        description: "Explore a location area for Pokemon",
        kind: CommandKind::Explore,
    },
    Command {
        name: "help",
        description: "Displays a help message",
        kind: CommandKind::Help,
    },
    Command {
        name: "inspect",
        description: "View details of a caught Pokemon",
        kind: CommandKind::Inspect,
    },
    Command {
        name: "map",
        description: "Displays the next 20 location areas",
        kind: CommandKind::Map,
    },
    Command {
        name: "mapb",
        description: "Displays the previous 20 location areas",
        kind: CommandKind::MapBack,
    },
    Command {
        name: "pokedex",
        description: "List every Pokemon you have caught",
        kind: CommandKind::Pokedex,
    },
];

/// Looks up a command by its exact name.
pub fn find_command(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|command| command.name == name)
}

/// Runs the handler for `kind`.
pub async fn dispatch<W: Write>(
    kind: CommandKind,
    session: &mut Session,
    args: &[String],
    out: &mut W,
) -> Result<Flow> {
    match kind {
        CommandKind::Help => handlers::help_handler(out)?,
        CommandKind::Exit => {
            handlers::exit_handler(out)?;
            return Ok(Flow::Exit);
        }
        CommandKind::Map => handlers::map_handler(session, out).await?,
        CommandKind::MapBack => handlers::mapb_handler(session, out).await?,
        CommandKind::Explore => handlers::explore_handler(session, args, out).await?,
        CommandKind::Catch => handlers::catch_handler(session, args, out).await?,
        CommandKind::Inspect => handlers::inspect_handler(session, args, out)?,
        CommandKind::Pokedex => handlers::pokedex_handler(session, out)?,
    }
    Ok(Flow::Continue)
}
