//! REPL Module
//!
//! The interactive read loop and its commands.
//!
//! # Commands
//! - `help`, `exit`
//! - `map`, `mapb` - page forwards and backwards through location areas
//! - `explore <area>` - list the Pokemon found in an area
//! - `catch <pokemon>`, `inspect <pokemon>`, `pokedex`

pub mod commands;
pub mod handlers;
pub mod session;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::error::{PokedexError, Result};

pub use commands::{dispatch, find_command, Command, CommandKind, Flow, COMMANDS};
pub use session::{CatchRoll, RandomRoll, Session};

/// Printed before every line of input
pub const PROMPT: &str = "Pokedex > ";

/// Lowercases `text` and splits it into words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Runs the read loop until `exit` or end of input.
///
/// Command errors are printed and the loop continues. Only failures to
/// read input or write output end the loop with an error.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        let words = clean_input(&line);
        let Some((name, args)) = words.split_first() else {
            continue;
        };

        let Some(command) = find_command(name) else {
            writeln!(out, "Unknown command")?;
            continue;
        };

        match dispatch(command.kind, session, args, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(PokedexError::Io(err)) => return Err(err.into()),
            Err(err) => {
                debug!(command = command.name, error = %err, "Command failed");
                writeln!(out, "{}", err)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::api::PokeApiClient;
    use crate::cache::Cache;

    #[test]
    fn test_clean_input() {
        let cases: [(&str, &[&str]); 5] = [
            ("  hello  world  ", &["hello", "world"]),
            ("Charmander Bulbasaur PIKACHU", &["charmander", "bulbasaur", "pikachu"]),
            ("hello", &["hello"]),
            ("   UPPERCASE   lowercase   MiXeD   ", &["uppercase", "lowercase", "mixed"]),
            ("", &[]),
        ];

        for (input, expected) in cases {
            assert_eq!(clean_input(input), expected, "input: {:?}", input);
        }
    }

    #[tokio::test]
    async fn test_run_handles_blank_unknown_and_exit() {
        let cache = Cache::new(Duration::from_secs(60));
        let mut session = Session::new(PokeApiClient::with_cache("http://127.0.0.1:9", cache));
        let input: &[u8] = b"\n   \nfly away\nEXIT\nhelp\n";
        let mut out = Vec::new();

        run(&mut session, input, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Pokedex > Pokedex > Pokedex > Unknown command\nPokedex > Closing the Pokedex... Goodbye!\n"
        );
        session.client().close().await;
    }

    #[tokio::test]
    async fn test_run_reports_errors_and_stops_at_eof() {
        let cache = Cache::new(Duration::from_secs(60));
        let mut session = Session::new(PokeApiClient::with_cache("http://127.0.0.1:9", cache));
        let input: &[u8] = b"catch\nmapb";
        let mut out = Vec::new();

        run(&mut session, input, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Pokedex > please provide a Pokemon name\nPokedex > you're on the first page\nPokedex > \n"
        );
        session.client().close().await;
    }
}
