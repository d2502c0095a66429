//! REPL command handlers
//!
//! One handler per command. Handlers print to the supplied writer and
//! return errors for the read loop to report.

use std::io::Write;

use tracing::debug;

use crate::api::{Fetched, Source};
use crate::error::{PokedexError, Result};
use crate::models::LocationAreaPage;

use super::commands::COMMANDS;
use super::session::{is_caught, Session};

fn report_source<T, W: Write>(fetched: &Fetched<T>, out: &mut W) -> Result<()> {
    match fetched.source {
        Source::Cache => writeln!(out, "(using cached data)")?,
        Source::Network => writeln!(out, "(fetching from API...)")?,
    }
    Ok(())
}

fn print_page<W: Write>(page: &LocationAreaPage, out: &mut W) -> Result<()> {
    for area in &page.results {
        writeln!(out, "{}", area.name)?;
    }
    Ok(())
}

fn first_arg<'a>(args: &'a [String], what: &'static str) -> Result<&'a str> {
    args.first()
        .map(String::as_str)
        .ok_or(PokedexError::MissingArgument(what))
}

/// Handler for `help`
pub fn help_handler<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for command in COMMANDS {
        writeln!(out, "{}: {}", command.name, command.description)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Handler for `exit`
pub fn exit_handler<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Closing the Pokedex... Goodbye!")?;
    Ok(())
}

/// Handler for `map`
///
/// Shows the page after the current one, or the first page on first use.
pub async fn map_handler<W: Write>(session: &mut Session, out: &mut W) -> Result<()> {
    let next = session.next_url().map(str::to_string);
    let fetched = session.client().location_areas(next.as_deref()).await?;
    report_source(&fetched, out)?;

    let page = fetched.value;
    print_page(&page, out)?;
    session.set_cursors(page.next, page.previous);
    Ok(())
}

/// Handler for `mapb`
pub async fn mapb_handler<W: Write>(session: &mut Session, out: &mut W) -> Result<()> {
    let Some(previous) = session.previous_url().map(str::to_string) else {
        writeln!(out, "you're on the first page")?;
        return Ok(());
    };

    let fetched = session.client().location_areas(Some(&previous)).await?;
    report_source(&fetched, out)?;

    let page = fetched.value;
    print_page(&page, out)?;
    session.set_cursors(page.next, page.previous);
    Ok(())
}

/// Handler for `explore <area>`
pub async fn explore_handler<W: Write>(
    session: &mut Session,
    args: &[String],
    out: &mut W,
) -> Result<()> {
    let area = first_arg(args, "location area name")?;
    writeln!(out, "Exploring {}...", area)?;

    let fetched = session.client().location_area(area).await?;
    report_source(&fetched, out)?;

    writeln!(out, "Found Pokemon:")?;
    for name in fetched.value.pokemon_names() {
        writeln!(out, " - {}", name)?;
    }
    Ok(())
}

/// Handler for `catch <pokemon>`
pub async fn catch_handler<W: Write>(
    session: &mut Session,
    args: &[String],
    out: &mut W,
) -> Result<()> {
    let name = first_arg(args, "Pokemon name")?;
    writeln!(out, "Throwing a Pokeball at {}...", name)?;

    let pokemon = session.client().pokemon(name).await?.value;
    let roll = session.roll_catch();
    debug!(pokemon = %name, roll, base_experience = pokemon.base_experience, "Catch attempt");

    if is_caught(roll, pokemon.base_experience) {
        session.record_catch(name, pokemon);
        writeln!(out, "{} was caught!", name)?;
        writeln!(out, "You may now inspect it with the inspect command.")?;
    } else {
        writeln!(out, "{} escaped!", name)?;
    }
    Ok(())
}

/// Handler for `inspect <pokemon>`
pub fn inspect_handler<W: Write>(session: &Session, args: &[String], out: &mut W) -> Result<()> {
    let name = first_arg(args, "Pokemon name")?;

    let Some(pokemon) = session.caught(name) else {
        writeln!(out, "you have not caught that pokemon")?;
        return Ok(());
    };

    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
    }
    writeln!(out, "Types:")?;
    for kind in &pokemon.types {
        writeln!(out, "  - {}", kind.kind.name)?;
    }
    Ok(())
}

/// Handler for `pokedex`
pub fn pokedex_handler<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    let mut names = session.caught_names().peekable();
    if names.peek().is_none() {
        writeln!(out, "your pokedex is empty")?;
        return Ok(());
    }

    writeln!(out, "Your Pokedex:")?;
    for name in names {
        writeln!(out, " - {}", name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::api::PokeApiClient;
    use crate::cache::Cache;
    use crate::models::{NamedResource, Pokemon, PokemonStat, PokemonType};

    fn offline_session() -> Session {
        let cache = Cache::new(Duration::from_secs(60));
        Session::new(PokeApiClient::with_cache("http://127.0.0.1:9", cache))
    }

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    fn named(name: &str) -> NamedResource {
        NamedResource {
            name: name.to_string(),
            url: String::new(),
        }
    }

    #[test]
    fn test_help_lists_every_command() {
        let mut out = Vec::new();
        help_handler(&mut out).unwrap();

        let text = output(out);
        assert!(text.contains("Welcome to the Pokedex!"));
        for command in COMMANDS {
            assert!(text.contains(&format!("{}: {}", command.name, command.description)));
        }
    }

    #[tokio::test]
    async fn test_mapb_on_first_page() {
        let mut session = offline_session();
        let mut out = Vec::new();

        mapb_handler(&mut session, &mut out).await.unwrap();

        assert_eq!(output(out), "you're on the first page\n");
        session.client().close().await;
    }

    #[tokio::test]
    async fn test_missing_arguments() {
        let mut session = offline_session();
        let mut out = Vec::new();

        let err = explore_handler(&mut session, &[], &mut out).await.unwrap_err();
        assert_eq!(err.to_string(), "please provide a location area name");

        let err = catch_handler(&mut session, &[], &mut out).await.unwrap_err();
        assert_eq!(err.to_string(), "please provide a Pokemon name");

        let err = inspect_handler(&session, &[], &mut out).unwrap_err();
        assert_eq!(err.to_string(), "please provide a Pokemon name");

        assert!(out.is_empty());
        session.client().close().await;
    }

    #[tokio::test]
    async fn test_inspect_caught_pokemon() {
        let mut session = offline_session();
        session.record_catch(
            "pidgey",
            Pokemon {
                id: 16,
                name: "pidgey".to_string(),
                base_experience: 50,
                height: 3,
                weight: 18,
                stats: vec![PokemonStat {
                    base_stat: 40,
                    stat: named("hp"),
                }],
                types: vec![
                    PokemonType {
                        slot: 1,
                        kind: named("normal"),
                    },
                    PokemonType {
                        slot: 2,
                        kind: named("flying"),
                    },
                ],
            },
        );

        let mut out = Vec::new();
        inspect_handler(&session, &["pidgey".to_string()], &mut out).unwrap();

        assert_eq!(
            output(out),
            "Name: pidgey\nHeight: 3\nWeight: 18\nStats:\n  -hp: 40\nTypes:\n  - normal\n  - flying\n"
        );
        session.client().close().await;
    }

    #[tokio::test]
    async fn test_inspect_and_pokedex_when_empty() {
        let session = offline_session();
        let mut out = Vec::new();

        inspect_handler(&session, &["mew".to_string()], &mut out).unwrap();
        pokedex_handler(&session, &mut out).unwrap();

        assert_eq!(
            output(out),
            "you have not caught that pokemon\nyour pokedex is empty\n"
        );
        session.client().close().await;
    }
}
