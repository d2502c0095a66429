//! Pokedex - An interactive PokeAPI client
//!
//! Reads commands from stdin and prints results to stdout. Logs go to
//! stderr and are quiet unless `RUST_LOG` asks for more.

use anyhow::Context;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, Config, PokeApiClient, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the API client and its response cache
/// 4. Run the REPL until `exit` or end of input
/// 5. Close the cache so its sweep task stops
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs do not interleave with the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, cache_policy={:?}, base_url={}, request_timeout={}s",
        config.cache_ttl.as_secs(),
        config.cache_policy,
        config.base_url,
        config.request_timeout.as_secs()
    );

    let client = PokeApiClient::new(&config).context("failed to build the PokeAPI client")?;
    let mut session = Session::new(client);

    let input = BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();
    let result = repl::run(&mut session, input, &mut out).await;

    session.client().close().await;
    info!("Pokedex shutdown complete");

    result.context("terminal i/o failed")
}
