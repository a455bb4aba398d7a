use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use env_logger::{Builder, Env, Target};

use recap::app::{App, Providers};
use recap::config::Config;
use recap::error::{AppError, AppResult};
use recap::fixture::FixtureProvider;
use recap::share::LogShareProvider;
use recap::story::StoryDeck;

const ENV_LOG: &str = "RECAP_LOG";
const ENV_LOG_FILE: &str = "RECAP_LOG_FILE";

/// Plays a shopping recap as a sequence of story cards in the terminal.
#[derive(Debug, Parser)]
#[command(name = "recap", version)]
struct Args {
    /// Story deck to play, as TOML. Defaults to the built-in recap.
    #[arg(long, value_name = "stories.toml")]
    deck: Option<PathBuf>,
    /// Catalog and analysis fixture, as JSON. Defaults to sample data.
    #[arg(long, value_name = "fixture.json")]
    catalog: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    if let Err(err) = run(Args::parse()).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> AppResult<()> {
    init_logging()?;

    let config = Config::load()?;
    let deck = match &args.deck {
        Some(path) => StoryDeck::load_from_path(path)?,
        None => StoryDeck::default(),
    };
    let fixture = match &args.catalog {
        Some(path) => FixtureProvider::load_from_path(path)?,
        None => FixtureProvider::sample(),
    };
    log::info!(
        "starting recap with {} stories ({} screens)",
        deck.len(),
        deck.total_screens()
    );

    let fixture = Arc::new(fixture);
    let providers = Providers {
        catalog: fixture.clone(),
        content: fixture,
        share: Arc::new(LogShareProvider::default()),
    };
    let mut app = App::new(deck, providers, config);
    app.run().await
}

fn init_logging() -> AppResult<()> {
    let mut builder = Builder::from_env(Env::new().filter_or(ENV_LOG, "warn"));
    if let Some(path) = std::env::var_os(ENV_LOG_FILE)
        && !path.is_empty()
    {
        let file = File::create(&path).map_err(|source| {
            AppError::io_with_context(
                source,
                format!("failed to open log file: {}", PathBuf::from(&path).display()),
            )
        })?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::Args;

    #[test]
    fn args_default_to_builtin_deck_and_sample_catalog() {
        let args = Args::try_parse_from(["recap"]).expect("no args should parse");
        assert!(args.deck.is_none());
        assert!(args.catalog.is_none());
    }

    #[test]
    fn args_accept_deck_and_catalog_paths() {
        let args = Args::try_parse_from([
            "recap",
            "--deck",
            "stories.toml",
            "--catalog",
            "fixture.json",
        ])
        .expect("both paths should parse");
        assert_eq!(args.deck, Some(PathBuf::from("stories.toml")));
        assert_eq!(args.catalog, Some(PathBuf::from("fixture.json")));
    }

    #[test]
    fn args_reject_positional_paths() {
        assert!(Args::try_parse_from(["recap", "stories.toml"]).is_err());
    }
}
