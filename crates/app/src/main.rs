use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quizdeck_core::model::Deck;
use quizdeck_core::seed_decks;
use ui::{App, UiApp, build_app_context};

mod logging;

const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_TITLE: &str = "QuizDeck";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyTitle,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyTitle => write!(f, "--title must not be blank"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--log <filter>] [--title <title>] [--empty]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --log {DEFAULT_LOG_FILTER}");
    eprintln!("  --title {DEFAULT_TITLE}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZDECK_LOG, QUIZDECK_TITLE");
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AppConfig {
    log_filter: String,
    title: String,
    /// Start with no decks instead of the built-in seed.
    empty: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Launch(AppConfig),
    Help,
}

impl AppConfig {
    fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Command, ArgsError> {
        let mut log_filter = env("QUIZDECK_LOG")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.into());
        let mut title = env("QUIZDECK_TITLE")
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.into());
        let mut empty = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--log" => log_filter = require_value(&mut args, "--log")?,
                "--title" => {
                    let value = require_value(&mut args, "--title")?;
                    let value = value.trim();
                    if value.is_empty() {
                        return Err(ArgsError::EmptyTitle);
                    }
                    title = value.to_owned();
                }
                "--empty" => empty = true,
                "--help" | "-h" => return Ok(Command::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Command::Launch(Self {
            log_filter,
            title,
            empty,
        }))
    }
}

struct DesktopApp {
    title: String,
    decks: Vec<Deck>,
}

impl UiApp for DesktopApp {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn initial_decks(&self) -> Vec<Deck> {
        self.decks.clone()
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let command = AppConfig::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;
    let config = match command {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Launch(config) => config,
    };

    logging::init_tracing(&config.log_filter);

    let decks = if config.empty {
        Vec::new()
    } else {
        seed_decks()?
    };
    tracing::info!(decks = decks.len(), title = %config.title, "starting quizdeck");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        title: config.title.clone(),
        decks,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(config.title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
