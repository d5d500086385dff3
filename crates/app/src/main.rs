use std::fmt;
use std::sync::Arc;

use bitkids_core::model::Language;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, QuizService};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLanguage { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLanguage { raw } => write!(f, "invalid --lang value: {raw}"),
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

struct DesktopApp {
    language: Language,
    quiz: QuizService,
    clock: Clock,
}

impl UiApp for DesktopApp {
    fn initial_language(&self) -> Language {
        self.language
    }

    fn quiz(&self) -> QuizService {
        self.quiz
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

struct Args {
    language: Language,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--lang <de|en|es>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --lang de");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  BITKIDS_LANG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut language = std::env::var("BITKIDS_LANG")
            .ok()
            .and_then(|value| value.parse::<Language>().ok())
            .unwrap_or_default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--lang" => {
                    let value = require_value(args, "--lang")?;
                    language = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidLanguage { raw: value })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { language })
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(&mut argv) {
        Ok(parsed) => parsed,
        Err(error) => {
            eprintln!("{error}");
            print_usage();
            std::process::exit(2);
        }
    };

    tracing::info!(language = %parsed.language, "starting desktop app");

    let clock = Clock::default_clock();
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        language: parsed.language,
        quiz: QuizService::new(clock),
        clock,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Bitcoin for Kids")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}
