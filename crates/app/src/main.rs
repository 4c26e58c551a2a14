use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::QuestionSet;
use services::{BuiltinQuestions, JsonQuestionFile, QuestionSource};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_TITLE: &str = "Quiz";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTitle { raw: String },
    InvalidQuestionsPath { raw: String },
    NotAllowed { flag: &'static str, command: Command },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTitle { raw } => write!(f, "invalid --title value: {raw:?}"),
            ArgsError::InvalidQuestionsPath { raw } => {
                write!(f, "invalid --questions value: {raw:?}")
            }
            ArgsError::NotAllowed { flag, command } => {
                write!(f, "{flag} is not accepted by `{}`", command.name())
            }
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
    title: String,
    questions: QuestionSet,
}

impl UiApp for DesktopApp {
    fn quiz_title(&self) -> String {
        self.title.clone()
    }

    fn questions(&self) -> QuestionSet {
        self.questions.clone()
    }
}

#[derive(Debug)]
struct Args {
    questions: Option<PathBuf>,
    title: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--questions <file.json>] [--title <text>]");
    eprintln!("  cargo run -p app -- check [--questions <file.json>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in question set, --title {DEFAULT_TITLE}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS, QUIZ_TITLE, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Ui => "ui",
            Self::Check => "check",
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>, cmd: Command) -> Result<Self, ArgsError> {
        let mut questions = std::env::var("QUIZ_QUESTIONS")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut title = std::env::var("QUIZ_TITLE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidQuestionsPath { raw: value });
                    }
                    questions = Some(PathBuf::from(value));
                }
                "--title" => {
                    if cmd == Command::Check {
                        return Err(ArgsError::NotAllowed {
                            flag: "--title",
                            command: cmd,
                        });
                    }
                    let value = require_value(args, "--title")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidTitle { raw: value });
                    }
                    title = value;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { questions, title })
    }

    fn question_source(&self) -> Box<dyn QuestionSource> {
        match &self.questions {
            Some(path) => Box::new(JsonQuestionFile::new(path.clone())),
            None => Box::new(BuiltinQuestions),
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter, cmd).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let questions = parsed.question_source().load()?;

    match cmd {
        Command::Check => {
            println!("{} questions OK", questions.len());
            Ok(())
        }
        Command::Ui => {
            tracing::info!(title = %parsed.title, questions = questions.len(), "launching quiz");

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                title: parsed.title.clone(),
                questions,
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(parsed.title)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
