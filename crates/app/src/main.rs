use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{OpenTdbConfig, OpenTdbProvider, QuizLoopService};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use trivia_core::Quiz;
use trivia_core::model::{AmountError, Page, QuestionAmount};
use ui::vm::{map_quiz, plain_text};
use ui::{App, UiApp, build_app_context};

const DIFFICULTIES: [&str; 3] = ["easy", "medium", "hard"];

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidAmount(AmountError),
    InvalidCategory { raw: String },
    InvalidDifficulty { raw: String },
    InvalidBaseUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidAmount(err) => write!(f, "invalid --amount value: {err}"),
            ArgsError::InvalidCategory { raw } => write!(f, "invalid --category value: {raw}"),
            ArgsError::InvalidDifficulty { raw } => {
                write!(f, "invalid --difficulty value: {raw} (expected easy, medium or hard)")
            }
            ArgsError::InvalidBaseUrl { raw } => write!(f, "invalid --base-url value: {raw}"),
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
    quiz_loop: Arc<QuizLoopService>,
    default_amount: QuestionAmount,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn default_amount(&self) -> QuestionAmount {
        self.default_amount
    }
}

#[derive(Debug)]
struct Args {
    amount: QuestionAmount,
    category: Option<u32>,
    difficulty: Option<String>,
    base_url: OpenTdbConfig,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--amount <n>] [--category <id>] [--difficulty <level>] [--base-url <url>]");
    eprintln!("  cargo run -p app -- play [--amount <n>] [--category <id>] [--difficulty <level>] [--base-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --amount {}", QuestionAmount::DEFAULT);
    eprintln!("  --base-url https://opentdb.com");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRIVIA_AMOUNT, TRIVIA_CATEGORY, TRIVIA_DIFFICULTY, TRIVIA_API_BASE_URL, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Play,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "play" => Some(Self::Play),
            _ => None,
        }
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn parse_category(raw: String) -> Result<u32, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidCategory { raw })
}

fn parse_difficulty(raw: String) -> Result<String, ArgsError> {
    let level = raw.trim().to_ascii_lowercase();
    if DIFFICULTIES.contains(&level.as_str()) {
        Ok(level)
    } else {
        Err(ArgsError::InvalidDifficulty { raw })
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut amount = match env_value("TRIVIA_AMOUNT") {
            Some(raw) => raw.parse().map_err(ArgsError::InvalidAmount)?,
            None => QuestionAmount::DEFAULT,
        };
        let mut category = env_value("TRIVIA_CATEGORY")
            .map(parse_category)
            .transpose()?;
        let mut difficulty = env_value("TRIVIA_DIFFICULTY")
            .map(parse_difficulty)
            .transpose()?;
        let mut base_url = OpenTdbConfig::from_env();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--amount" => {
                    let value = require_value(args, "--amount")?;
                    amount = value.parse().map_err(ArgsError::InvalidAmount)?;
                }
                "--category" => {
                    category = Some(parse_category(require_value(args, "--category")?)?);
                }
                "--difficulty" => {
                    difficulty = Some(parse_difficulty(require_value(args, "--difficulty")?)?);
                }
                "--base-url" => {
                    let value = require_value(args, "--base-url")?;
                    let config = OpenTdbConfig::new(value.trim());
                    if config.token_url().is_err() {
                        return Err(ArgsError::InvalidBaseUrl { raw: value });
                    }
                    base_url = config;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            amount,
            category,
            difficulty,
            base_url,
        })
    }

    fn quiz_loop(&self) -> QuizLoopService {
        let provider = Arc::new(OpenTdbProvider::new(self.base_url.clone()));
        let mut quiz_loop = QuizLoopService::new(provider);
        if let Some(category) = self.category {
            quiz_loop = quiz_loop.with_param("category", category.to_string());
        }
        if let Some(difficulty) = &self.difficulty {
            quiz_loop = quiz_loop.with_param("difficulty", difficulty.clone());
        }
        quiz_loop
    }
}

/// Logs go to stderr so `play` output on stdout stays readable.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the desktop UI.
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
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    tracing::info!(
        command = ?cmd,
        amount = parsed.amount.get(),
        base_url = %parsed.base_url.base_url,
        "starting trivia"
    );
    let quiz_loop = parsed.quiz_loop();

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                quiz_loop: Arc::new(quiz_loop),
                default_amount: parsed.amount,
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Trivia")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Play => play(&quiz_loop, parsed.amount).await,
    }
}

type Input = Lines<BufReader<Stdin>>;

async fn prompt(input: &mut Input, message: &str) -> std::io::Result<Option<String>> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(message.as_bytes()).await?;
    stdout.flush().await?;
    input.next_line().await
}

/// Terminal game loop. Ends on EOF or when the player declines another round.
async fn play(
    quiz_loop: &QuizLoopService,
    amount: QuestionAmount,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut quiz = Quiz::new();
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    quiz_loop.ensure_token(&mut quiz).await?;

    loop {
        quiz_loop.start_quiz(&mut quiz, amount).await?;
        if quiz.is_awaiting_questions() {
            println!("The question service returned no questions.");
            return Ok(());
        }

        while quiz.page() == Page::Question {
            let Some(question) = quiz.current_question() else {
                break;
            };
            let answers = question.answers().to_vec();
            if let Some(progress) = quiz.progress() {
                println!();
                println!("Question {} of {}  (score: {})", progress.current, progress.total, quiz.score());
            }
            println!("{}", plain_text(question.text()));
            for (index, answer) in answers.iter().enumerate() {
                println!("  {}. {}", index + 1, plain_text(answer));
            }

            let choice = loop {
                let Some(line) = prompt(&mut input, "> ").await? else {
                    return Ok(());
                };
                match line.trim().parse::<usize>() {
                    Ok(number) if (1..=answers.len()).contains(&number) => {
                        break answers[number - 1].clone();
                    }
                    _ => println!("Pick a number between 1 and {}.", answers.len()),
                }
            };

            let feedback = quiz_loop.submit_answer(&mut quiz, choice)?;
            println!("{}", plain_text(&feedback));
            quiz_loop.next_question(&mut quiz)?;
        }

        println!();
        println!("{}", map_quiz(&quiz).final_score_label());

        let again = prompt(&mut input, "Play again? [y/N] ").await?;
        if !again.is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y")) {
            return Ok(());
        }
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
