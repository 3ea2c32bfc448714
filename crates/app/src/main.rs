use std::fmt;
use std::sync::Arc;

use chart::SvgRadarChart;
use services::{ApiClient, ApiConfig, Clock, FormService, LoginService, ResultService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wellcheck_core::model::{Answer, Credentials, CredentialsError, TestAnswers, UserId, UserSession};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidUserId { raw: String },
    MissingAnswers,
    MissingBaseUrl,
    MissingUserId,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidUserId { raw } => write!(f, "invalid --user-id value: {raw}"),
            ArgsError::MissingAnswers => write!(f, "--answers <path> is required"),
            ArgsError::MissingBaseUrl => {
                write!(f, "--base-url or WELLCHECK_BASE_URL is required")
            }
            ArgsError::MissingUserId => {
                write!(f, "--user-id, WELLCHECK_USER_ID, or a login session is required")
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

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- result --answers <path> [--base-url <url>] [--out <path>]");
    eprintln!("  cargo run -p app -- submit --answers <path> --user-id <id> [--base-url <url>]");
    eprintln!("  cargo run -p app -- form   --user-id <id> [--base-url <url>]");
    eprintln!();
    eprintln!("Defaults for result:");
    eprintln!("  --out result-chart.svg");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  WELLCHECK_BASE_URL, WELLCHECK_USER_ID");
    eprintln!("  WELLCHECK_USERNAME, WELLCHECK_PASSWORD  (log in before the command runs)");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Result,
    Submit,
    Form,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "result" => Some(Self::Result),
            "submit" => Some(Self::Submit),
            "form" => Some(Self::Form),
            _ => None,
        }
    }
}

struct Args {
    base_url: Option<String>,
    answers_path: Option<String>,
    out_path: String,
    user_id: Option<UserId>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            base_url: std::env::var("WELLCHECK_BASE_URL")
                .ok()
                .filter(|value| !value.trim().is_empty()),
            answers_path: None,
            out_path: "result-chart.svg".into(),
            user_id: std::env::var("WELLCHECK_USER_ID")
                .ok()
                .and_then(|value| value.parse().ok()),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--base-url" => {
                    parsed.base_url = Some(require_value(args, "--base-url")?);
                }
                "--answers" => {
                    parsed.answers_path = Some(require_value(args, "--answers")?);
                }
                "--out" => {
                    parsed.out_path = require_value(args, "--out")?;
                }
                "--user-id" => {
                    let value = require_value(args, "--user-id")?;
                    let id = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidUserId { raw: value.clone() })?;
                    parsed.user_id = Some(id);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn base_url(&self) -> Result<&str, ArgsError> {
        self.base_url.as_deref().ok_or(ArgsError::MissingBaseUrl)
    }

    fn answers_path(&self) -> Result<&str, ArgsError> {
        self.answers_path.as_deref().ok_or(ArgsError::MissingAnswers)
    }

    fn user_id(&self, session: Option<&UserSession>) -> Result<UserId, ArgsError> {
        self.user_id
            .or_else(|| session.map(|session| session.user_id))
            .ok_or(ArgsError::MissingUserId)
    }
}

/// Accepts either the wire shape (`{"answers": [...]}`) or a bare nested
/// array of answer rows.
fn load_answers(path: &str) -> Result<TestAnswers, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    if let Ok(answers) = serde_json::from_str::<TestAnswers>(&raw) {
        return Ok(answers);
    }
    let rows: Vec<Vec<Answer>> = serde_json::from_str(&raw)?;
    Ok(TestAnswers::new(rows))
}

fn login_credentials() -> Option<Result<Credentials, CredentialsError>> {
    let username = std::env::var("WELLCHECK_USERNAME").ok()?;
    let password = std::env::var("WELLCHECK_PASSWORD").ok()?;
    Some(Credentials::new(username, password))
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: presenting the result when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Result,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Result,
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
    let args = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let config = ApiConfig::new(args.base_url()?);
    let api = Arc::new(ApiClient::new(config)?);

    let session = match login_credentials() {
        Some(credentials) => {
            let login = LoginService::new(Arc::clone(&api));
            Some(login.login(&credentials?).await?)
        }
        None => None,
    };

    match cmd {
        Command::Result => {
            let answers = load_answers(args.answers_path()?)?;
            let service = ResultService::new(api, Arc::new(SvgRadarChart::new()));
            let outcome = service.present(async { answers }).await?;

            println!("Overall score: {}", outcome.report.score);
            for scored in &outcome.report.categories {
                println!("  {}: {}", scored.title(), scored.score);
            }
            if let Some(result) = &outcome.result {
                if let Some(title) = &result.title {
                    println!("Focus area: {title}");
                }
                if let Some(description) = &result.description {
                    println!("{description}");
                }
            }

            std::fs::write(&args.out_path, &outcome.chart)?;
            info!(path = %args.out_path, "chart written");
            Ok(())
        }
        Command::Submit => {
            let user_id = args.user_id(session.as_ref())?;
            let answers = load_answers(args.answers_path()?)?;
            let service = FormService::new(api, Clock::system());
            service.submit(user_id, &answers).await?;
            println!("Answers submitted for user {user_id}.");
            Ok(())
        }
        Command::Form => {
            let user_id = args.user_id(session.as_ref())?;
            let service = FormService::new(api, Clock::system());
            let form = service.user_form(user_id).await?;

            println!("{} (form {})", form.title, form.id);
            for category in &form.categories {
                println!("  {}: {} questions", category.title, category.question_count());
            }
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
