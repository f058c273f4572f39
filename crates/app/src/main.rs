use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, CalculatorError, CalculatorService};
use storage::repository::Storage;
use tracing_subscriber::EnvFilter;
use ui::vm::format_probability;
use ui::{App, UiApp, build_app_context};

const DEFAULT_TITLE: &str = "Coin Flip Probability Calculator";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLogFilter { raw: String },
    EmptyTitle,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLogFilter { raw } => write!(f, "invalid --log value: {raw}"),
            ArgsError::EmptyTitle => write!(f, "--title cannot be empty"),
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
    calculator: Arc<CalculatorService>,
    open_dialog_on_launch: bool,
}

impl UiApp for DesktopApp {
    fn open_dialog_on_launch(&self) -> bool {
        self.open_dialog_on_launch
    }

    fn calculator(&self) -> Arc<CalculatorService> {
        Arc::clone(&self.calculator)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--open] [--title <text>] [--log <filter>]");
    eprintln!("  cargo run -p app -- calc <coins> <heads> [--log <filter>]");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  --title \"{DEFAULT_TITLE}\"");
    eprintln!("  --log {DEFAULT_LOG_FILTER}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COINFLIP_LOG, COINFLIP_OPEN_DIALOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Calc,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "calc" => Some(Self::Calc),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    log_filter: String,
    open_dialog: bool,
    title: String,
    positional: Vec<String>,
}

impl Args {
    fn from_env() -> Self {
        Self {
            log_filter: std::env::var("COINFLIP_LOG")
                .ok()
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            open_dialog: std::env::var("COINFLIP_OPEN_DIALOG")
                .ok()
                .is_some_and(|value| parse_flag(&value)),
            title: DEFAULT_TITLE.to_string(),
            positional: Vec::new(),
        }
    }

    fn parse(mut self, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--log" => {
                    let value = require_value(args, "--log")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidLogFilter { raw: value });
                    }
                    self.log_filter = value;
                }
                "--open" => self.open_dialog = true,
                "--title" => {
                    let value = require_value(args, "--title")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyTitle);
                    }
                    self.title = value;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                // Negative numbers are values for `calc`, not flags.
                other if other.starts_with('-') && other.parse::<i64>().is_err() => {
                    return Err(ArgsError::UnknownArg(arg));
                }
                _ => self.positional.push(arg),
            }
        }

        Ok(self)
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn init_logging(filter: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_new(filter).map_err(|_| ArgsError::InvalidLogFilter {
        raw: filter.to_string(),
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()?;
    Ok(())
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

    let parsed = Args::from_env()
        .parse(&mut argv.into_iter())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;

    init_logging(&parsed.log_filter)?;

    // The session store lives exactly as long as this process.
    let storage = Storage::in_memory();
    let services = AppServices::new(&storage);

    match cmd {
        Command::Ui => {
            if let Some(extra) = parsed.positional.first() {
                return Err(ArgsError::UnknownArg(extra.clone()).into());
            }

            tracing::info!(open_dialog = parsed.open_dialog, "launching calculator window");
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                calculator: services.calculator(),
                open_dialog_on_launch: parsed.open_dialog,
            });
            let context = build_app_context(&app);

            // Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(parsed.title.as_str())
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Calc => {
            let [coins, heads] = parsed.positional.as_slice() else {
                return Err(ArgsError::MissingValue {
                    flag: "calc <coins> <heads>",
                }
                .into());
            };
            match services.calculator().submit(coins, heads) {
                Ok(calculation) => {
                    println!("Coin Flips (n): {}", calculation.coins());
                    println!("Heads (k): {}", calculation.heads());
                    println!("Probability: {}", format_probability(calculation.probability()));
                    Ok(())
                }
                Err(CalculatorError::InvalidInput(err)) => {
                    tracing::debug!(%err, "calc rejected input");
                    Err(err.user_message().into())
                }
                Err(err) => Err(err.into()),
            }
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
