use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use app::{AdvanceOutcome, AppController, AppState, ControllerConfig, HttpAvatarProbe, Notifier, Screen};
use data_loader::HttpFetcher;
use views::DiceBearResolver;

/// ReelRecs - browse one user's recommendations across four strategies
#[derive(Parser)]
#[command(name = "reel-recs")]
#[command(about = "Cycle through precomputed movie recommendations", long_about = None)]
struct Cli {
    /// Recommendation endpoint (the server picks the user)
    #[arg(long, env = "REEL_RECS_ENDPOINT", default_value = data_loader::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Base URL of the avatar generation service
    #[arg(long, env = "REEL_RECS_AVATAR_URL", default_value = views::DEFAULT_AVATAR_BASE_URL)]
    avatar_base_url: String,

    /// Delay in milliseconds between fading out and showing the next strategy
    #[arg(long, env = "REEL_RECS_FADE_MS", default_value = "300")]
    fade_ms: u64,

    /// Timeout in seconds for each HTTP request
    #[arg(long, env = "REEL_RECS_TIMEOUT_SECS", default_value = "10")]
    timeout_secs: u64,

    /// Skip loading the avatar image
    #[arg(long)]
    no_avatar_probe: bool,
}

/// Prints the failure notification to stderr
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red().bold());
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the screen
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let timeout = Duration::from_secs(cli.timeout_secs);

    let fetcher = HttpFetcher::new(cli.endpoint.as_str(), timeout)
        .context("Failed to build HTTP client")?;
    let mut controller = AppController::new(Arc::new(fetcher), Arc::new(TerminalNotifier))
        .with_config(ControllerConfig {
            fade_delay: Duration::from_millis(cli.fade_ms),
        })
        .with_resolver(Arc::new(DiceBearResolver::new(cli.avatar_base_url)));
    if !cli.no_avatar_probe {
        let probe = HttpAvatarProbe::new(timeout).context("Failed to build avatar HTTP client")?;
        controller = controller.with_avatar_probe(Arc::new(probe));
    }

    controller.start();
    draw(&controller);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    while !should_exit(stdin_open, controller.state()) {
        tokio::select! {
            line = lines.next_line(), if stdin_open => {
                let Some(line) = line.context("Failed to read input")? else {
                    // No more input: still show the outcome of the fetch
                    stdin_open = false;
                    continue;
                };
                if is_quit(&line) {
                    break;
                }
                match controller.handle_input(&line) {
                    Some(AdvanceOutcome::Started) => draw(&controller),
                    Some(outcome) => debug!("Input had no effect: {:?}", outcome),
                    None => debug!("Unrecognised input {:?}", line),
                }
            }
            Some(event) = controller.next_event() => {
                if controller.handle_event(event) {
                    draw(&controller);
                }
            }
        }
    }

    controller.shutdown();
    Ok(())
}

/// Leave once input is exhausted and the fetch has settled
fn should_exit(stdin_open: bool, state: &AppState) -> bool {
    !stdin_open && !matches!(state, AppState::Idle | AppState::Loading)
}

fn is_quit(input: &str) -> bool {
    matches!(input.trim(), "q" | "Q" | "quit" | "exit")
}

/// Redraw the whole screen
fn draw(controller: &AppController) {
    let screen = controller.screen();
    // The failure notification is already on stderr; keep it on screen
    if clears_before_draw(&screen) && std::io::stdout().is_terminal() {
        print!("\x1B[2J\x1B[H");
    }
    print!("{}", screen);
    println!("{}", "[q] quit".dimmed());
}

fn clears_before_draw(screen: &Screen<'_>) -> bool {
    !matches!(screen, Screen::Failed)
}
