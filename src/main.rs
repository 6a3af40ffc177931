use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{backend::TermionBackend, Terminal};
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use linequill::config::Config;
use linequill::editor::LineBuffer;
use linequill::input::{InputHandler, Key};
use linequill::scheme::{KeyScheme, SchemeKind};
use linequill::theme::get_builtin_theme;
use linequill::ui::UI;

/// linequill - a single-line editor with Emacs and Vim key schemes
#[derive(Parser)]
#[command(name = "linequill")]
#[command(version)]
#[command(about = "A single-line editor with Emacs and Vim key schemes", long_about = None)]
struct Cli {
    /// Initial text to edit
    text: Option<String>,

    /// Key scheme (overrides config)
    #[arg(short, long, value_enum)]
    scheme: Option<SchemeKind>,

    /// Theme name (overrides config)
    #[arg(short, long)]
    theme: Option<String>,

    /// Config file to use instead of ~/.config/linequill/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write diagnostics to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// How an editing session ended.
enum Outcome {
    Submitted(String),
    Cancelled,
}

/// Set up a panic hook that restores the terminal before displaying panic information.
fn setup_panic_hook() {
    use std::panic;

    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Use stderr to avoid interfering with stdout pipes
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

/// Installs a file-backed tracing subscriber. The terminal owns stdout, so
/// without a log file nothing is installed.
fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("linequill=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    // CLI flags override the config file
    if let Some(scheme) = cli.scheme {
        config.scheme = scheme;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if cli.log_file.is_some() {
        config.log_file = cli.log_file;
    }

    init_logging(config.log_file.as_ref())?;
    info!(scheme = %config.scheme, theme = %config.theme, "starting linequill");

    let theme = match get_builtin_theme(&config.theme) {
        Some(theme) => theme,
        None => {
            warn!(theme = %config.theme, "theme not found, using default-dark");
            get_builtin_theme("default-dark").context("Built-in theme default-dark missing")?
        }
    };
    let ui = UI::new(theme, config.prompt.clone());

    let mut buffer = match &cli.text {
        Some(text) => LineBuffer::with_text(text, config.undo_limit),
        None => LineBuffer::new(config.undo_limit),
    };
    let mut scheme = config.build_scheme();

    let mut input_handler = if io::stdin().is_terminal() {
        InputHandler::new()
    } else {
        InputHandler::new_with_tty()?
    };

    let outcome = {
        let stdout = io::stdout()
            .into_raw_mode()
            .context("Failed to enable raw mode")?;
        let stdout = stdout
            .into_alternate_screen()
            .context("Failed to enter alternate screen")?;

        let backend = TermionBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = run_event_loop(
            &mut terminal,
            &ui,
            &mut input_handler,
            &mut buffer,
            scheme.as_mut(),
        );

        write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
        terminal.backend_mut().flush()?;
        result?
        // Raw mode and the alternate screen are restored when `terminal` drops here
    };

    match outcome {
        Outcome::Submitted(text) => {
            info!(len = text.len(), "submitted");
            println!("{}", text);
        }
        Outcome::Cancelled => info!("cancelled"),
    }

    Ok(())
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &UI,
    input_handler: &mut InputHandler,
    buffer: &mut LineBuffer,
    scheme: &mut dyn KeyScheme,
) -> Result<Outcome> {
    loop {
        ui.render(terminal, buffer, scheme)?;

        let Some(raw) = input_handler.next_key()? else {
            return Ok(Outcome::Cancelled);
        };

        let event = scheme.handle_key(buffer, &raw);
        debug!(?raw, ?event, cursor = buffer.cursor(), "key handled");

        if event.submit {
            return Ok(Outcome::Submitted(buffer.text()));
        }
        if event.cancel {
            return Ok(Outcome::Cancelled);
        }
        if !event.consumed && Key::parse(&raw) == Key::Ctrl(b'c') {
            return Ok(Outcome::Cancelled);
        }
    }
}
