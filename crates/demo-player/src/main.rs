use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::path::PathBuf;
use std::sync::Arc;
use std::{io, time::Duration};

use demo_player::config::EnvConfig;
use demo_player::constants::POLL_INTERVAL_MS;
use demo_player::handlers::InputHandler;
use demo_player::ui::UI;
use demo_player::{headless, logger, App, AppSettings};
use replay_core::TokioClock;

#[derive(Parser, Debug)]
#[clap(name = "rpc-demo")]
#[clap(about = "Replays a scripted Python XML-RPC client/server walkthrough", long_about = None)]
struct Cli {
    /// Settings file (JSON)
    #[clap(long, global = true)]
    settings: Option<PathBuf>,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive terminal UI (default)
    Tui,
    /// Replay the demonstration to stdout
    Play {
        /// Playback speed multiplier
        #[clap(long)]
        speed: Option<f64>,
        /// Replay script to use instead of the built-in one
        #[clap(long)]
        script: Option<PathBuf>,
    },
    /// List the bundled project files
    Files,
    /// Print one project file
    Show { name: String },
    /// Save every project file to a directory
    Save { dir: Option<PathBuf> },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let env = EnvConfig::load();
    let settings = AppSettings::load(cli.settings.as_deref(), &env)?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => run_tui(settings).await,
        Command::Play { speed, script } => {
            logger::init_stderr_logging()?;
            headless::play(&settings, script, speed).await.map(|_| ())
        }
        Command::Files => headless::list_files(&mut io::stdout()),
        Command::Show { name } => headless::show_file(&name, &mut io::stdout()),
        Command::Save { dir } => {
            logger::init_stderr_logging()?;
            headless::save_files(&settings, dir).await
        }
    }
}

async fn run_tui(settings: AppSettings) -> Result<()> {
    let log_file = logger::init_file_logging(&settings.log_dir)?;
    let mut app = App::new(settings, Arc::new(TokioClock::new()))?;

    let mut terminal = setup_terminal()?;
    let result = run_application(&mut terminal, &mut app).await;
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "application error");
        eprintln!("Error: {e:#} (log: {})", log_file.display());
    }
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_application<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick();

        terminal.draw(|frame| UI::draw(frame, app))?;

        if should_quit(app).await? {
            break;
        }
    }
    Ok(())
}

async fn should_quit(app: &mut App) -> Result<bool> {
    if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
        if let Event::Key(key) = event::read()? {
            return InputHandler::handle_key(app, key).await;
        }
    }
    Ok(false)
}
