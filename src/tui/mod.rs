//! Terminal UI: human versus the random computer.

mod ui;

use crate::config::GameConfig;
use crate::controller::{Control, TurnController};
use crate::input::{KeyAction, cell_id, interpret_key};
use crate::players::{HumanAgent, Player, RandomAgent};
use crate::table::GameTable;
use crate::view::SharedScreen;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_rules::Position;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

/// Runs the interactive game until the user quits.
pub async fn run_tui(config: GameConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,noughts=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting noughts TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Wires the engine to the terminal and pumps input until quit.
#[instrument(skip_all)]
async fn run_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &GameConfig,
) -> Result<()> {
    let (cell_tx, cell_rx) = mpsc::unbounded_channel();
    let (control_tx, control_rx) = mpsc::unbounded_channel();
    let screen = SharedScreen::default();

    let human = Player::new(
        *config.human_mark(),
        config.human_name(),
        HumanAgent::new(cell_rx),
    );
    let computer = Player::new(
        *config.computer_mark(),
        config.computer_name(),
        RandomAgent::new(config.thinking_delay(), *config.seed()),
    );
    let mut controller = TurnController::new(GameTable::new(), human, computer, screen.clone());
    let engine = tokio::spawn(async move { controller.run(control_rx).await });

    let mut cursor = Position::Center;
    let mut area = Rect::default();

    loop {
        let snapshot = screen.snapshot();
        let status = match snapshot.result() {
            Some(result) => format!("{result}  Press 'r' to play again."),
            None => format!(
                "You are {}. {} plays {}.",
                config.human_mark(),
                config.computer_name(),
                config.computer_mark()
            ),
        };
        terminal.draw(|frame| {
            area = frame.area();
            ui::draw(frame, &snapshot, cursor, &status);
        })?;

        if engine.is_finished() {
            warn!("Game engine stopped unexpectedly");
            break;
        }

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }

        let pick = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match interpret_key(key.code, cursor) {
                    KeyAction::Pick(id) => Some(id),
                    KeyAction::Cursor(pos) => {
                        cursor = pos;
                        None
                    }
                    KeyAction::Reset => {
                        info!("Reset requested");
                        control_tx.send(Control::Reset)?;
                        None
                    }
                    KeyAction::Quit => {
                        info!("User quit");
                        control_tx.send(Control::Quit)?;
                        break;
                    }
                    KeyAction::Ignore => None,
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                ui::cell_at(area, mouse.column, mouse.row).map(|pos| {
                    cursor = pos;
                    cell_id(pos)
                })
            }
            _ => None,
        };

        if let Some(id) = pick {
            debug!(id = %id, "Cell picked");
            if cell_tx.send(id).is_err() {
                warn!("Human player no longer listening");
            }
        }
    }

    drop(control_tx);
    engine.await.context("Game engine panicked")?
}
