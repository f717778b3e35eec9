use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Instant;

use clap::Parser;
use grid_snake::config::{
    BorderMode, FINAL_RENDER_DELAY, GameConfig, INPUT_POLL_INTERVAL, SESSION_RESET_DELAY,
    Settings, load_settings, save_settings, settings_path,
};
use grid_snake::error::AppError;
use grid_snake::game::{GamePhase, GameState};
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::renderer::{self, Overlay};
use grid_snake::scheduler::TickScheduler;
use grid_snake::terminal_runtime::TerminalSession;
use grid_snake::ui::end_screen::EndScreen;
use grid_snake::ui::menu::terminal_message;
use tracing::{Level, info, warn};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Tiles per board edge; even values are bumped to the next odd one.
    #[arg(long, value_name = "TILES")]
    board_size: Option<u16>,
    /// Speed level from 1 (slow) to 14 (fast).
    #[arg(long)]
    speed: Option<u8>,
    /// Re-enter on the opposite edge instead of losing at the border.
    #[arg(long, conflicts_with = "bounded")]
    wrap: bool,
    /// Lose when the snake leaves the board.
    #[arg(long)]
    bounded: bool,
    /// Settings file to load and save instead of the default location.
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,
    /// Write diagnostic logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(board_size) = self.board_size {
            settings.board_size = board_size;
        }
        if let Some(speed) = self.speed {
            settings.speed = speed;
        }
        if self.wrap {
            settings.border_mode = BorderMode::Wrap;
        }
        if self.bounded {
            settings.border_mode = BorderMode::Bounded;
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let path = cli.settings.clone().unwrap_or_else(settings_path);
    let mut settings = load_settings(&path)?;
    cli.apply_overrides(&mut settings);

    // Reject bad settings before the terminal switches to raw mode.
    let config = settings.to_config()?;

    let mut app = App::new(settings, path, config);
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new(INPUT_POLL_INTERVAL);

    loop {
        let now = Instant::now();
        session.draw(|frame| renderer::render(frame, &app.state, app.overlay(now)))?;

        if let Some(game_input) = input.poll_input()? {
            if game_input == GameInput::Quit {
                break;
            }

            app.handle_input(game_input, Instant::now());
        }

        app.advance(Instant::now());
    }

    Ok(())
}

fn init_logging(path: &Path) -> Result<(), AppError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .init();

    Ok(())
}

/// Front-end session: settings, the running simulation and its clocks.
struct App {
    settings: Settings,
    saved_settings: Settings,
    settings_path: PathBuf,
    state: GameState,
    scheduler: TickScheduler,
    end_screen: Option<EndScreen>,
}

impl App {
    fn new(settings: Settings, settings_path: PathBuf, config: GameConfig) -> Self {
        Self {
            settings,
            saved_settings: settings,
            settings_path,
            state: GameState::new(config),
            scheduler: TickScheduler::new(config.tick_period),
            end_screen: None,
        }
    }

    fn overlay(&self, now: Instant) -> Overlay<'_> {
        if let Some(end_screen) = &self.end_screen {
            return end_screen
                .visible_message(now)
                .map_or(Overlay::None, Overlay::Terminal);
        }

        match self.state.phase() {
            GamePhase::Setup => Overlay::Setup(&self.settings),
            _ => Overlay::None,
        }
    }

    fn handle_input(&mut self, input: GameInput, now: Instant) {
        match self.state.phase() {
            GamePhase::Setup => self.handle_setup_input(input, now),
            GamePhase::Running => {
                if let GameInput::Direction(direction) = input {
                    self.state.request_direction(direction);
                }
            }
            GamePhase::Won | GamePhase::Lost => {}
        }
    }

    fn handle_setup_input(&mut self, input: GameInput, now: Instant) {
        match input {
            GameInput::Start => self.start(now),
            GameInput::BoardSizeUp => self.edit_settings(|s| s.step_board_size(1)),
            GameInput::BoardSizeDown => self.edit_settings(|s| s.step_board_size(-1)),
            GameInput::SpeedUp => self.edit_settings(|s| s.step_speed(1)),
            GameInput::SpeedDown => self.edit_settings(|s| s.step_speed(-1)),
            GameInput::ToggleBorder => self.edit_settings(Settings::toggle_border_mode),
            GameInput::Direction(_) | GameInput::Quit => {}
        }
    }

    fn edit_settings(&mut self, edit: impl FnOnce(&mut Settings)) {
        let mut edited = self.settings;
        edit(&mut edited);

        match edited.to_config() {
            Ok(config) => {
                self.settings = edited;
                self.reset(config);
            }
            Err(error) => warn!(%error, "settings edit rejected"),
        }
    }

    fn start(&mut self, now: Instant) {
        if self.settings != self.saved_settings {
            match save_settings(&self.settings_path, &self.settings) {
                Ok(()) => self.saved_settings = self.settings,
                Err(error) => warn!(%error, "failed to save settings"),
            }
        }

        self.state.start();
        self.scheduler.start(now);
    }

    /// Runs a due tick and drives the end screen towards the next session.
    fn advance(&mut self, now: Instant) {
        if self.scheduler.is_due(now) {
            let outcome = self.state.tick();
            self.scheduler.mark_ticked(now);

            if outcome.is_terminal() {
                self.scheduler.stop();
                if let Some(message) = terminal_message(self.state.phase()) {
                    self.end_screen = Some(EndScreen::new(
                        now,
                        message,
                        FINAL_RENDER_DELAY,
                        SESSION_RESET_DELAY,
                    ));
                }
            }
        }

        if self
            .end_screen
            .is_some_and(|end_screen| end_screen.should_reset(now))
        {
            info!("returning to setup");
            let config = *self.state.config();
            self.reset(config);
        }
    }

    fn reset(&mut self, config: GameConfig) {
        self.state = GameState::new(config);
        self.scheduler = TickScheduler::new(config.tick_period);
        self.end_screen = None;
    }
}
