use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::board::{Board, MAX_BOARD_SIDE, MIN_BOARD_SIDE};

const APP_DIR_NAME: &str = "grid-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Default number of tiles along one board edge.
pub const DEFAULT_BOARD_SIDE: u16 = 15;

/// Default speed level shown on the setup screen.
pub const DEFAULT_SPEED: u8 = 5;

/// Slowest selectable speed level.
pub const MIN_SPEED: u8 = 1;

/// Fastest selectable speed level; one more would yield a zero tick period.
pub const MAX_SPEED: u8 = 14;

/// Score a session starts with.
pub const DEFAULT_STARTING_SCORE: u32 = 2000;

/// Score granted per food eaten.
pub const DEFAULT_FOOD_BONUS: u32 = 1000;

/// Delay between a terminal transition and the end-of-game message.
pub const FINAL_RENDER_DELAY: Duration = Duration::from_millis(200);

/// Delay between a terminal transition and the fresh setup screen.
pub const SESSION_RESET_DELAY: Duration = Duration::from_millis(2000);

/// Input poll timeout of the front-end loop.
pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(5);

const SPEED_PERIOD_BASE: u64 = 15;
const SPEED_PERIOD_STEP_MS: u64 = 10;

/// Rejected game configuration.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("board size {side} is too small; the minimum is {min}")]
    BoardTooSmall { side: u16, min: u16 },
    #[error("board size {side} is too large; the maximum is {max}")]
    BoardTooLarge { side: u16, max: u16 },
    #[error("tick period must be positive")]
    NonPositiveTickPeriod,
    #[error("speed {speed} is outside {min}..={max}")]
    SpeedOutOfRange { speed: u8, min: u8, max: u8 },
}

/// Failure to read or write the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot access settings file {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("settings file {} is malformed: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// How moving off an edge is handled.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderMode {
    /// Leaving the board ends the game.
    #[default]
    Bounded,
    /// Leaving the board re-enters on the opposite edge.
    Wrap,
}

impl BorderMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Bounded => Self::Wrap,
            Self::Wrap => Self::Bounded,
        }
    }
}

/// Starting score and per-food bonus.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ScoreRules {
    pub starting_score: u32,
    pub food_bonus: u32,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            starting_score: DEFAULT_STARTING_SCORE,
            food_bonus: DEFAULT_FOOD_BONUS,
        }
    }
}

/// Validated configuration for one session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub board: Board,
    pub tick_period: Duration,
    pub border_mode: BorderMode,
    pub score_rules: ScoreRules,
}

impl GameConfig {
    /// Validates raw values into a session configuration.
    ///
    /// Even board sides are bumped to the next odd side so a centered start
    /// tile exists.
    pub fn new(
        board_side: u16,
        tick_period: Duration,
        border_mode: BorderMode,
        score_rules: ScoreRules,
    ) -> Result<Self, ConfigError> {
        if tick_period.is_zero() {
            return Err(ConfigError::NonPositiveTickPeriod);
        }

        let side = if board_side % 2 == 0 {
            let odd = board_side.saturating_add(1);
            warn!(requested = board_side, adjusted = odd, "board size must be odd");
            odd
        } else {
            board_side
        };

        Ok(Self {
            board: Board::new(side)?,
            tick_period,
            border_mode,
            score_rules,
        })
    }
}

/// Returns the tick period for a setup-screen speed level.
///
/// Higher levels tick faster; levels past [`MAX_SPEED`] would stop the clock.
pub fn tick_period_for_speed(speed: u8) -> Result<Duration, ConfigError> {
    if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
        return Err(ConfigError::SpeedOutOfRange {
            speed,
            min: MIN_SPEED,
            max: MAX_SPEED,
        });
    }

    let millis = (SPEED_PERIOD_BASE - u64::from(speed)) * SPEED_PERIOD_STEP_MS;
    Ok(Duration::from_millis(millis))
}

/// User-facing settings as stored on disk and edited on the setup screen.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub board_size: u16,
    pub speed: u8,
    pub border_mode: BorderMode,
    pub starting_score: u32,
    pub food_bonus: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIDE,
            speed: DEFAULT_SPEED,
            border_mode: BorderMode::Bounded,
            starting_score: DEFAULT_STARTING_SCORE,
            food_bonus: DEFAULT_FOOD_BONUS,
        }
    }
}

impl Settings {
    /// Validates these settings into a session configuration.
    pub fn to_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(
            self.board_size,
            tick_period_for_speed(self.speed)?,
            self.border_mode,
            ScoreRules {
                starting_score: self.starting_score,
                food_bonus: self.food_bonus,
            },
        )
    }

    /// Steps the board size by whole odd sizes, staying in the valid range.
    pub fn step_board_size(&mut self, steps: i16) {
        let current = i32::from(self.board_size | 1);
        let stepped = (current + 2 * i32::from(steps))
            .clamp(i32::from(MIN_BOARD_SIDE), i32::from(MAX_BOARD_SIDE));
        self.board_size = u16::try_from(stepped).unwrap_or(DEFAULT_BOARD_SIDE);
    }

    /// Steps the speed level, staying in the valid range.
    pub fn step_speed(&mut self, steps: i8) {
        self.speed = self
            .speed
            .saturating_add_signed(steps)
            .clamp(MIN_SPEED, MAX_SPEED);
    }

    pub fn toggle_border_mode(&mut self) {
        self.border_mode = self.border_mode.toggled();
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads settings from `path`.
///
/// Returns the defaults when the file does not exist yet. Returns `Err` when
/// the file exists but cannot be read or parsed, so the caller can report it
/// before entering raw terminal mode.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&raw).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Saves settings to `path`, creating parent directories when needed.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    let io_error = |source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let json = serde_json::to_string_pretty(settings).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, json).map_err(io_error)
}
