use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the one-tile `(dx, dy)` step; y grows downwards.
    #[must_use]
    pub fn unit_vector(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }
}

/// Holds the heading and lets at most one change through per tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DirectionController {
    current: Direction,
    locked: bool,
}

impl DirectionController {
    #[must_use]
    pub fn new(initial: Direction) -> Self {
        Self {
            current: initial,
            locked: false,
        }
    }

    /// Requests a new heading; returns whether it was accepted.
    ///
    /// Rejected when a change was already accepted since the last tick or
    /// when `direction` would reverse the snake into its own neck.
    pub fn request_change(&mut self, direction: Direction) -> bool {
        if self.locked || !direction_change_is_valid(self.current, direction) {
            return false;
        }

        self.current = direction;
        self.locked = true;
        true
    }

    /// Releases the lock at a tick boundary and returns the effective heading.
    pub fn resolve(&mut self) -> Direction {
        self.locked = false;
        self.current
    }

    /// Returns the current heading.
    #[must_use]
    pub fn current(&self) -> Direction {
        self.current
    }

    /// Returns true when a change was accepted since the last tick.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Start,
    Quit,
    BoardSizeUp,
    BoardSizeDown,
    SpeedUp,
    SpeedDown,
    ToggleBorder,
}

/// Maps a movement key (WASD or arrows) to its direction.
#[must_use]
pub fn direction_for_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(Direction::Up),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(Direction::Right),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(Direction::Left),
        _ => None,
    }
}

/// Maps one key press to a game input, if it is bound.
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    if let Some(direction) = direction_for_key(key.code) {
        return Some(GameInput::Direction(direction));
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::Start),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(GameInput::Quit),
        KeyCode::Char('+' | '=') => Some(GameInput::BoardSizeUp),
        KeyCode::Char('-' | '_') => Some(GameInput::BoardSizeDown),
        KeyCode::Char(']') => Some(GameInput::SpeedUp),
        KeyCode::Char('[') => Some(GameInput::SpeedDown),
        KeyCode::Char('b' | 'B') => Some(GameInput::ToggleBorder),
        _ => None,
    }
}

/// Polls the terminal for keyboard input.
#[derive(Debug, Clone, Copy)]
pub struct InputHandler {
    poll_timeout: Duration,
}

impl InputHandler {
    #[must_use]
    pub fn new(poll_timeout: Duration) -> Self {
        Self { poll_timeout }
    }

    /// Waits up to the poll timeout for one bound key press.
    pub fn poll_input(&mut self) -> io::Result<Option<GameInput>> {
        if !event::poll(self.poll_timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key_event(key)),
            _ => Ok(None),
        }
    }
}
