use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument};

use crate::board::{Board, Tile};
use crate::collision::{head_on_food, head_out_of_bounds, self_collision};
use crate::config::{BorderMode, GameConfig};
use crate::food::place_food;
use crate::input::{Direction, DirectionController};
use crate::snake::Snake;

/// Heading the snake starts a session with.
pub const START_DIRECTION: Direction = Direction::Up;

/// Lifecycle phase of one session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GamePhase {
    Setup,
    Running,
    Won,
    Lost,
}

impl GamePhase {
    /// Returns true for the phases that end a session.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What ended a lost session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LossCause {
    Border,
    SelfCollision,
}

/// Result of one [`GameState::tick`] call.
///
/// `Won` and `Lost` are reported once, on the tick that ends the session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// Nothing happened; the session is not running.
    Idle,
    Moved,
    Ate,
    Won,
    Lost(LossCause),
}

impl TickOutcome {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost(_))
    }
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Option<Tile>,
    pub score: u32,
    pub tick_count: u64,
    pub loss_cause: Option<LossCause>,
    phase: GamePhase,
    direction: DirectionController,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Creates a session in the setup phase with an entropy-seeded RNG.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        Self {
            snake: Snake::new(config.board.center()),
            food: None,
            score: config.score_rules.starting_score,
            tick_count: 0,
            loss_cause: None,
            phase: GamePhase::Setup,
            direction: DirectionController::new(START_DIRECTION),
            config,
            rng,
        }
    }

    /// Leaves setup and places the first food. Has no effect in other phases.
    pub fn start(&mut self) {
        if self.phase != GamePhase::Setup {
            return;
        }

        self.food = place_food(&mut self.rng, self.config.board, &self.snake);
        self.phase = GamePhase::Running;
        info!(
            board = self.config.board.side(),
            border = ?self.config.border_mode,
            "game started"
        );
    }

    /// Forwards a steering request; returns whether it was accepted.
    ///
    /// Ignored outside the running phase.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }

        self.direction.request_change(direction)
    }

    /// Overrides the heading without the reversal and lock checks.
    ///
    /// For arranging scenarios; play goes through [`Self::request_direction`].
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = DirectionController::new(direction);
    }

    /// Advances simulation by one gameplay tick.
    #[instrument(level = "trace", skip_all, fields(tick = self.tick_count))]
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != GamePhase::Running {
            return TickOutcome::Idle;
        }

        self.tick_count += 1;
        let board = self.config.board;

        let direction = self.direction.resolve();
        let next_head = self
            .snake
            .peek_next_head(direction, board, self.config.border_mode);

        let grow = head_on_food(next_head, self.food);
        if grow {
            self.score = self.score.saturating_add(self.config.score_rules.food_bonus);
        }

        self.snake.advance(next_head, grow);
        if grow {
            self.food = place_food(&mut self.rng, board, &self.snake);
            debug!(score = self.score, length = self.snake.len(), "food eaten");
        }

        if self.config.border_mode == BorderMode::Bounded && head_out_of_bounds(next_head, board) {
            return self.lose(LossCause::Border);
        }

        if self_collision(&self.snake) {
            return self.lose(LossCause::SelfCollision);
        }

        if self.snake.len() == board.total_tiles() {
            self.phase = GamePhase::Won;
            info!(score = self.score, ticks = self.tick_count, "board filled");
            return TickOutcome::Won;
        }

        if grow {
            TickOutcome::Ate
        } else {
            TickOutcome::Moved
        }
    }

    fn lose(&mut self, cause: LossCause) -> TickOutcome {
        self.phase = GamePhase::Lost;
        self.loss_cause = Some(cause);
        info!(?cause, score = self.score, ticks = self.tick_count, "game lost");
        TickOutcome::Lost(cause)
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the heading the next tick will use.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction.current()
    }

    #[must_use]
    pub fn board(&self) -> Board {
        self.config.board
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::board::Tile;
    use crate::config::{BorderMode, GameConfig, ScoreRules};
    use crate::input::Direction;
    use crate::snake::Snake;

    use super::{GamePhase, GameState, LossCause, TickOutcome};

    fn running_state(side: u16, border_mode: BorderMode, seed: u64) -> GameState {
        let config = GameConfig::new(
            side,
            Duration::from_millis(100),
            border_mode,
            ScoreRules::default(),
        )
        .expect("valid config");
        let mut state = GameState::new_with_seed(config, seed);
        state.start();
        state
    }

    fn segments(state: &GameState) -> Vec<Tile> {
        state.snake.segments().copied().collect()
    }

    #[test]
    fn new_session_waits_in_setup() {
        let config = GameConfig::new(
            5,
            Duration::from_millis(100),
            BorderMode::Bounded,
            ScoreRules::default(),
        )
        .expect("valid config");
        let mut state = GameState::new_with_seed(config, 1);

        assert_eq!(state.phase(), GamePhase::Setup);
        assert_eq!(state.food, None);
        assert_eq!(state.score, 2000);
        assert_eq!(segments(&state), vec![Tile::new(2, 2), Tile::new(1, 2)]);
        assert_eq!(state.tick(), TickOutcome::Idle);
        assert!(!state.request_direction(Direction::Left));
    }

    #[test]
    fn start_places_food_off_the_snake() {
        let state = running_state(5, BorderMode::Bounded, 2);

        assert_eq!(state.phase(), GamePhase::Running);
        let food = state.food.expect("food placed on start");
        assert!(!state.snake.occupies(food));
    }

    #[test]
    fn one_tick_moves_the_head_up() {
        let mut state = running_state(5, BorderMode::Bounded, 3);
        state.food = Some(Tile::new(0, 0));

        assert_eq!(state.tick(), TickOutcome::Moved);

        assert_eq!(segments(&state), vec![Tile::new(2, 1), Tile::new(2, 2)]);
        assert_eq!(state.score, 2000);
    }

    #[test]
    fn eating_food_grows_scores_and_relocates_food() {
        let mut state = running_state(5, BorderMode::Bounded, 4);
        state.food = Some(Tile::new(2, 1));

        assert_eq!(state.tick(), TickOutcome::Ate);

        assert_eq!(state.score, 3000);
        assert_eq!(state.snake.len(), 3);
        let food = state.food.expect("food relocated");
        assert_ne!(food, Tile::new(2, 1));
        assert!(!state.snake.occupies(food));
    }

    #[test]
    fn bounded_border_ends_the_game() {
        let mut state = running_state(5, BorderMode::Bounded, 5);
        state.snake = Snake::new(Tile::new(4, 2));
        state.food = Some(Tile::new(0, 0));
        state.set_direction(Direction::Right);

        assert_eq!(state.tick(), TickOutcome::Lost(LossCause::Border));
        assert_eq!(state.phase(), GamePhase::Lost);
        assert_eq!(state.loss_cause, Some(LossCause::Border));

        let snapshot = segments(&state);
        assert_eq!(state.tick(), TickOutcome::Idle);
        assert_eq!(segments(&state), snapshot);
    }

    #[test]
    fn wrap_border_teleports_and_keeps_running() {
        let mut state = running_state(5, BorderMode::Wrap, 6);
        state.snake = Snake::new(Tile::new(4, 2));
        state.food = Some(Tile::new(0, 0));
        state.set_direction(Direction::Right);

        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_eq!(state.snake.head(), Tile::new(0, 2));
        assert_eq!(state.phase(), GamePhase::Running);
    }

    #[test]
    fn running_into_the_body_ends_the_game() {
        let mut state = running_state(6, BorderMode::Bounded, 7);
        state.snake = Snake::from_segments(vec![
            Tile::new(2, 2),
            Tile::new(3, 2),
            Tile::new(3, 3),
            Tile::new(2, 3),
            Tile::new(1, 3),
            Tile::new(1, 2),
        ])
        .expect("non-empty");
        state.food = Some(Tile::new(0, 0));
        state.set_direction(Direction::Down);

        assert_eq!(state.tick(), TickOutcome::Lost(LossCause::SelfCollision));
        assert_eq!(state.phase(), GamePhase::Lost);
    }

    #[test]
    fn reversal_request_is_ignored_during_play() {
        let mut state = running_state(5, BorderMode::Bounded, 8);
        state.food = Some(Tile::new(0, 0));

        assert!(!state.request_direction(Direction::Down));
        assert_eq!(state.direction(), Direction::Up);
        state.tick();

        assert_eq!(state.snake.head(), Tile::new(2, 1));
    }

    #[test]
    fn second_request_in_one_tick_is_ignored() {
        let mut state = running_state(7, BorderMode::Bounded, 9);
        state.food = Some(Tile::new(0, 0));

        assert!(state.request_direction(Direction::Left));
        assert!(!state.request_direction(Direction::Down));
        assert_eq!(state.direction(), Direction::Left);
        state.tick();

        assert_eq!(state.snake.head(), Tile::new(2, 3));
        assert!(state.request_direction(Direction::Down));
        assert_eq!(state.direction(), Direction::Down);
    }

    #[test]
    fn direction_lock_clears_after_eating() {
        let mut state = running_state(7, BorderMode::Bounded, 12);
        state.food = Some(Tile::new(3, 2));

        assert!(state.request_direction(Direction::Up));
        assert_eq!(state.tick(), TickOutcome::Ate);
        state.food = Some(Tile::new(0, 6));

        assert!(state.request_direction(Direction::Left));
        assert_eq!(state.direction(), Direction::Left);
        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_eq!(state.snake.head(), Tile::new(2, 2));
    }

    #[test]
    fn score_saturates_instead_of_overflowing() {
        let rules = ScoreRules {
            starting_score: u32::MAX - 500,
            food_bonus: 1000,
        };
        let config = GameConfig::new(5, Duration::from_millis(100), BorderMode::Bounded, rules)
            .expect("valid config");
        let mut state = GameState::new_with_seed(config, 13);
        state.start();
        state.food = Some(Tile::new(2, 1));

        assert_eq!(state.tick(), TickOutcome::Ate);
        assert_eq!(state.score, u32::MAX);

        state.food = Some(Tile::new(2, 0));
        assert_eq!(state.tick(), TickOutcome::Ate);
        assert_eq!(state.score, u32::MAX);
    }

    #[test]
    fn filling_the_board_wins_exactly_at_full_length() {
        let mut state = running_state(3, BorderMode::Bounded, 10);
        // Serpentine covering all but (2,0); head at (1,0) heading right.
        state.snake = Snake::from_segments(vec![
            Tile::new(1, 0),
            Tile::new(0, 0),
            Tile::new(0, 1),
            Tile::new(1, 1),
            Tile::new(2, 1),
            Tile::new(2, 2),
            Tile::new(1, 2),
            Tile::new(0, 2),
        ])
        .expect("non-empty");
        state.food = Some(Tile::new(2, 0));
        state.set_direction(Direction::Right);

        assert_eq!(state.tick(), TickOutcome::Won);
        assert_eq!(state.phase(), GamePhase::Won);
        assert_eq!(state.snake.len(), 9);
        assert_eq!(state.food, None);
        assert_eq!(state.tick(), TickOutcome::Idle);
    }

    #[test]
    fn start_after_terminal_phase_is_ignored() {
        let mut state = running_state(5, BorderMode::Bounded, 11);
        state.snake = Snake::new(Tile::new(4, 2));
        state.set_direction(Direction::Right);
        state.tick();

        state.start();

        assert_eq!(state.phase(), GamePhase::Lost);
    }
}
