use std::time::Duration;

use grid_snake::board::Tile;
use grid_snake::config::{BorderMode, GameConfig, ScoreRules, Settings};
use grid_snake::game::{GamePhase, GameState, LossCause, TickOutcome};
use grid_snake::input::Direction;
use grid_snake::snake::Snake;

fn config(side: u16, border_mode: BorderMode) -> GameConfig {
    GameConfig::new(
        side,
        Duration::from_millis(100),
        border_mode,
        ScoreRules::default(),
    )
    .expect("valid config")
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut state = GameState::new_with_seed(config(5, BorderMode::Bounded), 42);
    state.start();
    state.food = Some(Tile::new(2, 1));

    assert_eq!(state.tick(), TickOutcome::Ate);
    assert_eq!(state.score, 3000);
    assert_eq!(state.snake.len(), 3);
    assert_eq!(state.snake.head(), Tile::new(2, 1));

    state.food = Some(Tile::new(4, 4));
    assert!(state.request_direction(Direction::Right));
    assert_eq!(state.tick(), TickOutcome::Moved);
    assert_eq!(state.snake.head(), Tile::new(3, 1));

    assert_eq!(state.tick(), TickOutcome::Moved);
    assert_eq!(state.tick(), TickOutcome::Lost(LossCause::Border));
    assert_eq!(state.phase(), GamePhase::Lost);
    assert_eq!(state.tick(), TickOutcome::Idle);
}

#[test]
fn wrap_mode_survives_the_same_route() {
    let mut state = GameState::new_with_seed(config(5, BorderMode::Wrap), 42);
    state.start();
    state.snake = Snake::new(Tile::new(4, 2));
    state.food = Some(Tile::new(0, 0));
    state.set_direction(Direction::Right);

    assert_eq!(state.tick(), TickOutcome::Moved);
    assert_eq!(state.snake.head(), Tile::new(0, 2));
    assert_eq!(state.phase(), GamePhase::Running);
}

#[test]
fn seeded_sessions_replay_identically() {
    let settings = Settings {
        board_size: 7,
        border_mode: BorderMode::Wrap,
        ..Settings::default()
    };
    let turns = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];

    let play = || {
        let mut state = GameState::new_with_seed(settings.to_config().expect("valid"), 9);
        state.start();
        let mut trace = Vec::new();
        for step in 0..60 {
            if step % 5 == 0 {
                state.request_direction(turns[(step / 5) % turns.len()]);
            }
            trace.push((state.tick(), state.snake.head(), state.food, state.score));
        }
        trace
    };

    assert_eq!(play(), play());
}

#[test]
fn invariants_hold_during_random_play() {
    let turns = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    for seed in 0..20_u64 {
        let mut state = GameState::new_with_seed(config(7, BorderMode::Wrap), seed);
        state.start();
        let board = state.board();
        let mut previous_len = state.snake.len();

        for step in 0..400_u64 {
            state.request_direction(turns[((seed + step * 7) % 4) as usize]);
            let outcome = state.tick();

            if state.phase() == GamePhase::Running {
                let food = state.food.expect("food placed while running");
                assert!(board.is_inside(food));
                assert!(!state.snake.occupies(food));
            }

            assert!(state.snake.len() >= previous_len);
            assert!(state.snake.len() <= board.total_tiles());
            previous_len = state.snake.len();

            if outcome == TickOutcome::Won {
                assert_eq!(state.snake.len(), board.total_tiles());
            }
            if state.phase().is_terminal() {
                break;
            }
        }
    }
}
