//! Per-tick collision predicates. Each check is pure; the game state decides
//! what a hit means.

use crate::board::{Board, Tile};
use crate::snake::Snake;

/// Returns true when the head lands exactly on the food.
#[must_use]
pub fn head_on_food(head: Tile, food: Option<Tile>) -> bool {
    food == Some(head)
}

/// Returns true when the head has left the board.
#[must_use]
pub fn head_out_of_bounds(head: Tile, board: Board) -> bool {
    !board.is_inside(head)
}

/// Returns true when the snake overlaps itself anywhere.
#[must_use]
pub fn self_collision(snake: &Snake) -> bool {
    snake.contains_duplicate()
}
