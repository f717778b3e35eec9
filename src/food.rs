use rand::Rng;

use crate::board::{Board, Tile};
use crate::snake::Snake;

/// Picks a uniformly random tile the snake does not occupy.
///
/// Samples the whole board and retries on occupied tiles. Returns `None`
/// when the snake already covers every tile, so the loop always has a free
/// tile to find.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, board: Board, snake: &Snake) -> Option<Tile> {
    if snake.len() >= board.total_tiles() {
        return None;
    }

    let side = i32::from(board.side());
    loop {
        let candidate = Tile::new(rng.gen_range(0..side), rng.gen_range(0..side));
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }
}
