use std::collections::HashSet;

use crate::board::{Board, Tile};
use crate::config::BorderMode;
use crate::input::Direction;

/// Ordered body tiles, head first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: Vec<Tile>,
}

impl Snake {
    /// Creates the two-tile starting snake: head on `head`, tail to its left.
    #[must_use]
    pub fn new(head: Tile) -> Self {
        Self {
            body: vec![head, head.offset(Direction::Left.unit_vector())],
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Returns `None` for an empty segment list.
    #[must_use]
    pub fn from_segments(segments: Vec<Tile>) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self { body: segments })
    }

    /// Returns where the head would land moving one tile in `direction`.
    ///
    /// In bounded mode the result may lie off the board so the border check
    /// can see it.
    #[must_use]
    pub fn peek_next_head(&self, direction: Direction, board: Board, border: BorderMode) -> Tile {
        let next = self.head().offset(direction.unit_vector());
        match border {
            BorderMode::Wrap => board.wrap(next),
            BorderMode::Bounded => next,
        }
    }

    /// Moves the head onto `next_head`.
    ///
    /// Growing keeps the tail in place; otherwise every segment takes the
    /// place of the one in front of it.
    pub fn advance(&mut self, next_head: Tile, grow: bool) {
        if grow {
            self.body.insert(0, next_head);
            return;
        }

        for index in (1..self.body.len()).rev() {
            self.body[index] = self.body[index - 1];
        }
        self.body[0] = next_head;
    }

    /// Returns true if any two segments share a tile.
    #[must_use]
    pub fn contains_duplicate(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.body.len());
        !self.body.iter().all(|segment| seen.insert(*segment))
    }

    /// Returns true if any segment occupies `tile`.
    #[must_use]
    pub fn occupies(&self, tile: Tile) -> bool {
        self.body.contains(&tile)
    }

    /// Returns the current head tile.
    #[must_use]
    pub fn head(&self) -> Tile {
        self.body[0]
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake has at least its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Tile> {
        self.body.iter()
    }
}
