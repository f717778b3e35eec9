use crate::config::ConfigError;

/// Smallest accepted board side; a centered two-tile snake needs three columns.
pub const MIN_BOARD_SIDE: u16 = 3;

/// Largest board side the terminal renderer can lay out.
pub const MAX_BOARD_SIDE: u16 = 99;

/// One board cell in logical tile coordinates.
///
/// Coordinates are signed so a head that left a bounded board can be
/// represented long enough for the border check to flag it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
}

impl Tile {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this tile shifted by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Fixed square playing field.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Board {
    side: u16,
}

impl Board {
    /// Creates a board with `side` tiles per edge.
    ///
    /// Rejects sides below [`MIN_BOARD_SIDE`] and above [`MAX_BOARD_SIDE`].
    /// Even sides are accepted here; evening out to an odd side is a
    /// settings concern handled by [`crate::config::GameConfig::new`].
    pub fn new(side: u16) -> Result<Self, ConfigError> {
        if side < MIN_BOARD_SIDE {
            return Err(ConfigError::BoardTooSmall {
                side,
                min: MIN_BOARD_SIDE,
            });
        }
        if side > MAX_BOARD_SIDE {
            return Err(ConfigError::BoardTooLarge {
                side,
                max: MAX_BOARD_SIDE,
            });
        }

        Ok(Self { side })
    }

    /// Number of tiles along one edge.
    #[must_use]
    pub fn side(self) -> u16 {
        self.side
    }

    /// Returns the total number of tiles on the board.
    #[must_use]
    pub fn total_tiles(self) -> usize {
        usize::from(self.side) * usize::from(self.side)
    }

    /// Returns the tile the snake's head starts on.
    #[must_use]
    pub fn center(self) -> Tile {
        let middle = i32::from(self.side / 2);
        Tile::new(middle, middle)
    }

    /// Returns true when the tile lies on the board.
    #[must_use]
    pub fn is_inside(self, tile: Tile) -> bool {
        let side = i32::from(self.side);
        (0..side).contains(&tile.x) && (0..side).contains(&tile.y)
    }

    /// Returns the tile wrapped onto the board on both axes.
    #[must_use]
    pub fn wrap(self, tile: Tile) -> Tile {
        let side = i32::from(self.side);
        Tile {
            x: wrap_axis(tile.x, side),
            y: wrap_axis(tile.y, side),
        }
    }

    /// Iterates over every tile, row by row.
    pub fn tiles(self) -> impl Iterator<Item = Tile> {
        let side = i32::from(self.side);
        (0..side).flat_map(move |y| (0..side).map(move |x| Tile::new(x, y)))
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    value.rem_euclid(upper_bound)
}
