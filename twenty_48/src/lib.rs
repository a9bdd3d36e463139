//! Sliding-tile merge engine for 2048-style games.
//!
//! A [`GameField`] owns the board, the score and the high score. A
//! [`Session`] wraps it in the [`GameState`] machine and talks to the outside
//! world only through [`ActionSource`] and [`Renderer`].
//!
//! ```
//! use twenty_48::{Direction, FieldConfig, GameField};
//!
//! let mut field = GameField::new_from_seed(FieldConfig::default(), 7).unwrap();
//! for d in Direction::ALL {
//!     field.apply_move(d).unwrap();
//! }
//! println!("{}", field.grid());
//! ```

mod config;
mod error;
mod field;
mod grid;
mod machine;
pub mod merge;
mod spawn;
mod tile;
pub mod transform;

use serde::{Deserialize, Serialize};

pub use config::{FieldConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_WIN_VALUE};
pub use error::{Error, Result};
pub use field::{GameField, Snapshot};
pub use grid::{Grid, MIN_SIDE};
pub use machine::{transition, ActionSource, GameState, Renderer, Session};
pub use spawn::spawn;
pub use tile::{Tile, SPAWN_TWO_PROBABILITY};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];
}

/// Everything a player can ask for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Up,
    Left,
    Down,
    Right,
    Restart,
    Exit,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Up,
        Action::Left,
        Action::Down,
        Action::Right,
        Action::Restart,
        Action::Exit,
    ];

    pub fn direction(self) -> Option<Direction> {
        match self {
            Action::Up => Some(Direction::Up),
            Action::Left => Some(Direction::Left),
            Action::Down => Some(Direction::Down),
            Action::Right => Some(Direction::Right),
            Action::Restart | Action::Exit => None,
        }
    }
}

impl From<Direction> for Action {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Up => Action::Up,
            Direction::Left => Action::Left,
            Direction::Down => Action::Down,
            Direction::Right => Action::Right,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{Action, Direction};

    #[test]
    fn directions_round_trip_through_actions() {
        for d in Direction::ALL {
            assert_eq!(Action::from(d).direction(), Some(d));
        }
        assert_eq!(Action::Restart.direction(), None);
        assert_eq!(Action::Exit.direction(), None);
    }
}
