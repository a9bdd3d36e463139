//! Sliding and merging.
//!
//! All four moves share one primitive, [`slide_left`], applied to a
//! reoriented copy of the board:
//!
//! | move  | before slide               | after slide                |
//! |-------|----------------------------|----------------------------|
//! | Left  | -                          | -                          |
//! | Right | `invert_rows`              | `invert_rows`              |
//! | Up    | `transpose`                | `transpose`                |
//! | Down  | `transpose`, `invert_rows` | `invert_rows`, `transpose` |

use log::trace;

use crate::{
    transform::{invert_rows, transpose},
    Direction, Grid, Tile,
};

/// Slides one row towards index 0, merging equal neighbours.
///
/// Merges are resolved left to right and a tile produced by a merge never
/// merges again in the same call, so `[2, 2, 2, 2]` becomes `[4, 4, _, _]`.
/// Returns the score gained: the sum of the values created by merges.
pub fn slide_left(row: &mut [Option<Tile>]) -> u64 {
    compact(row);

    let mut gain: u64 = 0;
    let mut i = 0;
    while i + 1 < row.len() {
        match merged(row[i], row[i + 1]) {
            Some(tile) => {
                row[i] = None;
                row[i + 1] = Some(tile);
                gain = gain.saturating_add(tile.value());
                // the merged tile is spent for this pass
                i += 2;
            }
            None => i += 1,
        }
    }

    compact(row);
    gain
}

// equal tiles merge unless the result would overflow the largest tile
fn merged(a: Option<Tile>, b: Option<Tile>) -> Option<Tile> {
    match (a, b) {
        (Some(a), Some(b)) if a == b => a.checked_double(),
        _ => None,
    }
}

// stable: tiles keep their relative order
fn compact(row: &mut [Option<Tile>]) {
    let mut write = 0;
    for read in 0..row.len() {
        if let Some(tile) = row[read].take() {
            row[write] = Some(tile);
            write += 1;
        }
    }
}

fn slide_rows_left(mut grid: Grid) -> (Grid, u64) {
    let gain = grid
        .rows_mut()
        .map(slide_left)
        .fold(0, u64::saturating_add);
    (grid, gain)
}

fn slid(grid: &Grid, direction: Direction) -> (Grid, u64) {
    match direction {
        Direction::Left => slide_rows_left(grid.clone()),
        Direction::Right => {
            let (g, gain) = slide_rows_left(invert_rows(grid));
            (invert_rows(&g), gain)
        }
        Direction::Up => {
            let (g, gain) = slide_rows_left(transpose(grid));
            (transpose(&g), gain)
        }
        Direction::Down => {
            let (g, gain) = slid(&transpose(grid), Direction::Right);
            (transpose(&g), gain)
        }
    }
}

/// Slides the whole board in `direction` and returns the score gained.
///
/// Does not spawn and does not check feasibility; an infeasible slide simply
/// leaves the board as it was and gains nothing.
pub fn slide(grid: &mut Grid, direction: Direction) -> u64 {
    let (moved, gain) = slid(grid, direction);
    *grid = moved;
    gain
}

// a tile with a hole on its left can slide into it; a pair that
// `slide_left` would merge changes the row as well
fn movable(row: &[Option<Tile>]) -> bool {
    row.windows(2).any(|pair| match (pair[0], pair[1]) {
        (None, Some(_)) => true,
        (a, b) => merged(a, b).is_some(),
    })
}

/// Whether sliding in `direction` would change at least one cell.
pub fn move_is_possible(grid: &Grid, direction: Direction) -> bool {
    let possible = match direction {
        Direction::Left => grid.rows().any(movable),
        Direction::Right => invert_rows(grid).rows().any(movable),
        Direction::Up => transpose(grid).rows().any(movable),
        Direction::Down => invert_rows(&transpose(grid)).rows().any(movable),
    };
    trace!("move {direction:?} possible: {possible}");
    possible
}
