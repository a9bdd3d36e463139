use log::debug;
use rand::Rng;

use crate::{Error, Grid, Result, Tile};

/// Drops a random tile (2 or 4) into a uniformly chosen empty cell and
/// returns its `(row, col)`.
///
/// Fails with [`Error::NoEmptyCell`] and leaves the board untouched when
/// every cell is occupied.
pub fn spawn<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<(usize, usize)> {
    let i = random_open_tile(grid, rng).ok_or(Error::NoEmptyCell)?;
    let tile: Tile = rng.random();
    grid.cells[i] = Some(tile);

    let pos = (i / grid.width, i % grid.width);
    debug!("spawned {} at {:?}", tile.value(), pos);
    Ok(pos)
}

fn random_open_tile<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Option<usize> {
    let open_tiles = grid.count_empty();
    if open_tiles == 0 {
        None
    } else {
        grid.cells
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_none())
            .nth(rng.random_range(0..open_tiles))
            .map(|(i, _)| i)
    }
}
