//! Board symmetries. Every move is reduced to a left slide by reorienting the
//! board with these, sliding, and undoing the reorientation.

use crate::Grid;

/// Swaps rows and columns: `out[i][j] == grid[j][i]`.
pub fn transpose(grid: &Grid) -> Grid {
    let mut out = Grid::blank(grid.width, grid.height);
    for (i, row) in grid.rows().enumerate() {
        for (j, tile) in row.iter().enumerate() {
            out.cells[j * out.width + i] = *tile;
        }
    }
    out
}

/// Mirrors every row: `out[i][j] == grid[i][width - 1 - j]`.
pub fn invert_rows(grid: &Grid) -> Grid {
    let mut out = grid.clone();
    for row in out.rows_mut() {
        row.reverse();
    }
    out
}
