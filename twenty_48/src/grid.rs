use std::fmt::{self, Display};

use crate::{Error, Result, Tile};

/// Smallest number of cells allowed along either axis.
pub const MIN_SIDE: usize = 2;

/// Row-major `height x width` board. `None` is an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    pub(crate) height: usize,
    pub(crate) width: usize,
    pub(crate) cells: Vec<Option<Tile>>,
}

impl Grid {
    /// An empty board. Fails if either side is shorter than [`MIN_SIDE`].
    pub fn new(height: usize, width: usize) -> Result<Self> {
        if height < MIN_SIDE || width < MIN_SIDE {
            return Err(Error::InvalidDimensions { height, width });
        }
        Ok(Self::blank(height, width))
    }

    pub(crate) fn blank(height: usize, width: usize) -> Self {
        Grid {
            height,
            width,
            cells: vec![None; height * width],
        }
    }

    /// Builds a board from face values, `0` meaning empty.
    ///
    /// ```
    /// use twenty_48::Grid;
    /// let g = Grid::from_rows(&[[2, 0], [0, 4]]).unwrap();
    /// assert_eq!(g.values(), vec![vec![2, 0], vec![0, 4]]);
    /// ```
    pub fn from_rows<R: AsRef<[u64]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut grid = Grid::new(height, width)?;

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::RaggedRows);
            }
            for (j, &n) in row.iter().enumerate() {
                if n != 0 {
                    let tile = Tile::from_value(n).ok_or(Error::InvalidTile(n))?;
                    grid.cells[i * width + j] = Some(tile);
                }
            }
        }

        Ok(grid)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Bounds-checked read. The outer `None` means the position is off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Option<Tile>> {
        self.index(row, col).map(|i| self.cells[i])
    }

    pub fn set(&mut self, row: usize, col: usize, tile: Option<Tile>) -> Result<()> {
        let i = self
            .index(row, col)
            .ok_or(Error::OutOfBounds { row, col })?;
        self.cells[i] = tile;
        Ok(())
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<Tile>]> {
        self.cells.chunks(self.width)
    }

    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Option<Tile>]> {
        self.cells.chunks_mut(self.width)
    }

    /// Face values, `0` for empty cells.
    pub fn values(&self) -> Vec<Vec<u64>> {
        self.rows()
            .map(|row| row.iter().map(|t| t.map_or(0, |t| t.value())).collect())
            .collect()
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_none())
            .map(|(i, _)| (i / self.width, i % self.width))
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|t| t.is_none()).count()
    }

    pub fn count_tiles(&self) -> usize {
        self.cells.len() - self.count_empty()
    }

    pub fn max_tile(&self) -> Option<Tile> {
        self.cells.iter().flatten().max().copied()
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn print_row(f: &mut impl fmt::Write, row: &[Option<Tile>]) -> fmt::Result {
        for tile in row.iter() {
            match tile {
                Some(tile) => write!(f, "|{: ^5}", tile.value())?,
                None => write!(f, "|{: ^5}", " ")?,
            }
        }
        Ok(())
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            Grid::print_row(f, row)?;
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
