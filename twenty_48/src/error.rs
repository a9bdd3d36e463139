use thiserror::Error;

/// Everything that can go wrong inside the engine.
#[derive(Error, Debug)]
pub enum Error {
    /// A board needs at least two cells along each axis for anything to merge.
    #[error("invalid board dimensions {height}x{width}: both sides must be at least 2")]
    InvalidDimensions { height: usize, width: usize },

    /// The win threshold must be reachable by at least one merge.
    #[error("invalid win value {0}: must be at least 4")]
    InvalidWinValue(u64),

    /// A spawn was requested on a full board. Callers must check move
    /// feasibility first, so this is a programming error.
    #[error("no empty cell left to spawn a tile into")]
    NoEmptyCell,

    /// Raw cell value that is neither empty (0) nor a power of two >= 2.
    #[error("invalid tile value {0}: must be 0 or a power of two >= 2")]
    InvalidTile(u64),

    #[error("rows have different lengths")]
    RaggedRows,

    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    /// Failure reported by an input or output collaborator.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
