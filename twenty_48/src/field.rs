use log::debug;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;

use crate::{merge, spawn::spawn, Direction, FieldConfig, Grid, Result};

/// Read-only view of a round handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Face values, row-major, `0` for empty.
    pub cells: Vec<Vec<u64>>,
    pub score: u64,
    pub high_score: u64,
    pub won: bool,
    pub over: bool,
}

/// One player's board together with its scores and tile source.
#[derive(Debug, Clone)]
pub struct GameField {
    grid: Grid,
    score: u64,
    high_score: u64,
    win_value: u64,
    rng: StdRng,
}

impl GameField {
    pub fn new_from_seed(config: FieldConfig, seed: u64) -> Result<Self> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    pub fn new_from_entropy(config: FieldConfig) -> Result<Self> {
        Self::new(config, StdRng::from_os_rng())
    }

    /// Validates `config` and deals the opening two tiles.
    pub fn new(config: FieldConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;
        let mut s = GameField {
            grid: Grid::new(config.height, config.width)?,
            score: 0,
            high_score: 0,
            win_value: config.win_value,
            rng,
        };
        s.reset()?;
        Ok(s)
    }

    /// Resumes from a prepared board instead of dealing a fresh one.
    pub fn from_grid(grid: Grid, win_value: u64, seed: u64) -> Result<Self> {
        FieldConfig {
            height: grid.height(),
            width: grid.width(),
            win_value,
        }
        .validate()?;

        Ok(GameField {
            grid,
            score: 0,
            high_score: 0,
            win_value,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> FieldConfig {
        FieldConfig {
            height: self.grid.height(),
            width: self.grid.width(),
            win_value: self.win_value,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn win_value(&self) -> u64 {
        self.win_value
    }

    /// Banks the current score into the high score and starts a new round.
    pub fn reset(&mut self) -> Result<()> {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        self.score = 0;

        self.grid.clear();
        spawn(&mut self.grid, &mut self.rng)?;
        spawn(&mut self.grid, &mut self.rng)?;

        debug!("reset, high score {}", self.high_score);
        Ok(())
    }

    pub fn can_move(&self, direction: Direction) -> bool {
        merge::move_is_possible(&self.grid, direction)
    }

    /// Slides the board and spawns one tile.
    ///
    /// Returns `Ok(false)` and changes nothing when the move would not alter
    /// the board. The slide and the spawn land together or not at all.
    pub fn apply_move(&mut self, direction: Direction) -> Result<bool> {
        if !self.can_move(direction) {
            return Ok(false);
        }

        let mut next = self.grid.clone();
        let gain = merge::slide(&mut next, direction);
        spawn(&mut next, &mut self.rng)?;

        self.grid = next;
        self.score = self.score.saturating_add(gain);
        debug!("moved {direction:?}, +{gain} -> {}", self.score);
        Ok(true)
    }

    pub fn is_won(&self) -> bool {
        self.grid
            .max_tile()
            .is_some_and(|t| t.value() >= self.win_value)
    }

    pub fn is_over(&self) -> bool {
        Direction::ALL.iter().all(|d| !self.can_move(*d))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.grid.values(),
            score: self.score,
            high_score: self.high_score,
            won: self.is_won(),
            over: self.is_over(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::GameField;
    use crate::{Direction, Error, FieldConfig, Grid};

    fn field(rows: &[[u64; 4]; 4]) -> GameField {
        GameField::from_grid(Grid::from_rows(rows).unwrap(), 2048, 9).unwrap()
    }

    #[test]
    fn starts_with_two_tiles() {
        let f = GameField::new_from_seed(FieldConfig::default(), 42).unwrap();
        assert_eq!(f.grid().count_tiles(), 2);
        assert_eq!(f.score(), 0);
        assert!(!f.is_won());
        assert!(!f.is_over());
    }

    #[test]
    fn same_seed_same_game() {
        let mut a = GameField::new_from_seed(FieldConfig::default(), 5).unwrap();
        let mut b = GameField::new_from_seed(FieldConfig::default(), 5).unwrap();
        for d in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            assert_eq!(a.apply_move(d).unwrap(), b.apply_move(d).unwrap());
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn construction_validates_config() {
        let bad = FieldConfig {
            height: 1,
            ..FieldConfig::default()
        };
        assert!(matches!(
            GameField::new_from_seed(bad, 0),
            Err(Error::InvalidDimensions { .. })
        ));
        let g = Grid::new(4, 4).unwrap();
        assert!(matches!(
            GameField::from_grid(g, 3, 0),
            Err(Error::InvalidWinValue(3))
        ));
    }

    #[test]
    fn merge_left_scores_and_spawns() {
        let mut f = field(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(f.apply_move(Direction::Left).unwrap());
        assert_eq!(f.score(), 4);
        assert_eq!(f.grid().get(0, 0).unwrap().map(|t| t.value()), Some(4));
        assert_eq!(f.grid().count_tiles(), 2);
    }

    #[test]
    fn infeasible_move_changes_nothing() {
        let mut f = field(&[[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let before = f.snapshot();
        assert!(!f.apply_move(Direction::Left).unwrap());
        assert!(!f.apply_move(Direction::Up).unwrap());
        assert_eq!(f.snapshot(), before);
    }

    #[test]
    fn reset_banks_high_score() {
        let mut f = field(&[[8, 8, 0, 0], [0; 4], [0; 4], [0; 4]]);
        f.apply_move(Direction::Left).unwrap();
        assert_eq!(f.score(), 16);

        f.reset().unwrap();
        assert_eq!(f.score(), 0);
        assert_eq!(f.high_score(), 16);
        assert_eq!(f.grid().count_tiles(), 2);

        // a lower round does not lower it
        f.reset().unwrap();
        assert_eq!(f.high_score(), 16);
    }

    #[test]
    fn full_board_without_pairs_is_over() {
        let f = field(&[
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        assert!(f.is_over());
        assert!(!f.is_won());
        assert!(f.snapshot().over);
    }

    #[test]
    fn largest_tiles_refuse_to_merge() {
        let top: u64 = 1 << 63;
        let grid = Grid::from_rows(&[[top, top], [0, 0]]).unwrap();
        let mut f = GameField::from_grid(grid, 2048, 0).unwrap();

        assert!(!f.apply_move(Direction::Left).unwrap());
        assert_eq!(f.score(), 0);
        assert!(f.apply_move(Direction::Down).unwrap());
        assert_eq!(f.score(), 0);
        assert_eq!(f.grid().values()[1], vec![top, top]);
        assert!(f.is_won());
    }

    #[test]
    fn win_threshold_is_inclusive() {
        let f = GameField::from_grid(Grid::from_rows(&[[16, 0], [0, 0]]).unwrap(), 16, 0).unwrap();
        assert!(f.is_won());
        let f = GameField::from_grid(Grid::from_rows(&[[8, 0], [0, 0]]).unwrap(), 16, 0).unwrap();
        assert!(!f.is_won());
    }
}
