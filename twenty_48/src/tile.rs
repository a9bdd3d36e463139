use std::num::NonZeroU32;

use rand::Rng;
use rand_distr::{Bernoulli, Distribution, StandardUniform};

/// Chance that a freshly spawned tile is a 2 rather than a 4.
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Largest exponent whose face value fits in a `u64`.
pub const MAX_EXPONENT: u32 = u64::BITS - 1;

// which power of two. NonZero because two is the lowest
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(NonZeroU32);

impl Tile {
    pub const TWO: Tile = Tile(NonZeroU32::MIN);
    pub const FOUR: Tile = Tile::TWO.double();

    const fn double(&self) -> Tile {
        Tile(self.0.saturating_add(1))
    }

    /// The tile produced by merging two copies of `self`, or `None` once the
    /// result would no longer fit in a `u64`.
    pub fn checked_double(&self) -> Option<Tile> {
        (self.0.get() < MAX_EXPONENT).then(|| self.double())
    }

    /// Parses a face value. `None` for anything that is not a power of two >= 2.
    pub fn from_value(value: u64) -> Option<Tile> {
        if value < 2 || !value.is_power_of_two() {
            return None;
        }
        NonZeroU32::new(value.trailing_zeros()).map(Tile)
    }

    pub fn value(&self) -> u64 {
        1_u64 << self.0.get()
    }

    pub fn exponent(&self) -> u32 {
        self.0.get()
    }
}

impl Distribution<Tile> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        let two = Bernoulli::new(SPAWN_TWO_PROBABILITY).expect("probability is within [0, 1]");
        if rng.sample(two) {
            Tile::TWO
        } else {
            Tile::FOUR
        }
    }
}
