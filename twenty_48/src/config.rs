use serde::{Deserialize, Serialize};

use crate::{grid::MIN_SIDE, Error, Result};

pub const DEFAULT_HEIGHT: usize = 4;
pub const DEFAULT_WIDTH: usize = 4;
pub const DEFAULT_WIN_VALUE: u64 = 2048;

/// Board shape and goal. Fixed once a [`GameField`](crate::GameField) is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub height: usize,
    pub width: usize,
    pub win_value: u64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            win_value: DEFAULT_WIN_VALUE,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<()> {
        if self.height < MIN_SIDE || self.width < MIN_SIDE {
            return Err(Error::InvalidDimensions {
                height: self.height,
                width: self.width,
            });
        }
        if self.win_value < 4 {
            return Err(Error::InvalidWinValue(self.win_value));
        }
        Ok(())
    }
}
