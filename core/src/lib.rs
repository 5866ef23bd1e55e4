#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod session;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Builds a config, clamping the sides to at least one cell and the mines to the board area.
    pub fn new((size_x, size_y): Coord2, mines: CellCount) -> Self {
        let size_x = size_x.clamp(1, Coord::MAX);
        let size_y = size_y.clamp(1, Coord::MAX);
        let total = mult(size_x, size_y);
        if mines > total {
            log::warn!("Requested {mines} mines but the board only fits {total}, clamping");
        }
        Self::new_unchecked((size_x, size_y), mines.min(total))
    }

    /// Like [`GameConfig::new`], but non-positive sides are an error instead of being clamped.
    pub fn try_new(size: Coord2, mines: CellCount) -> Result<Self> {
        if size.0 <= 0 || size.1 <= 0 {
            return Err(GameError::InvalidDimensions);
        }
        Ok(Self::new(size, mines))
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((16, 16), 32)
    }
}

/// Where the hazards of one board are, before any numbering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        Self {
            mine_mask,
            mine_count: CellCount::try_from(mine_count).unwrap_or(CellCount::MAX),
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 <= 0 || size.1 <= 0 {
            return Err(GameError::InvalidDimensions);
        }
        let mut mine_mask: Array2<bool> = Array2::default(nd_shape(size));

        let indices = mine_coords
            .iter()
            .map(|coords| coords.to_nd_index(size).ok_or(GameError::InvalidCoords))
            .collect::<Result<Vec<_>>>()?;
        for index in indices {
            mine_mask[index] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.mine_mask.dim();
        (
            Coord::try_from(dim.0).unwrap_or(Coord::MAX),
            Coord::try_from(dim.1).unwrap_or(Coord::MAX),
        )
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        CellCount::try_from(self.mine_mask.len()).unwrap_or(CellCount::MAX)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        coords
            .to_nd_index(self.size())
            .is_some_and(|index| self.mine_mask[index])
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        let count = self
            .mine_mask
            .iter_neighbors(coords, &MOORE)
            .filter(|&pos| self.contains_mine(pos))
            .count();
        // at most 8 neighbors
        count as u8
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    Lost,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            Lost => true,
            Won => true,
        }
    }
}
