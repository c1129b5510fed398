#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use hint::*;
pub use score::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod hint;
mod render;
mod score;
mod types;

pub const MIN_DIM: Coord = 2;
pub const DEFAULT_DIM: Coord = 15;
pub const DEFAULT_MINE_PROBABILITY: f64 = 0.16;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub dim: Coord,
    pub mine_probability: f64,
}

impl GameConfig {
    pub const fn new_unchecked(dim: Coord, mine_probability: f64) -> Self {
        Self {
            dim,
            mine_probability,
        }
    }

    pub fn new(dim: Coord, mine_probability: f64) -> Result<Self> {
        if dim < MIN_DIM {
            return Err(GameError::InvalidDimension);
        }
        // also rejects NaN
        if !(mine_probability > 0.0 && mine_probability < 1.0) {
            return Err(GameError::InvalidProbability);
        }
        Ok(Self::new_unchecked(dim, mine_probability))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.dim, self.dim)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_DIM, DEFAULT_MINE_PROBABILITY)
    }
}

/// Where the mines are on a square board, before any play happens.
///
/// Serialized as the bare mask; deserializing goes through [`MineLayout::from_mine_mask`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "Array2<bool>", try_from = "Array2<bool>")]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, columns) = mine_mask.dim();
        if rows != columns || rows > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self {
            mine_mask,
            mine_count,
        })
    }

    pub fn from_mine_coords(dim: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let size = usize::from(dim);
        let mut mine_mask: Array2<bool> = Array2::default((size, size));

        for &coords in mine_coords {
            if coords.0 >= dim || coords.1 >= dim {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn dim(&self) -> Coord {
        // the mask is square and bounded by `Coord::MAX`, see `from_mine_mask`
        self.mine_mask.nrows() as Coord
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.dim(), self.dim())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub(crate) fn mine_mask(&self) -> &Array2<bool> {
        &self.mine_mask
    }
}

impl TryFrom<Array2<bool>> for MineLayout {
    type Error = GameError;

    fn try_from(mine_mask: Array2<bool>) -> Result<Self> {
        Self::from_mine_mask(mine_mask)
    }
}

impl From<MineLayout> for Array2<bool> {
    fn from(layout: MineLayout) -> Self {
        layout.mine_mask
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    /// The cell was already open.
    NoOp,
    /// One or more safe cells were opened.
    Cleared,
    MineHit,
}

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Won,
    Lost,
}

impl GameOutcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameOutcome {
    fn default() -> Self {
        Self::InProgress
    }
}
