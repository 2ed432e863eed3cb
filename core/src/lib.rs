#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use snapshot::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod snapshot;
mod types;

/// Validated board dimensions and mine count.
///
/// Always satisfies `rows > 0`, `cols > 0` and `mines < rows * cols`, so every board built from it keeps at
/// least one safe cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    size: Coord2,
    mines: CellCount,
}

impl GameConfig {
    const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 {
            return Err(ConfigError::NonPositiveRows.into());
        }
        if cols == 0 {
            return Err(ConfigError::NonPositiveCols.into());
        }
        let cells = mult(rows, cols);
        if mines >= cells {
            return Err(ConfigError::TooManyMines { mines, cells }.into());
        }
        Ok(Self::new_unchecked((rows, cols), mines))
    }

    /// Validates raw integers as typed into a settings form.
    pub fn from_signed(rows: i64, cols: i64, mines: i64) -> Result<Self> {
        if rows <= 0 {
            return Err(ConfigError::NonPositiveRows.into());
        }
        if cols <= 0 {
            return Err(ConfigError::NonPositiveCols.into());
        }
        if mines < 0 {
            return Err(ConfigError::NegativeMines.into());
        }
        let rows = narrow("rows", rows)?;
        let cols = narrow("cols", cols)?;
        let mines = narrow("mines", mines)?;
        Self::new(rows, cols, mines)
    }

    /// The default board: 15 x 15 with 30 mines.
    pub const fn classic() -> Self {
        Self::new_unchecked((15, 15), 30)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked((9, 9), 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked((16, 16), 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked((16, 30), 99)
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

fn narrow<T: TryFrom<i64>>(field: &'static str, value: i64) -> Result<T> {
    T::try_from(value).map_err(|_| ConfigError::OutOfRange { field, value }.into())
}

/// Where the mines are, plus the adjacency count of every safe cell.
///
/// Counts are computed once when the layout is built and never change afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct MineLayout {
    config: GameConfig,
    mine_mask: Array2<bool>,
    adjacency: Array2<u8>,
}

impl MineLayout {
    /// Builds the layout from a mask whose dimensions and mine count already match `config`.
    pub(crate) fn from_mine_mask(config: GameConfig, mine_mask: Array2<bool>) -> Self {
        let adjacency = Array2::from_shape_fn(mine_mask.dim(), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            if mine_mask[coords.to_nd_index()] {
                0
            } else {
                mine_mask
                    .iter_neighbor_cells(coords)
                    .filter(|&is_mine| is_mine)
                    .count() as u8
            }
        });
        Self {
            config,
            mine_mask,
            adjacency,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        // duplicates collapse in the mask, so count what actually landed
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        let config = GameConfig::new(size.0, size.1, mine_count)?;
        Ok(Self::from_mine_mask(config, mine_mask))
    }

    pub fn game_config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.config.safe_cells()
    }

    pub fn total_cells(&self) -> CellCount {
        self.config.total_cells()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines()
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.adjacency[coords.to_nd_index()]
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
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
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}
