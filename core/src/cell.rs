use serde::{Deserialize, Serialize};

/// Player-visible state stored by the engine for each cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum CellState {
    #[default]
    Hidden,
    Flagged,
    Revealed,
}

/// What a presentation layer may know about a cell.
///
/// A mine only shows up as [`CellView::Mine`] once it has been revealed, which happens when the game is lost.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
}

impl CellView {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_) | Self::Mine)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }

    /// Adjacent mine count, only known for revealed safe cells.
    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Self::Revealed(count) => Some(count),
            _ => None,
        }
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
