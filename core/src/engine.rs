use alloc::vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Aggregate session counters, as shown next to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub status: GameStatus,
    pub tiles_revealed: CellCount,
    /// Mine count minus flagged cells, negative when over-flagged.
    pub remaining_flags: isize,
}

/// Represents a game from start to finish.
///
/// The mine layout is private: callers only ever see cells through [`CellView`].
#[derive(Clone, Debug, PartialEq)]
pub struct BoardEngine {
    mine_layout: MineLayout,
    board: Array2<CellState>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl BoardEngine {
    pub fn new(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        log::debug!(
            "New game {}x{} with {} mines",
            size.0,
            size.1,
            mine_layout.mine_count()
        );
        Self {
            mine_layout,
            board: Array2::default(size.to_nd_index()),
            revealed_count: 0,
            flagged_count: 0,
            status: Default::default(),
            triggered_mine: None,
        }
    }

    /// Places mines for `config` and starts a fresh session on them.
    pub fn new_game(config: GameConfig, generator: impl MineGenerator) -> Self {
        Self::new(generator.generate(config))
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.mine_layout.game_config()
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn tiles_revealed(&self) -> CellCount {
        self.revealed_count
    }

    pub fn remaining_flags(&self) -> isize {
        (self.mine_layout.mine_count() as isize) - (self.flagged_count as isize)
    }

    pub fn current_status(&self) -> StatusSnapshot {
        StatusSnapshot {
            status: self.status,
            tiles_revealed: self.revealed_count,
            remaining_flags: self.remaining_flags(),
        }
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<CellView> {
        in_bounds(coords, self.size()).then(|| self.view_at(coords))
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_engine(self)
    }

    pub(crate) fn view_at(&self, coords: Coord2) -> CellView {
        match self.board[coords.to_nd_index()] {
            CellState::Hidden => CellView::Hidden,
            CellState::Flagged => CellView::Flagged,
            CellState::Revealed if self.mine_layout[coords] => CellView::Mine,
            CellState::Revealed => {
                CellView::Revealed(self.mine_layout.adjacent_mine_count(coords))
            }
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        use CellState::*;
        use MarkOutcome::*;

        if self.status.is_finished() || !in_bounds(coords, self.size()) {
            return NoChange;
        }

        let cell = &mut self.board[coords.to_nd_index()];
        match *cell {
            Hidden => {
                *cell = Flagged;
                self.flagged_count += 1;
                Changed
            }
            Flagged => {
                *cell = Hidden;
                self.flagged_count -= 1;
                Changed
            }
            Revealed => NoChange,
        }
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if self.status.is_finished() || !in_bounds(coords, self.size()) {
            return RevealOutcome::NoChange;
        }

        if self.board[coords.to_nd_index()] == CellState::Revealed {
            return RevealOutcome::NoChange;
        }

        if self.mine_layout[coords] {
            self.triggered_mine = Some(coords);
            self.end_game(GameStatus::Lost);
            return RevealOutcome::HitMine;
        }

        self.flood_reveal(coords);

        if self.revealed_count == self.mine_layout.safe_cell_count() {
            self.end_game(GameStatus::Won);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Reveals a safe cell and, through an explicit stack, every cell reachable from it across zero counts.
    ///
    /// A cell is revealed at most once, and mines are never pushed onto the stack.
    fn flood_reveal(&mut self, start: Coord2) {
        let mut to_visit = vec![start];

        while let Some(visit_coords) = to_visit.pop() {
            if self.board[visit_coords.to_nd_index()] == CellState::Revealed
                || self.mine_layout[visit_coords]
            {
                continue;
            }

            self.open_cell(visit_coords);

            if self.mine_layout.adjacent_mine_count(visit_coords) == 0 {
                to_visit.extend(self.mine_layout.iter_neighbors(visit_coords).filter(|&pos| {
                    self.board[pos.to_nd_index()] != CellState::Revealed
                        && !self.mine_layout[pos]
                }));
            }
        }
    }

    /// Marks a single cell revealed, dropping any flag it carried.
    fn open_cell(&mut self, coords: Coord2) {
        let cell = &mut self.board[coords.to_nd_index()];
        if *cell == CellState::Flagged {
            self.flagged_count -= 1;
        }
        *cell = CellState::Revealed;

        if !self.mine_layout[coords] {
            self.revealed_count += 1;
            log::trace!(
                "Opened cell at {:?}, mine count: {}",
                coords,
                self.mine_layout.adjacent_mine_count(coords)
            );
        }
    }

    fn end_game(&mut self, status: GameStatus) {
        if self.status.is_finished() {
            return;
        }

        self.status = status;
        log::debug!(
            "Game ended {:?} with {} of {} safe cells revealed",
            status,
            self.revealed_count,
            self.mine_layout.safe_cell_count()
        );

        if status == GameStatus::Lost {
            self.reveal_mines();
        }
    }

    /// Shows every mine once the game is lost. Safe cells are left as they are.
    fn reveal_mines(&mut self) {
        let mines: alloc::vec::Vec<_> = self.mine_layout.iter_mines().collect();
        for coords in mines {
            self.open_cell(coords);
        }
    }
}
