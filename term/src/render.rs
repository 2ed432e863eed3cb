use std::fmt::Write;

use sapper_core::{BoardSnapshot, CellView, Coord, Coord2, GameStatus, ToNdIndex};

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewCellState {
    Hidden,
    Revealed(u8),
    Flagged,
    TriggeredMine,
    Mine,
    Misflagged,
}

impl ViewCellState {
    fn at(snapshot: &BoardSnapshot, triggered: Option<Coord2>, coords: Coord2) -> Self {
        let lost = snapshot.status.status == GameStatus::Lost;
        match snapshot.cells[coords.to_nd_index()] {
            CellView::Hidden => Self::Hidden,
            CellView::Revealed(count) => Self::Revealed(count),
            // every mine is shown on loss, so a flag still standing is on a safe cell
            CellView::Flagged if lost => Self::Misflagged,
            CellView::Flagged => Self::Flagged,
            CellView::Mine if triggered == Some(coords) => Self::TriggeredMine,
            CellView::Mine => Self::Mine,
        }
    }

    fn symbol(self) -> char {
        match self {
            Self::Hidden => '#',
            Self::Revealed(0) => '.',
            Self::Revealed(count) => char::from(b'0' + count),
            Self::Flagged => 'F',
            Self::TriggeredMine => 'X',
            Self::Mine => '*',
            Self::Misflagged => 'x',
        }
    }
}

pub(crate) fn status_message(status: GameStatus) -> &'static str {
    match status {
        GameStatus::InProgress => "Good Luck!",
        GameStatus::Lost => "Game Over!",
        GameStatus::Won => "Mines Cleared!",
    }
}

fn digits(value: Coord) -> usize {
    value.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Draws the status line and the board with row/column headers.
pub(crate) fn render(snapshot: &BoardSnapshot, triggered: Option<Coord2>) -> String {
    let (rows, cols) = snapshot.size;
    let row_width = digits(rows.saturating_sub(1));
    let col_width = digits(cols.saturating_sub(1));
    let mut out = String::new();

    // writing into a String cannot fail
    let _ = writeln!(
        out,
        "Mines: {}   {}",
        snapshot.status.remaining_flags,
        status_message(snapshot.status.status)
    );

    let _ = write!(out, "{:row_width$}", "");
    for col in 0..cols {
        let _ = write!(out, " {col:>col_width$}");
    }
    out.push('\n');

    for row in 0..rows {
        let _ = write!(out, "{row:>row_width$}");
        for col in 0..cols {
            let symbol = ViewCellState::at(snapshot, triggered, (row, col)).symbol();
            let _ = write!(out, " {symbol:>col_width$}");
        }
        out.push('\n');
    }

    out
}
