use ndarray::{Array2, ArrayView1, Axis};
use serde::Serialize;

use crate::*;

/// Everything a presentation layer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoardSnapshot {
    pub size: Coord2,
    pub total_mines: CellCount,
    pub cells: Array2<CellView>,
    pub status: StatusSnapshot,
}

impl BoardSnapshot {
    pub fn from_engine(engine: &BoardEngine) -> Self {
        let size = engine.size();
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            engine.view_at((row as Coord, col as Coord))
        });

        Self {
            size,
            total_mines: engine.total_mines(),
            cells,
            status: engine.current_status(),
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<CellView> {
        in_bounds(coords, self.size).then(|| self.cells[coords.to_nd_index()])
    }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, CellView>> {
        self.cells.axis_iter(Axis(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_engine_maps_revealed_and_flagged_cells() {
        let layout = MineLayout::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        let mut engine = BoardEngine::new(layout);

        engine.reveal((1, 1));
        engine.toggle_flag((0, 0));

        let snapshot = engine.snapshot();

        assert_eq!(snapshot.total_mines, 1);
        assert_eq!(snapshot.cell((1, 1)), Some(CellView::Revealed(1)));
        assert_eq!(snapshot.cell((0, 0)), Some(CellView::Flagged));
        assert_eq!(snapshot.cell((0, 1)), Some(CellView::Hidden));
        assert_eq!(snapshot.cell((2, 0)), None);
        assert_eq!(snapshot.status.remaining_flags, 0);
    }

    #[test]
    fn rows_follow_board_order() {
        let layout = MineLayout::from_mine_coords((2, 3), &[(1, 2)]).unwrap();
        let mut engine = BoardEngine::new(layout);
        engine.reveal((1, 2));

        let snapshot = engine.snapshot();
        let rows: alloc::vec::Vec<_> = snapshot.rows().map(|row| row.to_vec()).collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][2], CellView::Mine);
        assert!(rows[0].iter().all(|&cell| cell == CellView::Hidden));
    }

    #[test]
    fn serializes_view_and_status() {
        let layout = MineLayout::from_mine_coords((1, 2), &[(0, 1)]).unwrap();
        let mut engine = BoardEngine::new(layout);
        engine.reveal((0, 0));

        let value = serde_json::to_value(engine.snapshot()).unwrap();

        assert_eq!(value["size"], serde_json::json!([1, 2]));
        assert_eq!(value["status"]["status"], "Won");
        assert_eq!(value["status"]["tiles_revealed"], 1);
        assert_eq!(value["cells"]["dim"], serde_json::json!([1, 2]));
        assert_eq!(
            value["cells"]["data"],
            serde_json::json!([{ "Revealed": 1 }, "Hidden"])
        );
    }
}
