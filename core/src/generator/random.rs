use super::*;
use ndarray::Array2;

/// Rejection sampling: draw a random cell, skip it when it already holds a mine, repeat until the requested count is
/// placed.
///
/// Each mine set of the requested size is equally likely. Expected time grows quickly as the board fills up, but
/// `GameConfig` always leaves one safe cell, so this always terminates.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;

        let (rows, cols) = config.size();
        let mut mines: Array2<bool> = Array2::default(config.size().to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let mut placed: CellCount = 0;
        let mut rejected: u64 = 0;
        while placed < config.mines() {
            let coords: Coord2 = (rng.random_range(0..rows), rng.random_range(0..cols));
            let cell = &mut mines[coords.to_nd_index()];
            if *cell {
                rejected += 1;
                continue;
            }
            *cell = true;
            placed += 1;
        }

        if rejected > u64::from(config.total_cells()) {
            log::warn!(
                "Placing {} mines on {} cells took {} rejected samples",
                config.mines(),
                config.total_cells(),
                rejected
            );
        } else {
            log::debug!(
                "Placed {} mines with {} rejected samples, seed {}",
                placed,
                rejected,
                self.seed
            );
        }

        MineLayout::from_mine_mask(config, mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exact_mine_count() {
        for seed in 0..64 {
            let config = GameConfig::new(8, 11, 20).unwrap();
            let layout = RandomMineGenerator::new(seed).generate(config);

            assert_eq!(layout.iter_mines().count(), 20);
            assert_eq!(layout.mine_count(), 20);
        }
    }

    #[test]
    fn fills_all_but_one_cell() {
        let config = GameConfig::new(4, 4, 15).unwrap();
        let layout = RandomMineGenerator::new(7).generate(config);

        assert_eq!(layout.iter_mines().count(), 15);
        assert_eq!(layout.safe_cell_count(), 1);
    }

    #[test]
    fn zero_mines_leaves_board_empty() {
        let config = GameConfig::new(3, 5, 0).unwrap();
        let layout = RandomMineGenerator::new(1).generate(config);

        assert_eq!(layout.iter_mines().count(), 0);
    }

    #[test]
    fn same_seed_same_layout() {
        let config = GameConfig::beginner();
        assert_eq!(
            RandomMineGenerator::new(42).generate(config),
            RandomMineGenerator::new(42).generate(config)
        );
    }

    #[test]
    fn adjacency_matches_neighbor_mines() {
        for seed in 0..32 {
            let layout = RandomMineGenerator::new(seed).generate(GameConfig::intermediate());
            let (rows, cols) = layout.size();

            for row in 0..rows {
                for col in 0..cols {
                    if layout.contains_mine((row, col)) {
                        continue;
                    }
                    let expected = NeighborIter::new((row, col), (rows, cols))
                        .filter(|&pos| layout.contains_mine(pos))
                        .count() as u8;
                    assert_eq!(layout.adjacent_mine_count((row, col)), expected);
                }
            }
        }
    }
}
