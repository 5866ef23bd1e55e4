use super::*;
use rand::prelude::*;
use rand::rngs::SmallRng;

/// Generation strategy that draws a uniformly random cell per mine and, when that cell is taken,
/// walks forward in row order (wrapping at the right edge and at the bottom) to the next free one.
///
/// Collisions therefore pile up just after dense regions, the resulting layouts are not uniform
/// over all mine configurations.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbingGenerator {
    seed: u64,
}

impl ProbingGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for ProbingGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        let total_cells = config.total_cells();
        let (width, height) = config.size;

        // optimize for full boards
        if config.mines >= total_cells {
            if config.mines > total_cells {
                log::warn!(
                    "Minefield already full, generated anyway, requested {} but only fits {}",
                    config.mines,
                    total_cells
                );
            }
            return MineLayout::from_mine_mask(Array2::from_elem(nd_shape(config.size), true));
        }

        let mut mines: Array2<bool> = Array2::default(nd_shape(config.size));
        let mut rng = SmallRng::seed_from_u64(self.seed);

        for _ in 0..config.mines {
            let mut x = rng.random_range(0..width);
            let mut y = rng.random_range(0..height);

            while mines[[x as usize, y as usize]] {
                x += 1;
                if x >= width {
                    x = 0;
                    y += 1;
                    if y >= height {
                        y = 0;
                    }
                }
            }
            log::trace!("mine placed at ({x}, {y})");
            mines[[x as usize, y as usize]] = true;
        }

        MineLayout::from_mine_mask(mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exactly_the_requested_mines() {
        for (size, mines) in [((16, 16), 32), ((9, 9), 10), ((30, 16), 99), ((5, 5), 24)] {
            let config = GameConfig::new(size, mines);

            let layout = ProbingGenerator::new(7).generate(config);

            assert_eq!(layout.size(), size);
            assert_eq!(layout.mine_count(), mines);
        }
    }

    #[test]
    fn full_board_is_all_mines() {
        let layout = ProbingGenerator::new(1).generate(GameConfig::new((3, 3), 9));

        assert_eq!(layout.mine_count(), 9);
        assert_eq!(layout.safe_cell_count(), 0);
    }

    #[test]
    fn same_seed_same_layout() {
        let config = GameConfig::new((12, 8), 20);

        let a = ProbingGenerator::new(42).generate(config);
        let b = ProbingGenerator::new(42).generate(config);

        assert_eq!(a, b);
    }

    #[test]
    fn zero_mines_is_empty_layout() {
        let layout = ProbingGenerator::new(3).generate(GameConfig::new((4, 4), 0));

        assert_eq!(layout.mine_count(), 0);
    }
}
