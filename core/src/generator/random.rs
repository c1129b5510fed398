use ndarray::Array2;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Generation strategy that rolls every cell independently, each holding a mine with the configured probability.
#[derive(Clone, Debug, PartialEq)]
pub struct BernoulliGenerator {
    seed: u64,
}

impl BernoulliGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for BernoulliGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        let size = usize::from(config.dim);
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let mine_mask =
            Array2::from_shape_fn((size, size), |_| rng.random::<f64>() <= config.mine_probability);
        let layout = MineLayout::from_mine_mask(mine_mask)
            .expect("generated mask is square with a `Coord` sized side");

        log::debug!(
            "Generated {0}x{0} minefield with {1} mines (p = {2})",
            config.dim,
            layout.mine_count(),
            config.mine_probability
        );
        if layout.safe_cell_count() == 0 {
            log::warn!("Every cell of the generated minefield has a mine");
        }
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_generates_same_layout() {
        let config = GameConfig::new(12, 0.3).unwrap();

        let first = BernoulliGenerator::new(7).generate(config);
        let second = BernoulliGenerator::new(7).generate(config);

        assert_eq!(first, second);
        assert_eq!(first.dim(), 12);
    }

    #[test]
    fn mine_density_follows_probability() {
        let config = GameConfig::new(100, 0.16).unwrap();

        let layout = BernoulliGenerator::new(42).generate(config);

        // 10_000 trials, expected 1_600 mines; bounds are several deviations wide
        assert!((1_300..=1_900).contains(&layout.mine_count()));
        assert_eq!(layout.safe_cell_count() + layout.mine_count(), 10_000);
    }

    #[test]
    fn tiny_probability_leaves_board_clear() {
        let config = GameConfig::new(4, f64::MIN_POSITIVE).unwrap();

        let layout = BernoulliGenerator::new(3).generate(config);

        assert_eq!(layout.mine_count(), 0);
        assert_eq!(layout.safe_cell_count(), 16);
    }
}
