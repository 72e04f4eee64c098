use std::collections::HashSet;

use super::MinePlacer;
use crate::{Coord2, GameConfig};

/// Uniform placement without replacement: draw random coordinate pairs and
/// redraw on collision until the distinct count is reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMinePlacer {
    seed: u64,
}

impl RandomMinePlacer {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinePlacer for RandomMinePlacer {
    fn place(self, config: &GameConfig) -> Vec<Coord2> {
        use rand::prelude::*;

        let (width, height) = config.size;
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut taken: HashSet<Coord2> = HashSet::with_capacity(config.mines);
        let mut mines = Vec::with_capacity(config.mines);

        // Terminates because the config clamp guarantees mines < width * height.
        while mines.len() < config.mines {
            let coords = (rng.random_range(0..width), rng.random_range(0..height));
            if taken.insert(coords) {
                mines.push(coords);
            } else {
                log::trace!("Mine collision at {:?}, redrawing", coords);
            }
        }

        log::debug!("Placed {} mines on a {}x{} board", mines.len(), width, height);
        mines
    }
}
