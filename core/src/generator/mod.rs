use crate::{Coord2, GameConfig};

pub use random::RandomMinePlacer;

mod random;

/// Strategy for picking the mine coordinates of a new board.
///
/// Implementations must return distinct in-bounds coordinates, exactly
/// `config.mines` of them.
pub trait MinePlacer {
    fn place(self, config: &GameConfig) -> Vec<Coord2>;
}

/// Places mines at fixed coordinates, for deterministic boards in tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedMinePlacer {
    coords: Vec<Coord2>,
}

impl FixedMinePlacer {
    pub fn new(coords: Vec<Coord2>) -> Self {
        Self { coords }
    }
}

impl MinePlacer for FixedMinePlacer {
    fn place(self, _config: &GameConfig) -> Vec<Coord2> {
        self.coords
    }
}
