use serde::{Deserialize, Serialize};

use crate::{CellCount, Coord2};

/// Board dimensions plus the requested mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Clamps degenerate dimensions to 1 and the mine count to `width * height - 1`,
    /// so at least one cell is always mine-free.
    pub fn new((width, height): Coord2, mines: CellCount) -> Self {
        let width = width.max(1);
        let height = height.max(1);

        let max_mines = width * height - 1;
        if mines > max_mines {
            log::warn!(
                "Requested {} mines but a {}x{} board only fits {}, clamping",
                mines,
                width,
                height,
                max_mines
            );
        }

        Self {
            size: (width, height),
            mines: mines.min(max_mines),
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        self.size.0 * self.size.1
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked((9, 9), 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked((16, 16), 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked((30, 16), 99)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mine_count_is_clamped_to_leave_one_free_cell() {
        let config = GameConfig::new((2, 2), 5);
        assert_eq!(config.mines, 3);
        assert_eq!(config.total_cells(), 4);
    }

    #[test]
    fn valid_mine_count_is_kept() {
        let config = GameConfig::new((9, 9), 10);
        assert_eq!(config.mines, 10);
        assert_eq!(config.size, (9, 9));
    }

    #[test]
    fn zero_dimensions_are_clamped() {
        let config = GameConfig::new((0, 0), 1);
        assert_eq!(config.size, (1, 1));
        assert_eq!(config.mines, 0);
    }
}
