use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{Cell, CellCount, Coord2, GameConfig, Marker, MinePlacer, NeighborIterExt};

fn blank_grid(size: Coord2, marker: Marker) -> Array2<Cell> {
    Array2::from_shape_fn(size, |(x, y)| Cell::new(x, y, marker))
}

/// The fully generated board: true mine locations plus adjacency counts.
/// Built once and never mutated afterwards, except for the cosmetic flag
/// overlay the engine applies when exporting an xray snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundTruthBoard {
    grid: Array2<Cell>,
    mine_count: CellCount,
}

impl GroundTruthBoard {
    /// Builds the grid, marks the placed mines, then stores each non-mine
    /// cell's 8-neighborhood mine count. Zero-adjacency cells stay `Clear`.
    pub fn generate(config: &GameConfig, placer: impl MinePlacer) -> Self {
        let mut grid = blank_grid(config.size, Marker::Clear);

        let mines = placer.place(config);
        for &coords in &mines {
            grid[coords].marker = Marker::Mine;
        }

        let (width, height) = config.size;
        for x in 0..width {
            for y in 0..height {
                if grid[(x, y)].marker == Marker::Mine {
                    continue;
                }
                let count = grid
                    .iter_neighbors((x, y))
                    .filter(|&pos| grid[pos].marker == Marker::Mine)
                    .count();
                if count > 0 {
                    grid[(x, y)].marker = Marker::Adjacent(count as u8);
                }
            }
        }

        Self {
            grid,
            mine_count: mines.len(),
        }
    }

    pub fn marker_at(&self, coords: Coord2) -> Marker {
        self.grid[coords].marker
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn size(&self) -> Coord2 {
        self.grid.dim()
    }

    /// Read-only snapshot of the grid.
    pub fn grid(&self) -> &Array2<Cell> {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Array2<Cell> {
        &mut self.grid
    }
}

/// The player-facing board. Starts all unknown and is mutated exclusively by
/// the engine in response to validated moves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleBoard {
    grid: Array2<Cell>,
}

impl VisibleBoard {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            grid: blank_grid(config.size, Marker::Unknown),
        }
    }

    /// A cell can be revealed only while it is still unknown; flags are
    /// explicitly excluded from this path.
    pub fn is_revealable(&self, coords: Coord2) -> bool {
        let cell = &self.grid[coords];
        cell.marker == Marker::Unknown && !cell.visible
    }

    /// A cell can be flagged (or unflagged) as long as it has not been revealed.
    pub fn is_flaggable(&self, coords: Coord2) -> bool {
        let cell = &self.grid[coords];
        matches!(cell.marker, Marker::Flag | Marker::Unknown) && !cell.visible
    }

    pub fn marker_at(&self, coords: Coord2) -> Marker {
        self.grid[coords].marker
    }

    pub fn is_visible(&self, coords: Coord2) -> bool {
        self.grid[coords].visible
    }

    /// Read-only snapshot of the grid.
    pub fn grid(&self) -> &Array2<Cell> {
        &self.grid
    }

    pub(crate) fn set_revealed(&mut self, coords: Coord2, marker: Marker) {
        let cell = &mut self.grid[coords];
        cell.marker = marker;
        cell.visible = true;
    }

    pub(crate) fn set_marker(&mut self, coords: Coord2, marker: Marker) {
        self.grid[coords].marker = marker;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedMinePlacer;

    fn ground_truth(size: Coord2, mines: Vec<Coord2>) -> GroundTruthBoard {
        let config = GameConfig::new(size, mines.len());
        GroundTruthBoard::generate(&config, FixedMinePlacer::new(mines))
    }

    #[test]
    fn adjacency_counts_cover_the_full_neighborhood() {
        // Single mine in the middle of a 3x3 board: every other cell touches it.
        let board = ground_truth((3, 3), vec![(1, 1)]);

        assert_eq!(board.marker_at((1, 1)), Marker::Mine);
        for x in 0..3 {
            for y in 0..3 {
                if (x, y) != (1, 1) {
                    assert_eq!(board.marker_at((x, y)), Marker::Adjacent(1));
                }
            }
        }
    }

    #[test]
    fn zero_adjacency_cells_stay_clear() {
        let board = ground_truth((4, 1), vec![(0, 0)]);

        assert_eq!(board.marker_at((1, 0)), Marker::Adjacent(1));
        assert_eq!(board.marker_at((2, 0)), Marker::Clear);
        assert_eq!(board.marker_at((3, 0)), Marker::Clear);
    }

    #[test]
    fn surviving_cell_counts_all_three_mines() {
        let board = ground_truth((2, 2), vec![(0, 0), (1, 0), (0, 1)]);
        assert_eq!(board.marker_at((1, 1)), Marker::Adjacent(3));
        assert_eq!(board.mine_count(), 3);
    }

    #[test]
    fn visible_board_starts_all_unknown() {
        let board = VisibleBoard::new(&GameConfig::new((3, 2), 1));
        for cell in board.grid() {
            assert_eq!(cell.marker, Marker::Unknown);
            assert!(!cell.visible);
        }
    }

    #[test]
    fn flagged_cells_are_not_revealable_but_stay_flaggable() {
        let mut board = VisibleBoard::new(&GameConfig::new((2, 2), 1));

        assert!(board.is_revealable((0, 0)));
        assert!(board.is_flaggable((0, 0)));

        board.set_marker((0, 0), Marker::Flag);
        assert!(!board.is_revealable((0, 0)));
        assert!(board.is_flaggable((0, 0)));
    }

    #[test]
    fn revealed_cells_accept_no_further_moves() {
        let mut board = VisibleBoard::new(&GameConfig::new((2, 2), 1));
        board.set_revealed((1, 1), Marker::Adjacent(1));

        assert!(!board.is_revealable((1, 1)));
        assert!(!board.is_flaggable((1, 1)));
    }
}
