use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{
    Cell, CellCount, Coord2, GameConfig, GameError, GroundTruthBoard, Marker, MinePlacer,
    NeighborIterExt, RandomMinePlacer, Result, VisibleBoard,
};

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    /// Indicates the game has ended and no moves can be made anymore.
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
}

impl RevealOutcome {
    /// Whether this outcome mutated the board.
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Toggled,
}

impl FlagOutcome {
    /// Whether this outcome mutated the board.
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Toggled => true,
        }
    }
}

/// Orchestrates the ground-truth and visible boards: resolves reveal and flag
/// moves, runs the blank-region flood fill, and tracks win/loss.
///
/// The engine is the sole mutator of both boards. Rejected moves are normal
/// outcomes (`NoChange`); errors are reserved for out-of-bounds coordinates
/// and moves made after the game has ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    config: GameConfig,
    mine_board: GroundTruthBoard,
    play_board: VisibleBoard,
    flagged_mines: CellCount,
    state: GameState,
}

impl GameEngine {
    /// Clamps `mines` to `width * height - 1` and builds both boards with a
    /// seeded random mine layout.
    pub fn new(width: usize, height: usize, mines: CellCount, seed: u64) -> Self {
        Self::with_placer(
            GameConfig::new((width, height), mines),
            RandomMinePlacer::new(seed),
        )
    }

    /// Builds a game over an injected placement strategy. `config` must
    /// already be clamped (use `GameConfig::new`).
    pub fn with_placer(config: GameConfig, placer: impl MinePlacer) -> Self {
        let mine_board = GroundTruthBoard::generate(&config, placer);
        if mine_board.mine_count() != config.mines {
            log::warn!(
                "Placer produced {} mines, config requested {}",
                mine_board.mine_count(),
                config.mines
            );
        }

        Self {
            config,
            mine_board,
            play_board: VisibleBoard::new(&config),
            flagged_mines: 0,
            state: Default::default(),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn total_mines(&self) -> CellCount {
        self.mine_board.mine_count()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn still_playing(&self) -> bool {
        !self.state.is_finished()
    }

    /// Pure query; the winning transition itself happens inside `flag`.
    pub fn victory(&self) -> bool {
        self.state == GameState::Won
    }

    /// Number of true mines currently flagged.
    pub fn flagged_count(&self) -> CellCount {
        self.flagged_mines
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.play_board.grid()[coords]
    }

    /// Reveals a cell. A clear cell opens its whole blank region via flood
    /// fill, a numbered cell is revealed alone, and a mine ends the game.
    /// Already-revealed or flagged cells are rejected with `NoChange`.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.validate_coords(coords)?;
        self.check_playing()?;

        if !self.play_board.is_revealable(coords) {
            return Ok(NoChange);
        }

        Ok(match self.mine_board.marker_at(coords) {
            Marker::Mine => {
                self.play_board.set_revealed(coords, Marker::Mine);
                self.state = GameState::Lost;
                log::debug!("Mine hit at {:?}", coords);
                HitMine
            }
            Marker::Clear => {
                self.flood_fill(coords);
                Revealed
            }
            marker @ Marker::Adjacent(_) => {
                self.play_board.set_revealed(coords, marker);
                Revealed
            }
            // Never stored on the ground-truth board.
            Marker::Unknown | Marker::Flag => NoChange,
        })
    }

    /// Opens the maximal connected region of clear cells around `start` with
    /// an explicit worklist; visibility doubles as the visited set.
    ///
    /// A reached cell whose ground truth is not clear stops the fill there
    /// and stays hidden: numbered boundary cells must be revealed one by one.
    fn flood_fill(&mut self, start: Coord2) {
        let mut to_visit = vec![start];

        while let Some(coords) = to_visit.pop() {
            if self.play_board.is_visible(coords) {
                continue;
            }
            if self.mine_board.marker_at(coords) != Marker::Clear {
                continue;
            }

            self.play_board.set_revealed(coords, Marker::Clear);
            log::trace!("Flood fill opened {:?}", coords);
            to_visit.extend(self.play_board.grid().iter_neighbors(coords));
        }
    }

    /// Toggles a flag. The flagged-mine counter moves only when the toggled
    /// cell is a true mine; flags on safe cells are accepted but never
    /// counted. Flagging all mines wins the game.
    pub fn flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_playing()?;

        if !self.play_board.is_flaggable(coords) {
            return Ok(FlagOutcome::NoChange);
        }

        let true_mine = self.mine_board.marker_at(coords) == Marker::Mine;
        match self.play_board.marker_at(coords) {
            Marker::Unknown => {
                if true_mine {
                    self.flagged_mines += 1;
                }
                self.play_board.set_marker(coords, Marker::Flag);
            }
            Marker::Flag => {
                if true_mine {
                    self.flagged_mines -= 1;
                }
                self.play_board.set_marker(coords, Marker::Unknown);
            }
            _ => return Ok(FlagOutcome::NoChange),
        }

        self.update_victory();
        Ok(FlagOutcome::Toggled)
    }

    /// Evaluate-and-transition step run after every successful flag toggle.
    fn update_victory(&mut self) {
        if self.flagged_mines == self.mine_board.mine_count() {
            self.state = GameState::Won;
            log::debug!("All {} mines flagged, game won", self.flagged_mines);
        }
    }

    /// Exports a board snapshot. Without xray this is the visible board; with
    /// xray every flag is first copied onto the ground-truth grid (a permanent
    /// end-of-game overlay) and the ground-truth board is returned.
    pub fn board_state(&mut self, xray: bool) -> &Array2<Cell> {
        if !xray {
            return self.play_board.grid();
        }

        let flags: Vec<Coord2> = self
            .play_board
            .grid()
            .iter()
            .filter(|cell| cell.marker == Marker::Flag)
            .map(|cell| (cell.x, cell.y))
            .collect();
        for coords in flags {
            self.mine_board.grid_mut()[coords].marker = Marker::Flag;
        }
        self.mine_board.grid()
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (width, height) = self.config.size;
        if coords.0 < width && coords.1 < height {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}
