use core::fmt;
use serde::{Deserialize, Serialize};

use crate::Coord;

/// Symbolic content of a cell.
///
/// `Adjacent` values only ever appear on the ground-truth board and carry a
/// count in `1..=8`; zero-adjacency cells stay `Clear`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    Mine,
    Clear,
    Unknown,
    Flag,
    Adjacent(u8),
}

impl Marker {
    /// Display alphabet: `#` mine, space clear, `.` unknown, `F` flag, digit otherwise.
    pub const fn symbol(self) -> char {
        match self {
            Self::Mine => '#',
            Self::Clear => ' ',
            Self::Unknown => '.',
            Self::Flag => 'F',
            Self::Adjacent(count) => (b'0' + count) as char,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Smallest unit of both boards: position, marker, and a visibility flag.
/// Pure storage, mutated in place by the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: Coord,
    pub y: Coord,
    pub marker: Marker,
    pub visible: bool,
}

impl Cell {
    pub const fn new(x: Coord, y: Coord, marker: Marker) -> Self {
        Self {
            x,
            y,
            marker,
            visible: false,
        }
    }
}
