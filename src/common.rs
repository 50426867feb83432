//! Shared value types and error enums: coordinates, probe states, strike
//! outcomes, fleet status records.

use crate::mask::GridError;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A board coordinate, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Steps by (dr, dc), returning `None` when the result leaves an
    /// n×n board.
    pub fn offset(self, dr: isize, dc: isize, n: usize) -> Option<Coord> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        if row < n && col < n {
            Some(Coord { row, col })
        } else {
            None
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A proposed ship position: origin cell plus orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Placement {
    /// The i-th cell covered by a ship placed here.
    pub fn cell(&self, i: usize) -> (usize, usize) {
        match self.orientation {
            Orientation::Horizontal => (self.row, self.col + i),
            Orientation::Vertical => (self.row + i, self.col),
        }
    }
}

/// Attacker-visible status of one cell on the opponent board.
///
/// `Unresolved` and `Occupied` both mean "not struck yet"; the distinction
/// exists only because the underlying board knows where ships are. Targeting
/// logic must treat the two identically (see [`ProbeState::is_unstruck`]),
/// otherwise the opponent would be peeking through the fog of war.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeState {
    Unresolved,
    Occupied,
    Miss,
    Hit,
    Destroyed,
}

impl ProbeState {
    /// True for cells that are still legal to strike.
    pub fn is_unstruck(self) -> bool {
        matches!(self, ProbeState::Unresolved | ProbeState::Occupied)
    }
}

/// Resolved result of a single strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrikeOutcome {
    /// Damaged a ship without sinking it.
    Hit,
    /// Hit open water.
    Miss,
    /// The strike sank the ship it hit.
    Destroyed,
}

/// One entry of the fleet view handed to the engine: ship length and
/// whether it has been sunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipStatus {
    pub size: usize,
    pub destroyed: bool,
}

/// Errors raised by the opponent engine.
#[derive(Debug, PartialEq, Eq)]
pub enum EngineError {
    /// A selection produced an out-of-bounds coordinate. Indicates a defect
    /// in the candidate filtering itself; never recovered from.
    OutOfBoundsSelection { coord: Coord },
    /// A selection produced a coordinate that was already resolved.
    StaleSelection { coord: Coord },
    /// No unstruck cells remain, or the whole fleet is already sunk.
    NoTargetsRemaining,
    /// Placement sampling exhausted its retry budget.
    PlacementFailed { size: usize },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::OutOfBoundsSelection { coord } => {
                write!(f, "selected out-of-bounds coordinate {}", coord)
            }
            EngineError::StaleSelection { coord } => {
                write!(f, "selected already-resolved coordinate {}", coord)
            }
            EngineError::NoTargetsRemaining => write!(f, "no strikeable cells remain"),
            EngineError::PlacementFailed { size } => {
                write!(f, "unable to place ship of size {}", size)
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Errors returned by [`crate::Board`] operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bit grid error (invalid size or index).
    Grid(GridError),
    /// Ship index is outside the configured fleet.
    InvalidIndex,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Placement runs off the board.
    PlacementOutOfBounds,
    /// Placement overlaps another ship.
    PlacementOverlaps,
    /// This cell has already been struck.
    AlreadyStruck,
    /// A hit landed on a cell no placed ship covers.
    UnknownShipHit,
}

impl From<GridError> for BoardError {
    fn from(err: GridError) -> Self {
        BoardError::Grid(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Grid(e) => write!(f, "grid error: {}", e),
            BoardError::InvalidIndex => write!(f, "ship index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "ship is already placed on the board"),
            BoardError::PlacementOutOfBounds => write!(f, "ship placement is out of bounds"),
            BoardError::PlacementOverlaps => {
                write!(f, "ship placement overlaps with another ship")
            }
            BoardError::AlreadyStruck => write!(f, "cell was already struck"),
            BoardError::UnknownShipHit => write!(f, "hit cell not covered by any ship"),
        }
    }
}

impl std::error::Error for BoardError {}
