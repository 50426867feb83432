//! Match-controller-side board: validated ship placement, strike
//! resolution and probe-state derivation. The opponent engine only ever
//! reads this through the [`TargetView`] / [`PlacementView`] seams.

use log::trace;

use crate::common::{BoardError, Coord, Placement, ProbeState, ShipStatus, StrikeOutcome};
use crate::config::GameRules;
use crate::mask::BitGrid;
use crate::opponent::{PlacementView, TargetView};

type Mask = BitGrid<u128>;

#[derive(Debug, Clone, Copy)]
struct PlacedShip {
    mask: Mask,
    size: usize,
    sunk: bool,
}

/// One side's board: ship occupancy plus strike history.
#[derive(Debug, Clone)]
pub struct Board {
    rules: GameRules,
    ships: Vec<Option<PlacedShip>>,
    ship_map: Mask,
    hits: Mask,
    misses: Mask,
}

impl Board {
    /// Create an empty board for the given rules.
    pub fn new(rules: GameRules) -> Result<Self, BoardError> {
        let empty = Mask::new(rules.board_size())?;
        Ok(Board {
            ships: vec![None; rules.num_ships()],
            rules,
            ship_map: empty,
            hits: empty,
            misses: empty,
        })
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Place the `ship_index`-th ship of the fleet.
    pub fn place(&mut self, ship_index: usize, placement: Placement) -> Result<(), BoardError> {
        let size = *self
            .rules
            .ship_sizes()
            .get(ship_index)
            .ok_or(BoardError::InvalidIndex)?;
        if self.ships[ship_index].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let n = self.rules.board_size();
        let mut mask = Mask::new(n)?;
        for i in 0..size {
            let (r, c) = placement.cell(i);
            if r >= n || c >= n {
                return Err(BoardError::PlacementOutOfBounds);
            }
            mask.set(r, c)?;
        }
        if self.ship_map.intersects(&mask) {
            return Err(BoardError::PlacementOverlaps);
        }
        self.ship_map = self.ship_map | mask;
        self.ships[ship_index] = Some(PlacedShip {
            mask,
            size,
            sunk: false,
        });
        Ok(())
    }

    /// Resolve a strike at `coord`, marking the cell and reporting the
    /// outcome. Striking a resolved cell is a caller error.
    pub fn strike(&mut self, coord: Coord) -> Result<StrikeOutcome, BoardError> {
        let (row, col) = (coord.row, coord.col);
        if self.hits.get(row, col)? || self.misses.get(row, col)? {
            return Err(BoardError::AlreadyStruck);
        }
        if !self.ship_map.get(row, col)? {
            self.misses.set(row, col)?;
            trace!("strike {}: miss", coord);
            return Ok(StrikeOutcome::Miss);
        }
        self.hits.set(row, col)?;
        for ship in self.ships.iter_mut().flatten() {
            if ship.mask.get(row, col).unwrap_or(false) {
                if (ship.mask & self.hits).count_ones() == ship.size {
                    ship.sunk = true;
                    trace!("strike {}: sank a ship of size {}", coord, ship.size);
                    return Ok(StrikeOutcome::Destroyed);
                }
                trace!("strike {}: hit", coord);
                return Ok(StrikeOutcome::Hit);
            }
        }
        Err(BoardError::UnknownShipHit)
    }

    /// Derive the probe state of one cell. Cells of a sunk ship read as
    /// `Destroyed`, other struck ship cells as `Hit`.
    pub fn probe_state(&self, coord: Coord) -> ProbeState {
        let (row, col) = (coord.row, coord.col);
        if self.hits.get(row, col).unwrap_or(false) {
            for ship in self.ships.iter().flatten() {
                if ship.mask.get(row, col).unwrap_or(false) {
                    return if ship.sunk {
                        ProbeState::Destroyed
                    } else {
                        ProbeState::Hit
                    };
                }
            }
            ProbeState::Hit
        } else if self.misses.get(row, col).unwrap_or(false) {
            ProbeState::Miss
        } else if self.ship_map.get(row, col).unwrap_or(false) {
            ProbeState::Occupied
        } else {
            ProbeState::Unresolved
        }
    }

    /// Ordered (size, destroyed) records for every ship of the fleet.
    pub fn fleet_status(&self) -> Vec<ShipStatus> {
        self.rules
            .ship_sizes()
            .iter()
            .enumerate()
            .map(|(i, &size)| ShipStatus {
                size,
                destroyed: self.ships[i].map_or(false, |s| s.sunk),
            })
            .collect()
    }

    /// True once every placed ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships
            .iter()
            .all(|s| s.map_or(false, |ship| ship.sunk))
    }

    /// Cells already hit across the board.
    pub fn hit_count(&self) -> usize {
        self.hits.count_ones()
    }
}

impl TargetView for Board {
    fn probe(&self, coord: Coord) -> ProbeState {
        self.probe_state(coord)
    }
}

impl PlacementView for Board {
    fn is_vacant(&self, coord: Coord) -> bool {
        !self.ship_map.get(coord.row, coord.col).unwrap_or(true)
    }
}
