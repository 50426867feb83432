//! The automated opponent: fleet placement by rejection sampling, and a
//! hunt/track strike selector over a heatmap prior with stride pruning.
//!
//! The engine owns only its heatmap and target queue. Board and fleet state
//! belong to the match controller and are passed in as read-only views each
//! call; the engine never mutates them. Selection logic reads cells only
//! through [`ProbeState::is_unstruck`], so an untargeted cell that secretly
//! holds a ship is indistinguishable from open water.

use std::collections::VecDeque;

use log::{debug, trace};
use rand::Rng;

use crate::common::{
    Coord, EngineError, Orientation, Placement, ProbeState, ShipStatus, StrikeOutcome,
};
use crate::config::GameRules;
use crate::heatmap::Heatmap;
use crate::sampler::weighted_choice;

/// Read-only view of the opponent's board, one probe state per cell.
pub trait TargetView {
    fn probe(&self, coord: Coord) -> ProbeState;
}

/// Read-only vacancy view of the engine's own board during fleet setup.
pub trait PlacementView {
    fn is_vacant(&self, coord: Coord) -> bool;
}

/// Up, down, left, right.
const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Retry budget for placement sampling. The reference loops unboundedly;
/// the cap turns a pathological board into an explicit error instead of a
/// hang.
const MAX_PLACEMENT_DRAWS: usize = 10_000;

/// One side's automated player.
pub struct Opponent {
    rules: GameRules,
    heatmap: Heatmap,
    /// Queued follow-up strikes around confirmed hits, drained FIFO.
    targets: VecDeque<Coord>,
}

impl Opponent {
    /// Engine with the reference prior on classic boards, flat otherwise.
    pub fn new(rules: GameRules) -> Self {
        let heatmap = if rules.board_size() == 10 {
            Heatmap::reference()
        } else {
            Heatmap::uniform(rules.board_size())
        };
        Self::with_heatmap(rules, heatmap)
    }

    /// Engine with an injected prior. The heatmap must match the board size.
    pub fn with_heatmap(rules: GameRules, heatmap: Heatmap) -> Self {
        assert_eq!(heatmap.size(), rules.board_size());
        Self {
            rules,
            heatmap,
            targets: VecDeque::new(),
        }
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn heatmap(&self) -> &Heatmap {
        &self.heatmap
    }

    /// Pending follow-up targets, front first.
    pub fn queued_targets(&self) -> impl Iterator<Item = Coord> + '_ {
        self.targets.iter().copied()
    }

    /// Propose a legal placement for a ship of `ship_size` by drawing an
    /// origin and orientation uniformly and redrawing until the ship fits
    /// on vacant cells.
    pub fn propose_placement<R, B>(
        &self,
        rng: &mut R,
        ship_size: usize,
        own_board: &B,
    ) -> Result<Placement, EngineError>
    where
        R: Rng + ?Sized,
        B: PlacementView,
    {
        let n = self.rules.board_size();
        for _ in 0..MAX_PLACEMENT_DRAWS {
            let placement = Placement {
                row: rng.random_range(0..n),
                col: rng.random_range(0..n),
                orientation: if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                },
            };
            let fits = (0..ship_size).all(|i| {
                let (r, c) = placement.cell(i);
                r < n && c < n && own_board.is_vacant(Coord::new(r, c))
            });
            if fits {
                return Ok(placement);
            }
        }
        Err(EngineError::PlacementFailed { size: ship_size })
    }

    /// Choose the next strike coordinate.
    ///
    /// Track mode (queue non-empty): pop the oldest queued follow-up.
    /// Hunt mode: weighted draw over unstruck cells satisfying the stride
    /// condition `(row+col) % L == 0` for the smallest surviving ship
    /// length `L`, falling back to all unstruck cells once every
    /// stride-aligned cell has been resolved.
    ///
    /// The returned coordinate is always in-bounds and unstruck; anything
    /// else is an internal-consistency fault reported as a hard error.
    pub fn select_strike<R, B>(
        &mut self,
        rng: &mut R,
        board: &B,
        fleet: &[ShipStatus],
    ) -> Result<Coord, EngineError>
    where
        R: Rng + ?Sized,
        B: TargetView,
    {
        if let Some(coord) = self.targets.pop_front() {
            debug!("track: striking queued target {}", coord);
            return self.check_selection(board, coord);
        }

        let n = self.rules.board_size();
        let stride = smallest_survivor(fleet).ok_or(EngineError::NoTargetsRemaining)?;

        let mut candidates = Vec::new();
        let mut weights = Vec::new();
        for row in 0..n {
            for col in 0..n {
                let coord = Coord::new(row, col);
                if (row + col) % stride == 0 && board.probe(coord).is_unstruck() {
                    candidates.push(coord);
                    weights.push(self.heatmap.weight_at(coord));
                }
            }
        }
        if candidates.is_empty() {
            // Late game: every stride-aligned cell is already resolved.
            trace!("hunt: stride {} exhausted, widening to all cells", stride);
            for row in 0..n {
                for col in 0..n {
                    let coord = Coord::new(row, col);
                    if board.probe(coord).is_unstruck() {
                        candidates.push(coord);
                        weights.push(self.heatmap.weight_at(coord));
                    }
                }
            }
        }
        if candidates.is_empty() {
            return Err(EngineError::NoTargetsRemaining);
        }

        debug!(
            "hunt: stride {} over {} candidate cells",
            stride,
            candidates.len()
        );
        let coord = weighted_choice(&candidates, &weights, rng);
        self.check_selection(board, coord)
    }

    fn check_selection<B>(&self, board: &B, coord: Coord) -> Result<Coord, EngineError>
    where
        B: TargetView,
    {
        let n = self.rules.board_size();
        if coord.row >= n || coord.col >= n {
            return Err(EngineError::OutOfBoundsSelection { coord });
        }
        if !board.probe(coord).is_unstruck() {
            return Err(EngineError::StaleSelection { coord });
        }
        Ok(coord)
    }

    /// Digest the resolved outcome of the strike at `coord`. Must be called
    /// exactly once per strike, after the board reflects the resolution and
    /// before the next selection.
    pub fn react_to_outcome<B>(&mut self, board: &B, coord: Coord, outcome: StrikeOutcome)
    where
        B: TargetView,
    {
        match outcome {
            StrikeOutcome::Hit => self.chase_from(board, coord),
            StrikeOutcome::Miss => self.suppress_neighbors(board, coord),
            StrikeOutcome::Destroyed => {
                // Remaining queued cells belonged to the chase of a ship
                // that no longer exists.
                debug!("sank a ship at {}, returning to hunt", coord);
                self.targets.clear();
            }
        }
    }

    /// Rebuild the target queue around a fresh hit. Unexplored branches
    /// from earlier ambiguous hits are discarded every time: once a second
    /// hit fixes a line, only that line is worth pursuing.
    fn chase_from<B>(&mut self, board: &B, coord: Coord)
    where
        B: TargetView,
    {
        self.targets.clear();
        let n = self.rules.board_size();

        let hit_at = |dr: isize, dc: isize| {
            coord
                .offset(dr, dc, n)
                .is_some_and(|c| board.probe(c) == ProbeState::Hit)
        };
        let vertical = hit_at(-1, 0) || hit_at(1, 0);
        let horizontal = hit_at(0, -1) || hit_at(0, 1);

        if vertical || horizontal {
            if vertical {
                self.walk_axis(board, coord, (1, 0));
                self.walk_axis(board, coord, (-1, 0));
            }
            if horizontal {
                self.walk_axis(board, coord, (0, 1));
                self.walk_axis(board, coord, (0, -1));
            }
        } else {
            // First hit on this ship: direction unknown, probe all sides.
            for (dr, dc) in ORTHOGONAL {
                if let Some(c) = coord.offset(dr, dc, n) {
                    if board.probe(c).is_unstruck() {
                        self.targets.push_back(c);
                    }
                }
            }
        }
        trace!("chase from {}: {} queued targets", coord, self.targets.len());
    }

    /// Walk outward from `from` one step at a time, stepping over earlier
    /// hits on the same line, and queue the first unstruck cell. A miss, a
    /// destroyed cell or the board edge ends the direction empty-handed.
    fn walk_axis<B>(&mut self, board: &B, from: Coord, (dr, dc): (isize, isize))
    where
        B: TargetView,
    {
        let n = self.rules.board_size();
        let mut cur = from;
        while let Some(next) = cur.offset(dr, dc, n) {
            match board.probe(next) {
                s if s.is_unstruck() => {
                    self.targets.push_back(next);
                    return;
                }
                ProbeState::Miss | ProbeState::Destroyed => return,
                _ => cur = next,
            }
        }
    }

    /// Heuristic miss reaction: zero the prior beside the splash. Not a
    /// proof of vacancy — it occasionally suppresses a real ship cell.
    fn suppress_neighbors<B>(&mut self, board: &B, coord: Coord)
    where
        B: TargetView,
    {
        let n = self.rules.board_size();
        for (dr, dc) in ORTHOGONAL {
            if let Some(c) = coord.offset(dr, dc, n) {
                if board.probe(c).is_unstruck() {
                    self.heatmap.zero_at(c);
                }
            }
        }
    }
}

/// Length of the smallest ship still afloat, `None` once all are sunk.
fn smallest_survivor(fleet: &[ShipStatus]) -> Option<usize> {
    fleet
        .iter()
        .filter(|s| !s.destroyed)
        .map(|s| s.size)
        .min()
}
