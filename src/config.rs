//! Game rules: board dimensions and fleet composition. Kept as a value so
//! tests can run smaller boards and fleets.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    board_size: usize,
    ship_sizes: Vec<usize>,
}

impl GameRules {
    pub fn new(board_size: usize, ship_sizes: Vec<usize>) -> Self {
        debug_assert!(board_size > 0);
        debug_assert!(ship_sizes.iter().all(|&s| s > 0 && s <= board_size));
        Self {
            board_size,
            ship_sizes,
        }
    }

    /// The classic game: 10×10 board, ships of length 5, 4, 3, 3 and 2.
    pub fn classic() -> Self {
        Self::new(10, vec![5, 4, 3, 3, 2])
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Fleet composition, in placement order.
    pub fn ship_sizes(&self) -> &[usize] {
        &self.ship_sizes
    }

    pub fn num_ships(&self) -> usize {
        self.ship_sizes.len()
    }

    pub fn total_ship_cells(&self) -> usize {
        self.ship_sizes.iter().sum()
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self::classic()
    }
}
