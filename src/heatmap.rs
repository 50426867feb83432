//! Static ship-occupancy prior used while hunting: a radially symmetric
//! bump peaking at the board center and decaying toward edges and corners,
//! with a mild secondary ripple by (row+col) parity. Weights only ever
//! decrease (to zero); nothing raises them back.

use crate::common::Coord;

/// Reference 10×10 weight table. Tuned constants; targeting statistics
/// depend on these exact values.
pub const REFERENCE_WEIGHTS: [[f64; 10]; 10] = [
    [8.0, 11.5, 14.3, 15.9, 16.7, 16.7, 15.9, 14.3, 11.5, 8.0],
    [11.5, 14.3, 16.6, 17.8, 18.4, 18.4, 17.8, 16.6, 14.3, 11.5],
    [14.3, 16.6, 18.4, 19.4, 19.9, 19.9, 19.4, 18.4, 16.6, 14.3],
    [15.9, 17.8, 19.4, 20.3, 20.8, 20.8, 20.3, 19.4, 17.8, 15.9],
    [16.7, 18.4, 19.9, 20.8, 21.4, 21.4, 20.8, 19.9, 18.4, 16.7],
    [16.7, 18.4, 19.9, 20.8, 21.4, 21.4, 20.8, 19.9, 18.4, 16.7],
    [15.9, 17.8, 19.4, 20.3, 20.8, 20.8, 20.3, 19.4, 17.8, 15.9],
    [14.3, 16.6, 18.4, 19.4, 19.9, 19.9, 19.4, 18.4, 16.6, 14.3],
    [11.5, 14.3, 16.6, 17.8, 18.4, 18.4, 17.8, 16.6, 14.3, 11.5],
    [8.0, 11.5, 14.3, 15.9, 16.7, 16.7, 15.9, 14.3, 11.5, 8.0],
];

/// Per-instance hunting prior over an n×n board.
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    weights: Vec<f64>,
    size: usize,
}

impl Heatmap {
    /// The reference 10×10 prior.
    pub fn reference() -> Self {
        let weights = REFERENCE_WEIGHTS.iter().flatten().copied().collect();
        Self { weights, size: 10 }
    }

    /// A flat prior for non-standard board sizes.
    pub fn uniform(size: usize) -> Self {
        Self {
            weights: vec![1.0; size * size],
            size,
        }
    }

    /// Build from a row-major table. Weights must be non-negative.
    pub fn from_table(size: usize, weights: Vec<f64>) -> Self {
        assert_eq!(weights.len(), size * size);
        debug_assert!(weights.iter().all(|&w| w >= 0.0));
        Self { weights, size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn weight_at(&self, coord: Coord) -> f64 {
        self.weights[coord.row * self.size + coord.col]
    }

    /// Zero the weight at `coord`. Idempotent; zero is absorbing.
    pub fn zero_at(&mut self, coord: Coord) {
        self.weights[coord.row * self.size + coord.col] = 0.0;
    }
}
