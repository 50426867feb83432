//! A square bit mask with a runtime side length, packed into a single
//! unsigned integer. Used by [`crate::Board`] to track ship occupancy and
//! strike history without per-cell allocations.

use core::fmt;
use core::mem;
use core::ops::{BitAnd, BitOr};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bit grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Requested side length n would need n*n bits, more than `T` holds.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is outside [0..n).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: n*n={} exceeds capacity {}", n * n, capacity)
            }
            GridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// An n×n bit grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    n: usize,
}

impl<T> BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create an empty grid of side `n`, checking that it fits in `T`.
    pub fn new(n: usize) -> Result<Self, GridError> {
        let capacity = mem::size_of::<T>() * 8;
        if n * n > capacity {
            Err(GridError::SizeTooLarge { n, capacity })
        } else {
            Ok(BitGrid { bits: T::zero(), n })
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.check_bounds(row, col)?;
        let idx = row * self.n + col;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        let idx = row * self.n + col;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        let idx = row * self.n + col;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    /// Returns true if any bit is set in both grids.
    pub fn intersects(&self, other: &Self) -> bool {
        debug_assert_eq!(self.n, other.n);
        (self.bits & other.bits) != T::zero()
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= self.n || col >= self.n {
            Err(GridError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    /// Iterator over the set bits as (row, col) pairs, row-major.
    pub fn iter_set(&self) -> SetBits<'_, T> {
        SetBits { grid: self, idx: 0 }
    }
}

impl<T> fmt::Debug for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid({}×{}):", self.n, self.n)?;
        for r in 0..self.n {
            for c in 0..self.n {
                let bit = if ((self.bits >> (r * self.n + c)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a [`BitGrid`].
#[derive(Clone, Copy)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    grid: &'a BitGrid<T>,
    idx: usize,
}

impl<'a, T> Iterator for SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.grid.n;
        while self.idx < n * n {
            let idx = self.idx;
            self.idx += 1;
            if ((self.grid.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / n, idx % n));
            }
        }
        None
    }
}

impl<T> BitAnd for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        debug_assert_eq!(self.n, rhs.n);
        BitGrid {
            bits: self.bits & rhs.bits,
            n: self.n,
        }
    }
}

impl<T> BitOr for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        debug_assert_eq!(self.n, rhs.n);
        BitGrid {
            bits: self.bits | rhs.bits,
            n: self.n,
        }
    }
}
