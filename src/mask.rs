//! Runtime-sized cell masks for square boards.
//!
//! An `N×N` grid of flags packed into a vector of unsigned blocks. The board
//! dimension is a construction-time value, so the mask carries its size
//! instead of a const generic. Basic accessors and a set-bit iterator are
//! provided.

use alloc::{vec, vec::Vec};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by mask operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// Row or column index is out of bounds [0..size).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A square bit grid stored in blocks of the unsigned integer `T`.
#[derive(Clone, PartialEq, Eq)]
pub struct CellMask<T = u64>
where
    T: PrimInt + Unsigned + Zero,
{
    size: usize,
    blocks: Vec<T>,
}

/// Block width used by the board.
pub type Mask = CellMask<u64>;

impl<T> CellMask<T>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bits_per_block() -> usize {
        mem::size_of::<T>() * 8
    }

    /// Create an empty mask for a `size×size` board.
    pub fn new(size: usize) -> Self {
        let bits = size * size;
        let bpb = Self::bits_per_block();
        CellMask {
            size,
            blocks: vec![T::zero(); (bits + bpb - 1) / bpb],
        }
    }

    /// Edge length of the board this mask covers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of set cells.
    pub fn count_ones(&self) -> usize {
        self.blocks.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Returns true if no cells are set.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| b.is_zero())
    }

    /// Gets the flag at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, MaskError> {
        let idx = self.index(row, col)?;
        let bpb = Self::bits_per_block();
        Ok(((self.blocks[idx / bpb] >> (idx % bpb)) & T::one()) != T::zero())
    }

    /// Sets the flag at (row, col).
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), MaskError> {
        let idx = self.index(row, col)?;
        let bpb = Self::bits_per_block();
        self.blocks[idx / bpb] = self.blocks[idx / bpb] | (T::one() << (idx % bpb));
        Ok(())
    }

    /// Clears every flag.
    pub fn clear_all(&mut self) {
        for b in self.blocks.iter_mut() {
            *b = T::zero();
        }
    }

    /// Iterator over the set cells in row-major order.
    pub fn iter_set(&self) -> SetCells<'_, T> {
        SetCells { mask: self, idx: 0 }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, MaskError> {
        if row >= self.size || col >= self.size {
            Err(MaskError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * self.size + col)
        }
    }
}

impl<T> fmt::Debug for CellMask<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellMask<{}x{}>:", self.size, self.size)?;
        for r in 0..self.size {
            for c in 0..self.size {
                let bit = if self.get(r, c).unwrap_or(false) {
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

/// Iterator over the set cells of a mask.
#[derive(Clone, Copy)]
pub struct SetCells<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    mask: &'a CellMask<T>,
    idx: usize,
}

impl<'a, T> Iterator for SetCells<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let bpb = CellMask::<T>::bits_per_block();
        while self.idx < self.mask.size * self.mask.size {
            let idx = self.idx;
            self.idx += 1;
            if ((self.mask.blocks[idx / bpb] >> (idx % bpb)) & T::one()) != T::zero() {
                return Some((idx / self.mask.size, idx % self.mask.size));
            }
        }
        None
    }
}
