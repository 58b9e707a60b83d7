//! A square bitboard whose side length is chosen at runtime.
//!
//! The type is `no_std` friendly and avoids heap allocations. Boards are
//! represented as a `size×size` grid packed into an unsigned integer `T`,
//! row-major, so a board fits as long as `size * size <= T::BITS`.

use core::ops::{BitAnd, Not};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is out of bounds [0..size).
    IndexOutOfBounds { row: usize, col: usize, size: usize },
    /// Raw bits set beyond the `size*size` cells of the board.
    StrayBits { size: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N*N={} exceeds T::BITS={}", n * n, capacity)
            }
            BitBoardError::IndexOutOfBounds { row, col, size } => {
                write!(f, "IndexOutOfBounds: row={}, col={}, size={}", row, col, size)
            }
            BitBoardError::StrayBits { size } => {
                write!(f, "StrayBits: bits set outside the {}x{} board", size, size)
            }
        }
    }
}

/// Largest side length whose `size * size` cells fit into `T`.
pub fn max_size<T: PrimInt>() -> usize {
    side_for_capacity(mem::size_of::<T>() * 8)
}

/// Largest `n` with `n * n <= capacity`.
pub fn side_for_capacity(capacity: usize) -> usize {
    let mut n = 0;
    while (n + 1) * (n + 1) <= capacity {
        n += 1;
    }
    n
}

/// A square bitboard of runtime side length stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct BitBoard<T = u128>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    size: usize,
}

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn mask(&self) -> T {
        let cells = self.cells();
        if cells == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << cells) - T::one()
        }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if size*size > T::BITS.
    pub fn try_new(size: usize) -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        match size.checked_mul(size) {
            Some(cells) if cells <= capacity => Ok(BitBoard {
                bits: T::zero(),
                size,
            }),
            _ => Err(BitBoardError::SizeTooLarge { n: size, capacity }),
        }
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size * size`).
    #[inline]
    pub fn cells(&self) -> usize {
        self.size * self.size
    }

    /// Returns the number of set bits (occupied cells).
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Returns true if every cell of the board is set.
    pub fn is_full(&self) -> bool {
        self.bits == self.mask()
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        let idx = self.index(row, col)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = self.index(row, col)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = self.index(row, col)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    /// Rebuild a board from its raw bits, rejecting bits past the last cell.
    pub fn from_bits(size: usize, bits: T) -> Result<Self, BitBoardError> {
        let mut board = Self::try_new(size)?;
        if bits & !board.mask() != T::zero() {
            return Err(BitBoardError::StrayBits { size });
        }
        board.bits = bits;
        Ok(board)
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BitBoardError> {
        if row >= self.size || col >= self.size {
            Err(BitBoardError::IndexOutOfBounds {
                row,
                col,
                size: self.size,
            })
        } else {
            Ok(row * self.size + col)
        }
    }

    /// Creates a bitboard from an iterator over `(row, col)` positions.
    pub fn from_iter<I>(size: usize, iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::try_new(size)?;
        for (r, c) in iter {
            board.set(r, c)?;
        }
        Ok(board)
    }

    /// Iterator over the set bits of the board, in row-major order.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<T> {
        SetBits {
            board: *self,
            idx: 0,
        }
    }
}

#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawBitBoard<T> {
    bits: T,
    size: usize,
}

// Decoded boards go through `from_bits`, so the size and bit invariants hold
// for anything read back from storage.
#[cfg(feature = "std")]
impl<'de, T> serde::Deserialize<'de> for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawBitBoard::<T>::deserialize(deserializer)?;
        Self::from_bits(raw.size, raw.bits).map_err(serde::de::Error::custom)
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}>:", any::type_name::<T>(), self.size)?;
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

/// Iterator over the set bits of a bitboard. Holds its own copy of the board.
#[derive(Clone, Copy)]
pub struct SetBits<T>
where
    T: PrimInt + Unsigned + Zero,
{
    board: BitBoard<T>,
    idx: usize,
}

impl<T> Iterator for SetBits<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let n = self.board.size;
        while self.idx < n * n {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / n, idx % n));
            }
        }
        None
    }
}

/// Bitwise AND for intersecting two bitboards of the same side length.
impl<T> BitAnd for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        debug_assert_eq!(self.size, rhs.size);
        BitBoard {
            bits: self.bits & rhs.bits,
            size: self.size,
        }
    }
}

/// Bitwise NOT for inverting a bitboard (within board bounds).
impl<T> Not for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        let mask = self.mask();
        BitBoard {
            bits: !self.bits & mask,
            size: self.size,
        }
    }
}
