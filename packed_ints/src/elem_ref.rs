//! Proxy references to individual packed elements.
//!
//! No element is byte-aligned, so ordinary references cannot point at one.
//! These proxies stand in for them: a proxy records the element's storage
//! location (word index, bit offset) and decodes or re-encodes on demand.
//!
//! Equality between proxies compares the storage *location*, never the
//! decoded value — two proxies are equal only when they denote the same
//! element of the same container.

use crate::codec;
use crate::container::PackedIntsContainer;
use crate::cursor::BitPos;
use crate::error::PackedIntsError;

type Result<T> = core::result::Result<T, PackedIntsError>;

/// Read-only view of one element's storage location.
///
/// # Examples
///
/// ```
/// use packed_ints::PackedIntsContainer;
///
/// let v = PackedIntsContainer::<5>::from_values(&[8, 9]).unwrap();
/// assert_eq!(v.elem(1).unwrap().get(), 9);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ElemRef<'a, const N: usize> {
    vec: &'a PackedIntsContainer<N>,
    pos: BitPos,
}

impl<'a, const N: usize> ElemRef<'a, N> {
    #[inline]
    pub(crate) fn new(vec: &'a PackedIntsContainer<N>, pos: BitPos) -> Self {
        ElemRef { vec, pos }
    }

    /// Decodes the element.
    #[inline]
    pub fn get(&self) -> u64 {
        codec::read_at::<N>(self.vec.words(), self.pos.word, self.pos.bit as usize)
    }

    /// Element index within the container.
    #[inline]
    pub fn index(&self) -> usize {
        self.pos.index::<N>()
    }
}

impl<'a, const N: usize> PartialEq for ElemRef<'a, N> {
    fn eq(&self, other: &Self) -> bool {
        self.vec.owner_id() == other.vec.owner_id() && self.pos == other.pos
    }
}

/// Mutable view of one element's storage location.
///
/// Writes validate against the element mask; a value that does not fit is
/// reported as [`PackedIntsError::ValueOverflow`], never truncated. The
/// compound operations decode, apply wrapping u64 arithmetic, and re-encode,
/// so an arithmetic result above the mask also fails with `ValueOverflow`
/// and leaves the element unchanged.
///
/// # Examples
///
/// ```
/// use packed_ints::PackedIntsContainer;
///
/// let mut v = PackedIntsContainer::<5>::from_values(&[8, 9]).unwrap();
///
/// let mut e = v.elem_mut(0).unwrap();
/// e.add_assign(3).unwrap();
/// assert_eq!(e.get(), 11);
///
/// // 11 + 30 exceeds the 5-bit mask
/// assert!(e.add_assign(30).is_err());
/// assert_eq!(v.get(0), Some(11));
/// ```
#[derive(Debug)]
pub struct ElemMut<'a, const N: usize> {
    vec: &'a mut PackedIntsContainer<N>,
    pos: BitPos,
}

impl<'a, const N: usize> ElemMut<'a, N> {
    #[inline]
    pub(crate) fn new(vec: &'a mut PackedIntsContainer<N>, pos: BitPos) -> Self {
        ElemMut { vec, pos }
    }

    /// Decodes the element.
    #[inline]
    pub fn get(&self) -> u64 {
        codec::read_at::<N>(self.vec.words(), self.pos.word, self.pos.bit as usize)
    }

    /// Element index within the container.
    #[inline]
    pub fn index(&self) -> usize {
        self.pos.index::<N>()
    }

    /// Re-encodes the element as `value`.
    pub fn set(&mut self, value: u64) -> Result<()> {
        if value > codec::mask::<N>() {
            return Err(PackedIntsError::ValueOverflow(value, N));
        }
        codec::write_at::<N>(self.vec.words_mut(), self.pos.word, self.pos.bit as usize, value);
        Ok(())
    }

    /// Adds `rhs` to the element in place.
    pub fn add_assign(&mut self, rhs: u64) -> Result<()> {
        let val = self.get().wrapping_add(rhs);
        self.set(val)
    }

    /// Subtracts `rhs` from the element in place. Underflow wraps and is
    /// then rejected by the mask check.
    pub fn sub_assign(&mut self, rhs: u64) -> Result<()> {
        let val = self.get().wrapping_sub(rhs);
        self.set(val)
    }

    /// Multiplies the element by `rhs` in place.
    pub fn mul_assign(&mut self, rhs: u64) -> Result<()> {
        let val = self.get().wrapping_mul(rhs);
        self.set(val)
    }

    /// Divides the element by `rhs` in place.
    pub fn div_assign(&mut self, rhs: u64) -> Result<()> {
        let val = self
            .get()
            .checked_div(rhs)
            .ok_or(PackedIntsError::DivisionByZero)?;
        self.set(val)
    }

    /// Increments the element, returning the new value.
    pub fn incr(&mut self) -> Result<u64> {
        self.add_assign(1)?;
        Ok(self.get())
    }

    /// Decrements the element, returning the new value.
    pub fn decr(&mut self) -> Result<u64> {
        self.sub_assign(1)?;
        Ok(self.get())
    }
}

impl<'a, const N: usize> PartialEq for ElemMut<'a, N> {
    fn eq(&self, other: &Self) -> bool {
        self.vec.owner_id() == other.vec.owner_id() && self.pos == other.pos
    }
}
