#[cfg(feature = "std")]
use thiserror::Error;

/// Word buffer errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, PartialEq, Eq)]
pub enum WordBufError {
    /// Out-of-bounds access
    #[cfg_attr(feature = "std", error("Index {0} out of bounds"))]
    OutOfBounds(usize),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for WordBufError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WordBufError::OutOfBounds(i) => write!(f, "Index {} out of bounds", i),
        }
    }
}
