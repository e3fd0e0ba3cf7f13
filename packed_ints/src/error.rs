#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, PartialEq, Eq)]
pub enum PackedIntsError {
    #[cfg_attr(
        feature = "std",
        error("Bit width N must be in the range 1..=63, got {0}")
    )]
    InvalidBitWidth(usize),

    #[cfg_attr(feature = "std", error("Value {0} does not fit in {1} bits"))]
    ValueOverflow(u64, usize),

    #[cfg_attr(feature = "std", error("Index {0} is out of bounds for length {1}"))]
    IndexOutOfBounds(usize, usize),

    #[cfg_attr(feature = "std", error("container is empty"))]
    EmptyContainer,

    #[cfg_attr(feature = "std", error("cursor belongs to a different container"))]
    ForeignCursor,

    #[cfg_attr(
        feature = "std",
        error("cursor was invalidated by a reallocation or element shift")
    )]
    StaleCursor,

    #[cfg_attr(feature = "std", error("erase range runs backwards"))]
    ReversedRange,

    #[cfg_attr(feature = "std", error("division by zero"))]
    DivisionByZero,
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for PackedIntsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PackedIntsError::InvalidBitWidth(n) => {
                write!(f, "Bit width N must be in the range 1..=63, got {}", n)
            }
            PackedIntsError::ValueOverflow(v, n) => {
                write!(f, "Value {} does not fit in {} bits", v, n)
            }
            PackedIntsError::IndexOutOfBounds(i, l) => {
                write!(f, "Index {} is out of bounds for length {}", i, l)
            }
            PackedIntsError::EmptyContainer => write!(f, "container is empty"),
            PackedIntsError::ForeignCursor => {
                write!(f, "cursor belongs to a different container")
            }
            PackedIntsError::StaleCursor => {
                write!(f, "cursor was invalidated by a reallocation or element shift")
            }
            PackedIntsError::ReversedRange => write!(f, "erase range runs backwards"),
            PackedIntsError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}
