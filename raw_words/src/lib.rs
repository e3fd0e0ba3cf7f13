#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod buffer;
pub mod error;

pub use buffer::WordBuf;
pub use error::WordBufError;
