//! # packed_ints
//!
//! A `no_std` compatible growable array of N-bit unsigned integers, packed
//! back to back into 64-bit words with no per-element padding.
//!
//! ```rust
//! use packed_ints::PackedIntsContainer;
//!
//! // Store 12-bit values (0-4095)
//! let mut v = PackedIntsContainer::<12>::new().expect("failed to create container");
//! v.push(0xABC).unwrap();
//! v.push(0x123).unwrap();
//!
//! assert_eq!(v.get(0), Some(0xABC));
//! assert_eq!(v.get(1), Some(0x123));
//! ```
//!
//! Elements whose bit range crosses a word boundary are split across two
//! adjacent words and reassembled on read; callers never see the seam.
//! Writes are validated against the element mask `2^N - 1` and fail with
//! [`PackedIntsError::ValueOverflow`] instead of truncating.
//!
//! ## Memory Savings Example
//!
//! ```rust
//! use packed_ints::PackedIntsContainer;
//!
//! // Standard Vec<u64>: 1000 elements × 8 bytes = 8000 bytes
//! let standard: Vec<u64> = (0..1000).collect();
//!
//! // PackedIntsContainer<10>: 1000 elements × 10 bits = 1250 bytes
//! let mut packed = PackedIntsContainer::<10>::new().expect("failed to create container");
//! for i in 0..1000 {
//!     packed.push(i % 1024).unwrap(); // values 0-1023 fit in 10 bits
//! }
//!
//! // 84% memory savings!
//! ```
//!
//! ## Proxies and cursors
//!
//! No packed element is byte-aligned, so the crate hands out
//! [`ElemRef`]/[`ElemMut`] proxies instead of references, and detached
//! [`Cursor`] position tokens instead of pointers. Cursors are validated on
//! every use: a cursor issued before a reallocation or an element shift is
//! reported as stale rather than reading the wrong bits.
//!
//! ```rust
//! use packed_ints::PackedIntsContainer;
//!
//! let mut v = PackedIntsContainer::<5>::from_values(&[1, 2, 3]).unwrap();
//! v.insert(v.begin().advance(1), 9).unwrap();
//! assert_eq!(v.to_values(), vec![1, 9, 2, 3]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::PackedIntsError;

mod codec;

pub mod container;
pub mod cursor;
pub mod elem_ref;

pub use container::PackedIntsContainer;
pub use cursor::Cursor;
pub use elem_ref::{ElemMut, ElemRef};
