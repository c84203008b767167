#![no_std]

//! `DynArray`: a growable contiguous array built on raw memory.
//!
//! `DynArray` keeps allocated capacity and constructed elements strictly
//! apart: the buffer is a raw block obtained from the global allocator, the
//! first `len` slots hold live values, and the rest are reserved but
//! uninitialized. Elements are constructed in place when they enter the
//! array and destroyed in place (or moved out to the caller) when they
//! leave, so every element's lifetime is exact regardless of how the array
//! itself grows or shrinks.
//!
//! # Capacity
//!
//! An empty array owns no allocation at all; the buffer appears on first
//! growth. Appends double the buffer (with a floor of one slot), while
//! `reserve` allocates exactly the requested capacity:
//!
//! ```
//! use dynarray::DynArray;
//!
//! let mut arr: DynArray<u64> = DynArray::new();
//! assert_eq!(arr.capacity(), 0); // nothing allocated yet
//!
//! arr.push(7).unwrap();
//! assert_eq!(arr.capacity(), 1);
//! arr.push(8).unwrap();
//! assert_eq!(arr.capacity(), 2);
//! arr.push(9).unwrap();
//! assert_eq!(arr.capacity(), 4);
//!
//! arr.reserve(100).unwrap(); // exact reservation
//! assert_eq!(arr.capacity(), 100);
//! assert_eq!(arr.as_slice(), &[7, 8, 9]);
//! ```
//!
//! # Quick Start
//!
//! ```
//! use dynarray::DynArray;
//!
//! let mut numbers = DynArray::new();
//! numbers.push(1).unwrap();
//! numbers.push(2).unwrap();
//! numbers.push(3).unwrap();
//!
//! numbers.insert(1, 9).unwrap();
//! assert_eq!(numbers.as_slice(), &[1, 9, 2, 3]);
//!
//! assert_eq!(numbers.remove(0).unwrap(), 1);
//! assert_eq!(numbers.pop(), Some(3));
//! assert_eq!(numbers.as_slice(), &[9, 2]);
//! ```
//!
//! # Error Handling
//!
//! Nothing is reported through diagnostics or silent state corruption:
//! allocation failure, out-of-range indices, and popping an empty array
//! all surface as [`DynArrayError`] values with the offending numbers
//! attached:
//!
//! ```
//! use dynarray::{DynArray, DynArrayError};
//!
//! let mut empty: DynArray<u8> = DynArray::new();
//! assert_eq!(empty.try_pop(), Err(DynArrayError::Empty));
//! assert_eq!(
//!     empty.try_get(0),
//!     Err(DynArrayError::IndexOutOfBounds { index: 0, length: 0 })
//! );
//! ```
//!
//! # Iteration
//!
//! The array derefs to a slice, so borrowing iteration and all slice
//! methods come for free; consuming it yields the elements by value:
//!
//! ```
//! use dynarray::DynArray;
//!
//! let letters = DynArray::try_from_iter(['a', 'b', 'c']).unwrap();
//! assert_eq!(letters.first(), Some(&'a'));
//!
//! let upper: Vec<char> = letters
//!     .into_iter()
//!     .map(|c| c.to_ascii_uppercase())
//!     .collect();
//! assert_eq!(upper, ['A', 'B', 'C']);
//! ```
//!
//! # Element Type Requirements
//!
//! Trait bounds sit on the operations that need them, not on the type:
//! `Clone` only for [`DynArray::filled`], [`DynArray::try_clone`] and the
//! `Clone` impl, `Default` only for [`DynArray::resize`]. Everything else
//! works for any `T`; relocation and shifting are bitwise moves.
//!
//! # `no_std` Compatibility
//!
//! The crate is `no_std` and needs only the `alloc` crate (for the buffer
//! itself). Enable the optional `std` feature to forward it to the error
//! stack in std environments:
//!
//! ```toml
//! [dependencies]
//! dynarray = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod array;
mod buf;
mod error;
mod iter;
mod traverse;

// Re-export public types and traits
pub use array::DynArray;
pub use error::DynArrayError;
pub use iter::IntoIter;
