//! # lazy-stream
//!
//! A lazy, singly-linked sequence abstraction supporting both finite and
//! infinite streams, built on a single lazy-cons primitive.
//!
//! A [`Stream`] pairs an eagerly-known head with a suspended computation for
//! the rest. Nothing past the head is computed until the tail is forced, so
//! recursively-defined infinite sequences are first-class values:
//!
//! ```
//! use lazy_stream::{add, from, naturals, ones, stream};
//!
//! // Finite streams work like ordinary collections.
//! let evens = stream![1, 2, 3, 4, 5].filter(|x| x % 2 == 0);
//! assert_eq!(evens.to_vec(), vec![2, 4]);
//!
//! // Infinite streams use the same vocabulary, bounded by `pick`.
//! let squares = from(1).map(|x| x * x).pick(4);
//! assert_eq!(squares.to_vec(), vec![1, 4, 9, 16]);
//!
//! // Element-wise arithmetic over infinite inputs stays lazy.
//! let shifted = add(naturals(), ones());
//! assert_eq!(shifted.pick(3).to_vec(), vec![2, 3, 4]);
//! ```
//!
//! The only hard failure is [`StreamError::Empty`], raised by
//! [`Stream::head`] and [`Stream::tail`] on the empty stream. Eager
//! operations such as [`Stream::length`] and [`Stream::to_vec`] never
//! terminate on truly infinite input; bounding with [`Stream::pick`] or
//! [`Stream::element_at`] is the caller's responsibility.

pub mod error;
pub mod stream;

// Re-export the public surface at the crate root
pub use error::{StreamError, StreamResult};
pub use stream::{
    add, empty, from, from_iter, from_vec, interval, naturals, ones, repeat, up_to, zip, Iter,
    Stream,
};
