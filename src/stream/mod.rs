//! Lazy-cons streams and their combinator library.
//!
//! The single primitive is [`Stream::cons`]: an eager head plus a suspended
//! tail. Constructors produce cells, lazy combinators consume and produce
//! cells on demand, and the eager utility operations walk a stream to
//! completion.

pub mod advanced;
pub mod constructors;
pub mod core;
pub mod utility;

// Re-export core types
pub use self::core::Stream;

// Re-export constructors
pub use self::constructors::{
    empty, from, from_iter, from_vec, interval, naturals, ones, repeat, up_to,
};

// Re-export multi-stream combinators
pub use self::advanced::{add, zip};

// Re-export the iterator bridge
pub use self::utility::Iter;
