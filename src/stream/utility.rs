//! Eager finite-only operations: length, reduce, fold, sum, contains,
//! element_at, walk, to_vec, print, plus the [`Iter`] bridge into
//! `std::iter::Iterator`.
//!
//! Everything here walks tails to completion (or to a bounded position) and
//! therefore diverges on a truly infinite stream beyond the requested bound.
//! That is the caller's contract to honor, not something this module guards
//! against.

use std::fmt;
use std::ops::Add;
use std::rc::Rc;

use super::core::{force, Stream};

/// Iterator over a stream's elements; forces exactly one tail per `next()`.
pub struct Iter<T> {
    stream: Stream<T>,
}

impl<T: Clone + 'static> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let (head, rest) = match self.stream.uncons() {
            None => return None,
            Some((head, rest)) => (head.clone(), Rc::clone(rest)),
        };
        self.stream = force(&rest);
        Some(head)
    }
}

impl<T: Clone + 'static> Stream<T> {
    /// Iterates over the elements, one forced tail at a time.
    ///
    /// Infinite streams yield an infinite iterator; bound it with the usual
    /// iterator adapters or with [`Stream::pick`] before collecting.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            stream: self.clone(),
        }
    }

    /// Number of elements. Diverges on infinite input.
    pub fn length(&self) -> usize {
        self.iter().count()
    }

    /// All elements in order. Diverges on infinite input.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Zero-based random access by walking `index` tails.
    ///
    /// `None` when the stream runs out before `index`; an out-of-range
    /// position is an ordinary "not found", never an error.
    pub fn element_at(&self, index: usize) -> Option<T> {
        self.iter().nth(index)
    }

    /// Linear-scan membership test.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == *element)
    }

    /// Seedless left fold: the first element seeds the accumulator and
    /// folding starts from the second. `None` on the empty stream.
    pub fn reduce<F>(&self, f: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        self.iter().reduce(f)
    }

    /// Seeded left fold; the empty stream returns `init` unchanged.
    pub fn fold<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.iter().fold(init, f)
    }

    /// Sum of all elements, folding `+` from `T::default()`.
    pub fn sum(&self) -> T
    where
        T: Add<Output = T> + Default,
    {
        self.fold(T::default(), |acc, x| acc + x)
    }

    /// Eagerly visits every element in order. Diverges on infinite input.
    pub fn walk<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        for element in self.iter() {
            f(&element);
        }
    }

    /// Writes at most the first `n` elements to stdout, one per line.
    pub fn print(&self, n: usize)
    where
        T: fmt::Display,
    {
        log::trace!("printing up to {} stream elements", n);
        self.pick(n).walk(|element| println!("{}", element));
    }
}
