//! Core lazy-cons cell, accessors and single-stream combinators.
//!
//! A [`Stream`] is an immutable singly-linked sequence: an eagerly-known head
//! value plus a suspended computation producing the rest. Forcing the
//! suspension happens in exactly one place, [`Stream::tail`]; every other
//! operation obtains "the next stream" through it (directly or through the
//! stored thunk), which is what lets the same combinator vocabulary work on
//! both finite and infinite streams.

use std::fmt;
use std::rc::Rc;

use crate::error::{StreamError, StreamResult};

/// A suspended tail computation. Forcing it yields the next stream; forcing
/// it twice yields the same logical continuation, though the value may be
/// recomputed each time (no memoization).
pub(crate) type Thunk<T> = Rc<dyn Fn() -> Stream<T>>;

/// Invokes a suspension, yielding the next stream.
pub(crate) fn force<T>(thunk: &Thunk<T>) -> Stream<T> {
    (**thunk)()
}

pub(crate) enum Cell<T> {
    Empty,
    Cons { head: T, rest: Thunk<T> },
}

/// An immutable lazy sequence, possibly infinite.
///
/// Cloning a `Stream` is cheap: both clones share the same cell. No operation
/// mutates an existing stream; combinators always return a new one.
pub struct Stream<T> {
    cell: Rc<Cell<T>>,
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Stream {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T> Stream<T> {
    /// The canonical empty stream. It carries no suspension at all, so
    /// forcing its tail keeps failing instead of producing values.
    pub fn empty() -> Self {
        Stream {
            cell: Rc::new(Cell::Empty),
        }
    }

    /// The lazy-cons primitive: an eager `head` plus a thunk for the rest.
    ///
    /// The thunk is only invoked by [`Stream::tail`]. Self-referential
    /// definitions are fine; `rest` may rebuild the very stream being
    /// defined:
    ///
    /// ```
    /// use lazy_stream::Stream;
    ///
    /// fn ones() -> Stream<i64> {
    ///     Stream::cons(1, ones)
    /// }
    /// assert_eq!(ones().element_at(1000), Some(1));
    /// ```
    pub fn cons(head: T, rest: impl Fn() -> Stream<T> + 'static) -> Self {
        Stream {
            cell: Rc::new(Cell::Cons {
                head,
                rest: Rc::new(rest),
            }),
        }
    }

    /// True iff this is the empty stream. Pure, never forces anything.
    pub fn is_empty(&self) -> bool {
        matches!(*self.cell, Cell::Empty)
    }

    /// Forces the suspended rest and returns the next stream.
    ///
    /// This is the sole suspension point in the library.
    pub fn tail(&self) -> StreamResult<Stream<T>> {
        match &*self.cell {
            Cell::Empty => Err(StreamError::Empty),
            Cell::Cons { rest, .. } => Ok(force(rest)),
        }
    }

    /// Borrow the head and tail thunk without forcing anything.
    pub(crate) fn uncons(&self) -> Option<(&T, &Thunk<T>)> {
        match &*self.cell {
            Cell::Empty => None,
            Cell::Cons { head, rest } => Some((head, rest)),
        }
    }
}

impl<T: Clone> Stream<T> {
    /// The element at this position.
    pub fn head(&self) -> StreamResult<T> {
        match &*self.cell {
            Cell::Empty => Err(StreamError::Empty),
            Cell::Cons { head, .. } => Ok(head.clone()),
        }
    }
}

impl<T: Clone + 'static> Stream<T> {
    /// Lazily applies `f` to every element.
    ///
    /// Only the head is transformed up front; the rest is mapped when the
    /// tail is forced, so mapping an infinite stream is fine.
    pub fn map<U, F>(&self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        map_shared(self.clone(), Rc::new(f))
    }

    /// Lazily keeps the elements satisfying `pred`.
    ///
    /// Skipping a non-matching prefix forces tails until a match or
    /// exhaustion is found. Over an infinite stream with a predicate that
    /// stops matching, that search never returns; this is expected behavior,
    /// not a bug.
    pub fn filter<F>(&self, pred: F) -> Stream<T>
    where
        F: Fn(&T) -> bool + 'static,
    {
        filter_shared(self.clone(), Rc::new(pred))
    }

    /// Concatenates `self` followed by `other`.
    ///
    /// If `self` is infinite, `other` is simply never reached.
    pub fn append(&self, other: &Stream<T>) -> Stream<T> {
        match self.uncons() {
            None => other.clone(),
            Some((head, rest)) => {
                let head = head.clone();
                let rest = Rc::clone(rest);
                let other = other.clone();
                Stream::cons(head, move || force(&rest).append(&other))
            }
        }
    }

    /// At most the first `n` elements, ending early if `self` runs out.
    pub fn pick(&self, n: usize) -> Stream<T> {
        if n == 0 {
            return Stream::empty();
        }
        match self.uncons() {
            None => Stream::empty(),
            Some((head, rest)) => {
                let head = head.clone();
                let rest = Rc::clone(rest);
                Stream::cons(head, move || force(&rest).pick(n - 1))
            }
        }
    }

    /// Drops the first `n` elements; the empty stream if `self` runs out
    /// first. Forces up to `n` tails immediately.
    pub fn remove(&self, n: usize) -> Stream<T> {
        let mut current = self.clone();
        for _ in 0..n {
            match current.tail() {
                Ok(next) => current = next,
                Err(_) => return Stream::empty(),
            }
        }
        current
    }
}

fn map_shared<T, U, F>(stream: Stream<T>, f: Rc<F>) -> Stream<U>
where
    T: Clone + 'static,
    U: 'static,
    F: Fn(T) -> U + 'static + ?Sized,
{
    match stream.uncons() {
        None => Stream::empty(),
        Some((head, rest)) => {
            let head = (*f)(head.clone());
            let rest = Rc::clone(rest);
            Stream::cons(head, move || map_shared(force(&rest), Rc::clone(&f)))
        }
    }
}

fn filter_shared<T, F>(stream: Stream<T>, pred: Rc<F>) -> Stream<T>
where
    T: Clone + 'static,
    F: Fn(&T) -> bool + 'static + ?Sized,
{
    let mut current = stream;
    loop {
        let next = match current.uncons() {
            None => return Stream::empty(),
            Some((head, rest)) => {
                if (*pred)(head) {
                    let head = head.clone();
                    let rest = Rc::clone(rest);
                    return Stream::cons(head, move || {
                        filter_shared(force(&rest), Rc::clone(&pred))
                    });
                }
                force(rest)
            }
        };
        current = next;
    }
}

impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    // Shows only the already-forced head; printing must not force tails.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.cell {
            Cell::Empty => f.write_str("Stream::Empty"),
            Cell::Cons { head, .. } => write!(f, "Stream::Cons {{ head: {:?}, .. }}", head),
        }
    }
}
