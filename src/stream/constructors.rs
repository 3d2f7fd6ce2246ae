//! Stream constructors: empty, from_vec, from_iter, interval, from, up_to,
//! repeat, ones, naturals.
//!
//! Every constructor returns a [`Stream`] built from [`Stream::cons`]; none
//! of them materializes more than one element ahead of what the caller has
//! forced.

use std::rc::Rc;

use super::advanced::add;
use super::core::Stream;

/// The empty stream.
pub fn empty<T>() -> Stream<T> {
    Stream::empty()
}

/// A finite stream of the vector's elements in order.
///
/// The vector is shared behind an `Rc`; each forced tail materializes exactly
/// one more cell.
pub fn from_vec<T: Clone + 'static>(values: Vec<T>) -> Stream<T> {
    from_shared(Rc::new(values), 0)
}

/// A finite stream of the iterator's elements in order.
pub fn from_iter<T, I>(values: I) -> Stream<T>
where
    T: Clone + 'static,
    I: IntoIterator<Item = T>,
{
    from_vec(values.into_iter().collect())
}

fn from_shared<T: Clone + 'static>(values: Rc<Vec<T>>, index: usize) -> Stream<T> {
    match values.get(index) {
        None => Stream::empty(),
        Some(head) => {
            let head = head.clone();
            Stream::cons(head, move || from_shared(Rc::clone(&values), index + 1))
        }
    }
}

/// Consecutive integers `low..=high`.
///
/// When `high <= low` this is the single-element stream of `low`.
pub fn interval(low: i64, high: i64) -> Stream<i64> {
    if low >= high {
        return Stream::cons(low, Stream::empty);
    }
    Stream::cons(low, move || interval(low + 1, high))
}

/// The infinite stream of consecutive integers starting at `start`.
pub fn from(start: i64) -> Stream<i64> {
    Stream::cons(start, move || from(start + 1))
}

/// Consecutive integers `0..=stop`; `stop + 1` elements.
pub fn up_to(stop: i64) -> Stream<i64> {
    interval(0, stop)
}

/// The infinite stream repeating `value`.
pub fn repeat<T: Clone + 'static>(value: T) -> Stream<T> {
    let head = value.clone();
    Stream::cons(head, move || repeat(value.clone()))
}

/// The infinite stream of 1s, defined self-referentially.
pub fn ones() -> Stream<i64> {
    Stream::cons(1, ones)
}

/// The infinite stream of natural numbers `1, 2, 3, ...`.
///
/// Corecursive definition: each tail is the element-wise sum of this very
/// stream with [`ones`]. Reaching element `n` therefore re-derives the stream
/// through `n` nested [`add`] layers, so random access costs O(n^2); use
/// [`from`]`(1)` where that matters.
pub fn naturals() -> Stream<i64> {
    Stream::cons(1, || add(naturals(), ones()))
}

/// Builds a finite stream from the listed values, in order.
///
/// `stream![]` is the empty stream.
///
/// ```
/// use lazy_stream::{stream, Stream};
///
/// let s = stream![1, 2, 3];
/// assert_eq!(s.to_vec(), vec![1, 2, 3]);
///
/// let e: Stream<i64> = stream![];
/// assert!(e.is_empty());
/// ```
#[macro_export]
macro_rules! stream {
    () => {
        $crate::stream::Stream::empty()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::stream::constructors::from_vec(vec![$($value),+])
    };
}
