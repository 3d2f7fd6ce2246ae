//! Multi-stream combinators: add, zip.
//!
//! Both advance each input independently and never force a stream that is
//! already exhausted, so they are safe over any mix of finite and infinite
//! inputs.

use std::ops::Add;
use std::rc::Rc;

use super::core::{force, Stream};

/// Element-wise sum of two streams.
///
/// The sum of a stream with "nothing" is the stream itself: if either input
/// is empty, the other is returned unchanged. Once the shorter of two finite
/// inputs runs out, the remaining tail of the longer one passes through
/// as-is, so adding a length-4 and a length-7 stream yields a length-7
/// stream whose first four elements are sums.
pub fn add<T>(s1: Stream<T>, s2: Stream<T>) -> Stream<T>
where
    T: Add<Output = T> + Clone + 'static,
{
    let (h1, r1) = match s1.uncons() {
        None => return s2,
        Some((head, rest)) => (head.clone(), Rc::clone(rest)),
    };
    let (h2, r2) = match s2.uncons() {
        None => return s1,
        Some((head, rest)) => (head.clone(), Rc::clone(rest)),
    };
    Stream::cons(h1 + h2, move || add(force(&r1), force(&r2)))
}

/// Zips any number of streams into a stream of position-wise element vectors.
///
/// The n-th element holds the n-th elements of every input that is still
/// non-empty at that position; exhausted inputs silently drop out rather
/// than ending the whole zip, so the vectors shrink as shorter inputs run
/// dry. The result ends once every input is exhausted.
pub fn zip<T, I>(streams: I) -> Stream<Vec<T>>
where
    T: Clone + 'static,
    I: IntoIterator<Item = Stream<T>>,
{
    zip_vec(streams.into_iter().collect())
}

// The recursion target must stay monomorphic in T: recursing through the
// generic `zip` would instantiate it with a fresh iterator type per level.
fn zip_vec<T: Clone + 'static>(streams: Vec<Stream<T>>) -> Stream<Vec<T>> {
    let live: Vec<Stream<T>> = streams.into_iter().filter(|s| !s.is_empty()).collect();
    if live.is_empty() {
        return Stream::empty();
    }
    let heads: Vec<T> = live.iter().filter_map(|s| s.head().ok()).collect();
    Stream::cons(heads, move || {
        zip_vec(
            live.iter()
                .map(|s| s.tail().unwrap_or_else(|_| Stream::empty()))
                .collect(),
        )
    })
}
