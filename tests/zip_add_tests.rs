use lazy_stream::{add, from, from_vec, ones, zip, Stream};

#[test]
fn test_add_two_streams() {
    let s1 = from_vec(vec![1, 2, 3, 4]);
    let s2 = from_vec(vec![5, 6, 7, 8, 9, 10, 11]);
    let sum = add(s1, s2);
    assert_eq!(sum.head(), Ok(6));

    // Overlapping positions are summed, the longer tail passes through.
    assert_eq!(sum.element_at(0), Some(6));
    assert_eq!(sum.element_at(1), Some(8));
    assert_eq!(sum.element_at(2), Some(10));
    assert_eq!(sum.element_at(3), Some(12));
    assert_eq!(sum.element_at(4), Some(9));
    assert_eq!(sum.element_at(5), Some(10));
    assert_eq!(sum.element_at(6), Some(11));
    assert_eq!(sum.length(), 7);
}

#[test]
fn test_add_with_empty_stream_is_identity() {
    let empty: Stream<i64> = Stream::empty();
    let stream = from_vec(vec![1, 2, 3]);

    assert_eq!(add(empty.clone(), stream.clone()).to_vec(), vec![1, 2, 3]);
    assert_eq!(add(stream, empty.clone()).to_vec(), vec![1, 2, 3]);
    assert!(add(empty.clone(), empty).is_empty());
}

#[test]
fn test_add_infinite_streams() {
    let shifted = add(from(0), ones());
    assert_eq!(shifted.pick(5).to_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_zip_many_streams() {
    let s1 = from_vec(vec![1, 3, 5]);
    let s2 = from_vec(vec![2, 4, 6, 8]);
    let s3 = from_vec(vec![5, 10, 15, 20, 25]);
    let zipped = zip(vec![s1, s2, s3]);
    assert_eq!(zipped.head(), Ok(vec![1, 2, 5]));

    // Tuples shrink as the shorter streams exhaust.
    assert_eq!(zipped.element_at(0), Some(vec![1, 2, 5]));
    assert_eq!(zipped.element_at(1), Some(vec![3, 4, 10]));
    assert_eq!(zipped.element_at(2), Some(vec![5, 6, 15]));
    assert_eq!(zipped.element_at(3), Some(vec![8, 20]));
    assert_eq!(zipped.element_at(4), Some(vec![25]));
    assert_eq!(zipped.length(), 5);
}

#[test]
fn test_zip_of_nothing_is_empty() {
    let zipped = zip(Vec::<Stream<i64>>::new());
    assert!(zipped.is_empty());

    let zipped = zip(vec![Stream::<i64>::empty(), Stream::empty()]);
    assert!(zipped.is_empty());
}

#[test]
fn test_zip_accepts_any_stream_iterator() {
    // Construction through an iterator adapter, not a pre-built Vec.
    let zipped = zip((0..3).map(|start| from(start).pick(3)));
    assert_eq!(zipped.element_at(0), Some(vec![0, 1, 2]));
    assert_eq!(zipped.element_at(1), Some(vec![1, 2, 3]));
    assert_eq!(zipped.element_at(2), Some(vec![2, 3, 4]));
    assert_eq!(zipped.length(), 3);
}

#[test]
fn test_zip_reaches_deep_positions() {
    let zipped = zip(vec![from(0), ones()]);
    assert_eq!(zipped.element_at(200), Some(vec![200, 1]));
}

#[test]
fn test_zip_finite_with_infinite() {
    let zipped = zip(vec![ones().pick(3), from(10)]);
    let first_four = zipped.pick(4).to_vec();
    assert_eq!(
        first_four,
        vec![vec![1, 10], vec![1, 11], vec![1, 12], vec![13]]
    );
}
