//! Infinite streams driven one element at a time.
//!
//! Run with: cargo run --example infinite_streams

use lazy_stream::{add, from, naturals, ones, zip};

fn main() {
    println!("first five ones:");
    ones().print(5);

    println!("first five natural numbers (corecursive definition):");
    naturals().print(5);

    println!("squares of the integers from 1:");
    from(1).map(|x| x * x).print(5);

    println!("element-wise sum of naturals and ones:");
    add(naturals(), ones()).print(5);

    println!("zip of three streams of different lengths:");
    let zipped = zip(vec![from(0).pick(3), from(10).pick(5), ones().pick(2)]);
    zipped.walk(|row| println!("{:?}", row));
}
