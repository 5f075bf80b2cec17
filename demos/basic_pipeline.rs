//! Basic pipeline example: sources, adapters and short-circuiting terminals.

use pullchain::prelude::*;
use pullchain::sources::{from_text, from_vec, range};

fn main() -> anyhow::Result<()> {
    // Distinct words, in order of first appearance.
    let words = from_vec("the quick brown fox jumps over the lazy dog the end".split(' ').collect());
    let line: String = words.unique().intersperse(", ").collect();
    println!("distinct words: {line}");

    // Every third square, read from the back.
    let squares: Vec<u32> = range(1u32, 15)
        .map(|x| x * x)
        .step_by(3)
        .rev()
        .collect();
    println!("every third square, reversed: {squares:?}");

    // Sliding averages over a window of three.
    let averages: Vec<f64> = from_vec(vec![3.0, 5.0, 4.0, 8.0, 10.0])
        .map_windows(3, |w| w.iter().sum::<f64>() / w.len() as f64)
        .collect();
    println!("moving average: {averages:?}");

    // A checked sum that stops at the first overflow and keeps the rest.
    let mut readings = from_vec(vec![120u8, 90, 60, 30, 15]);
    match readings.try_fold(0u8, |acc, x| acc.checked_add(x)) {
        Some(total) => println!("total: {total}"),
        None => println!(
            "overflowed; unread readings: {:?}",
            readings.collect::<Vec<_>>()
        ),
    }

    // Batches with an explicit partial tail.
    let mut letters = from_text::<char>("abcdefg");
    loop {
        match letters.next_chunk(3) {
            Ok(batch) => println!("batch: {batch:?}"),
            Err(partial) => {
                println!("tail: {:?} ({} short)", partial.items(), partial.missing());
                break;
            }
        }
    }

    Ok(())
}
