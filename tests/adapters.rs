//! Adapter behaviour through the public API

use pullchain::prelude::*;
use pullchain::sources::{from_slice, from_vec, range, repeat};
use pullchain::Error;
use test_case::test_case;

mod test_helpers;
use test_helpers::*;

#[test]
fn test_pipeline_is_lazy() {
    let (source, pulls) = counted(from_vec((1..=100).collect::<Vec<u32>>()));
    let mut p = source.map(|x| x * 3).filter(|x| x % 2 == 0).take(2);
    assert_eq!(pulls.get(), 0, "building a pipeline must not pull");

    assert_eq!(p.next(), Some(6));
    assert_eq!(pulls.get(), 2);
    assert_eq!(p.next(), Some(12));
    assert_eq!(p.next(), None);
    assert_eq!(pulls.get(), 4, "take stops pulling once satisfied");
}

#[test]
fn test_map_filter_sum() {
    let total: i64 = range(1i64, 11).filter(|x| x % 2 == 1).map(|x| x * x).sum();
    assert_eq!(total, 1 + 9 + 25 + 49 + 81);
}

#[test_case(&[], &[] ; "empty")]
#[test_case(&[1], &[1] ; "single element has no separator")]
#[test_case(&[1, 2, 3], &[1, 0, 2, 0, 3] ; "separators between neighbours only")]
fn test_intersperse(input: &[i32], expected: &[i32]) {
    let got: Vec<i32> = from_slice(input).copied().intersperse(0).collect();
    assert_eq!(got, expected);
}

#[test]
fn test_intersperse_with_calls_generator_per_gap() {
    let mut made = 0;
    let got: String = from_vec(vec!["a", "b", "c"])
        .intersperse_with(|| {
            made += 1;
            "-"
        })
        .collect();
    assert_eq!(got, "a-b-c");
    assert_eq!(made, 2);
}

#[test]
fn test_intersperse_on_opaque_source() {
    let got: Vec<char> = opaque(vec!['x', 'y']).intersperse(',').collect();
    assert_eq!(got, vec!['x', ',', 'y']);
}

#[test]
fn test_zip_shortest_wins() {
    let pairs: Vec<(u8, char)> = from_vec(vec![1u8, 2, 3])
        .zip(from_vec(vec!['a', 'b']))
        .collect();
    assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
}

#[test]
fn test_zip_from_back_trims_longer_side() {
    let mut p = from_vec(vec![1, 2, 3, 4]).zip(from_vec(vec!['a', 'b']));
    assert_eq!(p.len(), 2);
    assert_eq!(p.next_back(), Some((2, 'b')));
    assert_eq!(p.next_back(), Some((1, 'a')));
    assert_eq!(p.next_back(), None);
}

#[test]
fn test_chain_then_back() {
    let mut p = range(0, 3).chain(range(10, 12));
    assert_eq!(p.size_hint(), SizeHint::exact(5));
    assert_eq!(p.next_back(), Some(11));
    assert_eq!(p.next(), Some(0));
    assert_eq!(p.collect::<Vec<_>>(), vec![1, 2, 10]);
}

#[test_case(1, &[0, 1, 2, 3, 4, 5, 6] ; "step one is identity")]
#[test_case(3, &[0, 3, 6] ; "step three")]
#[test_case(10, &[0] ; "step longer than input")]
fn test_step_by(step: usize, expected: &[u32]) {
    let got: Vec<u32> = range(0u32, 7).step_by(step).collect();
    assert_eq!(got, expected);
}

#[test]
fn test_step_by_from_back_matches_front() {
    let forward: Vec<u32> = range(0u32, 10).step_by(4).collect();
    let mut backward: Vec<u32> = range(0u32, 10).step_by(4).rev().collect();
    backward.reverse();
    assert_eq!(forward, vec![0, 4, 8]);
    assert_eq!(backward, forward);
}

#[test]
#[should_panic(expected = "step must be non-zero")]
fn test_step_by_zero_panics() {
    let _ = range(0, 3).step_by(0);
}

#[test]
fn test_fallible_constructors_reject_zero() {
    assert_eq!(
        range(0, 3).try_step_by(0).map(|_| ()),
        Err(Error::ZeroSize { what: "step" })
    );
    assert!(range(0, 3).try_chunks(0).is_err());
    assert!(range(0, 3)
        .try_map_windows(0, |w: &[i32]| w.len())
        .is_err());
    assert!(range(0, 3).try_chunks(2).is_ok());
}

#[test]
fn test_take_while_skip_while() {
    let mut p = from_vec(vec![1, 2, 7, 3, 9]).take_while(|&x| x < 5);
    assert_eq!(p.by_ref().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(p.next(), None);

    let rest: Vec<i32> = from_vec(vec![1, 2, 7, 3, 9]).skip_while(|&x| x < 5).collect();
    assert_eq!(rest, vec![7, 3, 9]);
}

#[test]
fn test_map_while_stops_at_first_none() {
    let got: Vec<u32> = from_vec(vec!["1", "2", "x", "4"])
        .map_while(|s| s.parse().ok())
        .collect();
    assert_eq!(got, vec![1, 2]);
}

#[test]
fn test_skip_and_take_from_both_ends() {
    let mut p = range(0, 10).skip(2).take(5);
    assert_eq!(p.len(), 5);
    assert_eq!(p.next_back(), Some(6));
    assert_eq!(p.next(), Some(2));
    assert_eq!(p.collect::<Vec<_>>(), vec![3, 4, 5]);
}

#[test]
fn test_scan_running_total_and_early_stop() {
    let totals: Vec<i32> = from_vec(vec![1, 2, 3, 4])
        .scan(0, |acc, x| {
            *acc += x;
            (*acc < 7).then_some(*acc)
        })
        .collect();
    assert_eq!(totals, vec![1, 3, 6]);
}

#[test]
fn test_enumerate_back_keeps_indices() {
    let mut p = from_vec(vec!['a', 'b', 'c']).enumerate();
    assert_eq!(p.next_back(), Some((2, 'c')));
    assert_eq!(p.next(), Some((0, 'a')));
    assert_eq!(p.next_back(), Some((1, 'b')));
}

#[test]
fn test_fuse_masks_oscillation() {
    let mut raw = oscillator(3);
    assert_eq!(raw.next(), Some(0));
    assert_eq!(raw.next(), None);
    assert_eq!(raw.next(), Some(1));

    let mut fused = oscillator(3).fuse();
    assert_eq!(fused.next(), Some(0));
    assert_eq!(fused.next(), None);
    assert_eq!(fused.next(), None);
    assert_eq!(fused.next(), None);
}

#[test]
fn test_flatten_and_flat_map() {
    let nested = from_vec(vec![vec![1, 2], vec![], vec![3]]);
    assert_eq!(nested.flatten().collect::<Vec<_>>(), vec![1, 2, 3]);

    let mut p = range(1u8, 4).flat_map(|n| range(0u8, n));
    assert_eq!(p.next_back(), Some(2));
    assert_eq!(p.next(), Some(0));
    assert_eq!(p.collect::<Vec<_>>(), vec![0, 1, 0, 1]);
}

#[test]
fn test_peekable_next_if() {
    let mut p = from_vec(vec![1, 1, 2, 3]).peekable();
    assert_eq!(p.peek(), Some(&1));
    assert_eq!(p.next_if_eq(&1), Some(1));
    assert_eq!(p.next_if_eq(&1), Some(1));
    assert_eq!(p.next_if_eq(&1), None);
    assert_eq!(p.next_if(|x| x % 2 == 0), Some(2));
    if let Some(x) = p.peek_mut() {
        *x *= 10;
    }
    assert_eq!(p.next(), Some(30));
}

#[test]
fn test_unique_keeps_first_occurrence_order() {
    let got: Vec<i32> = from_vec(vec![10, 20, 30, 20, 40, 10, 50]).unique().collect();
    assert_eq!(got, vec![10, 20, 30, 40, 50]);
}

#[test]
fn test_de_unique_shares_seen_set_across_ends() {
    let mut p = from_vec(vec![1, 2, 1, 3, 2]).de_unique();
    assert_eq!(p.next_back(), Some(2));
    assert_eq!(p.next(), Some(1));
    // 2 was already produced from the back.
    assert_eq!(p.next(), Some(3));
    assert_eq!(p.next(), None);
}

#[test]
fn test_unique_by_key() {
    let got: Vec<&str> = from_vec(vec!["apple", "avocado", "banana", "blueberry", "cherry"])
        .unique_by(|s| s.as_bytes()[0])
        .collect();
    assert_eq!(got, vec!["apple", "banana", "cherry"]);
}

#[test]
fn test_chunks_remainder() {
    let mut p = range(0, 7).chunks(3);
    assert_eq!(p.next(), Some(vec![0, 1, 2]));
    assert_eq!(p.next(), Some(vec![3, 4, 5]));
    assert_eq!(p.next(), None);
    assert_eq!(p.remainder(), &[6]);
    assert_eq!(p.into_remainder(), vec![6]);
}

#[test]
fn test_chunk_by_runs() {
    let runs: Vec<Vec<i32>> = from_vec(vec![1, 2, 3, 7, 8, 12])
        .chunk_by(|a, b| b - a == 1)
        .collect();
    assert_eq!(runs, vec![vec![1, 2, 3], vec![7, 8], vec![12]]);
}

#[test]
fn test_map_windows_sums() {
    let sums: Vec<i32> = range(1, 6).map_windows(3, |w| w.iter().sum()).collect();
    assert_eq!(sums, vec![6, 9, 12]);
    let none: Vec<i32> = range(1, 3).map_windows(3, |w| w.iter().sum()).collect();
    assert!(none.is_empty());
}

#[test]
fn test_cycle_over_infinite_hint() {
    assert_eq!(repeat(1).size_hint(), SizeHint::INFINITE);
    let got: Vec<i32> = from_vec(vec![1, 2, 3]).cycle().skip(2).take(4).collect();
    assert_eq!(got, vec![3, 1, 2, 3]);
}

#[test]
fn test_cloned_and_copied() {
    let words = vec![String::from("a"), String::from("b")];
    let owned: Vec<String> = from_slice(&words).cloned().collect();
    assert_eq!(owned, words);
    let nums = [4u8, 5];
    let sum: u32 = from_slice(&nums).copied().map(u32::from).sum();
    assert_eq!(sum, 9);
}

#[test]
fn test_inspect_sees_every_element() {
    let mut seen = Vec::new();
    let total: i32 = from_vec(vec![1, 2, 3]).inspect(|x| seen.push(*x)).sum();
    assert_eq!(total, 6);
    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn test_traced_is_transparent() {
    let mut p = range(0u8, 4).traced("numbers");
    assert_eq!(p.next(), Some(0));
    assert_eq!(p.yielded(), 1);
    assert_eq!(p.rev().collect::<Vec<_>>(), vec![3, 2, 1]);
}
