//! Terminal consumers: folds, searches, comparisons and collection

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::num::{NonZeroUsize, ParseIntError};

use pullchain::prelude::*;
use pullchain::sources::{empty, from_vec, range};
use test_case::test_case;

mod test_helpers;
use test_helpers::*;

#[test]
fn test_try_fold_overflow_leaves_remainder() {
    let mut p = from_vec(vec![100u8, 100, 100, 7]);
    let sum = p.try_fold(0u8, |acc, x| acc.checked_add(x));
    assert_eq!(sum, None);
    assert_eq!(p.next(), Some(7));
}

#[test]
fn test_try_fold_with_control_flow() {
    let mut p = range(1, 100);
    let flow = p.try_fold(0, |acc, x| {
        let acc = acc + x;
        if acc > 10 {
            ControlFlow::Break(acc)
        } else {
            ControlFlow::Continue(acc)
        }
    });
    assert_eq!(flow, ControlFlow::Break(15));
    assert_eq!(p.next(), Some(6));
}

#[test]
fn test_try_for_each_stops_at_error() {
    let mut seen = Vec::new();
    let mut p = from_vec(vec!["1", "2", "x", "4"]);
    let result = p.try_for_each(|s| -> Result<(), ParseIntError> {
        seen.push(s.parse::<i32>()?);
        Ok(())
    });
    assert!(result.is_err());
    assert_eq!(seen, vec![1, 2]);
    assert_eq!(p.collect::<Vec<_>>(), vec!["4"]);
}

#[test]
fn test_try_reduce() {
    let mut ok = from_vec(vec![1u32, 2, 3]);
    assert_eq!(ok.try_reduce(|a, b| a.checked_add(b)), Ok(Some(6)));

    let mut overflow = from_vec(vec![u32::MAX, 1, 5]);
    assert_eq!(overflow.try_reduce(|a, b| a.checked_add(b)), Err(()));
    assert_eq!(overflow.next(), Some(5));

    assert_eq!(
        empty::<u32>().try_reduce(|a, b| Ok::<_, String>(a + b)),
        Ok(None)
    );
}

#[test]
fn test_try_find() {
    let mut p = from_vec(vec!["3", "8", "x", "10"]);
    let found = p.try_find(|s| s.parse::<i32>().map(|n| n > 5));
    assert_eq!(found.map_err(|_| ()), Ok(Some("8")));

    let mut p = from_vec(vec!["3", "x", "10"]);
    assert!(p.try_find(|s| s.parse::<i32>().map(|n| n > 5)).is_err());
    assert_eq!(p.next(), Some("10"));
}

#[test_case(0, Ok(vec![]) ; "zero requested")]
#[test_case(2, Ok(vec![1, 2]) ; "exact")]
#[test_case(5, Err((vec![1, 2, 3], 2)) ; "partial reports what is missing")]
fn test_next_chunk(n: usize, expected: Result<Vec<i32>, (Vec<i32>, usize)>) {
    let mut p = from_vec(vec![1, 2, 3]);
    let got = p
        .next_chunk(n)
        .map_err(|partial| {
            let missing = partial.missing();
            (partial.into_items(), missing)
        });
    assert_eq!(got, expected);
}

#[test]
fn test_advance_by_payload_and_nth_forward_only() {
    let mut p = range(0, 5);
    assert_eq!(p.advance_by(2), Ok(()));
    assert_eq!(p.advance_by(10), Err(NonZeroUsize::new(7).unwrap()));

    let mut p = range(0, 10);
    assert_eq!(p.nth(2), Some(2));
    assert_eq!(p.nth(2), Some(5));
    assert_eq!(p.nth(0), Some(6));
    assert_eq!(p.nth(5), None);
}

#[test]
fn test_advance_by_on_opaque_source() {
    let mut p = opaque(vec!['a', 'b']);
    assert_eq!(p.advance_by(3), Err(NonZeroUsize::new(1).unwrap()));
    assert_eq!(p.next(), None);
}

#[test]
fn test_all_any_short_circuit() {
    let mut p = from_vec(vec![2, 4, 5, 6]);
    assert!(!p.all(|x| x % 2 == 0));
    assert_eq!(p.next(), Some(6));

    let mut p = from_vec(vec![1, 3, 4, 7]);
    assert!(p.any(|x| x % 2 == 0));
    assert_eq!(p.next(), Some(7));
}

#[test]
fn test_find_and_positions() {
    let mut p = from_vec(vec![3, 1, 4, 1, 5]);
    assert_eq!(p.find(|&x| x > 3), Some(4));
    assert_eq!(p.position(|x| x == 5), Some(1));

    assert_eq!(from_vec(vec![3, 1, 4, 1, 5]).rposition(|x| x == 1), Some(3));
    let parsed = from_vec(vec!["a", "7", "b"]).find_map(|s| s.parse::<u8>().ok());
    assert_eq!(parsed, Some(7));
}

#[test]
fn test_partition_and_unzip() {
    let (even, odd): (Vec<u32>, Vec<u32>) = range(0u32, 7).partition(|x| x % 2 == 0);
    assert_eq!(even, vec![0, 2, 4, 6]);
    assert_eq!(odd, vec![1, 3, 5]);

    assert!(from_vec(vec![2, 4, 1, 3]).is_partitioned(|x| x % 2 == 0));
    assert!(!from_vec(vec![1, 2, 3]).is_partitioned(|x| x % 2 == 0));

    let (names, ages): (Vec<&str>, Vec<u8>) =
        from_vec(vec![("ada", 36), ("alan", 41)]).unzip();
    assert_eq!(names, vec!["ada", "alan"]);
    assert_eq!(ages, vec![36, 41]);
}

#[test]
fn test_min_max_tie_breaking() {
    let words = || from_vec(vec!["bb", "a", "cc", "d"]);
    assert_eq!(words().max_by_key(|w| w.len()), Some("cc"));
    assert_eq!(words().min_by_key(|w| w.len()), Some("a"));
    assert_eq!(range(3, 9).max(), Some(8));
    assert_eq!(empty::<i32>().min(), None);
}

#[test]
fn test_reduce_count_last() {
    assert_eq!(range(1, 5).reduce(|a, b| a * b), Some(24));
    assert_eq!(range(0, 4).count(), 4);
    assert_eq!(opaque(vec![1, 2, 3]).last(), Some(3));
    assert_eq!(empty::<u8>().reduce(|a, b| a.max(b)), None);
}

#[test]
fn test_lexicographic_comparison() {
    assert_eq!(range(0, 3).cmp(vec![0, 1, 2]), Ordering::Equal);
    assert_eq!(range(0, 3).cmp(vec![0, 1]), Ordering::Greater);
    assert_eq!(range(0, 2).cmp(vec![0, 5]), Ordering::Less);
    assert!(from_vec(vec![1.0, f64::NAN]).partial_cmp(vec![1.0, 2.0]).is_none());
    assert!(range(0, 3).eq(vec![0, 1, 2]));
    assert!(range(0, 3).ne(vec![0, 1]));
    assert!(range(0, 3).lt(vec![0, 2]));
    assert!(range(0, 3).ge(vec![0, 1, 2]));
    assert!(from_vec(vec!["A", "b"]).eq_by(vec!["a", "B"], |x, y| x.eq_ignore_ascii_case(y)));
    assert_eq!(
        from_vec(vec![3, 1]).cmp_by(vec![1, 3], |a, b| b.cmp(&a)),
        Ordering::Less
    );
}

#[test]
fn test_is_sorted_family() {
    assert!(range(0, 10).is_sorted());
    assert!(empty::<u8>().is_sorted());
    assert!(!from_vec(vec![1, 3, 2]).is_sorted());
    assert!(from_vec(vec![5, 3, 3, 1]).is_sorted_by(|a, b| a >= b));
    assert!(from_vec(vec!["a", "bb", "ccc"]).is_sorted_by_key(|s| s.len()));
}

#[test]
fn test_collect_targets() {
    let set: HashSet<i32> = from_vec(vec![1, 2, 1]).collect();
    assert_eq!(set.len(), 2);

    let map: BTreeMap<char, usize> = from_vec(vec!['b', 'a']).enumerate().map(|(i, c)| (c, i)).collect();
    assert_eq!(map.get(&'a'), Some(&1));

    let all: Result<Vec<i32>, String> = from_vec(vec![Ok(1), Ok(2)]).collect();
    assert_eq!(all, Ok(vec![1, 2]));
    let first_err: Result<Vec<i32>, String> =
        from_vec(vec![Ok(1), Err("bad".to_string()), Ok(3)]).collect();
    assert_eq!(first_err, Err("bad".to_string()));

    let maybe: Option<Vec<u8>> = from_vec(vec![Some(1), None]).collect();
    assert_eq!(maybe, None);
}

#[test]
fn test_sum_and_product() {
    let total: u64 = from_vec(lcg_values(1, 4)).map(|v| v % 10).sum();
    assert!(total <= 36);
    let product: i32 = range(1, 6).product();
    assert_eq!(product, 120);
}
