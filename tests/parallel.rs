#![cfg(feature = "parallel")]

use std::thread;

use splitrand::{BitsParams, Key, fill_random_bits, random_bits, random_bits_with, seed_to_key, split};

fn sequential_params() -> BitsParams {
    BitsParams {
        parallel_threshold: usize::MAX,
        ..BitsParams::default()
    }
}

#[test]
fn test_parallel_fill_matches_sequential() {
    let key = seed_to_key(161_803);
    let sequential = random_bits_with(key, 200_001, &sequential_params()).unwrap();

    for chunk_words in [2usize, 64, 4096, 1 << 20] {
        let params = BitsParams {
            parallel_threshold: 1,
            chunk_words,
            ..BitsParams::default()
        };

        assert_eq!(random_bits_with(key, 200_001, &params).unwrap(), sequential);
    }
}

#[test]
fn test_parallel_fill_at_odd_offset() {
    let key = seed_to_key(5);
    let full = random_bits_with(key, 150_000, &sequential_params()).unwrap();

    // Large enough to cross the default parallel threshold
    let mut window = vec![0u32; 100_001];
    fill_random_bits(key, 49_999, &mut window).unwrap();

    assert_eq!(window, full[49_999..]);
}

#[test]
fn test_concurrent_callers_share_keys() {
    let root = seed_to_key(2025);
    let keys = split(root, 8).unwrap();
    let expected: Vec<Vec<u32>> = keys.iter().map(|k| random_bits(*k, 512).unwrap()).collect();

    let handles: Vec<_> = keys
        .iter()
        .map(|&key: &Key| thread::spawn(move || random_bits(key, 512).unwrap()))
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
