use splitrand::{Counter, Error, Key, seed_to_key};

#[test]
fn test_seed_zero_is_zero_key() {
    let key = seed_to_key(0);

    assert_eq!(key, Key::from_words(0, 0));
    assert_eq!(key, Key::default());
}

#[test]
fn test_small_seed_fills_low_word() {
    assert_eq!(seed_to_key(42).words(), (0, 42));
    assert_eq!(seed_to_key(42u64).words(), (0, 42));
    assert_eq!(seed_to_key(u32::MAX).words(), (0, u32::MAX));
}

#[test]
fn test_wide_seed_fills_high_word() {
    let key = seed_to_key(0x0000_0001_0000_0002u64);

    assert_eq!(key.high(), 1);
    assert_eq!(key.low(), 2);
}

#[test]
fn test_signed_seeds() {
    assert_eq!(seed_to_key(-1i64).words(), (u32::MAX, u32::MAX));
    assert_eq!(seed_to_key(-1i32).words(), (0, u32::MAX));
    assert_eq!(seed_to_key(-1i32), seed_to_key(u32::MAX));
}

#[test]
fn test_from_seed_matches_seed_to_key() {
    assert_eq!(Key::from_seed(1234u64), seed_to_key(1234u64));
}

#[test]
fn test_be_bytes_layout() {
    let key = Key::from_words(0x0102_0304, 0xa0b0_c0d0);

    assert_eq!(
        key.to_be_bytes(),
        [0x01, 0x02, 0x03, 0x04, 0xa0, 0xb0, 0xc0, 0xd0]
    );
    assert_eq!(Key::from_be_bytes(key.to_be_bytes()), key);
}

#[test]
fn test_words_conversions() {
    let key = Key::from([7, 9]);
    let words: [u32; 2] = key.into();

    assert_eq!(words, [7, 9]);
    assert_eq!(key.to_words(), [7, 9]);
}

#[test]
fn test_try_from_slice() {
    let data = [5u32, 6];
    assert_eq!(Key::try_from(&data[..]), Ok(Key::from_words(5, 6)));

    let short = [5u32];
    assert_eq!(
        Key::try_from(&short[..]),
        Err(Error::InvalidKeyData { len: 1 })
    );

    let long = [1u32, 2, 3];
    assert_eq!(
        Key::try_from(&long[..]),
        Err(Error::InvalidKeyData { len: 3 })
    );
}

#[test]
fn test_display() {
    let key = Key::from_words(0xdead_beef, 0x2a);

    assert_eq!(key.to_string(), "deadbeef:0000002a");
}

#[test]
fn test_keys_cast_to_words() {
    let keys = [Key::from_words(1, 2), Key::from_words(3, 4)];
    let words: &[u32] = bytemuck::cast_slice(&keys);

    assert_eq!(words, &[1, 2, 3, 4]);
}

#[test]
fn test_counter_words() {
    assert_eq!(Counter::new(0).words(), (0, 0));
    assert_eq!(Counter::new(5).words(), (0, 5));
    assert_eq!(Counter::new(0x0000_0003_ffff_fffe).words(), (3, 0xffff_fffe));
}

#[test]
fn test_counter_for_word() {
    assert_eq!(Counter::for_word(0), (Counter::new(0), 0));
    assert_eq!(Counter::for_word(1), (Counter::new(0), 1));
    assert_eq!(Counter::for_word(9), (Counter::new(4), 1));
}

#[test]
fn test_counter_block_is_permutation() {
    let key = seed_to_key(0);

    assert_eq!(Counter::new(0).block(key), (0x6b20_0159, 0x99ba_4efe));
    assert_eq!(Counter::new(1).block(key), (0x375f_238f, 0xcddb_151d));
}
