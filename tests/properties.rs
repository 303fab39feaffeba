use proptest::prelude::*;

use splitrand::{Key, fold_in, permute, random_bits, random_bits_at, split, unpermute};

proptest! {
    /// The permutation is a bijection: its inverse recovers every input.
    #[test]
    fn prop_unpermute_inverts_permute(
        key in any::<(u32, u32)>(),
        input in any::<(u32, u32)>(),
    ) {
        prop_assert_eq!(unpermute(key, permute(key, input)), input);
    }

    #[test]
    fn prop_random_bits_window_matches_stream(
        hi in any::<u32>(),
        lo in any::<u32>(),
        offset in 0u64..512,
        count in 0u64..512,
    ) {
        let key = Key::from_words(hi, lo);
        let full = random_bits(key, offset + count).unwrap();
        let window = random_bits_at(key, offset, count).unwrap();

        prop_assert_eq!(&window[..], &full[offset as usize..]);
    }

    #[test]
    fn prop_random_bits_deterministic(hi in any::<u32>(), lo in any::<u32>(), count in 0u64..256) {
        let key = Key::from_words(hi, lo);

        prop_assert_eq!(random_bits(key, count).unwrap(), random_bits(key, count).unwrap());
    }

    #[test]
    fn prop_split_pair_distinct(hi in any::<u32>(), lo in any::<u32>()) {
        let key = Key::from_words(hi, lo);
        let keys = split(key, 2).unwrap();

        prop_assert_ne!(keys[0], keys[1]);
        prop_assert_ne!(keys[0], key);
        prop_assert_ne!(keys[1], key);
    }

    #[test]
    fn prop_fold_in_injective(hi in any::<u32>(), lo in any::<u32>(), a in any::<u32>(), b in any::<u32>()) {
        prop_assume!(a != b);
        let key = Key::from_words(hi, lo);

        prop_assert_ne!(fold_in(key, a), fold_in(key, b));
    }
}
