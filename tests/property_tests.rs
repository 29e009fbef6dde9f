use packmap::{pack, unpack, verify_equivalent, Conf, DictMapping, Layout, NaiveMapping};
use proptest::prelude::*;

fn mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

proptest! {
    #[test]
    fn test_pack_unpack_roundtrip(
        width in 1..=64u32,
        word_bytes in 1..=40u32,
        raw in prop::collection::vec(any::<u64>(), 0..200),
    ) {
        let word_bits = word_bytes * 8;
        prop_assume!(width <= word_bits);
        let values: Vec<u64> = raw.iter().map(|&v| v & mask(width)).collect();

        let words = pack(&values, width, word_bits).unwrap();
        for (i, &expected) in values.iter().enumerate() {
            prop_assert_eq!(unpack(&words, width, values.len(), i).unwrap(), expected);
        }
    }

    #[test]
    fn test_pack_density(
        width in 1..=64u32,
        word_bytes in 1..=40u32,
        n in 0..500usize,
    ) {
        let word_bits = word_bytes * 8;
        prop_assume!(width <= word_bits);
        let layout = Layout::new(width, word_bits).unwrap();
        let values = vec![0u64; n];

        let words = pack(&values, width, word_bits).unwrap();
        prop_assert_eq!(words.len(), n.div_ceil(layout.per_word()));
        prop_assert_eq!(words.as_bytes().len(), words.len() * (word_bits / 8) as usize);
    }

    #[test]
    fn test_padding_is_zero(
        width in 1..=64u32,
        word_bytes in 1..=40u32,
        n in 1..300usize,
    ) {
        let word_bits = word_bytes * 8;
        prop_assume!(width <= word_bits);
        let layout = Layout::new(width, word_bits).unwrap();

        // All-ones values: any set bit outside an element would show up here.
        let values = vec![mask(width); n];
        let words = pack(&values, width, word_bits).unwrap();
        let set: u64 = words.as_bytes().iter().map(|b| b.count_ones() as u64).sum();
        prop_assert_eq!(set, n as u64 * width as u64);

        // Unused trailing slots decode as zero.
        let capacity = words.len() * layout.per_word();
        for i in n..capacity {
            prop_assert_eq!(unpack(&words, width, capacity, i).unwrap(), 0);
        }
    }

    #[test]
    fn test_dict_matches_naive(
        value_width in 1..=32u32,
        dict in prop::collection::vec(any::<u64>(), 1..=16),
        picks in prop::collection::vec(any::<usize>(), 0..400),
    ) {
        let values: Vec<u64> = dict.iter().map(|&v| v & mask(value_width)).collect();
        let indices: Vec<u64> = picks.iter().map(|&p| (p % values.len()) as u64).collect();
        let conf = Conf::new(256, 4, value_width);

        let packed = DictMapping::build(&indices, &values, conf).unwrap();
        let naive = NaiveMapping::build(&indices, &values, conf).unwrap();
        prop_assert_eq!(verify_equivalent(&packed, &naive).unwrap(), indices.len());
        for (k, &i) in indices.iter().enumerate() {
            prop_assert_eq!(packed.get(k).unwrap(), values[i as usize]);
        }
    }
}
