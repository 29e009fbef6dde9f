#![no_main]
use libfuzzer_sys::fuzz_target;
use packmap::{pack, unpack, Layout};

fuzz_target!(|data: (Vec<u64>, u8, u8)| {
    let (raw, width_raw, bytes_raw) = data;
    let width = (width_raw % 64) as u32 + 1;
    let word_bits = ((bytes_raw % 40) as u32 + 1) * 8;
    if width > word_bits {
        assert!(pack(&raw, width, word_bits).is_err());
        return;
    }

    let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
    let values: Vec<u64> = raw.iter().map(|&v| v & mask).collect();
    let layout = Layout::new(width, word_bits).unwrap();
    let words = pack(&values, width, word_bits).unwrap();

    assert_eq!(words.len(), values.len().div_ceil(layout.per_word()));
    for (i, &v) in values.iter().enumerate() {
        assert_eq!(unpack(&words, width, values.len(), i).unwrap(), v);
    }
    assert!(unpack(&words, width, values.len(), values.len()).is_err());
});
