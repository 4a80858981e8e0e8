use super::*;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

#[test]
fn test_table_recurrence() {
    assert_eq!(BYTE_POPCOUNT[0], 0);
    (1..256usize).for_each(|i| {
        assert_eq!(
            BYTE_POPCOUNT[i],
            BYTE_POPCOUNT[i >> 1] + (i & 1) as u8,
            "recurrence broken at {}",
            i
        )
    });
}

#[test]
fn test_table_entries() {
    (0..256u32).for_each(|i| {
        assert_eq!(
            BYTE_POPCOUNT[i as usize] as u32,
            i.count_ones(),
            "mismatch at {}",
            i
        )
    });
    assert_eq!(BYTE_POPCOUNT[0xFF], 8);
    assert_eq!(BYTE_POPCOUNT[0x80], 1);
}

#[test]
fn test_table_extremes() {
    assert_eq!(count_via_table(0), 0);
    assert_eq!(count_via_table(u64::MAX), 64);
    assert_eq!(count_via_table_inline(0), 0);
    assert_eq!(count_via_table_inline(u64::MAX), 64);
}

#[test]
fn test_every_byte_position() {
    // a single byte must be counted the same no matter where in the word it sits
    for shift in (0..64).step_by(8) {
        for byte in 0..256u64 {
            let word = byte << shift;
            assert_eq!(
                count_via_table(word),
                byte.count_ones(),
                "mismatch at byte {:#x} shifted by {}",
                byte,
                shift
            );
            assert_eq!(count_via_table_inline(word), count_via_table(word));
        }
    }
}

#[test]
fn test_fixture() {
    assert_eq!(count_via_table(crate::FIXTURE_WORD), 32);
    assert_eq!(count_via_table_inline(crate::FIXTURE_WORD), 32);
}

#[test]
fn test_randomized_words() {
    let mut rng = StdRng::from_seed([
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
        25, 26, 27, 28, 29, 30, 31,
    ]);

    for _ in 0..10_000 {
        let word = rng.next_u64();
        assert_eq!(count_via_table(word), word.count_ones(), "mismatch at {:#x}", word);
        assert_eq!(
            count_via_table_inline(word),
            word.count_ones(),
            "inline mismatch at {:#x}",
            word
        );
    }
}
