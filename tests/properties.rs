//! Property tests for producers and drivers.

use proptest::prelude::*;
use stepseq::prelude::*;

fn expected_len(start: i64, step: i64, stop: i64) -> usize {
    if start >= stop {
        0
    } else {
        ((stop - start + step - 1) / step) as usize
    }
}

proptest! {
    #[test]
    fn range_emits_the_arithmetic_sequence(
        start in -1_000_i64..1_000,
        step in 1_i64..50,
        stop in -1_000_i64..1_000,
    ) {
        let values = take(usize::MAX, range(start, step, stop));

        prop_assert_eq!(values.len(), expected_len(start, step, stop));
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(*value, start + step * i as i64);
            prop_assert!(*value < stop);
        }
    }

    #[test]
    fn take_never_exceeds_request(
        start in -100_i64..100,
        step in -5_i64..5,
        stop in -100_i64..100,
        n in 0_usize..300,
    ) {
        let r = range(start, step, stop);
        let values = take(n, &r);
        prop_assert!(values.len() <= n);
        if step > 0 {
            prop_assert_eq!(values.len(), n.min(expected_len(start, step, stop)));
        }
    }

    #[test]
    fn take_zero_is_empty(start in any::<i32>(), step in any::<i32>(), stop in any::<i32>()) {
        prop_assert!(take(0, range(start, step, stop)).is_empty());
    }

    #[test]
    fn take_is_idempotent(
        start in any::<i16>(),
        step in any::<i16>(),
        stop in any::<i16>(),
        n in 0_usize..100,
    ) {
        let r = range(start, step, stop);
        prop_assert_eq!(take(n, &r), take(n, &r));
    }

    #[test]
    fn resumed_pulls_match_one_take(
        start in -200_i64..200,
        step in 1_i64..20,
        stop in -200_i64..200,
        split in 0_usize..50,
    ) {
        let r = range(start, step, stop);
        let head = pull(split, &r, Ctx::Initial);
        let mut joined = head.values;
        if let Some(ctx) = head.resume {
            joined.extend(pull(usize::MAX, &r, ctx).values);
        }
        prop_assert_eq!(joined, take(usize::MAX, &r));
    }

    #[test]
    fn traversal_matches_take(
        start in any::<u8>(),
        step in any::<u8>(),
        stop in any::<u8>(),
        n in 0_usize..300,
    ) {
        let r = range(start, step, stop);
        let via_iter: Vec<u8> = r.traverse().take(n).collect();
        prop_assert_eq!(via_iter, take(n, r));
    }
}
