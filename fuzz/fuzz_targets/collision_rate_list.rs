#![no_main]
use std::collections::HashSet;

use hashrate::collision_rate_list;
use libfuzzer_sys::{arbitrary::Unstructured, fuzz_target};
use wordset::arbitrary::{arb_multipliers, arb_nonempty_word_set};

fuzz_target!(|bytes| {
    let mut u = Unstructured::new(bytes);
    if let (Ok(words), Ok(multipliers)) = (arb_nonempty_word_set(&mut u), arb_multipliers(&mut u)) {
        let rates = collision_rate_list(&words, &multipliers).unwrap();
        assert_eq!(rates.len(), multipliers.len());
        for (rate, &m) in rates.iter().zip(&multipliers) {
            assert!(rate.invariants());
            assert_eq!(rate.multiplier(), m);
            let distinct: HashSet<_> = words.iter().map(|w| multhash::hash(w, m)).collect();
            assert_eq!(rate.collision_count(), words.len() - distinct.len());
        }
    }
});
