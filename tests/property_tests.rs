// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/property_tests.rs
// Version: 1.0.0
//
// Property-based tests for fingerprint determinism, score consistency and
// best-candidate monotonicity.

use monomine_miner::core::{
    BestCandidate, CounterNonces, FingerprintHasher, Nonce, PlayerId, Seed, derive_fingerprint,
    leading_zero_bits,
};
use monomine_miner::miner::HashSearchEngine;
use proptest::prelude::*;

fn word() -> impl Strategy<Value = [u8; 32]> {
    prop::array::uniform32(any::<u8>())
}

proptest! {
    #[test]
    fn prop_fingerprint_is_deterministic(seed in word(), player in word(), nonce in word()) {
        let (seed, player, nonce) = (Seed(seed), PlayerId(player), Nonce(nonce));
        let once = derive_fingerprint(&seed, &player, &nonce);
        let again = derive_fingerprint(&seed, &player, &nonce);
        prop_assert_eq!(once, again);

        let mut hasher = FingerprintHasher::new(&seed, &player);
        prop_assert_eq!(hasher.fingerprint(&nonce), once);
    }

    #[test]
    fn prop_score_matches_bit_count(bytes in word()) {
        let score = leading_zero_bits(&bytes);
        prop_assert!(score <= 256);

        let mut expected = 0;
        'outer: for byte in bytes {
            for bit in (0..8).rev() {
                if byte >> bit & 1 == 1 {
                    break 'outer;
                }
                expected += 1;
            }
        }
        prop_assert_eq!(score, expected);
    }

    #[test]
    fn prop_best_candidate_never_worsens(words in prop::collection::vec(word(), 1..64)) {
        let mut best = BestCandidate::default();
        let mut smallest = None;
        for (i, bytes) in words.iter().enumerate() {
            let fingerprint = monomine_miner::core::Fingerprint(*bytes);
            let before = best.value;
            best.offer(fingerprint, Nonce([i as u8; 32]));
            prop_assert!(best.value <= before);
            if let Some(recorded) = best.fingerprint {
                prop_assert_eq!(best.score, recorded.difficulty_score());
                prop_assert_eq!(best.value, recorded.value());
            }
            let value = fingerprint.value();
            smallest = Some(match smallest {
                Some(current) if current <= value => current,
                _ => value,
            });
        }
        prop_assert_eq!(Some(best.value), smallest);
    }

    #[test]
    fn prop_engine_best_is_minimum_of_batches(seed in word(), start in word(), batches in 1usize..6) {
        let seed = Seed(seed);
        let player = PlayerId::default();
        let mut engine = HashSearchEngine::new(player, Box::new(CounterNonces::starting_at(start)));
        prop_assert!(engine.start(Some(seed), player));

        let mut previous = engine.best().value;
        for _ in 0..batches {
            engine.step_batch(32).unwrap();
            prop_assert!(engine.best().value <= previous);
            previous = engine.best().value;
        }

        let fingerprint = engine.best().fingerprint.unwrap();
        let nonce = engine.best().nonce.unwrap();
        prop_assert_eq!(derive_fingerprint(&seed, &player, &nonce), fingerprint);
        prop_assert!(engine.improvements() >= 1);
    }
}
