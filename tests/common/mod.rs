// MonoMine Miner - Free and Open Source Software Statement
//
// File: tests/common/mod.rs
// Version: 1.0.0
//
// Shared fixtures for the integration tests: a scripted nonce source and
// recording sinks.

#![allow(dead_code)]

use monomine_miner::core::{Nonce, NonceSource, PlayerId, Seed, derive_fingerprint};
use monomine_miner::miner::{BestResultSink, Improvement, RateSink, StopHandle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn nonce_from_u64(value: u64) -> Nonce {
    let mut bytes = [0u8; 32];
    bytes[24..].copy_from_slice(&value.to_be_bytes());
    Nonce(bytes)
}

pub fn seed_from_byte(byte: u8) -> Seed {
    Seed([byte; 32])
}

/// Two nonces ordered by their fingerprint: (worse, better)
pub fn worse_then_better(seed: &Seed, player: &PlayerId) -> (Nonce, Nonce) {
    let a = nonce_from_u64(1);
    let b = nonce_from_u64(2);
    let fa = derive_fingerprint(seed, player, &a).value();
    let fb = derive_fingerprint(seed, player, &b).value();
    if fa > fb { (a, b) } else { (b, a) }
}

/// Nonce whose fingerprint is the median of nine candidates, so that both
/// better and worse fingerprints are easy to find under any other seed
pub fn median_nonce(seed: &Seed, player: &PlayerId) -> Nonce {
    let mut candidates: Vec<Nonce> = (100..109).map(nonce_from_u64).collect();
    candidates.sort_by_key(|nonce| derive_fingerprint(seed, player, nonce).value());
    candidates[4]
}

/// First nonces from 1000 upward whose fingerprint under `seed` is above and
/// below `threshold`: (worse, better)
pub fn around_threshold(
    seed: &Seed,
    player: &PlayerId,
    threshold: monomine_miner::core::U256,
) -> (Nonce, Nonce) {
    let mut worse = None;
    let mut better = None;
    for value in 1000..5000u64 {
        let nonce = nonce_from_u64(value);
        let fingerprint = derive_fingerprint(seed, player, &nonce).value();
        if fingerprint > threshold && worse.is_none() {
            worse = Some(nonce);
        }
        if fingerprint < threshold && better.is_none() {
            better = Some(nonce);
        }
        if worse.is_some() && better.is_some() {
            break;
        }
    }
    (worse.expect("no worse nonce"), better.expect("no better nonce"))
}

/// Replays a fixed list of nonces, cycling when exhausted
pub struct ScriptedNonces {
    script: Vec<Nonce>,
    position: usize,
    reseeds: Arc<AtomicUsize>,
}

impl ScriptedNonces {
    pub fn new(script: Vec<Nonce>) -> Self {
        Self {
            script,
            position: 0,
            reseeds: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Counter of reseed calls, readable after the source moves into an engine
    pub fn reseed_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.reseeds)
    }
}

impl NonceSource for ScriptedNonces {
    fn next_nonce(&mut self) -> Nonce {
        let nonce = self.script[self.position % self.script.len()];
        self.position += 1;
        nonce
    }

    fn reseed(&mut self) {
        self.reseeds.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub improvements: Mutex<Vec<Improvement>>,
    pub rates: Mutex<Vec<u64>>,
    pub attempts: Mutex<Vec<u64>>,
}

impl RecordingSink {
    pub fn improvements(&self) -> Vec<Improvement> {
        self.improvements.lock().unwrap().clone()
    }

    pub fn rates(&self) -> Vec<u64> {
        self.rates.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> Vec<u64> {
        self.attempts.lock().unwrap().clone()
    }
}

impl BestResultSink for RecordingSink {
    fn on_improvement(&self, improvement: &Improvement) {
        self.improvements.lock().unwrap().push(improvement.clone());
    }
}

impl RateSink for RecordingSink {
    fn on_rate(&self, hashes_per_second: u64) {
        self.rates.lock().unwrap().push(hashes_per_second);
    }

    fn on_attempts(&self, attempts: u64) {
        self.attempts.lock().unwrap().push(attempts);
    }
}

/// Panics on every improvement
pub struct PanickingSink;

impl BestResultSink for PanickingSink {
    fn on_improvement(&self, _improvement: &Improvement) {
        panic!("sink failure");
    }
}

/// Clears the running flag on the first improvement it sees
pub struct StopOnImprovement {
    pub handle: Mutex<Option<StopHandle>>,
}

impl StopOnImprovement {
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
        }
    }

    pub fn arm(&self, handle: StopHandle) {
        *self.handle.lock().unwrap() = Some(handle);
    }
}

impl BestResultSink for StopOnImprovement {
    fn on_improvement(&self, _improvement: &Improvement) {
        if let Some(handle) = self.handle.lock().unwrap().as_ref() {
            handle.stop();
        }
    }
}
