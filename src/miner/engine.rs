// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/engine.rs
// Version: 1.2.0
//
// This file contains the hash search engine for the MonoMine miner, located in
// the miner module. It owns one search session: the bound seed and player, the
// nonce policy, the best candidate and the improvement telemetry.

use crate::core::{BestCandidate, FingerprintHasher, NonceSource, PlayerId, Seed};
use crate::miner::error::SearchError;
use crate::miner::sink::{BestResultSink, Improvement};
use log::{debug, info};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

const LOG_TARGET: &str = "monomine::engine";

/// Cloneable handle that clears the engine's running flag from another task
#[derive(Clone)]
pub struct StopHandle {
    running: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

pub struct HashSearchEngine {
    player_id: PlayerId,
    hasher: Option<FingerprintHasher>,
    nonces: Box<dyn NonceSource>,
    best: BestCandidate,
    improvements: u64,
    last_improvement: Option<Instant>,
    running: Arc<AtomicBool>,
    attempts: Arc<AtomicU64>,
    sinks: Vec<Arc<dyn BestResultSink>>,
}

impl HashSearchEngine {
    pub fn new(player_id: PlayerId, nonces: Box<dyn NonceSource>) -> Self {
        Self {
            player_id,
            hasher: None,
            nonces,
            best: BestCandidate::default(),
            improvements: 0,
            last_improvement: None,
            running: Arc::new(AtomicBool::new(false)),
            attempts: Arc::new(AtomicU64::new(0)),
            sinks: Vec::new(),
        }
    }

    pub fn add_sink(&mut self, sink: Arc<dyn BestResultSink>) {
        self.sinks.push(sink);
    }

    /// Begin a session. Returns false (and changes nothing) when no seed is
    /// available or the engine is already running.
    pub fn start(&mut self, seed: Option<Seed>, player_id: PlayerId) -> bool {
        if self.is_running() {
            debug!(target: LOG_TARGET, "Start ignored: search already running");
            return false;
        }
        let Some(seed) = seed else {
            debug!(target: LOG_TARGET, "Start ignored: no seed available yet");
            return false;
        };

        if player_id != self.player_id {
            info!(target: LOG_TARGET, "Player changed to {}, clearing best candidate", player_id);
            self.player_id = player_id;
            self.hasher = None;
            self.reset();
        }

        match self.seed() {
            Some(current) if current == seed => {}
            Some(_) => self.on_seed_changed(seed),
            None => {
                self.hasher = Some(FingerprintHasher::new(&seed, &self.player_id));
                self.nonces.reseed();
            }
        }

        self.running.store(true, Ordering::SeqCst);
        info!(target: LOG_TARGET, "⛏️ Mining started on seed {}", seed);
        true
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            running: Arc::clone(&self.running),
        }
    }

    /// Evaluate `batch_size` nonces against the bound seed. Returns how many
    /// of them improved the best candidate.
    pub fn step_batch(&mut self, batch_size: usize) -> Result<usize, SearchError> {
        let hasher = self.hasher.as_mut().ok_or(SearchError::SeedUnavailable)?;

        let mut improved = 0;
        for _ in 0..batch_size {
            let nonce = self.nonces.next_nonce();
            let fingerprint = hasher.fingerprint(&nonce);
            if !self.best.offer(fingerprint, nonce) {
                continue;
            }

            improved += 1;
            self.improvements += 1;
            self.last_improvement = Some(Instant::now());

            let improvement = Improvement {
                fingerprint_hex: fingerprint.to_hex(),
                nonce_hex: nonce.to_hex(),
                score: self.best.score,
                improvements: self.improvements,
            };
            debug!(target: LOG_TARGET,
                "New best {} (difficulty: {} bits, improvements: {})",
                improvement.fingerprint_hex, improvement.score, improvement.improvements
            );
            for sink in &self.sinks {
                sink.on_improvement(&improvement);
            }
        }

        self.attempts.fetch_add(batch_size as u64, Ordering::Relaxed);
        Ok(improved)
    }

    /// Rebind the working seed; the recorded best stays until it is beaten.
    pub fn on_seed_changed(&mut self, seed: Seed) {
        match self.hasher.as_mut() {
            Some(hasher) if hasher.seed() == seed => return,
            Some(hasher) => hasher.rebind_seed(&seed),
            None => self.hasher = Some(FingerprintHasher::new(&seed, &self.player_id)),
        }
        self.nonces.reseed();
        info!(target: LOG_TARGET, "🔄 Seed rolled, rebound to {}", seed);
    }

    /// Forget the best candidate and the improvement telemetry
    pub fn reset(&mut self) {
        self.best = BestCandidate::default();
        self.improvements = 0;
        self.last_improvement = None;
    }

    pub fn best(&self) -> &BestCandidate {
        &self.best
    }

    pub fn improvements(&self) -> u64 {
        self.improvements
    }

    pub fn last_improvement(&self) -> Option<Instant> {
        self.last_improvement
    }

    pub fn seed(&self) -> Option<Seed> {
        self.hasher.as_ref().map(FingerprintHasher::seed)
    }

    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    /// Attempts counter shared with the rate reporter
    pub fn attempts_counter(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.attempts)
    }
}

// Changelog:
// - v1.2.0: Seed rotation rebinds the preimage buffer and reseeds the nonce policy.
// - v1.1.0: Best candidate improvements are pushed to registered sinks.
// - v1.0.0: Replaced per-thread share search with a single-session best-hash search.
