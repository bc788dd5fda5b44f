// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/rate.rs
// Version: 1.1.0
//
// This file implements the attempts-per-second reporter for the MonoMine
// miner, located in the stats subdirectory of the miner module. It drains the
// engine's attempts counter roughly once a second.
//
// Tree Location:
// - src/miner/stats/rate.rs (hashrate sampling)
// - Depends on: std, tokio, miner/sink

use crate::miner::sink::RateSink;
use log::debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

const LOG_TARGET: &str = "monomine::rate";

/// Samples closer together than this are skipped
pub const MIN_SAMPLE_INTERVAL: Duration = Duration::from_millis(950);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateSample {
    pub rate: u64,
    pub attempts: u64,
}

pub struct RateReporter {
    attempts: Arc<AtomicU64>,
    last_tick: Instant,
    latest: Arc<AtomicU64>,
}

impl RateReporter {
    pub fn new(attempts: Arc<AtomicU64>) -> Self {
        Self::starting_at(attempts, Instant::now())
    }

    pub fn starting_at(attempts: Arc<AtomicU64>, at: Instant) -> Self {
        Self {
            attempts,
            last_tick: at,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Drain the window and return the attempts it held with their rate,
    /// or None when less than MIN_SAMPLE_INTERVAL has passed.
    pub fn sample_window_at(&mut self, now: Instant) -> Option<RateSample> {
        let elapsed = now.saturating_duration_since(self.last_tick);
        if elapsed < MIN_SAMPLE_INTERVAL {
            return None;
        }

        let attempts = self.attempts.swap(0, Ordering::Relaxed);
        let rate = (attempts as f64 / elapsed.as_secs_f64()).round() as u64;
        self.latest.store(rate, Ordering::Relaxed);
        self.last_tick = now;
        Some(RateSample { rate, attempts })
    }

    /// Emit `round(attempts / elapsed)` and reset the window
    pub fn sample_at(&mut self, now: Instant) -> Option<u64> {
        self.sample_window_at(now).map(|sample| sample.rate)
    }

    pub fn sample(&mut self) -> Option<u64> {
        self.sample_at(Instant::now())
    }

    /// Last emitted rate, 0 before the first sample
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::Relaxed)
    }

    /// Shared view of the last emitted rate
    pub fn latest_handle(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.latest)
    }

    /// Sample every `period` and push each rate to the sinks
    pub fn spawn(mut self, sinks: Vec<Arc<dyn RateSink>>, period: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                if let Some(sample) = self.sample_window_at(Instant::now()) {
                    debug!(target: LOG_TARGET, "hashes/s: {} ({} attempts)", sample.rate, sample.attempts);
                    for sink in &sinks {
                        sink.on_attempts(sample.attempts);
                        sink.on_rate(sample.rate);
                    }
                }
            }
        })
    }
}

// Changelog:
// - v1.1.0: Sinks also receive the attempts behind each sample.
// - v1.0.1: Guard against sub-second windows (0.95s minimum).
// - v1.0.0: Replaced per-thread cumulative hashrate with windowed sampling.
