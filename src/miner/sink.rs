// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/sink.rs
// Version: 1.0.0
//
// This file declares the observer seams through which the search engine and
// the rate reporter publish results, located in the miner module.

use serde::Serialize;

/// Published every time the best candidate improves
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Improvement {
    pub fingerprint_hex: String,
    pub nonce_hex: String,
    pub score: u32,
    /// Cumulative improvements in this session, including this one
    pub improvements: u64,
}

pub trait BestResultSink: Send + Sync {
    fn on_improvement(&self, improvement: &Improvement);
}

pub trait RateSink: Send + Sync {
    fn on_rate(&self, hashes_per_second: u64);

    /// Attempts drained for the window behind the last rate
    fn on_attempts(&self, _attempts: u64) {}
}
