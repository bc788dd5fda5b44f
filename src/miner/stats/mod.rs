// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/mod.rs
// Version: 1.1.0
//
// This file is the module declaration for statistics tracking in the MonoMine
// miner, located in the stats subdirectory of the miner module.
//
// Tree Location:
// - src/miner/stats/mod.rs (stats module entry point)
// - Submodules: miner_stats, rate

pub mod miner_stats;
pub mod rate;

pub use miner_stats::{MinerStats, StatsSnapshot};
pub use rate::{RateReporter, RateSample};

// Changelog:
// - v1.1.0: Per-thread stats replaced by the windowed rate reporter.
// - v1.0.0: Initial stats module.
