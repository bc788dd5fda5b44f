// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/mod.rs
// Version: 1.2.0
//
// This file is the module declaration for the miner functionality of the
// MonoMine miner, located in the miner subdirectory.
//
// Tree Location:
// - src/miner/mod.rs (miner module entry point)
// - Submodules: engine, error, scheduler, sink, stats

pub mod engine;
pub mod error;
pub mod scheduler;
pub mod sink;
pub mod stats;

// Re-export key types for convenience
pub use engine::{HashSearchEngine, StopHandle};
pub use error::{SearchError, SessionEnd};
pub use scheduler::{DEFAULT_BATCH_SIZE, Scheduler};
pub use sink::{BestResultSink, Improvement, RateSink};
pub use stats::{MinerStats, RateReporter, RateSample, StatsSnapshot};

// Changelog:
// - v1.2.0: Single cooperative search engine replaces the CPU and GPU workers.
// - v1.1.0: Observer sinks for improvements and rate samples.
// - v1.0.0: Initial miner module.
