// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.1.0
//
// This file serves as the main library entry point for the MonoMine miner,
// located at the root of the source tree. It exports all public modules
// and types that the binary and the tests use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, miner, chain, utils

pub mod chain;
pub mod core;
pub mod miner;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::chain::{SeedRefresher, SeedSource};
pub use crate::core::{BestCandidate, Fingerprint, Nonce, PlayerId, Seed, difficulty, keccak};
pub use crate::miner::{HashSearchEngine, MinerStats, Scheduler, SessionEnd};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

// Changelog:
// - v1.1.0: Pool, benchmark and help modules replaced by chain.
// - v1.0.0: Initial library layout.
