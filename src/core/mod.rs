// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for the core functionality of the
// MonoMine miner, located in the core subdirectory. It declares submodules and
// re-exports key types for use throughout the project.

pub mod difficulty;
pub mod keccak;
pub mod nonce;
pub mod types;

// Re-export the most commonly used items
pub use difficulty::{U256, fingerprint_value, leading_zero_bits};
pub use keccak::{FingerprintHasher, derive_fingerprint, keccak256};
pub use nonce::{CounterNonces, NoncePolicy, NonceSource, RandomNonces};
pub use types::{Args, BestCandidate, Bytes32, Fingerprint, HexWordError, Nonce, PlayerId, Seed};
