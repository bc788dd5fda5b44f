// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/chain/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for the contract-facing side of the
// MonoMine miner: where seeds come from, how results leave, and how the
// day's standings are reconciled.
//
// Tree Location:
// - src/chain/mod.rs (chain module entry point)
// - Submodules: leaderboard, seed, submit

pub mod leaderboard;
pub mod seed;
pub mod submit;

pub use leaderboard::{Leaderboard, SubmissionEvent};
pub use seed::{FileSeedSource, SeedRefresher, SeedSource, SeedSourceError, StaticSeed};
pub use submit::{
    RelayRequest, RelayResponse, RelaySubmitter, RelayTransport, SubmissionState, SubmitError,
    cooldown_remaining, decode_rpc_error, encode_submit_calldata, friendly_error,
    interpret_relay_response,
};

// Changelog:
// - v1.0.0: Replaces the stratum pool module.
