// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/error.rs
// Version: 1.0.0

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("No seed is bound to the search session")]
    SeedUnavailable,

    #[error("Search batch aborted: {message}")]
    BatchPanicked { message: String },
}

/// Why a scheduled search session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The running flag was cleared
    Stopped,
    /// The seed source reported no seed or went away
    SeedLost,
    /// A batch failed; the session needs an explicit restart
    Failed(SearchError),
}
