// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/mod.rs
// Version: 1.1.0
//
// This file is the module declaration for utility functions in the MonoMine
// miner, located in the utils subdirectory.
//
// Tree Location:
// - src/utils/mod.rs (utils module entry point)
// - Submodules: format, logging, user_agent

pub mod format;
pub mod logging;
pub mod user_agent;

pub use format::FormatUtils;
pub use logging::init_logging;
pub use user_agent::user_agent;

// Changelog:
// - v1.1.0: Added log4rs console setup.
// - v1.0.0: Formatting helpers.
