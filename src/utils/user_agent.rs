// MonoMine Miner - Free and Open Source Software Statement
//
// File: src/utils/user_agent.rs
// Version: 1.0.0

/// Client identifier used in the startup banner and the web status payload
pub fn user_agent() -> String {
    format!(
        "monomine-miner/{} ({})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}
