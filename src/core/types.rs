// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.1.0
//
// This file defines core data structures for the MonoMine miner, located in the
// core subdirectory. It includes the 32-byte words fed to the fingerprint
// function, the best candidate record and the command-line arguments.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap, hex, serde, thiserror, core/difficulty, core/nonce

use crate::core::difficulty::{U256, fingerprint_value, leading_zero_bits};
use crate::core::nonce::NoncePolicy;
use clap::Parser;
use log::LevelFilter;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// MonoMine contract on Monad testnet, the default submission target
pub const MONOMINE_ADDRESS: &str = "0x49c52AEb95BEA2E22bede837B77C4e482840751e";

/// Raw 32-byte word as it appears on chain
pub type Bytes32 = [u8; 32];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexWordError {
    #[error("Expected 32 bytes (64 hex digits), got {len} bytes")]
    WrongLength { len: usize },

    #[error("Invalid hex word: {source}")]
    InvalidHex {
        #[from]
        source: hex::FromHexError,
    },
}

/// Parse a 0x-prefixed (or bare) 64 digit hex string into a word
pub fn parse_word(text: &str) -> Result<Bytes32, HexWordError> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let bytes = hex::decode(digits)?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| HexWordError::WrongLength { len })
}

macro_rules! bytes32_word {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name(pub Bytes32);

        impl $name {
            pub const fn from_bytes(bytes: Bytes32) -> Self {
                Self(bytes)
            }

            pub fn as_bytes(&self) -> &Bytes32 {
                &self.0
            }

            /// 0x-prefixed lowercase hex, always 64 digits
            pub fn to_hex(&self) -> String {
                format!("0x{}", hex::encode(self.0))
            }
        }

        impl From<Bytes32> for $name {
            fn from(bytes: Bytes32) -> Self {
                Self(bytes)
            }
        }

        impl FromStr for $name {
            type Err = HexWordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_word(s).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

bytes32_word! {
    /// Daily seed published by the contract
    Seed
}

bytes32_word! {
    /// Player identity mixed into every fingerprint (zero-padded integer)
    PlayerId
}

bytes32_word! {
    /// Search variable
    Nonce
}

bytes32_word! {
    /// keccak256(seed ‖ player ‖ nonce)
    Fingerprint
}

impl PlayerId {
    /// Left-pad a numeric identity (e.g. a Farcaster FID) to 32 bytes
    pub fn from_fid(fid: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&fid.to_be_bytes());
        Self(bytes)
    }
}

impl Fingerprint {
    pub fn value(&self) -> U256 {
        fingerprint_value(&self.0)
    }

    pub fn difficulty_score(&self) -> u32 {
        leading_zero_bits(&self.0)
    }
}

/// Smallest fingerprint seen since the last reset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestCandidate {
    pub fingerprint: Option<Fingerprint>,
    pub nonce: Option<Nonce>,
    pub value: U256,
    pub score: u32,
}

impl Default for BestCandidate {
    fn default() -> Self {
        Self {
            fingerprint: None,
            nonce: None,
            value: U256::MAX,
            score: 0,
        }
    }
}

impl BestCandidate {
    pub fn is_found(&self) -> bool {
        self.fingerprint.is_some()
    }

    /// Record the candidate if it is strictly smaller; equal values keep the
    /// earlier one. Returns true when the record changed.
    pub fn offer(&mut self, fingerprint: Fingerprint, nonce: Nonce) -> bool {
        let value = fingerprint.value();
        if value >= self.value {
            return false;
        }
        self.score = fingerprint.difficulty_score();
        self.fingerprint = Some(fingerprint);
        self.nonce = Some(nonce);
        self.value = value;
        true
    }
}

/// Command-line arguments for the MonoMine miner
#[derive(Parser, Debug)]
#[command(
    name = "monomine",
    version,
    about = "Keccak best-hash miner for the MonoMine daily seed game",
    long_about = "MonoMine searches for the nonce whose keccak256(seed ‖ player ‖ nonce) is\n\
                  numerically smallest. The seed comes from --seed or from a file that an\n\
                  external chain reader keeps up to date (--seed-file).\n\n\
                  Examples:\n\
                    monomine --seed 0x<64 hex digits>\n\
                    monomine --seed-file ./seed.txt --player-id 1234 --web"
)]
pub struct Args {
    /// Fixed seed as 0x-prefixed 64 digit hex
    #[arg(long, value_name = "HEX", conflicts_with = "seed_file")]
    pub seed: Option<String>,

    /// Text file holding the current seed; re-read every --refresh-secs
    #[arg(long, value_name = "PATH")]
    pub seed_file: Option<PathBuf>,

    /// Numeric player identity mixed into every fingerprint
    #[arg(long, default_value = "0", value_name = "FID")]
    pub player_id: u64,

    /// Attempts per cooperative batch
    #[arg(long, default_value = "2048", value_name = "COUNT")]
    pub batch_size: usize,

    /// How nonces are drawn
    #[arg(long, value_enum, default_value_t = NoncePolicy::Counter)]
    pub nonce_policy: NoncePolicy,

    /// Seconds between seed source polls
    #[arg(long, default_value = "20", value_name = "SECONDS")]
    pub refresh_secs: u64,

    /// Seconds between dashboard summaries
    #[arg(long, default_value = "30", value_name = "SECONDS")]
    pub dashboard_secs: u64,

    /// Serve live statistics as JSON and over a WebSocket
    #[arg(long, default_value = "false")]
    pub web: bool,

    /// Port for --web
    #[arg(long, default_value = "8080", value_name = "PORT")]
    pub web_port: u16,

    /// Contract address the relay request targets
    #[arg(long, default_value = MONOMINE_ADDRESS, value_name = "ADDRESS")]
    pub contract: String,

    /// error | warn | info | debug | trace
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,
}

impl Args {
    /// Validate arguments and return helpful errors
    pub fn validate(&self) -> Result<(), String> {
        match (&self.seed, &self.seed_file) {
            (None, None) => {
                return Err("A seed is required. Use --seed HEX or --seed-file PATH".to_string());
            }
            (Some(seed), _) => {
                if let Err(e) = seed.parse::<Seed>() {
                    return Err(format!("Invalid --seed: {}", e));
                }
            }
            (None, Some(_)) => {}
        }

        if self.batch_size == 0 {
            return Err("Batch size must be greater than 0".to_string());
        }
        if self.batch_size > 1_000_000 {
            return Err("Batch size cannot exceed 1000000 attempts".to_string());
        }
        if self.refresh_secs == 0 {
            return Err("Refresh interval must be greater than 0 seconds".to_string());
        }
        if self.dashboard_secs == 0 {
            return Err("Dashboard interval must be greater than 0 seconds".to_string());
        }

        let contract = self.contract.strip_prefix("0x").unwrap_or(&self.contract);
        if contract.len() != 40 || !contract.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err("Contract must be a 0x-prefixed 20 byte address".to_string());
        }

        self.log_level_filter().map(|_| ())
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter, String> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| format!("Unknown log level: {}", self.log_level))
    }
}

// Changelog:
// - v1.1.0: Added submission target and web flags to Args.
// - v1.0.0: Replaced pool job and share types with seed, player, nonce and
//   fingerprint words plus the best candidate record.
