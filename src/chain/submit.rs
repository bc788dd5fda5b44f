// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/chain/submit.rs
// Version: 1.2.0
//
// This file prepares best-candidate submissions for the MonoMine contract,
// located in the chain subdirectory. It builds the calldata and the gasless
// relay request, interprets relay replies, runs the pre-submission checks and
// maps provider errors to readable messages. Moving bytes over HTTP is left to
// a RelayTransport implementation.
//
// Tree Location:
// - src/chain/submit.rs (submission helpers)
// - Depends on: serde, serde_json, rand, tokio, core

use crate::core::keccak::function_selector;
use crate::core::{BestCandidate, Nonce};
use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

const LOG_TARGET: &str = "monomine::submit";

pub const SUBMIT_SIGNATURE: &str = "submit(bytes32)";
pub const RELAY_GAS_LIMIT: u64 = 300_000;
pub const PRIORITY_RETRIES: usize = 2;
const BODY_EXCERPT_CHARS: usize = 200;
const RETRY_PAUSE_MIN_MS: u64 = 150;
const RETRY_PAUSE_SPREAD_MS: u64 = 300;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Mine first to get a nonce.")]
    NothingToSubmit,

    #[error("Game is currently paused.")]
    Paused,

    #[error("Passport not found, mint a TMF Passport first.")]
    MissingPassport,

    #[error("Cooldown active: wait {remaining}s.")]
    Cooldown { remaining: u64 },

    #[error("Another transaction has higher priority")]
    HigherPriority,

    #[error("Relay HTTP {status}: {body}")]
    RelayHttp { status: u16, body: String },

    #[error("Relay did not return tx hash: {body}")]
    MissingTxHash { body: String },

    #[error("{0}")]
    Transport(String),
}

/// JSON body accepted by the gasless relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayRequest {
    pub target: String,
    pub data: String,
    pub gas_limit: u64,
}

impl RelayRequest {
    pub fn for_nonce(target: &str, nonce: &Nonce) -> Self {
        Self {
            target: target.to_string(),
            data: format!("0x{}", hex::encode(encode_submit_calldata(nonce))),
            gas_limit: RELAY_GAS_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one relay request. Implementations own the HTTP client.
pub trait RelayTransport: Send + Sync {
    fn post(
        &self,
        request: &RelayRequest,
    ) -> impl Future<Output = Result<RelayResponse, SubmitError>> + Send;
}

/// Contract state read before submitting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub paused: bool,
    pub has_passport: bool,
    pub cooldown_secs: u64,
    /// Unix seconds of this player's last accepted submission today
    pub last_submit_at: u64,
}

impl SubmissionState {
    /// Checks run in contract order: pause, passport, cooldown
    pub fn preflight(&self, now: u64) -> Result<(), SubmitError> {
        if self.paused {
            return Err(SubmitError::Paused);
        }
        if !self.has_passport {
            return Err(SubmitError::MissingPassport);
        }
        let remaining = cooldown_remaining(self.cooldown_secs, self.last_submit_at, now);
        if remaining > 0 {
            return Err(SubmitError::Cooldown { remaining });
        }
        Ok(())
    }
}

pub fn cooldown_remaining(cooldown_secs: u64, last_submit_at: u64, now: u64) -> u64 {
    cooldown_secs.saturating_sub(now.saturating_sub(last_submit_at))
}

/// `submit(bytes32)` selector followed by the nonce word
pub fn encode_submit_calldata(nonce: &Nonce) -> Vec<u8> {
    let mut calldata = Vec::with_capacity(36);
    calldata.extend_from_slice(&function_selector(SUBMIT_SIGNATURE));
    calldata.extend_from_slice(nonce.as_bytes());
    calldata
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}

/// Turn a relay reply into a transaction hash or a typed error
pub fn interpret_relay_response(status: u16, body: &str) -> Result<String, SubmitError> {
    if (200..300).contains(&status) {
        let json: serde_json::Value = serde_json::from_str(body).unwrap_or(serde_json::Value::Null);
        return ["tx_hash", "hash", "txHash"]
            .iter()
            .filter_map(|key| json.get(*key).and_then(|v| v.as_str()))
            .find(|hash| !hash.is_empty())
            .map(str::to_string)
            .ok_or_else(|| SubmitError::MissingTxHash { body: excerpt(body) });
    }

    let lower = body.to_lowercase();
    if (status == 500 || status == 502) && (lower.contains("higher priority") || lower.contains("-32603")) {
        return Err(SubmitError::HigherPriority);
    }

    Err(SubmitError::RelayHttp {
        status,
        body: excerpt(body),
    })
}

/// User-facing text for a relay or submission failure
pub fn friendly_error(raw: &str) -> String {
    let m = raw.to_lowercase();
    if m.contains("gas_limit too high") {
        "Relay cap hit: try again or submit directly.".to_string()
    } else if m.contains("quota") {
        "Out of free relay quota today.".to_string()
    } else if m.contains("passport") {
        "You need a TMF Passport to submit.".to_string()
    } else if m.contains("higher priority") {
        "Network busy, retrying…".to_string()
    } else {
        raw.to_string()
    }
}

/// User-facing text for a JSON-RPC provider error
pub fn decode_rpc_error(raw: &str) -> String {
    let m = raw.to_lowercase();
    if m.contains("another transaction has higher priority") {
        "Network busy: another tx has priority. Try again.".to_string()
    } else if m.contains("user rejected") {
        "Transaction rejected in wallet.".to_string()
    } else if m.contains("nonce too low") {
        "Wallet nonce too low; wait a moment and retry.".to_string()
    } else if m.contains("insufficient funds") {
        "Not enough MON for gas.".to_string()
    } else if m.contains("execution reverted") {
        "Reverted by contract (cooldown/passport/paused).".to_string()
    } else {
        raw.to_string()
    }
}

pub struct RelaySubmitter<T: RelayTransport> {
    transport: T,
    target: String,
    retries: usize,
}

impl<T: RelayTransport> RelaySubmitter<T> {
    pub fn new(transport: T, target: impl Into<String>) -> Self {
        Self {
            transport,
            target: target.into(),
            retries: PRIORITY_RETRIES,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Relay one nonce, retrying while the node reports a higher-priority
    /// transaction. Returns the transaction hash.
    pub async fn submit_nonce(&self, nonce: &Nonce) -> Result<String, SubmitError> {
        let request = RelayRequest::for_nonce(&self.target, nonce);
        let mut attempt = 0;
        loop {
            let outcome = match self.transport.post(&request).await {
                Ok(response) => interpret_relay_response(response.status, &response.body),
                Err(e) => Err(e),
            };

            match outcome {
                Ok(tx_hash) => {
                    info!(target: LOG_TARGET, "📤 Relay accepted: {}", tx_hash);
                    return Ok(tx_hash);
                }
                Err(SubmitError::HigherPriority) if attempt < self.retries => {
                    attempt += 1;
                    let pause = RETRY_PAUSE_MIN_MS + rand::thread_rng().gen_range(0..RETRY_PAUSE_SPREAD_MS);
                    debug!(target: LOG_TARGET, "Relay busy, retry {} in {}ms", attempt, pause);
                    tokio::time::sleep(Duration::from_millis(pause)).await;
                }
                Err(e) => {
                    warn!(target: LOG_TARGET, "❌ Relay rejected submission: {}", e);
                    return Err(e);
                }
            }
        }
    }

    /// Preflight the contract state, then relay the best nonce
    pub async fn submit_best(
        &self,
        best: &BestCandidate,
        state: &SubmissionState,
        now: u64,
    ) -> Result<String, SubmitError> {
        let nonce = best.nonce.ok_or(SubmitError::NothingToSubmit)?;
        state.preflight(now)?;
        self.submit_nonce(&nonce).await
    }
}

// Changelog:
// - v1.2.0: Jittered retry on higher-priority relay rejections.
// - v1.1.0: Preflight checks and provider error mapping.
// - v1.0.0: Calldata and relay request encoding.
