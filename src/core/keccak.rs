// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/keccak.rs
// Version: 1.0.1
//
// This file implements the fingerprint derivation used by MonoMine, located
// in the core subdirectory of the MonoMine miner source tree. A fingerprint is
// the Ethereum flavoured keccak256 of seed ‖ player ‖ nonce.
//
// Tree Location:
// - src/core/keccak.rs (fingerprint derivation)
// - Depends on: sha3 crate

use crate::core::types::{Bytes32, Fingerprint, Nonce, PlayerId, Seed};
use sha3::{Digest, Keccak256};

/// seed (32) ‖ player (32) ‖ nonce (32)
pub const PREIMAGE_LEN: usize = 96;

const SEED_RANGE: std::ops::Range<usize> = 0..32;
const PLAYER_RANGE: std::ops::Range<usize> = 32..64;
const NONCE_RANGE: std::ops::Range<usize> = 64..96;

/// Legacy Keccak-256 (not NIST SHA3-256)
pub fn keccak256(data: &[u8]) -> Bytes32 {
    let digest = Keccak256::digest(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// Solidity function selector: first four bytes of keccak256(signature)
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Derive a single fingerprint
pub fn derive_fingerprint(seed: &Seed, player: &PlayerId, nonce: &Nonce) -> Fingerprint {
    FingerprintHasher::new(seed, player).fingerprint(nonce)
}

/// Reusable preimage buffer; only the nonce bytes change between attempts
#[derive(Clone)]
pub struct FingerprintHasher {
    preimage: [u8; PREIMAGE_LEN],
}

impl FingerprintHasher {
    pub fn new(seed: &Seed, player: &PlayerId) -> Self {
        let mut preimage = [0u8; PREIMAGE_LEN];
        preimage[SEED_RANGE].copy_from_slice(seed.as_bytes());
        preimage[PLAYER_RANGE].copy_from_slice(player.as_bytes());
        Self { preimage }
    }

    pub fn rebind_seed(&mut self, seed: &Seed) {
        self.preimage[SEED_RANGE].copy_from_slice(seed.as_bytes());
    }

    pub fn seed(&self) -> Seed {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&self.preimage[SEED_RANGE]);
        Seed(bytes)
    }

    pub fn fingerprint(&mut self, nonce: &Nonce) -> Fingerprint {
        self.preimage[NONCE_RANGE].copy_from_slice(nonce.as_bytes());
        Fingerprint(keccak256(&self.preimage))
    }
}

// Changelog:
// - v1.0.1: Added FingerprintHasher so batches reuse one preimage buffer.
// - v1.0.0: Replaced triple SHA3-256 with keccak256 over seed, player and nonce.
