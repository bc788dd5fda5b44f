// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/difficulty.rs
// Version: 1.0.1
//
// This file contains the 256-bit integer type used to order fingerprints and
// the leading-zero-bit difficulty score, located in the core subdirectory of
// the MonoMine miner source tree.

use log::warn;
use uint::construct_uint;

const LOG_TARGET: &str = "monomine::difficulty";

construct_uint! {
    pub struct U256(4);
}

/// Interpret a digest as a big-endian unsigned integer.
///
/// Digests of the wrong length are logged and treated as the worst possible
/// value so they can never displace a real candidate.
pub fn fingerprint_value(hash: &[u8]) -> U256 {
    if hash.len() != 32 {
        warn!(target: LOG_TARGET, "Invalid fingerprint: wrong length ({} bytes)", hash.len());
        return U256::MAX;
    }
    U256::from_big_endian(hash)
}

/// Count leading zero bits of a digest.
///
/// Bytes are scanned left to right; inside the first non-zero byte the high
/// half-nibble is checked before the low one. An all-zero 32-byte digest
/// scores 256.
pub fn leading_zero_bits(hash: &[u8]) -> u32 {
    let mut bits = 0;
    for &byte in hash {
        if byte == 0 {
            bits += 8;
            continue;
        }
        let high = byte >> 4;
        if high == 0 {
            return bits + 4 + nibble_leading_zeros(byte & 0x0f);
        }
        return bits + nibble_leading_zeros(high);
    }
    bits
}

fn nibble_leading_zeros(nibble: u8) -> u32 {
    if nibble & 0x8 != 0 {
        0
    } else if nibble & 0x4 != 0 {
        1
    } else if nibble & 0x2 != 0 {
        2
    } else {
        3
    }
}

/// Expected number of attempts to reach a given score (2^score), saturating.
pub fn expected_attempts(score: u32) -> f64 {
    2f64.powi(score.min(1023) as i32)
}


// Changelog:
// - v1.0.1: Added expected_attempts for the dashboard luck line.
// - v1.0.0: Replaced share difficulty parsing with fingerprint ordering.
//   - U256 ordering of big-endian keccak digests.
//   - Leading-zero-bit score scanned per byte, then per half-nibble.
