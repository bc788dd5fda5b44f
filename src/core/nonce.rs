// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/nonce.rs
// Version: 1.0.0
//
// This file provides the nonce policies for the search loop, located in the
// core subdirectory. Nonces are either fully random or a 256-bit counter that
// jumps by a random offset whenever it is reseeded.

use crate::core::types::{Bytes32, Nonce};
use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Source of candidate nonces for one search session
pub trait NonceSource: Send {
    fn next_nonce(&mut self) -> Nonce;

    /// Called at session start and whenever the working seed rotates
    fn reseed(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NoncePolicy {
    /// 256-bit counter reseeded from randomness
    Counter,
    /// 32 fresh random bytes per attempt
    Random,
}

impl NoncePolicy {
    pub fn build(self) -> Box<dyn NonceSource> {
        match self {
            NoncePolicy::Counter => Box::new(CounterNonces::from_entropy()),
            NoncePolicy::Random => Box::new(RandomNonces::from_entropy()),
        }
    }
}

pub struct RandomNonces {
    rng: StdRng,
}

impl RandomNonces {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl NonceSource for RandomNonces {
    fn next_nonce(&mut self) -> Nonce {
        let mut bytes = [0u8; 32];
        self.rng.fill_bytes(&mut bytes);
        Nonce(bytes)
    }
}

/// Big-endian 256-bit counter, wrapping at 2^256
pub struct CounterNonces {
    counter: Bytes32,
    rng: StdRng,
}

impl CounterNonces {
    pub fn starting_at(start: Bytes32) -> Self {
        Self {
            counter: start,
            rng: StdRng::from_entropy(),
        }
    }

    /// Counter starting at 1 and immediately moved by a random offset
    pub fn from_entropy() -> Self {
        let mut one = [0u8; 32];
        one[31] = 1;
        let mut nonces = Self::starting_at(one);
        nonces.reseed();
        nonces
    }

    pub fn current(&self) -> Nonce {
        Nonce(self.counter)
    }

    fn advance_by(&mut self, amount: u64) {
        let mut carry = amount as u128;
        for byte in self.counter.iter_mut().rev() {
            if carry == 0 {
                break;
            }
            let sum = *byte as u128 + (carry & 0xff);
            *byte = sum as u8;
            carry = (carry >> 8) + (sum >> 8);
        }
    }
}

impl NonceSource for CounterNonces {
    fn next_nonce(&mut self) -> Nonce {
        let nonce = Nonce(self.counter);
        self.advance_by(1);
        nonce
    }

    fn reseed(&mut self) {
        let offset = self.rng.next_u64().max(1);
        self.advance_by(offset);
    }
}
