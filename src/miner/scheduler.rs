// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/scheduler.rs
// Version: 1.2.0
//
// This file drives a search session cooperatively, located in the miner
// module. Work runs in fixed-size batches; after every batch the loop yields
// to the runtime, picks up seed rotations and checks the running flag.

use crate::core::Seed;
use crate::miner::engine::HashSearchEngine;
use crate::miner::error::{SearchError, SessionEnd};
use log::{error, info, warn};
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use tokio::sync::watch;

const LOG_TARGET: &str = "monomine::scheduler";

/// Attempts per batch; a few milliseconds of keccak work on one core
pub const DEFAULT_BATCH_SIZE: usize = 2048;

#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    batch_size: usize,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_SIZE)
    }
}

impl Scheduler {
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Run batches until the engine is stopped, the seed disappears or a batch
    /// fails. The engine must already be started.
    pub async fn run(
        &self,
        engine: &mut HashSearchEngine,
        seeds: &mut watch::Receiver<Option<Seed>>,
    ) -> SessionEnd {
        info!(target: LOG_TARGET, "🧵 Search loop running ({} attempts per batch)", self.batch_size);

        while engine.is_running() {
            let outcome = catch_unwind(AssertUnwindSafe(|| engine.step_batch(self.batch_size)))
                .unwrap_or_else(|payload| {
                    Err(SearchError::BatchPanicked {
                        message: panic_message(payload.as_ref()),
                    })
                });
            if let Err(e) = outcome {
                error!(target: LOG_TARGET, "❌ Mining loop error: {}", e);
                engine.stop();
                return SessionEnd::Failed(e);
            }

            tokio::task::yield_now().await;

            match seeds.has_changed() {
                Ok(false) => {}
                Ok(true) => {
                    let latest = *seeds.borrow_and_update();
                    match latest {
                        Some(seed) => engine.on_seed_changed(seed),
                        None => {
                            warn!(target: LOG_TARGET, "⚠️ Seed source has no seed, stopping");
                            engine.stop();
                            return SessionEnd::SeedLost;
                        }
                    }
                }
                Err(_) => {
                    warn!(target: LOG_TARGET, "⚠️ Seed source closed, stopping");
                    engine.stop();
                    return SessionEnd::SeedLost;
                }
            }
        }

        info!(target: LOG_TARGET, "⏹️ Search loop stopped");
        SessionEnd::Stopped
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

// Changelog:
// - v1.2.0: A panicking sink or nonce source ends the session as Failed.
// - v1.1.0: Seed rotations are read from a watch channel between batches.
// - v1.0.0: Cooperative batch loop with yield_now between batches.
