// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/chain/seed.rs
// Version: 1.1.0
//
// This file provides the seed sources for the MonoMine miner, located in the
// chain subdirectory. A seed source answers "what is today's seed?"; the
// refresher polls it and publishes changes to the search loop through a watch
// channel.
//
// Tree Location:
// - src/chain/seed.rs (seed sources and refresher)
// - Depends on: tokio, thiserror, core/types

use crate::core::types::{HexWordError, parse_word};
use crate::core::Seed;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;

const LOG_TARGET: &str = "monomine::seed";

#[derive(Error, Debug)]
pub enum SeedSourceError {
    #[error("IO operation failed on {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Seed file {path:?} does not hold a 32-byte hex word")]
    Malformed {
        path: PathBuf,
        #[source]
        source: HexWordError,
    },
}

/// Where the current round's seed comes from. `Ok(None)` means no seed has
/// been published yet; errors are treated as transient by the refresher.
pub trait SeedSource: Send {
    fn current_seed(&mut self) -> Result<Option<Seed>, SeedSourceError>;
}

/// Seed fixed on the command line
#[derive(Debug, Clone, Copy)]
pub struct StaticSeed(pub Seed);

impl SeedSource for StaticSeed {
    fn current_seed(&mut self) -> Result<Option<Seed>, SeedSourceError> {
        Ok(Some(self.0))
    }
}

/// Seed read from a text file kept up to date by another process. An empty
/// file means the round has not started.
#[derive(Debug, Clone)]
pub struct FileSeedSource {
    path: PathBuf,
}

impl FileSeedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SeedSource for FileSeedSource {
    fn current_seed(&mut self) -> Result<Option<Seed>, SeedSourceError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| SeedSourceError::Io {
            path: self.path.clone(),
            source,
        })?;

        if contents.trim().is_empty() {
            return Ok(None);
        }

        let word = parse_word(&contents).map_err(|source| SeedSourceError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(Seed::from_bytes(word)))
    }
}

/// Polls a seed source and publishes every change as a snapshot
pub struct SeedRefresher {
    source: Box<dyn SeedSource>,
    sender: watch::Sender<Option<Seed>>,
}

impl SeedRefresher {
    pub fn new(source: Box<dyn SeedSource>) -> (Self, watch::Receiver<Option<Seed>>) {
        let (sender, receiver) = watch::channel(None);
        (Self { source, sender }, receiver)
    }

    /// Extra receiver on the same channel
    pub fn subscribe(&self) -> watch::Receiver<Option<Seed>> {
        self.sender.subscribe()
    }

    /// Query the source once and return the seed now published. A failed
    /// query keeps the previous seed.
    pub fn refresh(&mut self) -> Option<Seed> {
        match self.source.current_seed() {
            Ok(latest) => {
                let changed = self.sender.send_if_modified(|current| {
                    if *current == latest {
                        return false;
                    }
                    *current = latest;
                    true
                });
                if changed {
                    match latest {
                        Some(seed) => info!(target: LOG_TARGET, "🌱 Seed published: {}", seed),
                        None => warn!(target: LOG_TARGET, "⚠️ Seed source reports no seed"),
                    }
                } else {
                    debug!(target: LOG_TARGET, "Seed unchanged");
                }
            }
            Err(e) => warn!(target: LOG_TARGET, "⚠️ Seed refresh failed, keeping previous seed: {}", e),
        }
        *self.sender.borrow()
    }

    pub fn spawn(mut self, period: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await;
            loop {
                interval.tick().await;
                self.refresh();
            }
        })
    }
}

// Changelog:
// - v1.1.0: Refresher publishes through a watch channel instead of a shared job slot.
// - v1.0.0: Static and file-backed seed sources.
