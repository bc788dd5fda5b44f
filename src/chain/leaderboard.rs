// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/chain/leaderboard.rs
// Version: 1.0.0
//
// This file reconciles submission events into per-day standings for the
// MonoMine miner, located in the chain subdirectory. Events may arrive more
// than once from overlapping log backfills; merging is idempotent.

use crate::core::Fingerprint;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One accepted submission as reported by the contract's event log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionEvent {
    pub day: u64,
    pub player: String,
    pub fid: u64,
    pub fingerprint: Fingerprint,
    pub timestamp: u64,
}

impl SubmissionEvent {
    fn key(&self) -> (String, u64) {
        (self.player.to_lowercase(), self.timestamp)
    }
}

#[derive(Debug, Default, Clone)]
pub struct Leaderboard {
    events: BTreeMap<(String, u64), SubmissionEvent>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unseen events and return how many were new
    pub fn merge<I>(&mut self, events: I) -> usize
    where
        I: IntoIterator<Item = SubmissionEvent>,
    {
        let mut added = 0;
        for event in events {
            if let std::collections::btree_map::Entry::Vacant(slot) = self.events.entry(event.key()) {
                slot.insert(event);
                added += 1;
            }
        }
        added
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Each player's best fingerprint for `day`, best first, at most `n`.
    /// Equal fingerprints rank by earlier timestamp.
    pub fn top(&self, day: u64, n: usize) -> Vec<SubmissionEvent> {
        let mut best: HashMap<String, &SubmissionEvent> = HashMap::new();
        for ((player, _), event) in self.events.iter().filter(|(_, e)| e.day == day) {
            let replace = match best.get(player) {
                None => true,
                Some(current) => Self::ranks_before(event, current),
            };
            if replace {
                best.insert(player.clone(), event);
            }
        }

        let mut standings: Vec<&SubmissionEvent> = best.into_values().collect();
        standings.sort_by(|a, b| {
            a.fingerprint
                .value()
                .cmp(&b.fingerprint.value())
                .then(a.timestamp.cmp(&b.timestamp))
                .then_with(|| a.player.to_lowercase().cmp(&b.player.to_lowercase()))
        });
        standings.into_iter().take(n).cloned().collect()
    }

    pub fn leader(&self, day: u64) -> Option<SubmissionEvent> {
        self.top(day, 1).into_iter().next()
    }

    fn ranks_before(a: &SubmissionEvent, b: &SubmissionEvent) -> bool {
        (a.fingerprint.value(), a.timestamp) < (b.fingerprint.value(), b.timestamp)
    }
}
