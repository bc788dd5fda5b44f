// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/stats/miner_stats.rs
// Version: 1.2.0
//
// This file implements session statistics for the MonoMine miner, located in
// the stats subdirectory of the miner module. It listens to best candidate
// improvements and rate samples, keeps a short history and renders the
// dashboard and the web snapshot.
//
// Tree Location:
// - src/miner/stats/miner_stats.rs (session statistics)
// - Depends on: std, serde, miner/sink, utils/format

use crate::core::difficulty::expected_attempts;
use crate::miner::sink::{BestResultSink, Improvement, RateSink};
use crate::utils::format::FormatUtils;
use log::info;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

const LOG_TARGET: &str = "monomine::stats";

const ACTIVITY_CAPACITY: usize = 50;
const RATE_HISTORY_WINDOW: Duration = Duration::from_secs(300);

/// Serialisable view used by the web server
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    pub running: bool,
    pub hashrate: u64,
    pub peak_hashrate: u64,
    pub total_hashes: u64,
    pub improvements: u64,
    pub best: Option<Improvement>,
    pub last_improve_secs: Option<u64>,
    pub session_secs: u64,
    pub rate_history: Vec<u64>,
    pub recent_activity: Vec<String>,
}

pub struct MinerStats {
    running: AtomicBool,
    current_rate: AtomicU64,
    peak_rate: AtomicU64,
    total_hashes: AtomicU64,
    improvements: AtomicU64,
    start_time: Instant,
    best: Mutex<Option<Improvement>>,
    last_improvement: Mutex<Option<Instant>>,
    recent_activity: Mutex<VecDeque<(Instant, String)>>,
    rate_history: Mutex<VecDeque<(Instant, u64)>>,
}

impl Default for MinerStats {
    fn default() -> Self {
        Self::new()
    }
}

impl MinerStats {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            running: AtomicBool::new(false),
            current_rate: AtomicU64::new(0),
            peak_rate: AtomicU64::new(0),
            total_hashes: AtomicU64::new(0),
            improvements: AtomicU64::new(0),
            start_time: now,
            best: Mutex::new(None),
            last_improvement: Mutex::new(None),
            recent_activity: Mutex::new(VecDeque::with_capacity(ACTIVITY_CAPACITY)),
            rate_history: Mutex::new(VecDeque::with_capacity(300)),
        }
    }

    pub fn set_running(&self, running: bool) {
        self.running.store(running, Ordering::Relaxed);
        self.add_activity(if running { "⛏️ Mining started" } else { "⏹️ Mining stopped" }.to_string());
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    pub fn add_activity(&self, message: String) {
        if let Ok(mut activity) = self.recent_activity.lock() {
            activity.push_back((Instant::now(), message));
            if activity.len() > ACTIVITY_CAPACITY {
                activity.pop_front();
            }
        }
    }

    pub fn best(&self) -> Option<Improvement> {
        self.best.lock().ok().and_then(|best| best.clone())
    }

    pub fn improvements(&self) -> u64 {
        self.improvements.load(Ordering::Relaxed)
    }

    pub fn current_rate(&self) -> u64 {
        self.current_rate.load(Ordering::Relaxed)
    }

    pub fn peak_rate(&self) -> u64 {
        self.peak_rate.load(Ordering::Relaxed)
    }

    pub fn total_hashes(&self) -> u64 {
        self.total_hashes.load(Ordering::Relaxed)
    }

    pub fn time_since_improvement(&self) -> Option<Duration> {
        self.last_improvement
            .lock()
            .ok()
            .and_then(|last| last.map(|at| at.elapsed()))
    }

    fn prune_history(history: &mut VecDeque<(Instant, u64)>, now: Instant) {
        while let Some((time, _)) = history.front() {
            if now.duration_since(*time) > RATE_HISTORY_WINDOW {
                history.pop_front();
            } else {
                break;
            }
        }
    }

    pub fn to_websocket_data(&self) -> StatsSnapshot {
        let rate_history: Vec<u64> = self
            .rate_history
            .lock()
            .map(|history| history.iter().map(|(_, rate)| *rate).collect())
            .unwrap_or_default();
        let recent_activity: Vec<String> = self
            .recent_activity
            .lock()
            .map(|activity| activity.iter().rev().take(10).map(|(_, msg)| msg.clone()).collect())
            .unwrap_or_default();

        StatsSnapshot {
            running: self.is_running(),
            hashrate: self.current_rate(),
            peak_hashrate: self.peak_rate(),
            total_hashes: self.total_hashes(),
            improvements: self.improvements(),
            best: self.best(),
            last_improve_secs: self.time_since_improvement().map(|d| d.as_secs()),
            session_secs: self.start_time.elapsed().as_secs(),
            rate_history,
            recent_activity,
        }
    }

    /// Display a text-based dashboard with session statistics
    pub fn display_dashboard(&self, dashboard_id: &str) {
        let best = self.best();
        let (best_hash, best_nonce, score) = match &best {
            Some(best) => (best.fingerprint_hex.clone(), best.nonce_hex.clone(), best.score),
            None => ("—".to_string(), "—".to_string(), 0),
        };
        let total_hashes = self.total_hashes();
        let luck = if score > 0 {
            total_hashes as f64 / expected_attempts(score)
        } else {
            0.0
        };

        info!(target: LOG_TARGET, "📊 MINER DASHBOARD - {}", dashboard_id);
        info!(target: LOG_TARGET, "├─ Algorithm: keccak256(seed ‖ player ‖ nonce)");
        info!(target: LOG_TARGET, "├─ Status: {}", if self.is_running() { "mining" } else { "idle" });
        info!(target: LOG_TARGET, "├─ Current Hashrate: {}", FormatUtils::format_hashrate(self.current_rate() as f64));
        info!(target: LOG_TARGET, "├─ Peak Hashrate: {}", FormatUtils::format_hashrate(self.peak_rate() as f64));
        info!(target: LOG_TARGET, "├─ Total Work: {} hashes", FormatUtils::format_number(total_hashes));
        info!(target: LOG_TARGET, "├─ Best Hash: {}", best_hash);
        info!(target: LOG_TARGET, "├─ Best Nonce: {}", best_nonce);
        info!(target: LOG_TARGET, "├─ Difficulty: {} bits", score);
        info!(target: LOG_TARGET, "├─ Work vs Expected: {:.2}x", luck);
        info!(target: LOG_TARGET, "├─ Improvements: {}", self.improvements());
        info!(target: LOG_TARGET, "├─ Last Improve: {}", FormatUtils::format_since(self.time_since_improvement()));
        info!(target: LOG_TARGET, "└─ Session Time: {}", FormatUtils::format_since(Some(self.start_time.elapsed())));
    }
}

impl BestResultSink for MinerStats {
    fn on_improvement(&self, improvement: &Improvement) {
        self.improvements.store(improvement.improvements, Ordering::Relaxed);
        if let Ok(mut best) = self.best.lock() {
            *best = Some(improvement.clone());
        }
        if let Ok(mut last) = self.last_improvement.lock() {
            *last = Some(Instant::now());
        }
        self.add_activity(format!(
            "💎 New best ({} bits): {}",
            improvement.score,
            FormatUtils::short_hex(&improvement.fingerprint_hex)
        ));
    }
}

impl RateSink for MinerStats {
    fn on_rate(&self, hashes_per_second: u64) {
        let now = Instant::now();
        self.current_rate.store(hashes_per_second, Ordering::Relaxed);
        self.peak_rate.fetch_max(hashes_per_second, Ordering::Relaxed);

        if let Ok(mut history) = self.rate_history.lock() {
            history.push_back((now, hashes_per_second));
            Self::prune_history(&mut history, now);
        }
    }

    fn on_attempts(&self, attempts: u64) {
        self.total_hashes.fetch_add(attempts, Ordering::Relaxed);
    }
}

// Changelog:
// - v1.2.0: Total work counts drained attempts instead of rate times window.
// - v1.1.0: Added web snapshot (to_websocket_data) and rate history window.
// - v1.0.0: Rebuilt around best candidate improvements instead of pool shares.
//   - Implements BestResultSink and RateSink so the engine and the rate
//     reporter publish straight into it.
