// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/main.rs
// Version: 3.0.0
//
// Entry point for the monomine binary. Everything runs on one cooperative
// thread: the search loop yields after every batch so the seed refresher, the
// rate reporter, the dashboard, the status server and the Ctrl-C handler get
// their turn.

use clap::Parser;
use log::{error, info, warn};
use monomine_miner::{
    Result,
    chain::{FileSeedSource, RelayRequest, SeedRefresher, SeedSource, StaticSeed},
    core::{Args, PlayerId},
    miner::{HashSearchEngine, MinerStats, RateReporter, RateSink, Scheduler, SessionEnd},
    utils::{FormatUtils, init_logging, user_agent},
};
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

// Status server for --web
mod web_server;

const LOG_TARGET: &str = "monomine::main";

const RATE_PERIOD: Duration = Duration::from_secs(1);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }

    init_logging(args.log_level_filter()?)?;
    info!(target: LOG_TARGET, "🚀 Starting {}", user_agent());

    let source: Box<dyn SeedSource> = match (&args.seed, &args.seed_file) {
        (Some(seed), _) => Box::new(StaticSeed(seed.parse()?)),
        (None, Some(path)) => {
            info!(target: LOG_TARGET, "📄 Reading seed from {}", path.display());
            Box::new(FileSeedSource::new(path))
        }
        (None, None) => return Err("A seed is required. Use --seed HEX or --seed-file PATH".into()),
    };

    let (mut refresher, mut seeds) = SeedRefresher::new(source);
    let Some(initial_seed) = refresher.refresh() else {
        error!(target: LOG_TARGET, "❌ No seed available yet, try again once the round has started");
        return Err("No seed available from the seed source".into());
    };
    seeds.borrow_and_update();

    let player = PlayerId::from_fid(args.player_id);
    let stats = Arc::new(MinerStats::new());
    let mut engine = HashSearchEngine::new(player, args.nonce_policy.build());
    engine.add_sink(stats.clone());

    info!(target: LOG_TARGET, "├─ Player: {} (id {})", FormatUtils::short_hex(&player.to_hex()), args.player_id);
    info!(target: LOG_TARGET, "├─ Nonce policy: {:?}", args.nonce_policy);
    info!(target: LOG_TARGET, "├─ Batch size: {}", args.batch_size);
    info!(target: LOG_TARGET, "└─ Seed refresh: every {}s", args.refresh_secs);

    let rate_sinks = vec![stats.clone() as Arc<dyn RateSink>];
    RateReporter::new(engine.attempts_counter()).spawn(rate_sinks, RATE_PERIOD);
    refresher.spawn(Duration::from_secs(args.refresh_secs));

    {
        let stats = stats.clone();
        let period = Duration::from_secs(args.dashboard_secs);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await;
            loop {
                interval.tick().await;
                stats.display_dashboard("monomine");
            }
        });
    }

    if args.web {
        tokio::spawn(web_server::start_web_server(stats.clone(), args.web_port));
    }

    let stop = engine.stop_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!(target: LOG_TARGET, "🛑 Ctrl-C received, stopping after the current batch");
            stop.stop();
        }
    });

    if !engine.start(Some(initial_seed), player) {
        return Err("Search engine refused to start".into());
    }
    stats.set_running(true);

    let end = Scheduler::new(args.batch_size).run(&mut engine, &mut seeds).await;
    stats.set_running(false);
    // Attempts since the last rate sample
    stats.on_attempts(engine.attempts_counter().swap(0, Ordering::Relaxed));

    match &end {
        SessionEnd::Stopped => info!(target: LOG_TARGET, "⏹️ Mining stopped"),
        SessionEnd::SeedLost => warn!(target: LOG_TARGET, "⚠️ Mining stopped: seed no longer available"),
        SessionEnd::Failed(e) => error!(target: LOG_TARGET, "❌ Mining failed: {}", e),
    }
    stats.display_dashboard("final");

    let best = engine.best();
    match (best.fingerprint, best.nonce) {
        (Some(fingerprint), Some(nonce)) => {
            info!(target: LOG_TARGET, "💎 Best fingerprint: {} ({} bits)", fingerprint, best.score);
            info!(target: LOG_TARGET, "🔑 Best nonce: {}", nonce);
            let request = RelayRequest::for_nonce(&args.contract, &nonce);
            info!(target: LOG_TARGET, "📤 Relay request ready:\n{}", serde_json::to_string_pretty(&request)?);
        }
        _ => info!(target: LOG_TARGET, "No candidate found this session"),
    }

    match end {
        SessionEnd::Failed(e) => Err(e.into()),
        _ => Ok(()),
    }
}

// Changelog:
// - v3.0.0: Single cooperative search session replaces CPU/GPU/hybrid pool mining.
