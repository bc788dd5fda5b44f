// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/logging.rs
// Version: 1.0.0
//
// This file configures log4rs console output for the MonoMine miner, located
// in the utils subdirectory.

use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const CONSOLE_PATTERN: &str = "{d(%H:%M:%S)} {h({l:<5})} {t} - {m}{n}";

pub fn init_logging(level: LevelFilter) -> crate::Result<()> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;

    log4rs::init_config(config)?;
    Ok(())
}
