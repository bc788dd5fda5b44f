// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.1.0
//
// This file provides formatting helpers for the MonoMine miner, located in the
// utils subdirectory. It formats hashrates, elapsed times, counts and long hex
// words for logs and the dashboard.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: std

use std::time::Duration;

/// Utility functions for formatting miner statistics
pub struct FormatUtils;

impl FormatUtils {
    /// Format hashrate in appropriate units (H/s, KH/s, MH/s, GH/s)
    pub fn format_hashrate(hashrate: f64) -> String {
        if hashrate >= 1_000_000_000.0 {
            format!("{:.2} GH/s", hashrate / 1_000_000_000.0)
        } else if hashrate >= 1_000_000.0 {
            format!("{:.2} MH/s", hashrate / 1_000_000.0)
        } else if hashrate >= 1_000.0 {
            format!("{:.2} KH/s", hashrate / 1_000.0)
        } else {
            format!("{:.0} H/s", hashrate)
        }
    }

    /// Elapsed time as "—", "42s" or "3m 07s"
    pub fn format_since(elapsed: Option<Duration>) -> String {
        match elapsed {
            None => "—".to_string(),
            Some(elapsed) => {
                let secs = elapsed.as_secs();
                if secs < 60 {
                    format!("{}s", secs)
                } else {
                    format!("{}m {:02}s", secs / 60, secs % 60)
                }
            }
        }
    }

    /// Format large numbers with suffixes (K, M, B)
    pub fn format_number(num: u64) -> String {
        if num >= 1_000_000_000 {
            format!("{:.1}B", num as f64 / 1_000_000_000.0)
        } else if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Shorten a 0x-prefixed word to "0xabcd…1234"
    pub fn short_hex(hex: &str) -> String {
        let chars: Vec<char> = hex.chars().collect();
        if chars.len() <= 12 {
            return hex.to_string();
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}…{}", head, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_since() {
        assert_eq!(FormatUtils::format_since(None), "—");
        assert_eq!(FormatUtils::format_since(Some(Duration::from_secs(42))), "42s");
        assert_eq!(FormatUtils::format_since(Some(Duration::from_secs(187))), "3m 07s");
    }

    #[test]
    fn test_short_hex() {
        let word = format!("0x{}", "ab".repeat(32));
        assert_eq!(FormatUtils::short_hex(&word), "0xabab…abab");
        assert_eq!(FormatUtils::short_hex("0x1234"), "0x1234");
    }

    #[test]
    fn test_format_hashrate() {
        assert_eq!(FormatUtils::format_hashrate(950.0), "950 H/s");
        assert_eq!(FormatUtils::format_hashrate(1_250_000.0), "1.25 MH/s");
    }
}

// Changelog:
// - v1.1.0: Added format_since and short_hex for the dashboard.
// - v1.0.0: Hashrate and number formatting.
