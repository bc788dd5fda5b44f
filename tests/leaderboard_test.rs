// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/leaderboard_test.rs
// Version: 1.0.0
//
// Tests for idempotent submission-event reconciliation and daily standings.

#[cfg(test)]
mod tests {
    use monomine_miner::chain::{Leaderboard, SubmissionEvent};
    use monomine_miner::core::Fingerprint;

    fn fingerprint(lead: u8) -> Fingerprint {
        let mut bytes = [0xffu8; 32];
        bytes[0] = lead;
        Fingerprint(bytes)
    }

    fn event(day: u64, player: &str, lead: u8, timestamp: u64) -> SubmissionEvent {
        SubmissionEvent {
            day,
            player: player.to_string(),
            fid: 0,
            fingerprint: fingerprint(lead),
            timestamp,
        }
    }

    #[test]
    fn test_merge_is_idempotent() {
        let events = vec![event(1, "0xAAA", 0x30, 100), event(1, "0xbbb", 0x20, 101)];
        let mut board = Leaderboard::new();
        assert_eq!(board.merge(events.clone()), 2);
        assert_eq!(board.merge(events), 0);
        assert_eq!(board.len(), 2);

        // Player addresses compare case-insensitively
        assert_eq!(board.merge(vec![event(1, "0xaaa", 0x10, 100)]), 0);
        assert_eq!(board.merge(vec![event(1, "0xaaa", 0x10, 102)]), 1);
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn test_top_keeps_each_players_best() {
        let mut board = Leaderboard::new();
        board.merge(vec![
            event(1, "0xaaa", 0x30, 100),
            event(1, "0xaaa", 0x05, 110),
            event(1, "0xbbb", 0x20, 105),
            event(1, "0xccc", 0x40, 106),
            event(2, "0xddd", 0x01, 200),
        ]);

        let top = board.top(1, 10);
        let players: Vec<&str> = top.iter().map(|e| e.player.as_str()).collect();
        assert_eq!(players, vec!["0xaaa", "0xbbb", "0xccc"]);
        assert_eq!(top[0].fingerprint, fingerprint(0x05));

        assert_eq!(board.top(1, 2).len(), 2);
        assert!(board.top(3, 5).is_empty());
        assert_eq!(board.leader(2).map(|e| e.player), Some("0xddd".to_string()));
        assert!(board.leader(3).is_none());
    }

    #[test]
    fn test_ties_go_to_earlier_submission() {
        let mut board = Leaderboard::new();
        board.merge(vec![
            event(1, "0xlate", 0x10, 300),
            event(1, "0xearly", 0x10, 200),
            event(1, "0xearly", 0x10, 250),
        ]);

        let top = board.top(1, 5);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].player, "0xearly");
        assert_eq!(top[0].timestamp, 200);
        assert_eq!(top[1].player, "0xlate");
    }

    #[test]
    fn test_event_json_uses_hex_fingerprint() {
        let original = event(4, "0xaaa", 0x00, 42);
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains(&original.fingerprint.to_hex()));
        let parsed: SubmissionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
