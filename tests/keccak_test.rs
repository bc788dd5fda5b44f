// MonoMine Miner - Free and Open Source Software Statement
//
// This project, monomine-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/keccak_test.rs
// Version: 1.1.0
//
// Known-answer tests for the fingerprint derivation and difficulty scoring.

#[cfg(test)]
mod tests {
    use monomine_miner::core::keccak::{PREIMAGE_LEN, function_selector};
    use monomine_miner::core::{
        FingerprintHasher, HexWordError, Nonce, PlayerId, Seed, derive_fingerprint, keccak256,
        leading_zero_bits,
    };
    use sha3::{Digest, Keccak256};

    #[test]
    fn test_keccak256_known_answers() {
        assert_eq!(
            hex::encode(keccak256(&[])),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
        assert_eq!(
            hex::encode(keccak256(&[0u8; 32])),
            "290decd9548b62a8d60345a988386fc84ba6bc95484008f6362f93160ef3e563"
        );
    }

    #[test]
    fn test_function_selector() {
        assert_eq!(hex::encode(function_selector("transfer(address,uint256)")), "a9059cbb");
    }

    #[test]
    fn test_zero_triple_matches_manual_preimage() {
        let fingerprint = derive_fingerprint(&Seed::default(), &PlayerId::default(), &Nonce::default());
        let expected = Keccak256::digest([0u8; PREIMAGE_LEN]);
        assert_eq!(fingerprint.as_bytes().as_slice(), expected.as_slice());
        assert_eq!(
            fingerprint.to_hex(),
            "0x46700b4d40ac5c35af2c22dda2787a91eb567b06c924a8fb8ae9a05b20c08c21"
        );
        // 0x46 = 0b0100_0110
        assert_eq!(leading_zero_bits(fingerprint.as_bytes()), 1);
        assert_eq!(fingerprint.difficulty_score(), 1);
    }

    #[test]
    fn test_preimage_layout_is_seed_player_nonce() {
        let seed = Seed([0x11; 32]);
        let player = PlayerId::from_fid(4242);
        let nonce = Nonce([0x33; 32]);

        let mut preimage = Vec::with_capacity(PREIMAGE_LEN);
        preimage.extend_from_slice(seed.as_bytes());
        preimage.extend_from_slice(player.as_bytes());
        preimage.extend_from_slice(nonce.as_bytes());

        assert_eq!(derive_fingerprint(&seed, &player, &nonce).0, keccak256(&preimage));
    }

    #[test]
    fn test_hasher_reuse_matches_one_shot() {
        let seed = Seed([0xab; 32]);
        let player = PlayerId::from_fid(7);
        let mut hasher = FingerprintHasher::new(&seed, &player);

        for i in 0..16u8 {
            let nonce = Nonce([i; 32]);
            assert_eq!(hasher.fingerprint(&nonce), derive_fingerprint(&seed, &player, &nonce));
        }

        let rotated = Seed([0xcd; 32]);
        hasher.rebind_seed(&rotated);
        assert_eq!(hasher.seed(), rotated);
        let nonce = Nonce([9; 32]);
        assert_eq!(hasher.fingerprint(&nonce), derive_fingerprint(&rotated, &player, &nonce));
    }

    #[test]
    fn test_player_id_from_fid_is_left_padded() {
        let player = PlayerId::from_fid(0x0102);
        assert_eq!(&player.as_bytes()[..30], &[0u8; 30]);
        assert_eq!(&player.as_bytes()[30..], &[0x01, 0x02]);
        assert_eq!(PlayerId::from_fid(0), PlayerId::default());
    }

    #[test]
    fn test_difficulty_score_matches_leading_zeros() {
        let mut hash = [0xffu8; 32];
        assert_eq!(leading_zero_bits(&hash), 0);
        hash[0] = 0x00;
        hash[1] = 0x1f;
        assert_eq!(leading_zero_bits(&hash), 11);
        assert_eq!(leading_zero_bits(&[0u8; 32]), 256);
    }

    #[test]
    fn test_hex_words_parse_and_print() {
        let text = format!("0x{}", "0f".repeat(32));
        let seed: Seed = text.parse().unwrap();
        assert_eq!(seed.to_hex(), text);
        assert_eq!(seed.to_string(), text);

        let upper: Seed = format!("0X{}", "0F".repeat(32)).parse().unwrap();
        assert_eq!(upper, seed);

        assert_eq!("0x1234".parse::<Seed>(), Err(HexWordError::WrongLength { len: 2 }));
        assert!(format!("0x{}", "zz".repeat(32)).parse::<Seed>().is_err());
    }
}
