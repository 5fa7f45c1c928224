//! Split and reconstruct runners.

use crate::config::{ReconstructConfig, SplitConfig};
use anyhow::{Context, Result};
use math_lib::modular::modulo;
use num_bigint::BigInt;
use shamir_sharing::{
    protocol::{create_shares, reconstruct, Share},
    secret_sharer::ShamirSecretSharer,
};
use tracing::info;

/// Splits the configured secret into shares.
pub fn split(config: SplitConfig) -> Result<Vec<Share>> {
    let SplitConfig { modulus, secret, sharing } = config;
    info!(threshold = sharing.threshold, total_shares = sharing.total_shares, "Splitting secret");
    let sharer = ShamirSecretSharer::new(sharing, modulus).context("invalid sharing configuration")?;
    sharer.generate_shares(&secret).context("share generation failed")
}

/// Reconstructs the secret behind the configured shares.
pub fn recover(config: ReconstructConfig) -> Result<BigInt> {
    let ReconstructConfig { modulus, shares } = config;
    info!(shares = shares.len(), "Reconstructing secret using modulus {modulus}");
    let shares: Vec<Share> = shares.into_iter().map(Share::from).collect();
    reconstruct(&shares, &modulus).context("reconstruction failed")
}

/// Splits and immediately reconstructs, to check a configuration round trips.
pub fn verify(config: SplitConfig) -> Result<bool> {
    let modulus = config.modulus.clone();
    let secret = config.secret.clone();
    let threshold = usize::try_from(config.sharing.threshold).context("threshold too large")?;
    let shares = create_shares(&secret, &config.sharing, &modulus).context("share generation failed")?;
    let subset = shares.get(..threshold).context("fewer shares than the threshold")?;
    let recovered = reconstruct(subset, &modulus).context("reconstruction failed")?;
    let expected = modulo(&secret, &modulus).context("invalid modulus")?;
    Ok(recovered == expected)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::{ShareConfig, SplitConfig};
    use rstest::rstest;
    use shamir_sharing::config::SharingConfig;

    fn split_config(secret: u64, threshold: u32, total_shares: u32) -> SplitConfig {
        SplitConfig {
            modulus: BigInt::from(1_000_003),
            secret: BigInt::from(secret),
            sharing: SharingConfig::new(threshold, total_shares),
        }
    }

    #[test]
    fn split_then_recover() {
        let shares = split(split_config(4242, 2, 3)).expect("split failed");
        assert_eq!(shares.len(), 3);
        let shares = shares
            .into_iter()
            .take(2)
            .map(|share| {
                let (x, y) = share.into_coordinates();
                ShareConfig { x, y }
            })
            .collect();
        let secret = recover(ReconstructConfig { modulus: BigInt::from(1_000_003), shares }).expect("recover failed");
        assert_eq!(secret, BigInt::from(4242));
    }

    #[rstest]
    #[case(7)]
    #[case(-7)]
    #[case(1_000_010)]
    fn verify_round_trip(#[case] secret: i64) {
        let config = SplitConfig {
            modulus: BigInt::from(1_000_003),
            secret: BigInt::from(secret),
            sharing: SharingConfig::new(3, 5),
        };
        assert!(verify(config).expect("verify failed"));
    }

    #[test]
    fn verify_rejects_unreachable_threshold() {
        assert!(verify(split_config(7, 4, 3)).is_err());
    }
}
