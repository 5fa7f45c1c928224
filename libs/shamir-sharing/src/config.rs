//! Sharing configuration.

use crate::protocol::ShareGenerationError;

/// The threshold and number of shares of a sharing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SharingConfig {
    /// The number of shares needed to reconstruct the secret.
    pub threshold: u32,

    /// The number of shares to generate.
    ///
    /// This is expected to be at least `threshold`, otherwise the secret can't be reconstructed.
    pub total_shares: u32,
}

impl SharingConfig {
    /// Creates a new sharing config.
    pub fn new(threshold: u32, total_shares: u32) -> Self {
        Self { threshold, total_shares }
    }

    /// Checks the config can be used to generate shares.
    pub fn validate(&self) -> Result<(), ShareGenerationError> {
        if self.threshold == 0 {
            return Err(ShareGenerationError::InvalidThreshold);
        }
        Ok(())
    }

    /// The degree of the polynomial hiding the secret.
    pub fn polynomial_degree(&self) -> u32 {
        self.threshold.saturating_sub(1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_threshold_is_invalid() {
        let config = SharingConfig::new(0, 5);
        assert!(matches!(config.validate(), Err(ShareGenerationError::InvalidThreshold)));
    }

    #[test]
    fn threshold_above_total_is_allowed() {
        let config = SharingConfig::new(4, 3);
        assert!(config.validate().is_ok());
        assert_eq!(config.polynomial_degree(), 3);
    }
}
