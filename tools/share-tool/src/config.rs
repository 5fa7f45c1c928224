use num_bigint::BigInt;
use serde::{de::DeserializeOwned, Deserialize};
use serde_with::{serde_as, DisplayFromStr};
use shamir_sharing::{config::SharingConfig, protocol::Share};
use std::path::Path;

/// Loads a config from a YAML file.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, config::ConfigError> {
    let source = config::File::from(path).format(config::FileFormat::Yaml);
    config::Config::builder().add_source(source).build()?.try_deserialize()
}

/// Parses a config from a YAML string.
pub fn from_yaml<T: DeserializeOwned>(yaml: &str) -> Result<T, config::ConfigError> {
    let source = config::File::from_str(yaml, config::FileFormat::Yaml);
    config::Config::builder().add_source(source).build()?.try_deserialize()
}

/// The configuration for splitting a secret.
#[serde_as]
#[derive(Deserialize)]
pub struct SplitConfig {
    /// The prime number to be used.
    #[serde_as(as = "DisplayFromStr")]
    pub modulus: BigInt,

    /// The secret to split.
    #[serde_as(as = "DisplayFromStr")]
    pub secret: BigInt,

    /// The threshold and number of shares.
    pub sharing: SharingConfig,
}

/// The configuration for reconstructing a secret.
#[serde_as]
#[derive(Deserialize)]
pub struct ReconstructConfig {
    /// The prime number to be used.
    #[serde_as(as = "DisplayFromStr")]
    pub modulus: BigInt,

    /// The shares.
    pub shares: Vec<ShareConfig>,
}

/// The configuration for a single share.
#[serde_as]
#[derive(Deserialize)]
pub struct ShareConfig {
    /// The share's abscissa.
    #[serde_as(as = "DisplayFromStr")]
    pub x: BigInt,

    /// The share's ordinate.
    #[serde_as(as = "DisplayFromStr")]
    pub y: BigInt,
}

impl From<ShareConfig> for Share {
    fn from(share: ShareConfig) -> Self {
        Share::new(share.x, share.y)
    }
}
