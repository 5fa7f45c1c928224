use anyhow::Result;
use clap::{Parser, Subcommand};
use share_tool::{
    config::{load, ReconstructConfig, SplitConfig},
    runner,
};
use std::{io, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[clap(name = "share-tool", about = "Split secrets into Shamir shares and reconstruct them")]
struct Options {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split the secret in a config into shares.
    Split {
        /// The path to the config file
        config_path: PathBuf,
    },

    /// Reconstruct the secret behind the shares in a config.
    Reconstruct {
        /// The path to the config file
        config_path: PathBuf,
    },

    /// Check that the secret in a config survives a split and reconstruction.
    Verify {
        /// The path to the config file
        config_path: PathBuf,
    },
}

fn main() -> Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);
    tracing_subscriber::registry().with(EnvFilter::from_default_env()).with(fmt_layer).init();

    let options = Options::parse();
    match options.command {
        Command::Split { config_path } => {
            let config: SplitConfig = load(&config_path)?;
            for share in runner::split(config)? {
                println!("{} {}", share.x(), share.y());
            }
        }
        Command::Reconstruct { config_path } => {
            let config: ReconstructConfig = load(&config_path)?;
            let secret = runner::recover(config)?;
            println!("Secret recovered is: {secret}");
        }
        Command::Verify { config_path } => {
            let config: SplitConfig = load(&config_path)?;
            if runner::verify(config)? {
                println!("Round trip succeeded");
            } else {
                anyhow::bail!("round trip produced a different secret");
            }
        }
    }
    Ok(())
}
