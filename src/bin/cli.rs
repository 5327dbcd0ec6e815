// src/bin/cli.rs
use color_eyre::eyre::eyre;
use compliance_hub::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(log::LogTarget::Stderr);

    cli::run().map_err(|e| eyre!("{e}"))
}
