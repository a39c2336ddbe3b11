#![doc = "Command-line front end for the `sunplan` recommendation engine."]

mod cli;
mod fmt;
mod prelude;
mod tables;

use clap::{Parser, crate_version};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command, catalog::list_catalog, recommend::recommend},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Recommend(args) => recommend(&args)?,
        Command::Catalog(args) => list_catalog(&args)?,
    }

    info!("done!");
    Ok(())
}
