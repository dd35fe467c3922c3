use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use capture::Config;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    let config = Config::parse();
    capture::run(&config)?;
    Ok(())
}
