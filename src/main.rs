// CLASSIFICATION: COMMUNITY
// Filename: main.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Host-mode entry point: runs the startup report against a simulated board.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, warn};

use hello_restart::config::{HostConfig, RestartMode};
use hello_restart::platform::host::HostPlatform;
use hello_restart::sequencer;

#[derive(Parser, Debug)]
#[command(name = "hello-restart", version, about = "Startup report and delayed restart demo")]
struct Cli {
    /// TOML file describing the simulated board.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Countdown start in seconds.
    #[arg(long, value_name = "SECS")]
    countdown: Option<u32>,

    /// Exit instead of re-executing when the countdown ends.
    #[arg(long)]
    no_reexec: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut cfg = match HostConfig::load(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(2);
        }
    };
    if let Some(secs) = cli.countdown {
        cfg.countdown_secs = secs;
    }
    if cli.no_reexec {
        cfg.restart = RestartMode::Exit;
    }

    let mut platform = HostPlatform::stdout(&cfg);
    match sequencer::run(&mut platform, &cfg.report_settings()) {
        Ok(never) => match never {},
        Err(err) => {
            error!("startup report aborted: {err}");
            warn!("no restart issued");
            hello_restart::platform::Console::flush(&mut platform);
            ExitCode::SUCCESS
        }
    }
}
