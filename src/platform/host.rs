// CLASSIFICATION: COMMUNITY
// Filename: host.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Host-mode platform that simulates the target on a development machine.

use std::env;
use std::ffi::OsString;
use std::io::{self, BufWriter, Stdout, Write};
use std::process::{self, Command};
use std::thread;

use log::{error, info, trace, warn};

use crate::chip::ChipInfo;
use crate::config::{HostConfig, RestartMode};
use crate::error::FlashError;
use crate::platform::{ChipInfoQuery, Console, FlashQuery, HeapQuery, Restart, TaskDelay};
use crate::tick::TickRate;

/// Board facts and console handle backing [`HostPlatform`].
pub struct HostPlatform<W: Write> {
    out: W,
    chip: ChipInfo,
    flash: Result<u32, FlashError>,
    min_free_heap: u32,
    tick_rate: TickRate,
    restart_mode: RestartMode,
}

impl HostPlatform<BufWriter<Stdout>> {
    /// Builds a platform that prints to stdout.
    pub fn stdout(cfg: &HostConfig) -> Self {
        Self::with_writer(BufWriter::new(io::stdout()), cfg)
    }
}

impl<W: Write> HostPlatform<W> {
    pub fn with_writer(out: W, cfg: &HostConfig) -> Self {
        let flash = if cfg.flash_fail {
            Err(FlashError::Unavailable)
        } else {
            Ok(cfg.flash_size_bytes)
        };
        Self {
            out,
            chip: cfg.chip_info(),
            flash,
            min_free_heap: cfg.min_free_heap_bytes,
            tick_rate: cfg.tick_rate(),
            restart_mode: cfg.restart,
        }
    }

    /// Returns the underlying writer, consuming the platform.
    pub fn into_writer(self) -> W {
        self.out
    }
}

impl<W: Write> Console for HostPlatform<W> {
    fn write_str(&mut self, text: &str) {
        if let Err(err) = self.out.write_all(text.as_bytes()) {
            warn!("console write dropped: {err}");
        }
    }

    fn flush(&mut self) {
        if let Err(err) = self.out.flush() {
            warn!("console flush failed: {err}");
        }
    }
}

impl<W: Write> ChipInfoQuery for HostPlatform<W> {
    fn chip_info(&self) -> ChipInfo {
        self.chip
    }
}

impl<W: Write> FlashQuery for HostPlatform<W> {
    fn flash_size(&self) -> Result<u32, FlashError> {
        self.flash
    }
}

impl<W: Write> HeapQuery for HostPlatform<W> {
    fn minimum_free_heap(&self) -> u32 {
        self.min_free_heap
    }
}

impl<W: Write> TaskDelay for HostPlatform<W> {
    fn tick_rate(&self) -> TickRate {
        self.tick_rate
    }

    fn delay_ticks(&mut self, ticks: u32) {
        let period = self.tick_rate.ticks_to_duration(ticks);
        trace!("delay {ticks} ticks ({period:?})");
        thread::sleep(period);
    }
}

impl<W: Write> Restart for HostPlatform<W> {
    fn restart(&mut self) -> ! {
        Console::flush(self);
        match self.restart_mode {
            RestartMode::Exit => {
                info!("restart requested; exiting host process");
                process::exit(0)
            }
            RestartMode::Reexec => {
                info!("restart requested; re-executing host process");
                let err = reexec();
                error!("re-exec failed: {err}");
                process::exit(1)
            }
        }
    }
}

/// Replaces the current process image with a fresh copy of itself.
///
/// Only returns on failure.
fn reexec() -> io::Error {
    let exe = match env::current_exe() {
        Ok(path) => path,
        Err(err) => return err,
    };
    let args: Vec<OsString> = env::args_os().skip(1).collect();

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        Command::new(exe).args(args).exec()
    }

    #[cfg(not(unix))]
    {
        match Command::new(exe).args(args).status() {
            Ok(status) => process::exit(status.code().unwrap_or(1)),
            Err(err) => err,
        }
    }
}
