// CLASSIFICATION: COMMUNITY
// Filename: sequencer.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Startup report followed by a countdown and a software reset.

use core::convert::Infallible;

use log::{debug, error, info, trace};

use crate::error::ReportError;
use crate::platform::{ChipInfoQuery, Console, FlashQuery, HeapQuery, Platform, TaskDelay};
use crate::report::{self, PlatformReport};

pub const DEFAULT_COUNTDOWN_SECS: u32 = 10;

/// Delay between countdown lines.
pub const COUNTDOWN_STEP_MS: u32 = 1000;

/// Inputs the board does not report about itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    /// Build target name printed in the chip summary.
    pub target: String,
    /// First value of the countdown; the last printed value is always 0.
    pub countdown_secs: u32,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            target: "esp32".into(),
            countdown_secs: DEFAULT_COUNTDOWN_SECS,
        }
    }
}

/// Proof that the report and countdown finished and the console was flushed.
#[derive(Debug)]
#[must_use = "a finished countdown should be followed by a restart"]
pub struct RestartRequest {
    _sealed: (),
}

/// Prints the startup report, counts down, and flushes the console.
///
/// Returns early, without touching the scheduler, when the flash size cannot
/// be read.
pub fn report_and_countdown<P>(
    platform: &mut P,
    settings: &ReportSettings,
) -> Result<RestartRequest, ReportError>
where
    P: Console + ChipInfoQuery + FlashQuery + HeapQuery + TaskDelay + ?Sized,
{
    platform.write_str(report::GREETING);

    let chip = platform.chip_info();
    debug!(
        "chip: cores={} features={:#x} revision={}",
        chip.cores,
        chip.features.bits(),
        chip.revision.combined()
    );
    platform.write_str(&report::chip_line(&settings.target, &chip));
    platform.write_str(&report::revision_fragment(&chip));

    let flash_size = match platform.flash_size() {
        Ok(bytes) => bytes,
        Err(err) => {
            platform.write_str(report::FLASH_QUERY_FAILED);
            error!("flash size query failed: {err}");
            return Err(err.into());
        }
    };
    let min_free_heap = platform.minimum_free_heap();
    let facts = PlatformReport::new(chip, flash_size, min_free_heap);
    debug!(
        "report: {} core(s) features={:#x} flash={}MB min_heap={}",
        facts.core_count(),
        facts.feature_flags().bits(),
        facts.flash_size_mb(),
        facts.minimum_free_heap_bytes
    );

    platform.write_str(&facts.flash_line());
    platform.write_str(&facts.heap_line());

    let step = platform.tick_rate().ms_to_ticks(COUNTDOWN_STEP_MS);
    info!(
        "restart countdown from {}s ({step} ticks per step)",
        settings.countdown_secs
    );
    for remaining in (0..=settings.countdown_secs).rev() {
        platform.write_str(&report::countdown_line(remaining));
        trace!("countdown {remaining}");
        platform.delay_ticks(step);
    }

    platform.write_str(report::RESTARTING_NOW);
    platform.flush();
    Ok(RestartRequest { _sealed: () })
}

/// Runs the full sequence and resets the board.
///
/// Only returns when the report was cut short by a failed flash query.
pub fn run<P: Platform + ?Sized>(
    platform: &mut P,
    settings: &ReportSettings,
) -> Result<Infallible, ReportError> {
    let request = report_and_countdown(platform, settings)?;
    restart(platform, request)
}

fn restart<P: Platform + ?Sized>(platform: &mut P, _request: RestartRequest) -> ! {
    info!("restart requested");
    platform.restart()
}
