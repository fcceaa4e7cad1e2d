// CLASSIFICATION: COMMUNITY
// Filename: report.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Console text emitted by the startup report.
//!
//! The chip summary, revision and flash fragments share one console line on
//! the target, so only the flash line carries the terminating newline.

use crate::chip::{ChipFeatures, ChipInfo};

pub const GREETING: &str = "Hello world!\n";
pub const FLASH_QUERY_FAILED: &str = "Get flash size failed\n";
pub const RESTARTING_NOW: &str = "Restarting now.\n";

const BYTES_PER_MB: u32 = 1024 * 1024;

/// `This is {target} chip with {n} CPU core(s), {features}, `
pub fn chip_line(target: &str, chip: &ChipInfo) -> String {
    let clause = chip.features.radio_clause();
    let mut line = format!("This is {target} chip with {} CPU core(s), ", chip.cores);
    if !clause.is_empty() {
        line.push_str(&clause);
        line.push_str(", ");
    }
    line
}

/// `silicon revision vX.Y, `
pub fn revision_fragment(chip: &ChipInfo) -> String {
    format!("silicon revision {}, ", chip.revision)
}

pub fn countdown_line(secs: u32) -> String {
    format!("Restarting in {secs} seconds...\n")
}

/// Facts gathered for one pass of the startup report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformReport {
    pub chip: ChipInfo,
    pub flash_size_bytes: u32,
    pub minimum_free_heap_bytes: u32,
}

impl PlatformReport {
    pub fn new(chip: ChipInfo, flash_size_bytes: u32, minimum_free_heap_bytes: u32) -> Self {
        Self {
            chip,
            flash_size_bytes,
            minimum_free_heap_bytes,
        }
    }

    pub fn core_count(&self) -> u8 {
        self.chip.cores.get()
    }

    pub fn feature_flags(&self) -> ChipFeatures {
        self.chip.features
    }

    pub fn silicon_major_revision(&self) -> u16 {
        self.chip.revision.major()
    }

    pub fn silicon_minor_revision(&self) -> u16 {
        self.chip.revision.minor()
    }

    /// Whole megabytes; partial megabytes are truncated.
    pub fn flash_size_mb(&self) -> u32 {
        self.flash_size_bytes / BYTES_PER_MB
    }

    pub fn flash_is_embedded(&self) -> bool {
        self.chip.features.has_embedded_flash()
    }

    pub fn flash_line(&self) -> String {
        let kind = if self.flash_is_embedded() {
            "embedded"
        } else {
            "external"
        };
        format!("{}MB {kind} flash\n", self.flash_size_mb())
    }

    pub fn heap_line(&self) -> String {
        format!(
            "Minimum free heap size: {} bytes\n",
            self.minimum_free_heap_bytes
        )
    }
}
