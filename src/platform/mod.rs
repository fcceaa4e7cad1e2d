// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Platform capabilities consumed by the startup sequence.
//!
//! Each capability is a separate trait so tests can substitute any subset;
//! [`Platform`] bundles them for callers that hold a single board handle.

use crate::chip::ChipInfo;
use crate::error::FlashError;
use crate::tick::TickRate;

pub mod host;

/// Append-only console sink.
pub trait Console {
    /// Appends text to the console stream. Output failures are swallowed.
    fn write_str(&mut self, text: &str);

    /// Forces buffered output onto the wire.
    fn flush(&mut self);
}

/// Chip identification read from ROM/eFuse.
pub trait ChipInfoQuery {
    fn chip_info(&self) -> ChipInfo;
}

/// Flash capacity probe.
pub trait FlashQuery {
    /// Returns the flash size in bytes.
    fn flash_size(&self) -> Result<u32, FlashError>;
}

/// Allocator statistics.
pub trait HeapQuery {
    /// Minimum free heap observed since boot, in bytes.
    fn minimum_free_heap(&self) -> u32;
}

/// Blocking delay that yields the processor to other tasks.
pub trait TaskDelay {
    fn tick_rate(&self) -> TickRate;

    /// Suspends the calling task for `ticks` scheduler ticks.
    fn delay_ticks(&mut self, ticks: u32);
}

/// Software reset.
pub trait Restart {
    fn restart(&mut self) -> !;
}

/// Everything the startup sequence needs from the board.
pub trait Platform: Console + ChipInfoQuery + FlashQuery + HeapQuery + TaskDelay + Restart {}

impl<T> Platform for T where T: Console + ChipInfoQuery + FlashQuery + HeapQuery + TaskDelay + Restart {}
