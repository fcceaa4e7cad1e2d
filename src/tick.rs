// CLASSIFICATION: COMMUNITY
// Filename: tick.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Scheduler tick granularity and millisecond conversion.

use core::num::NonZeroU32;
use core::time::Duration;

/// Common FreeRTOS `configTICK_RATE_HZ` default.
pub const DEFAULT_TICK_RATE: TickRate = match NonZeroU32::new(100) {
    Some(hz) => TickRate::new(hz),
    None => unreachable!(),
};

/// Scheduler tick rate in Hz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRate(NonZeroU32);

impl TickRate {
    pub const fn new(hz: NonZeroU32) -> Self {
        Self(hz)
    }

    /// Returns `None` for a zero rate.
    pub fn from_hz(hz: u32) -> Option<Self> {
        NonZeroU32::new(hz).map(Self)
    }

    pub const fn hz(self) -> u32 {
        self.0.get()
    }

    /// Converts a wall-clock delay into whole ticks, rounding down.
    pub fn ms_to_ticks(self, ms: u32) -> u32 {
        let ticks = u64::from(ms) * u64::from(self.hz()) / 1000;
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }

    /// Wall-clock length of `ticks` scheduler ticks.
    pub fn ticks_to_duration(self, ticks: u32) -> Duration {
        let nanos = u128::from(ticks) * 1_000_000_000 / u128::from(self.hz());
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}
