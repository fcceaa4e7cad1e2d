// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18
#![deny(unsafe_code)]

//! Startup report and delayed restart for RTOS targets.
//!
//! [`sequencer::run`] greets the console, reports chip identity, flash size
//! and the heap low-water mark, counts down, then resets the board. Every
//! board facility is reached through the capability traits in [`platform`],
//! so the same sequence drives real hardware, the host simulation in
//! [`platform::host`], and test fakes.

/// Chip feature bitset, silicon revision and chip info record.
pub mod chip;

/// Host-mode configuration loading.
pub mod config;

/// Error types.
pub mod error;

/// Board capability traits and the host platform.
pub mod platform;

/// Console text for every report line.
pub mod report;

/// The startup report and restart sequence.
pub mod sequencer;

/// Scheduler tick conversion.
pub mod tick;

pub use chip::{ChipFeatures, ChipInfo, SiliconRevision};
pub use error::{ConfigError, FlashError, ReportError};
pub use platform::Platform;
pub use report::PlatformReport;
pub use sequencer::{report_and_countdown, run, ReportSettings, RestartRequest};
pub use tick::TickRate;
