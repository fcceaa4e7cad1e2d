// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Recording fake board shared by the integration tests.
#![allow(dead_code)]

use std::num::NonZeroU8;

use hello_restart::platform::{ChipInfoQuery, Console, FlashQuery, HeapQuery, Restart, TaskDelay};
use hello_restart::{ChipFeatures, ChipInfo, FlashError, SiliconRevision, TickRate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Write(String),
    Flush,
    Delay(u32),
}

/// Panic payload used by [`FakeBoard::restart`].
#[derive(Debug)]
pub struct Restarted;

pub struct FakeBoard {
    pub chip: ChipInfo,
    pub flash: Result<u32, FlashError>,
    pub min_free_heap: u32,
    pub tick_rate: TickRate,
    pub events: Vec<Event>,
}

impl FakeBoard {
    pub fn new(cores: u8, features: ChipFeatures, revision: u16) -> Self {
        Self {
            chip: ChipInfo::new(
                NonZeroU8::new(cores).expect("fake board needs a core"),
                features,
                SiliconRevision::from_combined(revision),
            ),
            flash: Ok(4 * 1024 * 1024),
            min_free_heap: 0,
            tick_rate: TickRate::from_hz(100).expect("non-zero"),
            events: Vec::new(),
        }
    }

    /// Everything written to the console, concatenated.
    pub fn console(&self) -> String {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Write(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn delays(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Delay(ticks) => Some(*ticks),
                _ => None,
            })
            .collect()
    }
}

impl Console for FakeBoard {
    fn write_str(&mut self, text: &str) {
        self.events.push(Event::Write(text.to_owned()));
    }

    fn flush(&mut self) {
        self.events.push(Event::Flush);
    }
}

impl ChipInfoQuery for FakeBoard {
    fn chip_info(&self) -> ChipInfo {
        self.chip
    }
}

impl FlashQuery for FakeBoard {
    fn flash_size(&self) -> Result<u32, FlashError> {
        self.flash
    }
}

impl HeapQuery for FakeBoard {
    fn minimum_free_heap(&self) -> u32 {
        self.min_free_heap
    }
}

impl TaskDelay for FakeBoard {
    fn tick_rate(&self) -> TickRate {
        self.tick_rate
    }

    fn delay_ticks(&mut self, ticks: u32) {
        self.events.push(Event::Delay(ticks));
    }
}

impl Restart for FakeBoard {
    fn restart(&mut self) -> ! {
        std::panic::panic_any(Restarted)
    }
}
