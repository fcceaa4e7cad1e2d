// CLASSIFICATION: COMMUNITY
// Filename: chip.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Chip identification facts as reported by the platform ROM.

use core::fmt;
use core::num::NonZeroU8;

use bitflags::bitflags;

bitflags! {
    /// Feature bitset using the platform's own bit assignment.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ChipFeatures: u32 {
        const EMB_FLASH = 1 << 0;
        const WIFI_BGN = 1 << 1;
        const BLE = 1 << 4;
        const BT = 1 << 5;
        const IEEE802154 = 1 << 6;
        const EMB_PSRAM = 1 << 7;
    }
}

/// Radio tokens in print order.
const RADIO_TOKENS: [(ChipFeatures, &str); 3] = [
    (ChipFeatures::WIFI_BGN, "WiFi"),
    (ChipFeatures::BT, "BT"),
    (ChipFeatures::BLE, "BLE"),
];

const IEEE802154_CLAUSE: &str = "802.15.4 (Zigbee/Thread)";

/// Configuration names accepted for each feature bit.
const FEATURE_NAMES: [(&str, ChipFeatures); 6] = [
    ("embedded_flash", ChipFeatures::EMB_FLASH),
    ("wifi", ChipFeatures::WIFI_BGN),
    ("ble", ChipFeatures::BLE),
    ("bt", ChipFeatures::BT),
    ("ieee802154", ChipFeatures::IEEE802154),
    ("embedded_psram", ChipFeatures::EMB_PSRAM),
];

impl ChipFeatures {
    /// Looks up a feature by its configuration name (`wifi`, `bt`, `ble`, ...).
    pub fn from_config_name(name: &str) -> Option<Self> {
        let needle = name.trim().to_ascii_lowercase();
        FEATURE_NAMES
            .iter()
            .find(|(known, _)| *known == needle)
            .map(|(_, flag)| *flag)
    }

    /// Renders the wireless feature clause, e.g. `WiFi/BT/BLE, 802.15.4 (Zigbee/Thread)`.
    ///
    /// Absent features contribute nothing, so an empty set yields an empty string.
    pub fn radio_clause(self) -> String {
        let mut clause = RADIO_TOKENS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, token)| *token)
            .collect::<Vec<_>>()
            .join("/");
        if self.contains(ChipFeatures::IEEE802154) {
            if !clause.is_empty() {
                clause.push_str(", ");
            }
            clause.push_str(IEEE802154_CLAUSE);
        }
        clause
    }

    /// Returns `true` when flash is packaged inside the chip.
    pub fn has_embedded_flash(self) -> bool {
        self.contains(ChipFeatures::EMB_FLASH)
    }
}

/// Silicon revision packed as `major * 100 + minor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SiliconRevision(u16);

impl SiliconRevision {
    pub const fn from_combined(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn combined(self) -> u16 {
        self.0
    }

    pub const fn major(self) -> u16 {
        self.0 / 100
    }

    pub const fn minor(self) -> u16 {
        self.0 % 100
    }
}

impl fmt::Display for SiliconRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}", self.major(), self.minor())
    }
}

/// Snapshot returned by the chip-info query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipInfo {
    pub cores: NonZeroU8,
    pub features: ChipFeatures,
    pub revision: SiliconRevision,
}

impl ChipInfo {
    pub const fn new(cores: NonZeroU8, features: ChipFeatures, revision: SiliconRevision) -> Self {
        Self {
            cores,
            features,
            revision,
        }
    }
}
