// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Host-mode configuration: defaults, then an optional TOML file, then
//! `HELLO_*` environment overrides.

use std::env::{self, VarError};
use std::fs;
use std::num::NonZeroU8;
use std::path::Path;
use std::str::FromStr;

use log::debug;
use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::chip::{ChipFeatures, ChipInfo, SiliconRevision};
use crate::error::ConfigError;
use crate::sequencer::{ReportSettings, DEFAULT_COUNTDOWN_SECS};
use crate::tick::{TickRate, DEFAULT_TICK_RATE};

pub const ENV_TARGET: &str = "HELLO_TARGET";
pub const ENV_TICK_RATE_HZ: &str = "HELLO_TICK_RATE_HZ";
pub const ENV_COUNTDOWN_SECS: &str = "HELLO_COUNTDOWN_SECS";
pub const ENV_RESTART: &str = "HELLO_RESTART";
pub const ENV_CHIP_CORES: &str = "HELLO_CHIP_CORES";
pub const ENV_CHIP_FEATURES: &str = "HELLO_CHIP_FEATURES";
pub const ENV_CHIP_REVISION: &str = "HELLO_CHIP_REVISION";
pub const ENV_FLASH_SIZE: &str = "HELLO_FLASH_SIZE";
pub const ENV_FLASH_FAIL: &str = "HELLO_FLASH_FAIL";
pub const ENV_MIN_FREE_HEAP: &str = "HELLO_MIN_FREE_HEAP";

/// Every variable consulted by [`HostConfig::apply_env`].
pub const ENV_VARS: [&str; 10] = [
    ENV_TARGET,
    ENV_TICK_RATE_HZ,
    ENV_COUNTDOWN_SECS,
    ENV_RESTART,
    ENV_CHIP_CORES,
    ENV_CHIP_FEATURES,
    ENV_CHIP_REVISION,
    ENV_FLASH_SIZE,
    ENV_FLASH_FAIL,
    ENV_MIN_FREE_HEAP,
];

const DEFAULT_CORES: NonZeroU8 = match NonZeroU8::new(2) {
    Some(cores) => cores,
    None => unreachable!(),
};

/// What the host platform does when the sequence requests a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestartMode {
    /// Replace the process with a fresh copy, like a warm reboot.
    #[default]
    Reexec,
    /// Exit with status 0.
    Exit,
}

impl FromStr for RestartMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reexec" => Ok(Self::Reexec),
            "exit" => Ok(Self::Exit),
            _ => Err(ConfigError::UnknownRestartMode(s.to_owned())),
        }
    }
}

impl<'de> Deserialize<'de> for RestartMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Validated host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub target: String,
    pub tick_rate: TickRate,
    pub countdown_secs: u32,
    pub restart: RestartMode,
    pub chip: ChipInfo,
    pub flash_size_bytes: u32,
    pub flash_fail: bool,
    pub min_free_heap_bytes: u32,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            target: "esp32".into(),
            tick_rate: DEFAULT_TICK_RATE,
            countdown_secs: DEFAULT_COUNTDOWN_SECS,
            restart: RestartMode::Reexec,
            chip: ChipInfo::new(
                DEFAULT_CORES,
                ChipFeatures::WIFI_BGN
                    | ChipFeatures::BT
                    | ChipFeatures::BLE
                    | ChipFeatures::EMB_FLASH,
                SiliconRevision::from_combined(101),
            ),
            flash_size_bytes: 4 * 1024 * 1024,
            flash_fail: false,
            min_free_heap_bytes: 300_000,
        }
    }
}

/// On-disk layout; every key optional so files only name what they change.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    target: Option<String>,
    tick_rate_hz: Option<u32>,
    countdown_secs: Option<u32>,
    restart: Option<RestartMode>,
    chip: Option<ChipSection>,
    flash_size_bytes: Option<u32>,
    flash_fail: Option<bool>,
    min_free_heap_bytes: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChipSection {
    cores: Option<u8>,
    features: Option<Vec<String>>,
    revision: Option<u16>,
}

impl HostConfig {
    /// Loads defaults, then `path` if given, then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        if let Some(path) = path {
            let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.display().to_string(),
                source,
            })?;
            cfg.apply_toml(&text, &path.display().to_string())?;
        }
        cfg.apply_env()?;
        debug!("host config: {cfg:?}");
        Ok(cfg)
    }

    /// Overlays the keys present in a TOML document. `origin` labels errors.
    pub fn apply_toml(&mut self, text: &str, origin: &str) -> Result<(), ConfigError> {
        let file: ConfigFile = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_owned(),
            source,
        })?;
        if let Some(target) = file.target {
            self.target = target;
        }
        if let Some(hz) = file.tick_rate_hz {
            self.tick_rate = TickRate::from_hz(hz).ok_or(ConfigError::ZeroTickRate)?;
        }
        if let Some(secs) = file.countdown_secs {
            self.countdown_secs = secs;
        }
        if let Some(mode) = file.restart {
            self.restart = mode;
        }
        if let Some(chip) = file.chip {
            if let Some(cores) = chip.cores {
                self.chip.cores = NonZeroU8::new(cores).ok_or(ConfigError::ZeroCores)?;
            }
            if let Some(names) = chip.features {
                self.chip.features = parse_features(names.iter().map(String::as_str))?;
            }
            if let Some(raw) = chip.revision {
                self.chip.revision = SiliconRevision::from_combined(raw);
            }
        }
        if let Some(size) = file.flash_size_bytes {
            self.flash_size_bytes = size;
        }
        if let Some(fail) = file.flash_fail {
            self.flash_fail = fail;
        }
        if let Some(heap) = file.min_free_heap_bytes {
            self.min_free_heap_bytes = heap;
        }
        Ok(())
    }

    /// Overlays any `HELLO_*` variables present in the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Some(target) = env_string(ENV_TARGET, "target name")? {
            self.target = target;
        }
        if let Some(hz) = env_parse::<u32>(ENV_TICK_RATE_HZ, "tick rate in Hz")? {
            self.tick_rate = TickRate::from_hz(hz).ok_or(ConfigError::ZeroTickRate)?;
        }
        if let Some(secs) = env_parse::<u32>(ENV_COUNTDOWN_SECS, "number of seconds")? {
            self.countdown_secs = secs;
        }
        if let Some(mode) = env_string(ENV_RESTART, "restart mode")? {
            self.restart = mode.parse()?;
        }
        if let Some(cores) = env_parse::<u8>(ENV_CHIP_CORES, "core count")? {
            self.chip.cores = NonZeroU8::new(cores).ok_or(ConfigError::ZeroCores)?;
        }
        if let Some(list) = env_string(ENV_CHIP_FEATURES, "feature list")? {
            self.chip.features = parse_features(list.split(',').filter(|s| !s.trim().is_empty()))?;
        }
        if let Some(raw) = env_parse::<u16>(ENV_CHIP_REVISION, "combined revision")? {
            self.chip.revision = SiliconRevision::from_combined(raw);
        }
        if let Some(size) = env_parse::<u32>(ENV_FLASH_SIZE, "flash size in bytes")? {
            self.flash_size_bytes = size;
        }
        if let Some(fail) = env_parse::<bool>(ENV_FLASH_FAIL, "boolean")? {
            self.flash_fail = fail;
        }
        if let Some(heap) = env_parse::<u32>(ENV_MIN_FREE_HEAP, "heap size in bytes")? {
            self.min_free_heap_bytes = heap;
        }
        Ok(())
    }

    pub fn chip_info(&self) -> ChipInfo {
        self.chip
    }

    pub fn tick_rate(&self) -> TickRate {
        self.tick_rate
    }

    pub fn report_settings(&self) -> ReportSettings {
        ReportSettings {
            target: self.target.clone(),
            countdown_secs: self.countdown_secs,
        }
    }
}

fn parse_features<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<ChipFeatures, ConfigError> {
    names.into_iter().try_fold(ChipFeatures::empty(), |acc, name| {
        ChipFeatures::from_config_name(name)
            .map(|flag| acc | flag)
            .ok_or_else(|| ConfigError::UnknownFeature(name.trim().to_owned()))
    })
}

fn env_parse<T: FromStr>(var: &'static str, expected: &'static str) -> Result<Option<T>, ConfigError> {
    match env_string(var, expected)? {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Env {
                var,
                value,
                expected,
            }),
        None => Ok(None),
    }
}

/// Reads `var`, treating only an unset variable as absent.
fn env_string(var: &'static str, expected: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(var) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::Env {
            var,
            value: raw.to_string_lossy().into_owned(),
            expected,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_dual_core_target() {
        let cfg = HostConfig::default();
        assert_eq!(cfg.target, "esp32");
        assert_eq!(cfg.tick_rate.hz(), 100);
        assert_eq!(cfg.countdown_secs, 10);
        assert_eq!(cfg.chip.cores.get(), 2);
        assert_eq!(cfg.chip.features.radio_clause(), "WiFi/BT/BLE");
        assert!(cfg.chip.features.has_embedded_flash());
        assert_eq!(cfg.restart, RestartMode::Reexec);
    }

    #[test]
    fn toml_overlays_only_named_keys() {
        let mut cfg = HostConfig::default();
        cfg.apply_toml(
            "target = \"esp32c6\"\nrestart = \"exit\"\n[chip]\ncores = 1\nfeatures = [\"wifi\", \"ble\", \"ieee802154\"]\n",
            "inline",
        )
        .unwrap();
        assert_eq!(cfg.target, "esp32c6");
        assert_eq!(cfg.restart, RestartMode::Exit);
        assert_eq!(cfg.chip.cores.get(), 1);
        assert_eq!(
            cfg.chip.features.radio_clause(),
            "WiFi/BLE, 802.15.4 (Zigbee/Thread)"
        );
        assert_eq!(cfg.chip.revision.combined(), 101);
        assert_eq!(cfg.tick_rate.hz(), 100);
    }

    #[test]
    fn toml_rejects_invalid_values() {
        let mut cfg = HostConfig::default();
        assert!(matches!(
            cfg.apply_toml("[chip]\ncores = 0\n", "inline"),
            Err(ConfigError::ZeroCores)
        ));
        assert!(matches!(
            cfg.apply_toml("tick_rate_hz = 0\n", "inline"),
            Err(ConfigError::ZeroTickRate)
        ));
        assert!(matches!(
            cfg.apply_toml("[chip]\nfeatures = [\"lora\"]\n", "inline"),
            Err(ConfigError::UnknownFeature(name)) if name == "lora"
        ));
        assert!(matches!(
            cfg.apply_toml("colour = \"blue\"\n", "inline"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn restart_mode_parses_case_insensitively() {
        assert_eq!("EXIT".parse::<RestartMode>().unwrap(), RestartMode::Exit);
        assert_eq!(" reexec ".parse::<RestartMode>().unwrap(), RestartMode::Reexec);
        assert!("reboot".parse::<RestartMode>().is_err());
    }

    #[test]
    fn toml_restart_mode_matches_env_spelling() {
        let mut cfg = HostConfig::default();
        cfg.apply_toml("restart = \"EXIT\"\n", "inline").unwrap();
        assert_eq!(cfg.restart, RestartMode::Exit);
        cfg.apply_toml("restart = \"ReExec\"\n", "inline").unwrap();
        assert_eq!(cfg.restart, RestartMode::Reexec);
        assert!(matches!(
            cfg.apply_toml("restart = \"reboot\"\n", "inline"),
            Err(ConfigError::Parse { .. })
        ));
    }
}
