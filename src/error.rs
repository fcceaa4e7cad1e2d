// CLASSIFICATION: COMMUNITY
// Filename: error.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Error types shared by the startup sequence and the host harness.

use thiserror::Error;

/// Failure reported by the platform flash-size query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlashError {
    /// The flash chip did not answer the size probe.
    #[error("flash chip unavailable")]
    Unavailable,
    /// The platform returned a non-OK status code.
    #[error("flash query returned status {0}")]
    Platform(i32),
}

/// Reasons the startup report ends without requesting a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("flash size query failed: {0}")]
    FlashQuery(#[from] FlashError),
}

/// Errors produced while assembling the host-mode configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("{var}={value} is not a valid {expected}")]
    Env {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("chip must report at least one CPU core")]
    ZeroCores,
    #[error("scheduler tick rate must be non-zero")]
    ZeroTickRate,
    #[error("unknown chip feature `{0}`")]
    UnknownFeature(String),
    #[error("unknown restart mode `{0}` (expected `reexec` or `exit`)")]
    UnknownRestartMode(String),
}
