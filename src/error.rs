//! Error types surfaced by construction and by raw selection-code bridging.

use thiserror::Error;

/// Rejected construction parameters. Only constructors return this; once a
/// map exists no operation can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("invalid capacity: {0} (must be between 1 and i32::MAX)")]
    InvalidCapacity(usize),
    #[error("invalid load factor: {0} (must be greater than 0)")]
    InvalidLoadFactor(f32),
    #[error("invalid threshold: capacity {capacity} with load factor {load_factor} leaves no room before growth")]
    InvalidThreshold { capacity: usize, load_factor: f32 },
}

/// A raw selection code outside `0..=3`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown selection code: {0}")]
pub struct SelectionCodeError(pub u8);
