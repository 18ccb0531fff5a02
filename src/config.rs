//! Construction parameters for `IntKeyHashMap`.

use crate::error::ConfigError;

/// Bucket count used by `IntKeyHashMap::new`.
pub const DEFAULT_CAPACITY: usize = 16;
/// Load factor used when none is given.
pub const DEFAULT_LOAD_FACTOR: f32 = 0.75;
/// Largest initial bucket count a config may ask for.
pub const MAX_CAPACITY: usize = i32::MAX as usize;

/// Initial capacity and load factor of a map.
///
/// The growth threshold is derived as `floor(capacity * load_factor)` and
/// must be positive, so small capacities need a correspondingly large load
/// factor (capacity 1 requires a load factor of at least 1.0).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MapConfig {
    pub capacity: usize,
    pub load_factor: f32,
}

impl MapConfig {
    pub const fn new(capacity: usize, load_factor: f32) -> Self {
        Self {
            capacity,
            load_factor,
        }
    }

    /// Checks the parameters and returns the derived growth threshold.
    pub fn validate(&self) -> Result<usize, ConfigError> {
        if self.capacity < 1 || self.capacity > MAX_CAPACITY {
            return Err(ConfigError::InvalidCapacity(self.capacity));
        }
        // Negated comparison so NaN is rejected too.
        if !(self.load_factor > 0.0) {
            return Err(ConfigError::InvalidLoadFactor(self.load_factor));
        }
        match threshold_for(self.capacity, self.load_factor) {
            0 => Err(ConfigError::InvalidThreshold {
                capacity: self.capacity,
                load_factor: self.load_factor,
            }),
            t => Ok(t),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR)
    }
}

/// `floor(capacity * load_factor)`, saturating at `usize::MAX`.
///
/// The product is taken in `f32` so that load factors such as 0.7 or 0.9,
/// which are not exact in binary, land on the whole number a caller wrote
/// (10 * 0.7 = 7, not 6).
pub(crate) fn threshold_for(capacity: usize, load_factor: f32) -> usize {
    (capacity as f32 * load_factor).floor() as usize
}
