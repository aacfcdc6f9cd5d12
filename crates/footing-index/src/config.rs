//! Layer configuration, validation, and error types.
//!
//! [`LayerConfig`] is the constructor input for a
//! [`PlacementLayer`](crate::PlacementLayer). [`validate()`](LayerConfig::validate)
//! checks it once at construction; the layer never changes it afterwards.

use std::error::Error;
use std::fmt;

use footing_space::GridBounds;

// ── OverlapPolicy ──────────────────────────────────────────────────

/// What an insert does when its footprint touches occupied keys.
///
/// Callers are expected to check
/// [`is_space_free`](crate::PlacementLayer::is_space_free) before adding,
/// so this only decides how an unchecked overlapping insert is handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlapPolicy {
    /// Refuse the insert with
    /// [`IndexError::AlreadyOccupied`](crate::IndexError::AlreadyOccupied);
    /// the layer is left untouched.
    #[default]
    Reject,
    /// Remove every object the new footprint touches (all of their keys),
    /// then insert. The displaced records are dropped.
    Replace,
}

// ── LayerConfig ────────────────────────────────────────────────────

/// Configuration for one placement layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerConfig {
    /// Layer name, used in log output (`"floor"`, `"walls"`).
    pub name: String,
    /// Playable area. Queries treat anything outside as invalid.
    pub bounds: GridBounds,
    /// Handling of overlapping inserts. Default: [`OverlapPolicy::Reject`].
    pub overlap_policy: OverlapPolicy,
}

impl LayerConfig {
    /// Config with the default overlap policy.
    pub fn new(name: impl Into<String>, bounds: GridBounds) -> Self {
        Self {
            name: name.into(),
            bounds,
            overlap_policy: OverlapPolicy::default(),
        }
    }

    /// Replace the overlap policy.
    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.overlap_policy = policy;
        self
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        let b = &self.bounds;
        if b.x_min() > b.x_max() {
            return Err(ConfigError::InvertedBounds {
                axis: 'x',
                min: b.x_min(),
                max: b.x_max(),
            });
        }
        if b.z_min() > b.z_max() {
            return Err(ConfigError::InvertedBounds {
                axis: 'z',
                min: b.z_min(),
                max: b.z_max(),
            });
        }
        Ok(())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`LayerConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The layer name is empty or whitespace.
    EmptyName,
    /// A bounds axis has `min > max`.
    InvertedBounds {
        /// `'x'` or `'z'`.
        axis: char,
        /// Configured minimum.
        min: i32,
        /// Configured maximum.
        max: i32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "layer name must not be empty"),
            Self::InvertedBounds { axis, min, max } => {
                write!(f, "{axis} bounds are inverted: min {min} > max {max}")
            }
        }
    }
}

impl Error for ConfigError {}
