//! Capability contracts and core types shared by both simulations.

use std::fmt;

use serde::Deserialize;

/// Exposure time expressed as the denominator of `1/n` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "u32")]
pub struct ShutterSpeed(u32);

impl ShutterSpeed {
    /// 1/125 s.
    pub const ONE_125: Self = Self(125);
    /// 1/250 s.
    pub const ONE_250: Self = Self(250);
    /// 1/500 s.
    pub const ONE_500: Self = Self(500);
    /// 1/1000 s.
    pub const ONE_1000: Self = Self(1000);

    /// Create a shutter speed of `1/denominator` seconds.
    ///
    /// A zero denominator is rejected.
    pub fn new(denominator: u32) -> Result<Self> {
        if denominator == 0 {
            return Err(FactoryError::InvalidShutterSpeed(denominator));
        }
        Ok(Self(denominator))
    }

    /// The `n` in `1/n` seconds.
    #[must_use]
    pub const fn denominator(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for ShutterSpeed {
    type Error = FactoryError;

    fn try_from(denominator: u32) -> Result<Self> {
        Self::new(denominator)
    }
}

impl fmt::Display for ShutterSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1/{}", self.0)
    }
}

/// Error type for selector and catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    /// Transport key outside the recognized set.
    #[error("unknown transport: {0:?} (expected one of CAR, BOAT, PLANE)")]
    UnknownTransport(String),
    /// Camera maker key outside the recognized set.
    #[error("unknown camera maker: {0:?}")]
    UnknownCameraMaker(String),
    /// Film, shutter or mirror key outside the recognized set.
    #[error("unknown {kind} kind: {key:?}")]
    UnknownPart {
        /// Part family (`film`, `shutter` or `mirror`).
        kind: &'static str,
        /// The rejected key.
        key: String,
    },
    /// Shutter speed denominator of zero.
    #[error("invalid shutter speed: 1/{0}")]
    InvalidShutterSpeed(u32),
    /// Malformed manufacturer catalog.
    #[error("catalog error: {0}")]
    Catalog(String),
    /// A trace did not match the expected sequence.
    #[error("trace validation failed: {0}")]
    Validation(String),
}

/// Result type for selector operations.
pub type Result<T> = std::result::Result<T, FactoryError>;

/// Anything that can carry a passenger somewhere.
pub trait Transport {
    /// Label used in trace output.
    fn label(&self) -> &'static str;

    /// Travel, emitting one trace line.
    fn travel(&self);
}

/// Film handling of a camera.
pub trait Film {
    /// Label used in trace output.
    fn label(&self) -> &'static str;

    /// Engage the film with the transport sprockets.
    fn engage(&self);

    /// Advance the film by one frame.
    fn roll(&self);

    /// Release the film after advancing.
    fn release(&self);
}

/// Shutter mechanism of a camera.
pub trait Shutter {
    /// Label used in trace output.
    fn label(&self) -> &'static str;

    /// Set the exposure time for the next activation.
    fn set_speed(&self, speed: ShutterSpeed);

    /// Cock the shutter.
    fn init(&self);

    /// Fire the shutter.
    fn activate(&self);

    /// Release the shutter after exposure.
    fn release(&self);
}

/// Reflex mirror of a camera.
pub trait Mirror {
    /// Label used in trace output.
    fn label(&self) -> &'static str;

    /// Flip the mirror out of the light path.
    fn open(&self);

    /// Return the mirror to the viewing position.
    fn close(&self);
}
