//! Camera selection: maker keys, manufacturer records and the factory.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;

use super::composite::Camera;
use super::parts::{FilmKind, MirrorKind, ShutterKind};
use crate::trace::SharedSink;
use crate::traits::{FactoryError, Result, ShutterSpeed};

/// Manufacturer record: which parts to inject into a camera.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraSpec {
    /// Display name of the camera.
    pub name: String,
    /// Film variant to inject.
    pub film: FilmKind,
    /// Shutter variant to inject.
    pub shutter: ShutterKind,
    /// Mirror variant to inject.
    pub mirror: MirrorKind,
    /// Exposure time used for every picture.
    pub speed: ShutterSpeed,
}

/// Built-in camera makers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMaker {
    /// Kodak film, focal-plane shutter, reflex mirror at 1/250.
    Canon,
    /// Fuji film, focal-plane shutter, pellicle mirror at 1/500.
    Nikon,
    /// Kodak film, leaf shutter, reflex mirror at 1/125.
    Pentax,
}

impl CameraMaker {
    /// Every built-in maker.
    pub const ALL: [Self; 3] = [Self::Canon, Self::Nikon, Self::Pentax];

    /// Canonical key token and display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Canon => "Canon",
            Self::Nikon => "Nikon",
            Self::Pentax => "Pentax",
        }
    }

    /// The manufacturer record for this maker.
    #[must_use]
    pub fn spec(self) -> CameraSpec {
        let (film, shutter, mirror, speed) = match self {
            Self::Canon => (
                FilmKind::Kodak,
                ShutterKind::FocalPlane,
                MirrorKind::Reflex,
                ShutterSpeed::ONE_250,
            ),
            Self::Nikon => (
                FilmKind::Fuji,
                ShutterKind::FocalPlane,
                MirrorKind::Pellicle,
                ShutterSpeed::ONE_500,
            ),
            Self::Pentax => (
                FilmKind::Kodak,
                ShutterKind::Leaf,
                MirrorKind::Reflex,
                ShutterSpeed::ONE_125,
            ),
        };

        CameraSpec {
            name: self.as_str().to_owned(),
            film,
            shutter,
            mirror,
            speed,
        }
    }
}

impl fmt::Display for CameraMaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CameraMaker {
    type Err = FactoryError;

    fn from_str(key: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|maker| maker.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| FactoryError::UnknownCameraMaker(key.to_owned()))
    }
}

/// Builds fully assembled cameras.
pub struct CameraFactory;

impl CameraFactory {
    /// Build a new camera for a built-in maker.
    #[must_use]
    pub fn create(maker: CameraMaker, sink: SharedSink) -> Camera {
        Self::from_spec(&maker.spec(), sink)
    }

    /// Parse `key` as a built-in maker and build its camera.
    pub fn create_from_key(key: &str, sink: SharedSink) -> Result<Camera> {
        let maker = key.parse::<CameraMaker>()?;
        Ok(Self::create(maker, sink))
    }

    /// Build a new camera from a manufacturer record.
    #[must_use]
    pub fn from_spec(spec: &CameraSpec, sink: SharedSink) -> Camera {
        tracing::debug!(
            name = %spec.name,
            film = %spec.film,
            shutter = %spec.shutter,
            mirror = %spec.mirror,
            speed = %spec.speed,
            "assembling camera"
        );

        Camera::assemble(
            spec.name.clone(),
            spec.film.build(Arc::clone(&sink)),
            spec.shutter.build(Arc::clone(&sink)),
            spec.mirror.build(Arc::clone(&sink)),
            spec.speed,
            sink,
        )
    }
}
