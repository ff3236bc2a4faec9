//! Film, shutter and mirror variants with their selection keys.
//!
//! Each family has a key enum whose `build` method is the only place the
//! concrete variant types are named.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::trace::SharedSink;
use crate::traits::{FactoryError, Film, Mirror, Result, Shutter, ShutterSpeed};

/// Film stock variant: a label and the sink it reports to.
struct FilmStock {
    label: &'static str,
    sink: SharedSink,
}

impl FilmStock {
    fn report(&self, action: &str) {
        self.sink
            .emit(&format!("{} film has been {action}", self.label));
    }
}

impl Film for FilmStock {
    fn label(&self) -> &'static str {
        self.label
    }

    fn engage(&self) {
        self.report("engaged");
    }

    fn roll(&self) {
        self.report("rolled");
    }

    fn release(&self) {
        self.report("released");
    }
}

struct ShutterUnit {
    label: &'static str,
    sink: SharedSink,
}

impl ShutterUnit {
    fn report(&self, action: &str) {
        self.sink
            .emit(&format!("{} shutter has been {action}", self.label));
    }
}

impl Shutter for ShutterUnit {
    fn label(&self) -> &'static str {
        self.label
    }

    fn set_speed(&self, speed: ShutterSpeed) {
        self.sink.emit(&format!(
            "{} shutter speed has been set to {speed}",
            self.label
        ));
    }

    fn init(&self) {
        self.report("initialized");
    }

    fn activate(&self) {
        self.report("activated");
    }

    fn release(&self) {
        self.report("released");
    }
}

struct MirrorUnit {
    label: &'static str,
    sink: SharedSink,
}

impl MirrorUnit {
    fn report(&self, action: &str) {
        self.sink
            .emit(&format!("{} mirror has been {action}", self.label));
    }
}

impl Mirror for MirrorUnit {
    fn label(&self) -> &'static str {
        self.label
    }

    fn open(&self) {
        self.report("opened");
    }

    fn close(&self) {
        self.report("closed");
    }
}

/// Parse `key` case-insensitively against `all`, matching on `token`.
fn parse_key<K, F>(key: &str, all: &[K], token: F, family: &'static str) -> Result<K>
where
    K: Copy,
    F: Fn(K) -> &'static str,
{
    all.iter()
        .copied()
        .find(|kind| token(*kind).eq_ignore_ascii_case(key))
        .ok_or_else(|| FactoryError::UnknownPart {
            kind: family,
            key: key.to_owned(),
        })
}

/// Selection key for film variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum FilmKind {
    /// Kodak film stock.
    Kodak,
    /// Fuji film stock.
    Fuji,
}

impl FilmKind {
    /// Every recognized film kind.
    pub const ALL: [Self; 2] = [Self::Kodak, Self::Fuji];

    /// Label used in trace output and as the key token.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Kodak => "Kodak",
            Self::Fuji => "Fuji",
        }
    }

    /// Build a fresh film variant of this kind.
    #[must_use]
    pub fn build(self, sink: SharedSink) -> Box<dyn Film> {
        Box::new(FilmStock {
            label: self.label(),
            sink,
        })
    }
}

/// Selection key for shutter variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum ShutterKind {
    /// Curtain shutter in front of the film plane.
    FocalPlane,
    /// Bladed shutter inside the lens.
    Leaf,
}

impl ShutterKind {
    /// Every recognized shutter kind.
    pub const ALL: [Self; 2] = [Self::FocalPlane, Self::Leaf];

    /// Label used in trace output and as the key token.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FocalPlane => "Focal-plane",
            Self::Leaf => "Leaf",
        }
    }

    /// Build a fresh shutter variant of this kind.
    #[must_use]
    pub fn build(self, sink: SharedSink) -> Box<dyn Shutter> {
        Box::new(ShutterUnit {
            label: self.label(),
            sink,
        })
    }
}

/// Selection key for mirror variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum MirrorKind {
    /// Flipping reflex mirror.
    Reflex,
    /// Fixed semi-transparent mirror.
    Pellicle,
}

impl MirrorKind {
    /// Every recognized mirror kind.
    pub const ALL: [Self; 2] = [Self::Reflex, Self::Pellicle];

    /// Label used in trace output and as the key token.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reflex => "Reflex",
            Self::Pellicle => "Pellicle",
        }
    }

    /// Build a fresh mirror variant of this kind.
    #[must_use]
    pub fn build(self, sink: SharedSink) -> Box<dyn Mirror> {
        Box::new(MirrorUnit {
            label: self.label(),
            sink,
        })
    }
}

macro_rules! impl_part_key {
    ($kind:ty, $family:literal) => {
        impl fmt::Display for $kind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $kind {
            type Err = FactoryError;

            fn from_str(key: &str) -> Result<Self> {
                parse_key(key, Self::ALL.as_slice(), Self::label, $family)
            }
        }

        impl TryFrom<String> for $kind {
            type Error = FactoryError;

            fn try_from(key: String) -> Result<Self> {
                key.parse()
            }
        }
    };
}

impl_part_key!(FilmKind, "film");
impl_part_key!(ShutterKind, "shutter");
impl_part_key!(MirrorKind, "mirror");
