//! Transportation simulation: vehicles selected by key.

use std::fmt;
use std::str::FromStr;

use crate::trace::SharedSink;
use crate::traits::{FactoryError, Result, Transport};

struct Car {
    sink: SharedSink,
}

impl Transport for Car {
    fn label(&self) -> &'static str {
        "car"
    }

    fn travel(&self) {
        self.sink.emit(TransportKind::Car.travel_text());
    }
}

struct Boat {
    sink: SharedSink,
}

impl Transport for Boat {
    fn label(&self) -> &'static str {
        "boat"
    }

    fn travel(&self) {
        self.sink.emit(TransportKind::Boat.travel_text());
    }
}

struct Plane {
    sink: SharedSink,
}

impl Transport for Plane {
    fn label(&self) -> &'static str {
        "plane"
    }

    fn travel(&self) {
        self.sink.emit(TransportKind::Plane.travel_text());
    }
}

fn build_car(sink: SharedSink) -> Box<dyn Transport> {
    Box::new(Car { sink })
}

fn build_boat(sink: SharedSink) -> Box<dyn Transport> {
    Box::new(Boat { sink })
}

fn build_plane(sink: SharedSink) -> Box<dyn Transport> {
    Box::new(Plane { sink })
}

/// Selection key for [`TransportFactory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportKind {
    /// A road vehicle.
    Car,
    /// A watercraft.
    Boat,
    /// An aircraft.
    Plane,
}

impl TransportKind {
    /// Every recognized kind, in declaration order.
    pub const ALL: [Self; 3] = [Self::Car, Self::Boat, Self::Plane];

    /// Canonical key token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Car => "CAR",
            Self::Boat => "BOAT",
            Self::Plane => "PLANE",
        }
    }

    /// The line a vehicle of this kind emits when it travels.
    #[must_use]
    pub const fn travel_text(self) -> &'static str {
        match self {
            Self::Car => "Traveling by car!",
            Self::Boat => "Traveling by boat!",
            Self::Plane => "Traveling by plane!",
        }
    }

    const fn constructor(self) -> fn(SharedSink) -> Box<dyn Transport> {
        match self {
            Self::Car => build_car,
            Self::Boat => build_boat,
            Self::Plane => build_plane,
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportKind {
    type Err = FactoryError;

    /// Case-insensitive, but the whole token must match a known key.
    fn from_str(key: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| FactoryError::UnknownTransport(key.to_owned()))
    }
}

/// Builds vehicles from a [`TransportKind`].
pub struct TransportFactory;

impl TransportFactory {
    /// Build a new vehicle of the given kind. Every call returns a fresh instance.
    #[must_use]
    pub fn create(kind: TransportKind, sink: SharedSink) -> Box<dyn Transport> {
        tracing::debug!(%kind, "building transport");
        (kind.constructor())(sink)
    }

    /// Parse `key` and build the matching vehicle.
    pub fn create_from_key(key: &str, sink: SharedSink) -> Result<Box<dyn Transport>> {
        let kind = key.parse::<TransportKind>()?;
        Ok(Self::create(kind, sink))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::MemorySink;
    use crate::validation::validate_label_only_difference;
    use std::sync::Arc;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("car".parse::<TransportKind>().ok(), Some(TransportKind::Car));
        assert_eq!("Boat".parse::<TransportKind>().ok(), Some(TransportKind::Boat));
        assert_eq!("PLANE".parse::<TransportKind>().ok(), Some(TransportKind::Plane));
    }

    #[test]
    fn test_parse_requires_exact_token() {
        for key in ["", " car", "car ", "cars", "SUBMARINE", "ca"] {
            let err = key.parse::<TransportKind>().expect_err("key must be rejected");
            assert!(matches!(err, FactoryError::UnknownTransport(ref k) if k == key));
        }
    }

    #[test]
    fn test_every_kind_travels() {
        for kind in TransportKind::ALL {
            let sink = MemorySink::new();
            let vehicle = TransportFactory::create(kind, Arc::<MemorySink>::clone(&sink));
            vehicle.travel();
            assert_eq!(sink.lines(), vec![kind.travel_text()]);
        }
    }

    #[test]
    fn test_labels() {
        let sink = MemorySink::new();
        let labels: Vec<&str> = TransportKind::ALL
            .into_iter()
            .map(|kind| TransportFactory::create(kind, Arc::<MemorySink>::clone(&sink)).label())
            .collect();
        assert_eq!(labels, vec!["car", "boat", "plane"]);
    }

    #[test]
    fn test_vehicles_differ_only_by_label() {
        let traces: Vec<(&str, Vec<String>)> = TransportKind::ALL
            .into_iter()
            .map(|kind| {
                let sink = MemorySink::new();
                let vehicle = TransportFactory::create(kind, Arc::<MemorySink>::clone(&sink));
                vehicle.travel();
                (vehicle.label(), sink.lines())
            })
            .collect();

        for pair in traces.windows(2) {
            let [(label_a, a), (label_b, b)] = pair else {
                continue;
            };
            let result = validate_label_only_difference(a, b, label_a, label_b);
            assert!(result.is_ok(), "{label_a} vs {label_b}: {result:?}");
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in TransportKind::ALL {
            assert_eq!(kind.to_string().parse::<TransportKind>().ok(), Some(kind));
        }
    }
}
