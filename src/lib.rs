//! Factory-Sim: the factory creational pattern as two small simulations
//!
//! A camera hardware simulation composes film, shutter and mirror parts into
//! a camera chosen by maker, and a transportation simulation picks a vehicle
//! by key. In both, a selector maps a closed set of keys to constructors and
//! callers only ever see the capability traits. Variants report what they do
//! through an injected [`trace::TraceSink`].

pub mod camera;
pub mod trace;
pub mod traits;
pub mod transport;
pub mod validation;

#[cfg(test)]
pub mod mock;

pub use camera::{Camera, CameraFactory, CameraMaker, CameraSpec, Catalog, Step};
pub use trace::{LogSink, MemorySink, SharedSink, StdoutSink, TraceSink};
pub use traits::{FactoryError, Film, Mirror, Shutter, ShutterSpeed, Transport};
pub use transport::{TransportFactory, TransportKind};
