//! Camera hardware simulation.
//!
//! A [`Camera`] is composed of a film, a shutter and a mirror, each chosen
//! independently. Makers are plain [`CameraSpec`] records naming which parts
//! to inject; [`CameraFactory`] turns a maker key into an assembled camera.

mod catalog;
mod composite;
mod factory;
mod parts;

pub use catalog::Catalog;
pub use composite::{Camera, Step};
pub use factory::{CameraFactory, CameraMaker, CameraSpec};
pub use parts::{FilmKind, MirrorKind, ShutterKind};
