//! The camera composite and its picture-taking sequence.

use std::fmt;

use crate::trace::SharedSink;
use crate::traits::{Film, Mirror, Shutter, ShutterSpeed};

/// One operation performed while taking a picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Film engaged with the transport.
    FilmEngage,
    /// Film advanced one frame.
    FilmRoll,
    /// Film released.
    FilmRelease,
    /// Mirror flipped out of the light path.
    MirrorOpen,
    /// Exposure time set on the shutter.
    ShutterSetSpeed,
    /// Shutter cocked.
    ShutterInit,
    /// Shutter fired.
    ShutterActivate,
    /// Shutter released.
    ShutterRelease,
    /// Mirror returned to the viewing position.
    MirrorClose,
}

impl Step {
    /// The order every camera performs its steps in.
    pub const SEQUENCE: [Self; 9] = [
        Self::FilmEngage,
        Self::FilmRoll,
        Self::FilmRelease,
        Self::MirrorOpen,
        Self::ShutterSetSpeed,
        Self::ShutterInit,
        Self::ShutterActivate,
        Self::ShutterRelease,
        Self::MirrorClose,
    ];

    /// Label-independent phrase that identifies this step in a trace line.
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::FilmEngage => "film has been engaged",
            Self::FilmRoll => "film has been rolled",
            Self::FilmRelease => "film has been released",
            Self::MirrorOpen => "mirror has been opened",
            Self::ShutterSetSpeed => "shutter speed has been set to",
            Self::ShutterInit => "shutter has been initialized",
            Self::ShutterActivate => "shutter has been activated",
            Self::ShutterRelease => "shutter has been released",
            Self::MirrorClose => "mirror has been closed",
        }
    }

    /// Identify the step a trace line reports, if any.
    #[must_use]
    pub fn classify(line: &str) -> Option<Self> {
        Self::SEQUENCE
            .into_iter()
            .find(|step| line.contains(step.phrase()))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

/// A camera assembled from one film, one shutter and one mirror.
///
/// The camera only knows its parts through their contracts. It is built
/// once and never changes afterwards.
pub struct Camera {
    name: String,
    film: Box<dyn Film>,
    shutter: Box<dyn Shutter>,
    mirror: Box<dyn Mirror>,
    speed: ShutterSpeed,
    sink: SharedSink,
}

impl Camera {
    /// Assemble a camera from already-built parts.
    #[must_use]
    pub fn assemble<N>(
        name: N,
        film: Box<dyn Film>,
        shutter: Box<dyn Shutter>,
        mirror: Box<dyn Mirror>,
        speed: ShutterSpeed,
        sink: SharedSink,
    ) -> Self
    where
        N: Into<String>,
    {
        Self {
            name: name.into(),
            film,
            shutter,
            mirror,
            speed,
            sink,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exposure time used for every picture.
    #[must_use]
    pub const fn speed(&self) -> ShutterSpeed {
        self.speed
    }

    /// Labels of the film, shutter and mirror, in that order.
    #[must_use]
    pub fn part_labels(&self) -> (&'static str, &'static str, &'static str) {
        (self.film.label(), self.shutter.label(), self.mirror.label())
    }

    /// Run the full picture-taking sequence and return the steps performed.
    pub fn take_picture(&self) -> Vec<Step> {
        self.sink
            .emit(&format!("{} is taking a picture", self.name));

        let mut performed = Vec::with_capacity(Step::SEQUENCE.len());
        for step in Step::SEQUENCE {
            self.perform(step);
            performed.push(step);
        }

        self.sink
            .emit(&format!("{} has taken a picture", self.name));
        performed
    }

    fn perform(&self, step: Step) {
        match step {
            Step::FilmEngage => self.film.engage(),
            Step::FilmRoll => self.film.roll(),
            Step::FilmRelease => self.film.release(),
            Step::MirrorOpen => self.mirror.open(),
            Step::ShutterSetSpeed => self.shutter.set_speed(self.speed),
            Step::ShutterInit => self.shutter.init(),
            Step::ShutterActivate => self.shutter.activate(),
            Step::ShutterRelease => self.shutter.release(),
            Step::MirrorClose => self.mirror.close(),
        }
    }
}

impl fmt::Debug for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (film, shutter, mirror) = self.part_labels();
        f.debug_struct("Camera")
            .field("name", &self.name)
            .field("film", &film)
            .field("shutter", &shutter)
            .field("mirror", &mirror)
            .field("speed", &self.speed)
            .finish_non_exhaustive()
    }
}
