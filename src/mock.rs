//! Recording parts for testing the camera without real variants.

use std::sync::{Arc, Mutex, PoisonError};

use crate::camera::Step;
use crate::traits::{Film, Mirror, Shutter, ShutterSpeed};

#[derive(Debug, Default)]
struct Calls {
    steps: Vec<Step>,
    speeds: Vec<u32>,
}

/// Shared record of every call made on mock parts.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    inner: Arc<Mutex<Calls>>,
}

impl CallLog {
    fn record(&self, step: Step) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .steps
            .push(step);
    }

    fn record_speed(&self, speed: ShutterSpeed) {
        let mut calls = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        calls.steps.push(Step::ShutterSetSpeed);
        calls.speeds.push(speed.denominator());
    }

    /// Every step recorded so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<Step> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .steps
            .clone()
    }

    /// Every shutter speed denominator passed to `set_speed`.
    #[must_use]
    pub fn speeds(&self) -> Vec<u32> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .speeds
            .clone()
    }
}

/// Mock film that records its calls.
pub struct MockFilm {
    log: CallLog,
}

impl MockFilm {
    /// Create a mock film reporting into `log`.
    #[must_use]
    pub const fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl Film for MockFilm {
    fn label(&self) -> &'static str {
        "MockFilm"
    }

    fn engage(&self) {
        self.log.record(Step::FilmEngage);
    }

    fn roll(&self) {
        self.log.record(Step::FilmRoll);
    }

    fn release(&self) {
        self.log.record(Step::FilmRelease);
    }
}

/// Mock shutter that records its calls.
pub struct MockShutter {
    log: CallLog,
}

impl MockShutter {
    /// Create a mock shutter reporting into `log`.
    #[must_use]
    pub const fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl Shutter for MockShutter {
    fn label(&self) -> &'static str {
        "MockShutter"
    }

    fn set_speed(&self, speed: ShutterSpeed) {
        self.log.record_speed(speed);
    }

    fn init(&self) {
        self.log.record(Step::ShutterInit);
    }

    fn activate(&self) {
        self.log.record(Step::ShutterActivate);
    }

    fn release(&self) {
        self.log.record(Step::ShutterRelease);
    }
}

/// Mock mirror that records its calls.
pub struct MockMirror {
    log: CallLog,
}

impl MockMirror {
    /// Create a mock mirror reporting into `log`.
    #[must_use]
    pub const fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl Mirror for MockMirror {
    fn label(&self) -> &'static str {
        "MockMirror"
    }

    fn open(&self) {
        self.log.record(Step::MirrorOpen);
    }

    fn close(&self) {
        self.log.record(Step::MirrorClose);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_log_shared_between_parts() {
        let log = CallLog::default();
        let film = MockFilm::new(log.clone());
        let mirror = MockMirror::new(log.clone());

        film.engage();
        mirror.open();

        assert_eq!(log.calls(), vec![Step::FilmEngage, Step::MirrorOpen]);
    }

    #[test]
    fn test_shutter_records_speed() {
        let log = CallLog::default();
        let shutter = MockShutter::new(log.clone());

        shutter.set_speed(ShutterSpeed::new(30).expect("valid speed"));

        assert_eq!(log.calls(), vec![Step::ShutterSetSpeed]);
        assert_eq!(log.speeds(), vec![30]);
    }
}
