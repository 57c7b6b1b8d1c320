use crate::core::SomoError;

/// Events a speech backend reports after `start`. A backend is single-shot:
/// one activation yields at most one final transcript, then `Ended`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    Transcript(String),
    Error(String),
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePhase {
    Idle,
    Listening,
}

/// Contract for a platform speech recognizer. The recognition locale is
/// fixed when the backend is constructed.
pub trait SpeechBackend: Send {
    fn start(&mut self) -> Result<(), SomoError>;
    fn stop(&mut self);
    fn poll(&mut self) -> Vec<CaptureEvent>;
}

/// Placeholder backend for platforms without a wired-in recognizer.
/// Starting it fails, which the session controller swallows the same way
/// it swallows a mid-capture error.
pub struct NoCapture;

impl SpeechBackend for NoCapture {
    fn start(&mut self) -> Result<(), SomoError> {
        Err(SomoError::CaptureUnavailable(
            "no speech recognizer is available on this platform".to_string(),
        ))
    }

    fn stop(&mut self) {}

    fn poll(&mut self) -> Vec<CaptureEvent> {
        Vec::new()
    }
}

// TODO: cpal-based recorder feeding a local transcription model, so the
// mic button works without a platform recognizer.
pub fn platform_backend(_locale: &str) -> Box<dyn SpeechBackend> {
    Box::new(NoCapture)
}

/// Owns the backend and its `Idle -> Listening -> Idle` lifecycle. The
/// manager is acquired by the session controller at construction and torn
/// down with it; nothing here is process-wide.
pub struct CaptureManager {
    backend: Box<dyn SpeechBackend>,
    phase: CapturePhase,
}

impl CaptureManager {
    pub fn new(backend: Box<dyn SpeechBackend>) -> Self {
        Self { backend, phase: CapturePhase::Idle }
    }

    pub fn phase(&self) -> CapturePhase {
        self.phase
    }

    pub fn is_listening(&self) -> bool {
        self.phase == CapturePhase::Listening
    }

    /// No-op while already listening. A backend that refuses to start
    /// leaves the manager idle.
    pub fn start(&mut self) -> Result<(), SomoError> {
        if self.phase == CapturePhase::Listening {
            return Ok(());
        }

        self.backend.start()?;
        self.phase = CapturePhase::Listening;
        Ok(())
    }

    pub fn stop(&mut self) {
        if self.phase == CapturePhase::Listening {
            self.backend.stop();
        }
    }

    /// Drains backend events. Any terminal event (error or end) returns
    /// the manager to idle; events arriving while idle are discarded as
    /// leftovers of a stopped activation.
    pub fn poll(&mut self) -> Vec<CaptureEvent> {
        let events = self.backend.poll();
        if self.phase == CapturePhase::Idle {
            return Vec::new();
        }

        for event in &events {
            if matches!(event, CaptureEvent::Error(_) | CaptureEvent::Ended) {
                self.phase = CapturePhase::Idle;
            }
        }

        events
    }
}

#[cfg(test)]
pub mod testing {
    use std::collections::VecDeque;

    use super::*;

    /// Scripted backend for controller tests.
    pub struct ScriptedBackend {
        pub events: VecDeque<CaptureEvent>,
        pub fail_start: bool,
        pub started: usize,
        pub stopped: usize,
    }

    impl ScriptedBackend {
        pub fn new(events: Vec<CaptureEvent>) -> Self {
            Self { events: events.into(), fail_start: false, started: 0, stopped: 0 }
        }

        pub fn failing() -> Self {
            Self { events: VecDeque::new(), fail_start: true, started: 0, stopped: 0 }
        }
    }

    impl SpeechBackend for ScriptedBackend {
        fn start(&mut self) -> Result<(), SomoError> {
            if self.fail_start {
                return Err(SomoError::CaptureUnavailable("scripted failure".to_string()));
            }
            self.started += 1;
            Ok(())
        }

        fn stop(&mut self) {
            self.stopped += 1;
        }

        fn poll(&mut self) -> Vec<CaptureEvent> {
            self.events.drain(..).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        testing::ScriptedBackend,
        *,
    };

    #[test]
    fn transcript_then_end_returns_to_idle() {
        let backend = ScriptedBackend::new(vec![
            CaptureEvent::Transcript("what is osmosis".to_string()),
            CaptureEvent::Ended,
        ]);
        let mut capture = CaptureManager::new(Box::new(backend));

        capture.start().unwrap();
        assert!(capture.is_listening());

        let events = capture.poll();
        assert_eq!(events[0], CaptureEvent::Transcript("what is osmosis".to_string()));
        assert_eq!(capture.phase(), CapturePhase::Idle);
    }

    #[test]
    fn failed_start_leaves_the_manager_idle() {
        let mut capture = CaptureManager::new(Box::new(ScriptedBackend::failing()));

        assert!(capture.start().is_err());
        assert_eq!(capture.phase(), CapturePhase::Idle);
    }

    #[test]
    fn backend_error_ends_the_activation() {
        let backend = ScriptedBackend::new(vec![CaptureEvent::Error("mic lost".to_string())]);
        let mut capture = CaptureManager::new(Box::new(backend));

        capture.start().unwrap();
        capture.poll();
        assert_eq!(capture.phase(), CapturePhase::Idle);
    }

    #[test]
    fn events_while_idle_are_discarded() {
        let backend = ScriptedBackend::new(vec![CaptureEvent::Transcript("late".to_string())]);
        let mut capture = CaptureManager::new(Box::new(backend));

        assert!(capture.poll().is_empty());
    }
}
