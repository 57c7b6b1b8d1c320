use crate::{
    capture::{
        CaptureEvent,
        CaptureManager,
        SpeechBackend,
    },
    core::{
        tasks::types::{
            OutboundAsk,
            RequestId,
            RequestLifecycle,
            Settlement,
        },
        StudyContext,
        Turn,
    },
};

pub const CANCELLED_NOTICE: &str = "Request cancelled.";

fn failure_notice(subject: &str) -> String {
    format!(
        "Sorry, I couldn't answer that. It may be outside the {} curriculum. Please try again.",
        subject
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPhase {
    Idle,
    Composing,
    Awaiting,
}

/// Drives the turn-taking conversation: owns the transcript, the input
/// buffer, the single in-flight ask, and the speech capture adapter.
///
/// The transcript only grows. Every settled ask appends exactly one
/// assistant turn; stale results for cancelled calls are dropped before
/// they reach it.
pub struct SessionController {
    transcript: Vec<Turn>,
    pub input: String,
    lifecycle: RequestLifecycle,
    capture: CaptureManager,
}

impl SessionController {
    pub fn new(speech_backend: Box<dyn SpeechBackend>) -> Self {
        Self {
            transcript: Vec::new(),
            input: String::new(),
            lifecycle: RequestLifecycle::new(),
            capture: CaptureManager::new(speech_backend),
        }
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn phase(&self) -> ChatPhase {
        if self.lifecycle.is_pending() {
            ChatPhase::Awaiting
        } else if !self.input.trim().is_empty() {
            ChatPhase::Composing
        } else {
            ChatPhase::Idle
        }
    }

    pub fn is_awaiting(&self) -> bool {
        self.lifecycle.is_pending()
    }

    /// Submits the composed input against the selected context. Missing
    /// grade/subject, blank input, or an ask already on the wire are
    /// local no-ops. On success the user turn is appended, the buffer is
    /// cleared and the accepted request is returned for the transport.
    pub fn submit(&mut self, context: Option<StudyContext>) -> Option<OutboundAsk> {
        let context = context?;

        let pending = match self.lifecycle.submit(&self.input, context) {
            Ok(pending) => pending,
            Err(_) => return None,
        };

        let outbound = OutboundAsk::from_pending(pending);
        self.transcript.push(Turn::user(outbound.question.clone()));
        self.input.clear();

        Some(outbound)
    }

    /// User-initiated cancel of the in-flight ask. Settles it as
    /// `Cancelled` and returns the controller to idle at once; whatever
    /// the transport later produces for this call is stale.
    pub fn cancel(&mut self) {
        let id = match self.lifecycle.pending() {
            Some(pending) => pending.handle.id(),
            None => return,
        };

        if let Some(pending) = self.lifecycle.cancel(id) {
            self.apply_settlement(&pending.context.subject, Settlement::Cancelled);
        }
    }

    /// Applies a result coming back from the transport. Results whose id
    /// no longer matches the pending ask are discarded.
    pub fn handle_answer(&mut self, id: RequestId, result: Result<String, String>) {
        let pending = match self.lifecycle.settle(id) {
            Some(pending) => pending,
            None => {
                println!("[session] discarding stale answer for request #{}", id);
                return;
            }
        };

        let settlement = match result {
            Ok(text) => Settlement::Success(text),
            Err(reason) => Settlement::Failure(reason),
        };
        self.apply_settlement(&pending.context.subject, settlement);
    }

    /// Exactly one assistant turn per settled ask, whichever way it went.
    fn apply_settlement(&mut self, subject: &str, settlement: Settlement) {
        let turn = match settlement {
            Settlement::Success(text) => Turn::assistant(text),
            Settlement::Cancelled => Turn::assistant(CANCELLED_NOTICE),
            Settlement::Failure(reason) => {
                eprintln!("[session] ask failed: {}", reason);
                Turn::assistant(failure_notice(subject))
            }
        };
        self.transcript.push(turn);
    }

    /// Speech capture is disallowed while an ask is in flight. A backend
    /// that refuses to start is logged and otherwise silent.
    pub fn start_capture(&mut self) {
        if self.is_awaiting() {
            return;
        }

        if let Err(e) = self.capture.start() {
            eprintln!("[session] speech capture failed to start: {}", e);
        }
    }

    pub fn stop_capture(&mut self) {
        self.capture.stop();
    }

    pub fn is_listening(&self) -> bool {
        self.capture.is_listening()
    }

    /// Drains capture events. A final transcript replaces the input
    /// buffer; a capture error leaves the buffer untouched and the
    /// adapter falls back to idle on its own.
    pub fn poll_capture(&mut self) {
        for event in self.capture.poll() {
            match event {
                CaptureEvent::Transcript(text) => self.input = text,
                CaptureEvent::Error(reason) => {
                    eprintln!("[session] speech capture error: {}", reason);
                }
                CaptureEvent::Ended => {}
            }
        }
    }
}
