use std::sync::{
    atomic::AtomicBool,
    Arc,
};

pub use super::{
    handle::{
        RequestHandle,
        RequestId,
    },
    lifecycle::{
        PendingRequest,
        RequestLifecycle,
        Settlement,
        SubmitError,
    },
};
use crate::core::models::{
    FlashCard,
    StudyContext,
};

/// A question accepted by a controller, ready to be handed to the
/// transport. Built from the controller's pending request so the worker
/// shares its id and cancel token.
#[derive(Debug, Clone)]
pub struct OutboundAsk {
    pub id: RequestId,
    pub cancel: Arc<AtomicBool>,
    pub question: String,
    pub context: StudyContext,
}

impl OutboundAsk {
    pub fn from_pending(pending: &PendingRequest) -> Self {
        Self {
            id: pending.handle.id(),
            cancel: pending.handle.token(),
            question: pending.query.clone(),
            context: pending.context.clone(),
        }
    }
}

/// A deck generation accepted by the review controller.
#[derive(Debug, Clone)]
pub struct OutboundGenerate {
    pub id: RequestId,
    pub cancel: Arc<AtomicBool>,
    pub context: StudyContext,
}

impl OutboundGenerate {
    pub fn from_pending(pending: &PendingRequest) -> Self {
        Self {
            id: pending.handle.id(),
            cancel: pending.handle.token(),
            context: pending.context.clone(),
        }
    }
}

/// Results drained from worker threads by the GUI loop. Each network call
/// reports at most once; the id ties the result back to the request that
/// issued it so stale results can be dropped.
#[derive(Debug, Clone)]
pub enum TaskResult {
    Answer { id: RequestId, result: Result<String, String> },
    Flashcards { id: RequestId, result: Result<Vec<FlashCard>, String> },
    BackendStatus(bool),
}
