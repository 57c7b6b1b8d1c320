use super::handle::{
    RequestHandle,
    RequestId,
};
use crate::core::models::StudyContext;

/// The single outstanding call a controller may have on the wire.
#[derive(Debug)]
pub struct PendingRequest {
    pub query: String,
    pub context: StudyContext,
    pub handle: RequestHandle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    EmptyQuery,
    RequestInFlight,
}

/// Terminal outcome of a submitted call. Each call settles exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    Success(String),
    Cancelled,
    Failure(String),
}

/// Tracks at most one in-flight request and guarantees exactly one
/// settlement per submitted call.
///
/// `cancel` marks the manager idle immediately without waiting for the
/// worker thread to acknowledge; a result that later arrives for a
/// cancelled or superseded call no longer matches the pending id and is
/// reported as stale by `settle`.
#[derive(Debug, Default)]
pub struct RequestLifecycle {
    next_id: RequestId,
    pending: Option<PendingRequest>,
}

impl RequestLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new outbound call. Rejects when a call is already
    /// pending, or when the query trims to nothing.
    pub fn submit(
        &mut self,
        query: &str,
        context: StudyContext,
    ) -> Result<&PendingRequest, SubmitError> {
        if self.pending.is_some() {
            return Err(SubmitError::RequestInFlight);
        }

        let query = query.trim();
        if query.is_empty() {
            return Err(SubmitError::EmptyQuery);
        }

        self.next_id += 1;
        self.pending = Some(PendingRequest {
            query: query.to_string(),
            context,
            handle: RequestHandle::new(self.next_id),
        });

        Ok(self.pending.as_ref().unwrap())
    }

    /// Cancels the current call if `id` names it. Returns the cancelled
    /// request, or `None` when the id is stale or already settled (a
    /// no-op; nothing is signalled twice).
    pub fn cancel(&mut self, id: RequestId) -> Option<PendingRequest> {
        match &self.pending {
            Some(pending) if pending.handle.id() == id => {
                pending.handle.cancel();
                self.pending.take()
            }
            _ => None,
        }
    }

    /// Consumes the pending call if `id` names it. A `None` return means
    /// the settlement is stale (cancelled or superseded) and its payload
    /// must be discarded by the caller.
    pub fn settle(&mut self, id: RequestId) -> Option<PendingRequest> {
        match &self.pending {
            Some(pending) if pending.handle.id() == id => self.pending.take(),
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<&PendingRequest> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::GradeLevel;

    fn context() -> StudyContext {
        StudyContext::new(GradeLevel::Secondary, "physics")
    }

    #[test]
    fn at_most_one_request_in_flight() {
        let mut lifecycle = RequestLifecycle::new();

        assert!(lifecycle.submit("What is velocity?", context()).is_ok());
        assert_eq!(
            lifecycle.submit("What is momentum?", context()).err(),
            Some(SubmitError::RequestInFlight)
        );
    }

    #[test]
    fn whitespace_query_is_rejected_without_side_effects() {
        let mut lifecycle = RequestLifecycle::new();

        assert_eq!(lifecycle.submit("   \n\t", context()).err(), Some(SubmitError::EmptyQuery));
        assert!(!lifecycle.is_pending());
    }

    #[test]
    fn query_is_stored_trimmed() {
        let mut lifecycle = RequestLifecycle::new();

        let pending = lifecycle.submit("  What is velocity?  ", context()).unwrap();
        assert_eq!(pending.query, "What is velocity?");
    }

    #[test]
    fn settle_clears_pending_and_accepts_a_new_submit() {
        let mut lifecycle = RequestLifecycle::new();

        let id = lifecycle.submit("first", context()).unwrap().handle.id();
        assert!(lifecycle.settle(id).is_some());
        assert!(!lifecycle.is_pending());
        assert!(lifecycle.submit("second", context()).is_ok());
    }

    #[test]
    fn cancel_marks_idle_immediately_and_flags_the_token() {
        let mut lifecycle = RequestLifecycle::new();

        let pending = lifecycle.submit("first", context()).unwrap();
        let id = pending.handle.id();
        let handle = pending.handle.clone();

        let cancelled = lifecycle.cancel(id).expect("current call should cancel");
        assert_eq!(cancelled.query, "first");
        assert!(handle.is_cancelled());
        assert!(!lifecycle.is_pending());
    }

    #[test]
    fn late_result_for_a_cancelled_call_is_stale() {
        let mut lifecycle = RequestLifecycle::new();

        let id = lifecycle.submit("first", context()).unwrap().handle.id();
        lifecycle.cancel(id);

        // The worker's result arrives after the cancel.
        assert!(lifecycle.settle(id).is_none());
    }

    #[test]
    fn cancelling_a_settled_call_is_a_no_op() {
        let mut lifecycle = RequestLifecycle::new();

        let first = lifecycle.submit("first", context()).unwrap().handle.id();
        lifecycle.settle(first);

        let second = lifecycle.submit("second", context()).unwrap().handle.id();
        assert!(lifecycle.cancel(first).is_none());
        assert!(lifecycle.is_pending());
        assert_eq!(lifecycle.pending().unwrap().handle.id(), second);
    }

    #[test]
    fn settlement_for_a_superseded_call_is_stale() {
        let mut lifecycle = RequestLifecycle::new();

        let first = lifecycle.submit("first", context()).unwrap().handle.id();
        lifecycle.cancel(first);
        let second = lifecycle.submit("second", context()).unwrap().handle.id();

        assert!(lifecycle.settle(first).is_none());
        assert!(lifecycle.settle(second).is_some());
    }
}
