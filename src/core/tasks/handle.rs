use std::sync::{
    atomic::{
        AtomicBool,
        Ordering,
    },
    Arc,
};

/// Identifies one submitted request. Ids are allocated per controller and
/// strictly increase, so a settlement carrying an old id can be recognized
/// as stale and dropped.
pub type RequestId = u64;

/// Cooperative cancellation handle for one in-flight request. The worker
/// thread checks the token before reporting its result; the transport call
/// itself may keep running after `cancel` returns.
#[derive(Debug, Clone)]
pub struct RequestHandle {
    id: RequestId,
    cancel_token: Arc<AtomicBool>,
}

impl RequestHandle {
    pub fn new(id: RequestId) -> Self {
        Self { id, cancel_token: Arc::new(AtomicBool::new(false)) }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn cancel(&self) {
        self.cancel_token.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.load(Ordering::Relaxed)
    }

    /// Shared token handed to the worker thread.
    pub fn token(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel_token)
    }
}
