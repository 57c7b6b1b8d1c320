use std::{
    sync::{
        atomic::Ordering,
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::types::{
    OutboundAsk,
    OutboundGenerate,
    TaskResult,
};
use crate::api;

/// Runs network calls on worker threads and funnels their results back to
/// the GUI thread through a channel. One instance is shared by both
/// controllers; `poll_results` is drained once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    /// Sends one question to the backend. If the request is cancelled
    /// before the transport returns, the result is dropped here and never
    /// reaches the channel.
    pub fn ask(&self, base_url: String, request: OutboundAsk) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                api::ask(&base_url, &request.question, &request.context)
                    .await
                    .map_err(|e| e.to_string())
            });

            if request.cancel.load(Ordering::Relaxed) {
                println!("[tasks] dropping result of cancelled ask #{}", request.id);
                return;
            }

            let _ = sender.send(TaskResult::Answer { id: request.id, result });
        });
    }

    /// Requests a fresh flashcard deck for the given context.
    pub fn generate_flashcards(&self, base_url: String, request: OutboundGenerate) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                api::generate_flashcards(&base_url, &request.context)
                    .await
                    .map_err(|e| e.to_string())
            });

            if request.cancel.load(Ordering::Relaxed) {
                println!("[tasks] dropping result of superseded generation #{}", request.id);
                return;
            }

            let _ = sender.send(TaskResult::Flashcards { id: request.id, result });
        });
    }

    pub fn check_backend(&self, base_url: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let reachable = runtime.block_on(async { api::check_reachable(&base_url).await });

            let _ = sender.send(TaskResult::BackendStatus(reachable));
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
