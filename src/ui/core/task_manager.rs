use super::actions::Action;
use crate::currency::{FetchTicket, RateFeed};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs exchange-rate requests on the tokio runtime and reports their
/// results back to the UI as actions.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn register(&mut self, handle: JoinHandle<()>, description: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Spawn a latest-rates fetch for the ticket's base currency
    pub fn spawn_rates_fetch(&mut self, feed: Arc<dyn RateFeed>, ticket: FetchTicket) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Fetch rates for {} (#{})", ticket.base, ticket.generation);

        let handle = tokio::spawn(async move {
            let result = feed.fetch_latest(&ticket.base).await;
            // The receiver is gone once the app is shutting down
            let _ = action_sender.send(Action::RatesLoaded { ticket, result });
        });

        self.register(handle, description)
    }

    /// Spawn a history fetch for the ticket's currency pair and window
    pub fn spawn_history_fetch(&mut self, feed: Arc<dyn RateFeed>, ticket: FetchTicket) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!(
            "Fetch history {}/{} {}..{} (#{})",
            ticket.base, ticket.target, ticket.start, ticket.end, ticket.generation
        );

        let handle = tokio::spawn(async move {
            let result = feed
                .fetch_history(&ticket.base, &ticket.target, ticket.start, ticket.end)
                .await;
            let _ = action_sender.send(Action::HistoryLoaded { ticket, result });
        });

        self.register(handle, description)
    }

    /// Check for completed tasks and clean them up. Results were already
    /// delivered through the action channel; this only reports what finished.
    pub fn cleanup_finished_tasks(&mut self) -> Vec<(TaskId, String)> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        finished
            .into_iter()
            .filter_map(|task_id| {
                self.tasks
                    .remove(&task_id)
                    .map(|task| (task_id, format!("{} in {:?}", task.description, task.started_at.elapsed())))
            })
            .collect()
    }

    /// Check if any fetch is still running
    pub fn is_fetching(&self) -> bool {
        self.tasks.values().any(|task| !task.handle.is_finished())
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of tracked tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
