//! Deferred task queue: "run after the current synchronous work".
//!
//! Work posted to a [`TickQueue`] never runs inside the call that posted it.
//! The host drives the queue by calling [`TickQueue::run_tick`] once the
//! handlers for the current notification have returned, and before the next
//! frame is presented. A tick runs exactly the tasks that were pending when it
//! started; anything posted while the tick runs waits for the next one.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::logging::targets;

/// A unique identifier for a deferred task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Get the raw u64 value of this task ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Global counter for generating unique task IDs.
static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

fn next_task_id() -> TaskId {
    TaskId(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
}

/// A boxed task closure.
pub type BoxedTask = Box<dyn FnOnce() + Send + 'static>;

/// Something that can run a task after the current synchronous work.
///
/// [`TickQueue`] is the stock implementation. Hosts with their own event loop
/// can implement this to forward tasks to it, provided the task never runs
/// before `post` returns.
pub trait Scheduler: Send + Sync {
    /// Queue `task` for the next tick.
    fn post_boxed(&self, task: BoxedTask) -> TaskId;
}

/// Internal task data.
struct TaskData {
    id: TaskId,
    task: BoxedTask,
}

/// A queue of tasks deferred by one tick.
pub struct TickQueue {
    /// Pending tasks, in posting order.
    tasks: Mutex<VecDeque<TaskData>>,
    /// Set while a tick is running.
    running: AtomicBool,
}

static_assertions::assert_impl_all!(TickQueue: Send, Sync);

/// Clears the running flag even if a task panics.
struct RunningGuard<'a>(&'a AtomicBool);

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl TickQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(VecDeque::new()),
            running: AtomicBool::new(false),
        }
    }

    /// Post a task to run on the next tick.
    ///
    /// Returns the task ID that can be used to cancel the task.
    pub fn post<F>(&self, task: F) -> TaskId
    where
        F: FnOnce() + Send + 'static,
    {
        self.post_boxed(Box::new(task))
    }

    /// Cancel a pending task.
    ///
    /// Returns `true` if the task was found and cancelled.
    pub fn cancel(&self, id: TaskId) -> bool {
        let mut tasks = self.tasks.lock();
        if let Some(pos) = tasks.iter().position(|t| t.id == id) {
            tasks.remove(pos);
            true
        } else {
            false
        }
    }

    /// Check if there are any pending tasks.
    pub fn has_pending(&self) -> bool {
        !self.tasks.lock().is_empty()
    }

    /// Get the number of pending tasks.
    pub fn pending_count(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Whether a tick is currently running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Run one tick: every task that was pending when this call started.
    ///
    /// Returns the number of tasks run. Calling this from inside a task fails
    /// with [`Error::TickReentered`].
    #[tracing::instrument(name = "inline_toolbar::tick", skip_all, target = "inline_toolbar_core::task", level = "trace")]
    pub fn run_tick(&self) -> Result<usize> {
        if self.running.swap(true, Ordering::AcqRel) {
            return Err(Error::TickReentered);
        }
        let _guard = RunningGuard(&self.running);

        let batch = std::mem::take(&mut *self.tasks.lock());
        let count = batch.len();
        for task_data in batch {
            (task_data.task)();
        }

        tracing::trace!(target: targets::TASK, count, "tick processed");
        Ok(count)
    }

    /// Run ticks until the queue is empty or `max_ticks` ticks have run.
    ///
    /// Returns the total number of tasks run.
    pub fn run_until_idle(&self, max_ticks: usize) -> Result<usize> {
        let mut total = 0;
        for _ in 0..max_ticks {
            if !self.has_pending() {
                break;
            }
            total += self.run_tick()?;
        }
        Ok(total)
    }
}

impl Scheduler for TickQueue {
    fn post_boxed(&self, task: BoxedTask) -> TaskId {
        let id = next_task_id();
        self.tasks.lock().push_back(TaskData { id, task });
        id
    }
}

impl Default for TickQueue {
    fn default() -> Self {
        Self::new()
    }
}
