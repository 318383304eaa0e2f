//! # Deferred work
//!
//! [`Scheduler`] is the seam between the catalog logic and whatever runs
//! timers: the UI crate schedules on the Dioxus runtime, tests use
//! [`ManualScheduler`] and move its clock by hand.
//!
//! [`Debouncer`] holds at most one pending task. Every call cancels the
//! previous task before scheduling the new one, so only the most recent call
//! fires, and only once the quiet window has passed without another call.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

/// Boxed callback run when a scheduled task fires.
pub type Task = Box<dyn FnOnce()>;

/// Runs a callback after a delay, with cancellation by handle.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;

    /// Cancelling a handle that already fired is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// Trailing-edge debounce on top of a [`Scheduler`].
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Restart the quiet window with `task` as the callback.
    pub fn call(&mut self, task: impl FnOnce() + 'static) {
        self.cancel();
        self.pending = Some(self.scheduler.schedule(self.delay, Box::new(task)));
    }

    /// Drop the pending callback, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}

/// Handle returned by [`ManualScheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

#[derive(Default)]
struct ManualQueue {
    now: Duration,
    next_id: u64,
    // keyed by (due time, id) so ties fire in scheduling order
    tasks: BTreeMap<(Duration, u64), Task>,
}

/// Virtual-clock scheduler. Nothing fires until [`advance`](Self::advance).
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<ManualQueue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().tasks.len()
    }

    /// Move the clock forward, running every task that comes due, in order.
    /// Tasks scheduled by a running task fire too if they fall inside the step.
    pub fn advance(&self, by: Duration) {
        let target = self.queue.borrow().now + by;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let due = queue
                    .tasks
                    .first_key_value()
                    .map(|(key, _)| *key)
                    .filter(|(at, _)| *at <= target);
                match due {
                    Some(key) => {
                        queue.now = key.0;
                        queue.tasks.remove(&key)
                    }
                    None => None,
                }
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.queue.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = TaskId;

    fn schedule(&self, delay: Duration, task: Task) -> TaskId {
        let mut queue = self.queue.borrow_mut();
        let id = queue.next_id;
        queue.next_id += 1;
        let due = queue.now + delay;
        queue.tasks.insert((due, id), task);
        TaskId(id)
    }

    fn cancel(&self, handle: TaskId) {
        self.queue
            .borrow_mut()
            .tasks
            .retain(|(_, id), _| *id != handle.0);
    }
}
