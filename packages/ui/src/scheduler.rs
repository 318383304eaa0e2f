//! [`Scheduler`] backed by Dioxus tasks.
//!
//! Each scheduled callback is a task that sleeps and then runs. The task
//! belongs to the component that scheduled it, so unmounting the component
//! (navigating away) drops any callback that has not fired yet.

use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use store::schedule::Task as Callback;
use store::Scheduler;

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TaskScheduler;

impl Scheduler for TaskScheduler {
    type Handle = Task;

    fn schedule(&self, delay: Duration, callback: Callback) -> Task {
        spawn(async move {
            sleep(delay).await;
            callback();
        })
    }

    fn cancel(&self, handle: Task) {
        handle.cancel();
    }
}
