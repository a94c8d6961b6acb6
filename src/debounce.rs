//! Search Debouncer
//!
//! Single pending timer: scheduling cancels whatever was pending, so only
//! the last call inside the delay window fires.

use gloo_timers::callback::Timeout;

/// Something that can run a callback later
pub trait Scheduler {
    type Pending: PendingTimer;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Pending;
}

pub trait PendingTimer {
    fn cancel(self);
}

/// Browser `setTimeout` via gloo-timers
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Pending = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

impl PendingTimer for Timeout {
    fn cancel(self) {
        let _ = Timeout::cancel(self);
    }
}

pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Pending>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self { scheduler, delay_ms, pending: None }
    }

    /// Cancel the pending timer and start a new one for `callback`
    pub fn schedule(&mut self, callback: impl FnOnce() + 'static) {
        self.cancel();
        self.pending = Some(self.scheduler.schedule(self.delay_ms, Box::new(callback)));
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}
