//! One-shot timers used to hide status messages.
//!
//! Scheduled tasks are never cancelled: a timer armed for an earlier message
//! still fires after a newer message has been shown.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

/// Runs a task once after a delay.
pub trait HideTimer: Clone + 'static {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce() + 'static>);
}

/// `setTimeout`-backed timer. A no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl HideTimer for BrowserTimer {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce() + 'static>) {
        #[cfg(feature = "csr")]
        {
            gloo_timers::callback::Timeout::new(delay_ms, task).forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (delay_ms, task);
        }
    }
}

#[cfg(test)]
pub(crate) use manual::ManualClock;
