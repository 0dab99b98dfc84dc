//! Client-side sliding window rate limiting.
//!
//! Every REST client owns one [`SlidingWindow`]. Calls never fail on an
//! exhausted budget; [`SlidingWindow::acquire`] suspends until a slot frees up.

use std::collections::VecDeque;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

/// Sliding window rate limiter.
///
/// Admits at most `limit` calls in any span of `window`. Each admission is
/// recorded as the instant the call is allowed to proceed, which may lie in the
/// future for callers that are still waiting.
#[derive(Debug)]
pub struct SlidingWindow {
    limit: usize,
    window: Duration,
    admissions: Mutex<VecDeque<Instant>>,
}

impl SlidingWindow {
    /// A `limit` of zero is treated as one.
    pub fn new(limit: u32, window: Duration) -> Self {
        let limit = limit.max(1) as usize;
        Self {
            limit,
            window,
            admissions: Mutex::new(VecDeque::with_capacity(limit)),
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit as u32
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Wait until this call may proceed, then return.
    ///
    /// Cancel safe: dropping the future while it waits gives the reserved slot
    /// back to the window.
    pub async fn acquire(&self) {
        let now = Instant::now();
        let admitted_at = self.reserve_at(now);
        if admitted_at > now {
            debug!(
                wait_ms = (admitted_at - now).as_millis() as u64,
                limit = self.limit,
                window_secs = self.window.as_secs(),
                "rate limit budget exhausted, waiting"
            );
            let reservation = Reservation {
                limiter: self,
                at: admitted_at,
            };
            sleep_until(admitted_at).await;
            reservation.keep();
        }
    }

    /// Reserve the next slot as seen at `now` and return the instant it opens.
    ///
    /// The returned instant is `now` when the window has budget left, otherwise
    /// the moment the `limit`-th most recent admission leaves the window.
    pub fn reserve_at(&self, now: Instant) -> Instant {
        let mut admissions = self.admissions.lock();
        self.expire(&mut admissions, now);

        let admitted_at = if admissions.len() < self.limit {
            now
        } else {
            admissions[admissions.len() - self.limit] + self.window
        };
        admissions.push_back(admitted_at);
        admitted_at
    }

    /// How long a call made at `now` would wait, without reserving anything.
    pub fn wait_time_at(&self, now: Instant) -> Duration {
        let mut admissions = self.admissions.lock();
        self.expire(&mut admissions, now);

        if admissions.len() < self.limit {
            return Duration::ZERO;
        }
        let opens = admissions[admissions.len() - self.limit] + self.window;
        opens.saturating_duration_since(now)
    }

    /// Calls that could be admitted at `now` without waiting.
    pub fn remaining_at(&self, now: Instant) -> u32 {
        let mut admissions = self.admissions.lock();
        self.expire(&mut admissions, now);
        self.limit.saturating_sub(admissions.len()) as u32
    }

    fn release(&self, at: Instant) {
        let mut admissions = self.admissions.lock();
        if let Some(pos) = admissions.iter().rposition(|t| *t == at) {
            admissions.remove(pos);
        }
    }

    fn expire(&self, admissions: &mut VecDeque<Instant>, now: Instant) {
        while let Some(front) = admissions.front() {
            if *front + self.window <= now {
                admissions.pop_front();
            } else {
                break;
            }
        }
    }
}

/// A future admission that is released again unless the waiter got through.
struct Reservation<'a> {
    limiter: &'a SlidingWindow,
    at: Instant,
}

impl Reservation<'_> {
    fn keep(self) {
        std::mem::forget(self);
    }
}

impl Drop for Reservation<'_> {
    fn drop(&mut self) {
        debug!("rate limit wait cancelled, releasing reserved slot");
        self.limiter.release(self.at);
    }
}
