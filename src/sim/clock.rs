//! Cancellable periodic timers
//!
//! Timers carry a typed payload instead of a callback. `advance` returns the
//! payloads that fell due, ordered by due time and then by registration order,
//! and the owner dispatches them. A cancelled timer never fires again.

use serde::{Deserialize, Serialize};

/// Opaque handle returned by [`Clock::schedule`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerHandle(u32);

#[derive(Debug, Clone)]
struct Timer<T> {
    handle: TimerHandle,
    interval_ms: u64,
    next_due_ms: u64,
    payload: T,
    active: bool,
}

/// Millisecond clock owning a set of looping timers
#[derive(Debug, Clone)]
pub struct Clock<T> {
    now_ms: u64,
    /// Sub-millisecond remainder carried between `advance_secs` calls
    carry_ms: f64,
    timers: Vec<Timer<T>>,
    next_handle: u32,
}

impl<T: Copy> Default for Clock<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> Clock<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            carry_ms: 0.0,
            timers: Vec::new(),
            next_handle: 1,
        }
    }

    /// Milliseconds elapsed since the clock was created
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Register a timer firing every `interval_ms`, first firing one interval from now
    pub fn schedule(&mut self, interval_ms: u64, payload: T) -> TimerHandle {
        let interval_ms = interval_ms.max(1);
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.timers.push(Timer {
            handle,
            interval_ms,
            next_due_ms: self.now_ms + interval_ms,
            payload,
            active: true,
        });
        handle
    }

    /// Stop future firings. Returns true only for the call that actually stopped the timer.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.timers.iter_mut().find(|t| t.handle == handle) {
            Some(timer) if timer.active => {
                timer.active = false;
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle && t.active)
    }

    pub fn active_count(&self) -> usize {
        self.timers.iter().filter(|t| t.active).count()
    }

    /// Move time forward and collect every firing that fell due
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<T> {
        let target = self.now_ms + elapsed_ms;
        let mut fired: Vec<(u64, usize, T)> = Vec::new();

        for (order, timer) in self.timers.iter_mut().enumerate() {
            if !timer.active {
                continue;
            }
            while timer.next_due_ms <= target {
                fired.push((timer.next_due_ms, order, timer.payload));
                timer.next_due_ms += timer.interval_ms;
            }
        }

        self.now_ms = target;
        fired.sort_by_key(|&(due, order, _)| (due, order));
        fired.into_iter().map(|(_, _, payload)| payload).collect()
    }

    /// Advance by a frame duration in seconds, keeping fractional milliseconds
    pub fn advance_secs(&mut self, dt: f32) -> Vec<T> {
        let total = self.carry_ms + f64::from(dt.max(0.0)) * 1000.0;
        let whole = total.floor();
        self.carry_ms = total - whole;
        self.advance(whole as u64)
    }
}
