//! Bounded-concurrency admission for in-flight requests.
//!
//! A [`Throttle`] hands out at most `limit` [`ThrottleSlot`]s at a time.
//! Callers that arrive while every slot is taken wait in a FIFO queue and
//! are admitted one-in-one-out: a released slot goes straight to the head
//! of the queue, so the active count never dips and no later arrival can
//! overtake a waiter.
//!
//! ```text
//!  submit ──► active < limit? ──yes──► run
//!                  │ no
//!                  ▼
//!      reject_on_full && queue full? ──yes──► Capacity error
//!                  │ no
//!                  ▼
//!             wait in queue ◄── slot handed over on release
//! ```

use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::oneshot;
use tracing::trace;

use crate::error::{Error, ErrorKind, Result};

/// Concurrency gate shared by every request of a client.
///
/// Cloning is cheap; clones share the same slots and queue.
#[derive(Debug, Clone)]
pub struct Throttle {
    inner: Arc<ThrottleInner>,
}

#[derive(Debug)]
struct ThrottleInner {
    /// `None` disables the bound.
    limit: Option<usize>,
    /// `None` means the queue is unbounded.
    max_queue_length: Option<usize>,
    reject_on_full: bool,
    state: Mutex<ThrottleState>,
}

#[derive(Debug, Default)]
struct ThrottleState {
    active: usize,
    waiters: VecDeque<oneshot::Sender<ThrottleSlot>>,
}

impl Throttle {
    /// Create a throttle.
    ///
    /// - `limit`: maximum concurrent slots, `0` for no limit.
    /// - `max_queue_length`: queue length at which `reject_on_full` starts
    ///   refusing callers, `None` for unbounded.
    /// - `reject_on_full`: fail with a capacity error instead of queueing
    ///   once the queue is full.
    pub fn new(limit: usize, max_queue_length: Option<usize>, reject_on_full: bool) -> Self {
        Self {
            inner: Arc::new(ThrottleInner {
                limit: (limit > 0).then_some(limit),
                max_queue_length,
                reject_on_full,
                state: Mutex::new(ThrottleState::default()),
            }),
        }
    }

    /// A throttle that admits everything immediately.
    pub fn unlimited() -> Self {
        Self::new(0, None, false)
    }

    /// The configured limit, `None` if unlimited.
    pub fn limit(&self) -> Option<usize> {
        self.inner.limit
    }

    /// Number of slots currently held.
    pub fn active(&self) -> usize {
        self.inner.lock_state().active
    }

    /// Number of callers waiting for a slot.
    pub fn queued(&self) -> usize {
        let mut state = self.inner.lock_state();
        state.waiters.retain(|w| !w.is_closed());
        state.waiters.len()
    }

    /// Wait for a slot.
    ///
    /// The slot is released when dropped. Fails immediately with a
    /// capacity error if the overflow policy rejects.
    pub async fn acquire(&self) -> Result<ThrottleSlot> {
        let receiver = {
            let mut state = self.inner.lock_state();

            let has_room = match self.inner.limit {
                Some(limit) => state.active < limit,
                None => true,
            };
            if has_room {
                state.active += 1;
                return Ok(ThrottleSlot::new(Arc::clone(&self.inner)));
            }

            // Cancelled callers leave closed senders behind; they must not
            // count toward the queue length.
            state.waiters.retain(|w| !w.is_closed());

            let queue_full = self
                .inner
                .max_queue_length
                .is_some_and(|max| state.waiters.len() >= max);
            if self.inner.reject_on_full && queue_full {
                return Err(Error::new(ErrorKind::Capacity {
                    active: state.active,
                    queued: state.waiters.len(),
                }));
            }

            let (sender, receiver) = oneshot::channel();
            state.waiters.push_back(sender);
            trace!(
                active = state.active,
                queued = state.waiters.len(),
                "Waiting for throttle slot"
            );
            receiver
        };

        receiver
            .await
            .map_err(|_| Error::new(ErrorKind::Other("throttle closed".to_string())))
    }

    /// Run `work` once a slot is available and return its result unchanged.
    ///
    /// The slot is held until `work` settles, whether it succeeds or fails.
    pub async fn submit<F, Fut, T>(&self, work: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let _slot = self.acquire().await?;
        work().await
    }
}

impl ThrottleInner {
    fn lock_state(&self) -> MutexGuard<'_, ThrottleState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn release(self: &Arc<Self>) {
        let mut state = self.lock_state();

        while let Some(waiter) = state.waiters.pop_front() {
            match waiter.send(ThrottleSlot::new(Arc::clone(self))) {
                Ok(()) => return,
                // The waiter went away; take the slot back without
                // re-entering release while the lock is held.
                Err(mut slot) => slot.disarm(),
            }
        }

        state.active = state.active.saturating_sub(1);
    }
}

/// A held unit of concurrency. Dropping it frees the slot for the next
/// queued caller.
#[derive(Debug)]
pub struct ThrottleSlot {
    throttle: Option<Arc<ThrottleInner>>,
}

impl ThrottleSlot {
    fn new(throttle: Arc<ThrottleInner>) -> Self {
        Self {
            throttle: Some(throttle),
        }
    }

    fn disarm(&mut self) {
        self.throttle = None;
    }
}

impl Drop for ThrottleSlot {
    fn drop(&mut self) {
        if let Some(throttle) = self.throttle.take() {
            throttle.release();
        }
    }
}
