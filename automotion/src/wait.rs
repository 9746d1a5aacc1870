//! Defines the waiting tasks, meant to pause a [`Sequence`](crate::task::Sequence).

use std::fmt::{Debug, Formatter};

use crate::task::{Task, TaskState};

/// Represents a pause of a given duration.
///
/// See [`wait`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wait {
    remaining: f32,
}

/// Waits for `duration` seconds.
///
/// Each step subtracts the frame delta from the remaining time. The step bringing it to zero (or
/// below) completes the task. A non-positive duration completes on the first step.
///
/// # Example
/// ```
/// use automotion::{wait, TaskExt};
///
/// assert_eq!(wait(1.0).run_to_end(0.25, 100), Some(4));
/// ```
pub fn wait(duration: f32) -> Wait {
    Wait {
        remaining: duration,
    }
}

impl Wait {
    /// Returns the remaining time (in seconds).
    pub fn get_remaining(&self) -> f32 {
        self.remaining
    }
}

impl Task for Wait {
    fn advance(&mut self, dt: f32) -> TaskState {
        if self.remaining > 0.0 {
            self.remaining -= dt;
        }
        TaskState::from(self.remaining <= 0.0)
    }
}

// ########################################

/// Represents a pause until a condition holds.
///
/// See [`wait_until`].
pub struct WaitUntil<F> {
    predicate: F,
    done: bool,
}

/// Waits until `predicate` returns `true`.
///
/// The predicate is polled once per step, the first `true` completes the task.
pub fn wait_until<F>(predicate: F) -> WaitUntil<F>
where
    F: FnMut() -> bool + Send,
{
    WaitUntil {
        predicate,
        done: false,
    }
}

impl<F> Task for WaitUntil<F>
where
    F: FnMut() -> bool + Send,
{
    fn advance(&mut self, _: f32) -> TaskState {
        if !self.done {
            self.done = (self.predicate)();
        }
        TaskState::from(self.done)
    }
}

impl<F> Debug for WaitUntil<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "WaitUntil [done={}]", self.done)
    }
}
