//! Defines the interpolation driver.

use std::fmt::{Debug, Formatter};

use crate::blend::Blend;
use crate::easing::Easer;
use crate::task::{Task, TaskState};
use crate::utils::{move_towards, progress};

/// Represents a value interpolated from a start value to an end value over a given duration.
///
/// On each step, the elapsed time moves forward by the frame delta (never beyond the duration) and
/// the callback receives the value blended at the eased progress. The step that reaches the duration
/// applies the end state (progress `ease(1)`) exactly and completes the interpolation.
///
/// A non-positive duration degenerates into a single application of the end value.
///
/// See [`interpolate`].
pub struct Interpolation<V, E, F> {
    /// The value to interpolate from.
    from: V,
    /// The value to interpolate to.
    to: V,
    /// The interpolation duration, in seconds.
    duration: f32,
    /// The easing function.
    ease: E,
    /// The callback receiving the interpolated value.
    on_step: F,

    // ########################################
    // # Volatile utility data.
    /// The time elapsed since the start of the interpolation (in seconds).
    elapsed: f32,
    done: bool,
}

/// Interpolates a value between `from` and `to`, using the `ease` function.
///
/// # Parameters
/// * `from`: the value to interpolate from.
/// * `to`: the value to interpolate to.
/// * `duration`: the interpolation duration, in seconds.
/// * `ease`: the easing: an [`Easing`](crate::Easing) or any `Fn(f32) -> f32`.
/// * `on_step`: the action to perform with the interpolated value, once per step.
///
/// # Example
/// ```
/// use automotion::{interpolate, Easing, Task};
///
/// let mut values = vec![];
/// let mut interpolation = interpolate(0.0, 10.0, 1.0, Easing::Linear, |v| values.push(v));
/// for _ in 0..4 {
///     interpolation.advance(0.25);
/// }
/// drop(interpolation);
/// assert_eq!(values, vec![2.5, 5.0, 7.5, 10.0]);
/// ```
pub fn interpolate<V, E, F>(from: V, to: V, duration: f32, ease: E, on_step: F) -> Interpolation<V, E, F>
where
    V: Blend,
    E: Easer,
    F: FnMut(V),
{
    Interpolation {
        from,
        to,
        duration,
        ease,
        on_step,
        elapsed: 0.0,
        done: false,
    }
}

impl<V, E, F> Interpolation<V, E, F>
where
    V: Blend,
    E: Easer,
    F: FnMut(V),
{
    /// Computes the value at the current elapsed time.
    pub fn get_value(&self) -> V {
        V::blend(self.from, self.to, self.ease.ease(self.get_progress()))
    }

    /// Returns the normalized progress (elapsed time over duration, between 0 and 1).
    pub fn get_progress(&self) -> f32 {
        progress(self.elapsed, self.duration)
    }

    /// Returns the value interpolated from.
    pub fn get_from(&self) -> V {
        self.from
    }

    /// Returns the value interpolated to.
    pub fn get_to(&self) -> V {
        self.to
    }

    /// Returns the interpolation duration (in seconds).
    pub fn get_duration(&self) -> f32 {
        self.duration
    }

    /// Returns the time elapsed since the start (in seconds).
    pub fn get_elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Indicates if the end value has been applied.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Inner helper: applies the end state and flags the interpolation as done.
    fn finish(&mut self) -> TaskState {
        self.elapsed = self.duration.max(0.0);
        (self.on_step)(V::blend(self.from, self.to, self.ease.ease(1.0)));
        self.done = true;
        TaskState::Done
    }
}

impl<V, E, F> Task for Interpolation<V, E, F>
where
    V: Blend,
    E: Easer + Send,
    F: FnMut(V) + Send,
{
    fn advance(&mut self, dt: f32) -> TaskState {
        if self.done {
            return TaskState::Done;
        }
        if self.duration <= 0.0 {
            return self.finish();
        }

        self.elapsed = move_towards(self.elapsed, self.duration, dt);
        match self.elapsed < self.duration {
            true => {
                let value = self.get_value();
                (self.on_step)(value);
                TaskState::Running
            }
            false => self.finish(),
        }
    }
}

impl<V: Debug, E, F> Debug for Interpolation<V, E, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Interpolation [from={:?}, to={:?}, elapsed={}s, duration={}s]",
            self.from, self.to, self.elapsed, self.duration
        )
    }
}
