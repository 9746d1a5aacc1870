//! Defines the motion helpers: interpolations bound to a [`Movable`] object property.
//!
//! - `*_to` helpers move a property from its current value to a target.
//! - `*_from` helpers move a property from a target back to its current value.
//!
//! Interpolated motions (move, scale, rotate) capture the current value once, when the motion is
//! created. Curves and shakes capture the current position on their first step instead, so they
//! pick up where a previous motion of a [`Sequence`](crate::Sequence) left the object.
//! Helpers without the `_with` suffix use [`Easing::Linear`].

use std::fmt::{Debug, Formatter};

use glam::{Quat, Vec3};
use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::blend::Blend;
use crate::easing::{Easer, Easing};
use crate::interpolation::{interpolate, Interpolation};
use crate::task::{Task, TaskState};
use crate::transform::{Movable, Transform};
use crate::utils::{move_towards, progress};

/// The callback writing an interpolated value into an object property.
pub type Setter<V> = Box<dyn FnMut(V) + Send>;

/// An interpolation bound to an object property.
pub type Tween<V, E = Easing> = Interpolation<V, E, Setter<V>>;

impl<T: Transform + 'static> Movable<T> {
    /// Moves the object from its current position to `target` in `duration` seconds.
    pub fn move_to(&self, target: Vec3, duration: f32) -> Tween<Vec3> {
        self.move_to_with(target, duration, Easing::Linear)
    }

    /// Moves the object from its current position to `target` in `duration` seconds, using `ease`.
    ///
    /// # Example
    /// ```
    /// use automotion::{Easing, LocalTransform, Movable, TaskExt};
    /// use glam::Vec3;
    ///
    /// let cube = Movable::new(LocalTransform::default());
    /// let motion = cube.move_to_with(Vec3::X * 10.0, 1.0, Easing::QuadOut);
    /// motion.run_to_end(1.0 / 60.0, 1000);
    /// assert_eq!(cube.get_position(), Vec3::X * 10.0);
    /// ```
    pub fn move_to_with<E: Easer + Send>(&self, target: Vec3, duration: f32, ease: E) -> Tween<Vec3, E> {
        tween(self.get_position(), target, duration, ease, self.position_setter())
    }

    /// Moves the object from `target` to its current position in `duration` seconds.
    pub fn move_from(&self, target: Vec3, duration: f32) -> Tween<Vec3> {
        self.move_from_with(target, duration, Easing::Linear)
    }

    /// Moves the object from `target` to its current position in `duration` seconds, using `ease`.
    pub fn move_from_with<E: Easer + Send>(&self, target: Vec3, duration: f32, ease: E) -> Tween<Vec3, E> {
        tween(target, self.get_position(), duration, ease, self.position_setter())
    }

    /// Scales the object from its current scale to `target` in `duration` seconds.
    pub fn scale_to(&self, target: Vec3, duration: f32) -> Tween<Vec3> {
        self.scale_to_with(target, duration, Easing::Linear)
    }

    /// Scales the object from its current scale to `target` in `duration` seconds, using `ease`.
    pub fn scale_to_with<E: Easer + Send>(&self, target: Vec3, duration: f32, ease: E) -> Tween<Vec3, E> {
        tween(self.get_scale(), target, duration, ease, self.scale_setter())
    }

    /// Scales the object from `target` to its current scale in `duration` seconds.
    pub fn scale_from(&self, target: Vec3, duration: f32) -> Tween<Vec3> {
        self.scale_from_with(target, duration, Easing::Linear)
    }

    /// Scales the object from `target` to its current scale in `duration` seconds, using `ease`.
    pub fn scale_from_with<E: Easer + Send>(&self, target: Vec3, duration: f32, ease: E) -> Tween<Vec3, E> {
        tween(target, self.get_scale(), duration, ease, self.scale_setter())
    }

    /// Rotates the object from its current rotation to `target` in `duration` seconds.
    pub fn rotate_to(&self, target: Quat, duration: f32) -> Tween<Quat> {
        self.rotate_to_with(target, duration, Easing::Linear)
    }

    /// Rotates the object from its current rotation to `target` in `duration` seconds, using `ease`.
    ///
    /// Eased progress outside `[0, 1]` (back, elastic) is clamped: see [`Blend`].
    pub fn rotate_to_with<E: Easer + Send>(&self, target: Quat, duration: f32, ease: E) -> Tween<Quat, E> {
        tween(self.get_rotation(), target, duration, ease, self.rotation_setter())
    }

    /// Rotates the object from `target` to its current rotation in `duration` seconds.
    pub fn rotate_from(&self, target: Quat, duration: f32) -> Tween<Quat> {
        self.rotate_from_with(target, duration, Easing::Linear)
    }

    /// Rotates the object from `target` to its current rotation in `duration` seconds, using `ease`.
    pub fn rotate_from_with<E: Easer + Send>(&self, target: Quat, duration: f32, ease: E) -> Tween<Quat, E> {
        tween(target, self.get_rotation(), duration, ease, self.rotation_setter())
    }

    /// Moves the object along a quadratic Bézier curve from its current position to `target`,
    /// bending toward `control`.
    ///
    /// The start point is the object position on the first step.
    pub fn curve_to(&self, control: Vec3, target: Vec3, duration: f32) -> Curve<T> {
        self.curve_to_with(control, target, duration, Easing::Linear)
    }

    /// Same as [`Self::curve_to`], using `ease`.
    pub fn curve_to_with<E: Easer + Send>(&self, control: Vec3, target: Vec3, duration: f32, ease: E) -> Curve<T, E> {
        Curve {
            movable: self.clone(),
            start: None,
            control,
            target,
            duration,
            ease,
            elapsed: 0.0,
            done: false,
        }
    }

    /// Teleports the object to `start`, then moves it along a quadratic Bézier curve back to its
    /// original position, bending toward `control`.
    ///
    /// Note that the teleport happens immediately, when the motion is created: the curve then
    /// starts from `start` unless the object is moved before its first step.
    pub fn curve_from(&self, control: Vec3, start: Vec3, duration: f32) -> Curve<T> {
        self.curve_from_with(control, start, duration, Easing::Linear)
    }

    /// Same as [`Self::curve_from`], using `ease`.
    pub fn curve_from_with<E: Easer + Send>(&self, control: Vec3, start: Vec3, duration: f32, ease: E) -> Curve<T, E> {
        let target = self.get_position();
        self.set_position(start);
        self.curve_to_with(control, target, duration, ease)
    }

    /// Shakes the object around its position for `duration` seconds.
    ///
    /// The position is captured on the first step. On each step, each axis is offset by a random
    /// value within `[-amount, amount]` (for that axis). Once done, the object is restored exactly
    /// to the captured position.
    pub fn shake(&self, amount: Vec3, duration: f32) -> Shake<T> {
        self.shake_with_rng(amount, duration, StdRng::from_os_rng())
    }

    /// Same as [`Self::shake`] with the same amount on the three axes.
    pub fn shake_uniform(&self, amount: f32, duration: f32) -> Shake<T> {
        self.shake(Vec3::splat(amount), duration)
    }

    /// Same as [`Self::shake`], drawing the offsets from the given random source.
    pub fn shake_with_rng<R: Rng + Send>(&self, amount: Vec3, duration: f32, rng: R) -> Shake<T, R> {
        trace!("Shake {:?} for {}s", amount, duration);
        Shake {
            movable: self.clone(),
            start: None,
            amount: amount.abs(),
            remaining: duration,
            rng,
            done: false,
        }
    }

    // ########################################
    // Setters

    fn position_setter(&self) -> Setter<Vec3> {
        let movable = self.clone();
        Box::new(move |position| movable.set_position(position))
    }

    fn scale_setter(&self) -> Setter<Vec3> {
        let movable = self.clone();
        Box::new(move |scale| movable.set_scale(scale))
    }

    fn rotation_setter(&self) -> Setter<Quat> {
        let movable = self.clone();
        Box::new(move |rotation| movable.set_rotation(rotation))
    }
}

/// Inner helper: an interpolation bound to a property setter.
fn tween<V: Blend, E: Easer>(from: V, to: V, duration: f32, ease: E, setter: Setter<V>) -> Tween<V, E> {
    interpolate(from, to, duration, ease, setter)
}

// ########################################

/// Represents a motion along a quadratic Bézier curve.
///
/// See [`Movable::curve_to`] and [`Movable::curve_from`].
pub struct Curve<T, E = Easing> {
    movable: Movable<T>,
    control: Vec3,
    target: Vec3,
    duration: f32,
    ease: E,

    // ########################################
    // # Volatile utility data.
    /// The object position on the first step.
    start: Option<Vec3>,
    elapsed: f32,
    done: bool,
}

impl<T: Transform, E> Curve<T, E> {
    /// Computes the point of the curve at (eased) progress `t`.
    ///
    /// Before the first step, the curve starts from the current object position.
    pub fn point(&self, t: f32) -> Vec3 {
        let start = self.start.unwrap_or_else(|| self.movable.get_position());
        let inverse = 1.0 - t;
        start * inverse * inverse + self.control * 2.0 * inverse * t + self.target * t * t
    }

    /// Returns the curve start point, known once the curve received its first step.
    pub fn get_start(&self) -> Option<Vec3> {
        self.start
    }

    /// Returns the curve control point.
    pub fn get_control(&self) -> Vec3 {
        self.control
    }

    /// Returns the curve end point.
    pub fn get_target(&self) -> Vec3 {
        self.target
    }
}

impl<T, E> Task for Curve<T, E>
where
    T: Transform + 'static,
    E: Easer + Send,
{
    fn advance(&mut self, dt: f32) -> TaskState {
        if self.done {
            return TaskState::Done;
        }
        if self.start.is_none() {
            self.start = Some(self.movable.get_position());
        }
        if self.duration > 0.0 {
            self.elapsed = move_towards(self.elapsed, self.duration, dt);
            if self.elapsed < self.duration {
                let t = self.ease.ease(progress(self.elapsed, self.duration));
                let position = self.point(t);
                self.movable.set_position(position);
                return TaskState::Running;
            }
        }

        self.movable.set_position(self.target);
        self.done = true;
        TaskState::Done
    }
}

impl<T, E> Debug for Curve<T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Curve [start={}, control={}, target={}, elapsed={}s, duration={}s]",
            display_start(self.start),
            self.control,
            self.target,
            self.elapsed,
            self.duration
        )
    }
}

// ########################################

/// Represents a random shake around a position.
///
/// See [`Movable::shake`].
pub struct Shake<T, R = StdRng> {
    movable: Movable<T>,
    amount: Vec3,
    rng: R,

    // ########################################
    // # Volatile utility data.
    /// The object position on the first step.
    start: Option<Vec3>,
    remaining: f32,
    done: bool,
}

impl<T, R: Rng> Shake<T, R> {
    /// Returns the position the object is restored to once done, known once the shake received
    /// its first step.
    pub fn get_start(&self) -> Option<Vec3> {
        self.start
    }

    /// Returns the maximum offset per axis.
    pub fn get_amount(&self) -> Vec3 {
        self.amount
    }

    /// Returns the remaining shake time (in seconds).
    pub fn get_remaining(&self) -> f32 {
        self.remaining
    }

    /// Inner helper: draws a random offset within the amount.
    fn random_offset(&mut self) -> Vec3 {
        let amount = self.amount;
        Vec3::new(
            self.rng.random_range(-amount.x..=amount.x),
            self.rng.random_range(-amount.y..=amount.y),
            self.rng.random_range(-amount.z..=amount.z),
        )
    }
}

impl<T, R> Task for Shake<T, R>
where
    T: Transform + 'static,
    R: Rng + Send,
{
    fn advance(&mut self, dt: f32) -> TaskState {
        if self.done {
            return TaskState::Done;
        }
        let start = match self.start {
            Some(start) => start,
            None => {
                let start = self.movable.get_position();
                self.start = Some(start);
                start
            }
        };

        self.remaining -= dt;
        if self.remaining > 0.0 {
            let offset = self.random_offset();
            self.movable.set_position(start + offset);
            return TaskState::Running;
        }

        self.movable.set_position(start);
        self.done = true;
        TaskState::Done
    }
}

impl<T, R> Debug for Shake<T, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Shake [start={}, amount={}, remaining={}s]",
            display_start(self.start),
            self.amount,
            self.remaining
        )
    }
}

/// Inner helper: displays a start position not captured yet as `?`.
fn display_start(start: Option<Vec3>) -> String {
    match start {
        Some(start) => start.to_string(),
        None => String::from("?"),
    }
}
