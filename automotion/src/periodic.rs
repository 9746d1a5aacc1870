//! Defines stateless periodic value generators.
//!
//! These functions are pure: they derive their value from the clock time only, so they can be
//! sampled on any frame without keeping state.

use std::f32::consts::TAU;

use crate::blend::Blend;
use crate::clock::Clock;

/// Sweeps from `from` to `to` over `duration` seconds, then jumps back to `from` and repeats.
///
/// A non-positive duration always returns `from`.
///
/// # Example
/// ```
/// use automotion::{FrameClock, periodic};
///
/// let clock = FrameClock::at(2.5);
/// assert_eq!(periodic::loop_value(0.0, 10.0, 2.0, &clock), 2.5);
/// ```
pub fn loop_value<V: Blend>(from: V, to: V, duration: f32, clock: &impl Clock) -> V {
    loop_value_offset(from, to, duration, 0.0, clock)
}

/// Same as [`loop_value`], with the cycle shifted by `offset` (a fraction of the cycle).
pub fn loop_value_offset<V: Blend>(from: V, to: V, duration: f32, offset: f32, clock: &impl Clock) -> V {
    if duration <= 0.0 {
        return from;
    }
    let cycle = (clock.time() + duration * offset) / duration;
    V::blend(from, to, cycle.rem_euclid(1.0))
}

/// Oscillates smoothly between `from` and `to` with a period of `duration` seconds.
///
/// The value is `from` blended toward `to` by `0.5 + 0.5·sin(2π·time / duration)`: it starts
/// midway and reaches `to` after a quarter period.
/// A non-positive duration always returns `from`.
pub fn wave_value<V: Blend>(from: V, to: V, duration: f32, clock: &impl Clock) -> V {
    wave_value_offset(from, to, duration, 0.0, clock)
}

/// Same as [`wave_value`], with the cycle shifted by `offset` (a fraction of the cycle).
pub fn wave_value_offset<V: Blend>(from: V, to: V, duration: f32, offset: f32, clock: &impl Clock) -> V {
    if duration <= 0.0 {
        return from;
    }
    let angle = TAU * (clock.time() + duration * offset) / duration;
    V::blend(from, to, 0.5 + 0.5 * angle.sin())
}
