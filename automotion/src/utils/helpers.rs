/// Moves `current` toward `target` by at most `max_delta`, never overshooting it.
///
/// A negative `max_delta` does not move the value away from the target: it is treated as 0.
///
/// # Parameters
/// * `current`:  the value to move
/// * `target`:  the value to move toward
/// * `max_delta`:  the maximum change allowed
///
/// # Returns
/// The moved value.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let max_delta = max_delta.max(0.0);
    let distance = target - current;
    match distance.abs() <= max_delta {
        true => target,
        false => current + distance.signum() * max_delta,
    }
}

/// Returns the normalized progress of a timed step: `elapsed / duration`.
///
/// A non-positive `duration` is always complete (progress 1).
pub fn progress(elapsed: f32, duration: f32) -> f32 {
    match duration > 0.0 {
        true => elapsed / duration,
        false => 1.0,
    }
}
