//! Defines the frame clock.

/// A source of frame timing.
pub trait Clock {
    /// Returns the time elapsed since the previous frame, in seconds.
    fn delta_time(&self) -> f32;
    /// Returns the total time elapsed since the clock epoch, in seconds.
    fn time(&self) -> f32;
}

/// Represents a clock advanced by the host once per frame.
///
/// # Example
/// ```
/// use automotion::{Clock, FrameClock};
///
/// let mut clock = FrameClock::default();
/// clock.tick(0.25);
/// clock.tick(0.5);
/// assert_eq!(clock.time(), 0.75);
/// assert_eq!(clock.delta_time(), 0.5);
/// assert_eq!(clock.frames(), 2);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    /// The time elapsed since the previous frame (in seconds).
    delta: f32,
    /// The time elapsed since the epoch (in seconds).
    time: f32,
    /// The number of frames since the epoch.
    frames: u64,
}

impl FrameClock {
    /// Creates a clock already at the given time (in seconds).
    pub fn at(time: f32) -> Self {
        Self {
            time,
            ..Default::default()
        }
    }

    /// Moves the clock forward by one frame.
    ///
    /// Negative deltas are treated as 0: the clock never goes backward.
    pub fn tick(&mut self, dt: f32) -> f32 {
        self.delta = dt.max(0.0);
        self.time += self.delta;
        self.frames += 1;
        self.delta
    }

    /// Returns the number of frames since the epoch.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Clock for FrameClock {
    fn delta_time(&self) -> f32 {
        self.delta
    }

    fn time(&self) -> f32 {
        self.time
    }
}
