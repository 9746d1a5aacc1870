//! Defines the blending primitive used to interpolate values.

use glam::{Quat, Vec3};

/// Trait for values the interpolation driver knows how to blend.
///
/// Implemented for scalars (`f32`, `f64`), vectors ([`Vec3`]) and rotations ([`Quat`]) only.
pub trait Blend: Copy + Send + 'static {
    /// Blends `from` toward `to` by factor `t`.
    ///
    /// - `t = 0.0` returns `from`
    /// - `t = 1.0` returns exactly `to`
    fn blend(from: Self, to: Self, t: f32) -> Self;
}

/// Scalars extrapolate when `t` leaves `[0, 1]`.
impl Blend for f32 {
    fn blend(from: Self, to: Self, t: f32) -> Self {
        from * (1.0 - t) + to * t
    }
}

impl Blend for f64 {
    fn blend(from: Self, to: Self, t: f32) -> Self {
        let t = t as f64;
        from * (1.0 - t) + to * t
    }
}

/// Vectors extrapolate when `t` leaves `[0, 1]`.
impl Blend for Vec3 {
    fn blend(from: Self, to: Self, t: f32) -> Self {
        from * (1.0 - t) + to * t
    }
}

/// Rotations use a normalized blend along the shortest path.
///
/// The factor is clamped to `[0, 1]`: overshooting easings (back, elastic) hold the rotation at
/// its bounds instead of rotating past them.
impl Blend for Quat {
    fn blend(from: Self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            return from;
        }
        if t >= 1.0 {
            return to;
        }
        from.lerp(to, t)
    }
}
