//! Defines the easing functions library.
//!
//! An easing function is a temporal function that takes a time between 0 and 1 (beginning / end)
//! and associates to it a progress value according to an ease curve. Some curves (back, elastic)
//! intentionally leave the `[0, 1]` range for interior times.

use std::convert::Infallible;
use std::f32::consts::PI;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::warn;

/// Represents the set of named easing functions.
///
/// See <https://easings.net> for a representation of most easing methods.
/// The curves are not all the "standard" ones: the formulas used here are documented on each
/// function of this module.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Applies no transformation (default).
    #[default]
    Linear,
    /// <https://easings.net/#easeInQuad>
    QuadIn,
    /// <https://easings.net/#easeOutQuad>
    QuadOut,
    /// <https://easings.net/#easeInOutQuad>
    QuadInOut,
    /// <https://easings.net/#easeInCubic>
    CubeIn,
    /// <https://easings.net/#easeOutCubic>
    CubeOut,
    /// <https://easings.net/#easeInOutCubic>
    CubeInOut,
    /// <https://easings.net/#easeInBack>
    BackIn,
    /// <https://easings.net/#easeOutBack>
    BackOut,
    /// <https://easings.net/#easeInOutBack>
    BackInOut,
    /// <https://easings.net/#easeInExpo>
    ExpoIn,
    /// <https://easings.net/#easeOutExpo>
    ExpoOut,
    /// Expo in-out: see [`expo_in_out`] for the exact (asymmetric) formula.
    ExpoInOut,
    /// <https://easings.net/#easeInSine>
    SineIn,
    /// <https://easings.net/#easeOutSine>
    SineOut,
    /// <https://easings.net/#easeInOutSine>
    SineInOut,
    /// <https://easings.net/#easeInElastic>
    ElasticIn,
    /// <https://easings.net/#easeOutElastic>
    ElasticOut,
    /// <https://easings.net/#easeInOutElastic>
    ElasticInOut,
}

impl Easing {
    /// All the available easing functions.
    pub const ALL: [Easing; 19] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubeIn,
        Easing::CubeOut,
        Easing::CubeInOut,
        Easing::BackIn,
        Easing::BackOut,
        Easing::BackInOut,
        Easing::ExpoIn,
        Easing::ExpoOut,
        Easing::ExpoInOut,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::ElasticIn,
        Easing::ElasticOut,
        Easing::ElasticInOut,
    ];

    /// Call the easing function.
    pub fn call(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => linear(t),
            Easing::QuadIn => quad_in(t),
            Easing::QuadOut => quad_out(t),
            Easing::QuadInOut => quad_in_out(t),
            Easing::CubeIn => cube_in(t),
            Easing::CubeOut => cube_out(t),
            Easing::CubeInOut => cube_in_out(t),
            Easing::BackIn => back_in(t),
            Easing::BackOut => back_out(t),
            Easing::BackInOut => back_in_out(t),
            Easing::ExpoIn => expo_in(t),
            Easing::ExpoOut => expo_out(t),
            Easing::ExpoInOut => expo_in_out(t),
            Easing::SineIn => sine_in(t),
            Easing::SineOut => sine_out(t),
            Easing::SineInOut => sine_in_out(t),
            Easing::ElasticIn => elastic_in(t),
            Easing::ElasticOut => elastic_out(t),
            Easing::ElasticInOut => elastic_in_out(t),
        }
    }

    /// Returns the easing function as a plain function pointer.
    pub fn as_fn(&self) -> fn(f32) -> f32 {
        match self {
            Easing::Linear => linear,
            Easing::QuadIn => quad_in,
            Easing::QuadOut => quad_out,
            Easing::QuadInOut => quad_in_out,
            Easing::CubeIn => cube_in,
            Easing::CubeOut => cube_out,
            Easing::CubeInOut => cube_in_out,
            Easing::BackIn => back_in,
            Easing::BackOut => back_out,
            Easing::BackInOut => back_in_out,
            Easing::ExpoIn => expo_in,
            Easing::ExpoOut => expo_out,
            Easing::ExpoInOut => expo_in_out,
            Easing::SineIn => sine_in,
            Easing::SineOut => sine_out,
            Easing::SineInOut => sine_in_out,
            Easing::ElasticIn => elastic_in,
            Easing::ElasticOut => elastic_out,
            Easing::ElasticInOut => elastic_in_out,
        }
    }

    /// Returns the canonical name of the easing function (ie: "QuadIn").
    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "Linear",
            Easing::QuadIn => "QuadIn",
            Easing::QuadOut => "QuadOut",
            Easing::QuadInOut => "QuadInOut",
            Easing::CubeIn => "CubeIn",
            Easing::CubeOut => "CubeOut",
            Easing::CubeInOut => "CubeInOut",
            Easing::BackIn => "BackIn",
            Easing::BackOut => "BackOut",
            Easing::BackInOut => "BackInOut",
            Easing::ExpoIn => "ExpoIn",
            Easing::ExpoOut => "ExpoOut",
            Easing::ExpoInOut => "ExpoInOut",
            Easing::SineIn => "SineIn",
            Easing::SineOut => "SineOut",
            Easing::SineInOut => "SineInOut",
            Easing::ElasticIn => "ElasticIn",
            Easing::ElasticOut => "ElasticOut",
            Easing::ElasticInOut => "ElasticInOut",
        }
    }

    /// Finds an easing function by name.
    ///
    /// The lookup ignores case as well as `_`, `-` and space separators: "QuadIn", "quad_in" and
    /// "quad-in" all resolve to [`Easing::QuadIn`].
    /// Unknown names are not an error: they resolve to [`Easing::Linear`].
    ///
    /// # Example
    /// ```
    /// use automotion::Easing;
    ///
    /// assert_eq!(Easing::from_name("sine_in_out"), Easing::SineInOut);
    /// assert_eq!(Easing::from_name("bounce"), Easing::Linear);
    /// ```
    pub fn from_name(name: &str) -> Easing {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match Easing::ALL
            .iter()
            .find(|easing| easing.name().eq_ignore_ascii_case(&normalized))
        {
            Some(easing) => *easing,
            None => {
                warn!("Unknown easing '{}': falls back to Linear", name);
                Easing::Linear
            }
        }
    }
}

impl Display for Easing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Easing {
    type Err = Infallible;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(Easing::from_name(name))
    }
}

impl From<&str> for Easing {
    fn from(name: &str) -> Self {
        Easing::from_name(name)
    }
}

// ########################################
// Easer: anything that can ease a progress value.

/// Trait for everything usable as an easing function: an [`Easing`] or any `Fn(f32) -> f32`.
pub trait Easer {
    /// Maps a normalized time to an eased progress value.
    fn ease(&self, t: f32) -> f32;
}

impl Easer for Easing {
    fn ease(&self, t: f32) -> f32 {
        self.call(t)
    }
}

impl<F: Fn(f32) -> f32> Easer for F {
    fn ease(&self, t: f32) -> f32 {
        self(t)
    }
}

// ########################################
// Curves

/// `t`
pub fn linear(t: f32) -> f32 {
    t
}

/// `t²`
pub fn quad_in(t: f32) -> f32 {
    t * t
}

/// Mirror of [`quad_in`].
pub fn quad_out(t: f32) -> f32 {
    1.0 - quad_in(1.0 - t)
}

pub fn quad_in_out(t: f32) -> f32 {
    in_out(quad_in, quad_out, t)
}

/// `t³`
pub fn cube_in(t: f32) -> f32 {
    t * t * t
}

/// Mirror of [`cube_in`].
pub fn cube_out(t: f32) -> f32 {
    1.0 - cube_in(1.0 - t)
}

pub fn cube_in_out(t: f32) -> f32 {
    in_out(cube_in, cube_out, t)
}

/// `t²·(2.70158·t − 1.70158)`: dips below 0 before accelerating to 1.
pub fn back_in(t: f32) -> f32 {
    t * t * (2.70158 * t - 1.70158)
}

/// Mirror of [`back_in`]: overshoots above 1 before settling.
pub fn back_out(t: f32) -> f32 {
    1.0 - back_in(1.0 - t)
}

pub fn back_in_out(t: f32) -> f32 {
    in_out(back_in, back_out, t)
}

/// `2^(10·(t − 1))`
///
/// Note that `expo_in(0) = 2^-10`, not exactly 0.
pub fn expo_in(t: f32) -> f32 {
    2f32.powf(10.0 * (t - 1.0))
}

/// Mirror of [`expo_in`]: `1 − expo_in(1 − t)`, like every other `*_out` curve.
///
/// Note that `expo_out(1) = 1 − 2^-10`. The `false` branch of [`expo_in_out`] is built on it.
pub fn expo_out(t: f32) -> f32 {
    1.0 - expo_in(1.0 - t)
}

/// `expo_in(2t) / 2` below 0.5, `expo_out(2t) / 2` above.
///
/// Unlike every other `*_in_out` curve, the second half is neither shifted (`2t - 1`) nor offset
/// by `+0.5`: the curve jumps down slightly at 0.5 and ends near 0.5 (`expo_in_out(1) ≈ 0.5`).
pub fn expo_in_out(t: f32) -> f32 {
    match t < 0.5 {
        true => expo_in(t * 2.0) / 2.0,
        false => expo_out(t * 2.0) / 2.0,
    }
}

/// `1 − cos(π/2·t)`
pub fn sine_in(t: f32) -> f32 {
    1.0 - (PI / 2.0 * t).cos()
}

/// `sin(π/2·t)`
pub fn sine_out(t: f32) -> f32 {
    (PI / 2.0 * t).sin()
}

/// `0.5 − cos(π·t) / 2`
pub fn sine_in_out(t: f32) -> f32 {
    0.5 - (PI * t).cos() / 2.0
}

/// Mirror of [`elastic_out`].
pub fn elastic_in(t: f32) -> f32 {
    1.0 - elastic_out(1.0 - t)
}

/// `2^(−10·t)·sin((t − 0.075)·(2π / 0.3)) + 1`
pub fn elastic_out(t: f32) -> f32 {
    2f32.powf(-10.0 * t) * ((t - 0.075) * (2.0 * PI / 0.3)).sin() + 1.0
}

pub fn elastic_in_out(t: f32) -> f32 {
    in_out(elastic_in, elastic_out, t)
}

/// Splits the curve at the midpoint: each half is independently eased and rescaled.
fn in_out(ease_in: fn(f32) -> f32, ease_out: fn(f32) -> f32, t: f32) -> f32 {
    match t <= 0.5 {
        true => ease_in(t * 2.0) / 2.0,
        false => ease_out(t * 2.0 - 1.0) / 2.0 + 0.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_easing_approx_equal(easing: Easing, input: f32, expected: f32) {
        let result = easing.call(input);
        assert!(
            (result - expected).abs() < 1e-5,
            "{}({}): expected {}, got {}",
            easing,
            input,
            expected,
            result
        );
    }

    #[test]
    fn test_linear() {
        assert_easing_approx_equal(Easing::Linear, 0.0, 0.0);
        assert_easing_approx_equal(Easing::Linear, 0.5, 0.5);
        assert_easing_approx_equal(Easing::Linear, 1.0, 1.0);
    }

    #[test]
    fn test_quad() {
        assert_easing_approx_equal(Easing::QuadIn, 0.5, 0.25);
        assert_easing_approx_equal(Easing::QuadOut, 0.5, 0.75);
        assert_easing_approx_equal(Easing::QuadInOut, 0.2, 0.08);
        assert_easing_approx_equal(Easing::QuadInOut, 0.8, 0.92);
    }

    #[test]
    fn test_cube() {
        assert_easing_approx_equal(Easing::CubeIn, 0.5, 0.125);
        assert_easing_approx_equal(Easing::CubeOut, 0.5, 0.875);
        assert_easing_approx_equal(Easing::CubeInOut, 0.2, 0.032);
        assert_easing_approx_equal(Easing::CubeInOut, 0.8, 0.968);
    }

    #[test]
    fn test_back() {
        assert_easing_approx_equal(Easing::BackIn, 0.5, -0.0876975);
        assert_easing_approx_equal(Easing::BackOut, 0.5, 1.0876975);
        assert_easing_approx_equal(Easing::BackInOut, 0.2, -0.04967584);
        assert_easing_approx_equal(Easing::BackInOut, 0.8, 1.04967584);
    }

    #[test]
    fn test_expo() {
        assert_easing_approx_equal(Easing::ExpoIn, 0.0, 0.0009765625);
        assert_easing_approx_equal(Easing::ExpoIn, 0.5, 0.03125);
        assert_easing_approx_equal(Easing::ExpoIn, 1.0, 1.0);
        assert_easing_approx_equal(Easing::ExpoOut, 0.0, 0.0);
        assert_easing_approx_equal(Easing::ExpoOut, 0.5, 0.96875);
        assert_easing_approx_equal(Easing::ExpoOut, 1.0, 0.9990234);
    }

    #[test]
    fn test_expo_in_out_keeps_unshifted_second_half() {
        assert_easing_approx_equal(Easing::ExpoInOut, 0.25, 0.015625);
        assert_easing_approx_equal(Easing::ExpoInOut, 0.75, 0.49998474);
        // Ends around 0.5 rather than 1.0.
        assert_easing_approx_equal(Easing::ExpoInOut, 1.0, 0.4999995);
        // Small downward jump at the midpoint.
        assert!(expo_in_out(0.5) < expo_in(1.0) / 2.0);
    }

    #[test]
    fn test_sine() {
        assert_easing_approx_equal(Easing::SineIn, 0.0, 0.0);
        assert_easing_approx_equal(Easing::SineIn, 0.5, 0.29289322);
        assert_easing_approx_equal(Easing::SineIn, 1.0, 1.0);
        assert_easing_approx_equal(Easing::SineOut, 0.5, 0.70710678);
        assert_easing_approx_equal(Easing::SineInOut, 0.0, 0.0);
        assert_easing_approx_equal(Easing::SineInOut, 0.5, 0.5);
        assert_easing_approx_equal(Easing::SineInOut, 1.0, 1.0);
    }

    #[test]
    fn test_elastic() {
        assert_easing_approx_equal(Easing::ElasticOut, 0.0, 0.0);
        assert_easing_approx_equal(Easing::ElasticOut, 0.5, 1.015625);
        assert_easing_approx_equal(Easing::ElasticIn, 0.5, -0.015625);
        assert_easing_approx_equal(Easing::ElasticIn, 1.0, 1.0);
        assert_easing_approx_equal(Easing::ElasticInOut, 0.5, 0.5);
        // The tail of the oscillation is still visible at the bounds (2^-10 amplitude).
        assert!((elastic_out(1.0) - 1.0).abs() < 1e-3);
        assert!(elastic_in(0.0).abs() < 1e-3);
    }

    #[test]
    fn test_bounds() {
        let exact = [
            Easing::Linear,
            Easing::QuadIn,
            Easing::QuadOut,
            Easing::QuadInOut,
            Easing::CubeIn,
            Easing::CubeOut,
            Easing::CubeInOut,
            Easing::BackIn,
            Easing::BackOut,
            Easing::BackInOut,
            Easing::SineIn,
            Easing::SineOut,
            Easing::SineInOut,
        ];
        for easing in exact {
            assert_easing_approx_equal(easing, 0.0, 0.0);
            assert_easing_approx_equal(easing, 1.0, 1.0);
        }
    }

    #[test]
    fn test_out_mirrors_in() {
        let pairs: [(fn(f32) -> f32, fn(f32) -> f32); 3] = [
            (quad_in, quad_out),
            (cube_in, cube_out),
            (back_in, back_out),
        ];
        for (ease_in, ease_out) in pairs {
            for step in 0..=20 {
                let t = step as f32 / 20.0;
                assert!((ease_out(t) - (1.0 - ease_in(1.0 - t))).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_in_out_midpoint() {
        for easing in [
            Easing::QuadInOut,
            Easing::CubeInOut,
            Easing::BackInOut,
            Easing::ElasticInOut,
        ] {
            assert_easing_approx_equal(easing, 0.5, 0.5);
        }
    }

    #[test]
    fn test_overshoot() {
        assert!(back_in(0.3) < 0.0);
        assert!(back_out(0.7) > 1.0);
        assert!(elastic_out(0.2) > 1.0);
    }

    #[test]
    fn test_as_fn_matches_call() {
        for easing in Easing::ALL {
            for step in 0..=10 {
                let t = step as f32 / 10.0;
                assert_eq!(easing.as_fn()(t), easing.call(t));
            }
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Easing::from_name("QuadIn"), Easing::QuadIn);
        assert_eq!(Easing::from_name("quad_in_out"), Easing::QuadInOut);
        assert_eq!(Easing::from_name("elastic-out"), Easing::ElasticOut);
        assert_eq!(Easing::from_name("SINE IN"), Easing::SineIn);
        assert_eq!(Easing::from_name("bounce"), Easing::Linear);
        assert_eq!(Easing::from_name(""), Easing::Linear);
        assert_eq!("CubeOut".parse::<Easing>(), Ok(Easing::CubeOut));
        assert_eq!(Easing::from("nope"), Easing::Linear);

        for easing in Easing::ALL {
            assert_eq!(Easing::from_name(&easing.to_string()), easing);
        }
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(Easing::default(), Easing::Linear);
        assert_eq!(Easing::BackInOut.to_string(), "BackInOut");
    }

    #[test]
    fn test_easer() {
        fn apply<E: Easer>(easer: E, t: f32) -> f32 {
            easer.ease(t)
        }
        assert_eq!(apply(Easing::QuadIn, 0.5), 0.25);
        assert_eq!(apply(|t: f32| 1.0 - t, 0.25), 0.75);
        assert_eq!(apply(cube_in, 0.5), 0.125);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_easing_serde() {
            let json = serde_json::to_string(&Easing::SineInOut).unwrap();
            assert_eq!(json, r#""SineInOut""#);
            let easing: Easing = serde_json::from_str(r#""BackOut""#).unwrap();
            assert_eq!(easing, Easing::BackOut);
        }
    }
}
