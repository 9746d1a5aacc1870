#![doc(html_root_url = "https://docs.rs/automotion/0.1.0")]

//! <h1 align="center">AUTOMOTION - Frame-stepped easing and motion helpers</h1>
//! <div style="text-align:center;font-style:italic;">Automotion is a small animation library: easing curves, value interpolation and object motions stepped once per frame - written in Rust.</div>
//! <br/>
//!
//! # Features
//!
//! **Automotion** animates values and objects by advancing small tasks once per frame, with the
//! time elapsed since the previous frame.
//!
//! - A catalog of named [`Easing`] curves (quad, cube, back, expo, sine, elastic), or any custom `Fn(f32) -> f32`
//! - A generic [`interpolate`] driver for scalars, vectors and rotations, ending exactly on its target
//! - Motion helpers on a [`Movable`] object: move, scale, rotate, quadratic curves and shakes
//! - Stateless [`periodic`] values: sawtooth loops and sine waves
//! - Waiting tasks ([`wait`], [`wait_until`]) and [`Sequence`]s to chain them all
//! - A [`Scheduler`] to run many tasks together, and an optional tokio frame loop ([`runtime::play`])
//!
//! # Getting Started
//!
//! - Add the following to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! automotion = "0.1.0"
//! ```
//!
//! - Advance the tasks from your own frame loop (or use a [`Scheduler`]):
//! ```rust
//! use automotion::glam::Vec3;
//! use automotion::{wait, Easing, LocalTransform, Movable, Task, TaskExt};
//!
//! // Register an object to animate.
//! let cube = Movable::new(LocalTransform::default());
//!
//! // Move it, wait a bit, then shake it.
//! let mut animation = cube
//!     .move_to_with(Vec3::new(0.0, 2.0, 0.0), 0.5, Easing::BackOut)
//!     .then(wait(0.25))
//!     .then(cube.shake_uniform(0.1, 0.3));
//!
//! // Your frame loop: advance the animation with the frame delta.
//! while !animation.advance(1.0 / 60.0).is_done() {}
//!
//! assert_eq!(cube.get_position(), Vec3::new(0.0, 2.0, 0.0));
//! ```
//!
//! # Feature flags
//!
//! - **serde** -- Enables serialize/deserialize capabilities for easings, transforms and clocks.

pub mod blend;
pub mod clock;
pub mod easing;
pub mod errors;
pub mod interpolation;
pub mod motion;
pub mod periodic;
pub mod runtime;
pub mod scheduler;
pub mod task;
pub mod transform;
pub mod utils;
pub mod wait;

pub use glam;

pub use crate::blend::Blend;
pub use crate::clock::{Clock, FrameClock};
pub use crate::easing::{Easer, Easing};
pub use crate::errors::Error;
pub use crate::interpolation::{interpolate, Interpolation};
pub use crate::motion::{Curve, Shake, Tween};
pub use crate::scheduler::{Scheduler, TaskId};
pub use crate::task::{Sequence, Task, TaskExt, TaskState};
pub use crate::transform::{LocalTransform, Movable, Transform};
pub use crate::wait::{wait, wait_until, Wait, WaitUntil};
