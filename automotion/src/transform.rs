//! Defines the movable objects the motion helpers act upon.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use glam::{Quat, Vec3};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Capability trait for objects exposing local transform properties.
///
/// Implement this for the host engine's own transform type to animate it with [`Movable`].
pub trait Transform: Send + Sync {
    /// Returns the local position.
    fn local_position(&self) -> Vec3;
    /// Sets the local position.
    fn set_local_position(&mut self, position: Vec3);
    /// Returns the local scale.
    fn local_scale(&self) -> Vec3;
    /// Sets the local scale.
    fn set_local_scale(&mut self, scale: Vec3);
    /// Returns the local rotation (a unit quaternion).
    fn local_rotation(&self) -> Quat;
    /// Sets the local rotation.
    fn set_local_rotation(&mut self, rotation: Quat);
}

/// Represents a plain local transform: position, scale and rotation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalTransform {
    /// The local position (default: origin).
    pub position: Vec3,
    /// The local scale (default: 1 on all axes).
    pub scale: Vec3,
    /// The local rotation (default: identity).
    pub rotation: Quat,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            rotation: Quat::IDENTITY,
        }
    }
}

impl LocalTransform {
    /// Creates a transform at the given position.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }
}

impl Transform for LocalTransform {
    fn local_position(&self) -> Vec3 {
        self.position
    }

    fn set_local_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn local_scale(&self) -> Vec3 {
        self.scale
    }

    fn set_local_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    fn local_rotation(&self) -> Quat {
        self.rotation
    }

    fn set_local_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}

impl Display for LocalTransform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LocalTransform [position={}, scale={}, rotation={}]",
            self.position, self.scale, self.rotation
        )
    }
}

// ########################################

/// Represents a shared handle to a movable object.
///
/// Cloning a `Movable` clones the handle, not the object: all clones (and all the motion tasks
/// created from them) act on the same object. The motion helpers are defined in the
/// [`motion`](crate::motion) module.
#[derive(Debug, Default)]
pub struct Movable<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for Movable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Transform> Movable<T> {
    /// Wraps the object into a shared handle.
    pub fn new(object: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(object)),
        }
    }

    /// Locks the object for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.inner.read()
    }

    /// Locks the object for writing.
    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.inner.write()
    }

    /// Returns the local position of the object.
    pub fn get_position(&self) -> Vec3 {
        self.inner.read().local_position()
    }

    /// Sets the local position of the object.
    pub fn set_position(&self, position: Vec3) {
        self.inner.write().set_local_position(position);
    }

    /// Returns the local scale of the object.
    pub fn get_scale(&self) -> Vec3 {
        self.inner.read().local_scale()
    }

    /// Sets the local scale of the object.
    pub fn set_scale(&self, scale: Vec3) {
        self.inner.write().set_local_scale(scale);
    }

    /// Returns the local rotation of the object.
    pub fn get_rotation(&self) -> Quat {
        self.inner.read().local_rotation()
    }

    /// Sets the local rotation of the object.
    pub fn set_rotation(&self, rotation: Quat) {
        self.inner.write().set_local_rotation(rotation);
    }
}

impl<T: Transform> From<T> for Movable<T> {
    fn from(object: T) -> Self {
        Movable::new(object)
    }
}
