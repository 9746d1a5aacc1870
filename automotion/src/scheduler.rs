//! Defines the task scheduler.

use std::fmt::{Debug, Formatter};

use log::trace;
use slotmap::{new_key_type, SlotMap};

use crate::clock::{Clock, FrameClock};
use crate::task::Task;

new_key_type! {
    /// Identifies a task spawned on a [`Scheduler`].
    pub struct TaskId;
}

/// Represents a set of live tasks advanced together, once per frame.
///
/// # Example
/// ```
/// use automotion::{interpolate, Easing, Scheduler};
///
/// let mut scheduler = Scheduler::default();
/// let id = scheduler.spawn(interpolate(0.0, 1.0, 0.5, Easing::QuadOut, |value: f32| {
///     println!("value: {value}");
/// }));
/// assert!(scheduler.is_running(id));
///
/// while scheduler.tick(0.1) > 0 {}
/// assert!(scheduler.is_empty());
/// ```
#[derive(Default)]
pub struct Scheduler {
    tasks: SlotMap<TaskId, Box<dyn Task>>,
    clock: FrameClock,
}

impl Scheduler {
    /// Adds a task: it receives its first step on the next [`Scheduler::tick`].
    pub fn spawn<T: Task + 'static>(&mut self, task: T) -> TaskId {
        let id = self.tasks.insert(Box::new(task));
        trace!("Spawn task {:?}", id);
        id
    }

    /// Discards a task: it receives no further step (and no final value).
    ///
    /// Returns `false` if the task was already done or cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let found = self.tasks.remove(id).is_some();
        if found {
            trace!("Cancel task {:?}", id);
        }
        found
    }

    /// Indicates if the task is still alive.
    pub fn is_running(&self, id: TaskId) -> bool {
        self.tasks.contains_key(id)
    }

    /// Returns the number of live tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Indicates if no task is alive.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Discards all tasks.
    pub fn clear(&mut self) {
        trace!("Clear {} task(s)", self.tasks.len());
        self.tasks.clear();
    }

    /// Returns the scheduler clock (moved forward by each tick).
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Moves the clock forward by `dt` seconds and advances every live task once.
    ///
    /// Tasks reporting [`TaskState::Done`](crate::TaskState::Done) are removed.
    ///
    /// # Returns
    /// The number of tasks still alive.
    pub fn tick(&mut self, dt: f32) -> usize {
        let dt = self.clock.tick(dt);
        self.tasks.retain(|id, task| {
            let done = task.advance(dt).is_done();
            if done {
                trace!("Task {:?} is done", id);
            }
            !done
        });
        self.tasks.len()
    }
}

impl Debug for Scheduler {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scheduler [tasks={}, time={}s]",
            self.tasks.len(),
            self.clock.time()
        )
    }
}
