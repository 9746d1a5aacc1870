//! Defines the frame-stepped task model.
//!
//! Every animation of this crate is a [`Task`]: an object advanced once per frame by the host (or by
//! a [`Scheduler`](crate::Scheduler)) with the time elapsed since the previous frame. A task applies
//! its value for the frame and reports whether it is still running or done.

use std::collections::VecDeque;
use std::fmt::{Debug, Formatter};

/// Lists the states a task reports after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskState {
    /// The task expects more steps.
    Running,
    /// The task is over: further steps do nothing.
    Done,
}

impl TaskState {
    /// Indicates if the task is over.
    pub fn is_done(&self) -> bool {
        matches!(self, TaskState::Done)
    }
}

impl From<bool> for TaskState {
    /// `true` means done.
    fn from(done: bool) -> Self {
        match done {
            true => TaskState::Done,
            false => TaskState::Running,
        }
    }
}

/// A cooperative task stepped once per frame.
pub trait Task: Send {
    /// Advances the task by one step.
    ///
    /// # Parameters
    /// * `dt`: the time elapsed since the previous step, in seconds.
    ///
    /// # Returns
    /// [`TaskState::Done`] once the task is finished.
    fn advance(&mut self, dt: f32) -> TaskState;
}

impl<T: Task + ?Sized> Task for Box<T> {
    fn advance(&mut self, dt: f32) -> TaskState {
        (**self).advance(dt)
    }
}

impl<T: Task + ?Sized> Task for &mut T {
    fn advance(&mut self, dt: f32) -> TaskState {
        (**self).advance(dt)
    }
}

/// Convenience conversions for tasks.
pub trait TaskExt: Task + Sized {
    /// Boxes the task.
    fn boxed(self) -> Box<dyn Task>
    where
        Self: 'static,
    {
        Box::new(self)
    }

    /// Chains another task to be run once this one is done.
    fn then<T: Task + 'static>(self, next: T) -> Sequence
    where
        Self: 'static,
    {
        Sequence::default().then(self).then(next)
    }

    /// Runs the task to completion with a constant frame delta.
    ///
    /// Returns the number of steps it took, or `None` if the task was still running after
    /// `max_steps` steps.
    fn run_to_end(mut self, dt: f32, max_steps: usize) -> Option<usize> {
        (1..=max_steps).find(|_| self.advance(dt).is_done())
    }
}

impl<T: Task> TaskExt for T {}

// ########################################

/// Wraps a closure as a task.
pub struct FromFn<F> {
    step: F,
}

/// Creates a task from a closure called with the frame delta on each step.
///
/// # Example
/// ```
/// use automotion::task::{self, TaskExt, TaskState};
///
/// let mut remaining = 3;
/// let countdown = task::from_fn(move |_| {
///     remaining -= 1;
///     TaskState::from(remaining == 0)
/// });
/// assert_eq!(countdown.run_to_end(0.016, 10), Some(3));
/// ```
pub fn from_fn<F>(step: F) -> FromFn<F>
where
    F: FnMut(f32) -> TaskState + Send,
{
    FromFn { step }
}

impl<F> Task for FromFn<F>
where
    F: FnMut(f32) -> TaskState + Send,
{
    fn advance(&mut self, dt: f32) -> TaskState {
        (self.step)(dt)
    }
}

// ########################################

/// Represents an ordered list of tasks run one after the other.
///
/// Each step advances the current task only. When it reports [`TaskState::Done`], the sequence
/// moves to the next task, which receives its first step on the following frame.
/// An empty sequence is done on its first step.
#[derive(Default)]
pub struct Sequence {
    tasks: VecDeque<Box<dyn Task>>,
}

impl Sequence {
    /// Creates a sequence from a list of tasks.
    pub fn new(tasks: Vec<Box<dyn Task>>) -> Self {
        Self {
            tasks: tasks.into(),
        }
    }

    /// Adds a new task at the end of the sequence.
    pub fn then<T: Task + 'static>(mut self, task: T) -> Self {
        self.tasks.push_back(Box::new(task));
        self
    }

    /// Returns the number of tasks left to run (including the current one).
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Indicates if no task is left to run.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Task for Sequence {
    fn advance(&mut self, dt: f32) -> TaskState {
        if let Some(current) = self.tasks.front_mut() {
            if current.advance(dt).is_done() {
                self.tasks.pop_front();
            }
        }
        TaskState::from(self.tasks.is_empty())
    }
}

impl Debug for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sequence [remaining={}]", self.tasks.len())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    /// Records in `log` the `name` of the task on each step, done after `steps` steps.
    fn recorder(name: &'static str, steps: usize, log: Arc<Mutex<Vec<&'static str>>>) -> impl Task {
        let mut count = 0;
        from_fn(move |_| {
            log.lock().push(name);
            count += 1;
            TaskState::from(count >= steps)
        })
    }

    #[test]
    fn test_task_state() {
        assert!(TaskState::Done.is_done());
        assert!(!TaskState::Running.is_done());
        assert_eq!(TaskState::from(true), TaskState::Done);
        assert_eq!(TaskState::from(false), TaskState::Running);
    }

    #[test]
    fn test_from_fn() {
        let mut total = 0.0;
        let mut task = from_fn(move |dt| {
            total += dt;
            TaskState::from(total >= 1.0)
        });
        assert_eq!(task.advance(0.5), TaskState::Running);
        assert_eq!(task.advance(0.5), TaskState::Done);
    }

    #[test]
    fn test_run_to_end() {
        let mut count = 0;
        let task = from_fn(move |_| {
            count += 1;
            TaskState::from(count == 4)
        });
        assert_eq!(task.run_to_end(0.1, 10), Some(4));

        let endless = from_fn(|_| TaskState::Running);
        assert_eq!(endless.run_to_end(0.1, 10), None);
    }

    #[test]
    fn test_sequence_runs_in_order() {
        let log = Arc::new(Mutex::new(vec![]));
        let mut sequence = Sequence::default()
            .then(recorder("a", 2, log.clone()))
            .then(recorder("b", 1, log.clone()))
            .then(recorder("c", 2, log.clone()));
        assert_eq!(sequence.len(), 3);

        let mut steps = 0;
        while !sequence.advance(0.1).is_done() {
            steps += 1;
        }
        assert_eq!(steps + 1, 5);
        assert_eq!(*log.lock(), vec!["a", "a", "b", "c", "c"]);
        assert!(sequence.is_empty());
    }

    #[test]
    fn test_sequence_from_then() {
        let log = Arc::new(Mutex::new(vec![]));
        let sequence = recorder("x", 1, log.clone()).then(recorder("y", 1, log.clone()));
        assert_eq!(sequence.run_to_end(0.1, 10), Some(2));
        assert_eq!(*log.lock(), vec!["x", "y"]);
    }

    #[test]
    fn test_empty_sequence() {
        let mut sequence = Sequence::new(vec![]);
        assert_eq!(sequence.advance(0.1), TaskState::Done);
        assert_eq!(format!("{:?}", sequence), "Sequence [remaining=0]");
    }

    #[test]
    fn test_boxed_and_borrowed_tasks() {
        let mut boxed = from_fn(|_| TaskState::Done).boxed();
        assert_eq!(boxed.advance(0.0), TaskState::Done);

        let mut count = 0;
        let mut task = from_fn(move |_| {
            count += 1;
            TaskState::from(count == 2)
        });
        fn step<T: Task>(mut task: T) -> TaskState {
            task.advance(0.0)
        }
        assert_eq!(step(&mut task), TaskState::Running);
        assert_eq!(task.advance(0.0), TaskState::Done);
    }
}
