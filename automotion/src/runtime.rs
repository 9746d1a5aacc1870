//! Defines the tokio frame loop driving a shared [`Scheduler`].

use std::sync::Arc;
use std::time::Duration;

use log::{debug, trace};
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::errors::{Error, InvalidFrameRate, RuntimeError};
use crate::scheduler::Scheduler;

/// The default frame rate of the frame loop.
pub const DEFAULT_FPS: u16 = 60;

/// Represents a scheduler shared between the frame loop and the code spawning tasks.
pub type SharedScheduler = Arc<Mutex<Scheduler>>;

/// Represents the handler to a running frame loop.
pub type TaskHandler = JoinHandle<Result<(), Error>>;

/// Runs the frame loop: ticks the scheduler `fps` times per second with the measured frame delta.
///
/// The loop ends once the scheduler holds no more task. Aborting the returned handler stops the
/// loop (live tasks are left where they are).
///
/// # Parameters
/// * `scheduler`: the scheduler to tick.
/// * `fps`: the frame rate (see [`DEFAULT_FPS`]).
///
/// # Errors
/// * `InvalidFrameRate`: if `fps` is 0.
/// * `RuntimeError`: if not called from within a tokio runtime.
///
/// # Example
/// ```
/// use std::sync::Arc;
///
/// use automotion::glam::Vec3;
/// use automotion::runtime::{self, DEFAULT_FPS};
/// use automotion::{LocalTransform, Movable, Scheduler};
/// use parking_lot::Mutex;
///
/// #[tokio::main]
/// async fn main() {
///     let cube = Movable::new(LocalTransform::default());
///     let scheduler = Arc::new(Mutex::new(Scheduler::default()));
///     scheduler.lock().spawn(cube.move_to(Vec3::ONE, 0.1));
///
///     let handler = runtime::play(scheduler, DEFAULT_FPS).unwrap();
///     handler.await.unwrap().unwrap();
///     assert_eq!(cube.get_position(), Vec3::ONE);
/// }
/// ```
pub fn play(scheduler: SharedScheduler, fps: u16) -> Result<TaskHandler, Error> {
    if fps == 0 {
        return Err(InvalidFrameRate { fps });
    }
    let runtime = Handle::try_current().map_err(|_| RuntimeError)?;
    let period = Duration::from_secs_f64(1.0 / f64::from(fps));

    debug!("Start frame loop at {}fps", fps);
    let handler = runtime.spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // The first tick completes immediately: it only sets the reference instant.
        let mut last = interval.tick().await;
        loop {
            let now = interval.tick().await;
            let dt = now.duration_since(last).as_secs_f32();
            last = now;

            let alive = scheduler.lock().tick(dt);
            trace!("Frame tick: dt={}s, {} task(s) alive", dt, alive);
            if alive == 0 {
                break;
            }
        }

        debug!("Frame loop is over: no task left");
        Ok(())
    });
    Ok(handler)
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::easing::Easing;
    use crate::task::{from_fn, TaskState};
    use crate::transform::{LocalTransform, Movable};

    use super::*;

    #[test]
    fn test_play_outside_runtime() {
        let scheduler = SharedScheduler::default();
        let result = play(scheduler, DEFAULT_FPS);
        assert!(matches!(result, Err(RuntimeError)));
    }

    #[tokio::test]
    async fn test_play_invalid_frame_rate() {
        let scheduler = SharedScheduler::default();
        let result = play(scheduler, 0);
        assert!(matches!(result, Err(InvalidFrameRate { fps: 0 })));
        assert_eq!(
            result.err().map(|error| error.to_string()),
            Some(String::from("Invalid frame rate: 0fps (must be greater than 0)"))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_runs_to_completion() {
        let cube = Movable::new(LocalTransform::default());
        let scheduler = SharedScheduler::default();
        scheduler
            .lock()
            .spawn(cube.move_to_with(Vec3::new(2.0, 4.0, 6.0), 0.5, Easing::CubeInOut));

        let handler = play(scheduler.clone(), 10).unwrap();
        handler.await.unwrap().unwrap();

        assert_eq!(cube.get_position(), Vec3::new(2.0, 4.0, 6.0));
        assert!(scheduler.lock().is_empty());
        // 5 frames of 0.1s.
        assert_eq!(scheduler.lock().clock().frames(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_measures_frame_delta() {
        let deltas = Arc::new(Mutex::new(vec![]));
        let recorded = deltas.clone();
        let scheduler = SharedScheduler::default();
        scheduler.lock().spawn(from_fn(move |dt| {
            let mut deltas = recorded.lock();
            deltas.push(dt);
            TaskState::from(deltas.len() == 3)
        }));

        play(scheduler, 4).unwrap().await.unwrap().unwrap();
        assert_eq!(*deltas.lock(), vec![0.25, 0.25, 0.25]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_abort() {
        let scheduler = SharedScheduler::default();
        let id = scheduler.lock().spawn(from_fn(|_| TaskState::Running));

        let handler = play(scheduler.clone(), DEFAULT_FPS).unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        handler.abort();
        let error: Error = handler.await.unwrap_err().into();

        assert_eq!(error.to_string(), "Unknown error: frame loop was cancelled.");
        assert!(scheduler.lock().is_running(id));
        assert!(scheduler.lock().clock().frames() > 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_empty_scheduler() {
        let scheduler = SharedScheduler::default();
        play(scheduler.clone(), DEFAULT_FPS).unwrap().await.unwrap().unwrap();
        assert_eq!(scheduler.lock().clock().frames(), 1);
    }
}
