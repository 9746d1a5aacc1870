use std::sync::Arc;

use automotion::glam::Vec3;
use automotion::runtime::{self, DEFAULT_FPS};
use automotion::{LocalTransform, Movable, Scheduler, TaskExt};
use parking_lot::Mutex;

#[tokio::main]
async fn main() {
    env_logger::init();

    let camera = Movable::new(LocalTransform::from_position(Vec3::new(0.0, 1.5, -10.0)));
    let scheduler = Arc::new(Mutex::new(Scheduler::default()));

    // Shake the camera for half a second: 10cm on the horizontal axes, 5cm vertically.
    scheduler
        .lock()
        .spawn(camera.shake(Vec3::new(0.1, 0.05, 0.1), 0.5).then(camera.shake_uniform(0.02, 0.2)));

    let handler = runtime::play(scheduler.clone(), DEFAULT_FPS).unwrap();

    // Watch the camera while the frame loop runs.
    while !handler.is_finished() {
        println!("{}", camera.read());
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
    }

    handler.await.unwrap().unwrap();
    println!("Back to {}", camera.get_position());
}
