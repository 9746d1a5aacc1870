use std::f32::consts::PI;

use automotion::glam::{Quat, Vec3};
use automotion::{wait, wait_until, Clock, Easing, LocalTransform, Movable, Scheduler, TaskExt};

fn main() {
    env_logger::init();

    let cube = Movable::new(LocalTransform::default());
    let mut scheduler = Scheduler::default();

    // Jump up, turn around, wait a bit and land back along a curve.
    let jump = cube
        .move_to_with(Vec3::new(0.0, 2.0, 0.0), 0.4, Easing::QuadOut)
        .then(cube.rotate_to_with(Quat::from_rotation_y(PI), 0.5, Easing::BackOut))
        .then(wait(0.25))
        .then(cube.curve_to_with(
            Vec3::new(2.0, 3.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
            0.6,
            Easing::from_name("cube_in_out"),
        ));
    let jump_id = scheduler.spawn(jump);

    // Meanwhile, pulse the cube scale once it is high enough.
    let watched = cube.clone();
    let pulse = wait_until(move || watched.get_position().y > 1.5)
        .then(cube.scale_to_with(Vec3::splat(1.5), 0.2, Easing::ElasticOut))
        .then(cube.scale_from(Vec3::splat(1.5), 0.2));
    scheduler.spawn(pulse);

    // The host frame loop: 30 frames per second.
    let dt = 1.0 / 30.0;
    while scheduler.tick(dt) > 0 {
        println!(
            "t={:.2}s jumping={} {}",
            scheduler.clock().time(),
            scheduler.is_running(jump_id),
            cube.read()
        );
    }
}
