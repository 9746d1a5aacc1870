use automotion::glam::Vec3;
use automotion::periodic::{loop_value, wave_value, wave_value_offset};
use automotion::FrameClock;

fn main() {
    let mut clock = FrameClock::default();

    // Sample two seconds at 10 frames per second.
    for _ in 0..20 {
        clock.tick(0.1);

        // A buoy bobbing up and down with a 2s period.
        let buoy = wave_value(Vec3::new(0.0, -0.2, 0.0), Vec3::new(0.0, 0.2, 0.0), 2.0, &clock);
        // Its light blinking out of phase.
        let light = wave_value_offset(0.0, 1.0, 2.0, 0.5, &clock);
        // A lighthouse beam sweeping a full turn every second.
        let beam = loop_value(0.0, 360.0, 1.0, &clock);

        println!(
            "frame {:>2}: buoy={} light={:.2} beam={:>5.1}°",
            clock.frames(),
            buoy,
            light,
            beam
        );
    }
}
