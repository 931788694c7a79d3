use vantage_geometry::{Point, Rect};
use vantage_kinematics::*;

fn main() {
    let gravity = -3.711;
    let landing_zone = Rect::new(4000.0, 5500.0, 0.0, 150.0);
    let mut position = Point::new(2500.0, 2700.0);
    let mut vertical_speed = 0.0;
    let dt = 1.0;
    let num_steps = 40;

    println!("Initializing descent...");
    println!("  Start:        {}", position);
    println!("  Landing zone: {}", landing_zone);
    println!("  Gravity:      {} m/s²", gravity);
    println!("\nSimulating...");

    for i in 0..num_steps {
        // Drift right at a constant 40 m/s while falling freely.
        let drift = moving_vector(angle::RIGHT, moving_distance(40.0, 0.0, dt));
        let fall = Motion::new(angle::FORWARD, vertical_speed, gravity);

        match fall.trajectory(position + drift, dt) {
            Ok(step) => {
                println!("Step {:>2}: {} ({:.1} m/s down)", i + 1, step, -vertical_speed);
                position = step.to;
                vertical_speed += gravity * dt;
            }
            Err(e) => {
                eprintln!("Error during descent step {}: {}", i + 1, e);
                break;
            }
        }

        if position.y <= landing_zone.yt {
            println!("\nTouched down at {}.", position);
            println!("Inside landing zone: {}", landing_zone.contains_point(&position));
            return;
        }
    }

    println!("\nDescent incomplete. Final position: {}", position);
}
