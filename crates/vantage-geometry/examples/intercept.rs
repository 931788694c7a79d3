use vantage_geometry::{Corner, Line, Point, Rect, Side};

fn main() {
    // Two ships on converging courses, one time unit ahead.
    let hunter = Line::new(Point::new(0.0, 0.0), Point::new(600.0, 800.0));
    let prey = Line::new(Point::new(300.0, 400.0), Point::new(150.0, 200.0));
    let radius = 50.0;

    println!("Hunter trajectory: {} (length {:.1})", hunter, hunter.length());
    println!("Prey trajectory:   {} (length {:.1})", prey, prey.length());
    println!(
        "Collision within {} units before the next tick: {}",
        radius,
        hunter.is_collision(&prey, radius)
    );

    match hunter.segments_intersection(&prey) {
        Some(p) => println!("Paths cross at {}", p),
        None => println!("Paths do not cross (parallel or out of reach)"),
    }

    // Where does the hunter's path leave a patrol zone?
    let zone = Rect::new(100.0, 500.0, 100.0, 500.0);
    println!("\nPatrol zone: {}", zone);
    for side in Side::ALL {
        let edge = zone.edge(side);
        match hunter.segments_intersection(&edge) {
            Some(p) => println!("  crosses {:?} edge {} at {}", side, edge, p),
            None => println!("  misses {:?} edge {}", side, edge),
        }
    }
    println!("  top-left corner: {}", zone.vertex(Corner::TopLeft));

    // Shorten the hunter's course and turn it a quarter left and right.
    let short = hunter.segment(250.0);
    println!("\nShortened course: {}", short);
    println!("Rotated +90:      {}", short.rotate(90.0));
    println!("Rotated -90:      {}", short.rotate(-90.0));

    // Grid neighbors of the hunter's start cell on a 10-wide grid.
    let cell = Point::new(3.0, 2.0);
    println!("\nCell {} has index {}", cell, cell.index(10));
    for n in cell.neighbors_around() {
        match n.try_index(10) {
            Ok(i) => println!("  neighbor {} -> index {}", n, i),
            Err(e) => println!("  neighbor {} -> {}", n, e),
        }
    }
}
