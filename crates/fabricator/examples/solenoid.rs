//! Fabricates three trials of solenoid measurements from a handful of
//! observations.
//!
//! Run with `RUST_LOG=debug` to see the fitted line.

use fabricator::{Config, Fill, Point, PointSet};

fn main() {
    env_logger::init();

    let observed: PointSet = [
        (0.58, 0.67),
        (1.0, 1.68),
        (1.6, 3.69),
        (2.12, 6.03),
        (2.55, 8.71),
        (2.7, 9.38),
    ]
    .into_iter()
    .map(Point::from)
    .collect();

    let mut fab = observed.fabricate();
    fab.configure(&Config::new(0.1, 0.0, 0.0).expect("known-good config"));

    let template: PointSet = [0.7, 1.1, 1.4, 1.8, 2.2, 2.5]
        .into_iter()
        .map(|x| Point::new(x, 0.0))
        .collect();

    for (i, trial) in fab.trials(Fill::YFromX, &template, 3).iter().enumerate() {
        println!("-- trial {i} --");
        for point in trial {
            println!("x = {:.2}, y = {:.4}", point.x, point.y);
        }
    }
}
