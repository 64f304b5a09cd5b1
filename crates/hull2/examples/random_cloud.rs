//! Solve hulls for a few random clouds and print vertex counts.
//!
//! Usage:
//!   cargo run -p hull2 --example random_cloud -- disk
//!   cargo run -p hull2 --example random_cloud -- circle
//!
//! Prints (input count, hull size) per sample; the circle rim keeps every
//! point on the hull, the disk keeps only a thin boundary.

use hull2::rand::{draw_point_cloud, CloudCfg, CloudShape, ReplayToken};
use hull2::convex_hull;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "disk".to_string());
    let shape = match mode.as_str() {
        "disk" => CloudShape::Disk { radius: 1.0 },
        "circle" => CloudShape::Circle { radius: 1.0 },
        "box" => CloudShape::Box { half_extent: 1.0 },
        "clusters" => CloudShape::Clusters {
            centers: 4,
            spread: 0.25,
        },
        _ => {
            eprintln!("usage: random_cloud [disk|circle|box|clusters]");
            return;
        }
    };
    for i in 0..5 {
        let cfg = CloudCfg {
            count: 1000,
            shape,
        };
        let pts = draw_point_cloud(&cfg, ReplayToken { seed: 2025, index: i });
        let hull = convex_hull(&pts).expect("finite non-empty cloud");
        println!("{mode} sample {i}: n={}, hull={}", pts.len(), hull.len());
    }
}
