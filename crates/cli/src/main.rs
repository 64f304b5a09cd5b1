use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

use hull2::rand::{draw_point_cloud, CloudCfg, CloudShape, ReplayToken};
use hull2::Vec2;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull driver: read points, solve, write the hull")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve the hull of a JSON point file ([[x, y], ...])
    Hull {
        #[arg(long)]
        input: String,
        /// Output file; prints to stdout when omitted
        #[arg(long)]
        out: Option<String>,
    },
    /// Write a reproducible random point cloud as a JSON point file
    Generate {
        #[arg(long, default_value_t = 1000)]
        count: usize,
        /// One of: disk, box, circle, clusters
        #[arg(long, default_value = "disk")]
        shape: String,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: String,
    },
}

/// Hull result document; embeds the solver version and the parameters the
/// result was produced from.
#[derive(Serialize)]
struct HullOutput {
    version: &'static str,
    input: String,
    input_count: usize,
    hull_count: usize,
    elapsed_ms: f64,
    /// Clockwise vertex sequence starting at the leftmost vertex; the edge
    /// from the last vertex back to the first closes the polygon.
    hull: Vec<[f64; 2]>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { input, out } => hull(input, out),
        Action::Generate {
            count,
            shape,
            seed,
            index,
            out,
        } => generate(count, &shape, seed, index, out),
    }
}

fn hull(input: String, out: Option<String>) -> Result<()> {
    let points = read_points(Path::new(&input))?;
    let t0 = Instant::now();
    let solved = hull2::convex_hull(&points).with_context(|| format!("solving hull of {input}"))?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;
    tracing::info!(
        input,
        n = points.len(),
        hull = solved.len(),
        elapsed_ms,
        "hull"
    );
    let doc = HullOutput {
        version: hull2::VERSION,
        input: input.clone(),
        input_count: points.len(),
        hull_count: solved.len(),
        elapsed_ms,
        hull: solved.pts.iter().map(|p| [p.x, p.y]).collect(),
    };
    let text = serde_json::to_string_pretty(&doc)?;
    match out {
        Some(path) => write_text(Path::new(&path), &text)?,
        None => println!("{text}"),
    }
    Ok(())
}

fn generate(count: usize, shape: &str, seed: u64, index: u64, out: String) -> Result<()> {
    let shape = parse_shape(shape)?;
    let pts = draw_point_cloud(&CloudCfg { count, shape }, ReplayToken { seed, index });
    tracing::info!(count = pts.len(), seed, index, out, "generate");
    let raw: Vec<[f64; 2]> = pts.iter().map(|p| [p.x, p.y]).collect();
    write_text(Path::new(&out), &serde_json::to_string(&raw)?)
}

fn parse_shape(name: &str) -> Result<CloudShape> {
    Ok(match name {
        "disk" => CloudShape::Disk { radius: 1.0 },
        "box" => CloudShape::Box { half_extent: 1.0 },
        "circle" => CloudShape::Circle { radius: 1.0 },
        "clusters" => CloudShape::Clusters {
            centers: 4,
            spread: 0.25,
        },
        other => bail!("unknown shape {other:?} (want disk, box, circle, or clusters)"),
    })
}

fn read_points(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<[f64; 2]> = serde_json::from_str(&text)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(raw.into_iter().map(|[x, y]| Vec2::new(x, y)).collect())
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}
