use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use giftwrap::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "giftwrap")]
#[command(about = "Gift-wrapping convex hull traces")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

/// Where the points come from. Defaults to a random draw.
#[derive(Args, Debug, Clone)]
struct Source {
    /// Inline point list, `x,y` per line
    #[arg(long, conflicts_with_all = ["input", "random"])]
    points: Option<String>,
    /// File with a point list, `x,y` per line
    #[arg(long, conflicts_with = "random")]
    input: Option<PathBuf>,
    /// Draw this many random points (1..=20)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=20))]
    random: Option<u64>,
    /// Seed for random draws
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull trace and print (or write) it as JSON
    Hull {
        #[command(flatten)]
        source: Source,
        /// Write JSON here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the playback frames of the trace, one per line
    Replay {
        #[command(flatten)]
        source: Source,
        /// Pause between frames like the animation does
        #[arg(long)]
        sleep: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { source, out } => hull(&source, out.as_deref(), cmd.tag),
        Action::Replay { source, sleep } => replay(&source, sleep),
        Action::Report => report(cmd.tag),
    }
}

impl Source {
    fn load(&self) -> Result<PointSet> {
        if let Some(text) = &self.points {
            return input::parse_points(text).context("--points");
        }
        if let Some(path) = &self.input {
            return input::read_points(path);
        }
        let cfg = RandomCfg {
            count: PointCount::Fixed(self.random.map_or(10, |n| n as usize)),
            ..RandomCfg::default()
        };
        let tok = ReplayToken {
            seed: self.seed,
            index: 0,
        };
        let set = random_points(cfg, tok);
        tracing::info!(seed = self.seed, n = set.len(), points = %input::format_points(&set).replace('\n', " "), "random_points");
        Ok(set)
    }

    /// Provenance params; `points` is the set actually loaded.
    fn describe(&self, points: &PointSet) -> serde_json::Value {
        match (&self.points, &self.input) {
            (Some(_), _) => serde_json::json!({ "source": "inline" }),
            (None, Some(path)) => serde_json::json!({ "source": "file", "path": path }),
            (None, None) => serde_json::json!({
                "source": "random",
                "count": points.len(),
                "seed": self.seed
            }),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HullOutput<'a> {
    points: &'a [Point],
    trace: &'a Trace,
    hull_vertices: Vec<Point>,
    shape: String,
}

fn hull_output<'a>(points: &'a PointSet, trace: &'a Trace) -> HullOutput<'a> {
    HullOutput {
        points,
        trace,
        hull_vertices: trace.hull_vertices(),
        shape: trace.shape_label(),
    }
}

fn hull(source: &Source, out: Option<&Path>, tag: Option<String>) -> Result<()> {
    let points = source.load()?;
    let trace = compute_hull_trace(&points);
    tracing::info!(
        n = points.len(),
        steps = trace.len(),
        shape = %trace.shape_label(),
        tag = ?tag,
        "hull"
    );
    let doc = serde_json::to_string_pretty(&hull_output(&points, &trace))?;
    match out {
        None => println!("{doc}"),
        Some(path) => {
            provenance::ensure_parent(path)?;
            std::fs::write(path, doc).with_context(|| format!("writing {}", path.display()))?;
            let prov = provenance::Provenance::new(source.describe(&points), tag);
            let prov_path = provenance::write_sidecar(path, prov)?;
            tracing::info!(out = %path.display(), provenance = %prov_path.display(), "written");
        }
    }
    Ok(())
}

fn frame_line(pb: &Playback<'_>, trace: &Trace, frame: Frame) -> String {
    match frame {
        Frame::Enter { step } => {
            let s = &trace[step];
            format!("step {}: at {}", step + 1, s.current_point)
        }
        Frame::Probe { step, tried } => match pb.probe_segment(frame) {
            Some((from, to)) => format!("step {}: try {} -> {} [{}]", step + 1, from, to, tried + 1),
            None => format!("step {}: try #{}", step + 1, tried + 1),
        },
        Frame::Complete => {
            let verts = trace
                .hull_vertices()
                .iter()
                .map(Point::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            format!("complete: {} [{}]", trace.shape_label(), verts)
        }
    }
}

fn replay(source: &Source, sleep: bool) -> Result<()> {
    let points = source.load()?;
    let trace = compute_hull_trace(&points);
    tracing::info!(n = points.len(), steps = trace.len(), sleep, "replay");
    let mut pb = Playback::new(&trace);
    while let Some(frame) = pb.next() {
        println!("{}", frame_line(&pb, &trace, frame));
        if sleep {
            std::thread::sleep(pb.delay_after(frame));
        }
    }
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let prov = provenance::Provenance::new(serde_json::json!({}), tag);
    println!("{}", serde_json::to_string_pretty(&prov)?);
    Ok(())
}
