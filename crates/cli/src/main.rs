use anyhow::{Context, Result};
use circlepack::pack::{Model, PackCfg, StopRule, Traversal};
use circlepack::pipeline::{pack_polygon, PipelineCfg};
use circlepack::polygon::to_path_d;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Hexagonal circle packing runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModelArg {
    /// Euclidean plane
    E,
    /// Poincaré disk
    H,
}

impl From<ModelArg> for Model {
    fn from(m: ModelArg) -> Self {
        match m {
            ModelArg::E => Model::Euclidean,
            ModelArg::H => Model::Hyperbolic,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TraversalArg {
    Depth,
    Breadth,
}

impl From<TraversalArg> for Traversal {
    fn from(t: TraversalArg) -> Self {
        match t {
            TraversalArg::Depth => Traversal::Depth,
            TraversalArg::Breadth => Traversal::Breadth,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Pack a polygon and write the node table plus a provenance sidecar
    Pack(PackArgs),
    /// Print the SVG path string of a polygon
    Path {
        #[arg(long)]
        input: PathBuf,
        /// Leave the path open (no trailing `Z`)
        #[arg(long)]
        open: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(clap::Args, Debug)]
struct PackArgs {
    /// Polygon as `[[x, y], ...]` JSON or CSV with `x`, `y` columns
    #[arg(long)]
    input: PathBuf,
    /// Lattice circle radius
    #[arg(long, default_value_t = 1.0)]
    radius: f64,
    #[arg(long, value_enum, default_value = "e")]
    model: ModelArg,
    /// Fixed number of relaxation passes
    #[arg(long, default_value_t = 256)]
    passes: usize,
    /// Stop once every angle sum is within this of 2π (`--passes` becomes the cap)
    #[arg(long)]
    tolerance: Option<f64>,
    /// Wall-clock budget for relaxation, in milliseconds
    #[arg(long)]
    deadline_ms: Option<u64>,
    #[arg(long, value_enum, default_value = "depth")]
    traversal: TraversalArg,
    /// Node table output (.csv or .parquet)
    #[arg(long)]
    out: PathBuf,
}

impl PackArgs {
    fn pipeline_cfg(&self) -> PipelineCfg {
        let stop = match self.tolerance {
            Some(eps) => StopRule::Tolerance {
                eps,
                max_passes: self.passes,
            },
            None => StopRule::Fixed(self.passes),
        };
        PipelineCfg {
            radius: self.radius,
            model: self.model.into(),
            pack: PackCfg {
                stop,
                deadline: self.deadline_ms.map(std::time::Duration::from_millis),
            },
            traversal: self.traversal.into(),
            initial_radius: None,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Pack(args) => pack(&args).map(|_| ()),
        Action::Path { input, open } => path(&input, open),
        Action::Report => report(),
    }
}

/// Run the pipeline; returns the sidecar path.
fn pack(args: &PackArgs) -> Result<PathBuf> {
    tracing::info!(
        input = %args.input.display(),
        radius = args.radius,
        model = ?args.model,
        "pack"
    );
    let polygon = io::read_polygon(&args.input)?;
    let cfg = args.pipeline_cfg();
    let packing = pack_polygon(&polygon, &cfg)
        .with_context(|| format!("packing {}", args.input.display()))?;
    let g = &packing.graph;
    tracing::info!(
        nodes = g.len(),
        interior = g.interior_ids().count(),
        missing = g.missing().len(),
        placed = packing.placed,
        passes = packing.report.passes,
        max_error = packing.report.max_error,
        converged = packing.report.converged,
        "packed"
    );

    let mut df = io::node_table(g)?;
    io::write_table(&mut df, &args.out)?;

    let payload = provenance::Payload::new(json!({
        "input": args.input.to_string_lossy(),
        "radius": args.radius,
        "model": format!("{:?}", cfg.model),
        "stop": format!("{:?}", cfg.pack.stop),
        "deadline_ms": args.deadline_ms,
        "traversal": format!("{:?}", cfg.traversal),
        "initial_radius": cfg.start_radius(),
    }))
    .with_summary(json!({
        "nodes": g.len(),
        "interior": g.interior_ids().count(),
        "boundary": g.boundary_ids().count(),
        "missing": g.missing().len(),
        "placed": packing.placed,
        "passes": packing.report.passes,
        "max_error": packing.report.max_error,
        "converged": packing.report.converged,
        "timed_out": packing.report.timed_out,
    }));
    let sidecar = provenance::write_sidecar(&args.out, payload)?;
    tracing::info!(out = %args.out.display(), sidecar = %sidecar.display(), "wrote");
    Ok(sidecar)
}

fn path(input: &Path, open: bool) -> Result<()> {
    let polygon = io::read_polygon(input)?;
    println!("{}", to_path_d(&polygon, !open));
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": circlepack::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{LazyCsvReader, LazyFileListReader, ParquetReader, SerReader};
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    fn hexagon_json(dir: &Path) -> PathBuf {
        let pts: Vec<[f64; 2]> = circlepack::polygon::regular(6, 10.0)
            .into_iter()
            .map(|z| [z.x, z.y])
            .collect();
        let path = dir.join("hexagon.json");
        fs::write(&path, serde_json::to_vec(&pts).unwrap()).unwrap();
        path
    }

    #[test]
    fn pack_writes_table_and_sidecar() {
        let dir = tempdir().unwrap();
        let args = PackArgs {
            input: hexagon_json(dir.path()),
            radius: 1.0,
            model: ModelArg::H,
            passes: 256,
            tolerance: None,
            deadline_ms: None,
            traversal: TraversalArg::Breadth,
            out: dir.path().join("out").join("nodes.csv"),
        };
        let sidecar = pack(&args).unwrap();
        assert_eq!(sidecar, dir.path().join("out").join("nodes.provenance.json"));

        let df = LazyCsvReader::new(&args.out).finish().unwrap().collect().unwrap();
        let doc: Value = serde_json::from_slice(&fs::read(&sidecar).unwrap()).unwrap();
        assert_eq!(doc["summary"]["nodes"], df.height() as u64);
        assert_eq!(doc["summary"]["converged"], true);
        assert_eq!(doc["params"]["model"], "Hyperbolic");
    }

    #[test]
    fn pack_to_parquet() {
        let dir = tempdir().unwrap();
        let args = PackArgs {
            input: hexagon_json(dir.path()),
            radius: 1.0,
            model: ModelArg::E,
            passes: 8,
            tolerance: Some(1e-9),
            deadline_ms: None,
            traversal: TraversalArg::Depth,
            out: dir.path().join("nodes.parquet"),
        };
        pack(&args).unwrap();
        let file = fs::File::open(&args.out).unwrap();
        let df = ParquetReader::new(file).finish().unwrap();
        assert!(df.height() > 10);
        assert_eq!(df.column("x").unwrap().null_count(), 0);
    }

    #[test]
    fn pack_reports_empty_polygon() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("tiny.json");
        fs::write(&input, "[[0, 0], [0, 0.5], [0.5, 0.5], [0.5, 0]]").unwrap();
        let args = PackArgs {
            input,
            radius: 1.0,
            model: ModelArg::E,
            passes: 4,
            tolerance: None,
            deadline_ms: None,
            traversal: TraversalArg::Depth,
            out: dir.path().join("nodes.csv"),
        };
        let err = pack(&args).unwrap_err();
        assert!(format!("{err:#}").contains("empty"));
    }

    #[test]
    fn cli_parses_pack_flags() {
        let cmd = Cmd::try_parse_from([
            "cli", "pack", "--input", "p.json", "--radius", "0.5", "--model", "h", "--out",
            "n.parquet",
        ])
        .unwrap();
        let Action::Pack(args) = cmd.action else {
            panic!("expected pack");
        };
        let cfg = args.pipeline_cfg();
        assert_eq!(cfg.model, Model::Hyperbolic);
        assert_eq!(cfg.pack.stop, StopRule::Fixed(256));
        assert_eq!(cfg.radius, 0.5);
    }
}
