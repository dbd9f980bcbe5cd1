//! Converts one footprint image into a BSP export.
//!
//! ```text
//! makebsp <input-image> <export.json> [map.svg] [graph.dot]
//! ```
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=debug`).

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use city_bsp::{OutputPaths, Pipeline};
use log::{error, info};

const USAGE: &str = "usage: makebsp <input-image> <export.json> [map.svg] [graph.dot]";

/// Positional arguments of one run.
#[derive(Debug, PartialEq, Eq)]
struct Args {
    input: PathBuf,
    outputs: OutputPaths,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut args = args.into_iter();
        let (Some(input), Some(export)) = (args.next(), args.next()) else {
            bail!(USAGE);
        };

        let mut outputs = OutputPaths::none().with_export(export);
        if let Some(map) = args.next() {
            outputs = outputs.with_map(map);
        }
        if let Some(graph) = args.next() {
            outputs = outputs.with_graph(graph);
        }
        if args.next().is_some() {
            bail!(USAGE);
        }

        Ok(Self {
            input: input.into(),
            outputs,
        })
    }
}

fn run() -> Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;
    info!("processing {}", args.input.display());

    let city = Pipeline::new()
        .process_file(&args.input, &args.outputs)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;

    info!(
        "{} rectangles, {} BSP nodes ({} splits), depth {}",
        city.rectangles().len(),
        city.tree().edge_count(),
        city.tree().split_count(),
        city.tree().depth()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn input_and_export_are_required() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["city.png"]).is_err());
    }

    #[test]
    fn optional_outputs_in_order() {
        let args = parse(&["city.png", "city.json", "map.svg"]).unwrap();
        assert_eq!(args.input, PathBuf::from("city.png"));
        assert_eq!(
            args.outputs,
            OutputPaths::none().with_export("city.json").with_map("map.svg")
        );

        let args = parse(&["city.png", "city.json", "map.svg", "tree.dot"]).unwrap();
        assert_eq!(args.outputs.graph, Some(PathBuf::from("tree.dot")));
    }

    #[test]
    fn extra_arguments_are_rejected() {
        assert!(parse(&["a.png", "b.json", "c.svg", "d.dot", "e"]).is_err());
    }
}
