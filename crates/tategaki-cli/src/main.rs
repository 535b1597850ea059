use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use tategaki::{SegmentInput, Segmenter, SegmenterConfig};

const USAGE: &str = "\
Usage: tategaki [INPUT] [--config FILE] [--svg DIR] [--compact]

Segments a JSON SegmentInput (from INPUT, or stdin when INPUT is absent or `-`)
and prints the JSON Segmentation to stdout.

Options:
  --config FILE   JSON SegmenterConfig; missing fields keep their defaults
  --svg DIR       also write dividers.svg and lassos.svg into DIR
  --compact       print JSON on a single line
  -h, --help      show this message

Set RUST_LOG=tategaki=debug to trace the pipeline on stderr.";

#[derive(Debug, Default)]
struct Args {
    input: Option<PathBuf>,
    config: Option<PathBuf>,
    svg_dir: Option<PathBuf>,
    compact: bool,
}

fn parse_args() -> anyhow::Result<Option<Args>> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--config" => {
                let path = iter.next().context("--config needs a file")?;
                args.config = Some(path.into());
            }
            "--svg" => {
                let dir = iter.next().context("--svg needs a directory")?;
                args.svg_dir = Some(dir.into());
            }
            "--compact" => args.compact = true,
            "-" => args.input = None,
            other if other.starts_with('-') => bail!("unknown option: {other}"),
            other => {
                if args.input.is_some() {
                    bail!("more than one input given");
                }
                args.input = Some(other.into());
            }
        }
    }

    Ok(Some(args))
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    // stdout carries the result
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let Some(args) = parse_args()? else {
        println!("{USAGE}");
        return Ok(());
    };

    let config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<SegmenterConfig>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SegmenterConfig::default(),
    };
    let segmenter = Segmenter::new(config)?;

    let text = read_input(args.input.as_deref())?;
    let input: SegmentInput = serde_json::from_str(&text).context("parsing segment input")?;

    let result = segmenter.segment(&input)?;
    tracing::info!(
        characters = result.characters.len(),
        strokes = result.strokes.len(),
        lassos = result.lassos.len(),
        "segmented"
    );

    if let Some(dir) = &args.svg_dir {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        for (name, svg) in [("dividers.svg", &result.divider_svg), ("lassos.svg", &result.lasso_svg)] {
            let path = dir.join(name);
            fs::write(&path, svg).with_context(|| format!("writing {}", path.display()))?;
        }
    }

    let json = if args.compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{json}");

    Ok(())
}
