//! psd2json - Convert layered design documents to scene-graph JSON
//!
//! A command line tool that reads layer manifests produced by the design
//! document decoder and writes the flat interchange document a canvas
//! editor loads.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use layerscene_core::api::{ConvertConfig, ConvertOptions, convert_file};
use layerscene_core::output::to_json_string;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Convert layered design documents to scene-graph JSON.
#[derive(Parser, Debug)]
#[command(name = "psd2json")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Args {
    /// One or more layer manifests to convert
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-", conflicts_with = "output_dir")]
    outfile: String,

    /// Directory to write one <name>.json per input into
    #[arg(short = 'O', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Write compact JSON instead of two-space indented
    #[arg(long, action = ArgAction::SetTrue)]
    compact: bool,

    /// Emit a flat Group node ahead of each group's layers
    #[arg(long = "emit-groups", action = ArgAction::SetTrue)]
    emit_groups: bool,
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Output path for `input` inside `dir`: the input's file stem plus `.json`.
fn output_path_in(dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let stem = stem.strip_suffix(".layers").unwrap_or(&stem);
    dir.join(format!("{stem}.json"))
}

/// Convert one input, returning the JSON when it goes to stdout.
fn process_file(path: &Path, args: &Args, options: ConvertOptions) -> Result<Option<String>> {
    let output = match (&args.output_dir, args.outfile.as_str()) {
        (Some(dir), _) => Some(output_path_in(dir, path)),
        (None, "-") => None,
        (None, outfile) => Some(PathBuf::from(outfile)),
    };
    let to_stdout = output.is_none();

    let config = ConvertConfig {
        input: path.to_path_buf(),
        output,
        options,
    };
    let doc = convert_file(&config)?;

    if to_stdout {
        Ok(Some(to_json_string(&doc, options.pretty)?))
    } else {
        Ok(None)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    if args.files.len() > 1 && args.outfile != "-" {
        bail!("--outfile takes a single input; use --output-dir for several");
    }

    if let Some(ref dir) = args.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    }

    let options = ConvertOptions {
        pretty: !args.compact,
        emit_groups: args.emit_groups,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for path in &args.files {
        if !path.exists() {
            bail!("file not found: {}", path.display());
        }
        tracing::debug!(path = %path.display(), "processing");

        let json = process_file(path, &args, options)
            .with_context(|| format!("error processing {}", path.display()))?;
        if let Some(json) = json {
            writeln!(out, "{json}")?;
        }
    }
    out.flush()?;

    Ok(())
}
