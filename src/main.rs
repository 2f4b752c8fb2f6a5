// SPDX-License-Identifier: MPL-2.0
use capture_meta::config::{self, ExtractorConfig};
use capture_meta::domain::metadata::{Decimals, Metadata};
use capture_meta::error::Result;
use capture_meta::media::extract_metadata_with;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const HELP: &str = "\
capture-meta: print the capture metadata embedded in photos and videos

USAGE:
  capture-meta [OPTIONS] FILE...

OPTIONS:
  --config PATH   Read extractor settings from PATH instead of the user config
  --toml          Print records as TOML
  -h, --help      Print this help

The log level is read from RUST_LOG (default: info).
";

struct Args {
    config: Option<PathBuf>,
    toml: bool,
    files: Vec<PathBuf>,
}

fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let config = args.opt_value_from_str("--config")?;
    let toml = args.contains("--toml");
    let files = args.finish().into_iter().map(PathBuf::from).collect();

    Ok(Some(Args {
        config,
        toml,
        files,
    }))
}

/// One file's record as printed by `--toml`.
#[derive(Serialize)]
struct Report<'a> {
    file: String,
    make: &'a str,
    model: &'a str,
    lens: &'a str,
    focal_length: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    captured_at: Option<String>,
    iso_speed: u16,
    orientation: u16,
    width: u32,
    height: u32,
    decimals: Decimals,
}

impl<'a> Report<'a> {
    fn new(path: &Path, metadata: &'a Metadata) -> Self {
        Self {
            file: path.display().to_string(),
            make: &metadata.make,
            model: &metadata.model,
            lens: &metadata.lens,
            focal_length: &metadata.focal_length,
            captured_at: metadata.captured_at.map(|time| time.to_rfc3339()),
            iso_speed: metadata.iso_speed,
            orientation: metadata.orientation.to_raw(),
            width: metadata.width,
            height: metadata.height,
            decimals: metadata.decimals(),
        }
    }
}

#[derive(Serialize)]
struct TomlOutput<'a> {
    file: Vec<Report<'a>>,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

fn load_config(path: Option<&Path>) -> Result<ExtractorConfig> {
    match path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    }
}

fn print_text(path: &Path, metadata: &Metadata) {
    let decimals = metadata.decimals();
    let or_dash = |value: Option<f64>| value.map_or_else(|| "-".to_string(), |v| v.to_string());

    println!("{}", path.display());
    if metadata.is_empty() {
        println!("  (no metadata)");
        return;
    }
    println!("  camera:        {} {}", metadata.make, metadata.model);
    println!("  lens:          {}", metadata.lens);
    println!("  focal length:  {}", metadata.focal_length);
    match metadata.captured_at {
        Some(time) => println!("  captured at:   {}", time.to_rfc3339()),
        None => println!("  captured at:   -"),
    }
    println!("  f-number:      {}", or_dash(decimals.f_number));
    println!("  exposure time: {}", metadata.exposure_time);
    println!("  shutter speed: {}", or_dash(decimals.shutter_speed));
    println!("  iso:           {}", metadata.iso_speed);
    println!("  size:          {}x{}", metadata.width, metadata.height);
    println!("  orientation:   {}", metadata.orientation.to_raw());
    if metadata.has_gps() {
        println!(
            "  position:      {}, {}",
            or_dash(decimals.latitude),
            or_dash(decimals.longitude)
        );
        println!("  altitude:      {} m", or_dash(decimals.altitude));
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Run 'capture-meta --help' for usage information.");
            return ExitCode::FAILURE;
        }
    };

    if args.files.is_empty() {
        eprint!("{HELP}");
        return ExitCode::FAILURE;
    }

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut failed = false;
    let mut records = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let extracted = std::fs::read(path)
            .map_err(Into::into)
            .and_then(|bytes| extract_metadata_with(&bytes, &config));
        match extracted {
            Ok(metadata) => records.push((path.as_path(), metadata)),
            Err(err) => {
                tracing::error!(file = %path.display(), "{err}");
                failed = true;
            }
        }
    }

    if args.toml {
        let output = TomlOutput {
            file: records
                .iter()
                .map(|(path, metadata)| Report::new(path, metadata))
                .collect(),
        };
        match toml::to_string_pretty(&output) {
            Ok(text) => print!("{text}"),
            Err(err) => {
                tracing::error!("failed to render records: {err}");
                failed = true;
            }
        }
    } else {
        for (path, metadata) in &records {
            print_text(path, metadata);
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
