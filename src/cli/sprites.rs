//! Sprites command implementation.
//!
//! Scans an assets directory for PNG files, encodes them into a shared
//! palette and writes an Odyc.js game config.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{decode_image, find_manifest, open_image, scan_assets, Manifest};
use crate::encode::{Encoded, Encoder};
use crate::error::{OdycError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{render_game_config, write_game_config};
use crate::validation::print_diagnostics;

/// Generate code from a sprites directory
#[derive(Args, Debug, Default)]
pub struct SpritesArgs {
    /// Path to assets directory
    #[arg(long, short)]
    pub assets: Option<PathBuf>,

    /// Path to output file
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Overwrite output file if it exists
    #[arg(long, short)]
    pub force: bool,

    /// Manifest to read defaults from (default: ./odyc.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Settings after merging flags over the manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct SpritesConfig {
    pub assets: PathBuf,
    pub output: PathBuf,
    pub force: bool,
}

impl SpritesConfig {
    /// Merge command-line flags over manifest values.
    pub fn resolve(args: SpritesArgs, manifest: Manifest) -> Result<Self> {
        let assets = args.assets.or(manifest.assets).ok_or_else(|| missing("assets"))?;
        let output = args.output.or(manifest.output).ok_or_else(|| missing("output"))?;

        Ok(Self {
            assets,
            output,
            force: args.force || manifest.force,
        })
    }
}

fn missing(flag: &str) -> OdycError {
    OdycError::Config {
        message: format!("required flag \"{}\" not set", flag),
        help: Some(format!(
            "Pass --{} or set `{}` in odyc.yaml",
            flag, flag
        )),
    }
}

pub fn run(args: SpritesArgs, printer: &Printer) -> Result<()> {
    let manifest = find_manifest(args.config.as_deref())?;
    let config = SpritesConfig::resolve(args, manifest)?;

    let output_dir = match config.output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !output_dir.is_dir() {
        return Err(OdycError::Io {
            path: output_dir.to_path_buf(),
            message: "Directory of output path does not exist".to_string(),
        });
    }

    if config.output.exists() && !config.force {
        printer.warning(
            "Skipped",
            "Output file already exists. Please remove it first, or add --force flag to overwrite it.",
        );
        return Ok(());
    }

    let encoded = encode_assets(&config.assets, printer)?;

    report_palette(&encoded, printer);

    let source = render_game_config(&encoded);
    write_game_config(&source, &config.output)?;

    printer.success(
        "Generated",
        &format!("sprites configuration at {}", printer.cyan(&display_path(&config.output))),
    );

    Ok(())
}

/// Encode every PNG in the assets directory, in file name order.
///
/// Files that cannot be opened are reported and skipped. Any other failure
/// aborts the whole run.
fn encode_assets(assets: &Path, printer: &Printer) -> Result<Encoded> {
    printer.status("Scanning", &display_path(assets));
    let scan = scan_assets(assets)?;

    for dir in &scan.directories {
        printer.warning(
            "Warning",
            &format!("Assets directory contains a directory: {}", file_name(dir)),
        );
    }
    for file in &scan.skipped {
        printer.info("Skipping", &format!("non-PNG file: {}", file_name(file)));
    }

    if scan.is_empty() {
        return Err(OdycError::NoInputs {
            help: Some(format!(
                "Add .png files directly inside {}",
                display_path(assets)
            )),
        });
    }

    let mut encoder = Encoder::new();
    for path in &scan.images {
        let name = file_name(path);

        let reader = match open_image(path) {
            Ok(reader) => reader,
            Err(e) => {
                printer.error("Error", &e.to_string());
                continue;
            }
        };
        let image = decode_image(reader, &name)?;

        printer.debug(
            "Encoding",
            &format!("{} ({}x{})", name, image.width(), image.height()),
        );
        let warnings = encoder.add_image(&name, &image)?;
        print_diagnostics(&warnings, printer);
    }

    encoder.finish()
}

/// Log colour usage and totals.
fn report_palette(encoded: &Encoded, printer: &Printer) {
    for entry in encoded.palette.iter() {
        printer.debug(
            "Colour",
            &format!(
                "{} found {} times in {}",
                entry.colour,
                entry.count,
                plural(entry.files.len(), "file", "files")
            ),
        );
    }

    printer.info(
        "Info",
        &format!(
            "{} found across all sprites",
            plural(encoded.palette.len(), "colour", "colours")
        ),
    );
    printer.info(
        "Info",
        &format!(
            "{} found across all PNG files",
            plural(encoded.sprites.len(), "sprite", "sprites")
        ),
    );
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
