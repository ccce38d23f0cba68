//! Init command implementation.
//!
//! Generates an `odyc.yaml` manifest so `odyc sprites` can run without flags.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{Manifest, MANIFEST_FILENAME};
use crate::error::{OdycError, Result};
use crate::output::{display_path, Printer};

/// Initialize an odyc project by generating an odyc.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Assets directory, relative to the project
    #[arg(long, short, default_value = "assets")]
    pub assets: PathBuf,

    /// Output file, relative to the project
    #[arg(long, short, default_value = "sprites.js")]
    pub output: PathBuf,

    /// Overwrite existing odyc.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(OdycError::Config {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    if !args.path.join(&args.assets).is_dir() {
        printer.warning(
            "Warning",
            &format!("assets directory {} does not exist yet", args.assets.display()),
        );
    }

    let manifest = Manifest {
        assets: Some(args.assets),
        output: Some(args.output),
        force: false,
    };
    let yaml = manifest.to_yaml()?;

    fs::write(&manifest_path, &yaml).map_err(|e| OdycError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.success("Created", &display_path(&manifest_path));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn init_args(path: PathBuf, force: bool) -> InitArgs {
        InitArgs {
            path,
            assets: PathBuf::from("assets"),
            output: PathBuf::from("sprites.js"),
            force,
        }
    }

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();

        run(init_args(dir.path().to_path_buf(), false), &Printer::new()).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(manifest.assets, Some(dir.path().join("assets")));
        assert_eq!(manifest.output, Some(dir.path().join("sprites.js")));
        assert!(!manifest.force);
    }

    #[test]
    fn test_init_refuses_existing_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "force: true").unwrap();

        let result = run(init_args(dir.path().to_path_buf(), false), &Printer::new());
        assert!(result.is_err());
        assert_eq!(
            fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap(),
            "force: true"
        );
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "force: true").unwrap();

        run(init_args(dir.path().to_path_buf(), true), &Printer::new()).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert!(!manifest.force);
    }
}
