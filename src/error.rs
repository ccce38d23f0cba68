use miette::Diagnostic;
use thiserror::Error;

/// Main error type for odyc operations
#[derive(Error, Diagnostic, Debug)]
pub enum OdycError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(odyc::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to decode {file}: {message}")]
    #[diagnostic(
        code(odyc::decode),
        help("Make sure every .png file in the assets directory is a valid PNG")
    )]
    Decode { file: String, message: String },

    #[error("No PNG files found in assets directory")]
    #[diagnostic(code(odyc::no_inputs))]
    NoInputs {
        #[help]
        help: Option<String>,
    },

    #[error("No colours found in PNG images")]
    #[diagnostic(
        code(odyc::no_colours),
        help("Every pixel of the {images} image(s) is fully transparent")
    )]
    NoColours { images: usize },

    #[error("No sprites made from PNG images")]
    #[diagnostic(code(odyc::no_sprites))]
    NoSprites,

    #[error("Too many colours: {file} introduces colour #{colours}, only {max} are supported")]
    #[diagnostic(
        code(odyc::capacity),
        help("Reduce the number of distinct colours across all sprites")
    )]
    CapacityExceeded {
        file: String,
        colours: usize,
        max: usize,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(odyc::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, OdycError>;
