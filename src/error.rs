use miette::Diagnostic;
use thiserror::Error;

/// Main error type for ikon operations
#[derive(Error, Diagnostic, Debug)]
pub enum IkonError {
    #[error("IO error: {0}")]
    #[diagnostic(code(ikon::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(ikon::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Theme file not found: {path}")]
    #[diagnostic(code(ikon::config))]
    ConfigNotFound {
        path: std::path::PathBuf,
        #[help]
        help: Option<String>,
    },

    #[error("Theme file is empty: {path}")]
    #[diagnostic(code(ikon::config))]
    ConfigEmpty { path: std::path::PathBuf },

    #[error("No colours found in {path}")]
    #[diagnostic(code(ikon::config), help("Colour lines look like `--primary: #ff0000;`"))]
    NoColours { path: std::path::PathBuf },

    #[error("Failed to rasterize {asset}: {message}")]
    #[diagnostic(code(ikon::raster))]
    RasterFailed { asset: String, message: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(ikon::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(ikon::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, IkonError>;
