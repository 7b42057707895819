use miette::Diagnostic;
use thiserror::Error;

/// Main error type for brandmark operations
#[derive(Error, Diagnostic, Debug)]
pub enum BrandError {
    #[error("IO error: {0}")]
    #[diagnostic(code(brandmark::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(brandmark::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(brandmark::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Setup error: {message}")]
    #[diagnostic(code(brandmark::setup))]
    Setup {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(brandmark::render))]
    Render { message: String },

    #[error("Encode error: {message}")]
    #[diagnostic(code(brandmark::encode))]
    Encode { message: String },

    #[error("Optimize failed: {message}")]
    #[diagnostic(code(brandmark::optimize))]
    Optimize {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation failed: {message}")]
    #[diagnostic(code(brandmark::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl BrandError {
    /// Wrap an IO failure on a specific path.
    pub fn io(path: impl Into<std::path::PathBuf>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BrandError>;
