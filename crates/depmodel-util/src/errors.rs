use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all depmodel operations.
#[derive(Debug, Error, Diagnostic)]
pub enum DepModelError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An artifact coordinate did not split into a usable key.
    #[error("Malformed artifact coordinate '{coordinate}' ({segments} segment(s))")]
    #[diagnostic(help("Expected group:artifact[:classifier[:type]]"))]
    MalformedCoordinate { coordinate: String, segments: usize },

    /// A model was requested before any root artifact was provided.
    #[error("No root artifact set for the dependency model")]
    #[diagnostic(help("Add an [app] section with group, artifact and version"))]
    MissingRootArtifact,

    /// Invalid or malformed model descriptor.
    #[error("Descriptor error: {message}")]
    #[diagnostic(help("Check your depmodel.toml for syntax errors"))]
    Descriptor { message: String },

    /// Global configuration could not be read or parsed.
    #[error("Config error: {message}")]
    Config { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type DepModelResult<T> = miette::Result<T>;
