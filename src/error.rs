//! Error types for the component host surfaces
//!
//! The render path itself is infallible: `RecipeCard::set_data` never fails
//! (see the module docs in `card`). Errors only arise at the host-facing
//! boundaries, i.e. element registration, declarative upgrades, the JSON
//! property surface, and the CLI.

use thiserror::Error;

/// Result type alias for component host operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the component host boundaries
#[derive(Error, Debug)]
pub enum Error {
    /// A tag was defined twice in the same registry
    #[error("Element '{0}' is already defined")]
    DuplicateDefinition(String),

    /// A custom element tag name must contain a hyphen
    #[error("Invalid custom element name: '{0}'")]
    InvalidTagName(String),

    /// An element was requested under a tag that was never defined
    #[error("No element defined for tag '{0}'")]
    UnknownElement(String),

    /// The JSON property surface rejected a value
    #[error("Property error: {0}")]
    PropertyError(String),

    /// Input data could not be read or decoded
    #[error("Data error: {0}")]
    DataError(String),

    /// I/O error while reading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
