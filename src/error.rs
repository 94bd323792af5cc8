use thiserror::Error;

/// Error types for `AssociativeArray` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum AssocArrayError {
    /// The absent key was passed where a real key is required
    #[error("Invalid key: the absent key cannot be stored")]
    InvalidKey,
    /// No occupied slot holds the requested key
    #[error("Key not found in associative array")]
    KeyNotFound,
    /// Invalid parameter provided to a constructor
    #[error("Invalid configuration: {parameter} cannot be {value}")]
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value
        value: usize,
    },
}
