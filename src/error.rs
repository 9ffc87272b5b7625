use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Cannot proceed: the configuration file '{path}' must be an existing \".yaml\" or \".yml\" file.")]
    ConfigNotFound { path: String },

    #[error("Failed to parse the configuration file. Original error: {0}")]
    ConfigParseError(#[from] serde_yaml::Error),

    /// The configuration does not match the expected schema.
    #[error("Invalid configuration: {0}.")]
    ConfigSchemaError(String),

    /// The output file name is missing the expected suffix.
    #[error("The file name must end with \".tex\". Current file name: {name}.")]
    FileNameError { name: String },

    /// The save destination is not an existing directory.
    #[error("The save path must be an existing directory. Current path: {path}.")]
    SavePathError { path: String },

    #[error("The dump path must be a \".yaml\" or \".yml\" file in an existing directory. Current path: {path}.")]
    DumpPathError { path: String },
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
