/// Error types for inventory-fmt
///
/// Every failure is fatal to the run. The variant decides the exit code:
/// usage problems exit with `EINVAL`, everything else exits 1.
use thiserror::Error;

/// Exit status for invalid command-line usage (errno `EINVAL`)
pub const EXIT_INVALID_ARGUMENT: i32 = 22;

/// Exit status for any other fatal error
pub const EXIT_FAILURE: i32 = 1;

#[derive(Error, Debug)]
pub enum Error {
    /// The arguments do not describe a runnable invocation
    #[error("{0}")]
    Usage(String),

    /// Reading the inventory file or writing the output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Fetching the inventory over HTTP failed
    #[error("HTTP error: {0}")]
    Http(#[from] Box<ureq::Error>),

    /// The inventory stream is not a readable Sphinx inventory
    #[error("Malformed inventory: {0}")]
    Decode(String),
}

impl Error {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => EXIT_INVALID_ARGUMENT,
            _ => EXIT_FAILURE,
        }
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        Error::Http(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
