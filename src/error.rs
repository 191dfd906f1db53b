use std::{
    error::Error,
    fmt::{self, Display},
    io,
    path::PathBuf,
    string::FromUtf8Error,
};

/// Sorting error.
#[derive(Debug)]
pub enum SortError {
    /// Input file doesn't exist or can't be read.
    MissingInput { path: PathBuf, source: io::Error },
    /// Input file is not valid UTF-8.
    Decode { path: PathBuf, source: FromUtf8Error },
    /// Output file can't be created or written.
    Write { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, SortError>;

impl Error for SortError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SortError::MissingInput { source, .. } => Some(source),
            SortError::Decode { source, .. } => Some(source),
            SortError::Write { source, .. } => Some(source),
        }
    }
}

impl Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            SortError::MissingInput { path, source } => {
                write!(f, "cannot read input {}: {}", path.display(), source)
            }
            SortError::Decode { path, source } => {
                write!(f, "input {} is not valid UTF-8: {}", path.display(), source)
            }
            SortError::Write { path, source } => {
                write!(f, "cannot write output {}: {}", path.display(), source)
            }
        }
    }
}
