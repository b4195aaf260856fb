extern crate serde_json;

use std::{error::Error as StdError, fmt, io, path::PathBuf, result::Result as StdResult};

#[derive(Debug)]
pub enum Error {
    Io(PathBuf, io::Error),
    Json(Option<PathBuf>, serde_json::Error),
}
pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(path, err) => write!(f, "Error opening {}: {}", path.display(), err),
            Self::Json(Some(path), err) => {
                write!(f, "Error parsing metadata {}: {}", path.display(), err)
            }
            Self::Json(None, err) => write!(f, "Error parsing metadata: {}", err),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(_, e) => Some(e),
            Self::Json(_, e) => Some(e),
        }
    }
}
