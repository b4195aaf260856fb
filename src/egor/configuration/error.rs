extern crate serde_yaml;

use std::{error::Error as StdError, fmt, io, path::PathBuf, result::Result as StdResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operate {
    Create,
    Open,
    Write,
}
#[derive(Debug)]
pub enum Error {
    NoConfigDir,
    Io(Operate, PathBuf, io::Error),
    Yaml(PathBuf, serde_yaml::Error),
    UnknownKey(String),
}
pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Operate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("creating"),
            Self::Open => f.write_str("opening"),
            Self::Write => f.write_str("writing"),
        }
    }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoConfigDir => write!(f, "Can't determine user config directory"),
            Self::Io(op, path, err) => {
                write!(f, "Error {} {}: {}", op, path.display(), err)
            }
            Self::Yaml(path, err) => write!(f, "Error processing {}: {}", path.display(), err),
            Self::UnknownKey(key) => write!(f, "Unknown config key {}", key),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(_, _, e) => Some(e),
            Self::Yaml(_, e) => Some(e),
            Self::NoConfigDir | Self::UnknownKey(_) => None,
        }
    }
}

pub(super) fn io_error(op: Operate, path: PathBuf) -> impl FnOnce(io::Error) -> Error {
    move |err| Error::Io(op, path, err)
}
pub(super) fn yaml_error(path: PathBuf) -> impl FnOnce(serde_yaml::Error) -> Error {
    move |err| Error::Yaml(path, err)
}
