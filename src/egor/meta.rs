extern crate log;
extern crate serde;
extern crate serde_json;

use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

mod error;

pub use error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputFile {
    pub id: i64,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub custom: bool,
}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputFile {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub custom: bool,
}

/// Contents of a problem's `egor-meta.json`. Record order is kept as read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetaData {
    #[serde(default)]
    pub task_name: String,
    #[serde(default)]
    pub task_lang: String,
    #[serde(default)]
    pub task_file: String,
    #[serde(default)]
    pub inputs: Vec<InputFile>,
    #[serde(default)]
    pub outputs: Vec<OutputFile>,
}

impl MetaData {
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        serde_json::from_reader(rdr).map_err(|e| Error::Json(None, e))
    }
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::Io(path.to_path_buf(), e))?;
        let meta: MetaData = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::Json(Some(path.to_path_buf()), e))?;
        debug!(
            "Loaded {} inputs and {} outputs from {}",
            meta.inputs.len(),
            meta.outputs.len(),
            path.display()
        );
        Ok(meta)
    }
}
