extern crate dirs;
extern crate log;
extern crate serde;
extern crate serde_yaml;

use crate::config::{defaults, permission::CONFIG_MODE, CONFIG_FILE};
use error::{io_error, yaml_error};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufReader, Write},
    path::{Path, PathBuf},
};

mod error;
mod key;

pub use error::{Error, Operate, Result};
pub use key::ConfigKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    pub port: i64,
}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lang {
    pub default: String,
}

/// Settings persisted in `egor.yaml` under the user config directory.
/// Fields missing from the file take their default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: Server,
    pub lang: Lang,
    pub config_file_name: String,
    pub version: String,
    pub author: String,
}

impl Default for Server {
    fn default() -> Self {
        Server {
            port: defaults::SERVER_PORT,
        }
    }
}
impl Default for Lang {
    fn default() -> Self {
        Lang {
            default: defaults::LANG.to_string(),
        }
    }
}
impl Default for Config {
    fn default() -> Self {
        Config {
            server: Server::default(),
            lang: Lang::default(),
            config_file_name: defaults::META_FILE.to_string(),
            version: defaults::VERSION.to_string(),
            author: String::new(),
        }
    }
}

impl Config {
    pub fn location() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_FILE))
            .ok_or(Error::NoConfigDir)
    }
    pub fn load_or_create_default() -> Result<Self> {
        Self::load_or_create(&Self::location()?)
    }
    /// Loads the configuration at `path`, writing the defaults there first
    /// when no file exists yet.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if create_default(path)? {
            info!("Created default configuration at {}", path.display());
        }
        Self::load(path)
    }
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let file = File::open(path).map_err(io_error(Operate::Open, path.to_path_buf()))?;
        serde_yaml::from_reader(BufReader::new(file)).map_err(yaml_error(path.to_path_buf()))
    }
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::location()?)
    }
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = self.encode(path)?;
        ensure_parent(path)?;
        let mut file = open_options()
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(io_error(Operate::Open, path.to_path_buf()))?;
        file.write_all(content.as_bytes())
            .and_then(|_| file.sync_all())
            .map_err(io_error(Operate::Write, path.to_path_buf()))
    }
    fn encode(&self, path: &Path) -> Result<String> {
        serde_yaml::to_string(self).map_err(yaml_error(path.to_path_buf()))
    }
}

fn open_options() -> OpenOptions {
    let mut opt = OpenOptions::new();
    opt.write(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opt.mode(CONFIG_MODE);
    }
    opt
}
fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(io_error(Operate::Create, dir.to_path_buf()))
        }
        _ => Ok(()),
    }
}
/// Returns false when the file already exists.
fn create_default(path: &Path) -> Result<bool> {
    let content = Config::default().encode(path)?;
    ensure_parent(path)?;
    let mut file = match open_options().create_new(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(Error::Io(Operate::Create, path.to_path_buf(), e)),
    };
    if let Err(e) = file
        .write_all(content.as_bytes())
        .and_then(|_| file.sync_all())
    {
        drop(file);
        let _ = fs::remove_file(path);
        return Err(Error::Io(Operate::Write, path.to_path_buf(), e));
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    #[test]
    fn default_values() {
        let config = Config::default();
        assert_eq!(config.server.port, 1200);
        assert_eq!(config.lang.default, "cpp");
        assert_eq!(config.config_file_name, "egor-meta.json");
        assert_eq!(config.version, "0.1.0");
        assert!(config.author.is_empty());
    }

    #[test]
    fn yaml_layout() {
        let doc: Value = serde_yaml::from_str(&serde_yaml::to_string(&Config::default()).unwrap())
            .unwrap();
        assert_eq!(doc["server"]["port"].as_u64(), Some(1200));
        assert_eq!(doc["lang"]["default"].as_str(), Some("cpp"));
        assert_eq!(doc["config_file_name"].as_str(), Some("egor-meta.json"));
        assert_eq!(doc["version"].as_str(), Some("0.1.0"));
        assert_eq!(doc["author"].as_str(), Some(""));
    }

    #[test]
    fn reads_hand_written_file() {
        let config: Config = serde_yaml::from_str(
            "server:\n  port: 8080\nlang:\n  default: java\nconfig_file_name: meta.json\nversion: 0.1.0\nauthor: tourist\n",
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.lang.default, "java");
        assert_eq!(config.config_file_name, "meta.json");
        assert_eq!(config.version, "0.1.0");
        assert_eq!(config.author, "tourist");
    }

    #[test]
    fn author_is_optional() {
        let config: Config = serde_yaml::from_str(
            "server:\n  port: 1200\nlang:\n  default: cpp\nconfig_file_name: egor-meta.json\nversion: 0.1.0\n",
        )
        .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = serde_yaml::from_str(
            "server:\n  port: 8080\nlang:\n  default: java\nconfig_file_name: meta.json\n",
        )
        .unwrap();
        assert_eq!(config.version, "0.1.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.lang.default, "java");

        let config: Config = serde_yaml::from_str("server: {}\nauthor: petr\n").unwrap();
        assert_eq!(config.server.port, 1200);
        assert_eq!(config.lang.default, "cpp");
        assert_eq!(config.config_file_name, "egor-meta.json");
        assert_eq!(config.author, "petr");
    }

    #[test]
    fn port_outside_u16() {
        let config: Config = serde_yaml::from_str("server:\n  port: 70000\n").unwrap();
        assert_eq!(config.server.port, 70000);
        assert_eq!(config.get_value("server.port").unwrap(), "70000");

        let config: Config = serde_yaml::from_str("server:\n  port: -1\n").unwrap();
        assert_eq!(config.get_value("server.port").unwrap(), "-1");
    }

    #[test]
    fn wrong_type_is_still_an_error() {
        assert!(serde_yaml::from_str::<Config>("server:\n  port: [1, 2]\n").is_err());
    }
}
