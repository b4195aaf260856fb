use super::{error::Error, Config};
use std::{fmt, str::FromStr};

/// Settings that can be read back by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    ServerPort,
    LangDefault,
    Author,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 3] = [Self::ServerPort, Self::LangDefault, Self::Author];

    pub fn name(self) -> &'static str {
        match self {
            Self::ServerPort => "server.port",
            Self::LangDefault => "lang.default",
            Self::Author => "author",
        }
    }
}
impl FromStr for ConfigKey {
    type Err = Error;

    fn from_str(key: &str) -> Result<Self, Error> {
        let lower = key.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.name() == lower)
            .ok_or_else(|| Error::UnknownKey(key.to_string()))
    }
}
impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Config {
    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::ServerPort => self.server.port.to_string(),
            ConfigKey::LangDefault => self.lang.default.clone(),
            ConfigKey::Author => self.author.clone(),
        }
    }
    /// Looks up a setting by its case-insensitive name.
    pub fn get_value(&self, key: &str) -> Result<String, Error> {
        Ok(self.get(key.parse()?))
    }
}
