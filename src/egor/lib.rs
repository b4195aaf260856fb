pub(crate) mod config;
pub mod configuration;
pub mod error;
pub mod meta;
pub mod testcase;

pub use configuration::{Config, ConfigKey};
pub use meta::MetaData;
pub use testcase::{resolve, TestCase};
