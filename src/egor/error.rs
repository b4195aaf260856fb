use std::error::Error as StdError;

/// Implemented by every error the library hands back to callers.
pub trait Error: StdError + Send {}

impl Error for crate::configuration::Error {}
impl Error for crate::meta::Error {}
impl Error for crate::testcase::NotFound {}
