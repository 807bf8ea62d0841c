// SPDX-License-Identifier: MPL-2.0
//! Crate-level error for configuration, file I/O and client setup.
//!
//! Catalog lookups have their own taxonomy in [`crate::domain::error`];
//! this type covers everything around them.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The HTTP client could not be built.
    #[error("Client Error: {0}")]
    Client(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Client(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
