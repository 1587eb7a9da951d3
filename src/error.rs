use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the persisted profile slot.
#[derive(Error, Debug)]
pub enum ProfileError
{
    #[error("failed to read profile {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write profile {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("profile {path} is not valid TOML: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to encode profile: {0}")]
    Encode(#[from] toml::ser::Error),
}
