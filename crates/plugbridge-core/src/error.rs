//! Error types shared by every conversion target.

use std::path::{Path, PathBuf};

/// Errors raised while parsing headers, loading options, or touching the
/// filesystem.
///
/// Conversion itself never fails; a missing description or an empty name is
/// resolved with a fallback value instead.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("io error at `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a directory: `{path}`")]
    NotADirectory { path: PathBuf },

    #[error("invalid frontmatter: {reason}")]
    InvalidFrontmatter { reason: String },

    #[error("unsupported frontmatter value for key `{key}`")]
    UnsupportedField { key: String },

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

impl BridgeError {
    /// Attach the offending path to an I/O error.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, BridgeError>;
