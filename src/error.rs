use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Failed to write to the console: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read settings from {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid settings in {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unknown demo '{0}' (expected one of: {known})", known = crate::catalog::Demo::names().join(", "))]
    UnknownDemo(String),
}

impl PatternError {
    pub fn config_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }

    pub fn config_parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(matches!(err, PatternError::Io(_)));
        assert!(err.to_string().contains("closed"));
    }

    #[test]
    fn test_unknown_demo_lists_known_names() {
        let err = PatternError::UnknownDemo("singleton".to_string());
        let message = err.to_string();
        assert!(message.contains("singleton"));
        assert!(message.contains("adapter"));
        assert!(message.contains("template-method"));
    }

    #[test]
    fn test_config_read_mentions_path() {
        let err = PatternError::config_read(
            "missing.toml",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().contains("missing.toml"));
    }
}
