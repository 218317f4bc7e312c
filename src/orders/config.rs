use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::EdiError;

/// Configuration for order-file output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdiConfig {
    /// Directory receiving the order files. The system temp directory when unset.
    pub output_dir: Option<PathBuf>,
}

impl EdiConfig {
    /// Configuration writing to `dir`.
    pub fn with_output_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: Some(dir.into()),
        }
    }

    /// Absolute output directory. Existence is not checked here.
    pub fn resolve_output_dir(&self) -> Result<PathBuf, EdiError> {
        let dir = match &self.output_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir.clone(),
            _ => std::env::temp_dir(),
        };
        std::path::absolute(&dir).map_err(|source| EdiError::Io { path: dir, source })
    }
}

/// Builder for [`EdiConfig`].
///
/// # Example
///
/// ```
/// use edi_orders::orders::EdiConfigBuilder;
///
/// let config = EdiConfigBuilder::new()
///     .output_dir("/srv/edi/out")
///     .build();
/// assert!(config.output_dir.is_some());
/// ```
#[derive(Debug, Default)]
pub struct EdiConfigBuilder {
    config: EdiConfig,
}

impl EdiConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory.
    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.output_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> EdiConfig {
        self.config
    }
}
