//! Adder configuration.

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Kernel source path used when none is configured.
pub const DEFAULT_KERNEL_PATH: &str = "./add_kernel.cl";

/// Entry point the kernel source is expected to define.
pub const DEFAULT_ENTRY_POINT: &str = "_vec_add_float";

/// Adder configuration: where the kernel source lives and which entry
/// point to resolve after compilation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Filesystem path to the kernel source file.
    pub kernel_path: PathBuf,
    /// Name of the kernel entry point.
    pub entry_point: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kernel_path: PathBuf::from(DEFAULT_KERNEL_PATH),
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
        }
    }
}

impl Config {
    /// Start building a configuration from the defaults.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Reject empty paths and entry-point names.
    pub fn validate(&self) -> Result<()> {
        if self.kernel_path.as_os_str().is_empty() {
            return Err(Error::config("kernel_path must not be empty"));
        }
        if self.entry_point.is_empty() {
            return Err(Error::config("entry_point must not be empty"));
        }
        Ok(())
    }
}

/// Builder for [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Builder seeded with the default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the kernel source path.
    pub fn kernel_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.kernel_path = path.into();
        self
    }

    /// Set the kernel entry-point name.
    pub fn entry_point<S: Into<String>>(mut self, name: S) -> Self {
        self.config.entry_point = name.into();
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
