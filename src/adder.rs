//! Adder lifecycle: construction, refresh, and the addition request path.

use crate::backend::ComputeBackend;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::source::KernelSource;

use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

#[cfg(feature = "opencl")]
use crate::session::ClSession;

/// GPU-backed elementwise adder for `f32` vectors.
///
/// Owns one compute session built from a kernel source file. The session
/// can be torn down and rebuilt with [`refresh`](Self::refresh) — after a
/// device loss, or to pick up an edited kernel source — without
/// discarding the adder.
pub struct VectorAdder<B: ComputeBackend> {
    config: Config,
    session: Option<B>,
}

impl<B: ComputeBackend> VectorAdder<B> {
    /// Validate `config` and bootstrap an adder over backend `B`.
    pub fn with_backend(config: Config) -> Result<Self> {
        config.validate()?;
        let mut adder = Self {
            config,
            session: None,
        };
        adder.refresh()?;
        Ok(adder)
    }

    /// Release the current session, reload the kernel source from the
    /// configured path, and bootstrap a new session.
    ///
    /// On failure the adder holds no session and [`add`](Self::add)
    /// returns [`Error::NotInitialized`] until a later refresh succeeds.
    pub fn refresh(&mut self) -> Result<()> {
        // Full release before any new acquisition.
        self.session = None;
        let source = KernelSource::load(self.config.kernel_path.clone())?;
        let session = B::bootstrap(source, &self.config.entry_point)?;
        debug!(device = session.device_name(), "compute session ready");
        self.session = Some(session);
        Ok(())
    }

    /// Add `left` and `right` elementwise on the device and return the
    /// sums.
    ///
    /// Synchronous: blocks until the device finishes and the result has
    /// been copied back to host memory. Fails with [`Error::Validation`]
    /// on a length mismatch, before any device interaction. The three
    /// device buffers live only for the duration of the call.
    pub fn add(&mut self, left: &[f32], right: &[f32]) -> Result<Vec<f32>> {
        if left.len() != right.len() {
            return Err(Error::validation(format!(
                "length mismatch: left has {} elements, right has {}",
                left.len(),
                right.len()
            )));
        }
        let session = self.session.as_mut().ok_or(Error::NotInitialized)?;
        if left.is_empty() {
            return Ok(Vec::new());
        }

        let len = left.len();
        let left_buf = session.alloc_input(left)?;
        let right_buf = session.alloc_input(right)?;
        let result_buf = session.alloc_output(len)?;
        session.dispatch(&left_buf, &right_buf, &result_buf, len)?;
        session.read_blocking(&result_buf, len)
    }

    /// Store a new kernel source path.
    ///
    /// The live session is untouched; the path takes effect on the next
    /// [`refresh`](Self::refresh).
    pub fn set_kernel_path<P: Into<PathBuf>>(&mut self, path: P) {
        self.config.kernel_path = path.into();
    }

    /// Whether a bootstrapped session is live.
    pub fn is_ready(&self) -> bool {
        self.session.is_some()
    }

    /// Name of the bootstrapped device, or `None` without a session.
    pub fn device_name(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.device_name())
    }

    /// Currently configured kernel source path.
    pub fn kernel_path(&self) -> &Path {
        &self.config.kernel_path
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(feature = "opencl")]
impl VectorAdder<ClSession> {
    /// Bootstrap an OpenCL-backed adder from a kernel source path, using
    /// the default entry point.
    pub fn new<P: Into<PathBuf>>(kernel_path: P) -> Result<Self> {
        Self::with_config(Config::builder().kernel_path(kernel_path).build()?)
    }

    /// Bootstrap an OpenCL-backed adder from `config`.
    pub fn with_config(config: Config) -> Result<Self> {
        Self::with_backend(config)
    }
}

impl<B: ComputeBackend> fmt::Debug for VectorAdder<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorAdder")
            .field("config", &self.config)
            .field("ready", &self.is_ready())
            .finish_non_exhaustive()
    }
}
