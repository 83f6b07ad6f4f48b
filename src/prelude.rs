//! Commonly used types.

pub use crate::adder::VectorAdder;
pub use crate::backend::ComputeBackend;
pub use crate::config::{Config, ConfigBuilder};
pub use crate::error::{Error, Result};
pub use crate::source::KernelSource;

#[cfg(feature = "opencl")]
pub use crate::session::ClSession;
