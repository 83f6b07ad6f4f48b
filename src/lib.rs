//! cladd - GPU-offloaded elementwise vector addition over OpenCL.
//!
//! Wraps one compute session (platform, device, context, command queue,
//! compiled kernel) in a reusable [`VectorAdder`] whose lifecycle is
//! independent of the calling code: build it once from a kernel source
//! file, call [`add`](VectorAdder::add) synchronously per request, and
//! [`refresh`](VectorAdder::refresh) to rebuild after a device loss or a
//! kernel source edit.
//!
//! # Quick Start
//!
//! ```no_run
//! # #[cfg(feature = "opencl")]
//! # fn example() -> cladd::Result<()> {
//! use cladd::VectorAdder;
//!
//! let mut adder = VectorAdder::new("kernels/add_kernel.cl")?;
//! let sum = adder.add(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0])?;
//! assert_eq!(sum, vec![5.0, 7.0, 9.0]);
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **`opencl`** — the OpenCL backend (`ClSession`). Off by default so
//!   the crate builds on machines without an OpenCL ICD loader; custom
//!   [`ComputeBackend`] implementations work without it.

// Lint configuration
#![warn(missing_docs, missing_debug_implementations)]

pub mod adder;
pub mod backend;
pub mod config;
pub mod error;
pub mod prelude;
pub mod source;

#[cfg(feature = "opencl")]
pub mod session;

// Re-export key types at crate root
pub use adder::VectorAdder;
pub use backend::ComputeBackend;
pub use config::{Config, ConfigBuilder, DEFAULT_ENTRY_POINT, DEFAULT_KERNEL_PATH};
pub use error::{Error, Result};
pub use source::KernelSource;

#[cfg(feature = "opencl")]
pub use session::ClSession;
