//! Shared test support: an in-process backend and kernel file fixtures.

// Each test binary compiles its own copy; not all of them use every item.
#![allow(dead_code)]

use cladd::{ComputeBackend, Error, KernelSource, Result};

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Kernel source accepted by [`HostBackend`] and by a real OpenCL compiler.
pub const GOOD_KERNEL: &str = "__kernel void _vec_add_float(__global const float *a,
                             __global const float *b,
                             __global float *result) {
    size_t i = get_global_id(0);
    result[i] = a[i] + b[i];
}
";

/// Source that no compiler accepts.
pub const BAD_KERNEL: &str = "__kernel void _vec_add_float(__global const float *a) {
    this is not valid kernel source;
}
";

/// Write `text` to `<dir>/add_kernel.cl` and return the path.
pub fn write_kernel(dir: &TempDir, text: &str) -> PathBuf {
    let path = dir.path().join("add_kernel.cl");
    fs::write(&path, text).unwrap();
    path
}

/// Device-free [`ComputeBackend`] that computes additions on the host.
///
/// Mimics the real backend's failure surface: source without a `__kernel`
/// qualifier fails with a diagnostic log, an absent entry-point name fails
/// the resolution step, and zero-length buffer allocation fails with the
/// `CL_INVALID_BUFFER_SIZE` status. Buffers sit behind a `RefCell` because
/// dispatch receives them by shared reference.
pub struct HostBackend {
    source: KernelSource,
}

pub struct HostBuffer(RefCell<Vec<f32>>);

impl ComputeBackend for HostBackend {
    type Buffer = HostBuffer;

    fn bootstrap(source: KernelSource, entry_point: &str) -> Result<Self> {
        if !source.text().contains("__kernel") {
            return Err(Error::compile(format!(
                "{}:1:1: error: no __kernel function defined",
                source.path().display()
            )));
        }
        if !source.text().contains(entry_point) {
            return Err(Error::compile(format!(
                "entry point '{}' unavailable",
                entry_point
            )));
        }
        Ok(Self { source })
    }

    fn alloc_input(&self, data: &[f32]) -> Result<Self::Buffer> {
        if data.is_empty() {
            // clCreateBuffer rejects size 0 (CL_INVALID_BUFFER_SIZE).
            return Err(Error::device(-61, "input buffer allocation"));
        }
        Ok(HostBuffer(RefCell::new(data.to_vec())))
    }

    fn alloc_output(&self, len: usize) -> Result<Self::Buffer> {
        if len == 0 {
            return Err(Error::device(-61, "output buffer allocation"));
        }
        Ok(HostBuffer(RefCell::new(vec![0.0; len])))
    }

    fn dispatch(
        &mut self,
        left: &Self::Buffer,
        right: &Self::Buffer,
        result: &Self::Buffer,
        work_items: usize,
    ) -> Result<()> {
        let left = left.0.borrow();
        let right = right.0.borrow();
        let mut result = result.0.borrow_mut();
        for i in 0..work_items {
            result[i] = left[i] + right[i];
        }
        Ok(())
    }

    fn read_blocking(&mut self, result: &Self::Buffer, len: usize) -> Result<Vec<f32>> {
        Ok(result.0.borrow()[..len].to_vec())
    }

    fn device_name(&self) -> &str {
        "host simulation"
    }

    fn source(&self) -> &KernelSource {
        &self.source
    }
}
