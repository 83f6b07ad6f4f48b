//! OpenCL compute session management.
//!
//! [`ClSession`] is the concrete [`ComputeBackend`] adapter and the only
//! module that touches raw OpenCL handles.

use crate::backend::ComputeBackend;
use crate::error::{Error, Result};
use crate::source::KernelSource;

use opencl3::command_queue::CommandQueue;
use opencl3::context::Context;
use opencl3::device::{Device, CL_DEVICE_TYPE_GPU};
use opencl3::error_codes::{ClError, CL_DEVICE_NOT_FOUND};
use opencl3::kernel::{ExecuteKernel, Kernel};
use opencl3::memory::{Buffer, CL_MEM_COPY_HOST_PTR, CL_MEM_READ_ONLY, CL_MEM_WRITE_ONLY};
use opencl3::platform::{get_platforms, Platform};
use opencl3::program::Program;
use opencl3::types::{cl_float, CL_BLOCKING};

use std::ffi::c_void;
use std::fmt;
use std::ptr;
use tracing::debug;

/// Sole point where compute API status codes become errors; everything
/// else treats the API as fail-fast.
fn check<T>(result: std::result::Result<T, ClError>, context: &'static str) -> Result<T> {
    result.map_err(|e| Error::device(e.0, context))
}

/// Number of GPU devices visible on the first platform.
///
/// Lightweight probe mirroring the bootstrap enumeration order; returns 0
/// when no OpenCL runtime, platform, or GPU device is available (never
/// errors).
pub fn gpu_device_count() -> usize {
    let platforms = match get_platforms() {
        Ok(platforms) => platforms,
        Err(_) => return 0,
    };
    let platform = match platforms.first() {
        Some(platform) => platform,
        None => return 0,
    };
    platform
        .get_devices(CL_DEVICE_TYPE_GPU)
        .map(|ids| ids.len())
        .unwrap_or(0)
}

/// A live OpenCL session: platform, device, context, queue, and the
/// compiled kernel, built in that order from one kernel source file.
///
/// `Debug` is implemented manually because the OpenCL handle types from
/// `opencl3` don't implement `Debug`.
pub struct ClSession {
    // Fields drop in declaration order: kernel before program before
    // queue before context.
    kernel: Kernel,
    program: Program,
    queue: CommandQueue,
    context: Context,
    _device: Device,
    _platform: Platform,
    source: KernelSource,
    device_name: String,
}

// SAFETY: the wrapped handles are opaque pointers owned by the OpenCL
// runtime and are not tied to the creating thread. Concurrent use is
// excluded by the &mut receivers on dispatch and readback.
unsafe impl Send for ClSession {}

impl fmt::Debug for ClSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClSession")
            .field("device_name", &self.device_name)
            .field("source_len", &self.source.len())
            .finish_non_exhaustive()
    }
}

impl ComputeBackend for ClSession {
    type Buffer = Buffer<cl_float>;

    fn bootstrap(source: KernelSource, entry_point: &str) -> Result<Self> {
        let platforms = check(get_platforms(), "platform enumeration")?;
        let platform = platforms
            .into_iter()
            .next()
            .ok_or_else(|| Error::device(CL_DEVICE_NOT_FOUND, "no compute platform available"))?;

        let device_ids = check(platform.get_devices(CL_DEVICE_TYPE_GPU), "device enumeration")?;
        let device_id = device_ids
            .first()
            .copied()
            .ok_or_else(|| Error::device(CL_DEVICE_NOT_FOUND, "no GPU device on first platform"))?;
        let device = Device::new(device_id);
        let device_name = device.name().unwrap_or_default().trim().to_string();
        debug!(device = %device_name, "selected compute device");

        let context = check(Context::from_device(&device), "context creation")?;

        // OpenCL 1.2 queue API; the 2.0 properties variant is unavailable
        // on macOS.
        #[allow(deprecated)]
        let queue = check(
            CommandQueue::create_default(&context, 0),
            "command queue creation",
        )?;

        let mut program = check(
            Program::create_from_source(&context, source.text()),
            "program creation",
        )?;
        if let Err(status) = program.build(&[device_id], "") {
            let mut log = program.get_build_log(device_id).unwrap_or_default();
            if log.trim().is_empty() {
                log = format!("build failed with status {}", status);
            }
            return Err(Error::compile(log));
        }

        let kernel = Kernel::create(&program, entry_point).map_err(|e| {
            Error::compile(format!("entry point '{}' unavailable: {}", entry_point, e))
        })?;
        debug!(entry_point, source_bytes = source.len(), "kernel ready");

        Ok(Self {
            kernel,
            program,
            queue,
            context,
            _device: device,
            _platform: platform,
            source,
            device_name,
        })
    }

    fn alloc_input(&self, data: &[f32]) -> Result<Self::Buffer> {
        let buffer = unsafe {
            Buffer::<cl_float>::create(
                &self.context,
                CL_MEM_READ_ONLY | CL_MEM_COPY_HOST_PTR,
                data.len(),
                data.as_ptr() as *mut c_void,
            )
        };
        check(buffer, "input buffer allocation")
    }

    fn alloc_output(&self, len: usize) -> Result<Self::Buffer> {
        let buffer = unsafe {
            Buffer::<cl_float>::create(&self.context, CL_MEM_WRITE_ONLY, len, ptr::null_mut())
        };
        check(buffer, "output buffer allocation")
    }

    fn dispatch(
        &mut self,
        left: &Self::Buffer,
        right: &Self::Buffer,
        result: &Self::Buffer,
        work_items: usize,
    ) -> Result<()> {
        let event = unsafe {
            ExecuteKernel::new(&self.kernel)
                .set_arg(left)
                .set_arg(right)
                .set_arg(result)
                .set_global_work_size(work_items)
                .enqueue_nd_range(&self.queue)
        };
        check(event, "kernel enqueue").map(|_| ())
    }

    fn read_blocking(&mut self, result: &Self::Buffer, len: usize) -> Result<Vec<f32>> {
        let mut host = vec![0.0f32; len];
        let read = unsafe {
            self.queue
                .enqueue_read_buffer(result, CL_BLOCKING, 0, &mut host, &[])
        };
        check(read, "result readback")?;
        check(self.queue.finish(), "queue drain")?;
        Ok(host)
    }

    fn device_name(&self) -> &str {
        &self.device_name
    }

    fn source(&self) -> &KernelSource {
        &self.source
    }
}
