//! Capability interface over the device compute API.

use crate::error::Result;
use crate::source::KernelSource;

/// One compute binding: session bootstrap, per-call buffers, kernel
/// dispatch, and blocking readback.
///
/// The adder drives the whole session lifecycle through this trait so
/// that raw handle manipulation stays inside a single adapter module.
/// Release is ownership-based: the session and its buffers free their
/// handles on drop, and a buffer never outlives the call that made it.
pub trait ComputeBackend: Sized {
    /// Device-resident buffer handle.
    type Buffer;

    /// Build a session: select a platform and GPU device, create the
    /// execution context and command queue, compile `source`, and resolve
    /// `entry_point` in the compiled program.
    ///
    /// Each step's success is a precondition for the next; on failure
    /// nothing is retained.
    fn bootstrap(source: KernelSource, entry_point: &str) -> Result<Self>;

    /// Allocate a read-only device buffer initialized by copying `data`.
    fn alloc_input(&self, data: &[f32]) -> Result<Self::Buffer>;

    /// Allocate an uninitialized write-only device buffer of `len` elements.
    fn alloc_output(&self, len: usize) -> Result<Self::Buffer>;

    /// Bind `left`, `right`, `result` as kernel arguments 0, 1, 2 and
    /// enqueue the kernel over a 1-D index space of exactly `work_items`
    /// work-items.
    fn dispatch(
        &mut self,
        left: &Self::Buffer,
        right: &Self::Buffer,
        result: &Self::Buffer,
        work_items: usize,
    ) -> Result<()>;

    /// Blocking copy of `result` into a fresh host vector of `len`
    /// elements, then drain the command queue.
    fn read_blocking(&mut self, result: &Self::Buffer, len: usize) -> Result<Vec<f32>>;

    /// Human-readable name of the selected device.
    fn device_name(&self) -> &str;

    /// The kernel source this session was built from.
    fn source(&self) -> &KernelSource;
}
