//! A live accelerator context and the workload runners that use it.

use std::io::Write;
use std::ptr;

use opencl3::command_queue::{CommandQueue, CL_QUEUE_PROFILING_ENABLE};
use opencl3::context::Context;
use opencl3::device::{Device, CL_DEVICE_TYPE_GPU};
use opencl3::error_codes::ClError;
use opencl3::kernel::{ExecuteKernel, Kernel};
use opencl3::memory::{Buffer, ClMem, CL_MEM_READ_ONLY, CL_MEM_READ_WRITE, CL_MEM_WRITE_ONLY};
use opencl3::platform::get_platforms;
use opencl3::program::Program;
use opencl3::types::{cl_device_id, cl_mem, CL_BLOCKING};

use super::device_info::{compute_global_size, context_properties, select_device};
use super::programs::{program_source, BUILD_OPTIONS};
use super::workload::{self, KernelResult, NumericType, Workload};
use super::{DeviceInfo, DeviceQuery, NdRange};
use crate::output::{json, terminal, OutputFormat};
use crate::{Error, Result};

/// Map a failed runtime call into [`Error::Api`] tagged with its call site.
macro_rules! cl_check {
    ($call:expr) => {
        $call.map_err(|e: ClError| Error::Api {
            call: stringify!($call),
            file: file!(),
            line: line!(),
            code: e.0,
        })
    };
}

/// Argument passed to a kernel dispatch.
#[derive(Debug, Clone, Copy)]
enum KernelArg {
    Mem(cl_mem),
    Int(i32),
    Float(f32),
    Double(f64),
    Local(usize),
}

/// Context, profiling queue and cached properties of one GPU device.
pub struct DeviceSession {
    device_id: cl_device_id,
    context: Context,
    queue: CommandQueue,
    info: DeviceInfo,
}

impl std::fmt::Debug for DeviceSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceSession")
            .field("info", &self.info)
            .finish()
    }
}

impl DeviceSession {
    /// Open GPU `index` on the first platform that exposes any GPU.
    ///
    /// # Errors
    ///
    /// [`Error::NoGpuDevice`] when no platform has a GPU,
    /// [`Error::InvalidDeviceIndex`] when `index` is out of range, or any
    /// failing runtime call.
    pub fn open(index: usize) -> Result<Self> {
        let platforms = cl_check!(get_platforms())?;
        let (platform, devices) = platforms
            .iter()
            .find_map(|p| {
                p.get_devices(CL_DEVICE_TYPE_GPU)
                    .ok()
                    .filter(|d| !d.is_empty())
                    .map(|d| (p, d))
            })
            .ok_or(Error::NoGpuDevice)?;

        let device_id = *select_device(&devices, index)?;
        let device = Device::new(device_id);
        let query = DeviceQuery {
            name: cl_check!(device.name())?,
            vendor: cl_check!(device.vendor())?,
            driver_version: cl_check!(device.driver_version())?,
            extensions: cl_check!(device.extensions())?,
            compute_units: cl_check!(device.max_compute_units())?,
            max_work_item_sizes: cl_check!(device.max_work_item_sizes())?,
            max_mem_alloc_size: cl_check!(device.max_mem_alloc_size())?,
            global_mem_size: cl_check!(device.global_mem_size())?,
            max_clock_frequency: cl_check!(device.max_clock_frequency())?,
        };
        let info = DeviceInfo::from_query(&query);

        let props = context_properties(platform.id() as isize, &info.extensions);
        let context = cl_check!(Context::from_devices(
            &[device_id],
            &props,
            None,
            ptr::null_mut()
        ))?;
        let queue = cl_check!(CommandQueue::create_default_with_properties(
            &context,
            CL_QUEUE_PROFILING_ENABLE,
            0
        ))?;

        Ok(Self {
            device_id,
            context,
            queue,
            info,
        })
    }

    /// Cached device properties.
    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    /// Write the identity lines.
    pub fn print_device_info<W: Write>(&self, out: &mut W) -> Result<()> {
        for line in self.info.identity_lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// Build the embedded program `name` for this device.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownProgram`] for an unknown name, [`Error::Build`] with
    /// the driver's log when compilation fails.
    pub fn build_program(&self, name: &str) -> Result<Program> {
        let source = program_source(name)?;
        let mut program = cl_check!(Program::create_from_source(&self.context, source))?;
        if program.build(&[self.device_id], BUILD_OPTIONS).is_err() {
            let log = program.get_build_log(self.device_id).unwrap_or_default();
            return Err(Error::Build {
                program: name.to_string(),
                options: BUILD_OPTIONS,
                log,
            });
        }
        Ok(program)
    }

    /// Dispatch `kernel` once untimed, then `iters` times with profiling,
    /// and return the mean device time in microseconds.
    ///
    /// `global` is rounded down to a multiple of `local` first.
    fn run_kernel(
        &self,
        kernel: &Kernel,
        args: &[KernelArg],
        global: &NdRange,
        local: &NdRange,
        iters: usize,
    ) -> Result<f64> {
        if global.dimension() != 1 {
            return Err(Error::UnsupportedDimension(global.dimension()));
        }
        let global = NdRange::divide_down(global, local)?;

        self.dispatch(kernel, args, &global, local)?;
        cl_check!(self.queue.finish())?;

        let mut used = 0.0;
        for _ in 0..iters {
            let event = self.dispatch(kernel, args, &global, local)?;
            cl_check!(event.wait())?;
            let start = cl_check!(event.profiling_command_start())?;
            let end = cl_check!(event.profiling_command_end())?;
            used += end.saturating_sub(start) as f64 / 1000.0;
        }
        Ok(used / iters.max(1) as f64)
    }

    fn dispatch(
        &self,
        kernel: &Kernel,
        args: &[KernelArg],
        global: &NdRange,
        local: &NdRange,
    ) -> Result<opencl3::event::Event> {
        let mut exec = ExecuteKernel::new(kernel);
        // SAFETY: argument types match the kernel signatures in the embedded
        // programs and every buffer outlives the dispatch.
        unsafe {
            for arg in args {
                match arg {
                    KernelArg::Mem(mem) => exec.set_arg(mem),
                    KernelArg::Int(v) => exec.set_arg(v),
                    KernelArg::Float(v) => exec.set_arg(v),
                    KernelArg::Double(v) => exec.set_arg(v),
                    KernelArg::Local(size) => exec.set_arg_local_buffer(*size),
                };
            }
            exec.set_global_work_sizes(global.as_slice())
                .set_local_work_sizes(local.as_slice());
            cl_check!(exec.enqueue_nd_range(&self.queue))
        }
    }

    /// Create the kernels of `workload` at `width`, in [`Workload::kernel_names`] order.
    fn kernels(&self, program: &Program, workload: Workload, width: usize) -> Result<Vec<Kernel>> {
        workload
            .kernel_names(width)
            .iter()
            .map(|name| cl_check!(Kernel::create(program, name)))
            .collect()
    }

    /// Work-group size: the device limit clamped by every kernel's own limit.
    fn block_size(&self, kernels: &[Vec<Kernel>]) -> Result<usize> {
        let mut block = self.info.max_wg_size;
        for kernel in kernels.iter().flatten() {
            block = block.min(cl_check!(kernel.get_work_group_size(self.device_id))?);
        }
        Ok(block.max(1))
    }

    fn buffer<T>(&self, flags: u64, count: usize) -> Result<Buffer<T>> {
        // SAFETY: no host pointer is passed, so the runtime owns the storage.
        unsafe { cl_check!(Buffer::<T>::create(&self.context, flags, count, ptr::null_mut())) }
    }

    /// Run every variant of `workload`, writing results to `out`.
    ///
    /// Half and double compute are skipped with a note on stderr when the
    /// device lacks them.
    pub fn run<W: Write>(
        &self,
        workload: Workload,
        format: OutputFormat,
        out: &mut W,
    ) -> Result<Vec<KernelResult>> {
        if let Workload::Compute(ty) = workload {
            if !ty.supported(&self.info) {
                eprintln!("{} not supported, skip", ty.name());
                return Ok(Vec::new());
            }
        }
        if format == OutputFormat::Text {
            writeln!(out, "{}", terminal::format_kernel_header(&workload.title()))?;
        }

        let program = self.build_program(workload.program())?;
        let kernels = workload
            .widths()
            .iter()
            .map(|&w| self.kernels(&program, workload, w))
            .collect::<Result<Vec<_>>>()?;
        let block = self.block_size(&kernels)?;

        let mut results = Vec::with_capacity(kernels.len());
        for (&width, variant_kernels) in workload.widths().iter().zip(&kernels) {
            let value = match workload {
                Workload::LocalBandwidth => self.local_bandwidth(&variant_kernels[0], width, block)?,
                Workload::GlobalBandwidth => self.global_bandwidth(variant_kernels, width, block)?,
                Workload::Compute(ty) => self.compute(&variant_kernels[0], ty, block)?,
            };
            let result = KernelResult {
                workload,
                variant: workload.variant(width),
                value,
            };
            match format {
                OutputFormat::Text => writeln!(
                    out,
                    "{}",
                    terminal::format_kernel_line(&result.variant, result.value)
                )?,
                OutputFormat::Json => writeln!(out, "{}", json::to_json(&result)?)?,
            }
            out.flush()?;
            results.push(result);
        }
        Ok(results)
    }

    fn local_bandwidth(&self, kernel: &Kernel, width: usize, block: usize) -> Result<f64> {
        let nr_elems = workload::LOCAL_ELEMS;
        let seed: Vec<i32> = (0..nr_elems as i32).collect();
        let mut data = self.buffer::<i32>(CL_MEM_READ_WRITE, nr_elems)?;
        // SAFETY: `seed` has exactly `nr_elems` elements and the write blocks.
        unsafe {
            cl_check!(self.queue.enqueue_write_buffer(&mut data, CL_BLOCKING, 0, seed.as_slice(), &[]))?;
        }

        let args = [
            KernelArg::Mem(data.get()),
            KernelArg::Local(block * 4 * width * 6),
        ];
        let used = self.run_kernel(
            kernel,
            &args,
            &NdRange::d1(nr_elems / width),
            &NdRange::d1(block),
            Workload::LocalBandwidth.iters(),
        )?;
        Ok(workload::local_gbps(nr_elems, used))
    }

    fn global_bandwidth(&self, kernels: &[Kernel], width: usize, block: usize) -> Result<f64> {
        let nr_elems = workload::global_elems(&self.info);
        let mut src = self.buffer::<f32>(CL_MEM_READ_ONLY, nr_elems)?;
        let dst = self.buffer::<f32>(CL_MEM_WRITE_ONLY, nr_elems / workload::FETCH_PER_WI)?;
        let seed = vec![1.0f32; workload::SEED_CHUNK_ELEMS.min(nr_elems)];
        for (offset, len) in workload::seed_chunks(nr_elems) {
            // SAFETY: every range lies inside `src` and each write blocks.
            unsafe {
                cl_check!(self.queue.enqueue_write_buffer(
                    &mut src,
                    CL_BLOCKING,
                    offset * std::mem::size_of::<f32>(),
                    &seed[..len],
                    &[]
                ))?;
            }
        }

        let args = [KernelArg::Mem(src.get()), KernelArg::Mem(dst.get())];
        let global = NdRange::d1(nr_elems / width / workload::FETCH_PER_WI);
        let local = NdRange::d1(block);
        let mut best = f64::INFINITY;
        for kernel in kernels {
            let used = self.run_kernel(kernel, &args, &global, &local, Workload::GlobalBandwidth.iters())?;
            best = best.min(used);
        }
        Ok(workload::global_gbps(nr_elems, best))
    }

    fn compute(&self, kernel: &Kernel, ty: NumericType, block: usize) -> Result<f64> {
        let global = compute_global_size(&self.info, ty.size());
        let dst = self.buffer::<u8>(CL_MEM_WRITE_ONLY, global * ty.size())?;
        let a = match ty {
            NumericType::Int => KernelArg::Int(1),
            NumericType::Float | NumericType::Half => KernelArg::Float(1.3),
            NumericType::Double => KernelArg::Double(1.3),
        };

        let args = [KernelArg::Mem(dst.get()), a];
        let used = self.run_kernel(
            kernel,
            &args,
            &NdRange::d1(global),
            &NdRange::d1(block),
            Workload::Compute(ty).iters(),
        )?;
        Ok(workload::compute_gflops(global, used))
    }
}
