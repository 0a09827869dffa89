//! Core pinning and core counting.

use std::io;

/// Online logical processors.
pub fn cpu_count() -> usize {
    #[cfg(unix)]
    {
        // SAFETY: sysconf has no preconditions.
        let n = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
        if n > 0 {
            return n as usize;
        }
    }
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Pin the calling thread to logical core `core`.
///
/// # Errors
///
/// Returns the OS error when the core does not exist or is not permitted,
/// and `Unsupported` on platforms without thread affinity.
pub fn pin_current_thread(core: usize) -> io::Result<()> {
    #[cfg(any(target_os = "linux", target_os = "android"))]
    {
        if core >= libc::CPU_SETSIZE as usize {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("core {} exceeds CPU_SETSIZE", core),
            ));
        }
        // SAFETY: we pass a correctly-sized cpu_set_t to sched_setaffinity
        // for the calling thread (tid 0).
        let rc = unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set)
        };
        if rc != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }

    #[cfg(not(any(target_os = "linux", target_os = "android")))]
    {
        let _ = core;
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "cpu core affinity is not usable on this platform",
        ))
    }
}
