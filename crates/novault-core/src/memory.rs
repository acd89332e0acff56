//! Best-effort memory hardening for transient key material.
//!
//! Two measures:
//!
//! 1. **Core-dump prevention**: `setrlimit(RLIMIT_CORE, 0)`, so a crash
//!    mid-derivation never writes secret material to disk.
//! 2. **Memory locking**: `mlock()` on buffers holding seed or key bytes,
//!    so the OS cannot swap them out.
//!
//! Both are best-effort: containers and unprivileged users commonly forbid
//! these operations, so failures are logged through the `log` facade and
//! never abort a derivation.

use std::sync::atomic::{AtomicBool, Ordering};

use log::warn;
use zeroize::Zeroize;

static CORE_DUMPS_DISABLED: AtomicBool = AtomicBool::new(false);

/// Disable core dumps for the current process. Idempotent; returns `true`
/// once dumps are (or already were) disabled.
pub fn disable_core_dumps() -> bool {
    if CORE_DUMPS_DISABLED.swap(true, Ordering::SeqCst) {
        return true;
    }

    #[cfg(unix)]
    {
        unix::disable_core_dumps_impl()
    }

    #[cfg(not(unix))]
    {
        warn!("core dump prevention not supported on this platform");
        false
    }
}

/// Lock a memory region so it cannot be swapped to disk.
///
/// # Safety
///
/// `ptr` must point to a valid allocation of at least `len` bytes, and the
/// region must be unlocked via [`munlock`] before the allocation is freed
/// (process exit unlocks implicitly).
pub unsafe fn mlock(ptr: *const u8, len: usize) -> bool {
    if len == 0 {
        return true;
    }

    #[cfg(unix)]
    {
        unix::mlock_impl(ptr, len)
    }

    #[cfg(not(unix))]
    {
        let _ = (ptr, len);
        warn!("mlock not supported on this platform");
        false
    }
}

/// Unlock a region previously locked with [`mlock`].
///
/// # Safety
///
/// `ptr` and `len` must match a previous [`mlock`] call.
pub unsafe fn munlock(ptr: *const u8, len: usize) -> bool {
    if len == 0 {
        return true;
    }

    #[cfg(unix)]
    {
        unix::munlock_impl(ptr, len)
    }

    #[cfg(not(unix))]
    {
        let _ = (ptr, len);
        true
    }
}

/// Byte buffer for transient secret material: locked in memory while alive,
/// zeroized and then unlocked on drop.
///
/// The derivation pipeline keeps normalized key material (passphrase bytes,
/// the 64-byte mnemonic seed) in one of these for the duration of the
/// stretch.
pub struct SecretBuffer {
    data: Vec<u8>,
    locked: bool,
}

impl SecretBuffer {
    /// Copy `bytes` into a fresh locked buffer. The caller still owns (and
    /// should zeroize) its source copy.
    pub fn from_slice(bytes: &[u8]) -> Self {
        let data = bytes.to_vec();
        let locked = if data.is_empty() {
            true
        } else {
            // SAFETY: data is a live allocation of exactly data.len() bytes,
            // unlocked in Drop before the Vec is freed.
            unsafe { mlock(data.as_ptr(), data.len()) }
        };

        if !locked {
            warn!("mlock failed for {} bytes; key material may be swappable", data.len());
        }

        Self { data, locked }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

impl Drop for SecretBuffer {
    fn drop(&mut self) {
        // Vec::zeroize wipes the full capacity and truncates, so the region
        // bounds must be captured first for the munlock.
        let ptr = self.data.as_ptr();
        let len = self.data.len();
        self.data.zeroize();
        if self.locked && len != 0 {
            // SAFETY: matches the mlock call in from_slice; the allocation
            // is still live until the Vec drops after this.
            unsafe {
                munlock(ptr, len);
            }
        }
    }
}

#[cfg(unix)]
mod unix {
    use log::warn;

    pub fn disable_core_dumps_impl() -> bool {
        // SAFETY: setrlimit with RLIMIT_CORE=0 is a standard POSIX call.
        unsafe {
            let rlim = libc::rlimit {
                rlim_cur: 0,
                rlim_max: 0,
            };
            if libc::setrlimit(libc::RLIMIT_CORE, &rlim) != 0 {
                warn!(
                    "failed to disable core dumps: {}",
                    std::io::Error::last_os_error()
                );
                return false;
            }
        }
        true
    }

    pub unsafe fn mlock_impl(ptr: *const u8, len: usize) -> bool {
        libc::mlock(ptr as *const libc::c_void, len) == 0
    }

    pub unsafe fn munlock_impl(ptr: *const u8, len: usize) -> bool {
        libc::munlock(ptr as *const libc::c_void, len) == 0
    }
}
