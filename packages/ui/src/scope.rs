//! Per-screen lifecycle flags.
//!
//! A [`ScreenScope`] tracks two things for one mounted screen:
//!
//! - **in flight**: at most one network action runs at a time. A second submit
//!   (e.g. a double click on "delete") while the first is pending is refused,
//!   which is the same as disabling the control while it is busy.
//! - **mounted**: once the screen is left, responses that arrive late are
//!   dropped instead of updating state nobody displays.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ScreenScope {
    mounted: Arc<AtomicBool>,
    busy: Arc<AtomicBool>,
}

impl Default for ScreenScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenScope {
    pub fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Claim the in-flight slot. `None` while another action holds it.
    pub fn begin(&self) -> Option<BusyGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard {
                busy: Arc::clone(&self.busy),
            })
    }
}

/// Releases the in-flight slot when dropped.
#[derive(Debug)]
pub struct BusyGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
