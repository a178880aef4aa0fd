//! Shared panel handle and the one-shot restart latch.
//!
//! The TUI event loop is the only writer of panel state; the game driver
//! reads it from its own task or thread on its own cadence. `SharedPanel`
//! wraps the state in `Arc<RwLock<..>>` so both sides can hold a clone, and
//! keeps the restart signal in a lock-free atomic latch beside it.

use crate::driver::DriverHandle;
use crate::panel::{PanelEvent, PanelState};
use crate::{LayoutName, Side};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// One-shot restart request signal.
///
/// Edge-triggered, consume-on-read: `request` arms the latch, `take`
/// returns whether it was armed and clears it in one atomic step. Repeated
/// requests before a take collapse into a single pending request.
#[derive(Debug, Default)]
pub struct RestartLatch {
    pending: AtomicBool,
}

impl RestartLatch {
    /// Creates an unarmed latch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the latch. Arming an already-armed latch is a no-op.
    pub fn request(&self) {
        self.pending.store(true, Ordering::Relaxed);
    }

    /// Reads and clears the latch atomically.
    ///
    /// Returns `true` exactly once per arming since the last take.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::Relaxed)
    }

    /// Peeks without clearing. Rendering only; consumers must use `take`.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Relaxed)
    }
}

/// Cheap copy of the panel state for rendering and driver reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSnapshot {
    /// Currently selected layout name.
    pub selected: LayoutName,
    /// Live placement buffer.
    pub placement: String,
    /// Live promotion buffer.
    pub promotion: String,
    /// Current bottom-side selection.
    pub side: Side,
}

/// Thread-safe, cloneable handle to one panel instance.
///
/// All clones observe the same state. Locks are held only for the duration
/// of a single read or event application, never across an await point.
#[derive(Debug, Clone, Default)]
pub struct SharedPanel {
    state: Arc<RwLock<PanelState>>,
    restart: Arc<RestartLatch>,
}

impl SharedPanel {
    /// Wraps a panel state for shared access.
    pub fn new(state: PanelState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
            restart: Arc::new(RestartLatch::new()),
        }
    }

    /// Applies one event to the panel state.
    pub fn apply(&self, event: PanelEvent) {
        self.state
            .write()
            .expect("panel state lock poisoned")
            .apply(event);
    }

    /// Arms the restart latch.
    pub fn request_restart(&self) {
        self.restart.request();
    }

    /// Whether a restart request is pending (not consuming).
    pub fn restart_pending(&self) -> bool {
        self.restart.is_pending()
    }

    /// Takes a snapshot of selection, buffers, and side for rendering.
    pub fn snapshot(&self) -> PanelSnapshot {
        let state = self.state.read().expect("panel state lock poisoned");
        PanelSnapshot {
            selected: state.selected(),
            placement: state.placement_buf().to_string(),
            promotion: state.promotion_buf().to_string(),
            side: state.side(),
        }
    }

    /// Runs a closure against the locked state.
    ///
    /// For reads that would be wasteful as full snapshots (for example a
    /// single mapping entry).
    pub fn with_state<R>(&self, f: impl FnOnce(&PanelState) -> R) -> R {
        f(&self.state.read().expect("panel state lock poisoned"))
    }

    /// Creates a driver handle sharing this panel's state and latch.
    pub fn driver(&self) -> DriverHandle {
        DriverHandle::new(Arc::clone(&self.state), Arc::clone(&self.restart))
    }
}
