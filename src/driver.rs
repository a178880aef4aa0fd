//! Accessor surface for the external game driver.
//!
//! The driver (board renderer, move logic, owned by a separate collaborator) polls
//! these four operations on its own loop cadence, typically once per frame.
//! Reads observe the latest committed write; there is no ordering guarantee
//! between a user edit and any particular poll beyond last-write-wins.

use crate::panel::{PanelState, RestartLatch};
use crate::Side;
use std::sync::{Arc, RwLock};

/// Cloneable, thread-safe handle exposing the panel to the game driver.
///
/// Obtained from [`SharedPanel::driver`](crate::panel::SharedPanel::driver).
/// String accessors return the *live* editor buffers, whether or not the
/// user has committed them: a poll between keystrokes sees exactly what the
/// editor panes currently show.
#[derive(Debug, Clone)]
pub struct DriverHandle {
    state: Arc<RwLock<PanelState>>,
    restart: Arc<RestartLatch>,
}

impl DriverHandle {
    pub(crate) fn new(state: Arc<RwLock<PanelState>>, restart: Arc<RestartLatch>) -> Self {
        Self { state, restart }
    }

    /// Current placement diagram text: the live placement buffer.
    pub fn pieces_string(&self) -> String {
        self.state
            .read()
            .expect("panel state lock poisoned")
            .placement_buf()
            .to_string()
    }

    /// Current promotion diagram text: the live promotion buffer.
    pub fn promotions_string(&self) -> String {
        self.state
            .read()
            .expect("panel state lock poisoned")
            .promotion_buf()
            .to_string()
    }

    /// Current bottom-side selection, read directly with no caching.
    pub fn bottom_side(&self) -> Side {
        self.state
            .read()
            .expect("panel state lock poisoned")
            .side()
    }

    /// Consumes a pending restart request.
    ///
    /// Returns `true` exactly once per user restart action since the last
    /// poll; rapid repeated actions collapse into a single `true`.
    pub fn poll_restart(&self) -> bool {
        self.restart.take()
    }
}
