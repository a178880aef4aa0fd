//! App tests, split by concern.

use super::*;
use crate::panel::{PanelState, SharedPanel};
use crate::{LayoutName, Side};
use std::time::Duration;

mod interaction;

fn make_app() -> App {
    let panel = SharedPanel::new(PanelState::new(LayoutName::Standard, Side::White));
    App::new(panel, Duration::from_millis(250), None)
}
