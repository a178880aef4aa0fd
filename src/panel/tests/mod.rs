//! PanelState and SharedPanel tests, split by concern.
