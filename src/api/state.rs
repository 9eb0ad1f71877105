//! Application state for the shift tracker API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::DisplayConfig;
use crate::tracker::ShiftTracker;

/// Shared application state.
///
/// Holds the tracker every handler reads from and writes through, and the
/// display settings used to render month views.
#[derive(Clone)]
pub struct AppState {
    tracker: Arc<ShiftTracker>,
    display: Arc<DisplayConfig>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(tracker: ShiftTracker, display: DisplayConfig) -> Self {
        Self {
            tracker: Arc::new(tracker),
            display: Arc::new(display),
        }
    }

    /// Returns the tracker.
    pub fn tracker(&self) -> &ShiftTracker {
        &self.tracker
    }

    /// Returns the display settings.
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }
}
