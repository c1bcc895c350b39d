// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

use netvuln_core::VulnService;

/// Shared, read-only state for request handlers.
pub struct AppState {
    /// The check service; holds the engine binary path resolved at startup.
    pub service: VulnService,
}

impl AppState {
    pub fn new(service: VulnService) -> Self {
        Self { service }
    }
}
