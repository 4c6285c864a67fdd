//! Host focus and chat control
//!
//! The engine never owns the host's screens or chat; it asks the host through
//! [`HostControl`]. A failed query is treated as "interaction blocked".

use super::error::HostError;

/// Host-side focus and chat capabilities consumed by the UI engine
pub trait HostControl {
    /// Hide (`true`) or restore (`false`) the host's chat overlay
    fn set_chat_suppressed(&mut self, suppressed: bool);

    /// Install a host screen that captures keyboard, scroll and drag input
    fn install_exclusive_input_surface(&mut self);

    /// Whether the host's current screen blocks UI interaction (e.g. pause menu)
    fn focus_blocks_interaction(&self) -> Result<bool, HostError>;
}

/// Resolve whether the host currently allows interaction
///
/// Errors resolve to `false` so nodes stay inert while the host is unavailable.
pub fn interaction_allowed(host: &dyn HostControl) -> bool {
    match host.focus_blocks_interaction() {
        Ok(blocked) => !blocked,
        Err(err) => {
            log::warn!("Treating UI as non-interactable: {err}");
            false
        }
    }
}

/// Host implementation for headless runs and tests
///
/// Records the side effects the engine requests instead of performing them.
#[derive(Debug, Default, Clone)]
pub struct HeadlessHost {
    /// Whether chat is currently suppressed
    pub chat_suppressed: bool,
    /// Number of times an exclusive input surface was installed
    pub input_surface_installs: u32,
    /// Simulated blocking screen (pause menu, inventory, ...)
    pub blocking_screen_open: bool,
    /// Simulated query failure
    pub unavailable: bool,
}

impl HeadlessHost {
    /// Create a host with no blocking screen and chat visible
    pub fn new() -> Self {
        Self::default()
    }
}

impl HostControl for HeadlessHost {
    fn set_chat_suppressed(&mut self, suppressed: bool) {
        self.chat_suppressed = suppressed;
    }

    fn install_exclusive_input_surface(&mut self) {
        self.input_surface_installs += 1;
    }

    fn focus_blocks_interaction(&self) -> Result<bool, HostError> {
        if self.unavailable {
            return Err(HostError::Unavailable);
        }
        Ok(self.blocking_screen_open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interaction_allowed() {
        let mut host = HeadlessHost::new();
        assert!(interaction_allowed(&host));

        host.blocking_screen_open = true;
        assert!(!interaction_allowed(&host));
    }

    #[test]
    fn test_failed_query_disallows_interaction() {
        let host = HeadlessHost {
            unavailable: true,
            ..HeadlessHost::default()
        };
        assert!(!interaction_allowed(&host));
    }
}
