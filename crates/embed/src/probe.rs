//! Host presence detection with a bounded number of polls

use serde::{Deserialize, Serialize};

/// Whether the authoring host's API is reachable
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HostAvailability {
    Unknown,
    Present,
    Absent,
}

pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 100;

/// Resolves [`HostAvailability`] from successive observations.
///
/// The driver (a timer in the browser) feeds one observation per tick until
/// [`HostProbe::is_pending`] turns false. A positive observation resolves to
/// `Present` at once; `Absent` is only reached after `max_attempts`
/// negative observations. Once resolved the state never changes.
#[derive(Debug, Clone)]
pub struct HostProbe {
    state: HostAvailability,
    attempts: u32,
    max_attempts: u32,
    poll_interval_ms: u32,
}

impl Default for HostProbe {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_POLL_INTERVAL_MS)
    }
}

impl HostProbe {
    pub fn new(max_attempts: u32, poll_interval_ms: u32) -> Self {
        Self {
            state: HostAvailability::Unknown,
            attempts: 0,
            max_attempts: max_attempts.max(1),
            poll_interval_ms,
        }
    }

    pub fn observe(&mut self, host_present: bool) -> HostAvailability {
        if self.state != HostAvailability::Unknown {
            return self.state;
        }

        self.attempts += 1;
        if host_present {
            log::debug!("Host API detected after {} attempt(s)", self.attempts);
            self.state = HostAvailability::Present;
        } else if self.attempts >= self.max_attempts {
            log::info!(
                "Host API not found after {} attempts, running standalone",
                self.attempts
            );
            self.state = HostAvailability::Absent;
        }
        self.state
    }

    pub fn state(&self) -> HostAvailability {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == HostAvailability::Unknown
    }

    /// Resolved value, `None` while still polling
    pub fn resolved(&self) -> Option<HostAvailability> {
        (!self.is_pending()).then_some(self.state)
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn poll_interval_ms(&self) -> u32 {
        self.poll_interval_ms
    }
}
