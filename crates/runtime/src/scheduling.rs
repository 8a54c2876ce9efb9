//! When initialization passes run

use crate::settings::RuntimeSettings;

/// Document loading state as reported by the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ReadyState::Loading)
    }
}

/// Event that triggers one initialization pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Run right away
    Immediate,
    /// Run once the document finishes parsing
    ContentLoaded,
    /// Run when the host's ready queue drains
    HostReady,
}

/// Passes to arrange at startup.
///
/// Exactly one of `Immediate`/`ContentLoaded` is always present; `HostReady`
/// is added on top when the host exposes its queue and the settings allow it.
pub fn plan(ready: ReadyState, host_ready_available: bool, settings: &RuntimeSettings) -> Vec<Trigger> {
    let mut triggers = Vec::with_capacity(2);

    if ready.is_loading() {
        triggers.push(Trigger::ContentLoaded);
    } else {
        triggers.push(Trigger::Immediate);
    }

    if host_ready_available && settings.hook_host_ready {
        triggers.push(Trigger::HostReady);
    }

    log::debug!("{} scheduled passes {:?}", crate::LOG_PREFIX, triggers);
    triggers
}
