//! Alarm relay
//!
//! Playback is owned by the host; the relay only tracks whether the alarm
//! should sound and how far the last start attempt got. Hosts may refuse
//! to start audio without a user gesture, so a blocked start is not an
//! error: the relay drops back to `Stopped` and tries again on the next
//! qualifying event (relay toggle or ticket submission).

use serde::Serialize;
use tracing::{debug, info};

/// Result of asking the host to start playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// Accepted but not confirmed yet; settle with
    /// [`AlarmRelay::confirm_started`] or [`AlarmRelay::confirm_blocked`]
    Deferred,
    Blocked,
}

/// Audio alarm playback capability
pub trait AlarmDevice {
    fn try_start(&mut self) -> StartOutcome;
    fn stop(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Playback {
    #[default]
    Stopped,
    Starting,
    Playing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmRelay {
    active: bool,
    playback: Playback,
}

impl Default for AlarmRelay {
    fn default() -> Self {
        Self::new(true)
    }
}

impl AlarmRelay {
    pub fn new(active: bool) -> Self {
        Self {
            active,
            playback: Playback::Stopped,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// A start has been attempted and not cancelled since
    pub fn is_initialized(&self) -> bool {
        self.playback != Playback::Stopped
    }

    /// Start playback if the relay is on and nothing is running yet
    pub fn ensure_running(&mut self, device: &mut dyn AlarmDevice) -> Playback {
        if !self.active || self.is_initialized() {
            return self.playback;
        }

        self.playback = match device.try_start() {
            StartOutcome::Started => {
                info!("alarm playing");
                Playback::Playing
            }
            StartOutcome::Deferred => {
                debug!("alarm start deferred by host");
                Playback::Starting
            }
            StartOutcome::Blocked => {
                debug!("alarm start blocked by host, will retry on next event");
                Playback::Stopped
            }
        };
        self.playback
    }

    /// Host confirmed a deferred start
    pub fn confirm_started(&mut self) {
        if self.playback == Playback::Starting {
            self.playback = Playback::Playing;
        }
    }

    /// Host rejected a deferred start
    pub fn confirm_blocked(&mut self) {
        if self.playback == Playback::Starting {
            debug!("deferred alarm start rejected");
            self.playback = Playback::Stopped;
        }
    }

    /// Flip the relay. Turning it off stops playback and forgets the
    /// previous start so the next turn-on starts from scratch.
    pub fn toggle(&mut self, device: &mut dyn AlarmDevice) -> bool {
        self.active = !self.active;
        if self.active {
            info!("alarm relay on");
            self.ensure_running(device);
        } else {
            info!("alarm relay off");
            device.stop();
            self.playback = Playback::Stopped;
        }
        self.active
    }

    /// Stop playback without changing the relay position
    pub fn shutdown(&mut self, device: &mut dyn AlarmDevice) {
        if self.is_initialized() {
            device.stop();
        }
        self.playback = Playback::Stopped;
    }

    pub fn label(&self) -> &'static str {
        if self.active {
            "Relay"
        } else {
            "Relay (Off)"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Device that replays scripted outcomes and counts calls
    #[derive(Default)]
    struct ScriptedDevice {
        outcomes: VecDeque<StartOutcome>,
        starts: usize,
        stops: usize,
    }

    impl ScriptedDevice {
        fn with(outcomes: &[StartOutcome]) -> Self {
            Self {
                outcomes: outcomes.iter().copied().collect(),
                ..Default::default()
            }
        }
    }

    impl AlarmDevice for ScriptedDevice {
        fn try_start(&mut self) -> StartOutcome {
            self.starts += 1;
            self.outcomes.pop_front().unwrap_or(StartOutcome::Started)
        }

        fn stop(&mut self) {
            self.stops += 1;
        }
    }

    #[test]
    fn test_starts_once() {
        let mut device = ScriptedDevice::default();
        let mut relay = AlarmRelay::default();
        assert_eq!(relay.ensure_running(&mut device), Playback::Playing);
        assert_eq!(relay.ensure_running(&mut device), Playback::Playing);
        assert_eq!(device.starts, 1);
    }

    #[test]
    fn test_blocked_start_is_retried_later() {
        let mut device = ScriptedDevice::with(&[StartOutcome::Blocked]);
        let mut relay = AlarmRelay::default();
        assert_eq!(relay.ensure_running(&mut device), Playback::Stopped);
        assert!(!relay.is_initialized());
        assert_eq!(relay.ensure_running(&mut device), Playback::Playing);
        assert_eq!(device.starts, 2);
    }

    #[test]
    fn test_inactive_relay_never_starts() {
        let mut device = ScriptedDevice::default();
        let mut relay = AlarmRelay::new(false);
        assert_eq!(relay.ensure_running(&mut device), Playback::Stopped);
        assert_eq!(device.starts, 0);
        assert_eq!(relay.label(), "Relay (Off)");
    }

    #[test]
    fn test_toggle_off_then_on_restarts() {
        let mut device = ScriptedDevice::default();
        let mut relay = AlarmRelay::default();
        relay.ensure_running(&mut device);
        assert!(relay.is_initialized());

        assert!(!relay.toggle(&mut device));
        assert_eq!(device.stops, 1);
        assert!(!relay.is_initialized());

        assert!(relay.toggle(&mut device));
        assert!(relay.is_active());
        assert_eq!(relay.playback(), Playback::Playing);
        assert_eq!(device.starts, 2);
    }

    #[test]
    fn test_deferred_start_settles() {
        let mut device = ScriptedDevice::with(&[StartOutcome::Deferred, StartOutcome::Deferred]);
        let mut relay = AlarmRelay::default();
        assert_eq!(relay.ensure_running(&mut device), Playback::Starting);
        // a second event while starting does not restart
        relay.ensure_running(&mut device);
        assert_eq!(device.starts, 1);
        relay.confirm_started();
        assert_eq!(relay.playback(), Playback::Playing);

        relay.toggle(&mut device);
        relay.toggle(&mut device);
        assert_eq!(relay.playback(), Playback::Starting);
        relay.confirm_blocked();
        assert_eq!(relay.playback(), Playback::Stopped);
    }

    #[test]
    fn test_shutdown_stops_only_when_initialized() {
        let mut device = ScriptedDevice::default();
        let mut relay = AlarmRelay::default();
        relay.shutdown(&mut device);
        assert_eq!(device.stops, 0);
        relay.ensure_running(&mut device);
        relay.shutdown(&mut device);
        assert_eq!(device.stops, 1);
        assert!(relay.is_active());
    }
}
