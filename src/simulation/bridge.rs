//! Mock remote link ("bridge") to the WERA telemetry service.
//!
//! The bridge is an in-process stand-in for the device uplink: connect and
//! disconnect always succeed, a sync while disconnected is a not-applicable
//! case (not an error), and no I/O, retries or timeouts exist. Its only state
//! is the link flag and a packet counter that stays monotonic for the whole
//! process lifetime, including across reconnects.

use std::fmt;

use log::trace;

use super::types::{OperatingMode, Telemetry};

/// Advisory returned by the remote end, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    CriticalReducePower,
    WarnHighTemp,
    AutoOptimizing,
    SystemOk,
}

impl Directive {
    pub fn as_str(self) -> &'static str {
        match self {
            Directive::CriticalReducePower => "CRITICAL: REDUCE POWER",
            Directive::WarnHighTemp => "WARN: HIGH TEMP",
            Directive::AutoOptimizing => "AUTO_OPTIMIZING",
            Directive::SystemOk => "SYSTEM_OK",
        }
    }

    /// Critical directives get the alarm presentation on the console.
    pub fn is_critical(self) -> bool {
        matches!(self, Directive::CriticalReducePower)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Acknowledgement for connect/disconnect. The mock link cannot fail, so the
/// status is always OK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkAck {
    pub status: &'static str,
    pub message: &'static str,
}

/// Response to a successful sync: the packet id acknowledged by the remote
/// end and the directive it selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncResponse {
    pub ack: u64,
    pub directive: Directive,
}

/// Temperature above which the remote end demands a power reduction (C).
const CRITICAL_TEMPERATURE: f64 = 80.0;
/// Temperature above which the remote end warns (C).
const WARN_TEMPERATURE: f64 = 60.0;

pub struct TelemetryBridge {
    connected: bool,
    /// Advances only on successful syncs; never reset.
    packet_id: u64,
}

impl TelemetryBridge {
    pub fn new() -> Self {
        Self {
            connected: false,
            packet_id: 0,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn connect(&mut self) -> LinkAck {
        self.connected = true;
        LinkAck {
            status: "OK",
            message: "CONNECTED",
        }
    }

    pub fn disconnect(&mut self) -> LinkAck {
        self.connected = false;
        LinkAck {
            status: "OK",
            message: "DISCONNECTED",
        }
    }

    /// Push a telemetry snapshot to the remote end.
    ///
    /// Returns `None` while the link is down; the caller simply skips its
    /// directive update in that case.
    pub fn sync(&mut self, telemetry: &Telemetry) -> Option<SyncResponse> {
        if !self.connected {
            return None;
        }
        self.packet_id += 1;
        let directive = select_directive(telemetry);
        trace!(
            "sync ack={} power={:.0} mode={} -> {}",
            self.packet_id,
            telemetry.power,
            telemetry.mode.as_str(),
            directive
        );
        Some(SyncResponse {
            ack: self.packet_id,
            directive,
        })
    }
}

impl Default for TelemetryBridge {
    fn default() -> Self {
        Self::new()
    }
}

/// Directive selection rules, first match wins. Temperature thresholds take
/// priority over the operating mode.
fn select_directive(telemetry: &Telemetry) -> Directive {
    if telemetry.temperature > CRITICAL_TEMPERATURE {
        Directive::CriticalReducePower
    } else if telemetry.temperature > WARN_TEMPERATURE {
        Directive::WarnHighTemp
    } else if telemetry.mode == OperatingMode::Auto {
        Directive::AutoOptimizing
    } else {
        Directive::SystemOk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn telemetry(temperature: f64, mode: OperatingMode) -> Telemetry {
        Telemetry {
            temperature,
            power: 50.0,
            mode,
        }
    }

    fn connected_bridge() -> TelemetryBridge {
        let mut bridge = TelemetryBridge::new();
        let ack = bridge.connect();
        assert_eq!(ack.status, "OK");
        assert_eq!(ack.message, "CONNECTED");
        bridge
    }

    #[test]
    fn critical_above_80_regardless_of_mode() {
        let mut bridge = connected_bridge();
        for mode in [OperatingMode::Auto, OperatingMode::Manual] {
            let resp = bridge.sync(&telemetry(80.1, mode)).unwrap();
            assert_eq!(resp.directive, Directive::CriticalReducePower);
            assert!(resp.directive.is_critical());
        }
    }

    #[test]
    fn warn_between_60_and_80_inclusive_upper() {
        let mut bridge = connected_bridge();
        // 80.0 is not critical (strict threshold) but still a warning
        assert_eq!(
            bridge.sync(&telemetry(80.0, OperatingMode::Auto)).unwrap().directive,
            Directive::WarnHighTemp
        );
        assert_eq!(
            bridge.sync(&telemetry(60.1, OperatingMode::Manual)).unwrap().directive,
            Directive::WarnHighTemp
        );
    }

    #[test]
    fn cool_directives_depend_on_mode() {
        let mut bridge = connected_bridge();
        // 60.0 is not a warning (strict threshold)
        assert_eq!(
            bridge.sync(&telemetry(60.0, OperatingMode::Auto)).unwrap().directive,
            Directive::AutoOptimizing
        );
        assert_eq!(
            bridge.sync(&telemetry(40.0, OperatingMode::Manual)).unwrap().directive,
            Directive::SystemOk
        );
    }

    #[test]
    fn sync_returns_none_while_disconnected() {
        let mut bridge = TelemetryBridge::new();
        assert!(bridge.sync(&telemetry(90.0, OperatingMode::Auto)).is_none());
        assert!(bridge.sync(&telemetry(40.0, OperatingMode::Manual)).is_none());
    }

    #[test]
    fn packet_counter_increments_only_on_successful_sync() {
        let mut bridge = TelemetryBridge::new();
        // Failed syncs do not advance the counter
        assert!(bridge.sync(&telemetry(40.0, OperatingMode::Manual)).is_none());
        bridge.connect();
        assert_eq!(bridge.sync(&telemetry(40.0, OperatingMode::Manual)).unwrap().ack, 1);
        assert_eq!(bridge.sync(&telemetry(40.0, OperatingMode::Manual)).unwrap().ack, 2);
    }

    #[test]
    fn packet_counter_is_monotonic_across_reconnects() {
        let mut bridge = connected_bridge();
        assert_eq!(bridge.sync(&telemetry(40.0, OperatingMode::Manual)).unwrap().ack, 1);
        assert_eq!(bridge.sync(&telemetry(40.0, OperatingMode::Manual)).unwrap().ack, 2);

        let ack = bridge.disconnect();
        assert_eq!(ack.message, "DISCONNECTED");
        assert!(bridge.sync(&telemetry(40.0, OperatingMode::Manual)).is_none());

        bridge.connect();
        assert_eq!(bridge.sync(&telemetry(40.0, OperatingMode::Manual)).unwrap().ack, 3);
    }

    #[test]
    fn directive_strings_match_wire_format() {
        assert_eq!(Directive::CriticalReducePower.to_string(), "CRITICAL: REDUCE POWER");
        assert_eq!(Directive::WarnHighTemp.to_string(), "WARN: HIGH TEMP");
        assert_eq!(Directive::AutoOptimizing.to_string(), "AUTO_OPTIMIZING");
        assert_eq!(Directive::SystemOk.to_string(), "SYSTEM_OK");
    }
}
