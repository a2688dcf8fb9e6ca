//! Connection type and tethering status.
//!
//! Both enumerations carry an `Unknown` variant, which is also what any
//! unrecognized ordinal or name maps to.

use std::fmt;

use super::normalize_name;
use crate::printer::ValuePrinter;

/// Kind of the network connection currently in use
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConnectionType {
    Ethernet,
    Wifi,
    Wimax,
    Bluetooth,
    Cellular,
    Unknown,
}

impl ConnectionType {
    pub const ALL: [ConnectionType; 6] = [
        ConnectionType::Ethernet,
        ConnectionType::Wifi,
        ConnectionType::Wimax,
        ConnectionType::Bluetooth,
        ConnectionType::Cellular,
        ConnectionType::Unknown,
    ];

    /// Map a raw ordinal; anything out of range is `Unknown`.
    pub fn from_ordinal(ordinal: u32) -> Self {
        usize::try_from(ordinal)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .unwrap_or(ConnectionType::Unknown)
    }

    /// Map a label or name; anything unrecognized is `Unknown`.
    pub fn from_name(name: &str) -> Self {
        let wanted = normalize_name(name);
        Self::ALL
            .into_iter()
            .find(|ty| normalize_name(ty.label()) == wanted)
            .unwrap_or(ConnectionType::Unknown)
    }

    pub fn label(self) -> &'static str {
        match self {
            ConnectionType::Ethernet => "Ethernet",
            ConnectionType::Wifi => "Wifi",
            ConnectionType::Wimax => "Wimax",
            ConnectionType::Bluetooth => "Bluetooth",
            ConnectionType::Cellular => "Cellular",
            ConnectionType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ValuePrinter for ConnectionType {
    fn print_value(&self) -> String {
        self.label().to_string()
    }
}

/// Whether the connection is believed to be tethered through a phone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConnectionTethering {
    NotDetected,
    Suspected,
    Confirmed,
    Unknown,
}

impl ConnectionTethering {
    pub const ALL: [ConnectionTethering; 4] = [
        ConnectionTethering::NotDetected,
        ConnectionTethering::Suspected,
        ConnectionTethering::Confirmed,
        ConnectionTethering::Unknown,
    ];

    pub fn from_ordinal(ordinal: u32) -> Self {
        usize::try_from(ordinal)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .unwrap_or(ConnectionTethering::Unknown)
    }

    pub fn from_name(name: &str) -> Self {
        let wanted = normalize_name(name);
        Self::ALL
            .into_iter()
            .find(|t| normalize_name(t.label()) == wanted)
            .unwrap_or(ConnectionTethering::Unknown)
    }

    pub fn label(self) -> &'static str {
        match self {
            ConnectionTethering::NotDetected => "Not Detected",
            ConnectionTethering::Suspected => "Suspected",
            ConnectionTethering::Confirmed => "Confirmed",
            ConnectionTethering::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ConnectionTethering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ValuePrinter for ConnectionTethering {
    fn print_value(&self) -> String {
        self.label().to_string()
    }
}
