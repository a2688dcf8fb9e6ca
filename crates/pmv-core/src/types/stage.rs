//! Updater stage.

use std::fmt;

use super::normalize_name;
use crate::printer::ValuePrinter;

/// Stage of the update process.
///
/// There is no unknown stage; `from_ordinal` and `from_name` return `None`
/// for values outside the set instead of inventing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Idle,
    CheckingForUpdate,
    UpdateAvailable,
    Downloading,
    Verifying,
    Finalizing,
    UpdatedNeedReboot,
    ReportingErrorEvent,
    AttemptingRollback,
}

impl Stage {
    pub const ALL: [Stage; 9] = [
        Stage::Idle,
        Stage::CheckingForUpdate,
        Stage::UpdateAvailable,
        Stage::Downloading,
        Stage::Verifying,
        Stage::Finalizing,
        Stage::UpdatedNeedReboot,
        Stage::ReportingErrorEvent,
        Stage::AttemptingRollback,
    ];

    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        Self::ALL.get(usize::try_from(ordinal).ok()?).copied()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize_name(name);
        Self::ALL
            .into_iter()
            .find(|stage| normalize_name(stage.label()) == wanted)
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Idle => "Idle",
            Stage::CheckingForUpdate => "Checking For Update",
            Stage::UpdateAvailable => "Update Available",
            Stage::Downloading => "Downloading",
            Stage::Verifying => "Verifying",
            Stage::Finalizing => "Finalizing",
            Stage::UpdatedNeedReboot => "Updated, Need Reboot",
            Stage::ReportingErrorEvent => "Reporting Error Event",
            Stage::AttemptingRollback => "Attempting Rollback",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ValuePrinter for Stage {
    fn print_value(&self) -> String {
        self.label().to_string()
    }
}
