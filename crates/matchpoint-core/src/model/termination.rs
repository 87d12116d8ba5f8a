use crate::model::side::Side;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Early-termination axis of a match. A single tagged value: "retired and
/// walkover at the same time" cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationMode {
    Normal,
    Retired,
    Walkover,
}

impl TerminationMode {
    pub const fn is_override(self) -> bool {
        !matches!(self, TerminationMode::Normal)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TerminationMode::Normal => "Normal",
            TerminationMode::Retired => "Retired",
            TerminationMode::Walkover => "Walkover",
        }
    }
}

impl fmt::Display for TerminationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Termination mode plus the manually chosen winner that accompanies it.
/// Every mode change resets the winner so the user must re-pick; the stored
/// winner is only read while an override mode is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrideState {
    mode: TerminationMode,
    manual_winner: Option<Side>,
}

impl OverrideState {
    pub const fn new() -> Self {
        Self {
            mode: TerminationMode::Normal,
            manual_winner: None,
        }
    }

    pub const fn mode(&self) -> TerminationMode {
        self.mode
    }

    pub const fn manual_winner(&self) -> Option<Side> {
        self.manual_winner
    }

    /// The chosen winner, visible only while scoring is overridden.
    pub fn override_winner(&self) -> Option<Side> {
        if self.mode.is_override() {
            self.manual_winner
        } else {
            None
        }
    }

    pub fn set_mode(&mut self, mode: TerminationMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.manual_winner = None;
    }

    pub fn choose_winner(&mut self, side: Side) {
        self.manual_winner = Some(side);
    }
}

impl Default for OverrideState {
    fn default() -> Self {
        Self::new()
    }
}
