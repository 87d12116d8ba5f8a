use crate::model::format::MatchFormat;
use crate::model::outcome::{ExistingScore, MatchDescriptor};
use crate::model::set::{ScoreField, SetEntry, SetScore};
use crate::model::side::Side;
use crate::model::termination::{OverrideState, TerminationMode};
use crate::score::live::{LiveState, derive_live_state};
use core::fmt;

/// In-memory score sheet for the one match being edited: raw set entries
/// plus the termination axis. Created empty when the scoring surface opens,
/// mutated per keystroke, and discarded once an outcome has been emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSheet {
    format: MatchFormat,
    entries: Vec<SetEntry>,
    override_state: OverrideState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    SetOutOfRange { set: usize, total: usize },
    EntryDisabled(TerminationMode),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::SetOutOfRange { set, total } => {
                write!(f, "set {set} does not exist (match has {total} slots)")
            }
            EditError::EntryDisabled(mode) => {
                write!(f, "score entry is disabled while the match is marked {mode}")
            }
        }
    }
}

impl std::error::Error for EditError {}

impl ScoreSheet {
    pub fn new(format: MatchFormat) -> Self {
        Self {
            format,
            entries: vec![SetEntry::new(); format.total_sets()],
            override_state: OverrideState::new(),
        }
    }

    /// Rebuild a sheet from a previously recorded result so an administrator
    /// can correct it. Stored results carry game counts only, so tiebreak
    /// fields come back blank and must be re-entered. Unknown participant
    /// ids in the stored termination data are ignored, leaving the sheet in
    /// normal scoring mode.
    pub fn from_existing(
        existing: &ExistingScore,
        descriptor: &MatchDescriptor,
        format: MatchFormat,
    ) -> Self {
        let mut sheet = Self::new(format);

        for (entry, recorded) in sheet.entries.iter_mut().zip(&existing.sets) {
            entry.player1_games = recorded.player1_games.to_string();
            entry.player2_games = recorded.player2_games.to_string();
        }

        if let Some(retired_id) = &existing.retired_player_id {
            if let Some(retired_side) = descriptor.side_of(retired_id) {
                sheet.override_state.set_mode(TerminationMode::Retired);
                sheet.override_state.choose_winner(retired_side.opponent());
            }
        } else if let Some(winner_id) = &existing.walkover_winner_id {
            if let Some(winner_side) = descriptor.side_of(winner_id) {
                sheet.override_state.set_mode(TerminationMode::Walkover);
                sheet.override_state.choose_winner(winner_side);
            }
        }

        sheet
    }

    pub fn format(&self) -> MatchFormat {
        self.format
    }

    pub fn entries(&self) -> &[SetEntry] {
        &self.entries
    }

    pub fn override_state(&self) -> &OverrideState {
        &self.override_state
    }

    /// Overwrite one raw field. Fields are logically disabled while a
    /// termination override is active.
    pub fn apply_edit(
        &mut self,
        set: usize,
        field: ScoreField,
        value: &str,
    ) -> Result<(), EditError> {
        let mode = self.override_state.mode();
        if mode.is_override() {
            return Err(EditError::EntryDisabled(mode));
        }
        let total = self.entries.len();
        let entry = self
            .entries
            .get_mut(set)
            .ok_or(EditError::SetOutOfRange { set, total })?;
        *entry.field_mut(field) = value.to_string();
        Ok(())
    }

    pub fn set_termination(&mut self, mode: TerminationMode) {
        self.override_state.set_mode(mode);
    }

    pub fn choose_winner(&mut self, side: Side) {
        self.override_state.choose_winner(side);
    }

    pub fn parsed_sets(&self) -> Vec<SetScore> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| entry.parsed(index))
            .collect()
    }

    pub fn live_state(&self) -> LiveState {
        derive_live_state(&self.parsed_sets(), self.format)
    }
}
