use crate::game::sheet::ScoreSheet;
use crate::model::outcome::{MatchDescriptor, MatchOutcome};
use crate::model::set::FinalSet;
use crate::model::termination::TerminationMode;
use crate::score::estimator::sets_to_show;
use crate::score::formatter::format_score;
use crate::score::resolver::{resolve_match, resolve_set};
use crate::score::validator::{ValidationError, validate};
use core::fmt;

/// Why a submission was blocked. All-or-nothing: nothing is emitted and
/// nothing is retried when any of these fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    InvalidMatchId,
    MissingOverrideWinner,
    MatchNotComplete,
    Validation(ValidationError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::InvalidMatchId => f.write_str("the match identifier is blank"),
            SubmitError::MissingOverrideWinner => {
                f.write_str("a winner must be chosen for a retired or walkover result")
            }
            SubmitError::MatchNotComplete => {
                f.write_str("neither player has won enough sets to decide the match")
            }
            SubmitError::Validation(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmitError::Validation(error) => Some(error),
            _ => None,
        }
    }
}

impl From<ValidationError> for SubmitError {
    fn from(value: ValidationError) -> Self {
        SubmitError::Validation(value)
    }
}

/// The persistence collaborator. Receives exactly one synchronous call per
/// successful submission; durability, standings and notifications are its
/// problem, not this crate's.
pub trait OutcomeSink {
    fn consume(&mut self, outcome: &MatchOutcome);
}

/// Assemble the final outcome for the sheet as it stands. An active
/// termination override bypasses scoring entirely; otherwise the validator
/// is the authority and the set tally must already name a winner.
pub fn build_outcome(
    descriptor: &MatchDescriptor,
    sheet: &ScoreSheet,
) -> Result<MatchOutcome, SubmitError> {
    if descriptor.id.trim().is_empty() {
        return Err(SubmitError::InvalidMatchId);
    }

    let state = sheet.override_state();
    if state.mode().is_override() {
        let winner = state
            .manual_winner()
            .ok_or(SubmitError::MissingOverrideWinner)?;
        return Ok(MatchOutcome {
            match_id: descriptor.id.clone(),
            winner_id: descriptor.participant_id(winner).to_string(),
            loser_id: descriptor.participant_id(winner.opponent()).to_string(),
            score_text: state.mode().as_str().to_string(),
            sets: Vec::new(),
            termination: state.mode(),
        });
    }

    let format = sheet.format();
    let sets = sheet.parsed_sets();
    validate(&sets, format)?;

    let winner = resolve_match(&sets, format).ok_or(SubmitError::MatchNotComplete)?;
    let outcomes: Vec<_> = sets.iter().map(|set| resolve_set(set, format)).collect();
    let shown = sets_to_show(&outcomes, format);
    let final_sets: Vec<FinalSet> = sets
        .iter()
        .take(shown)
        .filter_map(FinalSet::from_score)
        .collect();

    Ok(MatchOutcome {
        match_id: descriptor.id.clone(),
        winner_id: descriptor.participant_id(winner).to_string(),
        loser_id: descriptor.participant_id(winner.opponent()).to_string(),
        score_text: format_score(&sets, format),
        sets: final_sets,
        termination: TerminationMode::Normal,
    })
}

/// Build and emit in one step: the sink sees the outcome exactly once on
/// success and not at all on failure.
pub fn submit(
    descriptor: &MatchDescriptor,
    sheet: &ScoreSheet,
    sink: &mut dyn OutcomeSink,
) -> Result<MatchOutcome, SubmitError> {
    let outcome = build_outcome(descriptor, sheet)?;
    sink.consume(&outcome);
    Ok(outcome)
}
