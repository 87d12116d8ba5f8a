use std::fs;
use std::path::PathBuf;

use matchpoint_core::game::sheet::{EditError, ScoreSheet};
use matchpoint_core::game::submit::{OutcomeSink, SubmitError, submit};
use matchpoint_core::model::format::MatchFormat;
use matchpoint_core::model::outcome::MatchOutcome;
use matchpoint_core::model::set::ScoreField;
use matchpoint_core::model::termination::TerminationMode;
use thiserror::Error;
use tracing::info;

use crate::config::{MatchRecord, SetRecord};

/// Summary details returned after a successful submission.
#[derive(Debug)]
pub struct RunReport {
    pub match_id: String,
    pub winner_name: String,
    pub score_text: String,
    pub json: String,
    pub output_path: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("score entry rejected: {0}")]
    Edit(#[from] EditError),
    #[error("submission blocked: {0}")]
    Blocked(#[from] SubmitError),
    #[error("failed to encode outcome: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write outcome to {path}: {source}")]
    Write {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
}

/// Stand-in for the persistence collaborator: remembers what it was handed
/// so the caller can render it after the submission call returns.
#[derive(Default)]
struct RecordingSink {
    outcomes: Vec<MatchOutcome>,
}

impl OutcomeSink for RecordingSink {
    fn consume(&mut self, outcome: &MatchOutcome) {
        self.outcomes.push(outcome.clone());
    }
}

/// Replay the record through the engine and emit the outcome. Set entries go
/// in field by field, the way the scoring surface would deliver keystrokes.
pub fn run(record: &MatchRecord, output: Option<PathBuf>) -> Result<RunReport, RunnerError> {
    let format = MatchFormat::best_of_three();
    let descriptor = record.descriptor();
    let mut sheet = ScoreSheet::new(format);

    for (index, set) in record.sets.iter().enumerate() {
        apply_set(&mut sheet, index, set)?;
    }

    // Termination goes on last: entering an override mode disables edits.
    let override_block = record
        .retired
        .as_ref()
        .map(|block| (TerminationMode::Retired, block))
        .or_else(|| {
            record
                .walkover
                .as_ref()
                .map(|block| (TerminationMode::Walkover, block))
        });
    if let Some((mode, block)) = override_block {
        sheet.set_termination(mode);
        if let Some(side) = descriptor.side_of(&block.winner_id) {
            sheet.choose_winner(side);
        }
    }

    let live = sheet.live_state();
    info!(
        sets_to_show = live.sets_to_show,
        live_winner = ?live.live_winner,
        "live state derived"
    );

    let mut sink = RecordingSink::default();
    let outcome = submit(&descriptor, &sheet, &mut sink)?;
    info!(
        match_id = %outcome.match_id,
        winner_id = %outcome.winner_id,
        score = %outcome.score_text,
        "outcome emitted"
    );

    let json = outcome.to_json()?;
    if let Some(path) = &output {
        fs::write(path, format!("{json}\n")).map_err(|source| RunnerError::Write {
            source,
            path: path.clone(),
        })?;
    }

    let winner_name = if outcome.winner_id == record.player1.id {
        record.player1.name.clone()
    } else {
        record.player2.name.clone()
    };

    Ok(RunReport {
        match_id: outcome.match_id.clone(),
        winner_name,
        score_text: outcome.score_text.clone(),
        json,
        output_path: output,
    })
}

fn apply_set(sheet: &mut ScoreSheet, index: usize, set: &SetRecord) -> Result<(), EditError> {
    sheet.apply_edit(index, ScoreField::Player1Games, &set.player1_games)?;
    sheet.apply_edit(index, ScoreField::Player2Games, &set.player2_games)?;
    sheet.apply_edit(index, ScoreField::Player1Tiebreak, &set.player1_tiebreak)?;
    sheet.apply_edit(index, ScoreField::Player2Tiebreak, &set.player2_tiebreak)?;
    Ok(())
}
