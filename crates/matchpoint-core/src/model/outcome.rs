use crate::model::set::FinalSet;
use crate::model::side::Side;
use crate::model::termination::TerminationMode;
use serde::{Deserialize, Serialize};

/// Match as handed over by the loading collaborator: identifier, the two
/// participants, and optionally a previously recorded score when an
/// administrator is correcting a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDescriptor {
    pub id: String,
    pub player1_id: String,
    pub player1_name: String,
    pub player2_id: String,
    pub player2_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_score: Option<ExistingScore>,
}

impl MatchDescriptor {
    pub fn participant_id(&self, side: Side) -> &str {
        match side {
            Side::Player1 => &self.player1_id,
            Side::Player2 => &self.player2_id,
        }
    }

    pub fn participant_name(&self, side: Side) -> &str {
        match side {
            Side::Player1 => &self.player1_name,
            Side::Player2 => &self.player2_name,
        }
    }

    pub fn side_of(&self, participant_id: &str) -> Option<Side> {
        if participant_id == self.player1_id {
            Some(Side::Player1)
        } else if participant_id == self.player2_id {
            Some(Side::Player2)
        } else {
            None
        }
    }
}

/// Previously recorded result used to pre-populate the score sheet.
/// `retired_player_id` names the player who could not continue; the winner
/// is the other one. `walkover_winner_id` names the winner directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExistingScore {
    #[serde(default)]
    pub sets: Vec<FinalSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retired_player_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walkover_winner_id: Option<String>,
}

/// Final result handed to the persistence collaborator. `sets` is empty for
/// early-terminated matches; tiebreak points appear only in `score_text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub match_id: String,
    pub winner_id: String,
    pub loser_id: String,
    pub score_text: String,
    pub sets: Vec<FinalSet>,
    pub termination: TerminationMode,
}
