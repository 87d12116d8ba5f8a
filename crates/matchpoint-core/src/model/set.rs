use crate::model::count::ParsedCount;
use crate::model::format::MatchFormat;
use crate::model::side::Side;
use serde::{Deserialize, Serialize};

/// One editable score field within a set slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreField {
    Player1Games,
    Player2Games,
    Player1Tiebreak,
    Player2Tiebreak,
}

/// Raw text for one set slot, exactly as typed. All fields start blank when
/// the scoring surface opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetEntry {
    pub player1_games: String,
    pub player2_games: String,
    pub player1_tiebreak: String,
    pub player2_tiebreak: String,
}

impl SetEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_mut(&mut self, field: ScoreField) -> &mut String {
        match field {
            ScoreField::Player1Games => &mut self.player1_games,
            ScoreField::Player2Games => &mut self.player2_games,
            ScoreField::Player1Tiebreak => &mut self.player1_tiebreak,
            ScoreField::Player2Tiebreak => &mut self.player2_tiebreak,
        }
    }

    pub fn parsed(&self, index: usize) -> SetScore {
        SetScore {
            index,
            player1_games: ParsedCount::parse(&self.player1_games),
            player2_games: ParsedCount::parse(&self.player2_games),
            player1_tiebreak: ParsedCount::parse(&self.player1_tiebreak),
            player2_tiebreak: ParsedCount::parse(&self.player2_tiebreak),
        }
    }
}

/// Parsed view of one set slot. Tiebreak fields are only meaningful when
/// both game counts read 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetScore {
    pub index: usize,
    pub player1_games: ParsedCount,
    pub player2_games: ParsedCount,
    pub player1_tiebreak: ParsedCount,
    pub player2_tiebreak: ParsedCount,
}

impl SetScore {
    pub const fn games(self, side: Side) -> ParsedCount {
        match side {
            Side::Player1 => self.player1_games,
            Side::Player2 => self.player2_games,
        }
    }

    pub const fn tiebreak(self, side: Side) -> ParsedCount {
        match side {
            Side::Player1 => self.player1_tiebreak,
            Side::Player2 => self.player2_tiebreak,
        }
    }

    pub fn is_tiebreak_set(self) -> bool {
        self.player1_games.value() == Some(MatchFormat::GAMES_TO_WIN)
            && self.player2_games.value() == Some(MatchFormat::GAMES_TO_WIN)
    }
}

/// Games-only scoreline as it appears in an emitted outcome. Tiebreak points
/// live only in the rendered score text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalSet {
    pub player1_games: u8,
    pub player2_games: u8,
}

impl FinalSet {
    pub const fn new(player1_games: u8, player2_games: u8) -> Self {
        Self {
            player1_games,
            player2_games,
        }
    }

    /// Extract the games of a fully-entered set; `None` while either game
    /// field is blank or unreadable.
    pub fn from_score(score: &SetScore) -> Option<Self> {
        match (score.player1_games.value(), score.player2_games.value()) {
            (Some(player1_games), Some(player2_games)) => Some(Self {
                player1_games,
                player2_games,
            }),
            _ => None,
        }
    }
}
