use serde::{Deserialize, Serialize};

/// Match-level scoring parameters. Every rule that used to hard-code
/// "best of three with a super-tiebreak decider" reads these instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchFormat {
    sets_to_win: u8,
    tiebreak_points: u8,
    final_set_tiebreak_points: u8,
}

impl MatchFormat {
    /// Games needed to take a set outright (with the required margin).
    pub const GAMES_TO_WIN: u8 = 6;

    /// Most games a set can reach (7-5, or 7 points of a 6-6 tiebreak set).
    pub const MAX_GAMES: u8 = 7;

    /// Best-of-3 sets, tiebreaks to 7, super-tiebreak to 10 in the decider.
    pub const fn best_of_three() -> Self {
        Self {
            sets_to_win: 2,
            tiebreak_points: 7,
            final_set_tiebreak_points: 10,
        }
    }

    pub const fn sets_to_win(self) -> usize {
        self.sets_to_win as usize
    }

    pub const fn total_sets(self) -> usize {
        self.sets_to_win as usize * 2 - 1
    }

    pub const fn is_final_set(self, set_index: usize) -> bool {
        set_index + 1 == self.total_sets()
    }

    pub const fn tiebreak_points_to_win(self, set_index: usize) -> u8 {
        if self.is_final_set(set_index) {
            self.final_set_tiebreak_points
        } else {
            self.tiebreak_points
        }
    }
}

impl Default for MatchFormat {
    fn default() -> Self {
        Self::best_of_three()
    }
}
