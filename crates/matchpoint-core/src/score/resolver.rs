use crate::model::format::MatchFormat;
use crate::model::set::SetScore;
use crate::model::side::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    Player1,
    Player2,
    Undecided,
}

impl SetOutcome {
    pub const fn winner(self) -> Option<Side> {
        match self {
            SetOutcome::Player1 => Some(Side::Player1),
            SetOutcome::Player2 => Some(Side::Player2),
            SetOutcome::Undecided => None,
        }
    }
}

/// Live reading of one set. Lenient on purpose: it drives incremental
/// feedback while the user is still typing, and must never hard-fail. The
/// submit-time validator is the sole authority on legality, so this function
/// will happily call a directly-entered 7-6 a decided set that the validator
/// later rejects.
pub fn resolve_set(set: &SetScore, format: MatchFormat) -> SetOutcome {
    let (Some(p1_games), Some(p2_games)) = (set.player1_games.value(), set.player2_games.value())
    else {
        return SetOutcome::Undecided;
    };

    if set.is_tiebreak_set() {
        // Tiebreak set: fields still blank read as zero so the comparison
        // stays meaningful mid-entry.
        let points_to_win = format.tiebreak_points_to_win(set.index);
        let p1_points = set.player1_tiebreak.or_zero();
        let p2_points = set.player2_tiebreak.or_zero();
        if p1_points >= points_to_win && p1_points.saturating_sub(p2_points) >= 2 {
            return SetOutcome::Player1;
        }
        if p2_points >= points_to_win && p2_points.saturating_sub(p1_points) >= 2 {
            return SetOutcome::Player2;
        }
        return SetOutcome::Undecided;
    }

    match p1_games.cmp(&p2_games) {
        core::cmp::Ordering::Greater => SetOutcome::Player1,
        core::cmp::Ordering::Less => SetOutcome::Player2,
        core::cmp::Ordering::Equal => SetOutcome::Undecided,
    }
}

/// Overall match winner: the first side to take `sets_to_win` sets, or
/// `None` while nobody has. Recomputed from scratch on every edit.
pub fn resolve_match(sets: &[SetScore], format: MatchFormat) -> Option<Side> {
    let mut wins = [0usize; 2];
    for set in sets {
        if let Some(side) = resolve_set(set, format).winner() {
            wins[side.index()] += 1;
            if wins[side.index()] >= format.sets_to_win() {
                return Some(side);
            }
        }
    }
    None
}
