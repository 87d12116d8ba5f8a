use crate::model::format::MatchFormat;
use crate::model::set::SetScore;
use crate::score::estimator::sets_to_show;
use crate::score::resolver::resolve_set;
use core::fmt;

/// Submit-time legality failures. Categorical so the caller can surface a
/// specific notice; set-level variants carry the offending slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NonNumericScore { set: usize },
    OutOfRangeScore { set: usize },
    MissingTiebreak { set: usize },
    InvalidTiebreak { set: usize },
    IllegalGameCombination { set: usize },
    IncompleteSet { set: usize },
    NoSetsEntered,
    InsufficientCompletedSets { completed: usize, required: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NonNumericScore { set } => {
                write!(f, "set {}: scores must be numbers", set + 1)
            }
            ValidationError::OutOfRangeScore { set } => {
                write!(
                    f,
                    "set {}: game counts must be between 0 and {}",
                    set + 1,
                    MatchFormat::MAX_GAMES
                )
            }
            ValidationError::MissingTiebreak { set } => {
                write!(f, "set {}: a 6-6 set needs both tiebreak scores", set + 1)
            }
            ValidationError::InvalidTiebreak { set } => {
                write!(
                    f,
                    "set {}: tiebreak must be won at the target score with a margin of two",
                    set + 1
                )
            }
            ValidationError::IllegalGameCombination { set } => {
                write!(
                    f,
                    "set {}: not a valid set score (7-6 must be entered as 6-6 with a tiebreak)",
                    set + 1
                )
            }
            ValidationError::IncompleteSet { set } => {
                write!(f, "set {}: the set has not been played out", set + 1)
            }
            ValidationError::NoSetsEntered => f.write_str("no set scores have been entered"),
            ValidationError::InsufficientCompletedSets {
                completed,
                required,
            } => {
                write!(
                    f,
                    "only {completed} completed set(s) entered, at least {required} required"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

enum SetCheck {
    Blank,
    Completed,
}

/// Authoritative legality check over the sets currently in play. Pure: the
/// same sheet always yields the same verdict. The live resolver's leniency
/// does not apply here; every present field must parse, and every scoreline
/// must be one a finished set can actually produce.
pub fn validate(sets: &[SetScore], format: MatchFormat) -> Result<(), ValidationError> {
    let outcomes: Vec<_> = sets.iter().map(|set| resolve_set(set, format)).collect();
    let shown = sets_to_show(&outcomes, format);

    let mut completed = 0usize;
    for set in sets.iter().take(shown) {
        match check_set(set, format)? {
            SetCheck::Blank => {}
            SetCheck::Completed => completed += 1,
        }
    }

    if completed == 0 {
        return Err(ValidationError::NoSetsEntered);
    }
    if completed < format.sets_to_win() {
        return Err(ValidationError::InsufficientCompletedSets {
            completed,
            required: format.sets_to_win(),
        });
    }
    Ok(())
}

fn check_set(set: &SetScore, format: MatchFormat) -> Result<SetCheck, ValidationError> {
    let index = set.index;

    // A set nobody has started typing into does not count either way.
    if set.player1_games.is_unset() || set.player2_games.is_unset() {
        return Ok(SetCheck::Blank);
    }

    if set.player1_games.is_invalid() || set.player2_games.is_invalid() {
        return Err(ValidationError::NonNumericScore { set: index });
    }

    let p1_games = set.player1_games.or_zero();
    let p2_games = set.player2_games.or_zero();
    if p1_games > MatchFormat::MAX_GAMES || p2_games > MatchFormat::MAX_GAMES {
        return Err(ValidationError::OutOfRangeScore { set: index });
    }

    if set.is_tiebreak_set() {
        return check_tiebreak(set, format);
    }

    if p1_games == p2_games {
        return Err(ValidationError::IllegalGameCombination { set: index });
    }

    let hi = p1_games.max(p2_games);
    let lo = p1_games.min(p2_games);
    if hi == MatchFormat::GAMES_TO_WIN && lo <= MatchFormat::GAMES_TO_WIN - 2 {
        return Ok(SetCheck::Completed);
    }
    if hi == MatchFormat::MAX_GAMES && lo == MatchFormat::MAX_GAMES - 2 {
        return Ok(SetCheck::Completed);
    }
    if hi == MatchFormat::MAX_GAMES && lo == MatchFormat::MAX_GAMES - 1 {
        // 7-6 is only reachable through a 6-6 tiebreak entry.
        return Err(ValidationError::IllegalGameCombination { set: index });
    }
    if hi < MatchFormat::GAMES_TO_WIN {
        return Err(ValidationError::IncompleteSet { set: index });
    }
    Err(ValidationError::IllegalGameCombination { set: index })
}

fn check_tiebreak(set: &SetScore, format: MatchFormat) -> Result<SetCheck, ValidationError> {
    let index = set.index;
    let (Some(p1_points), Some(p2_points)) =
        (set.player1_tiebreak.value(), set.player2_tiebreak.value())
    else {
        return Err(ValidationError::MissingTiebreak { set: index });
    };

    let points_to_win = format.tiebreak_points_to_win(index);
    let reached = p1_points >= points_to_win || p2_points >= points_to_win;
    let margin = p1_points.abs_diff(p2_points);
    if !reached || margin < 2 {
        return Err(ValidationError::InvalidTiebreak { set: index });
    }
    Ok(SetCheck::Completed)
}

#[cfg(test)]
mod tests {
    use super::{ValidationError, validate};
    use crate::model::format::MatchFormat;
    use crate::model::set::{SetEntry, SetScore};

    const FORMAT: MatchFormat = MatchFormat::best_of_three();

    fn set(index: usize, p1: &str, p2: &str) -> SetScore {
        set_with_tiebreak(index, p1, p2, "", "")
    }

    fn set_with_tiebreak(index: usize, p1: &str, p2: &str, tb1: &str, tb2: &str) -> SetScore {
        let entry = SetEntry {
            player1_games: p1.to_string(),
            player2_games: p2.to_string(),
            player1_tiebreak: tb1.to_string(),
            player2_tiebreak: tb2.to_string(),
        };
        entry.parsed(index)
    }

    fn blank(index: usize) -> SetScore {
        set(index, "", "")
    }

    #[test]
    fn straight_sets_pass() {
        let sets = [set(0, "6", "4"), set(1, "7", "5"), blank(2)];
        assert_eq!(validate(&sets, FORMAT), Ok(()));
    }

    #[test]
    fn empty_sheet_reports_no_sets() {
        let sets = [blank(0), blank(1), blank(2)];
        assert_eq!(validate(&sets, FORMAT), Err(ValidationError::NoSetsEntered));
    }

    #[test]
    fn one_completed_set_is_not_enough() {
        // The second slot is shown once the first set is decided, but it has
        // not been touched, so it is skipped rather than failed.
        let sets = [set(0, "6", "2"), blank(1), blank(2)];
        assert_eq!(
            validate(&sets, FORMAT),
            Err(ValidationError::InsufficientCompletedSets {
                completed: 1,
                required: 2,
            })
        );
    }

    #[test]
    fn non_numeric_entry_is_a_hard_error() {
        let sets = [set(0, "6", "four"), blank(1), blank(2)];
        assert_eq!(
            validate(&sets, FORMAT),
            Err(ValidationError::NonNumericScore { set: 0 })
        );
    }

    #[test]
    fn game_counts_above_seven_are_rejected() {
        let sets = [set(0, "8", "6"), blank(1), blank(2)];
        assert_eq!(
            validate(&sets, FORMAT),
            Err(ValidationError::OutOfRangeScore { set: 0 })
        );
    }

    #[test]
    fn six_all_without_tiebreak_fails_at_every_index() {
        for index in 0..3 {
            let mut sets = [set(0, "6", "4"), set(1, "4", "6"), blank(2)];
            sets[index] = set(index, "6", "6");
            assert_eq!(
                validate(&sets, FORMAT),
                Err(ValidationError::MissingTiebreak { set: index }),
                "index {index}"
            );
        }
    }

    #[test]
    fn tiebreak_below_threshold_is_invalid() {
        let sets = [
            set_with_tiebreak(0, "6", "6", "6", "4"),
            blank(1),
            blank(2),
        ];
        assert_eq!(
            validate(&sets, FORMAT),
            Err(ValidationError::InvalidTiebreak { set: 0 })
        );
    }

    #[test]
    fn tiebreak_needs_two_point_margin() {
        let sets = [
            set_with_tiebreak(0, "6", "6", "7", "6"),
            blank(1),
            blank(2),
        ];
        assert_eq!(
            validate(&sets, FORMAT),
            Err(ValidationError::InvalidTiebreak { set: 0 })
        );
    }

    #[test]
    fn extended_tiebreak_with_margin_passes() {
        let sets = [
            set_with_tiebreak(0, "6", "6", "11", "9"),
            set(1, "6", "0"),
            blank(2),
        ];
        assert_eq!(validate(&sets, FORMAT), Ok(()));
    }

    #[test]
    fn decider_tiebreak_must_reach_ten() {
        let sets = [
            set(0, "6", "4"),
            set(1, "4", "6"),
            set_with_tiebreak(2, "6", "6", "7", "5"),
        ];
        assert_eq!(
            validate(&sets, FORMAT),
            Err(ValidationError::InvalidTiebreak { set: 2 })
        );

        let decided = [
            set(0, "6", "4"),
            set(1, "4", "6"),
            set_with_tiebreak(2, "6", "6", "10", "8"),
        ];
        assert_eq!(validate(&decided, FORMAT), Ok(()));
    }

    #[test]
    fn direct_seven_six_is_illegal() {
        let sets = [set(0, "7", "6"), set(1, "6", "3"), blank(2)];
        assert_eq!(
            validate(&sets, FORMAT),
            Err(ValidationError::IllegalGameCombination { set: 0 })
        );
    }

    #[test]
    fn tied_game_counts_are_illegal() {
        let sets = [set(0, "4", "4"), blank(1), blank(2)];
        assert_eq!(
            validate(&sets, FORMAT),
            Err(ValidationError::IllegalGameCombination { set: 0 })
        );
    }

    #[test]
    fn six_five_is_not_a_finished_set() {
        let sets = [set(0, "6", "5"), blank(1), blank(2)];
        assert_eq!(
            validate(&sets, FORMAT),
            Err(ValidationError::IllegalGameCombination { set: 0 })
        );
    }

    #[test]
    fn low_scorelines_are_incomplete() {
        let sets = [set(0, "5", "3"), blank(1), blank(2)];
        assert_eq!(
            validate(&sets, FORMAT),
            Err(ValidationError::IncompleteSet { set: 0 })
        );
    }

    #[test]
    fn seven_four_is_illegal() {
        let sets = [set(0, "7", "4"), blank(1), blank(2)];
        assert_eq!(
            validate(&sets, FORMAT),
            Err(ValidationError::IllegalGameCombination { set: 0 })
        );
    }

    #[test]
    fn hidden_sets_are_not_validated() {
        // Only one slot is shown while the first set is undecided; junk in
        // later slots cannot fail the check yet, so the sheet just reads as
        // having no completed sets.
        let sets = [blank(0), set(1, "9", "abc"), blank(2)];
        assert_eq!(validate(&sets, FORMAT), Err(ValidationError::NoSetsEntered));
    }

    #[test]
    fn validation_is_idempotent() {
        let sets = [set(0, "6", "4"), set(1, "4", "6"), set(2, "6", "1")];
        let first = validate(&sets, FORMAT);
        assert_eq!(first, Ok(()));
        assert_eq!(validate(&sets, FORMAT), first);
    }
}
