use crate::model::format::MatchFormat;
use crate::model::set::SetScore;
use crate::score::estimator::sets_to_show;
use crate::score::resolver::resolve_set;
use core::fmt::Write;

/// Render the sets currently in play as the canonical score line, e.g.
/// `"6-4, 7-6(7-5)"`. Pure rendering: sets with missing game counts are
/// omitted and nothing is checked for legality.
pub fn format_score(sets: &[SetScore], format: MatchFormat) -> String {
    let outcomes: Vec<_> = sets.iter().map(|set| resolve_set(set, format)).collect();
    let shown = sets_to_show(&outcomes, format);

    let mut rendered = String::new();
    for set in sets.iter().take(shown) {
        let (Some(p1_games), Some(p2_games)) =
            (set.player1_games.value(), set.player2_games.value())
        else {
            continue;
        };

        if !rendered.is_empty() {
            rendered.push_str(", ");
        }
        let _ = write!(rendered, "{p1_games}-{p2_games}");

        // Any recorded tiebreak points ride along in parentheses; which sets
        // may legitimately carry them is the validator's concern.
        let p1_points = set.player1_tiebreak.or_zero();
        let p2_points = set.player2_tiebreak.or_zero();
        if p1_points > 0 || p2_points > 0 {
            let _ = write!(rendered, "({p1_points}-{p2_points})");
        }
    }
    rendered
}
