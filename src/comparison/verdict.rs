use super::types::{AggregateVerdict, ComparisonOutcome, Winner};

/// Count outcomes per winner and pick the overall winner.
///
/// The side with strictly more wins takes the verdict; equal counts,
/// including an empty outcome list, resolve to a tie.
pub fn tally(outcomes: &[ComparisonOutcome]) -> AggregateVerdict {
    let count = |tag: Winner| outcomes.iter().filter(|o| o.winner == tag).count();

    let first_wins = count(Winner::First);
    let second_wins = count(Winner::Second);
    let ties = count(Winner::Tie);

    AggregateVerdict {
        first_wins,
        second_wins,
        ties,
        winner: overall_winner(first_wins, second_wins),
    }
}

fn overall_winner(first_wins: usize, second_wins: usize) -> Winner {
    use std::cmp::Ordering;
    match first_wins.cmp(&second_wins) {
        Ordering::Greater => Winner::First,
        Ordering::Less => Winner::Second,
        Ordering::Equal => Winner::Tie,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::metric::Direction;

    fn outcome(winner: Winner) -> ComparisonOutcome {
        ComparisonOutcome {
            category: "x".into(),
            description: String::new(),
            direction: Direction::HigherIsBetter,
            first_value: "1".into(),
            second_value: "2".into(),
            winner,
        }
    }

    #[test]
    fn empty_outcomes_tie() {
        let verdict = tally(&[]);
        assert_eq!(verdict.winner, Winner::Tie);
        assert_eq!(verdict.total(), 0);
    }

    #[test]
    fn strict_majority_wins() {
        let outcomes = vec![
            outcome(Winner::First),
            outcome(Winner::First),
            outcome(Winner::Second),
            outcome(Winner::Tie),
        ];
        let verdict = tally(&outcomes);
        assert_eq!(verdict.first_wins, 2);
        assert_eq!(verdict.second_wins, 1);
        assert_eq!(verdict.ties, 1);
        assert_eq!(verdict.winner, Winner::First);
    }

    #[test]
    fn ties_do_not_break_equal_counts() {
        let outcomes = vec![
            outcome(Winner::First),
            outcome(Winner::Second),
            outcome(Winner::Tie),
            outcome(Winner::Tie),
        ];
        assert_eq!(tally(&outcomes).winner, Winner::Tie);
    }

    #[test]
    fn all_ties_is_a_tie() {
        let outcomes = vec![outcome(Winner::Tie); 6];
        let verdict = tally(&outcomes);
        assert_eq!(verdict.ties, 6);
        assert_eq!(verdict.winner, Winner::Tie);
    }
}
