use crate::domain::{MatchScore, SetScore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

/// Aggregate counts derived from a raw set-by-set score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreSummary {
    pub sets_a: u32,
    pub sets_b: u32,
    pub games_a: u32,
    pub games_b: u32,
}

impl ScoreSummary {
    /// Side with strictly more sets won; None when the sets tie
    pub fn winner(&self) -> Option<Side> {
        if self.sets_a > self.sets_b {
            Some(Side::A)
        } else if self.sets_b > self.sets_a {
            Some(Side::B)
        } else {
            None
        }
    }

    /// (sets_won, sets_lost, games_won, games_lost) as seen from one side
    pub fn from_side(&self, side: Side) -> (u32, u32, u32, u32) {
        match side {
            Side::A => (self.sets_a, self.sets_b, self.games_a, self.games_b),
            Side::B => (self.sets_b, self.sets_a, self.games_b, self.games_a),
        }
    }
}

/// Turn a raw score into set and game tallies.
///
/// A set goes to the side with the strictly greater value; equal values award
/// no set to either side. A missing third set contributes nothing.
pub fn resolve_score(score: &MatchScore) -> ScoreSummary {
    let mut summary = ScoreSummary::default();

    tally_set(&mut summary, &score.set1);
    tally_set(&mut summary, &score.set2);
    if let Some(set3) = &score.set3 {
        tally_set(&mut summary, set3);
    }

    summary
}

fn tally_set(summary: &mut ScoreSummary, set: &SetScore) {
    summary.games_a += set.a;
    summary.games_b += set.b;

    if set.a > set.b {
        summary.sets_a += 1;
    } else if set.b > set.a {
        summary.sets_b += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SetScore;

    fn score(s1: (u32, u32), s2: (u32, u32), s3: Option<(u32, u32)>) -> MatchScore {
        MatchScore::new(
            SetScore::new(s1.0, s1.1),
            SetScore::new(s2.0, s2.1),
            s3.map(|(a, b)| SetScore::new(a, b)),
        )
    }

    #[test]
    fn straight_sets_win_for_side_a() {
        let summary = resolve_score(&score((6, 2), (6, 3), None));
        assert_eq!(summary.sets_a, 2);
        assert_eq!(summary.sets_b, 0);
        assert_eq!(summary.games_a, 12);
        assert_eq!(summary.games_b, 5);
        assert_eq!(summary.winner(), Some(Side::A));
    }

    #[test]
    fn third_set_decides_the_match() {
        let summary = resolve_score(&score((6, 4), (3, 6), Some((5, 7))));
        assert_eq!(summary.sets_a, 1);
        assert_eq!(summary.sets_b, 2);
        assert_eq!(summary.winner(), Some(Side::B));
    }

    #[test]
    fn equal_set_values_award_no_set() {
        let summary = resolve_score(&score((0, 0), (0, 0), Some((0, 0))));
        assert_eq!(summary.sets_a, 0);
        assert_eq!(summary.sets_b, 0);
        assert_eq!(summary.winner(), None);
    }

    #[test]
    fn missing_third_set_contributes_nothing() {
        let with = resolve_score(&score((6, 0), (0, 6), Some((0, 0))));
        let without = resolve_score(&score((6, 0), (0, 6), None));
        assert_eq!(with.sets_a, without.sets_a);
        assert_eq!(with.games_a, without.games_a);
    }

    #[test]
    fn from_side_mirrors_counts() {
        let summary = resolve_score(&score((6, 2), (6, 3), None));
        assert_eq!(summary.from_side(Side::A), (2, 0, 12, 5));
        assert_eq!(summary.from_side(Side::B), (0, 2, 5, 12));
    }
}
