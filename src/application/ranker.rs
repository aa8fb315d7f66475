//! Candidate merge, deduplication and ranking.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Candidate, EventLabel, TradePlan};

/// Maximum number of plans emitted per headline.
pub const MAX_PLANS: usize = 3;

/// Deduplicate, rank and truncate `candidates`.
///
/// Candidates sharing a formatted line collapse to the highest-scoring one,
/// which keeps the position of the first occurrence. The survivors are
/// stably sorted by descending confidence, so ties keep first-seen order,
/// and truncated to `max`. An empty result becomes the single no-action
/// plan for `label`.
#[must_use]
pub fn rank(candidates: Vec<Candidate>, label: &EventLabel, max: usize) -> Vec<TradePlan> {
    let total = candidates.len();
    let mut kept: Vec<Candidate> = Vec::with_capacity(total);
    let mut index: HashMap<String, usize> = HashMap::with_capacity(total);

    for candidate in candidates {
        match index.get(&candidate.line) {
            Some(&i) => {
                if candidate.confidence > kept[i].confidence {
                    kept[i] = candidate;
                }
            }
            None => {
                index.insert(candidate.line.clone(), kept.len());
                kept.push(candidate);
            }
        }
    }

    kept.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    kept.truncate(max);
    debug!(total, kept = kept.len(), "Candidates ranked");

    if kept.is_empty() {
        return vec![TradePlan::no_action(label, "no candidate survived")];
    }
    kept.into_iter()
        .map(|c| TradePlan::from_candidate(c, label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssetClass, Confidence};

    fn candidate(line: &str, score: f64) -> Candidate {
        Candidate::new(
            line,
            AssetClass::Equity,
            Confidence::try_new(score).unwrap(),
            format!("why {score}"),
        )
    }

    fn label() -> EventLabel {
        EventLabel::from("ma_rumor")
    }

    #[test]
    fn duplicate_keeps_higher_score_regardless_of_order() {
        for input in [
            vec![candidate("X", 0.6), candidate("X", 0.8)],
            vec![candidate("X", 0.8), candidate("X", 0.6)],
        ] {
            let plans = rank(input, &label(), MAX_PLANS);
            assert_eq!(plans.len(), 1);
            assert_eq!(plans[0].confidence.value(), 0.8);
            assert_eq!(plans[0].rationale, "why 0.8");
        }
    }

    #[test]
    fn sorted_descending_and_truncated() {
        let plans = rank(
            vec![
                candidate("A", 0.45),
                candidate("B", 0.95),
                candidate("C", 0.60),
                candidate("D", 0.85),
                candidate("E", 0.65),
            ],
            &label(),
            MAX_PLANS,
        );
        let lines: Vec<_> = plans.iter().map(|p| p.line.as_str()).collect();
        assert_eq!(lines, vec!["B", "D", "E"]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let plans = rank(
            vec![
                candidate("FIRST", 0.58),
                candidate("SECOND", 0.58),
                candidate("THIRD", 0.58),
            ],
            &label(),
            MAX_PLANS,
        );
        let lines: Vec<_> = plans.iter().map(|p| p.line.as_str()).collect();
        assert_eq!(lines, vec!["FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn empty_input_yields_sentinel() {
        let plans = rank(Vec::new(), &EventLabel::ambiguous(), MAX_PLANS);
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].line, "NO ACTION (macro_ambiguous)");
        assert_eq!(plans[0].confidence, Confidence::ZERO);
        assert!(plans[0].is_no_action());
    }

    #[test]
    fn plans_carry_label() {
        let plans = rank(vec![candidate("A", 0.5)], &label(), MAX_PLANS);
        assert_eq!(plans[0].label, "ma_rumor");
        assert_eq!(plans[0].asset_class, Some(AssetClass::Equity));
    }
}
