//! Fitness scoring for candidate schedules.
//!
//! `score` is a pure function of the chromosome and the catalog snapshot:
//! identical inputs always yield identical scores.

use std::collections::HashMap;

use crate::catalog::CatalogSnapshot;

use super::chromosome::{Chromosome, Gene};

const BASE_SCORE: i64 = 100;
/// Three consecutive slots of the same subject.
const REPEAT_PENALTY: i64 = 10;
/// Three consecutive non-free slots, regardless of subject.
const FATIGUE_PENALTY: i64 = 5;
/// Per lesson over a subject's weekly count.
const OVERAGE_PENALTY: i64 = 5;

/// Scores a chromosome against the catalog snapshot.
///
/// Starts from a baseline of 100 and applies three independent, additive
/// rules:
///
/// - **Repeat**: each 3-slot window within a day holding the same non-free
///   gene costs 10. Overlapping windows stack, so a run of four identical
///   slots costs 20.
/// - **Quota**: per subject, lessons above the weekly count cost 5 each;
///   otherwise every placed lesson earns 1. Shortfall itself is never
///   penalized, only under-rewarded.
/// - **Fatigue**: each 3-slot window within a day with no free period costs
///   5, stacking with the repeat rule on the same window.
pub fn score(chromosome: &Chromosome, snapshot: &CatalogSnapshot) -> i64 {
    let mut score = BASE_SCORE;

    for day in chromosome.iter_days() {
        for window in day.windows(3) {
            if !window[0].is_free() && window[0] == window[1] && window[1] == window[2] {
                score -= REPEAT_PENALTY;
            }
            if window.iter().all(|g| !g.is_free()) {
                score -= FATIGUE_PENALTY;
            }
        }
    }

    let mut occurrences: HashMap<&str, u32> = HashMap::new();
    for gene in chromosome.genes() {
        if let Gene::Subject(name) = gene {
            *occurrences.entry(name.as_str()).or_insert(0) += 1;
        }
    }

    for (name, &required) in snapshot {
        let actual = occurrences.get(name.as_str()).copied().unwrap_or(0);
        if actual > required {
            score -= OVERAGE_PENALTY * i64::from(actual - required);
        } else {
            score += i64::from(actual);
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(name: &str) -> Gene {
        Gene::Subject(name.to_string())
    }

    fn chromosome(days: Vec<Vec<Gene>>) -> Chromosome {
        Chromosome::from_days(days)
    }

    fn snapshot(entries: &[(&str, u32)]) -> CatalogSnapshot {
        entries
            .iter()
            .map(|(name, count)| (name.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_score_is_deterministic() {
        let snap = snapshot(&[("Math", 3), ("Physics", 2)]);
        let ch = chromosome(vec![
            vec![subject("Math"), subject("Physics"), Gene::Free],
            vec![subject("Math"), Gene::Free, subject("Math")],
        ]);

        let first = score(&ch, &snap);
        for _ in 0..10 {
            assert_eq!(score(&ch, &snap), first);
        }
    }

    #[test]
    fn test_quota_reward_counts_placed_lessons() {
        let snap = snapshot(&[("Math", 3)]);
        // 2 of 3 Math lessons placed, no 3-windows possible
        let ch = chromosome(vec![
            vec![subject("Math"), Gene::Free],
            vec![subject("Math"), Gene::Free],
        ]);
        assert_eq!(score(&ch, &snap), 100 + 2);
    }

    #[test]
    fn test_quota_overage_penalty() {
        let snap = snapshot(&[("Math", 3)]);
        // 4 Math lessons against a quota of 3, spread out so no window fires
        let ch = chromosome(vec![
            vec![subject("Math"), Gene::Free, subject("Math")],
            vec![subject("Math"), Gene::Free, subject("Math")],
        ]);
        // 5 × (4 − 3) = 5 off the baseline
        assert_eq!(score(&ch, &snap), 100 - 5);
    }

    #[test]
    fn test_stacked_window_penalties() {
        let snap = snapshot(&[("Math", 3), ("Physics", 1)]);
        let ch = chromosome(vec![vec![
            subject("Math"),
            subject("Math"),
            subject("Math"),
            subject("Physics"),
            Gene::Free,
            Gene::Free,
        ]]);

        // First window: repeat (−10) and fatigue (−5) stack. The next
        // window (Math, Math, Physics) is still all non-free (−5); the
        // window holding the free slot triggers nothing.
        // Quota: +3 Math, +1 Physics.
        assert_eq!(score(&ch, &snap), 100 - 10 - 5 - 5 + 3 + 1);
    }

    #[test]
    fn test_overlapping_repeat_windows_stack() {
        let snap = snapshot(&[("Math", 4)]);
        let ch = chromosome(vec![vec![
            subject("Math"),
            subject("Math"),
            subject("Math"),
            subject("Math"),
            Gene::Free,
        ]]);

        // Two overlapping repeat windows (−20), two fatigue windows (−10),
        // quota reward +4.
        assert_eq!(score(&ch, &snap), 100 - 20 - 10 + 4);
    }

    #[test]
    fn test_free_runs_are_not_penalized() {
        let snap = snapshot(&[("Math", 3)]);
        let ch = chromosome(vec![vec![Gene::Free, Gene::Free, Gene::Free, Gene::Free]]);
        assert_eq!(score(&ch, &snap), 100);
    }

    #[test]
    fn test_fatigue_fires_across_distinct_subjects() {
        let snap = snapshot(&[("Math", 1), ("Physics", 1), ("Chemistry", 1)]);
        let ch = chromosome(vec![vec![
            subject("Math"),
            subject("Physics"),
            subject("Chemistry"),
        ]]);

        // One fatigue window (−5), no repeat, +1 per subject placed.
        assert_eq!(score(&ch, &snap), 100 - 5 + 3);
    }

    #[test]
    fn test_short_days_have_no_windows() {
        let snap = snapshot(&[("Math", 2)]);
        let ch = chromosome(vec![
            vec![subject("Math"), subject("Math")],
            vec![Gene::Free, Gene::Free],
        ]);
        assert_eq!(score(&ch, &snap), 100 + 2);
    }
}
