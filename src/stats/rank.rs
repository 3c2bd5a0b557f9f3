use crate::api::CountryStat;

/// Order country records by cumulative case count, descending.
///
/// Returns a new vector; the input is never mutated. The sort is stable, so
/// records with equal case counts keep the relative order the source gave
/// them in. A record with no reported case count ranks below any record
/// with one (`None` compares lower than any `Some`).
pub fn rank(records: &[CountryStat]) -> Vec<CountryStat> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| b.counts.cases.cmp(&a.counts.cases));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Counts;

    fn stat(name: &str, cases: Option<u64>) -> CountryStat {
        CountryStat {
            name: name.to_string(),
            counts: Counts {
                cases,
                ..Counts::default()
            },
            ..CountryStat::default()
        }
    }

    fn names(records: &[CountryStat]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(&[]).is_empty());
    }

    #[test]
    fn test_rank_single() {
        let input = vec![stat("A", Some(5))];
        assert_eq!(names(&rank(&input)), ["A"]);
    }

    #[test]
    fn test_rank_descending_with_stable_ties() {
        // Equal counts keep input order: B before C.
        let input = vec![stat("A", Some(50)), stat("B", Some(200)), stat("C", Some(200))];
        assert_eq!(names(&rank(&input)), ["B", "C", "A"]);
    }

    #[test]
    fn test_rank_absent_sorts_last() {
        let input = vec![stat("A", None), stat("B", Some(1)), stat("C", Some(0))];
        assert_eq!(names(&rank(&input)), ["B", "C", "A"]);
    }

    #[test]
    fn test_rank_does_not_mutate_input() {
        let input = vec![stat("A", Some(1)), stat("B", Some(2))];
        let _ = rank(&input);
        assert_eq!(names(&input), ["A", "B"]);
    }

    #[test]
    fn test_rank_idempotent() {
        let input = vec![
            stat("A", Some(3)),
            stat("B", None),
            stat("C", Some(9)),
            stat("D", Some(3)),
        ];
        let once = rank(&input);
        let twice = rank(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rank_output_ordered_pairwise() {
        let input = vec![
            stat("A", Some(7)),
            stat("B", None),
            stat("C", Some(7)),
            stat("D", Some(100)),
            stat("E", Some(0)),
        ];
        let ranked = rank(&input);
        assert_eq!(ranked.len(), input.len());
        for pair in ranked.windows(2) {
            assert!(
                pair[0].counts.cases >= pair[1].counts.cases,
                "{:?} should not precede {:?}",
                pair[1].counts.cases,
                pair[0].counts.cases
            );
        }
    }
}
