//! Summary counts over fetched responses

use crate::types::StoredResponse;
use serde::{Deserialize, Serialize};

/// Derived totals, recomputed on every fetch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedTotals {
    /// Entries with accepted status
    pub yes: usize,
    /// Entries with declined status
    pub no: usize,
    /// Sum of party sizes over accepted entries
    pub total_attendees: u64,
}

impl AggregatedTotals {
    /// Fold a response list into totals
    ///
    /// Entries with an unknown status land in neither bucket.
    #[must_use]
    pub fn from_responses(responses: &[StoredResponse]) -> Self {
        responses.iter().fold(Self::default(), |mut acc, r| {
            if r.is_accepted() {
                acc.yes += 1;
                acc.total_attendees += u64::from(r.attendees());
            } else if r.is_declined() {
                acc.no += 1;
            }
            acc
        })
    }
}

impl std::fmt::Display for AggregatedTotals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Yes: {} | No: {} | Attendees: {}",
            self.yes, self.no, self.total_attendees
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn response(status: i32, count: Option<u32>) -> StoredResponse {
        StoredResponse {
            id: String::new(),
            name: "guest".to_string(),
            status,
            count,
            message: None,
        }
    }

    #[test]
    fn totals_for_mixed_list() {
        let list = vec![
            response(1, Some(2)),
            response(1, Some(1)),
            response(0, None),
        ];
        let totals = AggregatedTotals::from_responses(&list);
        assert_eq!(
            totals,
            AggregatedTotals {
                yes: 2,
                no: 1,
                total_attendees: 3
            }
        );
    }

    #[test]
    fn declined_counts_are_ignored() {
        let list = vec![response(0, Some(5)), response(1, None)];
        let totals = AggregatedTotals::from_responses(&list);
        assert_eq!(totals.total_attendees, 0);
        assert_eq!(totals.yes, 1);
    }

    #[test]
    fn empty_list() {
        assert_eq!(
            AggregatedTotals::from_responses(&[]),
            AggregatedTotals::default()
        );
    }

    #[test]
    fn display_line() {
        let totals = AggregatedTotals {
            yes: 2,
            no: 1,
            total_attendees: 3,
        };
        assert_eq!(totals.to_string(), "Yes: 2 | No: 1 | Attendees: 3");
    }

    proptest! {
        #[test]
        fn prop_totals_invariants(
            entries in prop::collection::vec((-1i32..3, prop::option::of(0u32..30)), 0..50)
        ) {
            let list: Vec<_> = entries.iter().map(|(s, c)| response(*s, *c)).collect();
            let totals = AggregatedTotals::from_responses(&list);

            let expected: u64 = list
                .iter()
                .filter(|r| r.status == 1)
                .map(|r| u64::from(r.count.unwrap_or(0)))
                .sum();
            prop_assert_eq!(totals.total_attendees, expected);
            prop_assert!(totals.yes + totals.no <= list.len());
        }
    }
}
