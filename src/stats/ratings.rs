// Controller connections per rating

use super::DataIntegrityFault;
use crate::feed::Snapshot;
use std::fmt;

/// Controller ratings tracked on the info panel, highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RatingCode {
    Adm,
    Sup,
    I3,
    I1,
    C3,
    C1,
    S3,
    S2,
    S1,
}

impl RatingCode {
    pub const ALL: [RatingCode; 9] = [
        RatingCode::Adm,
        RatingCode::Sup,
        RatingCode::I3,
        RatingCode::I1,
        RatingCode::C3,
        RatingCode::C1,
        RatingCode::S3,
        RatingCode::S2,
        RatingCode::S1,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RatingCode::Adm => "ADM",
            RatingCode::Sup => "SUP",
            RatingCode::I3 => "I3",
            RatingCode::I1 => "I1",
            RatingCode::C3 => "C3",
            RatingCode::C1 => "C1",
            RatingCode::S3 => "S3",
            RatingCode::S2 => "S2",
            RatingCode::S1 => "S1",
        }
    }

    /// Parse a short code from the feed's rating table
    ///
    /// Codes outside the tracked set (OBS, C2, I2, ...) yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        RatingCode::ALL
            .into_iter()
            .find(|rating| rating.as_str() == code)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RatingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Connection count for every tracked rating code
///
/// Every code in `RatingCode::ALL` is always present, zero when unused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingCounts {
    counts: [u32; RatingCode::ALL.len()],
}

impl RatingCounts {
    pub fn get(&self, code: RatingCode) -> u32 {
        self.counts[code.index()]
    }

    /// All codes with their counts, in `RatingCode::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (RatingCode, u32)> + '_ {
        RatingCode::ALL
            .into_iter()
            .map(move |code| (code, self.get(code)))
    }

    /// Controllers counted across all tracked codes
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    fn increment(&mut self, code: RatingCode) {
        self.counts[code.index()] += 1;
    }
}

/// Count connected controllers per rating code
///
/// Fails if a controller references a rating id the snapshot's own rating
/// table does not define; nothing is returned in that case.
pub fn connections_per_rating(snapshot: &Snapshot) -> Result<RatingCounts, DataIntegrityFault> {
    let mut counts = RatingCounts::default();
    for controller in &snapshot.controllers {
        let code = snapshot
            .rating_code(controller.rating)
            .ok_or_else(|| DataIntegrityFault::UnknownRating {
                callsign: controller.callsign.clone(),
                rating_id: controller.rating,
            })?;

        if let Some(code) = RatingCode::from_code(code) {
            counts.increment(code);
        }
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{Controller, Rating};
    use proptest::prelude::*;

    fn rating_table() -> Vec<Rating> {
        [
            (1, "OBS"),
            (2, "S1"),
            (3, "S2"),
            (4, "S3"),
            (5, "C1"),
            (6, "C2"),
            (7, "C3"),
            (8, "I1"),
            (9, "I2"),
            (10, "I3"),
            (11, "SUP"),
            (12, "ADM"),
        ]
        .into_iter()
        .map(|(id, short)| Rating {
            id,
            short: short.to_string(),
            long: String::new(),
        })
        .collect()
    }

    fn controller(callsign: &str, rating: i32) -> Controller {
        Controller {
            callsign: callsign.to_string(),
            rating,
            ..Default::default()
        }
    }

    fn snapshot_with(controllers: Vec<Controller>) -> Snapshot {
        Snapshot {
            controllers,
            ratings: rating_table(),
            ..Default::default()
        }
    }

    #[test]
    fn test_counts_c1_c1_s2() {
        let snapshot = snapshot_with(vec![
            controller("EGLL_TWR", 5),
            controller("EDDF_APP", 5),
            controller("KJFK_GND", 3),
        ]);

        let counts = connections_per_rating(&snapshot).unwrap();

        assert_eq!(counts.get(RatingCode::C1), 2);
        assert_eq!(counts.get(RatingCode::S2), 1);
        for (code, count) in counts.iter() {
            if code != RatingCode::C1 && code != RatingCode::S2 {
                assert_eq!(count, 0, "{code} should be zero");
            }
        }
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_no_controllers_yields_all_zero() {
        let counts = connections_per_rating(&snapshot_with(Vec::new())).unwrap();

        let codes: Vec<RatingCode> = counts.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, RatingCode::ALL.to_vec());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_untracked_codes_are_ignored() {
        // OBS, C2 and I2 resolve but are not on the panel
        let snapshot = snapshot_with(vec![
            controller("OBS_1", 1),
            controller("LON_C", 6),
            controller("EDWW_CTR", 9),
            controller("EGKK_TWR", 2),
        ]);

        let counts = connections_per_rating(&snapshot).unwrap();
        assert_eq!(counts.get(RatingCode::S1), 1);
        assert_eq!(counts.total(), 1);
    }

    #[test]
    fn test_unknown_rating_id_is_a_fault() {
        let snapshot = snapshot_with(vec![controller("EGLL_TWR", 5), controller("XXXX_CTR", 42)]);

        let err = connections_per_rating(&snapshot).unwrap_err();
        assert_eq!(
            err,
            DataIntegrityFault::UnknownRating {
                callsign: "XXXX_CTR".to_string(),
                rating_id: 42,
            }
        );
    }

    #[test]
    fn test_rating_code_round_trip_through_str() {
        for code in RatingCode::ALL {
            assert_eq!(RatingCode::from_code(code.as_str()), Some(code));
        }
        assert_eq!(RatingCode::from_code("C2"), None);
        assert_eq!(RatingCode::from_code("c1"), None);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The result always carries exactly the tracked codes and counts each
        /// controller holding one of them once.
        #[test]
        fn prop_key_set_is_fixed(ratings in prop::collection::vec(1i32..=12, 0..60)) {
            let controllers = ratings
                .iter()
                .enumerate()
                .map(|(i, rating)| controller(&format!("CTR_{i}"), *rating))
                .collect();
            let snapshot = snapshot_with(controllers);

            let counts = connections_per_rating(&snapshot).unwrap();

            let codes: Vec<RatingCode> = counts.iter().map(|(code, _)| code).collect();
            prop_assert_eq!(codes, RatingCode::ALL.to_vec());

            let tracked = ratings
                .iter()
                .filter(|id| !matches!(**id, 1 | 6 | 9))
                .count() as u32;
            prop_assert_eq!(counts.total(), tracked);

            // Same input, same answer
            prop_assert_eq!(connections_per_rating(&snapshot).unwrap(), counts);
        }

        /// A single unresolvable id anywhere in the list fails the whole count.
        #[test]
        fn prop_unknown_id_always_faults(
            ratings in prop::collection::vec(1i32..=12, 0..30),
            bad in 13i32..1000,
            position in 0usize..31,
        ) {
            let mut controllers: Vec<Controller> = ratings
                .iter()
                .enumerate()
                .map(|(i, rating)| controller(&format!("CTR_{i}"), *rating))
                .collect();
            let position = position.min(controllers.len());
            controllers.insert(position, controller("BAD_CTR", bad));

            let result = connections_per_rating(&snapshot_with(controllers));
            let faulted = matches!(
                result,
                Err(DataIntegrityFault::UnknownRating { rating_id, .. }) if rating_id == bad
            );
            prop_assert!(faulted);
        }
    }
}
