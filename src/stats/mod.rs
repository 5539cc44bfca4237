// Snapshot aggregation
//
// Pure reductions from a Snapshot to the figures shown on screen. Nothing
// here is incremental: every refresh recomputes from the new snapshot.

mod airfields;
mod ratings;

pub use airfields::{airfield_rankings, AirfieldCount, Airfields};
pub use ratings::{connections_per_rating, RatingCode, RatingCounts};

use crate::feed::Snapshot;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// A decoded snapshot whose content contradicts itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataIntegrityFault {
    #[error("controller {callsign} has rating id {rating_id}, which the feed's rating table does not define")]
    UnknownRating { callsign: String, rating_id: i32 },
}

/// Everything the panels need from one snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub generated_at: DateTime<Utc>,
    pub connected_clients: u32,
    pub unique_users: u32,
    pub pilots: usize,
    pub controllers: usize,
    pub ratings: RatingCounts,
    pub airfields: Airfields,
}

impl Summary {
    /// Aggregate a snapshot; any fault aborts the whole summary
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, DataIntegrityFault> {
        Ok(Self {
            generated_at: snapshot.generated_at(),
            connected_clients: snapshot.general.connected_clients,
            unique_users: snapshot.general.unique_users,
            pilots: snapshot.pilots.len(),
            controllers: snapshot.controllers.len(),
            ratings: connections_per_rating(snapshot)?,
            airfields: airfield_rankings(snapshot),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = include_str!("../feed/fixture.json");

    #[test]
    fn test_summary_of_fixture() {
        let snapshot = Snapshot::from_json(FIXTURE.as_bytes()).unwrap();
        let summary = Summary::from_snapshot(&snapshot).unwrap();

        assert_eq!(summary.generated_at, snapshot.generated_at());
        assert_eq!(summary.connected_clients, 9);
        assert_eq!(summary.pilots, 6);
        assert_eq!(summary.ratings.get(RatingCode::C1), 2);
        assert_eq!(summary.ratings.get(RatingCode::S2), 1);

        let departures: Vec<(&str, u32)> = summary
            .airfields
            .departures
            .iter()
            .map(|a| (a.icao.as_str(), a.count))
            .collect();
        assert_eq!(departures, vec![("EGLL", 2), ("EDDF", 2), ("KJFK", 1)]);
        assert_eq!(summary.airfields.arrivals[0].icao, "EGLL");
        assert_eq!(summary.airfields.arrivals.len(), 4);
    }

    #[test]
    fn test_summary_is_repeatable() {
        let snapshot = Snapshot::from_json(FIXTURE.as_bytes()).unwrap();
        assert_eq!(
            Summary::from_snapshot(&snapshot).unwrap(),
            Summary::from_snapshot(&snapshot).unwrap()
        );
    }

    #[test]
    fn test_fault_aborts_summary() {
        let mut snapshot = Snapshot::from_json(FIXTURE.as_bytes()).unwrap();
        snapshot.ratings.retain(|rating| rating.short != "S2");

        let err = Summary::from_snapshot(&snapshot).unwrap_err();
        assert_eq!(
            err.to_string(),
            "controller KJFK_GND has rating id 3, which the feed's rating table does not define"
        );
    }
}
