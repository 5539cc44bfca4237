// Airfield popularity rankings

use crate::feed::{FlightPlan, Snapshot};
use std::collections::HashMap;

/// Which end of a flight plan to rank by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightLeg {
    Departure,
    Arrival,
}

impl FlightLeg {
    fn airport(self, plan: &FlightPlan) -> &str {
        match self {
            FlightLeg::Departure => &plan.departure,
            FlightLeg::Arrival => &plan.arrival,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirfieldCount {
    pub icao: String,
    pub count: u32,
}

/// Departure and arrival rankings, each sorted independently
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Airfields {
    pub departures: Vec<AirfieldCount>,
    pub arrivals: Vec<AirfieldCount>,
}

/// Rank airports by how many filed flight plans use them for `leg`
///
/// Sorted by count descending. Ties keep the order in which airports were
/// first seen in the pilot list. Pilots without a flight plan are skipped,
/// and airports with no flights never appear.
pub fn popular_airfields(snapshot: &Snapshot, leg: FlightLeg) -> Vec<AirfieldCount> {
    let mut ranking: Vec<AirfieldCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for plan in snapshot.flight_plans() {
        let icao = leg.airport(plan);
        match positions.get(icao) {
            Some(&idx) => ranking[idx].count += 1,
            None => {
                positions.insert(icao, ranking.len());
                ranking.push(AirfieldCount {
                    icao: icao.to_string(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable, so first-seen order survives among equal counts
    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking
}

/// Both rankings for one snapshot
pub fn airfield_rankings(snapshot: &Snapshot) -> Airfields {
    Airfields {
        departures: popular_airfields(snapshot, FlightLeg::Departure),
        arrivals: popular_airfields(snapshot, FlightLeg::Arrival),
    }
}
