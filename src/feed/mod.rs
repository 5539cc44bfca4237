// VATSIM data feed model
//
// Serde types for the v3 data document. A Snapshot is immutable once
// decoded and is replaced wholesale on every refresh.

// The model mirrors the whole document; only some fields reach the screen
#![allow(dead_code)]

pub mod source;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One decoded feed response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Snapshot {
    pub general: GeneralInfo,
    #[serde(default)]
    pub pilots: Vec<Pilot>,
    #[serde(default)]
    pub controllers: Vec<Controller>,
    #[serde(default)]
    pub atis: Vec<Atis>,
    #[serde(default)]
    pub servers: Vec<Server>,
    #[serde(default)]
    pub prefiles: Vec<Prefile>,
    #[serde(default)]
    pub facilities: Vec<Facility>,
    #[serde(default)]
    pub ratings: Vec<Rating>,
    #[serde(default)]
    pub pilot_ratings: Vec<PilotRating>,
}

impl Snapshot {
    /// Decode a snapshot from the raw feed body
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    /// Timestamp declared by the feed itself, not the time of receipt
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.general.update_timestamp
    }

    /// Resolve a controller rating id to its short code (e.g. "C1")
    pub fn rating_code(&self, rating_id: i32) -> Option<&str> {
        self.ratings
            .iter()
            .find(|rating| rating.id == rating_id)
            .map(|rating| rating.short.as_str())
    }

    /// Pilots that have filed a flight plan
    pub fn flight_plans(&self) -> impl Iterator<Item = &FlightPlan> {
        self.pilots.iter().filter_map(|pilot| pilot.flight_plan.as_ref())
    }
}

/// Feed header; `update_timestamp` is required
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GeneralInfo {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub reload: u32,
    #[serde(default)]
    pub update: String,
    pub update_timestamp: DateTime<Utc>,
    #[serde(default)]
    pub connected_clients: u32,
    #[serde(default)]
    pub unique_users: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Pilot {
    pub cid: u64,
    pub name: String,
    pub callsign: String,
    pub server: String,
    pub pilot_rating: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: i32,
    pub groundspeed: i32,
    pub transponder: String,
    pub heading: i32,
    pub qnh_i_hg: f64,
    pub qnh_mb: i32,
    pub flight_plan: Option<FlightPlan>,
    pub logon_time: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FlightPlan {
    pub flight_rules: String,
    pub aircraft: String,
    pub aircraft_faa: String,
    pub aircraft_short: String,
    pub departure: String,
    pub arrival: String,
    pub alternate: String,
    pub cruise_tas: String,
    pub altitude: String,
    pub deptime: String,
    pub enroute_time: String,
    pub fuel_time: String,
    pub remarks: String,
    pub route: String,
    pub revision_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Controller {
    pub cid: u64,
    pub name: String,
    pub callsign: String,
    pub frequency: String,
    pub facility: i32,
    pub rating: i32,
    pub server: String,
    pub visual_range: i32,
    pub text_atis: Option<Vec<String>>,
    pub last_updated: DateTime<Utc>,
    pub logon_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Atis {
    pub cid: u64,
    pub name: String,
    pub callsign: String,
    pub frequency: String,
    pub facility: i32,
    pub rating: i32,
    pub server: String,
    pub visual_range: i32,
    pub atis_code: Option<String>,
    pub text_atis: Option<Vec<String>>,
    pub last_updated: DateTime<Utc>,
    pub logon_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Server {
    pub ident: String,
    pub hostname_or_ip: String,
    pub location: String,
    pub name: String,
    pub clients_connection_allowed: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Prefile {
    pub cid: u64,
    pub name: String,
    pub callsign: String,
    pub flight_plan: Option<FlightPlan>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Facility {
    pub id: i32,
    pub short: String,
    pub long: String,
}

/// Controller rating lookup entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Rating {
    pub id: i32,
    pub short: String,
    pub long: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PilotRating {
    pub id: i32,
    pub short_name: String,
    pub long_name: String,
}
