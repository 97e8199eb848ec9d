//! The persisted route document.
//!
//! A document is a JSON object with a list of characters and a list of base
//! routes; each route nests its branch, whose choices nest further routes:
//!
//! ```json
//! {
//!   "names": [{ "id": "amy", "full": "Amy Smith" }],
//!   "routes": [{
//!     "name": "Start",
//!     "deaths": [{ "id": "amy", "count": 1, "days": [3] }],
//!     "events": [{ "name": "Arrival", "days": [1] }],
//!     "branch": {
//!       "name": "Choose", "day": 5,
//!       "choices": [{ "direction": "left", "name": "Stay", "route": { "name": "Stay Route" } }]
//!     }
//!   }]
//! }
//! ```
//!
//! Optional lists may be left out. A count of `-1` and a day list of `[-1]`
//! stand for "unknown"; unnamed routes, events, branches and choices are
//! written as `"[UNKNOWN]"`.

mod parse;
mod serialize;

pub use parse::*;
pub use serialize::*;

use serde::{Deserialize, Serialize};
use story_model::{Day, Name};

/// Written in place of a missing count.
pub const UNKNOWN_COUNT: i64 = -1;

/// Written in place of a missing display name.
pub const UNKNOWN_LABEL: &str = "[UNKNOWN]";

/// Top-level document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeDocument {
    #[serde(default)]
    pub names: Vec<Name>,
    pub routes: Vec<RouteDocument>,
}

/// One route and, through its branch, everything below it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDocument {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deaths: Vec<DeathDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<BranchDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeathDocument {
    pub id: String,
    pub count: i64,
    pub days: Vec<Day>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDocument {
    pub name: String,
    pub days: Vec<Day>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchDocument {
    pub name: String,
    pub day: Day,
    pub choices: Vec<ChoiceDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceDocument {
    pub direction: String,
    pub name: String,
    pub route: RouteDocument,
}
