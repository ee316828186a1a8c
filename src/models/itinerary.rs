// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Travel-time and duration aggregates computed for an itinerary.
//!
//! All of these are outputs of the planner. They are rebuilt from scratch on
//! every change to the stop sequence and never updated in place.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Directed edge between two points of an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegKey<'a> {
    /// Current device location to the first stop.
    FromCurrent { to: &'a str },
    /// One stop to the next.
    Between { from: &'a str, to: &'a str },
}

impl fmt::Display for LegKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegKey::FromCurrent { to } => write!(f, "current-{to}"),
            LegKey::Between { from, to } => write!(f, "{from}-{to}"),
        }
    }
}

/// Estimated minutes per leg, keyed by the rendered [`LegKey`].
///
/// Holds one entry per consecutive stop pair plus at most one `current-*`
/// entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TravelTimeMap(BTreeMap<String, u32>);

impl TravelTimeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: LegKey<'_>, minutes: u32) {
        self.0.insert(key.to_string(), minutes);
    }

    pub fn get(&self, key: LegKey<'_>) -> Option<u32> {
        self.0.get(&key.to_string()).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of every leg, including the `current-*` leg when present.
    /// Saturates at `u32::MAX`.
    pub fn total_minutes(&self) -> u32 {
        self.0
            .values()
            .fold(0u32, |total, minutes| total.saturating_add(*minutes))
    }

    /// Largest single leg, if any.
    pub fn max_minutes(&self) -> Option<u32> {
        self.0.values().copied().max()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(key, minutes)| (key.as_str(), *minutes))
    }
}

impl FromIterator<(String, u32)> for TravelTimeMap {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Aggregate durations for a whole itinerary, in minutes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DurationSummary {
    pub total_travel_time: u32,
    pub total_visit_time: u32,
    /// Always `total_travel_time + total_visit_time` (saturating)
    pub total_duration: u32,
    /// Leg from the current location to the first stop, if known
    pub travel_from_current: Option<u32>,
    pub daily_breakdown: Vec<DayPlan>,
}

/// One day of a multi-day itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DayPlan {
    /// 1-based and contiguous
    pub day: u32,
    pub stop_names: Vec<String>,
    /// Visit time plus intra-day travel. Travel into the first stop of a
    /// later day is not counted.
    pub duration: u32,
}
