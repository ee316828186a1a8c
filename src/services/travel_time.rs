// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Heuristic travel-time estimation from distance and region labels.
//!
//! Region labels are a coarse proxy for road quality. The output is an
//! indicative figure, not a routed ETA.

/// Speed used when no region rule applies.
pub const DEFAULT_SPEED_KMH: f64 = 40.0;

const URBAN_REGIONS: &[&str] = &["Western", "Colombo", "Gampaha"];
const MOUNTAINOUS_REGIONS: &[&str] = &["Central", "Uva", "Kandy", "Nuwara Eliya"];
const COASTAL_REGIONS: &[&str] = &["Southern", "Eastern", "Northern"];

/// Road-condition class of a region label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionClass {
    Urban,
    Mountainous,
    Coastal,
    Other,
}

/// Classify a free-form region label.
///
/// Matching is case-sensitive and succeeds when the label contains one of the
/// known province names. Urban names are checked first, then mountainous,
/// then coastal.
pub fn classify_region(region: &str) -> RegionClass {
    let matches = |names: &[&str]| names.iter().any(|name| region.contains(name));

    if matches(URBAN_REGIONS) {
        RegionClass::Urban
    } else if matches(MOUNTAINOUS_REGIONS) {
        RegionClass::Mountainous
    } else if matches(COASTAL_REGIONS) {
        RegionClass::Coastal
    } else {
        RegionClass::Other
    }
}

/// Average speed for a leg between two regions. First matching rule wins.
pub fn average_speed_kmh(region_from: &str, region_to: &str) -> f64 {
    use RegionClass::*;

    match (classify_region(region_from), classify_region(region_to)) {
        (Urban, _) | (_, Urban) => 25.0,
        (Mountainous, Mountainous) => 30.0,
        (Coastal, Coastal) => 50.0,
        (Mountainous, Coastal) | (Coastal, Mountainous) => 35.0,
        _ => DEFAULT_SPEED_KMH,
    }
}

/// Inflation applied for breaks and congestion; longer legs get more.
pub fn buffer_multiplier(distance_km: f64) -> f64 {
    if distance_km > 100.0 {
        1.3
    } else if distance_km > 50.0 {
        1.2
    } else {
        1.1
    }
}

/// Estimated minutes to cover `distance_km` between two regions.
pub fn travel_minutes(distance_km: f64, region_from: &str, region_to: &str) -> u32 {
    let speed = average_speed_kmh(region_from, region_to);
    let raw_minutes = (distance_km / speed * 60.0).round();

    (raw_minutes * buffer_multiplier(distance_km)).round() as u32
}
