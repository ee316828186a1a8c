// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Itinerary duration planning.
//!
//! Turns an ordered list of stops (and optionally the traveller's current
//! location) into per-leg travel times, trip totals, and a day-by-day split
//! that keeps each day within an activity budget.

use crate::models::{
    visit_minutes, DayPlan, DurationSummary, GeoPoint, LegKey, Stop, TravelTimeMap,
};
use crate::services::distance::distance_km;
use crate::services::travel_time::travel_minutes;

/// Default maximum activity per day (8 hours).
pub const DEFAULT_DAILY_BUDGET_MINUTES: u32 = 480;

/// Region label used for the origin of the current-location leg.
pub const CURRENT_LOCATION_REGION: &str = "Current Location";

/// Compute travel time for every leg of the itinerary.
///
/// Produces one entry per consecutive stop pair, plus a `current-<id>` entry
/// for the first stop when `current_location` is known.
pub fn calculate_travel_times(
    stops: &[Stop],
    current_location: Option<GeoPoint>,
) -> TravelTimeMap {
    let mut travel_times = TravelTimeMap::new();

    if let (Some(current), Some(first)) = (current_location, stops.first()) {
        let distance = distance_km(current, first.point());
        let minutes = travel_minutes(
            distance,
            CURRENT_LOCATION_REGION,
            first.region_or_unknown(),
        );
        travel_times.insert(LegKey::FromCurrent { to: &first.id }, minutes);
    }

    for pair in stops.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        let distance = distance_km(from.point(), to.point());
        let minutes = travel_minutes(distance, from.region_or_unknown(), to.region_or_unknown());
        travel_times.insert(
            LegKey::Between {
                from: &from.id,
                to: &to.id,
            },
            minutes,
        );
    }

    tracing::debug!(
        stops = stops.len(),
        legs = travel_times.len(),
        from_current = current_location.is_some(),
        "Calculated travel times"
    );

    travel_times
}

/// Summarise an itinerary using the default daily budget.
pub fn calculate_total_trip_duration(
    stops: &[Stop],
    travel_times: &TravelTimeMap,
    current_location: Option<GeoPoint>,
) -> DurationSummary {
    ItineraryPlanner::default().summarize(stops, travel_times, current_location)
}

/// Planner with a configurable daily activity budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItineraryPlanner {
    daily_budget_minutes: u32,
}

impl Default for ItineraryPlanner {
    fn default() -> Self {
        Self {
            daily_budget_minutes: DEFAULT_DAILY_BUDGET_MINUTES,
        }
    }
}

impl ItineraryPlanner {
    pub fn new(daily_budget_minutes: u32) -> Self {
        Self {
            daily_budget_minutes,
        }
    }

    pub fn daily_budget_minutes(&self) -> u32 {
        self.daily_budget_minutes
    }

    /// Compute travel times and the duration summary in one pass.
    pub fn plan(
        &self,
        stops: &[Stop],
        current_location: Option<GeoPoint>,
    ) -> (TravelTimeMap, DurationSummary) {
        let travel_times = calculate_travel_times(stops, current_location);
        let summary = self.summarize(stops, &travel_times, current_location);
        (travel_times, summary)
    }

    /// Aggregate totals and split the itinerary into days.
    pub fn summarize(
        &self,
        stops: &[Stop],
        travel_times: &TravelTimeMap,
        current_location: Option<GeoPoint>,
    ) -> DurationSummary {
        let travel_from_current = match (current_location, stops.first()) {
            (Some(_), Some(first)) => travel_times.get(LegKey::FromCurrent { to: &first.id }),
            _ => None,
        };

        let total_travel_time = travel_times.total_minutes();
        let total_visit_time: u32 = stops
            .iter()
            .map(|stop| visit_minutes(stop.category.as_deref()))
            .fold(0u32, u32::saturating_add);
        let daily_breakdown = self.daily_breakdown(stops, travel_times);

        tracing::debug!(
            total_travel_time,
            total_visit_time,
            days = daily_breakdown.len(),
            "Summarised itinerary"
        );

        DurationSummary {
            total_travel_time,
            total_visit_time,
            total_duration: total_travel_time.saturating_add(total_visit_time),
            travel_from_current,
            daily_breakdown,
        }
    }

    /// Greedily pack stops into days of at most `daily_budget_minutes`.
    ///
    /// A stop is never split; a stop that alone exceeds the budget gets a day
    /// of its own. The leg into the first stop of a new day is dropped from
    /// that day's total, and the current-location leg is never counted.
    /// Minute sums saturate rather than wrap.
    fn daily_breakdown(&self, stops: &[Stop], travel_times: &TravelTimeMap) -> Vec<DayPlan> {
        let mut days = Vec::new();
        let mut day = 1;
        let mut running_minutes: u32 = 0;
        let mut running_names: Vec<String> = Vec::new();

        for (i, stop) in stops.iter().enumerate() {
            let visit_time = visit_minutes(stop.category.as_deref());
            let travel_time = if i == 0 {
                0
            } else {
                travel_times
                    .get(LegKey::Between {
                        from: &stops[i - 1].id,
                        to: &stop.id,
                    })
                    .unwrap_or(0)
            };
            let leg_total = visit_time.saturating_add(travel_time);

            if running_minutes.saturating_add(leg_total) > self.daily_budget_minutes
                && !running_names.is_empty()
            {
                days.push(DayPlan {
                    day,
                    stop_names: std::mem::take(&mut running_names),
                    duration: running_minutes,
                });
                day += 1;
                running_minutes = visit_time;
                running_names.push(stop.name.clone());
            } else {
                running_minutes = running_minutes.saturating_add(leg_total);
                running_names.push(stop.name.clone());
            }
        }

        if !running_names.is_empty() {
            days.push(DayPlan {
                day,
                stop_names: running_names,
                duration: running_minutes,
            });
        }

        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(id: &str, category: &str, lat: f64, lon: f64, region: &str) -> Stop {
        Stop {
            id: id.to_string(),
            name: format!("Stop {}", id),
            latitude: lat,
            longitude: lon,
            region: Some(region.to_string()),
            category: Some(category.to_string()),
        }
    }

    /// Stops stacked on the same coordinates so every leg is 0 minutes.
    fn colocated(categories: &[&str]) -> Vec<Stop> {
        categories
            .iter()
            .enumerate()
            .map(|(i, category)| stop(&i.to_string(), category, 7.0, 80.0, "Central"))
            .collect()
    }

    #[test]
    fn test_empty_itinerary() {
        let (travel_times, summary) =
            ItineraryPlanner::default().plan(&[], Some(GeoPoint::new(7.0, 80.0)));

        assert!(travel_times.is_empty());
        assert_eq!(summary, DurationSummary::default());
    }

    #[test]
    fn test_leg_counts() {
        let stops = vec![
            stop("a", "temple", 7.0, 80.0, "Central"),
            stop("b", "park", 7.1, 80.1, "Central"),
            stop("c", "beach", 6.0, 80.2, "Southern"),
            stop("d", "city", 6.9, 79.9, "Western"),
        ];

        let without_current = calculate_travel_times(&stops, None);
        assert_eq!(without_current.len(), 3);

        let with_current = calculate_travel_times(&stops, Some(GeoPoint::new(6.9, 79.8)));
        assert_eq!(with_current.len(), 4);
        assert!(with_current.get(LegKey::FromCurrent { to: "a" }).is_some());
        assert!(with_current.get(LegKey::Between { from: "c", to: "d" }).is_some());
    }

    #[test]
    fn test_single_stop_with_current_location() {
        let stops = vec![stop("a", "beach", 6.0, 80.2, "Southern")];
        let (travel_times, summary) =
            ItineraryPlanner::default().plan(&stops, Some(GeoPoint::new(6.5, 80.0)));

        assert_eq!(travel_times.len(), 1);
        let from_current = summary.travel_from_current.unwrap();
        assert!(from_current > 0);
        assert_eq!(summary.total_travel_time, from_current);
        assert_eq!(summary.total_visit_time, 180);
        // Current-location leg is not charged to day 1
        assert_eq!(summary.daily_breakdown[0].duration, 180);
    }

    #[test]
    fn test_travel_from_current_absent_without_location() {
        let stops = vec![stop("a", "beach", 6.0, 80.2, "Southern")];
        let (_, summary) = ItineraryPlanner::default().plan(&stops, None);
        assert_eq!(summary.travel_from_current, None);
    }

    #[test]
    fn test_missing_category_and_region_use_defaults() {
        let stops = vec![Stop {
            id: "x".to_string(),
            name: "Somewhere".to_string(),
            latitude: 7.0,
            longitude: 80.0,
            region: None,
            category: None,
        }];
        let summary = calculate_total_trip_duration(&stops, &TravelTimeMap::new(), None);
        assert_eq!(summary.total_visit_time, 120);
    }

    #[test]
    fn test_days_split_on_budget() {
        // 300 + 180 fits exactly; 240 starts day 2
        let stops = colocated(&["city", "beach", "mountain"]);
        let (_, summary) = ItineraryPlanner::default().plan(&stops, None);

        let days = &summary.daily_breakdown;
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].stop_names, vec!["Stop 0", "Stop 1"]);
        assert_eq!(days[0].duration, 480);
        assert_eq!(days[1].stop_names, vec!["Stop 2"]);
        assert_eq!(days[1].duration, 240);
    }

    #[test]
    fn test_oversized_stop_gets_own_day() {
        let stops = colocated(&["temple", "adventure", "temple"]);
        let (_, summary) = ItineraryPlanner::new(200).plan(&stops, None);

        let durations: Vec<u32> = summary.daily_breakdown.iter().map(|d| d.duration).collect();
        assert_eq!(durations, vec![90, 300, 90]);
        let numbers: Vec<u32> = summary.daily_breakdown.iter().map(|d| d.day).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_leg_into_new_day_is_dropped() {
        let stops = vec![
            stop("a", "city", 6.9271, 79.8612, "Western"),
            stop("b", "cultural", 7.2906, 80.6337, "Central"),
        ];
        let travel_times: TravelTimeMap = [("a-b".to_string(), 200)].into_iter().collect();

        let summary = calculate_total_trip_duration(&stops, &travel_times, None);

        assert_eq!(summary.total_travel_time, 200);
        assert_eq!(summary.total_duration, 200 + 300 + 120);
        assert_eq!(summary.daily_breakdown.len(), 2);
        assert_eq!(summary.daily_breakdown[1].duration, 120);
        let day_sum: u32 = summary.daily_breakdown.iter().map(|d| d.duration).sum();
        assert!(day_sum < summary.total_duration);
    }

    #[test]
    fn test_huge_legs_do_not_wrap() {
        let stops = colocated(&["temple", "temple", "temple"]);
        let travel_times: TravelTimeMap = [
            ("0-1".to_string(), u32::MAX),
            ("1-2".to_string(), u32::MAX - 50),
        ]
        .into_iter()
        .collect();

        let summary = calculate_total_trip_duration(&stops, &travel_times, None);

        assert_eq!(summary.total_travel_time, u32::MAX);
        assert_eq!(summary.total_duration, u32::MAX);
        let durations: Vec<u32> = summary.daily_breakdown.iter().map(|d| d.duration).collect();
        assert_eq!(durations, vec![90, 90, 90]);
    }

    #[test]
    fn test_missing_leg_counts_as_zero() {
        let stops = colocated(&["temple", "temple"]);
        let summary = calculate_total_trip_duration(&stops, &TravelTimeMap::new(), None);

        assert_eq!(summary.daily_breakdown.len(), 1);
        assert_eq!(summary.daily_breakdown[0].duration, 180);
    }

    #[test]
    fn test_total_conservation() {
        let stops = vec![
            stop("a", "temple", 7.0, 80.0, "Central"),
            stop("b", "wildlife", 6.4, 81.3, "Southern"),
            stop("c", "beach", 6.0, 80.2, "Southern"),
        ];
        let (travel_times, summary) =
            ItineraryPlanner::default().plan(&stops, Some(GeoPoint::new(6.9, 79.8)));

        assert_eq!(summary.total_travel_time, travel_times.total_minutes());
        assert_eq!(
            summary.total_duration,
            summary.total_travel_time + summary.total_visit_time
        );
    }
}
