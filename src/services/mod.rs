// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - itinerary estimation logic.

pub mod distance;
pub mod map_export;
pub mod planner;
pub mod travel_time;

pub use distance::distance_km;
pub use map_export::{encoded_route_polyline, itinerary_feature_collection, MapExportError};
pub use planner::{calculate_total_trip_duration, calculate_travel_times, ItineraryPlanner};
pub use travel_time::{classify_region, travel_minutes, RegionClass};
