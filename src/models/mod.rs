// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod category;
pub mod itinerary;
pub mod stop;

pub use category::visit_minutes;
pub use itinerary::{DayPlan, DurationSummary, LegKey, TravelTimeMap};
pub use stop::{GeoPoint, Stop};
