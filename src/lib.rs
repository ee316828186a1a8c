// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trip Planner: travel-time and itinerary-duration estimation
//!
//! This crate provides the backend API that turns an ordered list of trip
//! stops into per-leg travel times, trip totals and a day-by-day plan.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::ItineraryPlanner;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub planner: ItineraryPlanner,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let planner = ItineraryPlanner::new(config.daily_budget_minutes);
        Self { config, planner }
    }
}
