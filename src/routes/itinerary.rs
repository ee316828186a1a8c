// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Itinerary estimation routes.
//!
//! Every endpoint is a pure function of its request body. A missing
//! `currentLocation` is normal (geolocation denied, timed out or
//! unsupported) and simply omits the current-location leg.

use crate::error::{AppError, Result};
use crate::models::{DurationSummary, GeoPoint, LegKey, Stop, TravelTimeMap};
use crate::services::{
    calculate_travel_times, encoded_route_polyline, itinerary_feature_collection,
};
use crate::time_utils::{format_duration, format_utc_rfc3339};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use geojson::FeatureCollection;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Itinerary routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/itinerary/plan", post(plan_itinerary))
        .route("/api/itinerary/travel-times", post(travel_times))
        .route("/api/itinerary/summary", post(summarize))
        .route("/api/itinerary/geojson", post(geojson_export))
        .route("/api/itinerary/polyline", post(route_polyline))
        .route("/api/duration/format", get(format_minutes))
}

// ─── Requests ────────────────────────────────────────────────

/// Ordered stops plus the device location, if one was obtained.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ItineraryRequest {
    #[validate(nested)]
    pub stops: Vec<Stop>,
    #[serde(default)]
    pub current_location: Option<GeoPoint>,
}

/// Stops with travel times the client already holds.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SummaryRequest {
    #[validate(nested)]
    pub stops: Vec<Stop>,
    pub travel_times: TravelTimeMap,
    #[serde(default)]
    pub current_location: Option<GeoPoint>,
}

/// Longest leg accepted from a client (one week).
pub const MAX_LEG_MINUTES: u32 = 7 * 24 * 60;

/// Reject requests the planner should not see.
///
/// Leg keys join stop ids with `-`, so distinct ids can still render the
/// same key (`a` then `b-c` versus `a-b` then `c`). Such itineraries are
/// rejected because the travel-time map would silently drop a leg.
fn check_stops(
    state: &AppState,
    stops: &[Stop],
    current_location: Option<GeoPoint>,
) -> Result<()> {
    if stops.len() > state.config.max_stops {
        return Err(AppError::BadRequest(format!(
            "Too many stops: {} (maximum {})",
            stops.len(),
            state.config.max_stops
        )));
    }

    let mut seen = HashSet::with_capacity(stops.len());
    if let Some(dup) = stops.iter().find(|stop| !seen.insert(stop.id.as_str())) {
        return Err(AppError::BadRequest(format!(
            "Duplicate stop id: {}",
            dup.id
        )));
    }

    let mut keys = HashSet::with_capacity(stops.len());
    let current_key = match (current_location, stops.first()) {
        (Some(_), Some(first)) => Some(LegKey::FromCurrent { to: &first.id }),
        _ => None,
    };
    let between_keys = stops.windows(2).map(|pair| LegKey::Between {
        from: &pair[0].id,
        to: &pair[1].id,
    });
    for key in current_key.into_iter().chain(between_keys) {
        let rendered = key.to_string();
        if !keys.insert(rendered.clone()) {
            return Err(AppError::BadRequest(format!(
                "Stop ids produce a duplicate leg key: {}",
                rendered
            )));
        }
    }

    Ok(())
}

/// Reject client-supplied leg times outside [`MAX_LEG_MINUTES`].
fn check_travel_times(travel_times: &TravelTimeMap) -> Result<()> {
    match travel_times.max_minutes() {
        Some(minutes) if minutes > MAX_LEG_MINUTES => Err(AppError::BadRequest(format!(
            "Travel time of {} minutes exceeds the maximum of {}",
            minutes, MAX_LEG_MINUTES
        ))),
        _ => Ok(()),
    }
}

// ─── Plan ────────────────────────────────────────────────────

/// Human-readable copy of a [`DurationSummary`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FormattedSummary {
    pub total_travel_time: String,
    pub total_visit_time: String,
    pub total_duration: String,
    pub travel_from_current: Option<String>,
    pub days: Vec<FormattedDay>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FormattedDay {
    pub day: u32,
    pub duration: String,
}

impl From<&DurationSummary> for FormattedSummary {
    fn from(summary: &DurationSummary) -> Self {
        Self {
            total_travel_time: format_duration(summary.total_travel_time),
            total_visit_time: format_duration(summary.total_visit_time),
            total_duration: format_duration(summary.total_duration),
            travel_from_current: summary.travel_from_current.map(format_duration),
            days: summary
                .daily_breakdown
                .iter()
                .map(|day| FormattedDay {
                    day: day.day,
                    duration: format_duration(day.duration),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PlanResponse {
    pub travel_times: TravelTimeMap,
    pub summary: DurationSummary,
    pub formatted: FormattedSummary,
    pub daily_budget_minutes: u32,
    pub generated_at: String,
}

/// Compute legs, totals and the daily breakdown.
async fn plan_itinerary(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ItineraryRequest>,
) -> Result<Json<PlanResponse>> {
    request.validate()?;
    check_stops(&state, &request.stops, request.current_location)?;

    let (travel_times, summary) = state.planner.plan(&request.stops, request.current_location);

    tracing::info!(
        stops = request.stops.len(),
        from_current = request.current_location.is_some(),
        total_duration = summary.total_duration,
        days = summary.daily_breakdown.len(),
        "Planned itinerary"
    );

    Ok(Json(PlanResponse {
        formatted: FormattedSummary::from(&summary),
        travel_times,
        summary,
        daily_budget_minutes: state.planner.daily_budget_minutes(),
        generated_at: format_utc_rfc3339(chrono::Utc::now()),
    }))
}

// ─── Building Blocks ─────────────────────────────────────────

async fn travel_times(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ItineraryRequest>,
) -> Result<Json<TravelTimeMap>> {
    request.validate()?;
    check_stops(&state, &request.stops, request.current_location)?;

    Ok(Json(calculate_travel_times(
        &request.stops,
        request.current_location,
    )))
}

/// Summarise with client-supplied travel times.
async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<DurationSummary>> {
    request.validate()?;
    check_stops(&state, &request.stops, request.current_location)?;
    check_travel_times(&request.travel_times)?;

    Ok(Json(state.planner.summarize(
        &request.stops,
        &request.travel_times,
        request.current_location,
    )))
}

// ─── Map ─────────────────────────────────────────────────────

async fn geojson_export(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ItineraryRequest>,
) -> Result<Json<FeatureCollection>> {
    request.validate()?;
    check_stops(&state, &request.stops, request.current_location)?;

    let travel_times = calculate_travel_times(&request.stops, request.current_location);
    Ok(Json(itinerary_feature_collection(
        &request.stops,
        request.current_location,
        &travel_times,
    )))
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PolylineResponse {
    pub polyline: String,
}

async fn route_polyline(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ItineraryRequest>,
) -> Result<Json<PolylineResponse>> {
    request.validate()?;
    check_stops(&state, &request.stops, request.current_location)?;

    Ok(Json(PolylineResponse {
        polyline: encoded_route_polyline(&request.stops)?,
    }))
}

// ─── Formatting ──────────────────────────────────────────────

#[derive(Deserialize)]
struct FormatQuery {
    minutes: u32,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FormatResponse {
    pub minutes: u32,
    pub formatted: String,
}

async fn format_minutes(Query(params): Query<FormatQuery>) -> Json<FormatResponse> {
    Json(FormatResponse {
        minutes: params.minutes,
        formatted: format_duration(params.minutes),
    })
}
