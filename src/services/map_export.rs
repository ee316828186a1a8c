// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GeoJSON and polyline export of an itinerary for the map view.

use crate::models::{visit_minutes, GeoPoint, LegKey, Stop, TravelTimeMap};
use geo::{Coord, LineString, Point};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject};
use serde_json::json;

/// Polyline precision used by the map tile service (5 decimal places).
pub const POLYLINE_PRECISION: u32 = 5;

/// Build a feature collection with one marker per stop and one line per leg.
///
/// Stop markers carry `kind: "stop"` plus `order`, `name`, `region`,
/// `category` and `visitMinutes`. Legs carry `kind: "leg"`, `legKey` and
/// `minutes` (null when the leg is missing from `travel_times`).
pub fn itinerary_feature_collection(
    stops: &[Stop],
    current_location: Option<GeoPoint>,
    travel_times: &TravelTimeMap,
) -> FeatureCollection {
    let mut features = Vec::with_capacity(stops.len() * 2 + 2);

    if let Some(current) = current_location {
        features.push(feature(
            Geometry::new((&Point::from(current)).into()),
            json!({ "kind": "current" }),
        ));

        if let Some(first) = stops.first() {
            let key = LegKey::FromCurrent { to: &first.id };
            features.push(leg_feature(current, first.point(), key, travel_times));
        }
    }

    for (order, stop) in stops.iter().enumerate() {
        features.push(feature(
            Geometry::new((&Point::from(stop.point())).into()),
            json!({
                "kind": "stop",
                "id": stop.id,
                "order": order + 1,
                "name": stop.name,
                "region": stop.region_or_unknown(),
                "category": stop.category,
                "visitMinutes": visit_minutes(stop.category.as_deref()),
            }),
        ));
    }

    for pair in stops.windows(2) {
        let key = LegKey::Between {
            from: &pair[0].id,
            to: &pair[1].id,
        };
        features.push(leg_feature(pair[0].point(), pair[1].point(), key, travel_times));
    }

    tracing::debug!(features = features.len(), "Built itinerary feature collection");

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Encode the stop sequence as a Google polyline.
pub fn encoded_route_polyline(stops: &[Stop]) -> Result<String, MapExportError> {
    let line = route_line(stops);
    polyline::encode_coordinates(line.0, POLYLINE_PRECISION)
        .map_err(|e| MapExportError::PolylineError(e.to_string()))
}

fn route_line(stops: &[Stop]) -> LineString<f64> {
    stops
        .iter()
        .map(|stop| Coord {
            x: stop.longitude,
            y: stop.latitude,
        })
        .collect()
}

fn leg_feature(
    from: GeoPoint,
    to: GeoPoint,
    key: LegKey<'_>,
    travel_times: &TravelTimeMap,
) -> Feature {
    let line = LineString::from(vec![Point::from(from), Point::from(to)]);
    feature(
        Geometry::new((&line).into()),
        json!({
            "kind": "leg",
            "legKey": key.to_string(),
            "minutes": travel_times.get(key),
        }),
    )
}

fn feature(geometry: Geometry, properties: serde_json::Value) -> Feature {
    let properties: Option<JsonObject> = match properties {
        serde_json::Value::Object(map) => Some(map),
        _ => None,
    };

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties,
        foreign_members: None,
    }
}

/// Errors from map export.
#[derive(Debug, thiserror::Error)]
pub enum MapExportError {
    #[error("Failed to encode polyline: {0}")]
    PolylineError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::planner::calculate_travel_times;

    fn sample_stops() -> Vec<Stop> {
        vec![
            Stop {
                id: "colombo".to_string(),
                name: "Colombo".to_string(),
                latitude: 6.9271,
                longitude: 79.8612,
                region: Some("Western".to_string()),
                category: Some("city".to_string()),
            },
            Stop {
                id: "kandy".to_string(),
                name: "Kandy".to_string(),
                latitude: 7.2906,
                longitude: 80.6337,
                region: Some("Central".to_string()),
                category: Some("cultural".to_string()),
            },
        ]
    }

    fn kinds(collection: &FeatureCollection) -> Vec<String> {
        collection
            .features
            .iter()
            .map(|f| f.property("kind").and_then(|v| v.as_str()).unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_feature_collection_without_current_location() {
        let stops = sample_stops();
        let travel_times = calculate_travel_times(&stops, None);
        let collection = itinerary_feature_collection(&stops, None, &travel_times);

        assert_eq!(kinds(&collection), vec!["stop", "stop", "leg"]);

        let leg = &collection.features[2];
        assert_eq!(leg.property("legKey").unwrap(), "colombo-kandy");
        assert_eq!(
            leg.property("minutes").and_then(|v| v.as_u64()),
            travel_times
                .get(LegKey::Between {
                    from: "colombo",
                    to: "kandy"
                })
                .map(u64::from)
        );
    }

    #[test]
    fn test_feature_collection_with_current_location() {
        let stops = sample_stops();
        let current = Some(GeoPoint::new(6.85, 79.9));
        let travel_times = calculate_travel_times(&stops, current);
        let collection = itinerary_feature_collection(&stops, current, &travel_times);

        assert_eq!(
            kinds(&collection),
            vec!["current", "leg", "stop", "stop", "leg"]
        );
        assert_eq!(
            collection.features[1].property("legKey").unwrap(),
            "current-colombo"
        );
        assert_eq!(collection.features[3].property("visitMinutes").unwrap(), 120);
        assert_eq!(collection.features[3].property("order").unwrap(), 2);
    }

    #[test]
    fn test_stop_marker_is_lon_lat() {
        let stops = sample_stops();
        let collection = itinerary_feature_collection(&stops, None, &TravelTimeMap::new());

        let geometry = collection.features[0].geometry.as_ref().unwrap();
        match &geometry.value {
            geojson::Value::Point(coords) => assert_eq!(coords, &vec![79.8612, 6.9271]),
            other => panic!("Expected point, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_leg_minutes_is_null() {
        let stops = sample_stops();
        let collection = itinerary_feature_collection(&stops, None, &TravelTimeMap::new());
        assert!(collection.features[2].property("minutes").unwrap().is_null());
    }

    #[test]
    fn test_encoded_polyline() {
        let encoded = encoded_route_polyline(&sample_stops()).unwrap();
        let decoded = polyline::decode_polyline(&encoded, POLYLINE_PRECISION).unwrap();

        assert_eq!(decoded.0.len(), 2);
        assert!((decoded.0[1].y - 7.2906).abs() < 1e-5);
        assert!((decoded.0[1].x - 80.6337).abs() < 1e-5);
    }

    #[test]
    fn test_empty_polyline() {
        assert_eq!(encoded_route_polyline(&[]).unwrap(), "");
    }

    #[test]
    fn test_out_of_range_polyline_error() {
        let mut stops = sample_stops();
        stops[0].latitude = 123.0;
        assert!(encoded_route_polyline(&stops).is_err());
    }
}
