//! "lat,lng" parsing and selection of hazards that can be drawn on the map.

use serde::Serialize;
use std::{fmt, str::FromStr};

use crate::hazard::{Hazard, RiskLevel};

/// Reasons a coordinate string is not eligible for the map.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CoordinateError {
    /// Not exactly two comma-separated components
    WrongArity,
    NotANumber,
    NotFinite,
    OutOfRange,
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            CoordinateError::WrongArity => "expected \"lat,lng\"",
            CoordinateError::NotANumber => "component is not a number",
            CoordinateError::NotFinite => "component is not finite",
            CoordinateError::OutOfRange => "latitude or longitude out of range",
        };
        write!(f, "Coordinate error: {}", reason)
    }
}

impl std::error::Error for CoordinateError {}

/// A WGS84 position.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl FromStr for Coordinates {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let (lat, lng) = match (parts.next(), parts.next(), parts.next()) {
            (Some(lat), Some(lng), None) => (lat.trim(), lng.trim()),
            _ => return Err(CoordinateError::WrongArity),
        };
        let lat: f64 = lat.parse().map_err(|_| CoordinateError::NotANumber)?;
        let lng: f64 = lng.parse().map_err(|_| CoordinateError::NotANumber)?;
        if !lat.is_finite() || !lng.is_finite() {
            return Err(CoordinateError::NotFinite);
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(CoordinateError::OutOfRange);
        }
        Ok(Coordinates { lat, lng })
    }
}

/// One pin on the hazard map. Serialized as-is for the JS map bridge.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct MapMarker {
    /// Index of the hazard in the snapshot's list
    pub hazard_index: usize,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: RiskLevel,
    pub description: String,
}

/// Markers for every hazard whose coordinates parse, in list order.
/// Hazards without usable coordinates are skipped here but stay in the list view.
pub fn map_markers(hazards: &[Hazard]) -> Vec<MapMarker> {
    hazards
        .iter()
        .enumerate()
        .filter_map(|(hazard_index, hazard)| {
            let position = hazard.map_position()?;
            Some(MapMarker {
                hazard_index,
                lat: position.lat,
                lng: position.lng,
                kind: hazard.kind.clone(),
                severity: hazard.severity,
                description: hazard.description.clone(),
            })
        })
        .collect()
}

/// The map is centered on the first marker.
pub fn map_center(markers: &[MapMarker]) -> Option<Coordinates> {
    markers.first().map(|m| Coordinates {
        lat: m.lat,
        lng: m.lng,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hazard_at(kind: &str, coordinates: Option<&str>) -> Hazard {
        Hazard {
            kind: kind.to_string(),
            coordinates: coordinates.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn parses_lat_lng() {
        let c: Coordinates = "34.01,-118.49".parse().unwrap();
        assert_eq!(c, Coordinates { lat: 34.01, lng: -118.49 });

        let c: Coordinates = " 33.66 , -118.00 ".parse().unwrap();
        assert_eq!(c.lat, 33.66);
        assert_eq!(c.lng, -118.0);
    }

    #[test]
    fn rejects_malformed_coordinates() {
        assert_eq!("34.01".parse::<Coordinates>(), Err(CoordinateError::WrongArity));
        assert_eq!("1,2,3".parse::<Coordinates>(), Err(CoordinateError::WrongArity));
        assert_eq!("lat,lng".parse::<Coordinates>(), Err(CoordinateError::NotANumber));
        assert_eq!("".parse::<Coordinates>(), Err(CoordinateError::WrongArity));
        assert_eq!("NaN,1".parse::<Coordinates>(), Err(CoordinateError::NotFinite));
        assert_eq!("inf,1".parse::<Coordinates>(), Err(CoordinateError::NotFinite));
        assert_eq!("91,0".parse::<Coordinates>(), Err(CoordinateError::OutOfRange));
        assert_eq!("0,-180.5".parse::<Coordinates>(), Err(CoordinateError::OutOfRange));
    }

    #[test]
    fn single_valid_hazard_is_the_only_marker() {
        let hazards = vec![hazard_at("riptide", Some("34.01,-118.49"))];
        let markers = map_markers(&hazards);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].hazard_index, 0);
        assert_eq!(markers[0].kind, "riptide");
        assert_eq!(markers[0].lat, 34.01);
        assert_eq!(markers[0].lng, -118.49);
    }

    #[test]
    fn unparseable_coordinates_are_skipped() {
        let hazards = vec![
            hazard_at("shark", Some("near the pier")),
            hazard_at("jellyfish", None),
            hazard_at("pollution", Some("33.9,-118.4")),
        ];
        let markers = map_markers(&hazards);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].hazard_index, 2);
        assert_eq!(markers[0].kind, "pollution");
    }

    #[test]
    fn center_is_first_marker() {
        assert!(map_center(&[]).is_none());
        let hazards = vec![
            hazard_at("a", Some("34.0,-118.5")),
            hazard_at("b", Some("33.0,-117.5")),
        ];
        let center = map_center(&map_markers(&hazards)).unwrap();
        assert_eq!(center, Coordinates { lat: 34.0, lng: -118.5 });
    }
}
