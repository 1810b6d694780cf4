// Copyright (c) 2020-2024 Via Technology Ltd. All Rights Reserved.

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The point module contains the `GeoPoint` type: a position on the surface
//! of the Earth as a latitude and longitude pair of `Angles`.
//!
//! A `GeoPoint` is validated when it is constructed: the latitude must lie
//! in the range -90..=90 degrees and the longitude in the range -180..=180
//! degrees, otherwise construction fails with `Error::InvalidCoordinate`.  
//! Once constructed, a `GeoPoint` is immutable.
//!
//! The module also contains conversions to and from
//! [geo-types](https://crates.io/crates/geo-types), see the `geojson` module.

pub mod geojson;

use crate::error::{Error, Result};
use crate::trig::{Angle, Degrees};
use crate::Validate;
use contracts::{debug_invariant, debug_requires};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position as a latitude and longitude pair of `Angles`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Position")]
pub struct GeoPoint {
    latitude: Angle,
    longitude: Angle,
}

/// The unvalidated serialized form of a `GeoPoint`.
#[derive(Deserialize)]
struct Position {
    latitude: Angle,
    longitude: Angle,
}

impl TryFrom<Position> for GeoPoint {
    type Error = Error;

    fn try_from(value: Position) -> Result<Self> {
        Self::at(value.latitude, value.longitude)
    }
}

impl Validate for GeoPoint {
    /// Test whether a `GeoPoint` is valid.  
    /// I.e. whether the latitude lies in the range: -90.0 <= value <= 90.0
    /// and the longitude lies in the range: -180.0 <= value <= 180.0
    fn is_valid(&self) -> bool {
        self.latitude.is_valid_latitude() && self.longitude.is_valid_longitude()
    }
}

#[debug_invariant(self.is_valid())]
impl GeoPoint {
    /// Construct a `GeoPoint` from latitude and longitude `Angles`.
    /// * `latitude` - the latitude, -90.0 <= degrees <= 90.0
    /// * `longitude` - the longitude, -180.0 <= degrees <= 180.0
    ///
    /// # Errors
    ///
    /// `Error::InvalidCoordinate` if either angle is out of range.
    pub fn at(latitude: Angle, longitude: Angle) -> Result<Self> {
        // test the Degrees, a non-finite Angle breaks the Angle invariant
        let (lat, lon) = (Degrees::from(latitude), Degrees::from(longitude));
        if lat.is_valid_latitude() && lon.is_valid_longitude() {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            log::debug!("rejected coordinate: latitude {}, longitude {}", lat.0, lon.0);
            Err(Error::InvalidCoordinate {
                latitude: lat.0,
                longitude: lon.0,
            })
        }
    }

    /// Construct a `GeoPoint` from latitude and longitude in decimal degrees.
    ///
    /// # Errors
    ///
    /// `Error::InvalidCoordinate` if either value is out of range.
    pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Self> {
        Self::at(Angle::from_degrees(latitude), Angle::from_degrees(longitude))
    }

    /// Construct a `GeoPoint` from angles already known to be in range.
    #[debug_requires(latitude.is_valid_latitude() && longitude.is_valid_longitude())]
    pub(crate) fn new(latitude: Angle, longitude: Angle) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The latitude in decimal degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude.degrees()
    }

    /// The longitude in decimal degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude.degrees()
    }

    /// The latitude `Angle`.
    #[must_use]
    pub fn lat(&self) -> Angle {
        self.latitude
    }

    /// The longitude `Angle`.
    #[must_use]
    pub fn lon(&self) -> Angle {
        self.longitude
    }
}

impl TryFrom<(f64, f64)> for GeoPoint {
    type Error = Error;

    /// Attempt to convert a pair of values in Latitude, Longitude order.
    fn try_from(value: (f64, f64)) -> Result<Self> {
        Self::from_degrees(value.0, value.1)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude(), self.longitude())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trig::dms::Sign;

    #[test]
    fn test_geopoint_traits() {
        let a = GeoPoint::at(Angle::from_degrees(51.4843774), Angle::from_degrees(-0.2912044))
            .unwrap();

        let a_clone = a.clone();
        assert!(a_clone == a);
        assert_eq!("(51.4843774, -0.2912044)", a.to_string());

        print!("GeoPoint: {:?}", a);
    }

    #[test]
    fn test_geopoint_at() {
        let kew = GeoPoint::at(Angle::from_degrees(51.4843774), Angle::from_degrees(-0.2912044))
            .unwrap();
        assert_eq!(51.4843774, kew.latitude());
        assert_eq!(-0.2912044, kew.longitude());
        assert_eq!(Angle::from_degrees(51.4843774), kew.lat());
        assert_eq!(Angle::from_degrees(-0.2912044), kew.lon());
        assert!(kew.is_valid());
    }

    #[test]
    fn test_geopoint_from_dms() {
        let kew = GeoPoint::at(
            Angle::from_dms(51, 29, 3.7572),
            Angle::from_signed_dms(Sign::Negative, 0, 17, 28.3338),
        )
        .unwrap();
        assert!(kew.longitude() < 0.0);
        assert!(crate::is_within_tolerance(51.484377, kew.latitude(), 1.0e-12));
    }

    #[test]
    fn test_geopoint_range_limits() {
        assert!(GeoPoint::from_degrees(90.0, 180.0).is_ok());
        assert!(GeoPoint::from_degrees(-90.0, -180.0).is_ok());

        assert_eq!(
            Err(Error::InvalidCoordinate {
                latitude: 90.0001,
                longitude: 0.0
            }),
            GeoPoint::from_degrees(90.0001, 0.0)
        );
        assert_eq!(
            Err(Error::InvalidCoordinate {
                latitude: 0.0,
                longitude: -180.0001
            }),
            GeoPoint::from_degrees(0.0, -180.0001)
        );
        assert!(GeoPoint::from_degrees(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::try_from((-91.0, 0.0)).is_err());
        assert!(GeoPoint::try_from((-89.0, 179.0)).is_ok());
    }

    #[test]
    fn test_geopoint_non_finite_values() {
        for (latitude, longitude) in [
            (f64::NAN, 0.0),
            (0.0, f64::NAN),
            (f64::INFINITY, 0.0),
            (0.0, f64::NEG_INFINITY),
        ] {
            let result = GeoPoint::from_degrees(latitude, longitude);
            assert!(matches!(result, Err(Error::InvalidCoordinate { .. })));
        }

        let error = GeoPoint::at(Angle::from_degrees(f64::NAN), Angle::default()).unwrap_err();
        match error {
            Error::InvalidCoordinate {
                latitude,
                longitude,
            } => {
                assert!(latitude.is_nan());
                assert_eq!(0.0, longitude);
            }
            Error::Convergence { .. } => panic!("unexpected error: {error}"),
        }
    }

    #[test]
    fn test_geopoint_equality_is_structural() {
        let a = GeoPoint::from_degrees(36.12, -86.97).unwrap();
        let b = GeoPoint::from_degrees(36.12, -86.97).unwrap();
        let c = GeoPoint::from_degrees(36.12, -86.970_000_000_1).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serde_geopoint() {
        let lax = GeoPoint::from_degrees(33.94, -118.4).unwrap();
        let serialized = serde_json::to_string(&lax).unwrap();
        assert_eq!(r#"{"latitude":33.94,"longitude":-118.4}"#, serialized);

        let deserialized: GeoPoint = serde_json::from_str(&serialized).unwrap();
        assert_eq!(lax, deserialized);

        let invalid = serde_json::from_str::<GeoPoint>(r#"{"latitude":95.0,"longitude":0.0}"#);
        assert!(invalid.is_err());
    }
}
