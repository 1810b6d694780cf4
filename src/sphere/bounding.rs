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

//! The bounding module contains the `BoundingArea` type: a rectangle of
//! latitude and longitude around a position.
//!
//! `bounding_area` calculates a rectangle containing every position within a
//! radius of the centre. Its north and south edges lie at the radius from
//! the centre, its east and west edges at the widest longitude extent of the
//! disc, evaluated at the latitude furthest from the equator, since meridians
//! converge towards the poles.  
//! When the disc contains a pole, longitude is undefined at the pole and the
//! east and west edges are fixed 90 degrees either side of the centre.
//!
//! `BoundingArea::radial` calculates the rectangle whose north east and
//! south west corners lie at the radius from the centre.
//!
//! A `BoundingArea` whose west longitude is greater than its east longitude
//! crosses the antimeridian.

use super::{angular_distance, destination_point};
use crate::point::GeoPoint;
use crate::trig::{Angle, Degrees, UnitNegRange};
use crate::{max, min, Metres, Validate};
use contracts::debug_requires;
use serde::Serialize;

/// The half width in degrees of a bounding area containing a pole.
const POLAR_HALF_WIDTH: f64 = 90.0;

/// A latitude/longitude rectangle defined by its four corners.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BoundingArea {
    north_east: GeoPoint,
    north_west: GeoPoint,
    south_east: GeoPoint,
    south_west: GeoPoint,
}

impl Validate for BoundingArea {
    /// Test whether a `BoundingArea` is valid.  
    /// I.e. whether its corners form a latitude/longitude rectangle.
    #[allow(clippy::float_cmp)]
    fn is_valid(&self) -> bool {
        self.north_east.latitude() == self.north_west.latitude()
            && self.south_east.latitude() == self.south_west.latitude()
            && self.north_east.longitude() == self.south_east.longitude()
            && self.north_west.longitude() == self.south_west.longitude()
            && self.south_west.latitude() <= self.north_east.latitude()
    }
}

impl BoundingArea {
    /// Construct a `BoundingArea` from its north east and south west corners.
    #[debug_requires(south_west.latitude() <= north_east.latitude())]
    #[debug_ensures(ret.is_valid())]
    #[must_use]
    pub fn new(north_east: GeoPoint, south_west: GeoPoint) -> Self {
        Self {
            north_east,
            north_west: GeoPoint::new(north_east.lat(), south_west.lon()),
            south_east: GeoPoint::new(south_west.lat(), north_east.lon()),
            south_west,
        }
    }

    /// Construct a `BoundingArea` with its north east and south west
    /// corners at `radius` from `center`, on bearings of 45 and 225 degrees.  
    /// Note: the north west and south east corners are only approximately at
    /// `radius` from `center` and the area does not contain the whole disc.
    #[debug_requires(0.0 <= radius.0)]
    #[must_use]
    pub fn radial(center: &GeoPoint, radius: Metres) -> Self {
        let north_east = destination_point(center, Angle::from_degrees(45.0), radius);
        let south_west = destination_point(center, Angle::from_degrees(225.0), radius);
        Self::new(north_east, south_west)
    }

    #[must_use]
    pub const fn north_east(&self) -> &GeoPoint {
        &self.north_east
    }

    #[must_use]
    pub const fn north_west(&self) -> &GeoPoint {
        &self.north_west
    }

    #[must_use]
    pub const fn south_east(&self) -> &GeoPoint {
        &self.south_east
    }

    #[must_use]
    pub const fn south_west(&self) -> &GeoPoint {
        &self.south_west
    }

    /// The latitude of the northern edge in degrees.
    #[must_use]
    pub fn north(&self) -> f64 {
        self.north_east.latitude()
    }

    /// The latitude of the southern edge in degrees.
    #[must_use]
    pub fn south(&self) -> f64 {
        self.south_west.latitude()
    }

    /// The longitude of the eastern edge in degrees.
    #[must_use]
    pub fn east(&self) -> f64 {
        self.north_east.longitude()
    }

    /// The longitude of the western edge in degrees.
    #[must_use]
    pub fn west(&self) -> f64 {
        self.south_west.longitude()
    }

    /// Whether the area crosses the antimeridian,
    /// i.e. whether its western edge is East of its eastern edge.
    #[must_use]
    pub fn crosses_antimeridian(&self) -> bool {
        self.east() < self.west()
    }

    /// Determine whether a position lies within the area, edges included.
    #[must_use]
    pub fn contains(&self, point: &GeoPoint) -> bool {
        let lon = point.longitude();
        let within_longitude = if self.crosses_antimeridian() {
            self.west() <= lon || lon <= self.east()
        } else {
            (self.west()..=self.east()).contains(&lon)
        };

        within_longitude && (self.south()..=self.north()).contains(&point.latitude())
    }
}

/// Calculate a `BoundingArea` containing every position within `radius` of
/// `center`, using the spherical model.
/// * `center` - the centre of the area.
/// * `radius` - the radius of the disc around `center`.
///
/// returns the enclosing latitude/longitude rectangle.
#[debug_requires(0.0 <= radius.0)]
#[debug_ensures(ret.is_valid())]
#[must_use]
pub fn bounding_area(center: &GeoPoint, radius: Metres) -> BoundingArea {
    let delta = angular_distance(radius);
    let delta_degrees = Degrees::from(delta).0;
    let north = center.latitude() + delta_degrees;
    let south = center.latitude() - delta_degrees;

    let half_width = if 90.0 <= north || south <= -90.0 {
        log::debug!("bounding area around {center} contains a pole");
        POLAR_HALF_WIDTH
    } else {
        let widest = Angle::from_degrees(max(libm::fabs(north), libm::fabs(south)));
        let sin_half_width = UnitNegRange::clamp(libm::sin(delta.0) / widest.cos());
        Degrees::from(sin_half_width.asin()).0
    };

    let north = Angle::from_degrees(min(north, 90.0));
    let south = Angle::from_degrees(max(south, -90.0));
    let east = Angle::from(Degrees(center.longitude() + half_width).normalise_longitude());
    let west = Angle::from(Degrees(center.longitude() - half_width).normalise_longitude());

    BoundingArea {
        north_east: GeoPoint::new(north, east),
        north_west: GeoPoint::new(north, west),
        south_east: GeoPoint::new(south, east),
        south_west: GeoPoint::new(south, west),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::{haversine_distance, spherical_distance};
    use crate::is_within_tolerance;

    fn kew() -> GeoPoint {
        GeoPoint::from_degrees(51.4843774, -0.2912044).unwrap()
    }

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint::from_degrees(latitude, longitude).unwrap()
    }

    #[test]
    fn test_bounding_area_edges() {
        let kew = kew();
        let radius = Metres(3000.0);
        let area = bounding_area(&kew, radius);
        assert!(area.is_valid());
        assert!(!area.crosses_antimeridian());

        let middle_north = point(area.north(), kew.longitude());
        let middle_south = point(area.south(), kew.longitude());
        assert!(is_within_tolerance(
            radius.0,
            haversine_distance(&kew, &middle_north).0,
            1.0e-6
        ));
        assert!(is_within_tolerance(
            radius.0,
            haversine_distance(&kew, &middle_south).0,
            1.0e-6
        ));

        for corner in [
            area.north_east(),
            area.north_west(),
            area.south_east(),
            area.south_west(),
        ] {
            assert!(radius.0 < haversine_distance(&kew, corner).0);
        }

        // the east and west edges are beyond the disc
        let middle_east = point(kew.latitude(), area.east());
        let middle_west = point(kew.latitude(), area.west());
        assert!(radius.0 <= haversine_distance(&kew, &middle_east).0);
        assert!(radius.0 <= haversine_distance(&kew, &middle_west).0);
    }

    #[test]
    fn test_bounding_area_contains_disc() {
        let kew = kew();
        let radius = Metres(3000.0);
        let area = bounding_area(&kew, radius);
        assert!(area.contains(&kew));

        for i in 0..36 {
            let bearing = Angle::from_degrees(f64::from(i) * 10.0);
            let inside = destination_point(&kew, bearing, Metres(0.999 * radius.0));
            assert!(area.contains(&inside));

            let outside = destination_point(&kew, bearing, Metres(2.0 * radius.0));
            assert!(!area.contains(&outside));
        }
    }

    #[test]
    fn test_bounding_area_north_pole() {
        let north_pole = point(90.0, 0.0);
        let area = bounding_area(&north_pole, Metres(10_000.0));
        assert!(area.is_valid());

        assert_eq!(90.0, area.north_east().latitude());
        assert_eq!(90.0, area.north_east().longitude());
        assert_eq!(-90.0, area.north_west().longitude());
        assert!(is_within_tolerance(
            89.91006798056583,
            area.south_east().latitude(),
            1.0e-9
        ));
        assert_eq!(90.0, area.south_east().longitude());
    }

    #[test]
    fn test_bounding_area_south_pole() {
        let near_south_pole = point(-89.95, 45.0);
        let area = bounding_area(&near_south_pole, Metres(10_000.0));

        assert_eq!(-90.0, area.south());
        assert_eq!(135.0, area.east());
        assert_eq!(-45.0, area.west());
        assert!(area.contains(&point(-90.0, 0.0)));
    }

    #[test]
    fn test_bounding_area_wide_near_pole() {
        // the disc does not reach the pole but is wider than 90 degrees
        let center = point(80.0, 0.0);
        let area = bounding_area(&center, Metres(1_100_000.0));

        assert!(area.north() < 90.0);
        assert_eq!(90.0, area.east());
        assert_eq!(-90.0, area.west());
    }

    #[test]
    fn test_bounding_area_antimeridian() {
        let center = point(0.0, 179.99);
        let area = bounding_area(&center, Metres(10_000.0));
        assert!(area.is_valid());
        assert!(area.crosses_antimeridian());
        assert!(area.east() < -179.9);
        assert!(179.9 < area.west());

        assert!(area.contains(&center));
        assert!(area.contains(&point(0.0, -179.95)));
        assert!(area.contains(&point(0.05, 180.0)));
        assert!(!area.contains(&point(0.0, 179.8)));
        assert!(!area.contains(&point(0.0, 0.0)));
    }

    #[test]
    fn test_bounding_area_zero_radius() {
        let kew = kew();
        let area = bounding_area(&kew, Metres(0.0));
        assert_eq!(kew.latitude(), area.north());
        assert_eq!(kew.latitude(), area.south());
        assert!(is_within_tolerance(kew.longitude(), area.east(), 1.0e-12));
        assert!(is_within_tolerance(kew.longitude(), area.west(), 1.0e-12));
    }

    #[test]
    fn test_radial_bounding_area_distance() {
        let kew = kew();
        let area = BoundingArea::radial(&kew, Metres(3000.0));
        assert!(area.is_valid());

        let north_east_distance = spherical_distance(&kew, area.north_east());
        assert!(is_within_tolerance(3000.0, north_east_distance.0, 1.0e-3));

        let south_west_distance = spherical_distance(&kew, area.south_west());
        assert!(is_within_tolerance(3000.0, south_west_distance.0, 1.0e-3));

        let north_west_distance = spherical_distance(&kew, area.north_west());
        assert!(is_within_tolerance(3000.0, north_west_distance.0, 2.0));

        let south_east_distance = spherical_distance(&kew, area.south_east());
        assert!(is_within_tolerance(3000.0, south_east_distance.0, 2.0));

        let middle_longitude = 0.5 * (area.south_west().longitude() + area.north_east().longitude());
        let middle_north = point(area.north(), middle_longitude);
        assert!(is_within_tolerance(
            2120.0,
            spherical_distance(&kew, &middle_north).0,
            1.0
        ));

        let middle_south = point(area.south(), middle_longitude);
        assert!(is_within_tolerance(
            2120.0,
            spherical_distance(&kew, &middle_south).0,
            2.0
        ));

        let middle_latitude = 0.5 * (area.north() + area.south());
        let middle_east = point(middle_latitude, area.east());
        assert!(is_within_tolerance(
            2120.0,
            spherical_distance(&kew, &middle_east).0,
            3.0
        ));

        let middle_west = point(middle_latitude, area.west());
        assert!(is_within_tolerance(
            2120.0,
            spherical_distance(&kew, &middle_west).0,
            1.0
        ));
    }

    #[test]
    fn test_radial_bounding_area_north_pole() {
        let north_pole = point(90.0, 0.0);
        let area = BoundingArea::radial(&north_pole, Metres(10_000.0));

        assert!(is_within_tolerance(
            89.91006798056583,
            area.north_east().latitude(),
            1.0e-9
        ));
        assert!(is_within_tolerance(
            89.91006798056583,
            area.south_east().latitude(),
            1.0e-9
        ));
    }

    #[test]
    fn test_radial_bounding_area_next_to_london() {
        let center = point(51.5085452, -0.1997387000000117);
        let area = BoundingArea::radial(&center, Metres(5.0));

        assert!(is_within_tolerance(
            51.508576995759306,
            area.north_east().latitude(),
            1.0e-9
        ));
        assert!(is_within_tolerance(
            -0.19968761404347382,
            area.north_east().longitude(),
            1.0e-9
        ));
        assert!(is_within_tolerance(
            51.50851340421851,
            area.south_east().latitude(),
            1.0e-9
        ));
        assert_eq!(area.north_east().longitude(), area.south_east().longitude());
    }

    #[test]
    fn test_serde_bounding_area() {
        let area = BoundingArea::new(point(1.0, 2.0), point(-1.0, -2.0));
        let serialized = serde_json::to_string(&area).unwrap();
        assert_eq!(
            r#"{"north_east":{"latitude":1.0,"longitude":2.0},"north_west":{"latitude":1.0,"longitude":-2.0},"south_east":{"latitude":-1.0,"longitude":2.0},"south_west":{"latitude":-1.0,"longitude":-2.0}}"#,
            serialized
        );
    }
}
