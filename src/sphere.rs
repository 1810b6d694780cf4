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

//! The sphere module contains functions for calculating distances, bearings
//! and destination points on the surface of a sphere with the mean Earth
//! radius.
//!
//! Distances are calculated using either the
//! [spherical law of cosines](https://en.wikipedia.org/wiki/Spherical_law_of_cosines)
//! or the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).  
//! Note: the law of cosines loses precision for distances of less than a few
//! metres, since `acos` is ill-conditioned near 1; the haversine formula is
//! well-conditioned at small distances.
//!
//! The `bounding` module calculates the latitude/longitude rectangle around a
//! position.

pub mod bounding;

use crate::point::GeoPoint;
use crate::trig::{Angle, Degrees, Radians, UnitNegRange};
use crate::{clamp, Metres};
use contracts::{debug_ensures, debug_requires};

/// The mean radius of the Earth, used by every spherical calculation.  
/// Note: it is **not** the WGS84 semi-major axis, see `ellipsoid::wgs84::A`.
pub const MEAN_EARTH_RADIUS: Metres = Metres(6_371_010.0);

/// Convert a distance on the surface of the Earth into an angle at the
/// centre of the Earth.
#[must_use]
pub fn angular_distance(distance: Metres) -> Radians {
    Radians(distance.0 / MEAN_EARTH_RADIUS.0)
}

/// Calculate the great circle distance between two positions using the
/// spherical law of cosines:
/// d = R * acos(sin φ1 * sin φ2 + cos φ1 * cos φ2 * cos Δλ)
/// * `a`, `b` - the positions.
///
/// returns the distance in metres, exactly zero if `a == b`.
#[debug_ensures(0.0 <= ret.0)]
#[must_use]
pub fn spherical_distance(a: &GeoPoint, b: &GeoPoint) -> Metres {
    if a == b {
        return Metres(0.0);
    }

    // cos is even, so the absolute difference gives an exactly symmetric result
    let delta_lon = (b.lon() - a.lon()).abs();
    let cos_distance =
        a.lat().sin() * b.lat().sin() + a.lat().cos() * b.lat().cos() * delta_lon.cos();
    Metres(MEAN_EARTH_RADIUS.0 * UnitNegRange::clamp(cos_distance).acos().0)
}

/// Calculate the great circle distance between two positions using the
/// haversine formula:
/// h = sin²(Δφ/2) + cos φ1 * cos φ2 * sin²(Δλ/2)
/// d = 2R * asin(√h)
/// * `a`, `b` - the positions.
///
/// returns the distance in metres.
#[debug_ensures(0.0 <= ret.0)]
#[must_use]
pub fn haversine_distance(a: &GeoPoint, b: &GeoPoint) -> Metres {
    let sin_half_delta_lat = libm::sin(0.5 * (b.lat() - a.lat()).abs().radians());
    let sin_half_delta_lon = libm::sin(0.5 * (b.lon() - a.lon()).abs().radians());
    let h = sin_half_delta_lat * sin_half_delta_lat
        + a.lat().cos() * b.lat().cos() * sin_half_delta_lon * sin_half_delta_lon;

    // clamp √h to guard against overshoot at antipodal positions
    let half_distance = UnitNegRange::clamp(libm::sqrt(h)).asin();
    Metres(2.0 * MEAN_EARTH_RADIUS.0 * half_distance.0)
}

/// Calculate the initial bearing of the great circle from position a to
/// position b:
/// θ = atan2(sin Δλ * cos φ2, cos φ1 * sin φ2 − sin φ1 * cos φ2 * cos Δλ)
/// * `a`, `b` - the start and end positions.
///
/// returns the bearing clockwise from North in degrees: 0 <= bearing < 360.  
/// Note: the bearing from a position to itself is `atan2(0, 0)`, i.e. 0.
#[debug_ensures(Degrees::is_bearing(ret.degrees()))]
#[must_use]
pub fn bearing(a: &GeoPoint, b: &GeoPoint) -> Angle {
    let delta_lon = b.lon() - a.lon();
    let y = delta_lon.sin() * b.lat().cos();
    let x = a.lat().cos() * b.lat().sin() - a.lat().sin() * b.lat().cos() * delta_lon.cos();
    Angle::from(Degrees::from(Radians(libm::atan2(y, x))).normalise_bearing())
}

/// Calculate the initial bearing and distance along the great circle of
/// position b from position a.
/// * `a`, `b` - the start and end positions
///
/// returns the initial bearing and the law of cosines distance.
#[must_use]
pub fn calculate_bearing_and_distance(a: &GeoPoint, b: &GeoPoint) -> (Angle, Metres) {
    (bearing(a, b), spherical_distance(a, b))
}

/// Calculate the position reached by travelling along a great circle from
/// `origin` with the initial `bearing` for `distance`:
/// φ2 = asin(sin φ1 * cos δ + cos φ1 * sin δ * cos θ)
/// λ2 = λ1 + atan2(sin θ * sin δ * cos φ1, cos δ − sin φ1 * sin φ2)
/// where δ = distance / R.
/// * `origin` - the start position.
/// * `bearing` - the initial bearing clockwise from North.
/// * `distance` - the distance to travel.
///
/// returns the destination, with its longitude normalised into [-180, 180).  
/// A zero `distance` returns `origin`, whatever the bearing.
#[debug_requires(distance.0.is_finite())]
#[must_use]
pub fn destination_point(origin: &GeoPoint, bearing: Angle, distance: Metres) -> GeoPoint {
    if distance.0 == 0.0 {
        return *origin;
    }

    let delta = angular_distance(distance).0;
    let (sin_delta, cos_delta) = (libm::sin(delta), libm::cos(delta));
    let (sin_lat1, cos_lat1) = (origin.lat().sin(), origin.lat().cos());

    let lat2 = UnitNegRange::clamp(sin_lat1 * cos_delta + cos_lat1 * sin_delta * bearing.cos())
        .asin();
    let delta_lon = libm::atan2(
        bearing.sin() * sin_delta * cos_lat1,
        cos_delta - sin_lat1 * libm::sin(lat2.0),
    );
    let lon2 = origin.lon() + Angle::from(Radians(delta_lon));

    GeoPoint::new(
        Angle::from_degrees(clamp(Degrees::from(lat2).0, -90.0, 90.0)),
        Angle::from(Degrees::from(lon2).normalise_longitude()),
    )
}
