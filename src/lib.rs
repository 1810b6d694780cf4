// Copyright (c) 2018-2024 Via Technology Ltd.

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

//! This library calculates distances, bearings, destination points and
//! bounding areas between positions on the surface of the Earth.
//!
//! The Earth is modelled in two ways:
//! - as a sphere with the mean Earth radius, see the `sphere` module;
//! - as the WGS84 ellipsoid, see the `ellipsoid` module.
//!
//! The spherical model provides the law of cosines and haversine distances,
//! the initial bearing, the destination point reached along a great circle
//! and the bounding area around a position.  
//! The ellipsoidal model solves the inverse geodesic problem using
//! [Vincenty's formulae](https://en.wikipedia.org/wiki/Vincenty%27s_formulae).
//!
//! Positions are `GeoPoint`s: pairs of latitude and longitude `Angle`s
//! constructed from decimal degrees or from degrees, minutes and seconds,
//! see the `trig` and `point` modules.
//!
//! ```
//! use via_geocalc::{haversine_distance, GeoPoint};
//!
//! let kew = GeoPoint::from_degrees(51.4843774, -0.2912044).unwrap();
//! let richmond = GeoPoint::from_degrees(51.4613418, -0.3035466).unwrap();
//! let distance = haversine_distance(&kew, &richmond);
//! assert!((distance.0 - 2700.326).abs() < 0.01);
//! ```
//!
//! The library uses the [contracts](https://crates.io/crates/contracts) crate
//! to implement Design By Contract [(DbC)](https://wiki.c2.com/?DesignByContract).  
//! It also defines a `Validate` trait to define an `is_valid` invariant
//! function to support Design By Contract invariants.

pub mod ellipsoid;
pub mod error;
pub mod point;
pub mod sphere;
pub mod trig;

pub use ellipsoid::vincenty::{
    vincenty_distance, vincenty_final_bearing, vincenty_initial_bearing,
};
pub use error::{Error, Result};
pub use point::GeoPoint;
pub use sphere::bounding::{bounding_area, BoundingArea};
pub use sphere::{bearing, destination_point, haversine_distance, spherical_distance};
pub use trig::dms::{DegreesMinutes, Dms, Sign};
pub use trig::{Angle, Degrees, Radians};

use contracts::{debug_ensures, debug_requires};
use serde::{Deserialize, Serialize};

/// The Metres newtype an f64.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Metres(pub f64);

/// Return the minimum of a or b.
#[inline]
#[must_use]
pub fn min<T>(a: T, b: T) -> T
where
    T: PartialOrd + Copy,
{
    if b < a {
        b
    } else {
        a
    }
}

/// Return the maximum of a or b.
#[inline]
#[must_use]
pub fn max<T>(a: T, b: T) -> T
where
    T: PartialOrd + Copy,
{
    if b < a {
        a
    } else {
        b
    }
}

/// Clamp value into the range: min to max inclusive.
/// * `value` - value to clamp
/// * `min` - minimum value.
/// * `max` - maximum value.
#[debug_ensures((min ..= max).contains(&ret))]
#[inline]
#[must_use]
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: PartialOrd + Copy,
{
    if value < min {
        min
    } else if max < value {
        max
    } else {
        value
    }
}

/// The Validate trait.
pub trait Validate {
    /// return true if the type is valid, false otherwise.
    fn is_valid(&self) -> bool;
}

/// Check whether a value is within tolerance of zero.
/// * `value` the value to test
/// * `tolerance` the permitted tolerance
/// return true if value is <= tolerance
#[debug_requires(value >= 0.0)]
#[inline]
#[must_use]
pub fn is_small(value: f64, tolerance: f64) -> bool {
    value <= tolerance
}

/// Check whether a value is within tolerance of a reference value.
/// * `reference` the required value
/// * `value` the value to test
/// * `tolerance` the permitted tolerance
/// return true if abs(reference - value) is <= tolerance
#[inline]
#[must_use]
pub fn is_within_tolerance(reference: f64, value: f64, tolerance: f64) -> bool {
    is_small(libm::fabs(reference - value), tolerance)
}

/// Check whether a value is within a relative tolerance of a non-zero
/// reference value.
/// * `reference` the required value
/// * `value` the value to test
/// * `tolerance` the permitted tolerance as a fraction of `reference`
#[inline]
#[must_use]
pub fn is_within_relative_tolerance(reference: f64, value: f64, tolerance: f64) -> bool {
    is_within_tolerance(reference, value, libm::fabs(reference) * tolerance)
}
