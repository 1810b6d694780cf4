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

//! The vincenty module solves the inverse geodesic problem on an `Ellipsoid`
//! using [Vincenty's formulae](https://en.wikipedia.org/wiki/Vincenty%27s_formulae).
//!
//! The longitude difference on the auxiliary sphere, λ, is iterated until
//! successive values differ by less than `CONVERGENCE_THRESHOLD`.  
//! The iteration does not converge for some nearly antipodal positions,
//! in which case an `Error::Convergence` is returned after `MAX_ITERATIONS`.

use super::{Ellipsoid, WGS84_ELLIPSOID};
use crate::error::{Error, Result};
use crate::point::GeoPoint;
use crate::trig::{Angle, Degrees, Radians};
use crate::{Metres, Validate};
use contracts::debug_requires;
use serde::Serialize;

/// The maximum number of iterations of λ before giving up.
pub const MAX_ITERATIONS: u32 = 200;

/// The difference between successive values of λ at which the iteration
/// has converged, in radians.
pub const CONVERGENCE_THRESHOLD: f64 = 1.0e-12;

/// The solution of the inverse geodesic problem between two positions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct InverseSolution {
    /// The length of the geodesic between the positions.
    pub distance: Metres,
    /// The azimuth of the geodesic at the start position.
    pub initial_bearing: Angle,
    /// The azimuth of the geodesic at the end position.
    pub final_bearing: Angle,
    /// The number of iterations of λ taken to converge.
    pub iterations: u32,
}

impl InverseSolution {
    fn coincident(iterations: u32) -> Self {
        Self {
            distance: Metres(0.0),
            initial_bearing: Angle::default(),
            final_bearing: Angle::default(),
            iterations,
        }
    }
}

/// The sines and cosines of the reduced latitudes of the start and end
/// positions.
#[derive(Clone, Copy, Debug)]
struct ReducedLatitudes {
    sin_u1: f64,
    cos_u1: f64,
    sin_u2: f64,
    cos_u2: f64,
}

impl ReducedLatitudes {
    fn new(ellipsoid: &Ellipsoid, a: &GeoPoint, b: &GeoPoint) -> Self {
        let u1 = ellipsoid.reduced_latitude(a.lat());
        let u2 = ellipsoid.reduced_latitude(b.lat());
        Self {
            sin_u1: libm::sin(u1.0),
            cos_u1: libm::cos(u1.0),
            sin_u2: libm::sin(u2.0),
            cos_u2: libm::cos(u2.0),
        }
    }

    /// The azimuth of the geodesic at the start position.
    fn initial_azimuth(&self, sin_lambda: f64, cos_lambda: f64) -> Angle {
        let y = self.cos_u2 * sin_lambda;
        let x = self.cos_u1 * self.sin_u2 - self.sin_u1 * self.cos_u2 * cos_lambda;
        Angle::from(Degrees::from(Radians(libm::atan2(y, x))).normalise_bearing())
    }

    /// The azimuth of the geodesic at the end position.
    fn final_azimuth(&self, sin_lambda: f64, cos_lambda: f64) -> Angle {
        let y = self.cos_u1 * sin_lambda;
        let x = -self.sin_u1 * self.cos_u2 + self.cos_u1 * self.sin_u2 * cos_lambda;
        Angle::from(Degrees::from(Radians(libm::atan2(y, x))).normalise_bearing())
    }
}

/// The ellipsoidal correction to the arc length on the auxiliary sphere:
/// returns A * (σ - Δσ), so that the distance is b * A * (σ - Δσ).
fn corrected_arc_length(
    ellipsoid: &Ellipsoid,
    cos_sq_alpha: f64,
    sigma: f64,
    sin_sigma: f64,
    cos_sigma: f64,
    cos_2sigma_m: f64,
) -> f64 {
    let u_sq = cos_sq_alpha * ellipsoid.second_eccentricity_squared();
    let big_a =
        1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

    let cos_sq_2sigma_m = cos_2sigma_m * cos_2sigma_m;
    let delta_sigma = big_b
        * sin_sigma
        * (cos_2sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_sq_2sigma_m)
                    - big_b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_sq_2sigma_m)));

    big_a * (sigma - delta_sigma)
}

/// Solve the inverse geodesic problem between positions `a` and `b` on
/// the `ellipsoid`.
/// * `ellipsoid` - the ellipsoid.
/// * `a`, `b` - the start and end positions.
///
/// returns the geodesic distance with the initial and final bearings.
/// Coincident positions return a zero distance with zero bearings.
///
/// # Errors
///
/// Returns `Error::Convergence` if λ has not converged after
/// `MAX_ITERATIONS`.
#[debug_requires(ellipsoid.is_valid())]
#[debug_ensures(ret.as_ref().map_or(true, |s| 0.0 <= s.distance.0))]
pub fn inverse(ellipsoid: &Ellipsoid, a: &GeoPoint, b: &GeoPoint) -> Result<InverseSolution> {
    let flattening = ellipsoid.f();
    let reduced = ReducedLatitudes::new(ellipsoid, a, b);

    let delta_lon = b.lon() - a.lon();
    let delta_lambda = delta_lon.radians();
    let mut lambda = delta_lambda;

    for iteration in 1..=MAX_ITERATIONS {
        let sin_lambda = libm::sin(lambda);
        let cos_lambda = libm::cos(lambda);

        let y = reduced.cos_u2 * sin_lambda;
        let x = reduced.cos_u1 * reduced.sin_u2 - reduced.sin_u1 * reduced.cos_u2 * cos_lambda;
        let sin_sigma = libm::hypot(y, x);
        if sin_sigma == 0.0 {
            log::debug!("inverse: coincident positions {a} and {b}");
            return Ok(InverseSolution::coincident(iteration));
        }

        let cos_sigma =
            reduced.sin_u1 * reduced.sin_u2 + reduced.cos_u1 * reduced.cos_u2 * cos_lambda;
        let sigma = libm::atan2(sin_sigma, cos_sigma);

        let sin_alpha = reduced.cos_u1 * reduced.cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // cos²α is zero for geodesics along the equator
        let cos_2sigma_m = if cos_sq_alpha == 0.0 {
            0.0
        } else {
            cos_sigma - 2.0 * reduced.sin_u1 * reduced.sin_u2 / cos_sq_alpha
        };

        let big_c =
            flattening / 16.0 * cos_sq_alpha * (4.0 + flattening * (4.0 - 3.0 * cos_sq_alpha));
        let previous = lambda;
        lambda = delta_lambda
            + (1.0 - big_c)
                * flattening
                * sin_alpha
                * (sigma
                    + big_c * sin_sigma
                        * (cos_2sigma_m
                            + big_c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        let delta = libm::fabs(lambda - previous);
        log::trace!("inverse: iteration {iteration} lambda {lambda} delta {delta}");

        if delta < CONVERGENCE_THRESHOLD {
            log::debug!("inverse: converged after {iteration} iterations");

            let distance = ellipsoid.b().0
                * corrected_arc_length(
                    ellipsoid,
                    cos_sq_alpha,
                    sigma,
                    sin_sigma,
                    cos_sigma,
                    cos_2sigma_m,
                );
            let sin_lambda = libm::sin(lambda);
            let cos_lambda = libm::cos(lambda);
            return Ok(InverseSolution {
                distance: Metres(distance),
                initial_bearing: reduced.initial_azimuth(sin_lambda, cos_lambda),
                final_bearing: reduced.final_azimuth(sin_lambda, cos_lambda),
                iterations: iteration,
            });
        }
    }

    log::debug!("inverse: failed to converge between {a} and {b}");
    Err(Error::Convergence {
        iterations: MAX_ITERATIONS,
    })
}

impl Ellipsoid {
    /// Solve the inverse geodesic problem between positions `a` and `b`
    /// on this ellipsoid, see `vincenty::inverse`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Convergence` if the iteration does not converge.
    pub fn inverse(&self, a: &GeoPoint, b: &GeoPoint) -> Result<InverseSolution> {
        inverse(self, a, b)
    }
}

/// Calculate the geodesic distance between positions `a` and `b` on the
/// WGS84 ellipsoid.
/// # Examples
/// ```
/// use via_geocalc::{vincenty_distance, GeoPoint};
///
/// let a = GeoPoint::from_degrees(0.0, 0.0).unwrap();
/// let b = GeoPoint::from_degrees(0.0, 1.0).unwrap();
/// let distance = vincenty_distance(&a, &b).unwrap();
/// assert!((distance.0 - 111_319.490_793).abs() < 1.0e-3);
/// ```
///
/// # Errors
///
/// Returns `Error::Convergence` for some nearly antipodal positions.
pub fn vincenty_distance(a: &GeoPoint, b: &GeoPoint) -> Result<Metres> {
    WGS84_ELLIPSOID.inverse(a, b).map(|s| s.distance)
}

/// Calculate the initial bearing of the geodesic from position `a` to
/// position `b` on the WGS84 ellipsoid, in the range [0, 360).
///
/// # Errors
///
/// Returns `Error::Convergence` for some nearly antipodal positions.
pub fn vincenty_initial_bearing(a: &GeoPoint, b: &GeoPoint) -> Result<Angle> {
    WGS84_ELLIPSOID.inverse(a, b).map(|s| s.initial_bearing)
}

/// Calculate the final bearing of the geodesic from position `a` to
/// position `b` on the WGS84 ellipsoid, in the range [0, 360).
///
/// # Errors
///
/// Returns `Error::Convergence` for some nearly antipodal positions.
pub fn vincenty_final_bearing(a: &GeoPoint, b: &GeoPoint) -> Result<Angle> {
    WGS84_ELLIPSOID.inverse(a, b).map(|s| s.final_bearing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_within_tolerance;
    use crate::trig::dms::Dms;
    use proptest::prelude::*;

    fn kew() -> GeoPoint {
        GeoPoint::from_degrees(51.4843774, -0.2912044).unwrap()
    }

    fn richmond() -> GeoPoint {
        GeoPoint::from_degrees(51.4613418, -0.3035466).unwrap()
    }

    #[test]
    fn test_vincenty_distance_kew_richmond() {
        let distance = vincenty_distance(&kew(), &richmond()).unwrap();
        assert!(is_within_tolerance(2702.5458, distance.0, 1.0e-3));

        let reverse = vincenty_distance(&richmond(), &kew()).unwrap();
        assert!(is_within_tolerance(distance.0, reverse.0, 1.0e-6));
    }

    #[test]
    fn test_vincenty_bearings_kew_richmond() {
        let initial = vincenty_initial_bearing(&kew(), &richmond()).unwrap();
        assert!(is_within_tolerance(
            Dms::new(198, 30, 19.58).decimal_degrees(),
            initial.degrees(),
            1.0e-4
        ));

        let final_bearing = vincenty_final_bearing(&kew(), &richmond()).unwrap();
        assert!(is_within_tolerance(
            Dms::new(198, 29, 44.82).decimal_degrees(),
            final_bearing.degrees(),
            1.0e-4
        ));

        // the reverse geodesic's final bearing is the reciprocal of the initial bearing
        let reverse = vincenty_final_bearing(&richmond(), &kew()).unwrap();
        assert!(is_within_tolerance(
            initial.degrees() - 180.0,
            reverse.degrees(),
            1.0e-9
        ));
    }

    #[test]
    fn test_vincenty_distance_to_buenos_aires() {
        let kew = GeoPoint::at(
            Angle::from_dms(51, 29, 3.7572),
            Angle::from_dms(0, 17, 28.3338),
        )
        .unwrap();
        let buenos_aires = GeoPoint::at(
            Angle::from_dms(-34, 36, 35.9994),
            Angle::from_dms(-58, 22, 11.9994),
        )
        .unwrap();

        let distance = vincenty_distance(&buenos_aires, &kew).unwrap();
        assert_eq!(11120, (distance.0 / 1000.0) as i32);
    }

    #[test]
    fn test_vincenty_along_the_equator() {
        let a = GeoPoint::from_degrees(0.0, 0.0).unwrap();
        let b = GeoPoint::from_degrees(0.0, 1.0).unwrap();

        let solution = WGS84_ELLIPSOID.inverse(&a, &b).unwrap();
        assert!(is_within_tolerance(111_319.490_793_226, solution.distance.0, 1.0e-6));
        assert!(is_within_tolerance(90.0, solution.initial_bearing.degrees(), 1.0e-12));
        assert!(is_within_tolerance(90.0, solution.final_bearing.degrees(), 1.0e-12));
        assert!(solution.iterations <= MAX_ITERATIONS);
    }

    #[test]
    fn test_vincenty_along_a_meridian() {
        let a = GeoPoint::from_degrees(10.0, 20.0).unwrap();
        let b = GeoPoint::from_degrees(40.0, 20.0).unwrap();

        let solution = inverse(&WGS84_ELLIPSOID, &a, &b).unwrap();
        assert!(is_within_tolerance(3_323_674.197_115_674, solution.distance.0, 1.0e-6));
        assert_eq!(0.0, solution.initial_bearing.degrees());
        assert_eq!(0.0, solution.final_bearing.degrees());

        let bearing = vincenty_initial_bearing(&b, &a).unwrap();
        assert_eq!(180.0, bearing.degrees());
    }

    #[test]
    fn test_vincenty_coincident_positions() {
        let solution = WGS84_ELLIPSOID.inverse(&kew(), &kew()).unwrap();
        assert_eq!(Metres(0.0), solution.distance);
        assert_eq!(0.0, solution.initial_bearing.degrees());
        assert_eq!(0.0, solution.final_bearing.degrees());
        assert_eq!(1, solution.iterations);
    }

    #[test]
    fn test_vincenty_nearly_antipodal_fails_to_converge() {
        let a = GeoPoint::from_degrees(0.0, 0.0).unwrap();
        let b = GeoPoint::from_degrees(0.5, 179.7).unwrap();

        let result = vincenty_distance(&a, &b);
        assert_eq!(
            Err(Error::Convergence {
                iterations: MAX_ITERATIONS
            }),
            result
        );
        assert!(vincenty_initial_bearing(&a, &b).is_err());
        assert!(vincenty_final_bearing(&a, &b).is_err());
    }

    #[test]
    fn test_vincenty_on_a_sphere() {
        let sphere = Ellipsoid::new(crate::sphere::MEAN_EARTH_RADIUS, 0.0);
        let solution = sphere.inverse(&kew(), &richmond()).unwrap();
        let spherical = crate::sphere::haversine_distance(&kew(), &richmond());
        assert!(is_within_tolerance(spherical.0, solution.distance.0, 1.0e-6));
    }

    fn geo_point() -> impl Strategy<Value = GeoPoint> {
        (-89.0..=89.0_f64, -180.0..=180.0_f64)
            .prop_map(|(lat, lon)| GeoPoint::from_degrees(lat, lon).unwrap())
    }

    proptest! {
        #[test]
        fn vincenty_distance_is_symmetric(a in geo_point(), b in geo_point()) {
            if let (Ok(ab), Ok(ba)) = (vincenty_distance(&a, &b), vincenty_distance(&b, &a)) {
                prop_assert!(is_within_tolerance(ab.0, ba.0, 1.0e-3));
            }
        }

        #[test]
        fn vincenty_bearings_are_normalised(a in geo_point(), b in geo_point()) {
            if let Ok(solution) = WGS84_ELLIPSOID.inverse(&a, &b) {
                prop_assert!(Degrees::is_bearing(solution.initial_bearing.degrees()));
                prop_assert!(Degrees::is_bearing(solution.final_bearing.degrees()));
            }
        }
    }
}
