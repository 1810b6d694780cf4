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

//! The ellipsoid module contains the `Ellipsoid` type: an ellipsoid of
//! revolution defined by its semi-major axis and flattening.
//!
//! `WGS84_ELLIPSOID` uses the WGS 84 primary parameters.
//! Geodesic distances and bearings on an `Ellipsoid` are calculated by the
//! `vincenty` module.

pub mod vincenty;

use crate::trig::{Angle, Radians};
use crate::{Metres, Validate};
use contracts::debug_ensures;
use serde::{Deserialize, Serialize};

/// The WGS 84 primary parameters.
pub mod wgs84 {
    use crate::Metres;

    /// The semi-major axis.
    pub const A: Metres = Metres(6_378_137.0);

    /// The flattening.
    pub const F: f64 = 1.0 / 298.257_223_563;
}

/// The WGS 84 `Ellipsoid`.
pub const WGS84_ELLIPSOID: Ellipsoid = Ellipsoid::new(wgs84::A, wgs84::F);

/// An ellipsoid of revolution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// The semi-major axis.
    a: Metres,
    /// The flattening.
    f: f64,
}

impl Validate for Ellipsoid {
    /// Test whether an `Ellipsoid` is valid,
    /// i.e. whether a > 0 and 0 <= f < 1.
    fn is_valid(&self) -> bool {
        0.0 < self.a.0 && (0.0..1.0).contains(&self.f)
    }
}

impl Ellipsoid {
    /// Construct an `Ellipsoid`.
    /// * `a` - the semi-major axis.
    /// * `f` - the flattening.
    #[must_use]
    pub const fn new(a: Metres, f: f64) -> Self {
        Self { a, f }
    }

    /// The semi-major axis.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The flattening.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The semi-minor axis: a * (1 - f).
    #[must_use]
    pub fn b(&self) -> Metres {
        Metres(self.a.0 * (1.0 - self.f))
    }

    /// The square of the first eccentricity: f * (2 - f).
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.f * (2.0 - self.f)
    }

    /// The square of the second eccentricity: (a² - b²) / b².
    #[must_use]
    pub fn second_eccentricity_squared(&self) -> f64 {
        let one_minus_f = 1.0 - self.f;
        self.eccentricity_squared() / (one_minus_f * one_minus_f)
    }

    /// The reduced (parametric) latitude of a geodetic latitude,
    /// i.e. its latitude on the auxiliary sphere: tan β = (1 - f) tan φ
    #[debug_ensures(libm::fabs(ret.0) <= std::f64::consts::FRAC_PI_2)]
    #[must_use]
    pub fn reduced_latitude(&self, latitude: Angle) -> Radians {
        Radians(libm::atan((1.0 - self.f) * libm::tan(latitude.radians())))
    }
}
