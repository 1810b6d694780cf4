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

//! The trig module contains types and functions for representing angles.
//!
//! An `Angle` holds a value in decimal degrees and provides a view of it in
//! radians. It does not wrap around: the same type represents latitudes,
//! longitudes and bearings, so range checks are left to the types that use
//! it, e.g. `GeoPoint`.  
//! Angles may also be constructed from degrees, minutes and seconds, see the
//! `dms` module.

#![allow(clippy::float_cmp)]

pub mod dms;

use super::{clamp, Validate};
use contracts::debug_invariant;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::From;
use std::ops::{Add, Neg, Sub};

/// The conversion factor from Degrees to Radians.
pub const DEG2RAD: f64 = std::f64::consts::PI / 180.0;

/// The conversion factor from Radians to Degrees.
pub const RAD2DEG: f64 = 180.0 / std::f64::consts::PI;

/// The Degrees newtype an f64.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Degrees(pub f64);

/// The Radians newtype an f64.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Radians(pub f64);

impl Degrees {
    /// Test whether a value is a valid latitude.  
    /// I.e. whether it lies in the range: -90.0 <= value <= 90.0
    #[must_use]
    pub fn is_latitude(value: f64) -> bool {
        (-90.0..=90.0).contains(&value)
    }

    /// Test whether a value is a valid longitude.  
    /// I.e. whether it lies in the range: -180.0 <= value <= 180.0
    #[must_use]
    pub fn is_longitude(value: f64) -> bool {
        (-180.0..=180.0).contains(&value)
    }

    /// Test whether a value is a valid bearing.  
    /// I.e. whether it lies in the range: 0.0 <= value < 360.0
    #[must_use]
    pub fn is_bearing(value: f64) -> bool {
        (0.0..360.0).contains(&value)
    }

    /// Normalise a Degrees value into the longitude range: -180.0 <= value < 180.0
    /// using: ((value + 540) mod 360) - 180
    /// # Examples
    /// ```
    /// use via_geocalc::trig::Degrees;
    ///
    /// assert_eq!(-170.0, Degrees(190.0).normalise_longitude().0);
    /// assert_eq!(-180.0, Degrees(180.0).normalise_longitude().0);
    /// assert_eq!(170.0, Degrees(-190.0).normalise_longitude().0);
    /// assert_eq!(0.0, Degrees(360.0).normalise_longitude().0);
    /// ```
    #[must_use]
    pub fn normalise_longitude(&self) -> Self {
        Self((self.0 + 540.0).rem_euclid(360.0) - 180.0)
    }

    /// Normalise a Degrees value into the bearing range: 0.0 <= value < 360.0
    /// # Examples
    /// ```
    /// use via_geocalc::trig::Degrees;
    ///
    /// assert_eq!(270.0, Degrees(-90.0).normalise_bearing().0);
    /// assert_eq!(0.0, Degrees(360.0).normalise_bearing().0);
    /// assert_eq!(180.0, Degrees(180.0).normalise_bearing().0);
    /// ```
    #[must_use]
    pub fn normalise_bearing(&self) -> Self {
        Self((self.0 + 360.0).rem_euclid(360.0))
    }

    /// Test whether a Degrees value is a valid latitude.
    #[must_use]
    pub fn is_valid_latitude(&self) -> bool {
        Self::is_latitude(self.0)
    }

    /// Test whether a Degrees value is a valid longitude.
    #[must_use]
    pub fn is_valid_longitude(&self) -> bool {
        Self::is_longitude(self.0)
    }
}

impl Validate for Degrees {
    /// Test whether a Degrees is valid, i.e. whether it is finite.
    fn is_valid(&self) -> bool {
        self.0.is_finite()
    }
}

impl From<Radians> for Degrees {
    /// Construct an angle in Degrees from an angle in Radians.
    /// # Examples
    /// ```
    /// use via_geocalc::trig::{Degrees, Radians};
    ///
    /// let arg = Radians(std::f64::consts::FRAC_PI_2);
    /// let answer = Degrees::from(arg);
    /// assert_eq!(90.0, answer.0);
    /// ```
    fn from(a: Radians) -> Self {
        Self(a.0.to_degrees())
    }
}

impl Neg for Degrees {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Add for Degrees {
    type Output = Self;

    /// Add two angles in Degrees, does **not** wrap around.
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Degrees {
    type Output = Self;

    /// Subtract two angles in Degrees, does **not** wrap around.
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Validate for Radians {
    /// Test whether a Radians is valid, i.e. whether it is finite.
    fn is_valid(&self) -> bool {
        self.0.is_finite()
    }
}

impl From<Degrees> for Radians {
    /// Construct an angle in Radians from an angle in Degrees,
    /// i.e. degrees * PI / 180.
    /// # Examples
    /// ```
    /// use via_geocalc::trig::{Degrees, Radians};
    ///
    /// let arg = Degrees(-90.0);
    /// let answer = Radians::from(arg);
    /// assert_eq!(-std::f64::consts::FRAC_PI_2, answer.0);
    /// ```
    fn from(a: Degrees) -> Self {
        Self(a.0 * DEG2RAD)
    }
}

impl Neg for Radians {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Add for Radians {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Radians {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

/// The `UnitNegRange` newtype an f64.  
/// A valid `UnitNegRange` value lies between -1.0 and +1.0 inclusive.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct UnitNegRange(pub f64);

impl Validate for UnitNegRange {
    /// Test whether a `UnitNegRange` is valid.  
    /// I.e. whether it lies in the range: -1.0 <= value <= 1.0
    /// # Examples
    /// ```
    /// use via_geocalc::trig::UnitNegRange;
    /// use via_geocalc::Validate;
    ///
    /// assert!(!UnitNegRange(-1.0 - std::f64::EPSILON).is_valid());
    /// assert!(UnitNegRange(-1.0).is_valid());
    /// assert!(UnitNegRange(1.0).is_valid());
    /// assert!(!(UnitNegRange(1.0 + std::f64::EPSILON).is_valid()));
    /// ```
    fn is_valid(&self) -> bool {
        (-1.0..=1.0).contains(&self.0)
    }
}

#[debug_invariant(self.is_valid())]
impl UnitNegRange {
    /// Clamp value into the valid range: -1.0 to +1.0 inclusive.  
    /// Guards the arguments of `asin` and `acos` against floating point
    /// overshoot.
    /// # Examples
    /// ```
    /// use via_geocalc::trig::UnitNegRange;
    ///
    /// assert_eq!(-1.0, UnitNegRange::clamp(-1.0 - std::f64::EPSILON).0);
    /// assert_eq!(-0.5, UnitNegRange::clamp(-0.5).0);
    /// assert_eq!(1.0, UnitNegRange::clamp(1.0 + std::f64::EPSILON).0);
    /// ```
    #[must_use]
    pub fn clamp(value: f64) -> Self {
        Self(clamp(value, -1.0, 1.0))
    }

    /// The arc sine of the value.
    #[must_use]
    pub fn asin(self) -> Radians {
        Radians(libm::asin(self.0))
    }

    /// The arc cosine of the value.
    #[must_use]
    pub fn acos(self) -> Radians {
        Radians(libm::acos(self.0))
    }
}

/// An angle in decimal degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle {
    degrees: Degrees,
}

impl Validate for Angle {
    /// Test whether an Angle is valid, i.e. whether its value is finite.
    fn is_valid(&self) -> bool {
        self.degrees.is_valid()
    }
}

#[debug_invariant(self.is_valid())]
impl Angle {
    /// Construct an Angle from a value in decimal degrees.
    /// # Examples
    /// ```
    /// use via_geocalc::trig::Angle;
    ///
    /// let angle = Angle::from_degrees(51.4843774);
    /// assert_eq!(51.4843774, angle.degrees());
    /// ```
    #[must_use]
    pub fn from_degrees(value: f64) -> Self {
        Self {
            degrees: Degrees(value),
        }
    }

    /// Construct an Angle from a value in radians.
    #[must_use]
    pub fn from_radians(value: f64) -> Self {
        Self::from(Radians(value))
    }

    /// The Angle in decimal degrees.
    #[must_use]
    pub fn degrees(self) -> f64 {
        self.degrees.0
    }

    /// The Angle in radians: degrees * PI / 180.
    #[must_use]
    pub fn radians(self) -> f64 {
        self.to_radians().0
    }

    /// The Angle in Radians.
    #[must_use]
    pub fn to_radians(self) -> Radians {
        Radians::from(self.degrees)
    }

    /// The sine of the Angle.
    #[debug_ensures((-1.0..=1.0).contains(&ret))]
    #[must_use]
    pub fn sin(self) -> f64 {
        libm::sin(self.radians())
    }

    /// The cosine of the Angle.
    #[debug_ensures((-1.0..=1.0).contains(&ret))]
    #[must_use]
    pub fn cos(self) -> f64 {
        libm::cos(self.radians())
    }

    /// Test whether the Angle is a valid latitude,
    /// i.e. whether: -90.0 <= degrees <= 90.0
    #[must_use]
    pub fn is_valid_latitude(&self) -> bool {
        self.degrees.is_valid_latitude()
    }

    /// Test whether the Angle is a valid longitude,
    /// i.e. whether: -180.0 <= degrees <= 180.0
    #[must_use]
    pub fn is_valid_longitude(&self) -> bool {
        self.degrees.is_valid_longitude()
    }

    /// The absolute value of the Angle.
    #[must_use]
    pub fn abs(self) -> Self {
        Self::from_degrees(libm::fabs(self.degrees.0))
    }
}

impl Neg for Angle {
    type Output = Self;

    /// An implementation of Neg for Angle, i.e. -angle.
    /// # Examples
    /// ```
    /// use via_geocalc::trig::Angle;
    ///
    /// let angle_45 = Angle::from_degrees(45.0);
    /// assert_eq!(-45.0, (-angle_45).degrees());
    /// ```
    fn neg(self) -> Self {
        Self {
            degrees: -self.degrees,
        }
    }
}

impl Add for Angle {
    type Output = Self;

    /// Add two Angles, does **not** wrap around.
    /// # Examples
    /// ```
    /// use via_geocalc::trig::Angle;
    ///
    /// let angle_270 = Angle::from_degrees(200.0) + Angle::from_degrees(70.0);
    /// assert_eq!(270.0, angle_270.degrees());
    /// ```
    fn add(self, other: Self) -> Self {
        Self {
            degrees: self.degrees + other.degrees,
        }
    }
}

impl Sub for Angle {
    type Output = Self;

    /// Subtract two Angles, does **not** wrap around.
    fn sub(self, other: Self) -> Self {
        Self {
            degrees: self.degrees - other.degrees,
        }
    }
}

impl From<Degrees> for Angle {
    fn from(a: Degrees) -> Self {
        Self { degrees: a }
    }
}

impl From<Radians> for Angle {
    fn from(a: Radians) -> Self {
        Self {
            degrees: Degrees::from(a),
        }
    }
}

impl From<Angle> for Degrees {
    fn from(a: Angle) -> Self {
        a.degrees
    }
}

impl From<Angle> for Radians {
    fn from(a: Angle) -> Self {
        a.to_radians()
    }
}

impl Serialize for Angle {
    /// Serialize an Angle to a value in Degrees.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_newtype_struct("Degrees", &self.degrees)
    }
}

impl<'de> Deserialize<'de> for Angle {
    /// Deserialize a value in Degrees to an Angle.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::from(Degrees::deserialize(deserializer)?))
    }
}
