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

//! The dms module converts between sexagesimal angles and decimal degrees.
//!
//! A `Dms` holds whole degrees, whole minutes and decimal seconds, a
//! `DegreesMinutes` holds whole degrees and decimal minutes, as displayed by
//! GPS receivers.
//! Both carry an explicit `Sign`, since a negative angle of less than one
//! degree, e.g. 0°17′28″ W, cannot carry its sign on the degrees component.
//!
//! The conversion to decimal degrees is:
//! sign * (|degrees| + minutes / 60 + seconds / 3600)

#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use super::Angle;
use serde::{Deserialize, Serialize};
use std::fmt;

const MINUTES_PER_DEGREE: f64 = 60.0;
const SECONDS_PER_DEGREE: f64 = 3600.0;

/// The sign of a sexagesimal angle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// The sign of a value, zero is positive.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    /// +1.0 or -1.0.
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }

    const fn symbol(self) -> &'static str {
        match self {
            Self::Positive => "",
            Self::Negative => "-",
        }
    }
}

/// An angle in degrees, minutes and seconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    sign: Sign,
    degrees: u32,
    minutes: u32,
    seconds: f64,
}

impl Dms {
    /// Construct a Dms with the sign taken from `degrees`.
    /// Use `with_sign` for negative angles of less than one degree.
    /// * `degrees` - the signed whole degrees.
    /// * `minutes` - the whole minutes.
    /// * `seconds` - the decimal seconds.
    #[must_use]
    pub const fn new(degrees: i32, minutes: u32, seconds: f64) -> Self {
        let sign = if degrees < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self::with_sign(sign, degrees.unsigned_abs(), minutes, seconds)
    }

    /// Construct a Dms with an explicit sign.
    #[must_use]
    pub const fn with_sign(sign: Sign, degrees: u32, minutes: u32, seconds: f64) -> Self {
        Self {
            sign,
            degrees,
            minutes,
            seconds,
        }
    }

    #[must_use]
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    #[must_use]
    pub const fn degrees(&self) -> u32 {
        self.degrees
    }

    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    #[must_use]
    pub const fn seconds(&self) -> f64 {
        self.seconds
    }

    /// The value in decimal degrees.
    /// # Examples
    /// ```
    /// use via_geocalc::trig::dms::Dms;
    ///
    /// assert_eq!(-34.5, Dms::new(-34, 30, 0.0).decimal_degrees());
    /// ```
    #[must_use]
    pub fn decimal_degrees(&self) -> f64 {
        self.sign.factor()
            * (f64::from(self.degrees)
                + f64::from(self.minutes) / MINUTES_PER_DEGREE
                + self.seconds / SECONDS_PER_DEGREE)
    }

    /// Convert to an `Angle` in decimal degrees.
    #[must_use]
    pub fn to_angle(&self) -> Angle {
        Angle::from_degrees(self.decimal_degrees())
    }
}

impl From<Dms> for Angle {
    fn from(value: Dms) -> Self {
        value.to_angle()
    }
}

impl From<Angle> for Dms {
    /// Split an `Angle` into whole degrees, whole minutes and decimal seconds.
    fn from(value: Angle) -> Self {
        let abs_degrees = libm::fabs(value.degrees());
        let degrees = libm::trunc(abs_degrees);
        let decimal_minutes = (abs_degrees - degrees) * MINUTES_PER_DEGREE;
        let minutes = libm::trunc(decimal_minutes);
        let seconds = (decimal_minutes - minutes) * MINUTES_PER_DEGREE;
        Self::with_sign(
            Sign::of(value.degrees()),
            degrees as u32,
            minutes as u32,
            seconds,
        )
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}°{}′{}″",
            self.sign.symbol(),
            self.degrees,
            self.minutes,
            self.seconds
        )
    }
}

/// An angle in degrees and decimal minutes, e.g. from a GPS receiver.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DegreesMinutes {
    sign: Sign,
    degrees: u32,
    minutes: f64,
}

impl DegreesMinutes {
    /// Construct a `DegreesMinutes` with the sign taken from `degrees`.
    #[must_use]
    pub const fn new(degrees: i32, minutes: f64) -> Self {
        let sign = if degrees < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self::with_sign(sign, degrees.unsigned_abs(), minutes)
    }

    /// Construct a `DegreesMinutes` with an explicit sign.
    #[must_use]
    pub const fn with_sign(sign: Sign, degrees: u32, minutes: f64) -> Self {
        Self {
            sign,
            degrees,
            minutes,
        }
    }

    #[must_use]
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    #[must_use]
    pub const fn degrees(&self) -> u32 {
        self.degrees
    }

    #[must_use]
    pub const fn minutes(&self) -> f64 {
        self.minutes
    }

    /// The value in decimal degrees.
    #[must_use]
    pub fn decimal_degrees(&self) -> f64 {
        self.sign.factor() * (f64::from(self.degrees) + self.minutes / MINUTES_PER_DEGREE)
    }

    /// Convert to an `Angle` in decimal degrees.
    #[must_use]
    pub fn to_angle(&self) -> Angle {
        Angle::from_degrees(self.decimal_degrees())
    }
}

impl From<DegreesMinutes> for Angle {
    fn from(value: DegreesMinutes) -> Self {
        value.to_angle()
    }
}

impl From<Angle> for DegreesMinutes {
    fn from(value: Angle) -> Self {
        let abs_degrees = libm::fabs(value.degrees());
        let degrees = libm::trunc(abs_degrees);
        Self::with_sign(
            Sign::of(value.degrees()),
            degrees as u32,
            (abs_degrees - degrees) * MINUTES_PER_DEGREE,
        )
    }
}

impl fmt::Display for DegreesMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}°{}′",
            self.sign.symbol(),
            self.degrees,
            self.minutes
        )
    }
}

impl Angle {
    /// Construct an Angle from degrees, minutes and seconds, with the sign
    /// taken from `degrees`.
    /// # Examples
    /// ```
    /// use via_geocalc::trig::Angle;
    ///
    /// let bearing = Angle::from_dms(19, 13, 50.0);
    /// assert!((bearing.degrees() - 19.230_555_555).abs() < 1.0e-9);
    /// ```
    #[must_use]
    pub fn from_dms(degrees: i32, minutes: u32, seconds: f64) -> Self {
        Dms::new(degrees, minutes, seconds).to_angle()
    }

    /// Construct an Angle from degrees, minutes and seconds with an
    /// explicit sign, e.g. for 0°17′28″ W.
    #[must_use]
    pub fn from_signed_dms(sign: Sign, degrees: u32, minutes: u32, seconds: f64) -> Self {
        Dms::with_sign(sign, degrees, minutes, seconds).to_angle()
    }
}
