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

//! The error module contains the error type returned by the fallible
//! operations of this library.

use thiserror::Error;

/// The errors raised by this library.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Error {
    /// A latitude outside -90..=90 degrees or a longitude outside
    /// -180..=180 degrees.
    #[error("invalid coordinate: latitude {latitude} must lie in [-90, 90] and longitude {longitude} in [-180, 180]")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// Vincenty's inverse formula did not converge, e.g. for nearly
    /// antipodal positions.
    #[error("Vincenty's inverse formula failed to converge within {iterations} iterations")]
    Convergence { iterations: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
