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

//! The `geojson` module converts between `GeoPoint`s, `BoundingArea`s and
//! [geo-types](https://crates.io/crates/geo-types) geometries, the types used
//! by the [GeoJSON](https://geojson.org/) crates.  
//! Note: `GeoJSON` coordinate order is **lon, lat**,
//! see: [RFC7946](https://datatracker.ietf.org/doc/html/rfc7946).

use crate::error::Error;
use crate::point::GeoPoint;
use crate::sphere::bounding::BoundingArea;

impl TryFrom<&geo_types::Coord> for GeoPoint {
    type Error = Error;

    /// Attempt to convert a `GeoJSON Coord` to a `GeoPoint`.
    fn try_from(item: &geo_types::Coord) -> Result<Self, Self::Error> {
        Self::from_degrees(item.y, item.x)
    }
}

impl From<&GeoPoint> for geo_types::Coord {
    fn from(a: &GeoPoint) -> Self {
        Self {
            x: a.longitude(),
            y: a.latitude(),
        }
    }
}

impl TryFrom<&geo_types::Point> for GeoPoint {
    type Error = Error;

    /// Attempt to convert a `GeoJSON Point` to a `GeoPoint`.
    fn try_from(item: &geo_types::Point) -> Result<Self, Self::Error> {
        Self::try_from(&item.0)
    }
}

impl From<&GeoPoint> for geo_types::Point {
    fn from(a: &GeoPoint) -> Self {
        Self::new(a.longitude(), a.latitude())
    }
}

impl From<&BoundingArea> for geo_types::Polygon {
    /// Convert a `BoundingArea` to a `Polygon` with a closed exterior ring:
    /// north east, north west, south west, south east, north east.
    fn from(area: &BoundingArea) -> Self {
        let exterior = geo_types::LineString::from(vec![
            geo_types::Coord::from(area.north_east()),
            geo_types::Coord::from(area.north_west()),
            geo_types::Coord::from(area.south_west()),
            geo_types::Coord::from(area.south_east()),
            geo_types::Coord::from(area.north_east()),
        ]);
        Self::new(exterior, vec![])
    }
}
