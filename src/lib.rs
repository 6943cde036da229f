// Copyright (c) 2025 Ken Barker

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

//! sphere-geodesy
//!
//! A library for performing great-circle and rhumb line calculations on a
//! spherical Earth model.
//!
//! The Earth is modelled as a sphere with a fixed mean radius of 6371 km.
//! A spherical model gives distance errors of typically up to 0.3% compared
//! to an ellipsoidal model such as WGS-84, which is accurate enough for most
//! navigation purposes, see
//! [Calculate distance, bearing and more between Latitude/Longitude points](https://www.movable-type.co.uk/scripts/latlong.html).
//!
//! ## Design
//!
//! The library consists of two calculation engines operating on the same
//! [Coordinate] value type:
//!
//! - the [spherical] module calculates along **great circles**: the shortest
//!   paths between points on the surface of a sphere. It provides distances
//!   (haversine, law of cosines and equirectangular forms), initial and final
//!   bearings, midpoints, fractional interpolation and N-point sampling,
//!   destination projection and cross track / along track distances;
//! - the [intersection] module calculates the position where two great-circle
//!   paths, each given by a start [Coordinate] and a bearing, cross. It
//!   classifies coincident and diverging configurations as distinct failures
//!   before performing any further trigonometry;
//! - the [rhumb] module calculates along **rhumb lines** (loxodromes): paths
//!   of constant bearing, which appear as straight lines on a Mercator
//!   projection. It provides the constant-bearing analogues of distance,
//!   bearing, destination and midpoint.
//!
//! All operations are pure functions over immutable values: the engines never
//! mutate their inputs and hold no state between calls, so every function may
//! be called concurrently without coordination.
//!
//! Angles are in degrees at the API surface and radians internally; distances
//! are in kilometres. The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define
//!   `Vector3d` and convert between latitude/longitude and points on the
//!   unit sphere;
//! - [libm](https://crates.io/crates/libm) - to perform transcendental
//!   floating point calculations without the standard library.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate unit_sphere;

pub mod convert;
pub mod intersection;
pub mod rhumb;
pub mod spherical;

pub use angle_sc::{Angle, Degrees, Radians, Validate};

use core::ops::{Add, Sub};

/// The mean radius of the Earth in kilometres.
///
/// All distance results are derived from this single constant for
/// reproducibility.
pub const EARTH_RADIUS: Kilometres = Kilometres(6371.0);

/// A distance in Kilometres.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kilometres(pub f64);

impl Add for Kilometres {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Kilometres {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

/// A position on the surface of the sphere in geodetic coordinates.
///
/// A `Coordinate` is an immutable latitude/longitude pair in degrees.
/// It is a plain value type: construction performs **no** validation, so
/// out-of-domain values are accepted and propagate through the formulas,
/// producing numerically degenerate but not exceptional results.
/// Use [`is_valid`](Validate::is_valid) where a domain check is required.
///
/// # Examples
/// ```
/// use sphere_geodesy::{Coordinate, Degrees, Validate};
///
/// let cambridge = Coordinate::new(Degrees(52.205), Degrees(0.119));
/// assert!(cambridge.is_valid());
/// assert_eq!(52.205, cambridge.lat().0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// The latitude, positive North of the Equator.
    lat: Degrees,
    /// The longitude, positive East of the prime meridian.
    lon: Degrees,
}

impl Coordinate {
    /// Construct a `Coordinate`.
    /// * `lat` - the latitude.
    /// * `lon` - the longitude.
    #[must_use]
    pub const fn new(lat: Degrees, lon: Degrees) -> Self {
        Self { lat, lon }
    }

    /// Accessor for the latitude.
    #[must_use]
    pub const fn lat(&self) -> Degrees {
        self.lat
    }

    /// Accessor for the longitude.
    #[must_use]
    pub const fn lon(&self) -> Degrees {
        self.lon
    }
}

impl Validate for Coordinate {
    /// Test whether a `Coordinate` is valid.
    /// Whether -90° <= `latitude` <= 90° and -180° < `longitude` <= 180°.
    fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat.0) && -180.0 < self.lon.0 && self.lon.0 <= 180.0
    }
}
