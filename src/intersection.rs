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

//! The `intersection` module contains the function for calculating the
//! position where two great-circle paths cross, each path given by a start
//! position and an initial bearing.
//!
//! Unlike the closed-form operations in the [spherical](crate::spherical)
//! module, the intersection must classify degenerate configurations before
//! computing a result: coincident paths have infinitely many common
//! positions, and paths whose turning angles disagree in sign diverge away
//! from each other, so neither configuration has a unique intersection.
//! Both failures are surfaced as distinct [IntersectionError] variants for
//! the caller to match on.

use crate::convert;
use crate::Coordinate;
use angle_sc::{Degrees, Radians};
use core::f64::consts::PI;
use core::fmt;

/// The reasons why a unique intersection position cannot be calculated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IntersectionError {
    /// The paths are coincident: every position on one path also lies on
    /// the other, so there are infinitely many intersections.
    InfiniteIntersections,
    /// The turning angles at the two start positions disagree in sign: the
    /// paths diverge away from each other (commonly a near-antipodal
    /// configuration), so a unique intersection cannot be determined.
    AmbiguousIntersection,
}

impl fmt::Display for IntersectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InfiniteIntersections => {
                write!(f, "paths are coincident, infinite intersections")
            }
            Self::AmbiguousIntersection => {
                write!(f, "paths diverge, intersection is ambiguous")
            }
        }
    }
}

impl core::error::Error for IntersectionError {}

/// Calculate the position where the great-circle path from `point1` at
/// `bearing1` crosses the great-circle path from `point2` at `bearing2`.
///
/// The calculation composes the angular separation of the start positions
/// (haversine form) with the bearings of the connecting great circle
/// (spherical law of cosines, cosine arguments clamped to [-1, 1] against
/// rounding), then classifies the configuration from the turning angles at
/// the two start positions **before** any further trigonometry, so the
/// failure branches never operate on NaN values.
///
/// Coincident start positions are not guarded: their bearing decomposition
/// is 0/0 and the result propagates NaN, as the formulas do elsewhere.
/// * `point1`, `bearing1` - the start position and bearing of the first path.
/// * `point2`, `bearing2` - the start position and bearing of the second path.
///
/// returns the intersection `Coordinate` (longitude normalized), or the
/// [IntersectionError] describing why no unique intersection exists.
///
/// # Errors
///
/// [IntersectionError::InfiniteIntersections] if the paths are coincident,
/// [IntersectionError::AmbiguousIntersection] if they diverge.
///
/// # Examples
/// ```
/// use sphere_geodesy::{intersection, Coordinate, Degrees};
/// use angle_sc::is_within_tolerance;
///
/// let stansted = Coordinate::new(Degrees(51.8853), Degrees(0.2545));
/// let cdg = Coordinate::new(Degrees(49.0034), Degrees(2.5735));
///
/// let result = intersection::calculate_intersection_point(
///     &stansted, Degrees(108.55), &cdg, Degrees(32.44));
/// let position = result.unwrap();
///
/// assert!(is_within_tolerance(50.9076075004, position.lat().0, 1e-8));
/// assert!(is_within_tolerance(4.50857464576, position.lon().0, 1e-8));
/// ```
pub fn calculate_intersection_point(
    point1: &Coordinate,
    bearing1: Degrees,
    point2: &Coordinate,
    bearing2: Degrees,
) -> Result<Coordinate, IntersectionError> {
    let phi1 = convert::degrees_to_radians(point1.lat()).0;
    let lambda1 = convert::degrees_to_radians(point1.lon()).0;
    let phi2 = convert::degrees_to_radians(point2.lat()).0;
    let lambda2 = convert::degrees_to_radians(point2.lon()).0;

    let theta13 = convert::degrees_to_radians(bearing1).0;
    let theta23 = convert::degrees_to_radians(bearing2).0;

    let delta_phi = phi2 - phi1;
    let delta_lambda = lambda2 - lambda1;

    // angular separation of the start positions, haversine form
    let sin_half_phi = libm::sin(delta_phi / 2.0);
    let sin_half_lambda = libm::sin(delta_lambda / 2.0);
    let delta12 = 2.0
        * libm::asin(libm::sqrt(
            sin_half_phi * sin_half_phi
                + libm::cos(phi1) * libm::cos(phi2) * sin_half_lambda * sin_half_lambda,
        ));

    // initial/final bearings along the great circle connecting the start
    // positions, by the spherical law of cosines for angles
    let cos_theta_a = (libm::sin(phi2) - libm::sin(phi1) * libm::cos(delta12))
        / (libm::sin(delta12) * libm::cos(phi1));
    let cos_theta_b = (libm::sin(phi1) - libm::sin(phi2) * libm::cos(delta12))
        / (libm::sin(delta12) * libm::cos(phi2));
    let theta_a = libm::acos(cos_theta_a.clamp(-1.0, 1.0));
    let theta_b = libm::acos(cos_theta_b.clamp(-1.0, 1.0));

    // direction-corrected bearings, picked by the sign of the longitude
    // difference
    let (theta12, theta21) = if libm::sin(delta_lambda) > 0.0 {
        (theta_a, 2.0 * PI - theta_b)
    } else {
        (2.0 * PI - theta_a, theta_b)
    };

    let alpha1 = theta13 - theta12; // angle 2-1-3
    let alpha2 = theta21 - theta23; // angle 1-2-3

    let sin_alpha1 = libm::sin(alpha1);
    let sin_alpha2 = libm::sin(alpha2);

    // classify the configuration before any further trigonometry
    if sin_alpha1 == 0.0 && sin_alpha2 == 0.0 {
        return Err(IntersectionError::InfiniteIntersections);
    }
    if sin_alpha1 * sin_alpha2 < 0.0 {
        return Err(IntersectionError::AmbiguousIntersection);
    }

    // third angle of the spherical triangle and the angular distance from
    // point1 to the intersection
    let cos_alpha1 = libm::cos(alpha1);
    let cos_alpha2 = libm::cos(alpha2);
    let cos_alpha3 = -cos_alpha1 * cos_alpha2 + sin_alpha1 * sin_alpha2 * libm::cos(delta12);

    let delta13 = libm::atan2(
        libm::sin(delta12) * sin_alpha1 * sin_alpha2,
        cos_alpha2 + cos_alpha1 * cos_alpha3,
    );

    let phi3 = libm::asin(
        (libm::sin(phi1) * libm::cos(delta13)
            + libm::cos(phi1) * libm::sin(delta13) * libm::cos(theta13))
        .clamp(-1.0, 1.0),
    );

    let delta_lambda13 = libm::atan2(
        libm::sin(theta13) * libm::sin(delta13) * libm::cos(phi1),
        libm::cos(delta13) - libm::sin(phi1) * libm::sin(phi3),
    );

    Ok(Coordinate::new(
        convert::radians_to_degrees(Radians(phi3)),
        convert::normalize_longitude(convert::radians_to_degrees(Radians(
            lambda1 + delta_lambda13,
        ))),
    ))
}
