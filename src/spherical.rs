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

//! The `spherical` module contains functions for calculating along
//! great-circle paths: the shortest paths between points on the surface
//! of a sphere.
//!
//! All formulas are closed forms from spherical trigonometry, see
//! [Calculate distance, bearing and more between Latitude/Longitude points](https://www.movable-type.co.uk/scripts/latlong.html).
//! Angle inputs and outputs are in degrees, internal calculations are in
//! radians and distances are in kilometres on a sphere of [EARTH_RADIUS].

#![allow(clippy::many_single_char_names)]

use crate::convert;
use crate::{Coordinate, Kilometres, EARTH_RADIUS};
use angle_sc::{Angle, Degrees, Radians};
use unit_sphere::{vector, Vector3d};

/// Calculate the central angle subtended by a pair of positions using the
/// haversine formula, which is numerically stable at small distances.
/// * `a`, `b` - the positions.
///
/// returns the angular distance between the positions in `Radians`.
#[must_use]
pub fn angular_distance(a: &Coordinate, b: &Coordinate) -> Radians {
    let phi1 = convert::degrees_to_radians(a.lat()).0;
    let phi2 = convert::degrees_to_radians(b.lat()).0;
    let delta_phi = phi2 - phi1;
    let delta_lambda =
        convert::degrees_to_radians(b.lon()).0 - convert::degrees_to_radians(a.lon()).0;

    let sin_half_phi = libm::sin(delta_phi / 2.0);
    let sin_half_lambda = libm::sin(delta_lambda / 2.0);
    let h = sin_half_phi * sin_half_phi
        + libm::cos(phi1) * libm::cos(phi2) * sin_half_lambda * sin_half_lambda;

    Radians(2.0 * libm::atan2(libm::sqrt(h), libm::sqrt(1.0 - h)))
}

/// Calculate the great-circle distance between a pair of positions using
/// the haversine formula: the shortest "as the crow flies" distance over
/// the surface of the sphere.
///
/// Symmetric in the two positions and exactly zero for coincident
/// positions.
/// * `a`, `b` - the positions.
///
/// returns the distance between the positions in `Kilometres`.
///
/// # Examples
/// ```
/// use sphere_geodesy::{spherical, Coordinate, Degrees};
/// use angle_sc::is_within_tolerance;
///
/// let cambridge = Coordinate::new(Degrees(52.205), Degrees(0.119));
/// let paris = Coordinate::new(Degrees(48.857), Degrees(2.351));
///
/// let d = spherical::haversine_distance(&cambridge, &paris);
/// assert!(is_within_tolerance(404.2791639887, d.0, 1e-8));
/// ```
#[must_use]
pub fn haversine_distance(a: &Coordinate, b: &Coordinate) -> Kilometres {
    Kilometres(EARTH_RADIUS.0 * angular_distance(a, b).0)
}

/// Calculate the great-circle distance between a pair of positions using
/// the spherical law of cosines.
///
/// Agrees with [haversine_distance] to high precision for non-antipodal,
/// non-coincident positions. The formula is numerically unstable for very
/// small distances, where rounding can push the cosine argument outside
/// [-1, 1] and produce NaN; this limitation is deliberate, prefer
/// [haversine_distance] in that regime.
/// * `a`, `b` - the positions.
///
/// returns the distance between the positions in `Kilometres`.
#[must_use]
pub fn law_of_cosines_distance(a: &Coordinate, b: &Coordinate) -> Kilometres {
    let phi1 = convert::degrees_to_radians(a.lat()).0;
    let phi2 = convert::degrees_to_radians(b.lat()).0;
    let delta_lambda =
        convert::degrees_to_radians(b.lon()).0 - convert::degrees_to_radians(a.lon()).0;

    Kilometres(
        libm::acos(
            libm::sin(phi1) * libm::sin(phi2)
                + libm::cos(phi1) * libm::cos(phi2) * libm::cos(delta_lambda),
        ) * EARTH_RADIUS.0,
    )
}

/// Calculate the approximate distance between a pair of positions using an
/// equirectangular projection.
///
/// Considerably cheaper than the haversine formula, with accuracy that
/// degrades as the span between the positions grows. Suitable when
/// performance matters more than precision over small spans.
/// * `a`, `b` - the positions.
///
/// returns the approximate distance between the positions in `Kilometres`.
#[must_use]
pub fn equirectangular_distance(a: &Coordinate, b: &Coordinate) -> Kilometres {
    let phi1 = convert::degrees_to_radians(a.lat()).0;
    let phi2 = convert::degrees_to_radians(b.lat()).0;
    let delta_lambda =
        convert::degrees_to_radians(b.lon()).0 - convert::degrees_to_radians(a.lon()).0;

    let x = delta_lambda * libm::cos((phi1 + phi2) / 2.0);
    let y = phi2 - phi1;

    Kilometres(libm::sqrt(x * x + y * y) * EARTH_RADIUS.0)
}

/// Calculate the initial bearing (forward azimuth) of the great-circle
/// path from `from` to `to`.
///
/// The bearing is undefined when the positions coincide; that case is
/// not guarded.
/// * `from`, `to` - the start and finish positions.
///
/// returns the initial bearing in `Degrees`, in the range [0°, 360°).
#[must_use]
pub fn initial_bearing(from: &Coordinate, to: &Coordinate) -> Degrees {
    let phi1 = convert::degrees_to_radians(from.lat()).0;
    let phi2 = convert::degrees_to_radians(to.lat()).0;
    let delta_lambda =
        convert::degrees_to_radians(to.lon()).0 - convert::degrees_to_radians(from.lon()).0;

    let y = libm::sin(delta_lambda) * libm::cos(phi2);
    let x = libm::cos(phi1) * libm::sin(phi2)
        - libm::sin(phi1) * libm::cos(phi2) * libm::cos(delta_lambda);

    convert::wrap_360(convert::radians_to_degrees(Radians(libm::atan2(y, x))))
}

/// Calculate the final bearing of the great-circle path from `from` to
/// `to`: the direction of travel on arrival at `to`.
///
/// The final bearing differs from the initial bearing by varying degrees
/// according to distance and latitude; it is the reverse of the initial
/// bearing of the return path.
/// * `from`, `to` - the start and finish positions.
///
/// returns the final bearing in `Degrees`, in the range [0°, 360°).
#[must_use]
pub fn final_bearing(from: &Coordinate, to: &Coordinate) -> Degrees {
    convert::wrap_360(Degrees(initial_bearing(to, from).0 + 180.0))
}

/// Calculate the half-way position along the great-circle path between a
/// pair of positions.
/// * `a`, `b` - the positions.
///
/// returns the midpoint `Coordinate`, longitude normalized.
#[must_use]
pub fn mid_point(a: &Coordinate, b: &Coordinate) -> Coordinate {
    let phi1 = convert::degrees_to_radians(a.lat()).0;
    let lambda1 = convert::degrees_to_radians(a.lon()).0;
    let phi2 = convert::degrees_to_radians(b.lat()).0;
    let delta_lambda = convert::degrees_to_radians(b.lon()).0 - lambda1;

    let bx = libm::cos(phi2) * libm::cos(delta_lambda);
    let by = libm::cos(phi2) * libm::sin(delta_lambda);
    let cos_phi1_bx = libm::cos(phi1) + bx;

    let phi_m = libm::atan2(
        libm::sin(phi1) + libm::sin(phi2),
        libm::sqrt(cos_phi1_bx * cos_phi1_bx + by * by),
    );
    let lambda_m = lambda1 + libm::atan2(by, cos_phi1_bx);

    Coordinate::new(
        convert::radians_to_degrees(Radians(phi_m)),
        convert::normalize_longitude(convert::radians_to_degrees(Radians(lambda_m))),
    )
}

/// Calculate an intermediate position at the given fraction along the
/// great-circle path between a pair of positions, by spherical linear
/// interpolation between the positions as points on the unit sphere.
///
/// Degenerates (division by zero, NaN result) when the positions are
/// coincident, since the interpolation weights are then 0/0; callers must
/// special-case coincident positions if that matters to them.
/// * `from`, `to` - the start and finish positions.
/// * `fraction` - the fraction along the path: 0 is `from`, 1 is `to`.
///
/// returns the interpolated `Coordinate`, longitude normalized.
#[must_use]
pub fn intermediate_point(from: &Coordinate, to: &Coordinate, fraction: f64) -> Coordinate {
    let delta = angular_distance(from, to).0;
    let sin_delta = libm::sin(delta);
    let a = libm::sin((1.0 - fraction) * delta) / sin_delta;
    let b = libm::sin(fraction * delta) / sin_delta;

    let p1 = vector::to_point(Angle::from(from.lat()), Angle::from(from.lon()));
    let p2 = vector::to_point(Angle::from(to.lat()), Angle::from(to.lon()));
    let p: Vector3d = a * p1 + b * p2;

    Coordinate::new(
        Degrees::from(vector::latitude(&p)),
        convert::normalize_longitude(Degrees::from(vector::longitude(&p))),
    )
}

/// Calculate `n` positions along the great-circle path between a pair of
/// positions, at the fractions 0, 1/n, ..., (n-1)/n.
///
/// The sequence starts at `from` and deliberately stops one step short of
/// `to`, so that consecutive calls along a route do not duplicate
/// waypoints. `n` of zero yields an empty iterator.
/// * `from`, `to` - the start and finish positions.
/// * `n` - the number of positions to produce.
///
/// returns an iterator of `n` `Coordinate`s.
#[must_use]
pub fn intermediate_points(
    from: Coordinate,
    to: Coordinate,
    n: u32,
) -> impl Iterator<Item = Coordinate> {
    let step = 1.0 / f64::from(n);
    (0..n).map(move |i| intermediate_point(&from, &to, f64::from(i) * step))
}

/// Calculate the destination position given a start position, a distance
/// and an initial bearing, by projecting the start position forward along
/// the great circle.
/// * `from` - the start position.
/// * `distance` - the distance to travel in `Kilometres`.
/// * `bearing` - the initial bearing in `Degrees`.
///
/// returns the destination `Coordinate`, longitude normalized.
///
/// # Examples
/// ```
/// use sphere_geodesy::{spherical, Coordinate, Degrees, Kilometres};
/// use angle_sc::is_within_tolerance;
///
/// let cambridge = Coordinate::new(Degrees(52.205), Degrees(0.119));
/// let d = spherical::destination_point(&cambridge, Kilometres(100.0), Degrees(12.0));
///
/// assert!(is_within_tolerance(53.084266, d.lat().0, 1e-4));
/// assert!(is_within_tolerance(0.4302, d.lon().0, 1e-4));
/// ```
#[must_use]
pub fn destination_point(from: &Coordinate, distance: Kilometres, bearing: Degrees) -> Coordinate {
    let phi1 = convert::degrees_to_radians(from.lat()).0;
    let lambda1 = convert::degrees_to_radians(from.lon()).0;
    let theta = convert::degrees_to_radians(bearing).0;
    let delta = distance.0 / EARTH_RADIUS.0;

    let sin_phi2 = libm::sin(phi1) * libm::cos(delta)
        + libm::cos(phi1) * libm::sin(delta) * libm::cos(theta);
    let phi2 = libm::asin(sin_phi2);
    let lambda2 = lambda1
        + libm::atan2(
            libm::sin(theta) * libm::sin(delta) * libm::cos(phi1),
            libm::cos(delta) - libm::sin(phi1) * sin_phi2,
        );

    Coordinate::new(
        convert::radians_to_degrees(Radians(phi2)),
        convert::normalize_longitude(convert::radians_to_degrees(Radians(lambda2))),
    )
}

/// The signed angular cross track distance of `position` from the
/// great-circle path through `start` and `end`.
fn cross_track_angle(position: &Coordinate, start: &Coordinate, end: &Coordinate) -> f64 {
    let delta13 = angular_distance(start, position).0;
    let theta13 = convert::degrees_to_radians(initial_bearing(start, position)).0;
    let theta12 = convert::degrees_to_radians(initial_bearing(start, end)).0;

    libm::asin(libm::sin(delta13) * libm::sin(theta13 - theta12))
}

/// Calculate the cross track distance of a position from a great-circle
/// path: its distance from the closest point on the path.
/// * `position` - the position.
/// * `start`, `end` - two positions defining the great-circle path.
///
/// returns the cross track distance in `Kilometres`, negative if
/// `position` lies to the left of the path.
#[must_use]
pub fn cross_track_distance(
    position: &Coordinate,
    start: &Coordinate,
    end: &Coordinate,
) -> Kilometres {
    Kilometres(cross_track_angle(position, start, end) * EARTH_RADIUS.0)
}

/// Calculate the along track distance of a position relative to a
/// great-circle path: the distance from `start` to the closest point on
/// the path to `position`.
/// * `position` - the position.
/// * `start`, `end` - two positions defining the great-circle path.
///
/// returns the along track distance in `Kilometres`.
#[must_use]
pub fn along_track_distance(
    position: &Coordinate,
    start: &Coordinate,
    end: &Coordinate,
) -> Kilometres {
    let delta13 = angular_distance(start, position).0;
    let delta_xt = cross_track_angle(position, start, end);

    // clamp against rounding, cos δ13 / cos δxt may just exceed one
    let cos_at = (libm::cos(delta13) / libm::cos(delta_xt)).clamp(-1.0, 1.0);

    Kilometres(libm::acos(cos_at) * EARTH_RADIUS.0)
}
