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

//! The `rhumb` module contains functions for calculating along rhumb lines
//! (loxodromes): paths of constant bearing, which appear as straight lines
//! on a Mercator projection.
//!
//! A rhumb line is generally longer than the great-circle path between the
//! same positions, but is simpler to steer. The calculations linearize the
//! geometry with the Mercator latitude stretch `ψ = ln(tan(π/4 + φ/2))`;
//! East-West paths make the stretch ratio ill-conditioned (0/0) and are
//! guarded with the latitude cosine instead.

use crate::convert;
use crate::{Coordinate, Kilometres, EARTH_RADIUS};
use angle_sc::{Degrees, Radians};
use core::f64::consts::{FRAC_PI_4, PI};

/// The minimum magnitude of the Mercator stretch difference; below it the
/// Δφ/Δψ ratio is ill-conditioned and `cos φ1` is used instead.
const MIN_DELTA_PSI: f64 = 1e-11;

/// The Mercator latitude stretch difference `Δψ` between two latitudes
/// in radians.
fn delta_psi(phi1: f64, phi2: f64) -> f64 {
    libm::log(libm::tan(FRAC_PI_4 + phi2 / 2.0) / libm::tan(FRAC_PI_4 + phi1 / 2.0))
}

/// Normalize a longitude difference in radians into [-π, π], i.e. take the
/// shorter way around the antimeridian.
fn normalize_delta_lambda(delta_lambda: f64) -> f64 {
    if libm::fabs(delta_lambda) > PI {
        if delta_lambda > 0.0 {
            delta_lambda - 2.0 * PI
        } else {
            delta_lambda + 2.0 * PI
        }
    } else {
        delta_lambda
    }
}

/// Calculate the distance between a pair of positions along the rhumb line
/// connecting them.
/// * `from`, `to` - the start and finish positions.
///
/// returns the rhumb line distance in `Kilometres`.
///
/// # Examples
/// ```
/// use sphere_geodesy::{rhumb, Coordinate, Degrees};
/// use angle_sc::is_within_tolerance;
///
/// let cambridge = Coordinate::new(Degrees(52.205), Degrees(0.119));
/// let paris = Coordinate::new(Degrees(48.857), Degrees(2.351));
///
/// let d = rhumb::distance(&cambridge, &paris);
/// assert!(is_within_tolerance(404.29, d.0, 0.01));
/// ```
#[must_use]
pub fn distance(from: &Coordinate, to: &Coordinate) -> Kilometres {
    let phi1 = convert::degrees_to_radians(from.lat()).0;
    let phi2 = convert::degrees_to_radians(to.lat()).0;
    let delta_phi = phi2 - phi1;
    let delta_lambda = normalize_delta_lambda(
        convert::degrees_to_radians(to.lon()).0 - convert::degrees_to_radians(from.lon()).0,
    );

    let dpsi = delta_psi(phi1, phi2);
    let q = if libm::fabs(dpsi) > MIN_DELTA_PSI {
        delta_phi / dpsi
    } else {
        libm::cos(phi1)
    };

    Kilometres(
        libm::sqrt(delta_phi * delta_phi + q * q * delta_lambda * delta_lambda) * EARTH_RADIUS.0,
    )
}

/// Calculate the constant bearing of the rhumb line from `from` to `to`.
///
/// Note: unlike
/// [spherical::initial_bearing](crate::spherical::initial_bearing) the
/// result is **not** wrapped into [0°, 360°); it keeps the signed `atan2`
/// output range.
/// * `from`, `to` - the start and finish positions.
///
/// returns the rhumb line bearing in `Degrees`, in the range [-180°, 180°].
#[must_use]
pub fn bearing(from: &Coordinate, to: &Coordinate) -> Degrees {
    let phi1 = convert::degrees_to_radians(from.lat()).0;
    let phi2 = convert::degrees_to_radians(to.lat()).0;
    let delta_lambda = normalize_delta_lambda(
        convert::degrees_to_radians(to.lon()).0 - convert::degrees_to_radians(from.lon()).0,
    );

    convert::radians_to_degrees(Radians(libm::atan2(delta_lambda, delta_psi(phi1, phi2))))
}

/// Calculate the destination position given a start position, a distance
/// and a constant bearing to steer.
/// * `from` - the start position.
/// * `distance` - the distance to travel in `Kilometres`.
/// * `bearing` - the constant bearing in `Degrees`.
///
/// returns the destination `Coordinate`, longitude normalized.
#[must_use]
pub fn destination_point(from: &Coordinate, distance: Kilometres, bearing: Degrees) -> Coordinate {
    let phi1 = convert::degrees_to_radians(from.lat()).0;
    let lambda1 = convert::degrees_to_radians(from.lon()).0;
    let theta = convert::degrees_to_radians(bearing).0;
    let delta = distance.0 / EARTH_RADIUS.0;

    let delta_phi = delta * libm::cos(theta);
    let phi2 = phi1 + delta_phi;

    let dpsi = delta_psi(phi1, phi2);
    let q = if libm::fabs(dpsi) > MIN_DELTA_PSI {
        delta_phi / dpsi
    } else {
        libm::cos(phi1)
    };
    let delta_lambda = delta * libm::sin(theta) / q;

    Coordinate::new(
        convert::radians_to_degrees(Radians(phi2)),
        convert::normalize_longitude(convert::radians_to_degrees(Radians(
            lambda1 + delta_lambda,
        ))),
    )
}

/// Calculate the half-way position along the rhumb line between a pair of
/// positions.
///
/// The latitude is the arithmetic mean; the longitude interpolates between
/// the Mercator-projected latitudes (the Tooth-Hill construction). When
/// the latitudes are equal the projected interpolation is 0/0, so the
/// longitude falls back to the arithmetic mean.
/// * `from`, `to` - the positions.
///
/// returns the rhumb line midpoint `Coordinate`, longitude normalized.
#[must_use]
pub fn mid_point(from: &Coordinate, to: &Coordinate) -> Coordinate {
    let phi1 = convert::degrees_to_radians(from.lat()).0;
    let lambda1 = convert::degrees_to_radians(from.lon()).0;
    let phi2 = convert::degrees_to_radians(to.lat()).0;
    let lambda2 = convert::degrees_to_radians(to.lon()).0;

    let phi3 = (phi1 + phi2) / 2.0;

    let f1 = libm::tan(FRAC_PI_4 + phi1 / 2.0);
    let f2 = libm::tan(FRAC_PI_4 + phi2 / 2.0);
    let f3 = libm::tan(FRAC_PI_4 + phi3 / 2.0);

    let mut lambda3 = ((lambda2 - lambda1) * libm::log(f3) + lambda1 * libm::log(f2)
        - lambda2 * libm::log(f1))
        / libm::log(f2 / f1);

    if !lambda3.is_finite() {
        lambda3 = (lambda1 + lambda2) / 2.0;
    }

    Coordinate::new(
        convert::radians_to_degrees(Radians(phi3)),
        convert::normalize_longitude(convert::radians_to_degrees(Radians(lambda3))),
    )
}
