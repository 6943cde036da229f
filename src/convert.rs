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

//! The `convert` module contains the angle and unit conversion functions
//! shared by both calculation engines.

use angle_sc::{Degrees, Radians};

/// Convert an angle in `Degrees` to `Radians`.
#[must_use]
pub fn degrees_to_radians(degrees: Degrees) -> Radians {
    Radians(degrees.0.to_radians())
}

/// Convert an angle in `Radians` to `Degrees`.
/// The inverse of `degrees_to_radians` up to floating point rounding.
#[must_use]
pub fn radians_to_degrees(radians: Radians) -> Degrees {
    Degrees(radians.0.to_degrees())
}

/// Normalize a longitude into the canonical half open range (-180°, 180°].
///
/// Calculates `(λ + 540) mod 360 - 180` with a mathematical (non truncating)
/// modulo so that negative longitudes and multiple wraps are handled
/// uniformly. An exact -180° result is mapped to +180° to keep the range
/// half open.
/// * `longitude` - the longitude to normalize.
///
/// returns the equivalent longitude in (-180°, 180°].
#[must_use]
pub fn normalize_longitude(longitude: Degrees) -> Degrees {
    let wrapped = modulo(longitude.0 + 540.0, 360.0) - 180.0;
    if wrapped == -180.0 {
        Degrees(180.0)
    } else {
        Degrees(wrapped)
    }
}

/// Wrap a bearing into the compass range [0°, 360°).
///
/// Calculates `(θ + 360) mod 360` with a mathematical modulo.
/// * `bearing` - the bearing to wrap.
#[must_use]
pub fn wrap_360(bearing: Degrees) -> Degrees {
    Degrees(modulo(bearing.0 + 360.0, 360.0))
}

/// Mathematical modulo, result in [0, `rhs`) for positive `rhs`.
fn modulo(lhs: f64, rhs: f64) -> f64 {
    let remainder = lhs % rhs;
    if remainder < 0.0 {
        remainder + rhs
    } else {
        remainder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_degrees_to_radians() {
        assert_eq!(0.0, degrees_to_radians(Degrees(0.0)).0);
        assert!(is_within_tolerance(
            3.14159,
            degrees_to_radians(Degrees(180.0)).0,
            1e-5
        ));
        assert!(is_within_tolerance(
            4.71239,
            degrees_to_radians(Degrees(270.0)).0,
            1e-5
        ));
        assert!(is_within_tolerance(
            6.28319,
            degrees_to_radians(Degrees(360.0)).0,
            1e-5
        ));
        assert!(is_within_tolerance(
            -3.49066,
            degrees_to_radians(Degrees(-200.0)).0,
            1e-5
        ));
    }

    #[test]
    fn test_radians_to_degrees() {
        assert!(is_within_tolerance(
            180.0,
            radians_to_degrees(Radians(3.14159)).0,
            1e-3
        ));
        assert!(is_within_tolerance(
            270.0,
            radians_to_degrees(Radians(4.71239)).0,
            1e-3
        ));
        assert!(is_within_tolerance(
            -200.0,
            radians_to_degrees(Radians(-3.49066)).0,
            1e-3
        ));
    }

    #[test]
    fn test_conversion_round_trip() {
        for i in -180..180 {
            let degrees = Degrees(f64::from(i));
            let result = radians_to_degrees(degrees_to_radians(degrees));
            assert!(is_within_tolerance(degrees.0, result.0, 1e-12));
        }
    }

    #[test]
    fn test_normalize_longitude() {
        assert_eq!(0.0, normalize_longitude(Degrees(0.0)).0);
        assert_eq!(179.5, normalize_longitude(Degrees(179.5)).0);
        assert_eq!(-179.0, normalize_longitude(Degrees(181.0)).0);
        assert_eq!(179.0, normalize_longitude(Degrees(-181.0)).0);
        assert_eq!(-170.0, normalize_longitude(Degrees(190.0)).0);

        // the ±180° boundary is canonicalized to +180°
        assert_eq!(180.0, normalize_longitude(Degrees(180.0)).0);
        assert_eq!(180.0, normalize_longitude(Degrees(-180.0)).0);
        assert_eq!(180.0, normalize_longitude(Degrees(540.0)).0);
        assert_eq!(180.0, normalize_longitude(Degrees(-540.0)).0);
    }

    #[test]
    fn test_wrap_360() {
        assert_eq!(0.0, wrap_360(Degrees(0.0)).0);
        assert_eq!(0.0, wrap_360(Degrees(360.0)).0);
        assert_eq!(0.0, wrap_360(Degrees(720.0)).0);
        assert_eq!(315.0, wrap_360(Degrees(-45.0)).0);
        assert_eq!(320.0, wrap_360(Degrees(-400.0)).0);
        assert_eq!(156.5, wrap_360(Degrees(156.5)).0);
    }
}
